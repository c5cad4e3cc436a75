use shared::{
    validate_entry, AmountType, EntryForm, FormattedTransaction, PriceMode, TransactionId,
    TransactionStore, TransactionTableService,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_transactions";

#[derive(Clone, PartialEq)]
pub struct TransactionState {
    pub formatted_transactions: Vec<FormattedTransaction>,
    pub total_profit: f64,
    pub formatted_total_profit: String,
    pub total_profit_type: AmountType,

    // Entry form state
    pub product_name: String,
    pub weight: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub price_mode: PriceMode,
    pub form_error: Option<String>,
    pub form_success: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionsActions {
    pub add_transaction: Callback<()>,
    pub remove_transaction: Callback<TransactionId>,
    pub on_product_name_change: Callback<Event>,
    pub on_weight_change: Callback<Event>,
    pub on_purchase_price_change: Callback<Event>,
    pub on_selling_price_change: Callback<Event>,
    pub set_price_mode: Callback<PriceMode>,
}

pub struct UseTransactionsResult {
    pub state: TransactionState,
    pub actions: UseTransactionsActions,
}

/// Owns the transaction store and all entry form state, and exposes
/// the callbacks the components wire up to. Every action runs to
/// completion inside its event handler; the store is the only mutable
/// state and nothing else ever touches it.
#[hook]
pub fn use_transactions() -> UseTransactionsResult {
    let store = use_state(TransactionStore::new);

    let product_name = use_state(String::new);
    let weight = use_state(String::new);
    let purchase_price = use_state(String::new);
    let selling_price = use_state(String::new);
    let price_mode = use_state(|| PriceMode::PerUnit);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);

    // Validate the form, and on success move the candidate into the
    // store and reset the form. On failure only the error message
    // changes so the user can correct just the offending input.
    let add_transaction = {
        let store = store.clone();
        let product_name = product_name.clone();
        let weight = weight.clone();
        let purchase_price = purchase_price.clone();
        let selling_price = selling_price.clone();
        let price_mode = price_mode.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |_| {
            let form = EntryForm {
                product_name: (*product_name).clone(),
                weight: (*weight).clone(),
                purchase_price: (*purchase_price).clone(),
                selling_price: (*selling_price).clone(),
                price_mode: *price_mode,
            };

            match validate_entry(&form, &date_utils::now_rfc3339()) {
                Ok(candidate) => {
                    let mut updated = (*store).clone();
                    let stored = updated.add(candidate);
                    Logger::info_with_component(
                        COMPONENT,
                        &format!(
                            "recorded transaction {} ({}, profit {})",
                            stored.id, stored.product_name, stored.profit
                        ),
                    );
                    store.set(updated);

                    product_name.set(String::new());
                    weight.set(String::new());
                    purchase_price.set(String::new());
                    selling_price.set(String::new());
                    form_error.set(None);
                    form_success.set(true);

                    // Clear the success flash after 3 seconds
                    let form_success_clear = form_success.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        form_success_clear.set(false);
                    });
                }
                Err(error) => {
                    Logger::warn_with_component(COMPONENT, &format!("rejected entry: {}", error));
                    form_error.set(Some(error.to_string()));
                    form_success.set(false);
                }
            }
        })
    };

    let remove_transaction = {
        let store = store.clone();
        Callback::from(move |id: TransactionId| {
            let mut updated = (*store).clone();
            updated.remove(id);
            Logger::info_with_component(COMPONENT, &format!("removed transaction {}", id));
            store.set(updated);
        })
    };

    // Switching the price mode clears both price fields so totals
    // entered under one mode are never reinterpreted under the other.
    // Weight and product name stay as typed.
    let set_price_mode = {
        let price_mode = price_mode.clone();
        let purchase_price = purchase_price.clone();
        let selling_price = selling_price.clone();
        let form_error = form_error.clone();
        Callback::from(move |mode: PriceMode| {
            if mode != *price_mode {
                purchase_price.set(String::new());
                selling_price.set(String::new());
                form_error.set(None);
                price_mode.set(mode);
            }
        })
    };

    let on_product_name_change = input_change_handler(&product_name, &form_error);
    let on_weight_change = input_change_handler(&weight, &form_error);
    let on_purchase_price_change = input_change_handler(&purchase_price, &form_error);
    let on_selling_price_change = input_change_handler(&selling_price, &form_error);

    let table_service = TransactionTableService::new();
    let total_profit = store.total_profit();

    let state = TransactionState {
        formatted_transactions: table_service.format_transactions_for_table(store.transactions()),
        total_profit,
        formatted_total_profit: table_service.format_currency(total_profit),
        total_profit_type: table_service.classify_amount(total_profit),
        product_name: (*product_name).clone(),
        weight: (*weight).clone(),
        purchase_price: (*purchase_price).clone(),
        selling_price: (*selling_price).clone(),
        price_mode: *price_mode,
        form_error: (*form_error).clone(),
        form_success: *form_success,
    };

    let actions = UseTransactionsActions {
        add_transaction,
        remove_transaction,
        on_product_name_change,
        on_weight_change,
        on_purchase_price_change,
        on_selling_price_change,
        set_price_mode,
    };

    UseTransactionsResult { state, actions }
}

fn input_change_handler(
    field: &UseStateHandle<String>,
    form_error: &UseStateHandle<Option<String>>,
) -> Callback<Event> {
    let field = field.clone();
    let form_error = form_error.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
        form_error.set(None);
    })
}
