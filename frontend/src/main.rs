use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::forms::TransactionForm;
use components::header::Header;
use components::transactions::TransactionTable;
use hooks::use_transactions::use_transactions;

#[function_component(App)]
fn app() -> Html {
    let transactions = use_transactions();
    let state = transactions.state;
    let actions = transactions.actions;

    html! {
        <>
            <Header
                formatted_total_profit={state.formatted_total_profit.clone()}
                total_profit_type={state.total_profit_type}
            />

            <main class="main">
                <div class="container">
                    <TransactionForm
                        product_name={state.product_name.clone()}
                        weight={state.weight.clone()}
                        purchase_price={state.purchase_price.clone()}
                        selling_price={state.selling_price.clone()}
                        price_mode={state.price_mode}
                        form_error={state.form_error.clone()}
                        form_success={state.form_success}
                        on_product_name_change={actions.on_product_name_change.clone()}
                        on_weight_change={actions.on_weight_change.clone()}
                        on_purchase_price_change={actions.on_purchase_price_change.clone()}
                        on_selling_price_change={actions.on_selling_price_change.clone()}
                        on_price_mode_change={actions.set_price_mode.clone()}
                        on_submit={actions.add_transaction.clone()}
                    />

                    <TransactionTable
                        transactions={state.formatted_transactions.clone()}
                        on_delete={actions.remove_transaction.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
