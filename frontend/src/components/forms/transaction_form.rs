use shared::PriceMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    // Form state
    pub product_name: String,
    pub weight: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub price_mode: PriceMode,
    pub form_error: Option<String>,
    pub form_success: bool,

    // Event handlers
    pub on_product_name_change: Callback<Event>,
    pub on_weight_change: Callback<Event>,
    pub on_purchase_price_change: Callback<Event>,
    pub on_selling_price_change: Callback<Event>,
    pub on_price_mode_change: Callback<PriceMode>,
    pub on_submit: Callback<()>,
}

/// Field labels and placeholders follow the selected price mode so the
/// user always knows which unit they are typing in.
fn price_field_labels(mode: PriceMode) -> (&'static str, &'static str) {
    match mode {
        PriceMode::PerUnit => (
            "Purchase price per kg (Toman)",
            "Selling price per kg (Toman)",
        ),
        PriceMode::Aggregate => ("Total purchase price (Toman)", "Total selling price (Toman)"),
    }
}

fn price_field_placeholders(mode: PriceMode) -> (&'static str, &'static str) {
    match mode {
        PriceMode::PerUnit => ("e.g. 5,000", "e.g. 7,000"),
        PriceMode::Aggregate => ("e.g. 500,000", "e.g. 700,000"),
    }
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let (purchase_label, selling_label) = price_field_labels(props.price_mode);
    let (purchase_placeholder, selling_placeholder) = price_field_placeholders(props.price_mode);

    let mode_button_class = |active: bool| {
        classes!(
            "price-mode-btn",
            if active { Some("active") } else { None }
        )
    };

    html! {
        <section class="entry-form-section">
            <h2>{"Record a New Trade"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if props.form_success {
                html! {
                    <div class="form-message success">
                        {"Trade recorded!"}
                    </div>
                }
            } else { html! {} }}

            <form class="entry-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="product-name">{"Product"}</label>
                    <input
                        type="text"
                        id="product-name"
                        placeholder="e.g. Apple"
                        value={props.product_name.clone()}
                        onchange={props.on_product_name_change.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="weight">{"Weight (kilograms)"}</label>
                    <input
                        type="number"
                        id="weight"
                        placeholder="e.g. 100"
                        value={props.weight.clone()}
                        onchange={props.on_weight_change.clone()}
                    />
                </div>

                <div class="form-group">
                    <label>{"Price entry mode"}</label>
                    <div class="price-mode-toggle">
                        <button
                            type="button"
                            class={mode_button_class(props.price_mode == PriceMode::PerUnit)}
                            onclick={
                                let on_price_mode_change = props.on_price_mode_change.clone();
                                Callback::from(move |_| on_price_mode_change.emit(PriceMode::PerUnit))
                            }
                        >
                            {"Price per kg"}
                        </button>
                        <button
                            type="button"
                            class={mode_button_class(props.price_mode == PriceMode::Aggregate)}
                            onclick={
                                let on_price_mode_change = props.on_price_mode_change.clone();
                                Callback::from(move |_| on_price_mode_change.emit(PriceMode::Aggregate))
                            }
                        >
                            {"Total price"}
                        </button>
                    </div>
                </div>

                <div class="form-group">
                    <label for="purchase-price">{purchase_label}</label>
                    <input
                        type="number"
                        id="purchase-price"
                        placeholder={purchase_placeholder}
                        value={props.purchase_price.clone()}
                        onchange={props.on_purchase_price_change.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="selling-price">{selling_label}</label>
                    <input
                        type="number"
                        id="selling-price"
                        placeholder={selling_placeholder}
                        value={props.selling_price.clone()}
                        onchange={props.on_selling_price_change.clone()}
                    />
                </div>

                <button type="submit" class="btn btn-primary submit-trade-btn">
                    {"Record Trade"}
                </button>
            </form>
        </section>
    }
}
