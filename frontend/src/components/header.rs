use shared::AmountType;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub formatted_total_profit: String,
    pub total_profit_type: AmountType,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let total_class = match props.total_profit_type {
        AmountType::Positive => "total-profit-amount positive",
        AmountType::Negative => "total-profit-amount negative",
        AmountType::Zero => "total-profit-amount zero",
    };

    html! {
        <header class="header">
            <div class="container">
                <div class="header-titles">
                    <h1>{"Trade Profit Tracker"}</h1>
                    <p class="tagline">{"Track the profit and loss of your trades with ease"}</p>
                </div>
                <div class="total-profit-display">
                    <span class="total-profit-label">{"Total Profit:"}</span>
                    <span class={total_class}>{&props.formatted_total_profit}</span>
                </div>
            </div>
        </header>
    }
}
