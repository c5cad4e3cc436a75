use shared::{AmountType, FormattedTransaction, TransactionId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<FormattedTransaction>,
    pub on_delete: Callback<TransactionId>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Recorded Trades"}</h2>

            {if props.transactions.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{"No trades recorded yet."}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Product"}</th>
                                    <th>{"Weight (kg)"}</th>
                                    <th>{"Buy / kg"}</th>
                                    <th>{"Sell / kg"}</th>
                                    <th>{"Total Buy"}</th>
                                    <th>{"Total Sell"}</th>
                                    <th>{"Profit / Loss"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|transaction| {
                                    let profit_class = match transaction.profit_type {
                                        AmountType::Positive => "profit positive",
                                        AmountType::Negative => "profit negative",
                                        AmountType::Zero => "profit zero",
                                    };

                                    let on_delete = {
                                        let on_delete = props.on_delete.clone();
                                        let id = transaction.id;
                                        Callback::from(move |_| on_delete.emit(id))
                                    };

                                    html! {
                                        <tr key={transaction.id.to_string()}>
                                            <td class="date">{&transaction.formatted_date}</td>
                                            <td class="product">{&transaction.product_name}</td>
                                            <td>{&transaction.formatted_weight}</td>
                                            <td>{&transaction.formatted_purchase_per_kg}</td>
                                            <td>{&transaction.formatted_selling_per_kg}</td>
                                            <td>{&transaction.formatted_total_purchase}</td>
                                            <td>{&transaction.formatted_total_selling}</td>
                                            <td class={profit_class}>{&transaction.formatted_profit}</td>
                                            <td class="actions">
                                                <button
                                                    class="delete-btn"
                                                    onclick={on_delete}
                                                    title="Delete trade"
                                                >
                                                    <i class="fas fa-trash"></i>
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
