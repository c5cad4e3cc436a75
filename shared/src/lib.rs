//! Domain logic for the trade profit tracker.
//!
//! Everything the UI needs that is not rendering lives here: the
//! transaction model, the entry validator/calculator, the in-memory
//! transaction store, and the table formatting service. The crate is
//! pure Rust with no wasm dependencies so the whole core is testable
//! with plain `cargo test`.

pub mod entry;
pub mod store;
pub mod table;
pub mod transaction;

pub use entry::{validate_entry, EntryError, EntryForm, InvalidNumberReason};
pub use store::TransactionStore;
pub use table::{AmountType, FormattedTransaction, TableConfig, TransactionTableService};
pub use transaction::{NewTransaction, PriceMode, Transaction, TransactionId};
