//! In-memory transaction store.
//!
//! Holds the ordered sequence of recorded transactions (newest first)
//! and derives the running total profit. The store is an explicitly
//! owned value, constructed fresh per page session or per test; it is
//! the only mutable state in the system and never fails: its inputs
//! are already-validated candidates and ids that may legitimately not
//! exist.

use crate::transaction::{NewTransaction, Transaction, TransactionId};

#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id to the candidate, prepend it so the sequence
    /// stays newest-first, and return the stored record.
    pub fn add(&mut self, candidate: NewTransaction) -> &Transaction {
        self.next_id += 1;
        let transaction = candidate.with_id(self.next_id);
        self.transactions.insert(0, transaction);
        &self.transactions[0]
    }

    /// Remove the transaction with the matching id. A no-op when no
    /// such id exists.
    pub fn remove(&mut self, id: TransactionId) {
        self.transactions.retain(|t| t.id != id);
    }

    /// Running total profit over all held transactions; `0` when
    /// empty. Recomputed on every call, so it can never go stale.
    pub fn total_profit(&self) -> f64 {
        self.transactions.iter().map(|t| t.profit).sum()
    }

    /// The held transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::NewTransaction;

    fn candidate(product: &str, weight: f64, buy_per_kg: f64, sell_per_kg: f64) -> NewTransaction {
        NewTransaction::compute(
            product.to_string(),
            weight,
            buy_per_kg,
            sell_per_kg,
            "2025-06-13T09:00:00Z".to_string(),
        )
    }

    #[test]
    fn test_add_assigns_unique_increasing_ids() {
        let mut store = TransactionStore::new();

        let first = store.add(candidate("Apple", 100.0, 5000.0, 7000.0)).id;
        let second = store.add(candidate("Orange", 50.0, 4000.0, 4500.0)).id;
        let third = store.add(candidate("Apple", 10.0, 5000.0, 5000.0)).id;

        assert!(first < second && second < third);
    }

    #[test]
    fn test_newest_transaction_comes_first() {
        let mut store = TransactionStore::new();
        store.add(candidate("Apple", 100.0, 5000.0, 7000.0));
        store.add(candidate("Orange", 50.0, 4000.0, 4500.0));

        let products: Vec<&str> = store
            .transactions()
            .iter()
            .map(|t| t.product_name.as_str())
            .collect();
        assert_eq!(products, vec!["Orange", "Apple"]);
    }

    #[test]
    fn test_total_profit_tracks_adds_and_removes() {
        let mut store = TransactionStore::new();
        assert_eq!(store.total_profit(), 0.0);

        let gain = store.add(candidate("Apple", 100.0, 5000.0, 7000.0)).id;
        assert_eq!(store.total_profit(), 200_000.0);

        let loss = store.add(candidate("Onion", 50.0, 3000.0, 2500.0)).id;
        assert_eq!(store.total_profit(), 175_000.0);

        store.remove(gain);
        assert_eq!(store.total_profit(), -25_000.0);

        store.remove(loss);
        assert!(store.is_empty());
        assert_eq!(store.total_profit(), 0.0);
    }

    #[test]
    fn test_total_profit_equals_sum_of_held_profits() {
        let mut store = TransactionStore::new();
        store.add(candidate("Apple", 100.0, 5000.0, 7000.0));
        store.add(candidate("Orange", 12.5, 4000.0, 4600.0));
        store.add(candidate("Onion", 50.0, 3000.0, 2500.0));

        let expected: f64 = store.transactions().iter().map(|t| t.profit).sum();
        assert_eq!(store.total_profit(), expected);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut store = TransactionStore::new();
        store.add(candidate("Apple", 100.0, 5000.0, 7000.0));
        let before: Vec<TransactionId> = store.transactions().iter().map(|t| t.id).collect();
        let total_before = store.total_profit();

        store.remove(9999);

        let after: Vec<TransactionId> = store.transactions().iter().map(|t| t.id).collect();
        assert_eq!(before, after);
        assert_eq!(store.total_profit(), total_before);
    }

    #[test]
    fn test_remove_middle_transaction() {
        let mut store = TransactionStore::new();
        let a = store.add(candidate("A", 1.0, 1.0, 2.0)).id;
        let b = store.add(candidate("B", 1.0, 1.0, 2.0)).id;
        let c = store.add(candidate("C", 1.0, 1.0, 2.0)).id;

        store.remove(b);

        let ids: Vec<TransactionId> = store.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c, a]);
        assert_eq!(store.len(), 2);
    }
}
