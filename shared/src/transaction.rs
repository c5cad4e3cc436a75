use serde::{Deserialize, Serialize};

/// Session-unique transaction identifier, assigned by the store from a
/// monotonically increasing counter.
pub type TransactionId = u64;

/// A recorded buy/sell trade of a bulk good.
///
/// Immutable once created: the three derived price fields are computed
/// when the candidate is built and never touched again, so they stay
/// algebraically consistent with `weight` and the per-kilogram prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Non-empty product label
    pub product_name: String,
    /// Weight in kilograms, always positive
    pub weight: f64,
    /// Purchase price normalized to a per-kilogram basis
    pub purchase_price_per_kg: f64,
    /// Selling price normalized to a per-kilogram basis
    pub selling_price_per_kg: f64,
    /// `purchase_price_per_kg * weight`
    pub total_purchase_price: f64,
    /// `selling_price_per_kg * weight`
    pub total_selling_price: f64,
    /// `total_selling_price - total_purchase_price`; may be negative
    pub profit: f64,
    /// When the entry was recorded (RFC 3339)
    pub recorded_at: String,
}

/// How the user expressed the two price fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceMode {
    /// Prices are already per kilogram
    PerUnit,
    /// Prices are totals for the entered weight and get divided by it
    Aggregate,
}

impl Default for PriceMode {
    fn default() -> Self {
        PriceMode::PerUnit
    }
}

/// A fully computed transaction candidate that has not been stored yet.
///
/// Produced exclusively by the entry validator; the store assigns the
/// id when it accepts the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub product_name: String,
    pub weight: f64,
    pub purchase_price_per_kg: f64,
    pub selling_price_per_kg: f64,
    pub total_purchase_price: f64,
    pub total_selling_price: f64,
    pub profit: f64,
    pub recorded_at: String,
}

impl NewTransaction {
    /// Build a candidate from validated base fields, computing the
    /// derived totals and profit.
    pub fn compute(
        product_name: String,
        weight: f64,
        purchase_price_per_kg: f64,
        selling_price_per_kg: f64,
        recorded_at: String,
    ) -> Self {
        let total_purchase_price = purchase_price_per_kg * weight;
        let total_selling_price = selling_price_per_kg * weight;
        let profit = total_selling_price - total_purchase_price;

        Self {
            product_name,
            weight,
            purchase_price_per_kg,
            selling_price_per_kg,
            total_purchase_price,
            total_selling_price,
            profit,
            recorded_at,
        }
    }

    /// Attach a store-assigned id, producing the stored record.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            product_name: self.product_name,
            weight: self.weight,
            purchase_price_per_kg: self.purchase_price_per_kg,
            selling_price_per_kg: self.selling_price_per_kg,
            total_purchase_price: self.total_purchase_price,
            total_selling_price: self.total_selling_price,
            profit: self.profit,
            recorded_at: self.recorded_at,
        }
    }
}
