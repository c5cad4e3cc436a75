//! Table formatting for the transaction list.
//!
//! Converts raw transactions into formatted, user-friendly rows:
//! grouped number formatting in a single fixed locale, profit
//! classification for styling, and date formatting for the recorded
//! timestamp. Pure presentation logic, independent of any UI
//! framework; none of it affects the stored values.

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionId};

/// Configuration for transaction table display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Currency label appended to money amounts, e.g. "Toman"
    pub currency_label: String,
    /// Maximum fractional digits; trailing zeros are trimmed
    pub decimal_places: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            currency_label: "Toman".to_string(),
            decimal_places: 2,
        }
    }
}

/// Sign of a profit figure, for styling purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// A transaction prepared for table display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: TransactionId,
    pub product_name: String,
    pub formatted_date: String,
    pub formatted_weight: String,
    pub formatted_purchase_per_kg: String,
    pub formatted_selling_per_kg: String,
    pub formatted_total_purchase: String,
    pub formatted_total_selling: String,
    pub formatted_profit: String,
    pub profit_type: AmountType,
    pub raw_profit: f64,
}

/// Service that handles all table display formatting
#[derive(Debug, Clone, Default)]
pub struct TransactionTableService {
    config: TableConfig,
}

impl TransactionTableService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self { config }
    }

    /// Format a list of transactions for table display
    pub fn format_transactions_for_table(
        &self,
        transactions: &[Transaction],
    ) -> Vec<FormattedTransaction> {
        transactions
            .iter()
            .map(|tx| self.format_single_transaction(tx))
            .collect()
    }

    /// Format a single transaction for display
    pub fn format_single_transaction(&self, transaction: &Transaction) -> FormattedTransaction {
        FormattedTransaction {
            id: transaction.id,
            product_name: transaction.product_name.clone(),
            formatted_date: self.format_date(&transaction.recorded_at),
            formatted_weight: self.format_number(transaction.weight),
            formatted_purchase_per_kg: self.format_number(transaction.purchase_price_per_kg),
            formatted_selling_per_kg: self.format_number(transaction.selling_price_per_kg),
            formatted_total_purchase: self.format_number(transaction.total_purchase_price),
            formatted_total_selling: self.format_number(transaction.total_selling_price),
            formatted_profit: self.format_number(transaction.profit),
            profit_type: self.classify_amount(transaction.profit),
            raw_profit: transaction.profit,
        }
    }

    /// Format a number with digit grouping: "," every three integer
    /// digits, fractional part trimmed of trailing zeros.
    pub fn format_number(&self, value: f64) -> String {
        let rounded = format!("{:.*}", self.config.decimal_places as usize, value.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (rounded.as_str(), ""),
        };

        let mut formatted = String::new();
        // A value that rounds to zero never shows a sign
        if value < 0.0 && !(int_part == "0" && frac_part.is_empty()) {
            formatted.push('-');
        }
        formatted.push_str(&group_digits(int_part));
        if !frac_part.is_empty() {
            formatted.push('.');
            formatted.push_str(frac_part);
        }
        formatted
    }

    /// Format a money amount with the configured currency label
    pub fn format_currency(&self, value: f64) -> String {
        format!("{} {}", self.format_number(value), self.config.currency_label)
    }

    /// Classify amount sign for styling purposes
    pub fn classify_amount(&self, amount: f64) -> AmountType {
        if amount > 0.0 {
            AmountType::Positive
        } else if amount < 0.0 {
            AmountType::Negative
        } else {
            AmountType::Zero
        }
    }

    /// Get CSS class name for profit styling
    pub fn profit_css_class(&self, amount: f64) -> &'static str {
        match self.classify_amount(amount) {
            AmountType::Positive => "profit positive",
            AmountType::Negative => "profit negative",
            AmountType::Zero => "profit zero",
        }
    }

    /// Format an RFC 3339 timestamp as "June 13, 2025"; falls back to
    /// the original string when it does not parse.
    pub fn format_date(&self, rfc3339_date: &str) -> String {
        if let Some((year, month, day)) = parse_date(rfc3339_date) {
            format!("{} {}, {}", month_name(month), day, year)
        } else {
            rfc3339_date.to_string()
        }
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn parse_date(date_str: &str) -> Option<(u32, u32, u32)> {
    let date_part = date_str.split('T').next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() == 3 {
        if let (Ok(year), Ok(month), Ok(day)) = (
            parts[0].parse::<u32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) {
            return Some((year, month, day));
        }
    }
    None
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}
