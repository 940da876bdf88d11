use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Cents, format_cents};

pub type TransactionId = Uuid;

/// Largest amount a single expense may carry (1000.00).
pub const MAX_AMOUNT_CENTS: Cents = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Travel,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Bills => "bills",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "travel" => Some(Category::Travel),
            "bills" => Some(Category::Bills),
            "entertainment" => Some(Category::Entertainment),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Amount must be positive, got {0} cents")]
    NonPositiveAmount(Cents),

    #[error("Amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge { amount: String, max: String },
}

/// A single recorded expense.
/// Transactions are immutable: every field is fixed at construction.
/// Equality covers the generated id, so only clones of the same
/// transaction compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount_cents: Cents,
    category: Category,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with the current time.
    pub fn new(amount_cents: Cents, category: Category) -> Result<Self, TransactionError> {
        Self::at(amount_cents, category, Utc::now())
    }

    /// Create a transaction for the given point in time.
    pub fn at(
        amount_cents: Cents,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, TransactionError> {
        validate_amount(amount_cents)?;
        Ok(Self {
            id: Uuid::new_v4(),
            amount_cents,
            category,
            timestamp,
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            format_cents(self.amount_cents),
            self.category,
            self.timestamp.format("%Y-%m-%d %H:%M")
        )
    }
}

fn validate_amount(amount_cents: Cents) -> Result<(), TransactionError> {
    if amount_cents <= 0 {
        return Err(TransactionError::NonPositiveAmount(amount_cents));
    }
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(TransactionError::AmountTooLarge {
            amount: format_cents(amount_cents),
            max: format_cents(MAX_AMOUNT_CENTS),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_create_transaction() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let transaction = Transaction::at(4250, Category::Food, timestamp).unwrap();

        assert_eq!(transaction.amount_cents(), 4250);
        assert_eq!(transaction.category(), Category::Food);
        assert_eq!(transaction.timestamp(), timestamp);
        assert_eq!(transaction.to_string(), "42.50 food (2024-03-01 12:30)");
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert_eq!(
            Transaction::new(0, Category::Bills),
            Err(TransactionError::NonPositiveAmount(0))
        );
        assert!(Transaction::new(-100, Category::Bills).is_err());
    }

    #[test]
    fn test_amount_upper_bound() {
        assert!(Transaction::new(MAX_AMOUNT_CENTS, Category::Travel).is_ok());
        assert!(matches!(
            Transaction::new(MAX_AMOUNT_CENTS + 1, Category::Travel),
            Err(TransactionError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_clones_are_equal_but_separate_entries_are_not() {
        let timestamp = Utc::now();
        let first = Transaction::at(1000, Category::Other, timestamp).unwrap();
        let second = Transaction::at(1000, Category::Other, timestamp).unwrap();

        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn test_category_parsing() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str(" Food "), Some(Category::Food));
        assert_eq!(Category::from_str("groceries"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_category() {
        let transaction = Transaction::new(500, Category::Entertainment).unwrap();
        let json = serde_json::to_string(&transaction).unwrap();

        assert!(json.contains("\"category\":\"entertainment\""));
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, transaction);
    }
}
