use crate::error::BillingError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Represents a positive monetary amount for bill payments.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for monetary values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, BillingError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(BillingError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BillingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A utility-bill payment request flowing through the scheduling engine.
///
/// A request is owned by exactly one container at a time: the general pool, the
/// urgent pool, or the transaction history. Ownership transfers are moves.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BillRequest {
    /// Caller-supplied identifier. Uniqueness is assumed, not enforced.
    pub id: String,
    /// Free-form utility category label (e.g. "electricity").
    #[serde(rename = "type")]
    pub utility: String,
    pub amount: Amount,
    /// Set when the request enters the transaction history, cleared on undo.
    #[serde(rename = "timestamp")]
    pub processed_at: Option<DateTime<Utc>>,
    /// Set at creation and never mutated afterwards.
    #[serde(rename = "urgency", serialize_with = "serialize_urgency")]
    pub urgent: bool,
    // Frozen at construction so an enqueued request's ordering is stable.
    #[serde(skip)]
    priority: u8,
}

fn serialize_urgency<S>(urgent: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *urgent { "Urgent" } else { "Normal" })
}

impl BillRequest {
    pub fn new(id: impl Into<String>, utility: impl Into<String>, amount: Amount, urgent: bool) -> Self {
        Self {
            id: id.into(),
            utility: utility.into(),
            amount,
            processed_at: None,
            urgent,
            priority: if urgent { 1 } else { 2 },
        }
    }

    /// Scheduling priority derived from the urgency flag. Lower sorts first.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Stamps the request as processed at the given instant.
    pub fn mark_processed(&mut self, at: DateTime<Utc>) {
        self.processed_at = Some(at);
    }

    /// Reverts the request to pending status.
    pub fn clear_processed(&mut self) {
        self.processed_at = None;
    }
}
