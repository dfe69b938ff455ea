//! Event Types
//!
//! The synthetic event record and its settlement status. Events are the
//! atomic units of a generation run: each captures one business action with
//! the account that performed it, when it happened, and how much value (if
//! any) it moved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Contribution, EventCategory};
use crate::user::UserProfile;

/// Settlement status of a transactional event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Completed,
    Pending,
    Failed,
    Reversed,
}

impl EventStatus {
    pub fn all() -> &'static [EventStatus] {
        &[
            EventStatus::Completed,
            EventStatus::Pending,
            EventStatus::Failed,
            EventStatus::Reversed,
        ]
    }

    /// Only settled events count toward the running supply.
    pub fn is_settled(self) -> bool {
        matches!(self, EventStatus::Completed)
    }

    /// The snake_case wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Completed => "completed",
            EventStatus::Pending => "pending",
            EventStatus::Failed => "failed",
            EventStatus::Reversed => "reversed",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete synthetic event.
///
/// Optional fields are populated by category: transactional events carry a
/// transaction id, blockchain, and amount; product attribution follows the
/// category's product rules; everything else stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (e.g., "evt_00042371")
    pub event_id: String,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The account that performed the action
    pub user: UserProfile,
    /// Primary event category
    pub category: EventCategory,
    /// Product the event is attributed to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Settlement chain for transactional events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<String>,
    /// Transaction identifier for transactional events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Non-negative value moved; present only when the category moves value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Settlement status; non-transactional events are always Completed
    pub status: EventStatus,
}

impl Event {
    /// Creates an event with no transactional fields set.
    pub fn new(
        event_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        user: UserProfile,
        category: EventCategory,
        status: EventStatus,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            timestamp,
            user,
            category,
            product: None,
            blockchain: None,
            transaction_id: None,
            amount: None,
            status,
        }
    }

    /// Sets the product attribution.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Sets the transactional fields.
    pub fn with_transaction(
        mut self,
        transaction_id: impl Into<String>,
        blockchain: impl Into<String>,
        amount: f64,
    ) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self.blockchain = Some(blockchain.into());
        self.amount = Some(amount);
        self
    }

    /// Signed contribution of this event to the running supply.
    ///
    /// Non-zero only for settled issuance events: a Completed mint credits
    /// its amount, a Completed burn debits it, everything else is zero
    /// regardless of any amount it carries.
    pub fn contribution(&self) -> f64 {
        if !self.status.is_settled() {
            return 0.0;
        }
        let amount = self.amount.unwrap_or(0.0);
        match self.category.contribution() {
            Contribution::Credit => amount,
            Contribution::Debit => -amount,
            Contribution::Neutral => 0.0,
        }
    }

    /// Serializes the event to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates an event ID with the given sequence number.
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{AcquisitionChannel, BusinessType, Region};
    use chrono::TimeZone;

    fn test_user() -> UserProfile {
        UserProfile::new(
            "user_1000",
            Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
            BusinessType::Fintech,
            Region::NorthAmerica,
            AcquisitionChannel::Organic,
        )
    }

    fn test_event(category: EventCategory, status: EventStatus, amount: Option<f64>) -> Event {
        let mut event = Event::new(
            "evt_00000001",
            Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
            test_user(),
            category,
            status,
        );
        if let Some(amount) = amount {
            event = event.with_transaction("txn_123456789", "ethereum", amount);
        }
        event
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&EventStatus::Completed).unwrap(), r#""completed""#);
        assert_eq!(serde_json::to_string(&EventStatus::Reversed).unwrap(), r#""reversed""#);
    }

    #[test]
    fn test_is_settled() {
        assert!(EventStatus::Completed.is_settled());
        assert!(!EventStatus::Pending.is_settled());
        assert!(!EventStatus::Failed.is_settled());
        assert!(!EventStatus::Reversed.is_settled());
    }

    #[test]
    fn test_mint_contribution_positive() {
        let event = test_event(EventCategory::Mint, EventStatus::Completed, Some(500.0));
        assert_eq!(event.contribution(), 500.0);
    }

    #[test]
    fn test_burn_contribution_negative() {
        let event = test_event(EventCategory::Burn, EventStatus::Completed, Some(200.0));
        assert_eq!(event.contribution(), -200.0);
    }

    #[test]
    fn test_neutral_category_never_contributes() {
        // Even a settled transfer with an amount contributes nothing.
        let event = test_event(EventCategory::TransferIn, EventStatus::Completed, Some(300.0));
        assert_eq!(event.contribution(), 0.0);
    }

    #[test]
    fn test_unsettled_issuance_never_contributes() {
        for status in [EventStatus::Pending, EventStatus::Failed, EventStatus::Reversed] {
            let mint = test_event(EventCategory::Mint, status, Some(500.0));
            let burn = test_event(EventCategory::Burn, status, Some(500.0));
            assert_eq!(mint.contribution(), 0.0, "{:?} mint must not contribute", status);
            assert_eq!(burn.contribution(), 0.0, "{:?} burn must not contribute", status);
        }
    }

    #[test]
    fn test_missing_amount_contributes_zero() {
        let event = test_event(EventCategory::Mint, EventStatus::Completed, None);
        assert_eq!(event.contribution(), 0.0);
    }

    #[test]
    fn test_event_jsonl_roundtrip() {
        let event = test_event(EventCategory::Burn, EventStatus::Completed, Some(1234.56));
        let line = event.to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("burn"));
        assert!(line.contains("txn_123456789"));

        let parsed = Event::from_jsonl(&line).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let event = test_event(EventCategory::ApiCallPayments, EventStatus::Completed, None);
        let json = event.to_jsonl().unwrap();
        assert!(!json.contains("transaction_id"));
        assert!(!json.contains("blockchain"));
        assert!(!json.contains("amount"));
    }

    #[test]
    fn test_generate_event_id() {
        assert_eq!(generate_event_id(1), "evt_00000001");
        assert_eq!(generate_event_id(42371), "evt_00042371");
    }
}
