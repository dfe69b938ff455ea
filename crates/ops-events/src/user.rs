//! Synthetic User Profiles
//!
//! Every generated event is attributed to a fabricated business account.
//! The profile is embedded in the event record so the output table is
//! self-contained (no join against a separate users table).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of business operating the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Ecommerce,
    Fintech,
    CryptoExchange,
    Gaming,
    Saas,
    CreatorEconomy,
    InstitutionalInvestor,
    IndividualDeveloper,
}

impl BusinessType {
    pub fn all() -> &'static [BusinessType] {
        &[
            BusinessType::Ecommerce,
            BusinessType::Fintech,
            BusinessType::CryptoExchange,
            BusinessType::Gaming,
            BusinessType::Saas,
            BusinessType::CreatorEconomy,
            BusinessType::InstitutionalInvestor,
            BusinessType::IndividualDeveloper,
        ]
    }

    /// The snake_case wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessType::Ecommerce => "ecommerce",
            BusinessType::Fintech => "fintech",
            BusinessType::CryptoExchange => "crypto_exchange",
            BusinessType::Gaming => "gaming",
            BusinessType::Saas => "saas",
            BusinessType::CreatorEconomy => "creator_economy",
            BusinessType::InstitutionalInvestor => "institutional_investor",
            BusinessType::IndividualDeveloper => "individual_developer",
        }
    }

    /// Institutional accounts move much larger amounts than retail ones.
    pub fn is_institutional(self) -> bool {
        matches!(
            self,
            BusinessType::InstitutionalInvestor | BusinessType::CryptoExchange
        )
    }
}

/// Operating region of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
    Mea,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[
            Region::NorthAmerica,
            Region::Europe,
            Region::AsiaPacific,
            Region::LatinAmerica,
            Region::Mea,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::NorthAmerica => "north_america",
            Region::Europe => "europe",
            Region::AsiaPacific => "asia_pacific",
            Region::LatinAmerica => "latin_america",
            Region::Mea => "mea",
        }
    }
}

/// How the account was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionChannel {
    Organic,
    PaidSearch,
    ReferralProgram,
    DirectSales,
    Partnership,
    ContentMarketing,
}

impl AcquisitionChannel {
    pub fn all() -> &'static [AcquisitionChannel] {
        &[
            AcquisitionChannel::Organic,
            AcquisitionChannel::PaidSearch,
            AcquisitionChannel::ReferralProgram,
            AcquisitionChannel::DirectSales,
            AcquisitionChannel::Partnership,
            AcquisitionChannel::ContentMarketing,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AcquisitionChannel::Organic => "organic",
            AcquisitionChannel::PaidSearch => "paid_search",
            AcquisitionChannel::ReferralProgram => "referral_program",
            AcquisitionChannel::DirectSales => "direct_sales",
            AcquisitionChannel::Partnership => "partnership",
            AcquisitionChannel::ContentMarketing => "content_marketing",
        }
    }
}

/// A fabricated business account.
///
/// Profiles are created once per run and cloned into each event they emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier (e.g., "user_1042")
    pub user_id: String,
    /// When the account joined; events are nudged after this instant
    pub join_date: DateTime<Utc>,
    pub business_type: BusinessType,
    pub region: Region,
    pub acquisition_channel: AcquisitionChannel,
}

impl UserProfile {
    pub fn new(
        user_id: impl Into<String>,
        join_date: DateTime<Utc>,
        business_type: BusinessType,
        region: Region,
        acquisition_channel: AcquisitionChannel,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            join_date,
            business_type,
            region,
            acquisition_channel,
        }
    }
}

/// Generates a user ID with the given sequence number.
///
/// Numbering starts at 1000 so ids sort lexicographically for realistic
/// pool sizes.
pub fn generate_user_id(sequence: u64) -> String {
    format!("user_{}", 1000 + sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_business_type_serialization() {
        assert_eq!(
            serde_json::to_string(&BusinessType::CryptoExchange).unwrap(),
            r#""crypto_exchange""#
        );
        assert_eq!(
            serde_json::to_string(&BusinessType::Ecommerce).unwrap(),
            r#""ecommerce""#
        );
    }

    #[test]
    fn test_is_institutional() {
        assert!(BusinessType::InstitutionalInvestor.is_institutional());
        assert!(BusinessType::CryptoExchange.is_institutional());
        assert!(!BusinessType::Ecommerce.is_institutional());
        assert!(!BusinessType::Saas.is_institutional());
    }

    #[test]
    fn test_all_variant_counts() {
        assert_eq!(BusinessType::all().len(), 8);
        assert_eq!(Region::all().len(), 5);
        assert_eq!(AcquisitionChannel::all().len(), 6);
    }

    #[test]
    fn test_generate_user_id() {
        assert_eq!(generate_user_id(0), "user_1000");
        assert_eq!(generate_user_id(42), "user_1042");
    }

    #[test]
    fn test_profile_serialization_roundtrip() {
        let profile = UserProfile::new(
            "user_1000",
            Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap(),
            BusinessType::Fintech,
            Region::Europe,
            AcquisitionChannel::ReferralProgram,
        );

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("user_1000"));
        assert!(json.contains("fintech"));
        assert!(json.contains("referral_program"));

        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
