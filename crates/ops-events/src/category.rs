//! Event Categories
//!
//! The fixed set of business-operations event categories and the metadata
//! that drives per-category generation: contribution sign, whether the
//! category moves value on-chain, and product associations. Categories are
//! data, not control flow — adding one means extending these tables.

use serde::{Deserialize, Serialize};

/// Blockchains a transactional event may settle on.
pub const BLOCKCHAINS: &[&str] = &[
    "ethereum",
    "solana",
    "avalanche",
    "tron",
    "polygon",
    "stellar",
    "algorand",
];

/// Product names offered at business signup.
pub const SIGNUP_PRODUCTS: &[&str] = &[
    "Payments API",
    "Accounts API",
    "Stablecoin Platform",
    "Web3 Services",
    "Cross-Chain Transfer",
    "Yield Product",
];

/// Product names an existing business may use a feature of.
pub const FEATURE_PRODUCTS: &[&str] = &[
    "Payments API",
    "Accounts API",
    "Stablecoin Platform",
    "Web3 Services",
    "Issuance Desk",
    "Cross-Chain Transfer",
    "Yield Product",
];

/// Direction of an event's contribution to the running token supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contribution {
    /// Adds the event amount to the supply (issuance).
    Credit,
    /// Subtracts the event amount from the supply (redemption).
    Debit,
    /// Leaves the supply untouched.
    Neutral,
}

/// Primary event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    PaymentProcessed,
    TransferOut,
    TransferIn,
    Mint,
    Burn,
    ApiCallPayments,
    ApiCallAccounts,
    SignupBusiness,
    FeatureUsed,
    AccountDeposit,
    AccountWithdrawal,
    CrossChainInitiated,
    CrossChainCompleted,
}

impl EventCategory {
    /// Returns all category variants, in canonical order.
    ///
    /// The weighted category draw walks this slice, so its order is part of
    /// the deterministic-output contract.
    pub fn all() -> &'static [EventCategory] {
        &[
            EventCategory::PaymentProcessed,
            EventCategory::TransferOut,
            EventCategory::TransferIn,
            EventCategory::Mint,
            EventCategory::Burn,
            EventCategory::ApiCallPayments,
            EventCategory::ApiCallAccounts,
            EventCategory::SignupBusiness,
            EventCategory::FeatureUsed,
            EventCategory::AccountDeposit,
            EventCategory::AccountWithdrawal,
            EventCategory::CrossChainInitiated,
            EventCategory::CrossChainCompleted,
        ]
    }

    /// How a settled event of this category moves the running supply.
    pub fn contribution(self) -> Contribution {
        match self {
            EventCategory::Mint => Contribution::Credit,
            EventCategory::Burn => Contribution::Debit,
            _ => Contribution::Neutral,
        }
    }

    /// True for categories that represent value movement.
    ///
    /// Transactional events carry a transaction id, settle on a blockchain,
    /// get a weighted status draw, and carry an amount.
    pub fn moves_value(self) -> bool {
        matches!(
            self,
            EventCategory::PaymentProcessed
                | EventCategory::TransferOut
                | EventCategory::TransferIn
                | EventCategory::Mint
                | EventCategory::Burn
                | EventCategory::AccountDeposit
                | EventCategory::AccountWithdrawal
                | EventCategory::CrossChainInitiated
                | EventCategory::CrossChainCompleted
        )
    }

    /// True for issuance events, which draw from their own amount ranges.
    pub fn is_issuance(self) -> bool {
        matches!(self, EventCategory::Mint | EventCategory::Burn)
    }

    /// The snake_case wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::PaymentProcessed => "payment_processed",
            EventCategory::TransferOut => "transfer_out",
            EventCategory::TransferIn => "transfer_in",
            EventCategory::Mint => "mint",
            EventCategory::Burn => "burn",
            EventCategory::ApiCallPayments => "api_call_payments",
            EventCategory::ApiCallAccounts => "api_call_accounts",
            EventCategory::SignupBusiness => "signup_business",
            EventCategory::FeatureUsed => "feature_used",
            EventCategory::AccountDeposit => "account_deposit",
            EventCategory::AccountWithdrawal => "account_withdrawal",
            EventCategory::CrossChainInitiated => "cross_chain_initiated",
            EventCategory::CrossChainCompleted => "cross_chain_completed",
        }
    }

    /// The product this category is always attributed to, if it has one.
    ///
    /// Signup and feature-usage events pick from a pool instead
    /// ([`SIGNUP_PRODUCTS`], [`FEATURE_PRODUCTS`]); plain value movements
    /// have no product attribution at all.
    pub fn fixed_product(self) -> Option<&'static str> {
        match self {
            EventCategory::ApiCallPayments => Some("Payments API"),
            EventCategory::ApiCallAccounts => Some("Accounts API"),
            EventCategory::Mint | EventCategory::Burn => Some("Issuance Desk"),
            EventCategory::CrossChainInitiated | EventCategory::CrossChainCompleted => {
                Some("Cross-Chain Transfer")
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_name() {
        for category in EventCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&EventCategory::PaymentProcessed).unwrap(),
            r#""payment_processed""#
        );
        assert_eq!(serde_json::to_string(&EventCategory::Mint).unwrap(), r#""mint""#);
        assert_eq!(serde_json::to_string(&EventCategory::Burn).unwrap(), r#""burn""#);
        assert_eq!(
            serde_json::to_string(&EventCategory::CrossChainInitiated).unwrap(),
            r#""cross_chain_initiated""#
        );
    }

    #[test]
    fn test_category_deserialization() {
        assert_eq!(
            serde_json::from_str::<EventCategory>(r#""transfer_in""#).unwrap(),
            EventCategory::TransferIn
        );
        assert_eq!(
            serde_json::from_str::<EventCategory>(r#""signup_business""#).unwrap(),
            EventCategory::SignupBusiness
        );
    }

    #[test]
    fn test_all_variants() {
        let all = EventCategory::all();
        assert_eq!(all.len(), 13);
        assert!(all.contains(&EventCategory::Mint));
        assert!(all.contains(&EventCategory::FeatureUsed));
    }

    #[test]
    fn test_contribution_signs() {
        assert_eq!(EventCategory::Mint.contribution(), Contribution::Credit);
        assert_eq!(EventCategory::Burn.contribution(), Contribution::Debit);
        for category in EventCategory::all() {
            if !category.is_issuance() {
                assert_eq!(category.contribution(), Contribution::Neutral);
            }
        }
    }

    #[test]
    fn test_moves_value() {
        assert!(EventCategory::PaymentProcessed.moves_value());
        assert!(EventCategory::Mint.moves_value());
        assert!(EventCategory::CrossChainCompleted.moves_value());
        assert!(!EventCategory::ApiCallPayments.moves_value());
        assert!(!EventCategory::SignupBusiness.moves_value());
        assert!(!EventCategory::FeatureUsed.moves_value());
    }

    #[test]
    fn test_fixed_products() {
        assert_eq!(EventCategory::Mint.fixed_product(), Some("Issuance Desk"));
        assert_eq!(EventCategory::ApiCallPayments.fixed_product(), Some("Payments API"));
        assert_eq!(EventCategory::TransferOut.fixed_product(), None);
        assert_eq!(EventCategory::SignupBusiness.fixed_product(), None);
    }

    #[test]
    fn test_signup_pool_excludes_issuance_desk() {
        assert!(!SIGNUP_PRODUCTS.contains(&"Issuance Desk"));
        assert!(FEATURE_PRODUCTS.contains(&"Issuance Desk"));
    }
}
