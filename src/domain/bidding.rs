use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lender accept/reject decision on an application, using the integer
/// codes of the persisted record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BidStatus {
    Rejected = 0,
    Accepted = 1,
}

impl From<BidStatus> for u8 {
    fn from(status: BidStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for BidStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rejected),
            1 => Ok(Self::Accepted),
            other => Err(format!("unknown bid status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    Floating,
}

/// One lender's response to one application. Owned by the parent
/// `LoanApplication`, never persisted standalone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiddingDetails {
    pub application_number: String,
    /// Assigned by the engine, only for accepted bids.
    pub bidding_number: u32,
    pub bidding_date: Option<DateTime<Utc>>,
    pub lender_id: u8,
    pub sanctioned_amount: Decimal,
    pub interest_type: Option<InterestType>,
    /// Interest rate in percent.
    pub interest_rate: Decimal,
    /// Tenure in years.
    pub tenure: u32,
    pub accept_status: BidStatus,
    pub rejection_reason: Option<String>,
    /// At most one quotation per application carries this flag.
    pub is_winning_bid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_status_codes() {
        assert_eq!(u8::from(BidStatus::Rejected), 0);
        assert_eq!(u8::from(BidStatus::Accepted), 1);
        assert!(BidStatus::try_from(2).is_err());
    }

    #[test]
    fn test_interest_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&InterestType::Simple).unwrap(),
            "\"simple\""
        );
        assert_eq!(
            serde_json::to_string(&InterestType::Floating).unwrap(),
            "\"floating\""
        );
    }
}
