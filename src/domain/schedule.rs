use crate::domain::application::TransactionMetadata;
use crate::domain::bidding::BiddingDetails;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Repayment status of a single installment, using the integer codes of
/// the persisted record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RepaymentStatus {
    NotDemanded = 0,
    Demanded = 1,
    Recovered = 2,
    Missed = 3,
}

impl From<RepaymentStatus> for u8 {
    fn from(status: RepaymentStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for RepaymentStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotDemanded),
            1 => Ok(Self::Demanded),
            2 => Ok(Self::Recovered),
            3 => Ok(Self::Missed),
            other => Err(format!("unknown repayment status: {other}")),
        }
    }
}

/// One scheduled installment. Created in bulk at schedule generation,
/// individually mutated by payment-status updates, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetail {
    /// 1-based, unique within a schedule.
    pub installment_number: u32,
    pub principal_amount: Decimal,
    pub interest_amount: Decimal,
    pub total_emi: Decimal,
    pub repayment_status: RepaymentStatus,
    /// Set when the status is first changed.
    pub repayment_date: Option<DateTime<Utc>>,
    /// Audit stamp of the last status-changing operation.
    pub metadata: Option<TransactionMetadata>,
}

/// Generates the full amortization table for a winning bid.
///
/// Installment count is `tenure * 12`. Principal is split equally
/// across installments and interest is flat per installment
/// (`principal * rate / 100`), recomputed identically for each one.
/// All installments are materialized eagerly and start out `Demanded`.
pub fn generate_repayment_schedule(winning: &BiddingDetails) -> Vec<PaymentDetail> {
    let installments = winning.tenure * 12;
    if installments == 0 {
        return Vec::new();
    }
    let count = Decimal::from(installments);
    let principal = winning.sanctioned_amount / count;
    let interest = principal * winning.interest_rate / dec!(100);

    (1..=installments)
        .map(|installment_number| PaymentDetail {
            installment_number,
            principal_amount: principal,
            interest_amount: interest,
            total_emi: principal + interest,
            repayment_status: RepaymentStatus::Demanded,
            repayment_date: None,
            metadata: None,
        })
        .collect()
}
