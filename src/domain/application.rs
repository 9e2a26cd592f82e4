use crate::domain::bidding::BiddingDetails;
use crate::domain::ports::InvocationContext;
use crate::domain::schedule::PaymentDetail;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a loan application.
///
/// Serialized as the integer codes used in the persisted record format.
/// Statuses only ever advance: once a bid has been confirmed no path
/// returns to `Applied`..`BidRejected`, while `Performing` and
/// `NonPerforming` may flip back and forth on payment events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ApplicationStatus {
    Applied = 0,
    QuotationsReceived = 1,
    BidAccepted = 2,
    BidRejected = 3,
    Performing = 4,
    NonPerforming = 5,
}

impl From<ApplicationStatus> for u8 {
    fn from(status: ApplicationStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for ApplicationStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Applied),
            1 => Ok(Self::QuotationsReceived),
            2 => Ok(Self::BidAccepted),
            3 => Ok(Self::BidRejected),
            4 => Ok(Self::Performing),
            5 => Ok(Self::NonPerforming),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

/// Append-only audit record stamped on every persisted write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    /// Application status at the time of the write.
    pub application_state: ApplicationStatus,
    pub transaction_id: String,
    /// Display form of the timestamp, as handed to auditors.
    pub transaction_timestamp: String,
    /// Raw form of the same timestamp.
    pub transaction_date: DateTime<Utc>,
    /// Opaque caller-supplied metadata.
    pub caller_metadata: Vec<u8>,
}

impl TransactionMetadata {
    /// Stamps a fresh audit entry from the invocation context.
    pub fn stamp(state: ApplicationStatus, ctx: &dyn InvocationContext) -> Self {
        let timestamp = ctx.timestamp();
        Self {
            application_state: state,
            transaction_id: ctx.transaction_id(),
            transaction_timestamp: timestamp.to_rfc3339(),
            transaction_date: timestamp,
            caller_metadata: ctx.caller_metadata(),
        }
    }
}

/// Inputs for creating a new loan application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateApplication {
    pub application_number: String,
    pub make: String,
    pub model: String,
    pub loan_amount: Decimal,
    pub ssn: String,
    pub age: u32,
    pub monthly_income: Decimal,
    pub credit_score: u32,
    pub tenure: u32,
}

/// Ephemeral view of the applicant's underwriting attributes, handed to
/// each lender policy. Always reconstructed from the aggregate, never
/// persisted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationParams {
    pub application_number: String,
    pub loan_amount: Decimal,
    pub ssn: String,
    pub age: u32,
    pub monthly_income: Decimal,
    pub credit_score: u32,
    pub tenure: u32,
}

/// The aggregate root: one record per application, keyed by
/// `application_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub application_number: String,
    /// Assigned when a bid is accepted.
    pub account_number: Option<u32>,
    pub make: String,
    pub model: String,
    pub loan_amount: Decimal,
    pub ssn: String,
    pub age: u32,
    pub monthly_income: Decimal,
    pub credit_score: u32,
    pub status: ApplicationStatus,
    /// Approved tenure in years.
    pub tenure: u32,
    /// Audit trail, one entry per persisted write.
    pub transactions: Vec<TransactionMetadata>,
    /// Set exactly once at creation; entries are only mutated to flag
    /// the winner.
    pub quotations: Vec<BiddingDetails>,
    /// Created exactly once on bid acceptance, `tenure * 12` entries.
    pub repayment_schedule: Vec<PaymentDetail>,
}

impl LoanApplication {
    pub fn new(request: CreateApplication) -> Self {
        Self {
            application_number: request.application_number,
            account_number: None,
            make: request.make,
            model: request.model,
            loan_amount: request.loan_amount,
            ssn: request.ssn,
            age: request.age,
            monthly_income: request.monthly_income,
            credit_score: request.credit_score,
            status: ApplicationStatus::Applied,
            tenure: request.tenure,
            transactions: Vec::new(),
            quotations: Vec::new(),
            repayment_schedule: Vec::new(),
        }
    }

    pub fn evaluation_params(&self) -> EvaluationParams {
        EvaluationParams {
            application_number: self.application_number.clone(),
            loan_amount: self.loan_amount,
            ssn: self.ssn.clone(),
            age: self.age,
            monthly_income: self.monthly_income,
            credit_score: self.credit_score,
            tenure: self.tenure,
        }
    }
}
