use crate::domain::application::EvaluationParams;
use crate::domain::bidding::{BidStatus, BiddingDetails, InterestType};
use crate::domain::ports::IdGenerator;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BASE_RATE: Decimal = dec!(5.00);
const MIN_CREDIT_SCORE: u32 = 300;
const MIN_AGE: u32 = 18;
const MIN_MONTHLY_INCOME: Decimal = dec!(1000.00);
const SSN_LENGTH: usize = 7;

/// Underwriting and pricing policy of one lender.
///
/// All lenders share the same eligibility rules and rate bands; they
/// differ only in identifier and interest-type label, so the panel is
/// four instances of this one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenderPolicy {
    pub lender_id: u8,
    pub interest_type: InterestType,
}

impl LenderPolicy {
    pub fn new(lender_id: u8, interest_type: InterestType) -> Self {
        Self {
            lender_id,
            interest_type,
        }
    }

    /// The reference panel: lenders 1..4, simple interest for odd ids,
    /// floating for even.
    pub fn default_panel() -> Vec<Self> {
        (1..=4)
            .map(|lender_id| {
                let interest_type = if lender_id % 2 == 1 {
                    InterestType::Simple
                } else {
                    InterestType::Floating
                };
                Self::new(lender_id, interest_type)
            })
            .collect()
    }

    /// Produces this lender's bid for the given applicant.
    ///
    /// Eligibility rules short-circuit in a fixed order; a bidding
    /// number is drawn only when the application is accepted.
    pub fn evaluate(
        &self,
        params: &EvaluationParams,
        ids: &dyn IdGenerator,
        bid_date: DateTime<Utc>,
    ) -> BiddingDetails {
        if params.credit_score < MIN_CREDIT_SCORE {
            return self.reject(params, "Not meeting credit score requirements");
        }
        if params.age < MIN_AGE {
            return self.reject(params, "Not meeting age requirements");
        }
        if params.ssn.chars().count() != SSN_LENGTH {
            return self.reject(params, "Invalid SSN");
        }
        if params.monthly_income < MIN_MONTHLY_INCOME {
            return self.reject(params, "Not meeting monthly income requirements");
        }

        BiddingDetails {
            application_number: params.application_number.clone(),
            bidding_number: ids.next_id(),
            bidding_date: Some(bid_date),
            lender_id: self.lender_id,
            sanctioned_amount: params.loan_amount,
            interest_type: Some(self.interest_type),
            interest_rate: interest_rate(params),
            tenure: params.tenure,
            accept_status: BidStatus::Accepted,
            rejection_reason: None,
            is_winning_bid: false,
        }
    }

    fn reject(&self, params: &EvaluationParams, reason: &str) -> BiddingDetails {
        BiddingDetails {
            application_number: params.application_number.clone(),
            bidding_number: 0,
            bidding_date: None,
            lender_id: self.lender_id,
            sanctioned_amount: Decimal::ZERO,
            interest_type: None,
            interest_rate: Decimal::ZERO,
            tenure: 0,
            accept_status: BidStatus::Rejected,
            rejection_reason: Some(reason.to_string()),
            is_winning_bid: false,
        }
    }
}

/// Rate = base 5.00% plus the applicable band deltas.
///
/// Band edges are strict inequalities: a value exactly on an edge
/// (credit 300/500/700, age 30/50, income 1000/3000) takes no delta
/// from that dimension.
fn interest_rate(params: &EvaluationParams) -> Decimal {
    let mut delta = Decimal::ZERO;

    if params.credit_score > 500 && params.credit_score < 700 {
        delta += dec!(0.25);
    } else if params.credit_score > 300 && params.credit_score < 500 {
        delta += dec!(0.50);
    }

    if params.age > 30 && params.age < 50 {
        delta += dec!(0.25);
    } else if params.age > 50 {
        delta += dec!(0.50);
    }

    if params.monthly_income > dec!(1000) && params.monthly_income < dec!(3000) {
        delta += dec!(0.50);
    } else if params.monthly_income > dec!(3000) {
        delta += dec!(0.25);
    }

    BASE_RATE + delta
}
