use crate::domain::application::ApplicationStatus;
use crate::domain::schedule::{PaymentDetail, RepaymentStatus};

/// Number of missed installments at which a loan is classified as
/// non-performing.
pub const MISSED_PAYMENT_THRESHOLD: usize = 3;

/// Classifies a loan from its full repayment schedule.
///
/// Recomputed from scratch on every payment event, so the result is
/// always consistent with the current schedule regardless of the order
/// in which installments were updated. An empty schedule classifies as
/// `Performing`.
pub fn classify(schedule: &[PaymentDetail]) -> ApplicationStatus {
    let missed = schedule
        .iter()
        .filter(|p| p.repayment_status == RepaymentStatus::Missed)
        .count();

    if missed >= MISSED_PAYMENT_THRESHOLD {
        ApplicationStatus::NonPerforming
    } else {
        ApplicationStatus::Performing
    }
}
