//! Domain layer: the loan application aggregate, lender quote policies,
//! the repayment scheduler, the default monitor, and the ports the
//! application layer depends on.

pub mod application;
pub mod bidding;
pub mod monitor;
pub mod policy;
pub mod ports;
pub mod schedule;
