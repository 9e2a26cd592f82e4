use crate::error::{LendingError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// The engine operation named by a request row.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Create,
    ConfirmBid,
    ChangePaymentStatus,
    Read,
}

/// One batch request. Only the columns relevant to the named operation
/// need to be present; the rest stay `None`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Request {
    pub op: Operation,
    pub application: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub ssn: Option<String>,
    pub age: Option<u32>,
    pub monthly_income: Option<Decimal>,
    pub credit_score: Option<u32>,
    pub tenure: Option<u32>,
    pub bidding_number: Option<u32>,
    pub bid_status: Option<u8>,
    pub installment: Option<u32>,
    pub repayment_status: Option<u8>,
}

/// Reads engine requests from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<Request>`,
/// handling whitespace trimming and flexible record lengths.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<Request>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LendingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "op,application,make,model,loan_amount,ssn,age,monthly_income,credit_score,tenure,bidding_number,bid_status,installment,repayment_status";

    #[test]
    fn test_reader_create_row() {
        let data = format!("{HEADER}\ncreate,APP-1,Tesla,Model 3,60000,1234567,35,2500,650,5,,,,");
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<Request>> = reader.requests().collect();

        assert_eq!(results.len(), 1);
        let request = results[0].as_ref().unwrap();
        assert_eq!(request.op, Operation::Create);
        assert_eq!(request.application, "APP-1");
        assert_eq!(request.make.as_deref(), Some("Tesla"));
        assert_eq!(request.loan_amount, Some(dec!(60000)));
        assert_eq!(request.age, Some(35));
        assert_eq!(request.bidding_number, None);
    }

    #[test]
    fn test_reader_short_rows() {
        let data = format!(
            "{HEADER}\nread,APP-1\nconfirm-bid,APP-1,,,,,,,,,42,2\nchange-payment-status,APP-1,,,,,,,,,,,7,3"
        );
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Request> = reader.requests().map(|r| r.unwrap()).collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].op, Operation::Read);
        assert_eq!(results[1].op, Operation::ConfirmBid);
        assert_eq!(results[1].bidding_number, Some(42));
        assert_eq!(results[1].bid_status, Some(2));
        assert_eq!(results[2].op, Operation::ChangePaymentStatus);
        assert_eq!(results[2].installment, Some(7));
        assert_eq!(results[2].repayment_status, Some(3));
    }

    #[test]
    fn test_reader_malformed_operation() {
        let data = format!("{HEADER}\nfrobnicate,APP-1,,,,,,,,,,,,");
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<Request>> = reader.requests().collect();

        assert!(results[0].is_err());
    }
}
