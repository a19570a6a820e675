use crate::error::{PaymentError, Result};
use crate::interfaces::service::CreatePaymentRequest;
use std::io::Read;

/// Reads payment creation requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<CreatePaymentRequest>`. It handles whitespace trimming and
/// flexible record lengths automatically. Expected header:
/// `customerId, amount`.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<CreatePaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "customerId, amount\ncust-1, 49.99\ncust-2, 0.5";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<CreatePaymentRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.customer_id, "cust-1");
        assert_eq!(first.amount, dec!(49.99));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "customerId, amount\ncust-1, not_a_number";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<CreatePaymentRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
    }
}
