use crate::domain::payment::Payment;
use crate::error::Result;
use std::io::Write;

/// Writes payment listings as CSV to any `Write` sink.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the payments in the order given, header row included.
    pub fn write_payments(&mut self, payments: Vec<Payment>) -> Result<()> {
        for payment in payments {
            self.writer.serialize(payment)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
