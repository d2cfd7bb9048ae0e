use std::io::Write;

use crate::{
    errors::{ScanError, ScanResult},
    types::Payment,
};

/// Payments ordered by date, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Report {
    payments: Vec<Payment>,
}

impl Report {
    /// Sorts by instant; payments sharing a date keep their archive order.
    pub fn new(mut payments: Vec<Payment>) -> Self {
        payments.sort_by_key(Payment::date);
        Report { payments }
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> ScanResult<()> {
        for payment in &self.payments {
            writeln!(out, "{}", payment.report_line()).map_err(ScanError::Output)?;
        }
        out.flush().map_err(ScanError::Output)
    }
}
