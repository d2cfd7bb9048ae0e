use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment scheduling notice found in the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    date: DateTime<FixedOffset>,
    subject: String,
    amount: String,
}

impl Payment {
    pub fn new(date: DateTime<FixedOffset>, subject: impl Into<String>, amount: impl Into<String>) -> Self {
        Payment {
            date,
            subject: subject.into(),
            amount: amount.into(),
        }
    }

    /// Sending date, in the offset the sender used.
    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Normalized amount text, without currency marker.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The amount as a number, when the normalized text is a plain decimal.
    ///
    /// Amounts that kept a second grouping comma (`1234,567.89`) yield `None`.
    pub fn decimal_amount(&self) -> Option<Decimal> {
        Decimal::from_str(&self.amount).ok()
    }

    /// `MM/DD/YYYY<TAB>amount`
    pub fn report_line(&self) -> String {
        format!("{}\t{}", self.date.format("%m/%d/%Y"), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn create_test_payment(amount: &str) -> Payment {
        Payment::new(
            DateTime::parse_from_rfc3339("2006-01-02T15:04:05-07:00").unwrap(),
            "Payment Scheduling Notice",
            amount,
        )
    }

    #[test]
    fn test_report_line() {
        let payment = create_test_payment("1234.56");
        assert_eq!(payment.report_line(), "01/02/2006\t1234.56");
    }

    #[test]
    fn test_report_line_uses_sender_offset() {
        // 22:30 UTC on Jan 2 is already Jan 3 in +05:30
        let payment = Payment::new(
            DateTime::parse_from_rfc3339("2006-01-03T04:00:00+05:30").unwrap(),
            "Payment Scheduling",
            "10",
        );
        assert_eq!(payment.report_line(), "01/03/2006\t10");
    }

    #[rstest]
    #[case("1234.56", Some("1234.56"))]
    #[case("99.00", Some("99.00"))]
    #[case("5", Some("5"))]
    #[case("1234,567.89", None)]
    fn test_decimal_amount(#[case] amount: &str, #[case] expected: Option<&str>) {
        let payment = create_test_payment(amount);
        assert_eq!(
            payment.decimal_amount(),
            expected.map(|value| Decimal::from_str(value).unwrap())
        );
    }

    #[test]
    fn test_payment_serialization() {
        let payment = create_test_payment("1234.56");

        let json = serde_json::to_string(&payment).unwrap();
        assert!(json.contains("Payment Scheduling Notice"));
        assert!(json.contains("1234.56"));
        assert!(json.contains("2006-01-02T15:04:05-07:00"));

        let deserialized: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, payment);
    }
}
