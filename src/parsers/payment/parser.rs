use std::io::Write;

use chrono::{DateTime, FixedOffset};

use super::amount::extract_amount;
use crate::{
    errors::{ScanError, ScanResult},
    message::MailMessage,
    parsers::traits::Parser,
    types::Payment,
};

pub struct PaymentParser;

impl Parser for PaymentParser {
    type Output = Payment;

    fn is_supported(message: &MailMessage<'_>) -> bool {
        is_payment(message.subject())
    }

    fn parse<W: Write>(message: &MailMessage<'_>, diagnostics: &mut W) -> ScanResult<Self::Output> {
        let amount = extract_amount(message.body(), diagnostics)?;

        let date: DateTime<FixedOffset> = message
            .date()
            .ok_or_else(|| ScanError::DateParse("missing or unreadable Date header".to_string()))?
            .try_into()?;

        Ok(Payment::new(date, message.subject(), amount))
    }
}

/// True when the subject mentions both "payment" and "scheduling", in any
/// case and any order.
pub fn is_payment(subject: &str) -> bool {
    let subject = subject.to_lowercase();
    subject.contains("payment") && subject.contains("scheduling")
}
