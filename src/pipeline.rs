//! Drives messages from the archive reader through classification and
//! extraction.
//!
//! Every message walks `Read -> Parsed -> Classified`, then either stops at
//! `Skipped` or goes on through `Extracting` to `Complete`. The first message
//! that ends in `Failed` aborts the whole scan: payments collected so far are
//! dropped and the error is returned.

use std::{fmt, io::Write};

use tracing::{debug, info, warn};

use crate::{
    errors::ScanResult,
    mbox::{MboxReader, RawMessage},
    message::MailMessage,
    parsers::prelude::*,
    types::Payment,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Read,
    Parsed,
    Classified,
    Extracting,
    Complete,
    Skipped,
    Failed,
}

impl fmt::Display for MessageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageState::Read => "read",
            MessageState::Parsed => "parsed",
            MessageState::Classified => "classified",
            MessageState::Extracting => "extracting",
            MessageState::Complete => "complete",
            MessageState::Skipped => "skipped",
            MessageState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Scans every message and returns the payments in archive order.
pub fn scan_archive<R, W>(reader: MboxReader<R>, diagnostics: &mut W) -> ScanResult<Vec<Payment>>
where
    R: std::io::Read,
    W: Write,
{
    let mut payments = Vec::with_capacity(1024);
    let mut seen = 0usize;

    for raw in reader {
        seen += 1;
        let index = seen;
        let result = raw.and_then(|raw| process_message(index, &raw, diagnostics));

        match result {
            Ok(Some(payment)) => payments.push(payment),
            Ok(None) => {}
            Err(err) => {
                warn!(index, error = %err, state = %MessageState::Failed, "scan aborted");
                return Err(err);
            }
        }
    }

    info!(
        messages = seen,
        payments = payments.len(),
        "scan finished, all messages processed"
    );
    Ok(payments)
}

fn process_message<W: Write>(
    index: usize,
    raw: &RawMessage,
    diagnostics: &mut W,
) -> ScanResult<Option<Payment>> {
    debug!(index, from = raw.from_line(), state = %MessageState::Read);

    let message = MailMessage::parse(raw.contents())?;
    debug!(index, state = %MessageState::Parsed);

    let is_payment = PaymentParser::is_supported(&message);
    debug!(index, state = %MessageState::Classified, is_payment);
    if !is_payment {
        debug!(index, state = %MessageState::Skipped);
        return Ok(None);
    }

    debug!(index, state = %MessageState::Extracting, subject = message.subject());
    let payment = PaymentParser::parse(&message, diagnostics)?;
    debug!(index, state = %MessageState::Complete, amount = payment.amount());

    Ok(Some(payment))
}
