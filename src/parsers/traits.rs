use std::io::Write;

use crate::{errors::ScanResult, message::MailMessage};

/// Recognizes one kind of notice among mail messages and pulls a record out of it.
pub trait Parser {
    type Output;

    fn is_supported(message: &MailMessage<'_>) -> bool;

    /// `diagnostics` receives anything worth showing when extraction fails.
    fn parse<W: Write>(message: &MailMessage<'_>, diagnostics: &mut W) -> ScanResult<Self::Output>;
}
