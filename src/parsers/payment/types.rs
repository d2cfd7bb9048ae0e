use crate::errors::ScanError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Date of a mail message as text.
///
/// Accepts either RFC 3339 (how the header parser renders a `Date` header)
/// or the RFC 2822 form found in raw headers, e.g.
/// `Mon, 02 Jan 2006 15:04:05 -0700`. The original UTC offset is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDate(String);

impl MailDate {
    pub fn parse(&self) -> Result<DateTime<FixedOffset>, ScanError> {
        let s = self.0.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(s) {
            return Ok(date);
        }
        if let Ok(date) = DateTime::parse_from_rfc2822(s) {
            return Ok(date);
        }

        Err(ScanError::DateParse(format!("unrecognized date {:?}", self.0)))
    }
}

impl From<String> for MailDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MailDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<MailDate> for DateTime<FixedOffset> {
    type Error = ScanError;

    fn try_from(date: MailDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}
