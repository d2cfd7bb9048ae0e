use mail_parser::{HeaderForm, HeaderName, MessageParser};

use crate::{
    errors::{ScanError, ScanResult},
    parsers::payment::MailDate,
};

/// A parsed mail message together with its undecoded body bytes.
pub struct MailMessage<'x> {
    parsed: mail_parser::Message<'x>,
    body: &'x [u8],
}

impl<'x> MailMessage<'x> {
    pub fn parse(raw: &'x [u8]) -> ScanResult<Self> {
        let parsed = MessageParser::default()
            .parse(raw)
            .ok_or_else(|| ScanError::ArchiveFormat("message has no readable headers".to_string()))?;

        Ok(MailMessage {
            parsed,
            body: split_body(raw),
        })
    }

    /// The first decoded `Subject` header, or an empty string when absent.
    pub fn subject(&self) -> &str {
        self.parsed
            .header_values(HeaderName::Subject)
            .next()
            .and_then(|value| value.as_text())
            .unwrap_or_default()
    }

    /// The first `Date` header.
    ///
    /// Falls back to the raw header text when the header parser gives up, so
    /// obsolete forms such as `2 Jan 06 15:04 EST` still resolve.
    pub fn date(&self) -> Option<MailDate> {
        let parsed = self
            .parsed
            .header_values(HeaderName::Date)
            .next()
            .and_then(|value| value.as_datetime())
            .filter(|date| date.is_valid());
        if let Some(date) = parsed {
            return Some(MailDate::from(date.to_rfc3339()));
        }

        self.parsed
            .header_as(HeaderName::Date, HeaderForm::Raw)
            .into_iter()
            .next()
            .and_then(|value| value.as_text().map(str::to_string))
            .filter(|text| !text.is_empty())
            .map(MailDate::from)
    }

    /// Everything after the blank line ending the header block, as stored in
    /// the archive (no transfer decoding).
    pub fn body(&self) -> &'x [u8] {
        self.body
    }
}

fn split_body(raw: &[u8]) -> &[u8] {
    let mut offset = 0;
    for line in raw.split_inclusive(|&ch| ch == b'\n') {
        offset += line.len();
        if line == b"\n" || line == b"\r\n" {
            return &raw[offset..];
        }
    }
    &raw[raw.len()..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use rstest::rstest;

    const SAMPLE_MESSAGE: &[u8] = b"Subject: Payment Scheduling Notice
Date: Mon, 02 Jan 2006 15:04:05 -0700
From: billing@example.com

Amount due: $1,234.56
";

    #[test]
    fn test_parse_headers_and_body() {
        let message = MailMessage::parse(SAMPLE_MESSAGE).unwrap();

        assert_eq!(message.subject(), "Payment Scheduling Notice");
        assert_eq!(message.body(), b"Amount due: $1,234.56\n");

        let date: DateTime<FixedOffset> = message.date().unwrap().try_into().unwrap();
        assert_eq!(
            date,
            DateTime::parse_from_rfc3339("2006-01-02T15:04:05-07:00").unwrap()
        );
    }

    #[test]
    fn test_missing_subject_is_empty() {
        let message = MailMessage::parse(b"From: a@example.com\n\nhello\n").unwrap();
        assert_eq!(message.subject(), "");
        assert!(message.date().is_none());
    }

    #[test]
    fn test_encoded_subject_is_decoded() {
        let message =
            MailMessage::parse(b"Subject: =?utf-8?q?Payment_Scheduling?=\n\nbody\n").unwrap();
        assert_eq!(message.subject(), "Payment Scheduling");
    }

    #[test]
    fn test_first_subject_wins() {
        let message = MailMessage::parse(
            b"Subject: Payment Scheduling\nSubject: hello\n\n$1.00\n",
        )
        .unwrap();
        assert_eq!(message.subject(), "Payment Scheduling");
    }

    #[rstest]
    #[case("2 Jan 06 15:04 EST", "2006-01-02T15:04:00-05:00")]
    #[case("Mon, 02 Jan 2006 15:04:05 -0700", "2006-01-02T15:04:05-07:00")]
    fn test_date_resolution(#[case] header: &str, #[case] expected: &str) {
        let raw = format!("Subject: x\nDate: {header}\n\nbody\n");
        let message = MailMessage::parse(raw.as_bytes()).unwrap();

        let date: DateTime<FixedOffset> = message.date().unwrap().try_into().unwrap();
        assert_eq!(date, DateTime::parse_from_rfc3339(expected).unwrap());
        assert_eq!(date.offset(), DateTime::parse_from_rfc3339(expected).unwrap().offset());
    }

    #[test]
    fn test_first_date_wins() {
        let message = MailMessage::parse(
            b"Date: Mon, 02 Jan 2006 10:00:00 +0000\nDate: Tue, 03 Jan 2006 10:00:00 +0000\n\nbody\n",
        )
        .unwrap();

        let date: DateTime<FixedOffset> = message.date().unwrap().try_into().unwrap();
        assert_eq!(date, DateTime::parse_from_rfc3339("2006-01-02T10:00:00Z").unwrap());
    }

    #[test]
    fn test_unreadable_date_is_kept_for_error_reporting() {
        let message = MailMessage::parse(b"Date: sometime soon\n\nbody\n").unwrap();

        let result: Result<DateTime<FixedOffset>, _> = message.date().unwrap().try_into();
        assert!(matches!(result, Err(ScanError::DateParse(_))));
    }

    #[rstest]
    #[case(b"A: b\n\nbody\n", b"body\n")]
    #[case(b"A: b\r\n\r\nbody\r\n", b"body\r\n")]
    #[case(b"A: b\n\n\nbody\n", b"\nbody\n")]
    #[case(b"\nbody\n", b"body\n")]
    #[case(b"A: b\n", b"")]
    #[case(b"", b"")]
    fn test_split_body(#[case] raw: &[u8], #[case] expected: &[u8]) {
        assert_eq!(split_body(raw), expected);
    }
}
