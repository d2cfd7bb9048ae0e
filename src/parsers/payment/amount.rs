use std::{io::Write, sync::LazyLock};

use regex::bytes::Regex;

use crate::errors::{ScanError, ScanResult};

/// A `$` or its HTML entity followed by digits, commas and periods.
static MONEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(&#36;|\$)[0-9,.]+").expect("money pattern compiles"));

/// Finds the leftmost amount in `body` and normalizes it.
///
/// Returns `None` when nothing matches, or when normalizing leaves nothing
/// (a lone `$,`).
pub fn find_amount(body: &[u8]) -> Option<String> {
    let found = MONEY_PATTERN.find(body)?;
    let amount = normalize_amount(&String::from_utf8_lossy(found.as_bytes()));
    (!amount.is_empty()).then_some(amount)
}

/// Drops the first `$`, the first `&#36;` and the first comma.
///
/// Only one grouping separator is removed: `$1,234,567.89` becomes
/// `1234,567.89`.
pub fn normalize_amount(raw: &str) -> String {
    raw.replacen('$', "", 1)
        .replacen("&#36;", "", 1)
        .replacen(',', "", 1)
}

/// Like [`find_amount`], but on a miss writes the whole body to
/// `diagnostics` before failing, so the offending message can be inspected.
pub fn extract_amount<W: Write>(body: &[u8], diagnostics: &mut W) -> ScanResult<String> {
    if let Some(amount) = find_amount(body) {
        return Ok(amount);
    }

    diagnostics.write_all(body).map_err(ScanError::Output)?;
    diagnostics.write_all(b"\n").map_err(ScanError::Output)?;
    diagnostics.flush().map_err(ScanError::Output)?;

    Err(ScanError::AmountNotFound)
}
