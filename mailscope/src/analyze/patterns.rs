use lazy_static::lazy_static;
use regex::Regex;

// Line-anchored rules run in multi-line CRLF mode, so `\n`, `\r\n` and a bare `\r`
// all end a line and `.` never crosses one.
lazy_static! {
    pub(super) static ref FROM: Regex = Regex::new(r"(?mR)^From:[ \t]?(.*)$").unwrap();
    pub(super) static ref RETURN_PATH: Regex =
        Regex::new(r"(?mR)^Return-Path:[ \t]?<(.*)>").unwrap();
    pub(super) static ref RECEIVED_SPF: Regex =
        Regex::new(r"(?mR)^Received-SPF:[ \t]?(.*)$").unwrap();
    pub(super) static ref MESSAGE_ID: Regex =
        Regex::new(r"(?mR)^Message-ID:[ \t]?<(.*)>").unwrap();
    pub(super) static ref DATE: Regex = Regex::new(r"(?mR)^Date:[ \t]?(.*)$").unwrap();
    pub(super) static ref RECEIVED_FROM: Regex =
        Regex::new(r"(?mR)^Received: from (.*)$").unwrap();
    pub(super) static ref MAILER: Regex =
        Regex::new(r"(?mR)^(?:User-Agent|X-Mailer):[ \t]?(.*)$").unwrap();

    // Authentication-Results is commonly folded, so `.` must cross line breaks here.
    pub(super) static ref AUTH_DKIM: Regex =
        Regex::new(r"(?s)Authentication-Results:.*?dkim=(\w+)").unwrap();
    pub(super) static ref AUTH_DMARC: Regex =
        Regex::new(r"(?s)Authentication-Results:.*?dmarc=(\w+)").unwrap();
}

/// Returns the first capture group of the leftmost match of `pattern`.
pub(super) fn first_capture<'h>(pattern: &Regex, haystack: &'h str) -> Option<&'h str> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Lazily yields the first capture group of every non-overlapping match, in document order.
pub(super) fn all_captures<'h>(pattern: &Regex, haystack: &'h str) -> impl Iterator<Item = &'h str> {
    pattern
        .captures_iter(haystack)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
