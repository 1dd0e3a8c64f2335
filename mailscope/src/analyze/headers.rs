use super::flags::{detect_flags, Flag};
use super::patterns::{self, all_captures, first_capture};
use regex::Regex;
use serde::Serialize;

/// Placeholder stored for any field that could not be located in the headers.
pub const NOT_FOUND: &str = "Not found";

/// Fields extracted from one raw header blob.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAnalysis {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Return-Path")]
    pub return_path: String,
    #[serde(rename = "SPF")]
    pub spf: String,
    #[serde(rename = "DKIM")]
    pub dkim: String,
    #[serde(rename = "DMARC")]
    pub dmarc: String,
    #[serde(rename = "Message-ID")]
    pub message_id: String,
    #[serde(rename = "Date")]
    pub date: String,
    /// One entry per `Received: from` line, in document order. Never empty.
    #[serde(rename = "Received-path")]
    pub received_path: Vec<String>,
    #[serde(rename = "Mailer")]
    pub mailer: String,
    #[serde(rename = "Flags")]
    pub flags: Vec<Flag>,
}

impl HeaderAnalysis {
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// Extracts the known fields from `headers` and evaluates the spoofing heuristics.
///
/// This never fails. Missing fields are set to [`NOT_FOUND`], so an empty input
/// yields a result made entirely of sentinels with no flags.
pub fn analyze_headers(headers: &str) -> HeaderAnalysis {
    let mut received_path: Vec<String> = all_captures(&patterns::RECEIVED_FROM, headers)
        .map(|hop| hop.trim_end().to_string())
        .collect();
    if received_path.is_empty() {
        received_path.push(NOT_FOUND.to_string());
    }

    let mut analysis = HeaderAnalysis {
        from: trimmed_field(&patterns::FROM, headers),
        return_path: trimmed_field(&patterns::RETURN_PATH, headers),
        spf: trimmed_field(&patterns::RECEIVED_SPF, headers),
        dkim: token_field(&patterns::AUTH_DKIM, headers),
        dmarc: token_field(&patterns::AUTH_DMARC, headers),
        message_id: trimmed_field(&patterns::MESSAGE_ID, headers),
        date: trimmed_field(&patterns::DATE, headers),
        received_path,
        mailer: trimmed_field(&patterns::MAILER, headers),
        flags: Vec::new(),
    };
    analysis.flags = detect_flags(&analysis);

    analysis
}

fn trimmed_field(pattern: &Regex, headers: &str) -> String {
    first_capture(pattern, headers)
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn token_field(pattern: &Regex, headers: &str) -> String {
    first_capture(pattern, headers)
        .unwrap_or(NOT_FOUND)
        .to_string()
}
