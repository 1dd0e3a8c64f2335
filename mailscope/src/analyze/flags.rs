use super::headers::{HeaderAnalysis, NOT_FOUND};
use colored::{ColoredString, Colorize};
use serde::{Serialize, Serializer};
use strum::{Display, EnumIter};

/// A heuristic finding raised after all header fields have been extracted.
///
/// The variant order is the evaluation order, and so the order flags appear in a result.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Flag {
    #[strum(serialize = "Return-Path mismatch - possible spoofing")]
    ReturnPathMismatch,
    #[strum(serialize = "SPF failed")]
    SpfFailed,
    #[strum(serialize = "DKIM failed")]
    DkimFailed,
    #[strum(serialize = "DMARC failed")]
    DmarcFailed,
}

impl Flag {
    /// Console marker for this flag. A mismatch is only suspicious, the rest are hard failures.
    pub fn marker(&self) -> ColoredString {
        match self {
            Flag::ReturnPathMismatch => "⚠".yellow().bold(),
            _ => "✗".red().bold(),
        }
    }
}

/// Evaluates every heuristic against the extracted fields, in [`Flag`] order.
/// No flag suppresses another.
pub(super) fn detect_flags(analysis: &HeaderAnalysis) -> Vec<Flag> {
    let mut flags = Vec::new();

    if analysis.from != analysis.return_path && analysis.return_path != NOT_FOUND {
        flags.push(Flag::ReturnPathMismatch);
    }
    if analysis.spf.to_lowercase().starts_with("fail") {
        flags.push(Flag::SpfFailed);
    }
    if analysis.dkim == "fail" {
        flags.push(Flag::DkimFailed);
    }
    if analysis.dmarc == "fail" {
        flags.push(Flag::DmarcFailed);
    }

    flags
}

impl Serialize for Flag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
