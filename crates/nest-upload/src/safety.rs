//! Content-safety screening.
//!
//! A case-insensitive banned-keyword substring scan plus a small set of
//! regex heuristics for phrases that advertise counterfeit goods, stolen
//! credentials, or unlicensed redistribution. Applied to file names by the
//! admission pipeline and, via [`scan_text`], to listing titles and
//! descriptions by the publish flow.
//!
//! Policy screening, not security: structural checks run before this and
//! never depend on it.

use std::sync::LazyLock;

use nest_types::upload::RejectReason;
use regex::Regex;

/// Banned keywords, matched as case-insensitive substrings.
pub const BANNED_KEYWORDS: &[&str] = &[
    // Illegal content
    "cp", "childp", "jailbait", "loli", "underage",
    // Adult content
    "porn", "xxx", "adult", "nsfw", "onlyfans",
    // Violence
    "gore", "death", "murder", "torture",
    // Hate speech
    "nazi", "jihad", "terrorist",
    // Drugs
    "cocaine", "heroin", "meth",
    // Fraud
    "hack", "crack", "stolen", "leak",
];

/// Phrase heuristics, compiled once per process.
static BANNED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(buy|sell|trade)\s+(fake|counterfeit|stolen)\b",
        r"(?i)\b(hack|crack|leak|dump)\s+(account|password|data)\b",
        r"(?i)\b(illegal|unlicensed)\s+(stream|download|copy)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("banned pattern must compile"))
    .collect()
});

/// Screen free text against the banned-keyword list and phrase heuristics.
///
/// Returns `Some(RejectReason::ProhibitedContent)` on the first hit, `None`
/// for clean text.
pub fn scan_text(text: &str) -> Option<RejectReason> {
    let normalized = text.to_lowercase();

    for keyword in BANNED_KEYWORDS {
        if normalized.contains(keyword) {
            tracing::warn!(keyword, "text matched banned keyword");
            return Some(RejectReason::ProhibitedContent);
        }
    }

    for pattern in BANNED_PATTERNS.iter() {
        if pattern.is_match(&normalized) {
            tracing::warn!(pattern = pattern.as_str(), "text matched banned pattern");
            return Some(RejectReason::ProhibitedContent);
        }
    }

    None
}
