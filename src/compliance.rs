//! Brand compliance checker
//!
//! A static scan of copy against the terms the firm never uses publicly,
//! plus length bounds. Results are advisory: nothing in the review flow is
//! blocked by a failing check.
//!
//! Lengths are UTF-16 code units, the unit browsers report for a string's
//! length, so an emoji counts as two.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::store::ContentType;

/// Terms that must not appear in published copy (matched case-insensitively)
pub const FORBIDDEN_TERMS: &[&str] = &[
    "affordable housing",
    "flipping",
    "flip",
    "guaranteed",
    "guaranteed returns",
    "risk-free",
    "risk free",
    "get rich",
    "wealth building",
    "passive income",
    "deal of a lifetime",
];

/// Shortest acceptable copy, in UTF-16 code units
pub const MIN_LENGTH: usize = 50;
/// Longest acceptable copy, in UTF-16 code units
pub const MAX_LENGTH: usize = 5000;

/// Disclaimer expected on market commentary
pub const MARKET_ANALYSIS_DISCLAIMER: &str =
    "For informational purposes only. This does not constitute investment advice.";

/// One problem found in a piece of copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceIssue {
    ForbiddenTerm(&'static str),
    TooLong(usize),
    TooShort,
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceIssue::ForbiddenTerm(term) => {
                write!(f, "Contains forbidden term: \"{}\"", term)
            }
            ComplianceIssue::TooLong(len) => write!(
                f,
                "Content exceeds {} characters ({})",
                thousands(MAX_LENGTH),
                len
            ),
            ComplianceIssue::TooShort => write!(
                f,
                "Content is too short (minimum {} characters)",
                MIN_LENGTH
            ),
        }
    }
}

/// Advice that never fails a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceSuggestion {
    MarketAnalysisDisclaimer,
}

impl fmt::Display for ComplianceSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceSuggestion::MarketAnalysisDisclaimer => write!(
                f,
                "Consider adding market analysis disclaimer: \"{}\"",
                MARKET_ANALYSIS_DISCLAIMER
            ),
        }
    }
}

/// Outcome of a compliance check
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplianceReport {
    pub issues: Vec<ComplianceIssue>,
    pub suggestions: Vec<ComplianceSuggestion>,
}

impl ComplianceReport {
    /// True when no issues were found
    pub fn pass(&self) -> bool {
        self.issues.is_empty()
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        if self.pass() {
            "Pass"
        } else {
            "Fail"
        }
    }

    /// Issues rendered as human-readable messages
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn suggestion_messages(&self) -> Vec<String> {
        self.suggestions.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for ComplianceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("ComplianceReport", 3)?;
        report.serialize_field("pass", &self.pass())?;
        report.serialize_field("issues", &self.messages())?;
        report.serialize_field("suggestions", &self.suggestion_messages())?;
        report.end()
    }
}

/// Check `text` against the forbidden terms and length bounds
pub fn check(text: &str) -> ComplianceReport {
    let lower = text.to_lowercase();

    let mut issues: Vec<ComplianceIssue> = FORBIDDEN_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .map(|term| ComplianceIssue::ForbiddenTerm(*term))
        .collect();

    let len = text_length(text);
    if len > MAX_LENGTH {
        issues.push(ComplianceIssue::TooLong(len));
    }
    if len < MIN_LENGTH {
        issues.push(ComplianceIssue::TooShort);
    }

    ComplianceReport {
        issues,
        suggestions: Vec::new(),
    }
}

/// [`check`] plus the suggestions that depend on what kind of copy it is
pub fn check_content(text: &str, content_type: ContentType) -> ComplianceReport {
    let mut report = check(text);

    let market_commentary = matches!(
        content_type,
        ContentType::BlogPost | ContentType::MarketReport
    );
    if market_commentary
        && !text
            .to_lowercase()
            .contains(&MARKET_ANALYSIS_DISCLAIMER.to_lowercase())
    {
        report
            .suggestions
            .push(ComplianceSuggestion::MarketAnalysisDisclaimer);
    }

    report
}

/// Length in UTF-16 code units
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const CLEAN: &str = "Houston occupancy reached 90.4% in Q4 2025, supported by 26,510 units of absorption.";

    #[test]
    fn test_clean_copy_passes() {
        let report = check(CLEAN);
        assert!(report.pass());
        assert_eq!(report.label(), "Pass");
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_guaranteed_returns_flagged() {
        let report = check("guaranteed returns are here");
        assert!(!report.pass());

        let messages = report.messages();
        assert!(messages.contains(&"Contains forbidden term: \"guaranteed returns\"".to_string()));
        assert!(messages.contains(&"Contains forbidden term: \"guaranteed\"".to_string()));
        // 27 characters is also too short
        assert!(messages.contains(&"Content is too short (minimum 50 characters)".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let text = format!("{} This is a RISK-FREE opportunity.", CLEAN);
        let report = check(&text);
        assert_eq!(report.issues, vec![ComplianceIssue::ForbiddenTerm("risk-free")]);
    }

    #[test]
    fn test_length_bounds() {
        let exactly_min = "a".repeat(MIN_LENGTH);
        assert!(check(&exactly_min).pass());
        assert_eq!(check(&"a".repeat(MIN_LENGTH - 1)).issues, vec![ComplianceIssue::TooShort]);

        let exactly_max = "a".repeat(MAX_LENGTH);
        assert!(check(&exactly_max).pass());

        let report = check(&"a".repeat(MAX_LENGTH + 1));
        assert_eq!(report.issues, vec![ComplianceIssue::TooLong(MAX_LENGTH + 1)]);
        assert_eq!(report.messages()[0], "Content exceeds 5,000 characters (5001)");
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One UTF-16 unit each, two UTF-8 bytes
        assert!(check(&"é".repeat(MIN_LENGTH)).pass());

        // Astral characters take two units
        assert_eq!(text_length("\u{1F3E0}"), 2);
        assert!(check(&"\u{1F3E0}".repeat(MIN_LENGTH / 2)).pass());
        assert_eq!(
            check(&"\u{1F3E0}".repeat(MIN_LENGTH / 2 - 1)).issues,
            vec![ComplianceIssue::TooShort]
        );
    }

    #[test]
    fn test_astral_characters_at_upper_bound() {
        let at_limit = "\u{1F3E0}".repeat(MAX_LENGTH / 2);
        assert!(check(&at_limit).pass());

        let over = format!("{}a", at_limit);
        assert_eq!(check(&over).issues, vec![ComplianceIssue::TooLong(MAX_LENGTH + 1)]);

        let report = check(&"\u{1F3E0}".repeat(2600));
        assert_eq!(report.issues, vec![ComplianceIssue::TooLong(5200)]);
        assert_eq!(report.messages()[0], "Content exceeds 5,000 characters (5200)");
    }

    #[test]
    fn test_disclaimer_suggested_for_market_commentary() {
        for content_type in [ContentType::BlogPost, ContentType::MarketReport] {
            let report = check_content(CLEAN, content_type);
            assert!(report.pass());
            assert_eq!(
                report.suggestions,
                vec![ComplianceSuggestion::MarketAnalysisDisclaimer]
            );
        }

        let report = check_content(CLEAN, ContentType::LinkedinPost);
        assert!(report.suggestions.is_empty());

        let with_disclaimer = format!("{} {}", CLEAN, MARKET_ANALYSIS_DISCLAIMER.to_uppercase());
        assert!(check_content(&with_disclaimer, ContentType::MarketReport)
            .suggestions
            .is_empty());
    }

    #[test]
    fn test_suggestions_never_change_pass() {
        let texts = [
            CLEAN.to_string(),
            "guaranteed returns are here".to_string(),
            "a".repeat(MAX_LENGTH + 1),
            String::new(),
            format!("{} {}", CLEAN, MARKET_ANALYSIS_DISCLAIMER),
        ];
        for text in &texts {
            for &content_type in ContentType::all() {
                let typed = check_content(text, content_type);
                assert_eq!(typed.pass(), check(text).pass(), "{:?}", text);
                assert_eq!(typed.issues, check(text).issues);
            }
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(check("").issues, vec![ComplianceIssue::TooShort]);
    }

    #[test]
    fn test_pass_iff_no_term_and_in_bounds() {
        let words = [
            "workforce", "housing", "durable", "cash", "flow", "flip", "risk", "free",
            "guaranteed", "Sunbelt", "basis", "GET", "rich", "passive", "income", "-",
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let count = rng.gen_range(0..40);
            let text = (0..count)
                .map(|_| words[rng.gen_range(0..words.len())])
                .collect::<Vec<_>>()
                .join(" ");

            let lower = text.to_lowercase();
            let has_term = FORBIDDEN_TERMS.iter().any(|t| lower.contains(t));
            let len = text.encode_utf16().count();
            let expected = !has_term && (MIN_LENGTH..=MAX_LENGTH).contains(&len);

            assert_eq!(check(&text).pass(), expected, "{:?}", text);
        }
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(5000), "5,000");
        assert_eq!(thousands(50), "50");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_report_serializes_messages() {
        let value = serde_json::to_value(check("Guaranteed.")).unwrap();
        assert_eq!(value["pass"], false);
        assert_eq!(value["issues"][0], "Contains forbidden term: \"guaranteed\"");
        assert_eq!(value["issues"][1], "Content is too short (minimum 50 characters)");
        assert_eq!(value["suggestions"].as_array().map(Vec::len), Some(0));

        let value = serde_json::to_value(check_content(CLEAN, ContentType::BlogPost)).unwrap();
        assert_eq!(value["pass"], true);
        assert_eq!(
            value["suggestions"][0],
            format!("Consider adding market analysis disclaimer: \"{}\"", MARKET_ANALYSIS_DISCLAIMER)
        );
    }
}
