//! Regex-based extraction of emails and phone numbers from body text.
//!
//! Patterns are compiled once per process. Both extractors run over the
//! decoded body text as-is, not the parsed tree, so matches in attributes
//! or scripts count too.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid pattern")
});

// Parenthesized area codes, hyphen/dot/space separated groups, and an
// optional +<country code> prefix.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}").expect("valid pattern")
});

/// Extracts email-like substrings, deduplicated by first occurrence.
#[must_use]
pub fn emails(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EMAIL
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .filter(|email| seen.insert(email.clone()))
        .collect()
}

/// Extracts North-American-style phone numbers in match order.
#[must_use]
pub fn phone_numbers(text: &str) -> Vec<String> {
    PHONE
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emails_found_in_order() {
        let found = emails("Contact info@example.com or support@test.org today");
        assert_eq!(found, vec!["info@example.com", "support@test.org"]);
    }

    #[test]
    fn test_emails_deduplicated_by_first_occurrence() {
        let found = emails("a@b.com then c@d.org then a@b.com again");
        assert_eq!(found, vec!["a@b.com", "c@d.org"]);
    }

    #[test]
    fn test_no_emails_is_empty() {
        assert!(emails("nothing to see here").is_empty());
    }

    #[test]
    fn test_phone_parenthesized_area_code() {
        let found = phone_numbers("Call (800) 123-4567 now");
        assert_eq!(found, vec!["(800) 123-4567"]);
    }

    #[test]
    fn test_phone_hyphen_separated() {
        let found = phone_numbers("Fax: 212-555-7890.");
        assert_eq!(found, vec!["212-555-7890"]);
    }

    #[test]
    fn test_phone_with_country_code_is_single_match() {
        let found = phone_numbers("+1 800-123-4567");
        assert_eq!(found, vec!["+1 800-123-4567"]);
    }

    #[test]
    fn test_phones_not_deduplicated() {
        let found = phone_numbers("212-555-7890 or 212-555-7890");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_no_phones_is_empty() {
        assert!(phone_numbers("no numbers").is_empty());
    }
}
