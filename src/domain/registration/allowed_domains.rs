//! Email domains a group accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of email domains.
///
/// Parsed from the authority's comma-joined string. Entries are trimmed,
/// blanks dropped, and duplicates (compared case-insensitively) removed
/// while keeping first-seen order. An empty set places no restriction on
/// the email domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedDomains(Vec<String>);

impl AllowedDomains {
    /// Parses a comma-separated domain list.
    pub fn parse(csv: &str) -> Self {
        let mut domains: Vec<String> = Vec::new();
        for entry in csv.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            if !domains.iter().any(|known| known.eq_ignore_ascii_case(entry)) {
                domains.push(entry.to_string());
            }
        }
        Self(domains)
    }

    /// Membership test, ignoring ASCII case.
    pub fn contains(&self, domain: &str) -> bool {
        self.0.iter().any(|known| known.eq_ignore_ascii_case(domain))
    }

    /// True when no domain restriction applies.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Machine-readable form, as used for matching and on the wire.
    pub fn to_csv(&self) -> String {
        self.0.join(",")
    }

    /// Human-readable form for the rendered page: `"a.com, b.com"`.
    pub fn display(&self) -> String {
        self.0.join(", ")
    }
}

impl fmt::Display for AllowedDomains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_commas() {
        let domains = AllowedDomains::parse("acme.com,acme.org");
        assert_eq!(domains.iter().collect::<Vec<_>>(), vec!["acme.com", "acme.org"]);
    }

    #[test]
    fn parse_trims_and_drops_blanks() {
        let domains = AllowedDomains::parse(" acme.com , ,acme.org,");
        assert_eq!(domains.len(), 2);
        assert!(domains.contains("acme.org"));
    }

    #[test]
    fn parse_removes_duplicates_keeping_order() {
        let domains = AllowedDomains::parse("b.com,a.com,B.COM");
        assert_eq!(domains.to_csv(), "b.com,a.com");
    }

    #[test]
    fn empty_string_is_unrestricted() {
        assert!(AllowedDomains::parse("").is_unrestricted());
        assert!(!AllowedDomains::parse("a.com").is_unrestricted());
    }

    #[test]
    fn contains_ignores_case() {
        let domains = AllowedDomains::parse("Acme.com");
        assert!(domains.contains("acme.COM"));
        assert!(!domains.contains("acme.co"));
    }

    #[test]
    fn display_is_separate_from_csv() {
        let domains = AllowedDomains::parse("acme.com,acme.org");
        assert_eq!(domains.display(), "acme.com, acme.org");
        assert_eq!(domains.to_csv(), "acme.com,acme.org");
    }
}
