//! Email domain gate.
//!
//! Pure rules evaluated once the group data for a submitted code is known.
//! No I/O and no cache mutation; email uniqueness is looked up by the
//! caller and added to the same batch.

use super::{AllowedDomains, FieldError};

/// Domain part of an email address.
///
/// Requires exactly one `@` and a non-empty domain. The local part is not
/// inspected; email syntax is the host form's concern.
pub fn email_domain(email: &str) -> Option<&str> {
    let mut parts = email.split('@').skip(1);
    let domain = parts.next()?;
    if parts.next().is_some() || domain.is_empty() {
        return None;
    }
    Some(domain)
}

/// Checks `email` against the group's allowed domains.
///
/// - Domains known and non-empty: the email must have a domain in the set,
///   otherwise `invalidEmail`. A missing or malformed email fails here.
/// - Domains known but empty: no restriction, not even a required email.
/// - Domains unknown while a code was supplied: the code never resolved,
///   so `invalidGroup`.
/// - Domains unknown and no code: nothing to check.
pub fn check(email: Option<&str>, allowed_domains: Option<&AllowedDomains>, code_supplied: bool) -> Vec<FieldError> {
    match allowed_domains {
        Some(domains) if domains.is_unrestricted() => Vec::new(),
        Some(domains) => {
            let accepted = email
                .and_then(email_domain)
                .is_some_and(|domain| domains.contains(domain));
            if accepted {
                Vec::new()
            } else {
                vec![FieldError::invalid_email()]
            }
        }
        None if code_supplied => vec![FieldError::invalid_group()],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::MessageCode;
    use proptest::prelude::*;

    fn domains() -> AllowedDomains {
        AllowedDomains::parse("b.com,c.com")
    }

    #[test]
    fn email_in_allowed_domain_passes() {
        assert!(check(Some("a@b.com"), Some(&domains()), true).is_empty());
        assert!(check(Some("a@c.com"), Some(&domains()), true).is_empty());
    }

    #[test]
    fn email_outside_allowed_domains_fails() {
        let errors = check(Some("a@d.com"), Some(&domains()), true);
        assert_eq!(errors, vec![FieldError::invalid_email()]);
    }

    #[test]
    fn email_without_at_fails_when_domains_known() {
        let errors = check(Some("ab.com"), Some(&domains()), true);
        assert_eq!(errors[0].message, MessageCode::InvalidEmail);
    }

    #[test]
    fn email_without_at_passes_when_no_code() {
        assert!(check(Some("ab.com"), None, false).is_empty());
    }

    #[test]
    fn email_with_two_ats_fails() {
        assert_eq!(
            check(Some("a@x@b.com"), Some(&domains()), true),
            vec![FieldError::invalid_email()]
        );
    }

    #[test]
    fn missing_email_fails_when_domains_known() {
        assert_eq!(check(None, Some(&domains()), true), vec![FieldError::invalid_email()]);
    }

    #[test]
    fn unresolved_code_is_invalid_group() {
        assert_eq!(check(Some("a@b.com"), None, true), vec![FieldError::invalid_group()]);
    }

    #[test]
    fn empty_domain_list_is_unrestricted() {
        let open = AllowedDomains::parse("");
        assert!(check(Some("anyone@anywhere.net"), Some(&open), true).is_empty());
    }

    #[test]
    fn empty_local_part_is_judged_by_domain_only() {
        let acme = AllowedDomains::parse("acme.com");
        assert!(check(Some("@acme.com"), Some(&acme), true).is_empty());
        assert_eq!(check(Some("@other.com"), Some(&acme), true), vec![FieldError::invalid_email()]);
    }

    #[test]
    fn missing_email_passes_unrestricted_group() {
        let open = AllowedDomains::parse("");
        assert!(check(None, Some(&open), true).is_empty());
    }

    #[test]
    fn email_domain_extracts_suffix() {
        assert_eq!(email_domain("jo@acme.com"), Some("acme.com"));
        assert_eq!(email_domain("@acme.com"), Some("acme.com"));
        assert_eq!(email_domain("jo@"), None);
        assert_eq!(email_domain("jo"), None);
    }

    proptest! {
        #[test]
        fn allowed_domain_always_passes(local in "[a-z0-9.]{1,12}", pick in 0usize..2) {
            let allowed = domains();
            let domain = allowed.iter().nth(pick).unwrap().to_string();
            let email = format!("{}@{}", local, domain);
            prop_assert!(check(Some(&email), Some(&allowed), true).is_empty());
        }

        #[test]
        fn foreign_domain_always_fails(local in "[a-z0-9]{1,12}", domain in "[a-z]{1,10}\\.org") {
            let email = format!("{}@{}", local, domain);
            let errors = check(Some(&email), Some(&domains()), true);
            prop_assert_eq!(errors, vec![FieldError::invalid_email()]);
        }
    }
}
