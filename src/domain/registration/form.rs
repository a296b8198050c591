//! Request and page types exchanged with the host form engine.

use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{FieldErrors, GROUP_CODE_FIELD};

/// Page attribute holding the group's display name.
pub const GROUP_NAME_ATTRIBUTE: &str = "groupName";
/// Page attribute holding the human-readable allowed domains.
pub const ALLOWED_DOMAINS_ATTRIBUTE: &str = "allowedDomains";

/// Multi-valued parameter map (query string or decoded form body).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormParams(HashMap<String, Vec<String>>);

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style single-value insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put_single(key, value);
        self
    }

    /// Replaces all values of `key` with `value`.
    pub fn put_single(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// First value of `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// True when `key` was submitted, even with an empty value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where a supplied group code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSource {
    /// Invite link (`?groupCode=...`), first visit.
    Query,
    /// Re-render after a failed form submission.
    Form,
}

/// One host HTTP request, as seen by the form phases.
#[derive(Debug, Clone, Default)]
pub struct FormRequest {
    pub query: FormParams,
    pub form: Option<FormParams>,
    pub headers: HeaderMap,
}

impl FormRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: FormParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_form(mut self, form: FormParams) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Group code from the query string, falling back to the submitted
    /// form. An empty value counts as no code.
    pub fn supplied_group_code(&self) -> Option<(&str, CodeSource)> {
        let from_query = self
            .query
            .first(GROUP_CODE_FIELD)
            .filter(|code| !code.is_empty())
            .map(|code| (code, CodeSource::Query));
        let from_form = || {
            self.form
                .as_ref()
                .and_then(|form| form.first(GROUP_CODE_FIELD))
                .filter(|code| !code.is_empty())
                .map(|code| (code, CodeSource::Form))
        };
        from_query.or_else(from_form)
    }

    /// Originating client address from a forwarding header.
    ///
    /// Takes the first token before any `,` or `:`. A missing or
    /// non-ASCII header yields an empty string.
    pub fn client_address(&self, header: &str) -> String {
        self.headers
            .get(header)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split([',', ':']).next())
            .map(|token| token.trim().to_string())
            .unwrap_or_default()
    }
}

/// What the host renders for the registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPage {
    pub errors: FieldErrors,
    pub attributes: BTreeMap<String, String>,
    pub form_data: FormParams,
}

impl FormPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn query_code_wins_over_form_code() {
        let request = FormRequest::new()
            .with_query(FormParams::new().with(GROUP_CODE_FIELD, "QUERY123"))
            .with_form(FormParams::new().with(GROUP_CODE_FIELD, "FORM1234"));

        assert_eq!(request.supplied_group_code(), Some(("QUERY123", CodeSource::Query)));
    }

    #[test]
    fn form_code_used_when_query_has_none() {
        let request = FormRequest::new().with_form(FormParams::new().with(GROUP_CODE_FIELD, "FORM1234"));
        assert_eq!(request.supplied_group_code(), Some(("FORM1234", CodeSource::Form)));
    }

    #[test]
    fn empty_code_counts_as_absent() {
        let request = FormRequest::new().with_query(FormParams::new().with(GROUP_CODE_FIELD, ""));
        assert_eq!(request.supplied_group_code(), None);
    }

    #[test]
    fn contains_key_sees_empty_values() {
        let params = FormParams::new().with(GROUP_CODE_FIELD, "");
        assert!(params.contains_key(GROUP_CODE_FIELD));
        assert_eq!(params.first(GROUP_CODE_FIELD), Some(""));
    }

    #[test]
    fn client_address_takes_first_token() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7:5123, 10.0.0.1"));
        let request = FormRequest::new().with_headers(headers);

        assert_eq!(request.client_address("X-Forwarded-For"), "203.0.113.7");
    }

    #[test]
    fn client_address_splits_on_comma() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("198.51.100.2, 10.0.0.1"));
        let request = FormRequest::new().with_headers(headers);

        assert_eq!(request.client_address("x-forwarded-for"), "198.51.100.2");
    }

    #[test]
    fn missing_header_yields_empty_address() {
        assert_eq!(FormRequest::new().client_address("X-Forwarded-For"), "");
    }

    #[test]
    fn page_attributes_round_trip() {
        let mut page = FormPage::new();
        page.set_attribute(GROUP_NAME_ATTRIBUTE, "Acme");
        assert_eq!(page.attribute(GROUP_NAME_ATTRIBUTE), Some("Acme"));
        page.remove_attribute(GROUP_NAME_ATTRIBUTE);
        assert_eq!(page.attribute(GROUP_NAME_ATTRIBUTE), None);
    }
}
