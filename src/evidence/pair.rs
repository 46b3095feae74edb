//! Evidence pairs and value parsing.

use std::borrow::Cow;

use tracing::trace;

use crate::evidence::category::EvidenceCategory;

/// Value produced by parsing an evidence pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue<'a> {
    /// Textual value, borrowed when parsing did not transform it.
    Text(Cow<'a, str>),
}

impl<'a> ParsedValue<'a> {
    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ParsedValue::Text(text) => &**text,
        }
    }

    /// Whether the value is a view of the original rather than an owned copy.
    pub fn is_borrowed(&self) -> bool {
        match self {
            ParsedValue::Text(text) => matches!(text, Cow::Borrowed(_)),
        }
    }
}

/// A single key/value input tagged with its origin.
///
/// `field` and `original_value` are borrowed from the caller for the
/// lifetime `'a`; the parsed value is owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidencePair<'a> {
    pub(crate) category: EvidenceCategory,
    pub(crate) field: &'a str,
    pub(crate) original_value: &'a str,
    pub(crate) parsed_value: Option<ParsedValue<'a>>,
}

impl<'a> EvidencePair<'a> {
    pub(crate) fn new(category: EvidenceCategory, field: &'a str, original_value: &'a str) -> Self {
        Self {
            category,
            field,
            original_value,
            parsed_value: None,
        }
    }

    /// Origin of the pair.
    pub fn category(&self) -> EvidenceCategory {
        self.category
    }

    /// Field name, without any key prefix.
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// Value as supplied by the caller.
    pub fn original_value(&self) -> &'a str {
        self.original_value
    }

    /// Parsed value, present once the pair has been visited by an iteration.
    pub fn parsed_value(&self) -> Option<&ParsedValue<'a>> {
        self.parsed_value.as_ref()
    }

    /// Parsed value as text, falling back to the original value.
    pub fn value(&self) -> &str {
        match &self.parsed_value {
            Some(parsed) => parsed.as_str(),
            None => self.original_value,
        }
    }

    /// Whether the value has been parsed by an iteration.
    pub fn is_parsed(&self) -> bool {
        self.parsed_value.is_some()
    }
}

/// How the value of a category is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// The parsed value is the original value.
    Identity,
    /// Structured IP address parsing. Not implemented; the raw value is kept.
    IpAddresses,
}

impl ParseStrategy {
    /// Strategy used for values of `category`.
    pub fn for_category(category: EvidenceCategory) -> Self {
        match category {
            EvidenceCategory::HttpHeaderIpAddresses => ParseStrategy::IpAddresses,
            EvidenceCategory::HttpHeaderString
            | EvidenceCategory::ServerVar
            | EvidenceCategory::Query
            | EvidenceCategory::Cookie
            | EvidenceCategory::Ignore => ParseStrategy::Identity,
        }
    }

    /// Parse `original_value`. `field` is only used for logging.
    pub fn apply<'a>(self, field: &str, original_value: &'a str) -> ParsedValue<'a> {
        match self {
            ParseStrategy::Identity => ParsedValue::Text(Cow::Borrowed(original_value)),
            ParseStrategy::IpAddresses => {
                trace!(field, "ip address parsing not implemented, keeping raw value");
                ParsedValue::Text(Cow::Borrowed(original_value))
            }
        }
    }
}

/// Parses evidence values on first access.
///
/// The store calls [`PairParser::parse`] at most once per pair.
pub trait PairParser {
    /// Parse the value of a pair with the given category and field.
    fn parse<'a>(
        &self,
        category: EvidenceCategory,
        field: &str,
        original_value: &'a str,
    ) -> ParsedValue<'a>;
}

/// Default parser dispatching on [`ParseStrategy::for_category`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryParser;

impl PairParser for CategoryParser {
    fn parse<'a>(
        &self,
        category: EvidenceCategory,
        field: &str,
        original_value: &'a str,
    ) -> ParsedValue<'a> {
        ParseStrategy::for_category(category).apply(field, original_value)
    }
}

impl<P: PairParser + ?Sized> PairParser for &P {
    fn parse<'a>(
        &self,
        category: EvidenceCategory,
        field: &str,
        original_value: &'a str,
    ) -> ParsedValue<'a> {
        (**self).parse(category, field, original_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_per_category() {
        assert_eq!(
            ParseStrategy::for_category(EvidenceCategory::HttpHeaderIpAddresses),
            ParseStrategy::IpAddresses
        );
        for category in [
            EvidenceCategory::HttpHeaderString,
            EvidenceCategory::ServerVar,
            EvidenceCategory::Query,
            EvidenceCategory::Cookie,
            EvidenceCategory::Ignore,
        ] {
            assert_eq!(ParseStrategy::for_category(category), ParseStrategy::Identity);
        }
    }

    #[test]
    fn test_identity_borrows_original() {
        let parsed = CategoryParser.parse(EvidenceCategory::Query, "q", "value");
        assert_eq!(parsed.as_str(), "value");
        assert!(parsed.is_borrowed());
    }

    #[test]
    fn test_ip_addresses_keep_raw_value() {
        let parsed = CategoryParser.parse(
            EvidenceCategory::HttpHeaderIpAddresses,
            "X-Forwarded-For",
            "10.0.0.1, 192.168.1.1",
        );
        assert_eq!(parsed.as_str(), "10.0.0.1, 192.168.1.1");
    }

    #[test]
    fn test_pair_value_falls_back_to_original() {
        let mut pair = EvidencePair::new(EvidenceCategory::Cookie, "id", "abc");
        assert!(!pair.is_parsed());
        assert_eq!(pair.value(), "abc");

        pair.parsed_value = Some(ParsedValue::Text(Cow::Owned("ABC".to_string())));
        assert!(pair.is_parsed());
        assert_eq!(pair.value(), "ABC");
        assert_eq!(pair.original_value(), "abc");
    }
}
