//! Required-property requests.

use std::borrow::Cow;

use crate::properties::config::PropertiesConfig;
use crate::properties::resolver::ResolvedProperties;

/// The set of property names a caller is interested in.
///
/// Passing no request at all to the resolver, or a request that yields no
/// names, means every catalog property is required.
#[derive(Debug, Clone)]
pub enum RequiredProperties<'r> {
    /// Names separated by any of the configured separators, e.g.
    /// `"IsMobile, BrowserName"`.
    Delimited(&'r str),
    /// Explicit list of names.
    Names(Vec<Cow<'r, str>>),
    /// The names of a previously resolved set.
    Existing(&'r ResolvedProperties),
}

impl<'r> RequiredProperties<'r> {
    /// Build a request from any list of names.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'r, str>>,
    {
        RequiredProperties::Names(names.into_iter().map(Into::into).collect())
    }

    /// Requested names in request order, before deduplication.
    ///
    /// Delimited tokens are trimmed and empty tokens are skipped.
    pub fn requested_names(&self, config: &PropertiesConfig) -> Vec<Cow<'r, str>> {
        match self {
            RequiredProperties::Delimited(list) => split_list(*list, config)
                .into_iter()
                .map(Cow::Borrowed)
                .collect(),
            RequiredProperties::Names(names) => names
                .iter()
                .filter(|name| !name.trim().is_empty())
                .cloned()
                .collect(),
            RequiredProperties::Existing(existing) => {
                (*existing).names().map(Cow::Borrowed).collect()
            }
        }
    }
}

impl<'r> From<&'r str> for RequiredProperties<'r> {
    fn from(list: &'r str) -> Self {
        RequiredProperties::Delimited(list)
    }
}

impl<'r> From<&'r [&'r str]> for RequiredProperties<'r> {
    fn from(names: &'r [&'r str]) -> Self {
        RequiredProperties::names(names.iter().copied())
    }
}

impl<'r> From<Vec<String>> for RequiredProperties<'r> {
    fn from(names: Vec<String>) -> Self {
        RequiredProperties::names(names)
    }
}

impl<'r> From<&'r ResolvedProperties> for RequiredProperties<'r> {
    fn from(existing: &'r ResolvedProperties) -> Self {
        RequiredProperties::Existing(existing)
    }
}

fn split_list<'l>(list: &'l str, config: &PropertiesConfig) -> Vec<&'l str> {
    list.split(|c: char| config.is_separator(c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
