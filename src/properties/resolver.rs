use std::collections::TryReserveError;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::properties::catalog::{cmp_ignore_case, PropertyCatalog};
use crate::properties::config::PropertiesConfig;
use crate::properties::required::RequiredProperties;

/// Errors that can occur while resolving required properties.
#[derive(Error, Debug)]
pub enum PropertiesError {
    /// Storage for the resolved set could not be allocated.
    #[error("Allocation error: {0}")]
    Allocation(#[from] TryReserveError),

    /// The catalog reported no name for an index below its length.
    #[error("Catalog has no name at index {index}")]
    MissingCatalogName { index: usize },
}

/// Result type for property resolution.
pub type PropertiesResult<T> = Result<T, PropertiesError>;

/// A required property and its position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredProperty {
    /// Name as spelled in the catalog.
    pub name: String,
    /// Index of the property in the catalog it was resolved against.
    pub catalog_index: usize,
}

/// Canonical index of the properties a caller requires.
///
/// Built once from a [`RequiredProperties`] request and a catalog, then
/// only read. Requested names are deduplicated ignoring case, names the
/// catalog does not know are dropped, and the remainder is sorted ignoring
/// case. The position of a property in that order is its required index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperties {
    properties: Vec<RequiredProperty>,
    /// Positions into `properties` in case-insensitive name order.
    #[serde(skip)]
    lookup: Vec<usize>,
}

impl ResolvedProperties {
    /// Resolve `required` against `catalog` with default configuration.
    ///
    /// `None` selects every catalog property, in catalog order.
    pub fn new<C>(required: Option<&RequiredProperties<'_>>, catalog: &C) -> PropertiesResult<Self>
    where
        C: PropertyCatalog + ?Sized,
    {
        Self::with_config(required, catalog, &PropertiesConfig::default())
    }

    /// Resolve `required` against `catalog`, splitting delimited lists on
    /// the separators in `config`.
    ///
    /// Fails with [`PropertiesError::MissingCatalogName`] when the whole
    /// catalog is selected and it has no name for an index below its length.
    pub fn with_config<C>(
        required: Option<&RequiredProperties<'_>>,
        catalog: &C,
        config: &PropertiesConfig,
    ) -> PropertiesResult<Self>
    where
        C: PropertyCatalog + ?Sized,
    {
        let requested = required
            .map(|required| required.requested_names(config))
            .unwrap_or_default();

        let resolved = if requested.is_empty() {
            Self::all(catalog)?
        } else {
            Self::subset(&requested, catalog)?
        };

        debug!(
            requested = requested.len(),
            resolved = resolved.len(),
            catalog = catalog.len(),
            "resolved required properties"
        );
        Ok(resolved)
    }

    fn all<C>(catalog: &C) -> PropertiesResult<Self>
    where
        C: PropertyCatalog + ?Sized,
    {
        let mut properties = Vec::new();
        properties.try_reserve_exact(catalog.len())?;
        for catalog_index in 0..catalog.len() {
            let name = catalog
                .name_at(catalog_index)
                .ok_or(PropertiesError::MissingCatalogName {
                    index: catalog_index,
                })?;
            properties.push(RequiredProperty {
                name: name.into_owned(),
                catalog_index,
            });
        }
        Self::from_properties(properties)
    }

    fn subset<C, S>(requested: &[S], catalog: &C) -> PropertiesResult<Self>
    where
        C: PropertyCatalog + ?Sized,
        S: AsRef<str>,
    {
        let mut distinct: Vec<&str> = requested.iter().map(AsRef::as_ref).collect();
        distinct.sort_unstable_by(|a, b| cmp_ignore_case(a, b));
        distinct.dedup_by(|a, b| a.eq_ignore_ascii_case(*b));

        let mut properties = Vec::new();
        properties.try_reserve_exact(distinct.len())?;
        for name in distinct {
            let Some(catalog_index) = catalog.position(name) else {
                debug!(name, "required property not in catalog, skipping");
                continue;
            };
            let name = catalog
                .name_at(catalog_index)
                .map_or_else(|| name.to_string(), |found| found.into_owned());
            properties.push(RequiredProperty {
                name,
                catalog_index,
            });
        }
        Self::from_properties(properties)
    }

    fn from_properties(properties: Vec<RequiredProperty>) -> PropertiesResult<Self> {
        let mut lookup = Vec::new();
        lookup.try_reserve_exact(properties.len())?;
        lookup.extend(0..properties.len());
        lookup.sort_by(|&a, &b| cmp_ignore_case(&properties[a].name, &properties[b].name));
        Ok(Self { properties, lookup })
    }

    /// Required index of `name`, ignoring case.
    ///
    /// Returns `None` for names that were never requested and for names
    /// that were requested but are missing from the catalog.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lookup
            .binary_search_by(|&candidate| cmp_ignore_case(&self.properties[candidate].name, name))
            .ok()
            .map(|found| self.lookup[found])
    }

    /// Required index of `name`, or `-1` when it is not in the set.
    pub fn index_of(&self, name: &str) -> i32 {
        self.position(name)
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// Name of the property at a required index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len). Indices are expected
    /// to come from [`position`](Self::position) or from enumerating the set.
    pub fn name_at(&self, index: usize) -> &str {
        &self.properties[index].name
    }

    /// Catalog index of the property at a required index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn catalog_index_at(&self, index: usize) -> usize {
        self.properties[index].catalog_index
    }

    /// Property at a required index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&RequiredProperty> {
        self.properties.get(index)
    }

    /// Number of required properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is required.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in required-index order.
    pub fn iter(&self) -> std::slice::Iter<'_, RequiredProperty> {
        self.properties.iter()
    }

    /// Names in required-index order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.iter().map(|property| property.name.as_str())
    }
}

impl<'p> IntoIterator for &'p ResolvedProperties {
    type Item = &'p RequiredProperty;
    type IntoIter = std::slice::Iter<'p, RequiredProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
