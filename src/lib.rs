//! Evidence collection and required-property resolution for request
//! classification.
//!
//! - [`evidence`]: a fixed-capacity store of request key/value pairs tagged
//!   by origin, with category-filtered iteration and lazy value parsing.
//! - [`properties`]: resolves a caller's list of required property names
//!   against a catalog into a sorted, deduplicated, case-insensitive index.
//! - [`config`]: TOML and environment configuration for both.

pub mod config;
pub mod evidence;
pub mod properties;

pub use config::{ConfigError, ConfigResult, CoreConfig};
pub use evidence::{
    CategoryMask, EvidenceCategory, EvidenceError, EvidencePair, EvidenceResult, EvidenceStore,
};
pub use properties::{
    PropertiesError, PropertiesResult, PropertyCatalog, RequiredProperties, ResolvedProperties,
};
