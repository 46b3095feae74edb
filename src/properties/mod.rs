//! Required-property resolution.
//!
//! Callers name the properties they care about, possibly repeated and in
//! any case. [`ResolvedProperties`] turns that request into a sorted,
//! deduplicated index over a [`PropertyCatalog`] so later lookups by name
//! are a binary search.
//!
//! # Example
//!
//! ```
//! use detection_core::properties::{RequiredProperties, ResolvedProperties};
//!
//! let catalog = ["IsMobile", "BrowserName", "PlatformName"];
//! let required = RequiredProperties::from("platformname, IsMobile,Unknown");
//! let resolved = ResolvedProperties::new(Some(&required), &catalog[..]).expect("resolved");
//!
//! assert_eq!(resolved.index_of("IsMobile"), 0);
//! assert_eq!(resolved.index_of("PlatformName"), 1);
//! assert_eq!(resolved.index_of("BrowserName"), -1);
//! ```

pub mod catalog;
pub mod config;
pub mod required;
pub mod resolver;

pub use catalog::{FnCatalog, PropertyCatalog};
pub use config::PropertiesConfig;
pub use required::RequiredProperties;
pub use resolver::{PropertiesError, PropertiesResult, RequiredProperty, ResolvedProperties};
