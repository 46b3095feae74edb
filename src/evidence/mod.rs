//! Evidence collection module.
//!
//! Evidence is the raw key/value input of a request (headers, query
//! parameters, cookies, server variables), tagged with the category derived
//! from its key prefix.
//!
//! # Example
//!
//! ```
//! use detection_core::evidence::{CategoryMask, EvidenceStore};
//!
//! let mut store = EvidenceStore::new(4);
//! store.add_key("header.User-Agent", "curl/8.0");
//! store.add_key("query.debug", "1");
//!
//! let mut headers = Vec::new();
//! store.iterate(CategoryMask::HTTP_HEADERS, |pair| {
//!     headers.push(pair.field());
//!     true
//! });
//! assert_eq!(headers, vec!["User-Agent"]);
//! ```

pub mod category;
pub mod config;
pub mod pair;
pub mod prefix;
pub mod store;

pub use category::{CategoryMask, EvidenceCategory};
pub use config::EvidenceStoreConfig;
pub use pair::{CategoryParser, EvidencePair, PairParser, ParseStrategy, ParsedValue};
pub use prefix::{PrefixEntry, PREFIX_MAP};
pub use store::{EvidenceError, EvidenceResult, EvidenceStore};
