//! Property catalogs.
//!
//! A catalog is the full ordered list of property names that requests are
//! resolved against. The resolver only needs the number of entries and the
//! name at each position, so any representation can act as a catalog.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Ordered collection of known property names.
pub trait PropertyCatalog {
    /// Number of properties in the catalog.
    fn len(&self) -> usize;

    /// Name of the property at `index`, or `None` past the end.
    fn name_at(&self, index: usize) -> Option<Cow<'_, str>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first property equal to `name`, ignoring ASCII case.
    fn position(&self, name: &str) -> Option<usize> {
        (0..self.len()).find(|&index| {
            self.name_at(index)
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        })
    }
}

impl<S: AsRef<str>> PropertyCatalog for [S] {
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn name_at(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|name| Cow::Borrowed(name.as_ref()))
    }
}

impl<S: AsRef<str>> PropertyCatalog for Vec<S> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn name_at(&self, index: usize) -> Option<Cow<'_, str>> {
        self.as_slice().name_at(index)
    }
}

impl<C: PropertyCatalog + ?Sized> PropertyCatalog for &C {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn name_at(&self, index: usize) -> Option<Cow<'_, str>> {
        (**self).name_at(index)
    }
}

/// Catalog backed by an entry count and an accessor function.
///
/// Lets callers expose names held in any structure (string tables, memory
/// mapped files) without copying them into a `Vec` first.
pub struct FnCatalog<F> {
    len: usize,
    accessor: F,
}

impl<F> FnCatalog<F>
where
    F: Fn(usize) -> Option<String>,
{
    /// Catalog of `len` entries; `accessor` returns the name at an index.
    pub fn new(len: usize, accessor: F) -> Self {
        Self { len, accessor }
    }
}

impl<F> PropertyCatalog for FnCatalog<F>
where
    F: Fn(usize) -> Option<String>,
{
    fn len(&self) -> usize {
        self.len
    }

    fn name_at(&self, index: usize) -> Option<Cow<'_, str>> {
        if index >= self.len {
            return None;
        }
        (self.accessor)(index).map(Cow::Owned)
    }
}

impl<F> fmt::Debug for FnCatalog<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCatalog").field("len", &self.len).finish()
    }
}

/// Compare two names after ASCII case folding.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOURS: [&str; 3] = ["Red", "Yellow", "Green"];

    #[test]
    fn test_slice_catalog() {
        let catalog: &[&str] = &COLOURS;
        assert_eq!(PropertyCatalog::len(catalog), 3);
        assert_eq!(catalog.name_at(1).as_deref(), Some("Yellow"));
        assert!(catalog.name_at(3).is_none());
    }

    #[test]
    fn test_position_ignores_case() {
        let catalog: Vec<String> = COLOURS.iter().map(|s| s.to_string()).collect();
        assert_eq!(catalog.position("yellow"), Some(1));
        assert_eq!(catalog.position("GREEN"), Some(2));
        assert_eq!(catalog.position("Blue"), None);
    }

    #[test]
    fn test_fn_catalog() {
        let catalog = FnCatalog::new(COLOURS.len(), |index| {
            COLOURS.get(index).map(|name| name.to_string())
        });
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.name_at(0).as_deref(), Some("Red"));
        assert!(catalog.name_at(7).is_none());
        assert_eq!(catalog.position("green"), Some(2));
    }

    #[test]
    fn test_fn_catalog_respects_len() {
        let catalog = FnCatalog::new(1, |index| COLOURS.get(index).map(|name| name.to_string()));
        assert!(catalog.name_at(1).is_none());
        assert_eq!(catalog.position("Yellow"), None);
    }

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("black", "Blue"), Ordering::Less);
        assert_eq!(cmp_ignore_case("YELLOW", "yellow"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("Yellow", "Black"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("Blue", "Blues"), Ordering::Less);
    }
}
