//! Evidence categories and the masks used to filter them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Origin of a piece of evidence.
///
/// Every category occupies a distinct bit so categories can be combined
/// into a [`CategoryMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum EvidenceCategory {
    /// HTTP header treated as an opaque string.
    HttpHeaderString = 1 << 0,
    /// HTTP header carrying one or more IP addresses.
    HttpHeaderIpAddresses = 1 << 1,
    /// Server variable supplied by the hosting environment.
    ServerVar = 1 << 2,
    /// Query string parameter.
    Query = 1 << 3,
    /// Cookie value.
    Cookie = 1 << 4,
    /// Evidence that no consumer should look at unless asked explicitly.
    #[default]
    Ignore = 1 << 7,
}

impl EvidenceCategory {
    /// All categories, in bit order.
    pub const VARIANTS: [EvidenceCategory; 6] = [
        EvidenceCategory::HttpHeaderString,
        EvidenceCategory::HttpHeaderIpAddresses,
        EvidenceCategory::ServerVar,
        EvidenceCategory::Query,
        EvidenceCategory::Cookie,
        EvidenceCategory::Ignore,
    ];

    /// Raw bit value of the category.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Stable lowercase label, used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            EvidenceCategory::HttpHeaderString => "header",
            EvidenceCategory::HttpHeaderIpAddresses => "header_ip_addresses",
            EvidenceCategory::ServerVar => "server",
            EvidenceCategory::Query => "query",
            EvidenceCategory::Cookie => "cookie",
            EvidenceCategory::Ignore => "ignore",
        }
    }

    /// Whether this category is contained in `mask`.
    ///
    /// This is a subset test: the category's bits must all be present in
    /// the mask, overlapping is not enough.
    pub const fn is_in(self, mask: CategoryMask) -> bool {
        (self.bits() & mask.bits()) == self.bits()
    }
}

impl fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bitwise union of [`EvidenceCategory`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMask(u32);

impl CategoryMask {
    /// Matches no category.
    pub const NONE: CategoryMask = CategoryMask(0);

    /// Both kinds of HTTP header evidence.
    pub const HTTP_HEADERS: CategoryMask = CategoryMask(
        EvidenceCategory::HttpHeaderString.bits() | EvidenceCategory::HttpHeaderIpAddresses.bits(),
    );

    /// Every real category. Excludes [`EvidenceCategory::Ignore`].
    pub const ALL: CategoryMask = CategoryMask(
        EvidenceCategory::HttpHeaderString.bits()
            | EvidenceCategory::HttpHeaderIpAddresses.bits()
            | EvidenceCategory::ServerVar.bits()
            | EvidenceCategory::Query.bits()
            | EvidenceCategory::Cookie.bits(),
    );

    /// Every category including [`EvidenceCategory::Ignore`].
    pub const EVERYTHING: CategoryMask =
        CategoryMask(CategoryMask::ALL.0 | EvidenceCategory::Ignore.bits());

    /// Build a mask from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value of the mask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Add a category to the mask.
    pub const fn with(self, category: EvidenceCategory) -> Self {
        Self(self.0 | category.bits())
    }

    /// Whether `category` passes this mask.
    pub const fn contains(self, category: EvidenceCategory) -> bool {
        category.is_in(self)
    }

    /// Whether the mask has no bits set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<EvidenceCategory> for CategoryMask {
    fn from(category: EvidenceCategory) -> Self {
        Self(category.bits())
    }
}

impl BitOr for EvidenceCategory {
    type Output = CategoryMask;

    fn bitor(self, rhs: Self) -> CategoryMask {
        CategoryMask(self.bits() | rhs.bits())
    }
}

impl BitOr<EvidenceCategory> for CategoryMask {
    type Output = CategoryMask;

    fn bitor(self, rhs: EvidenceCategory) -> CategoryMask {
        self.with(rhs)
    }
}

impl BitOr for CategoryMask {
    type Output = CategoryMask;

    fn bitor(self, rhs: Self) -> CategoryMask {
        CategoryMask(self.0 | rhs.0)
    }
}

impl BitOrAssign<EvidenceCategory> for CategoryMask {
    fn bitor_assign(&mut self, rhs: EvidenceCategory) {
        self.0 |= rhs.bits();
    }
}
