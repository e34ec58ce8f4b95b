//! Sort comparator selector.

use core::cmp::Ordering;
use core::str::FromStr;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};

use storefront_catalog::ProductRecord;
use storefront_core::DomainError;

/// Comparator over two products.
pub type Comparator = fn(&ProductRecord, &ProductRecord) -> Ordering;

/// Value of the shop's sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Catalog order; no comparator.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Name,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::Name => "name",
        }
    }

    /// Parse a dropdown token; anything unknown means `featured`.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: DomainError| {
            tracing::debug!(error = %err, "falling back to featured order");
            SortMode::Featured
        })
    }
}

impl core::fmt::Display for SortMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(SortMode::Featured),
            "price-low" => Ok(SortMode::PriceLow),
            "price-high" => Ok(SortMode::PriceHigh),
            "name" => Ok(SortMode::Name),
            other => Err(DomainError::invalid_token("sort mode", other)),
        }
    }
}

/// `None` means "keep the filtered sequence in catalog order".
pub fn get_comparator(mode: SortMode) -> Option<Comparator> {
    match mode {
        SortMode::Featured => None,
        SortMode::PriceLow => Some(by_price_ascending),
        SortMode::PriceHigh => Some(by_price_descending),
        SortMode::Name => Some(by_name),
    }
}

fn by_price_ascending(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_descending(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    b.price.total_cmp(&a.price)
}

thread_local! {
    /// Root collation (CLDR), so accented Latin and Cyrillic letters sort
    /// next to their base letters.
    static NAME_COLLATOR: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default())
            .inspect_err(|err| tracing::warn!(error = %err, "name collator unavailable"))
            .ok();
}

/// Collation order first, then by code point so the order stays total.
fn by_name(a: &ProductRecord, b: &ProductRecord) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(&a.name, &b.name),
            None => Ordering::Equal,
        })
        .then_with(|| a.name.cmp(&b.name))
}
