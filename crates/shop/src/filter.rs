//! Filter predicate builder.
//!
//! A [`FilterSelection`] has four axes (category, brand, price bucket, size).
//! Each axis becomes one clause; clauses are AND-combined and an axis with
//! nothing selected is skipped, so an empty selection matches everything.

use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_catalog::ProductRecord;
use storefront_core::{DomainError, ValueObject};

/// Coarse price range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    #[serde(rename = "under-500")]
    Under500,
    #[serde(rename = "500-to-1000")]
    From500To1000,
    #[serde(rename = "over-1000")]
    Over1000,
}

impl PriceBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::Under500 => "under-500",
            PriceBucket::From500To1000 => "500-to-1000",
            PriceBucket::Over1000 => "over-1000",
        }
    }

    /// Both bounds of the middle bucket are inclusive.
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBucket::Under500 => price < 500.0,
            PriceBucket::From500To1000 => (500.0..=1000.0).contains(&price),
            PriceBucket::Over1000 => price > 1000.0,
        }
    }
}

impl core::fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBucket {
    type Err = DomainError;

    /// Accepts the canonical tokens and the radio values used by the shop markup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "under-500" | "0-500" => Ok(PriceBucket::Under500),
            "500-to-1000" | "500-1000" => Ok(PriceBucket::From500To1000),
            "over-1000" | "1000+" => Ok(PriceBucket::Over1000),
            other => Err(DomainError::invalid_token("price bucket", other)),
        }
    }
}

/// What the shop sidebar currently has checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub price_bucket: Option<PriceBucket>,
    pub sizes: BTreeSet<String>,
}

impl ValueObject for FilterSelection {}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    pub fn with_price_bucket(mut self, bucket: PriceBucket) -> Self {
        self.price_bucket = Some(bucket);
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.insert(size.into());
        self
    }

    /// True when no axis has a selection (the identity filter).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.brands.is_empty()
            && self.price_bucket.is_none()
            && self.sizes.is_empty()
    }

    pub fn matches_category(&self, product: &ProductRecord) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    pub fn matches_brand(&self, product: &ProductRecord) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand)
    }

    /// Compares the raw `price`, including sold and price-on-request items.
    pub fn matches_price(&self, product: &ProductRecord) -> bool {
        self.price_bucket
            .is_none_or(|bucket| bucket.contains(product.price))
    }

    pub fn matches_size(&self, product: &ProductRecord) -> bool {
        self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s))
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        self.matches_category(product)
            && self.matches_brand(product)
            && self.matches_price(product)
            && self.matches_size(product)
    }
}

/// Turn a selection into a predicate over products.
pub fn build_predicate(selection: &FilterSelection) -> impl Fn(&ProductRecord) -> bool + '_ {
    move |product| selection.matches(product)
}
