//! Wire shape of the content document (`content.json`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// Site header: brand name and slogan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandHeader {
    pub name: String,
    #[serde(default)]
    pub slogan: String,
}

impl Default for BrandHeader {
    fn default() -> Self {
        Self {
            name: "Barboss Room".to_string(),
            slogan: "Premium streetwear.".to_string(),
        }
    }
}

/// A home-page category tile; `url` usually points at `shop.html?cat=...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbookEntry {
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Optional about-page copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// The whole document. Missing collections load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default)]
    pub brand: BrandHeader,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub lookbook: Vec<LookbookEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutContent>,
    /// Per-brand copy overriding the built-in descriptions.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub brand_descriptions: HashMap<String, String>,
}
