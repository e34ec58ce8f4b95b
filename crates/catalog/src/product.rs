use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Currency shown when a product does not name one.
pub const DEFAULT_CURRENCY: &str = "грн";

/// One catalog item, as authored in the content document.
///
/// The document uses short flag names (`new`, `sold`, `img`, ...); they are
/// mapped onto descriptive field names here. Every optional attribute has a
/// default so a sparse entry still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Non-negative; meaningful for display only when neither sold nor on request.
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(rename = "new", default)]
    pub is_new: bool,
    #[serde(rename = "bestseller", default)]
    pub is_bestseller: bool,
    #[serde(rename = "sold", default)]
    pub is_sold: bool,
    #[serde(rename = "priceOnRequest", default)]
    pub price_on_request: bool,
    #[serde(rename = "img", default)]
    pub image_url: String,
    #[serde(rename = "gallery", default)]
    pub gallery_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl ProductRecord {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            price: 0.0,
            currency: None,
            sizes: Vec::new(),
            is_new: false,
            is_bestseller: false,
            is_sold: false,
            price_on_request: false,
            image_url: String::new(),
            gallery_urls: Vec::new(),
            description: String::new(),
        }
    }

    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
