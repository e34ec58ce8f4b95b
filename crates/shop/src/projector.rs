//! Render projector: products in, card descriptors out.
//!
//! Pure and total. Display priority is sold > price on request > numeric
//! price, and the sold badge hides the new badge.

use serde::{Deserialize, Serialize};

use storefront_catalog::ProductRecord;
use storefront_core::{ProductId, ValueObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    None,
    New,
    Sold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PriceLabel {
    Numeric { amount: f64, currency: String },
    OnRequest,
    Sold,
}

impl ValueObject for PriceLabel {}

impl PriceLabel {
    pub fn for_product(product: &ProductRecord) -> Self {
        if product.is_sold {
            PriceLabel::Sold
        } else if product.price_on_request {
            PriceLabel::OnRequest
        } else {
            PriceLabel::Numeric {
                amount: product.price,
                currency: product.currency_or_default().to_string(),
            }
        }
    }
}

impl core::fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PriceLabel::Numeric { amount, currency } => write!(f, "{amount} {currency}"),
            PriceLabel::OnRequest => f.write_str("Цена по запросу"),
            PriceLabel::Sold => f.write_str("ПРОДАНО"),
        }
    }
}

impl Badge {
    pub fn for_product(product: &ProductRecord) -> Self {
        if product.is_sold {
            Badge::Sold
        } else if product.is_new {
            Badge::New
        } else {
            Badge::None
        }
    }
}

/// Everything a product card needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub product_id: ProductId,
    pub title: String,
    pub brand: String,
    pub image_url: String,
    pub badge: Badge,
    pub price_label: PriceLabel,
    /// Sold cards do not link to the product page.
    pub clickable: bool,
}

impl ValueObject for CardDescriptor {}

impl From<&ProductRecord> for CardDescriptor {
    fn from(product: &ProductRecord) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.name.clone(),
            brand: product.brand.clone(),
            image_url: product.image_url.clone(),
            badge: Badge::for_product(product),
            price_label: PriceLabel::for_product(product),
            clickable: !product.is_sold,
        }
    }
}

pub fn project<'a, I>(products: I) -> Vec<CardDescriptor>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    products.into_iter().map(CardDescriptor::from).collect()
}

/// Shop grid output: cards, results count, empty-state flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopView {
    pub cards: Vec<CardDescriptor>,
    pub results_count: usize,
    pub show_empty_state: bool,
}

impl ShopView {
    pub fn from_working_set(working_set: &[ProductRecord]) -> Self {
        let cards = project(working_set);
        Self {
            results_count: cards.len(),
            show_empty_state: cards.is_empty(),
            cards,
        }
    }
}
