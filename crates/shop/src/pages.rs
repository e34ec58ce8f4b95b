//! Page views outside the shop grid: home, product detail, about.

use serde::{Deserialize, Serialize};

use storefront_catalog::{BrandHeader, Category, ContentStore, ProductRecord};
use storefront_core::ProductId;

use crate::entry::ProductEntry;
use crate::projector::{Badge, CardDescriptor, PriceLabel, project};

const NEW_ARRIVALS_LIMIT: usize = 4;
const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbookTile {
    pub img: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub brand: BrandHeader,
    pub categories: Vec<Category>,
    pub new_arrivals: Vec<CardDescriptor>,
    pub bestsellers: Vec<CardDescriptor>,
    pub lookbook: Vec<LookbookTile>,
}

impl HomePage {
    pub fn build(store: &ContentStore) -> Self {
        let products = store.products();
        let lookbook = store
            .lookbook()
            .iter()
            .enumerate()
            .map(|(i, entry)| LookbookTile {
                img: entry.img.clone(),
                alt: entry
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("Lookbook {}", i + 1)),
            })
            .collect();

        Self {
            brand: store.brand_header().clone(),
            categories: store.categories().to_vec(),
            new_arrivals: project(products.iter().filter(|p| p.is_new).take(NEW_ARRIVALS_LIMIT)),
            bestsellers: project(products.iter().filter(|p| p.is_bestseller)),
            lookbook,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryThumb {
    pub url: String,
    pub active: bool,
}

/// Detail block of the product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product_id: ProductId,
    pub title: String,
    pub brand: String,
    pub badge: Badge,
    pub price_label: PriceLabel,
    /// The detail page shows "new" even on sold items.
    pub show_new_badge: bool,
    pub description: String,
    pub main_image: String,
    pub gallery: Vec<GalleryThumb>,
    pub sizes: Vec<String>,
    pub brand_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub product: ProductDetail,
    pub related: Vec<CardDescriptor>,
}

impl ProductPage {
    /// `None` only when the catalog has no products at all.
    pub fn build(store: &ContentStore, entry: &ProductEntry) -> Option<Self> {
        let product = select_product(store, entry.id.as_ref())?;

        let gallery = product
            .gallery_urls
            .iter()
            .enumerate()
            .map(|(i, url)| GalleryThumb {
                url: url.clone(),
                active: i == 0,
            })
            .collect();

        let detail = ProductDetail {
            product_id: product.id.clone(),
            title: product.name.clone(),
            brand: product.brand.clone(),
            badge: Badge::for_product(product),
            price_label: PriceLabel::for_product(product),
            show_new_badge: product.is_new,
            description: product.description.clone(),
            main_image: product.image_url.clone(),
            gallery,
            sizes: product.sizes.clone(),
            brand_description: store.brand_description(&product.brand),
        };

        Some(Self {
            product: detail,
            related: project(related_products(store, product)),
        })
    }
}

/// Requested product, or the first catalog entry on a miss.
pub fn select_product<'a>(store: &'a ContentStore, id: Option<&ProductId>) -> Option<&'a ProductRecord> {
    if let Some(id) = id {
        if let Some(product) = store.product(id) {
            return Some(product);
        }
        tracing::debug!(product_id = %id, "product not found; showing first catalog entry");
    }
    store.first_product()
}

/// Up to four others from the same category, else up to four others of any category.
pub fn related_products<'a>(store: &'a ContentStore, current: &ProductRecord) -> Vec<&'a ProductRecord> {
    let others = || store.products().iter().filter(move |p| p.id != current.id);

    let same_category: Vec<_> = others()
        .filter(|p| p.category == current.category)
        .take(RELATED_LIMIT)
        .collect();
    if !same_category.is_empty() {
        return same_category;
    }
    others().take(RELATED_LIMIT).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPage {
    pub story: Option<String>,
    pub mission: Option<String>,
    pub team: Option<String>,
}

impl AboutPage {
    pub fn build(store: &ContentStore) -> Self {
        store
            .about()
            .map(|about| Self {
                story: about.story.clone(),
                mission: about.mission.clone(),
                team: about.team.clone(),
            })
            .unwrap_or_default()
    }
}
