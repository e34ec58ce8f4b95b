use std::collections::{HashMap, HashSet};

use thiserror::Error;

use storefront_core::{Entity, ProductId};

use crate::document::{AboutContent, BrandHeader, Category, ContentDocument, LookbookEntry};
use crate::product::ProductRecord;
use crate::source::ContentSource;

/// Copy for the house brands; the document's `brandDescriptions` override it.
const BUILTIN_BRAND_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Stone Island",
        "Since 1982, Stone Island has been the pinnacle of research in fibers and textiles. \
         Their innovative approach to garment design and unique dyeing techniques have made \
         them legends in streetwear culture.",
    ),
    (
        "C.P. Company",
        "Founded by Massimo Osti in 1971, C.P. Company pioneered garment dyeing and continues \
         to push boundaries with their Metropolis and Chrome collections.",
    ),
    (
        "Ma.Strum",
        "Born from a sailing heritage, Ma.Strum combines technical innovation with \
         contemporary design.",
    ),
    (
        "Peaceful Hooligan",
        "British streetwear brand inspired by terrace culture and the casual movement.",
    ),
    (
        "Weekend Offender",
        "Premium casual wear brand with roots in football terrace culture.",
    ),
];

/// The content document could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch content from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, per-load catalog.
///
/// Built once from a [`ContentDocument`]; nothing mutates it afterwards.
/// Share it behind an `Arc` when several pages need it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    brand: BrandHeader,
    products: Vec<ProductRecord>,
    index: HashMap<ProductId, usize>,
    categories: Vec<Category>,
    brands: Vec<String>,
    lookbook: Vec<LookbookEntry>,
    about: Option<AboutContent>,
    brand_descriptions: HashMap<String, String>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ContentStore {
    /// Empty but valid catalog, used when loading fails.
    pub fn empty() -> Self {
        Self::from_document(ContentDocument::default())
    }

    /// Build the store, dropping products whose id was already seen.
    pub fn from_document(doc: ContentDocument) -> Self {
        let mut seen = HashSet::with_capacity(doc.products.len());
        let mut products = Vec::with_capacity(doc.products.len());
        for product in doc.products {
            if seen.insert(product.id().clone()) {
                products.push(product);
            } else {
                tracing::warn!(product_id = %product.id, "duplicate product id; keeping first occurrence");
            }
        }

        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id().clone(), i))
            .collect();

        let mut brand_descriptions: HashMap<String, String> = BUILTIN_BRAND_DESCRIPTIONS
            .iter()
            .map(|(brand, text)| (brand.to_string(), text.to_string()))
            .collect();
        brand_descriptions.extend(doc.brand_descriptions);

        Self {
            brand: doc.brand,
            products,
            index,
            categories: doc.categories,
            brands: doc.brands,
            lookbook: doc.lookbook,
            about: doc.about,
            brand_descriptions,
        }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadFailure> {
        let doc: ContentDocument = serde_json::from_slice(bytes)?;
        Ok(Self::from_document(doc))
    }

    /// Fetch and parse the document. Single attempt, no retry.
    pub async fn load(source: &ContentSource) -> Result<Self, LoadFailure> {
        let bytes = match source {
            ContentSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| LoadFailure::Io {
                        path: path.display().to_string(),
                        source,
                    })?
            }
            ContentSource::Url(url) => fetch(url).await?,
        };

        let store = Self::from_json_slice(&bytes)?;
        tracing::info!(
            source = %source,
            products = store.products.len(),
            categories = store.categories.len(),
            "content loaded"
        );
        Ok(store)
    }

    /// Like [`ContentStore::load`], but degrades to [`ContentStore::empty`].
    pub async fn load_or_empty(source: &ContentSource) -> Self {
        match Self::load(source).await {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(source = %source, error = %err, "content load failed; using empty catalog");
                Self::empty()
            }
        }
    }

    pub fn brand_header(&self) -> &BrandHeader {
        &self.brand
    }

    /// Products in document order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn lookbook(&self) -> &[LookbookEntry] {
        &self.lookbook
    }

    pub fn about(&self) -> Option<&AboutContent> {
        self.about.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn product(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Index of `id` in document order.
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn first_product(&self) -> Option<&ProductRecord> {
        self.products.first()
    }

    pub fn brand_description(&self, brand: &str) -> String {
        self.brand_descriptions
            .get(brand)
            .cloned()
            .unwrap_or_else(|| format!("Premium {brand} merchandise, 100% authentic."))
    }
}

async fn fetch(url: &str) -> Result<Vec<u8>, LoadFailure> {
    let http_err = |source| LoadFailure::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(http_err)?;
    let body = response.bytes().await.map_err(http_err)?;
    Ok(body.to_vec())
}
