//! Storefront content catalog.
//!
//! This crate owns the content document (products, categories, brands,
//! lookbook, about text) and the one-shot load that turns it into an
//! immutable [`ContentStore`]. Filtering, sorting and projection live in
//! `storefront-shop`.

pub mod document;
pub mod product;
pub mod source;
pub mod store;

pub use document::{AboutContent, BrandHeader, Category, ContentDocument, LookbookEntry};
pub use product::{DEFAULT_CURRENCY, ProductRecord};
pub use source::ContentSource;
pub use store::{ContentStore, LoadFailure};
