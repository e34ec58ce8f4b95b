//! Shop page logic: filter, sort, recompute, project.
//!
//! Everything here is synchronous and free of I/O. The UI layer builds a
//! [`FilterSelection`] and a [`SortMode`] from its widgets, hands them to the
//! [`CatalogPipeline`], and renders the [`ShopView`] it gets back.

pub mod entry;
pub mod filter;
pub mod pages;
pub mod pipeline;
pub mod projector;
pub mod sort;

pub use entry::{ProductEntry, ShopEntry, ShopShortcut};
pub use filter::{FilterSelection, PriceBucket, build_predicate};
pub use pages::{AboutPage, HomePage, ProductPage};
pub use pipeline::{CatalogPipeline, WorkingSet};
pub use projector::{Badge, CardDescriptor, PriceLabel, ShopView, project};
pub use sort::{Comparator, SortMode, get_comparator};
