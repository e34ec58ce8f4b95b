//! Catalog pipeline: the shop page's working set.
//!
//! The pipeline owns two things: a shared handle to the full catalog and the
//! working set currently on screen. Every operation rebuilds the working set
//! from the full catalog, never from the previous working set:
//!
//! ```text
//! working_set = sort(filter(full_catalog, selection), mode)
//! ```
//!
//! so repeated filter changes cannot compound.

use std::sync::Arc;

use storefront_catalog::{ContentStore, ProductRecord};

use crate::entry::{ShopEntry, ShopShortcut};
use crate::filter::{FilterSelection, build_predicate};
use crate::projector::ShopView;
use crate::sort::{SortMode, get_comparator};

/// Ordered products currently displayed.
pub type WorkingSet = Vec<ProductRecord>;

#[derive(Debug, Clone)]
pub struct CatalogPipeline {
    full_catalog: Arc<ContentStore>,
    working_set: WorkingSet,
}

impl CatalogPipeline {
    /// Create a pipeline whose working set is the whole catalog.
    pub fn new(full_catalog: Arc<ContentStore>) -> Self {
        let mut pipeline = Self {
            full_catalog,
            working_set: Vec::new(),
        };
        pipeline.initialize();
        pipeline
    }

    pub fn full_catalog(&self) -> &ContentStore {
        &self.full_catalog
    }

    pub fn working_set(&self) -> &[ProductRecord] {
        &self.working_set
    }

    /// Identity copy of the catalog, in catalog order.
    pub fn initialize(&mut self) -> &[ProductRecord] {
        self.working_set = self.full_catalog.products().to_vec();
        &self.working_set
    }

    /// Same as [`CatalogPipeline::initialize`]; bound to "clear filters".
    pub fn clear(&mut self) -> &[ProductRecord] {
        tracing::debug!("filters cleared");
        self.initialize()
    }

    pub fn recompute(&mut self, selection: &FilterSelection, mode: SortMode) -> &[ProductRecord] {
        let predicate = build_predicate(selection);
        let mut next: WorkingSet = self
            .full_catalog
            .products()
            .iter()
            .filter(|p| predicate(*p))
            .cloned()
            .collect();

        // `sort_by` is stable, so ties keep catalog order.
        if let Some(cmp) = get_comparator(mode) {
            next.sort_by(cmp);
        }

        tracing::debug!(
            categories = selection.categories.len(),
            brands = selection.brands.len(),
            price_bucket = selection.price_bucket.map(|b| b.as_str()),
            sizes = selection.sizes.len(),
            sort = %mode,
            results = next.len(),
            "working set recomputed"
        );

        self.working_set = next;
        &self.working_set
    }

    /// Reorder the current working set without filtering it again.
    ///
    /// Used after a shortcut, whose membership is not a [`FilterSelection`].
    /// `Featured` restores catalog order.
    pub fn sort(&mut self, mode: SortMode) -> &[ProductRecord] {
        match get_comparator(mode) {
            Some(cmp) => self.working_set.sort_by(cmp),
            None => {
                let catalog = &self.full_catalog;
                self.working_set.sort_by_key(|p| catalog.position(&p.id));
            }
        }
        tracing::debug!(sort = %mode, results = self.working_set.len(), "working set reordered");
        &self.working_set
    }

    /// All products flagged new, catalog order; ignores any selection.
    pub fn only_new(&mut self) -> &[ProductRecord] {
        self.shortcut(|p| p.is_new)
    }

    /// All bestsellers, catalog order; ignores any selection.
    pub fn only_bestseller(&mut self) -> &[ProductRecord] {
        self.shortcut(|p| p.is_bestseller)
    }

    fn shortcut(&mut self, keep: impl Fn(&ProductRecord) -> bool) -> &[ProductRecord] {
        self.working_set = self
            .full_catalog
            .products()
            .iter()
            .filter(|p| keep(*p))
            .cloned()
            .collect();
        &self.working_set
    }

    /// Apply the shop page's URL parameters.
    ///
    /// `cat` pre-selects one category and recomputes in featured order. A
    /// `filter` shortcut is applied after it and therefore wins.
    pub fn enter(&mut self, entry: &ShopEntry) -> &[ProductRecord] {
        if let Some(category) = &entry.category {
            let selection = FilterSelection::new().with_category(category.clone());
            self.recompute(&selection, SortMode::Featured);
        }

        match entry.shortcut {
            Some(ShopShortcut::New) => self.only_new(),
            Some(ShopShortcut::Bestseller) => self.only_bestseller(),
            None => &self.working_set,
        }
    }

    pub fn view(&self) -> ShopView {
        ShopView::from_working_set(&self.working_set)
    }
}
