//! Page commands: load once, build one page view.

use std::sync::Arc;

use anyhow::bail;

use storefront_catalog::ContentStore;
use storefront_core::ProductId;
use storefront_shop::{
    AboutPage, CatalogPipeline, FilterSelection, HomePage, PriceBucket, ProductEntry, ProductPage,
    ShopEntry, ShopView, SortMode,
};

/// Shop page inputs: URL entry parameters plus the sidebar state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopArgs {
    /// Raw query string, e.g. `cat=jackets` or `filter=new`.
    pub query: Option<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub price: Option<PriceBucket>,
    pub sizes: Vec<String>,
    pub sort: Option<SortMode>,
}

impl ShopArgs {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            categories: self.categories.iter().cloned().collect(),
            brands: self.brands.iter().cloned().collect(),
            price_bucket: self.price,
            sizes: self.sizes.iter().cloned().collect(),
        }
    }
}

/// Page entry first, then the sidebar inputs.
///
/// A `cat` from the query stays checked, so it is part of a sidebar
/// recompute. A `filter` shortcut can only be reordered: combining it with
/// sidebar filters is rejected.
pub fn shop(store: Arc<ContentStore>, args: &ShopArgs) -> anyhow::Result<ShopView> {
    let mut pipeline = CatalogPipeline::new(store);
    let entry = args
        .query
        .as_deref()
        .map(ShopEntry::from_query)
        .unwrap_or_default();
    pipeline.enter(&entry);

    let mut selection = args.selection();
    match entry.shortcut {
        Some(shortcut) if !selection.is_empty() => {
            bail!("filter={shortcut} cannot be combined with sidebar filters")
        }
        Some(_) => {
            if let Some(mode) = args.sort {
                pipeline.sort(mode);
            }
        }
        None if !selection.is_empty() || args.sort.is_some() => {
            selection.categories.extend(entry.category);
            pipeline.recompute(&selection, args.sort.unwrap_or_default());
        }
        None => {}
    }

    Ok(pipeline.view())
}

/// An explicit `id` takes precedence over one found in `query`.
pub fn product(store: &ContentStore, query: Option<&str>, id: Option<ProductId>) -> Option<ProductPage> {
    let mut entry = query.map(ProductEntry::from_query).unwrap_or_default();
    if id.is_some() {
        entry.id = id;
    }
    ProductPage::build(store, &entry)
}

pub fn home(store: &ContentStore) -> HomePage {
    HomePage::build(store)
}

pub fn about(store: &ContentStore) -> AboutPage {
    AboutPage::build(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{ContentDocument, ProductRecord};

    fn store() -> Arc<ContentStore> {
        let mut a = ProductRecord::new("a", "Anorak");
        a.category = "jackets".into();
        a.price = 1500.0;
        a.is_new = true;
        let mut b = ProductRecord::new("b", "Beanie");
        b.category = "hats".into();
        b.price = 300.0;
        let mut c = ProductRecord::new("c", "Coach Jacket");
        c.category = "jackets".into();
        c.price = 700.0;
        Arc::new(ContentStore::from_document(ContentDocument {
            products: vec![a, b, c],
            ..ContentDocument::default()
        }))
    }

    fn ids(view: &ShopView) -> Vec<&str> {
        view.cards.iter().map(|c| c.product_id.as_str()).collect()
    }

    #[test]
    fn shop_without_inputs_lists_catalog() {
        let view = shop(store(), &ShopArgs::default()).unwrap();
        assert_eq!(ids(&view), ["a", "b", "c"]);
    }

    #[test]
    fn shop_query_category_then_sort() {
        let args = ShopArgs {
            query: Some("cat=jackets".into()),
            ..ShopArgs::default()
        };
        assert_eq!(ids(&shop(store(), &args).unwrap()), ["a", "c"]);

        let args = ShopArgs {
            categories: vec!["jackets".into()],
            sort: Some(SortMode::PriceLow),
            ..ShopArgs::default()
        };
        assert_eq!(ids(&shop(store(), &args).unwrap()), ["c", "a"]);

        let args = ShopArgs {
            query: Some("cat=hats".into()),
            sort: Some(SortMode::Name),
            ..ShopArgs::default()
        };
        assert_eq!(ids(&shop(store(), &args).unwrap()), ["b"]);
    }

    #[test]
    fn shop_shortcut_from_query() {
        let args = ShopArgs {
            query: Some("?filter=new".into()),
            ..ShopArgs::default()
        };
        assert_eq!(ids(&shop(store(), &args).unwrap()), ["a"]);
    }

    #[test]
    fn shop_shortcut_is_sorted_not_replaced() {
        let mut d = ProductRecord::new("d", "Duffle");
        d.price = 100.0;
        d.is_new = true;
        let store = Arc::new(ContentStore::from_document(ContentDocument {
            products: vec![store().products().to_vec(), vec![d]].concat(),
            ..ContentDocument::default()
        }));
        let args = ShopArgs {
            query: Some("filter=new".into()),
            sort: Some(SortMode::PriceLow),
            ..ShopArgs::default()
        };
        assert_eq!(ids(&shop(store, &args).unwrap()), ["d", "a"]);
    }

    #[test]
    fn shop_shortcut_with_sidebar_filter_is_rejected() {
        let args = ShopArgs {
            query: Some("filter=bestseller".into()),
            brands: vec!["Ma.Strum".into()],
            ..ShopArgs::default()
        };
        let err = shop(store(), &args).unwrap_err();
        assert!(err.to_string().contains("filter=bestseller"));
    }

    #[test]
    fn product_id_flag_overrides_query() {
        let page = product(&store(), Some("id=b"), Some(ProductId::new("c"))).unwrap();
        assert_eq!(page.product.product_id.as_str(), "c");
        let page = product(&store(), Some("id=b"), None).unwrap();
        assert_eq!(page.product.product_id.as_str(), "b");
    }
}
