//! Page entry parameters, read once from the URL query string.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// `?filter=` shortcuts linked from the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopShortcut {
    New,
    Bestseller,
}

impl ShopShortcut {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopShortcut::New => "new",
            ShopShortcut::Bestseller => "bestseller",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "new" => Some(ShopShortcut::New),
            "bestseller" => Some(ShopShortcut::Bestseller),
            _ => None,
        }
    }
}

impl core::fmt::Display for ShopShortcut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shop page entry: `?cat=<category>` and/or `?filter=new|bestseller`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub category: Option<String>,
    pub shortcut: Option<ShopShortcut>,
}

impl ShopEntry {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Unknown `filter` values are ignored; the first usable value of a key wins.
    pub fn from_query(query: &str) -> Self {
        let mut entry = Self::default();
        for (key, value) in pairs(query) {
            match key.as_str() {
                "cat" if entry.category.is_none() && !value.is_empty() => {
                    entry.category = Some(value);
                }
                "filter" if entry.shortcut.is_none() => {
                    entry.shortcut = ShopShortcut::from_token(&value);
                }
                _ => {}
            }
        }
        entry
    }
}

/// Product page entry: `?id=<product id>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: Option<ProductId>,
}

impl ProductEntry {
    pub fn from_query(query: &str) -> Self {
        let id = pairs(query)
            .find(|(key, _)| key == "id")
            .and_then(|(_, value)| value.parse().ok());
        Self { id }
    }
}

fn pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned()))
}
