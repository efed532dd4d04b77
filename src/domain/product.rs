use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// One search hit as returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
        }
    }
}

/// Shared handle to a fetched product.
///
/// Two handles are equal only when they point at the same allocation. Rows
/// are memoized on this equality, so a handle must never be rebuilt for data
/// that did not change.
#[derive(Debug, Clone)]
pub struct ProductRef(Arc<Product>);

impl ProductRef {
    pub fn new(product: Product) -> Self {
        Self(Arc::new(product))
    }

    pub fn same_as(&self, other: &ProductRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ProductRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Deref for ProductRef {
    type Target = Product;

    fn deref(&self) -> &Product {
        &self.0
    }
}

impl From<Product> for ProductRef {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// An ordered, immutable set of search results.
///
/// Every constructed set gets a fresh generation; cloning keeps it. Equality
/// compares generations only, which makes it O(1) and lets Dioxus skip the
/// result list whenever the page re-renders for unrelated reasons.
#[derive(Debug, Clone)]
pub struct ResultSet {
    generation: u64,
    items: Arc<[ProductRef]>,
    total_price: f64,
}

impl ResultSet {
    pub fn empty() -> Self {
        Self::with_items(Vec::new())
    }

    /// Wraps freshly fetched products.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self::with_items(products.into_iter().map(ProductRef::new).collect())
    }

    /// Builds a set from existing handles, keeping their identity.
    pub fn with_items(items: Vec<ProductRef>) -> Self {
        // fold from +0.0: an empty f64 sum is -0.0 and would render as "-0"
        let total_price = items.iter().fold(0.0, |total, item| total + item.price);
        Self {
            generation: next_generation(),
            items: items.into(),
            total_price,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn items(&self) -> &[ProductRef] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ProductRef> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price` over every item, computed once when the set was built.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ResultSet {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
    }
}
