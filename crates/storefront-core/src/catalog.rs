//! # Catalog
//!
//! The fixed product list and its category/search filter.
//!
//! ## Filter Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  filter(category, search)                                               │
//! │                                                                         │
//! │  for product in catalog order:                                         │
//! │      keep if (category == all  OR product.category == category)        │
//! │           AND lowercase(product.name) contains lowercase(search)       │
//! │                                                                         │
//! │  • empty search matches everything                                      │
//! │  • no ranking, no pagination: a linear pass                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog is validated once at construction and never mutated after.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Category, CategoryFilter, Product, ProductId};
use crate::validation::{validate_category, validate_product};
use crate::ALL_CATEGORY;

/// On-disk catalog layout: `{"categories": [...], "products": [...]}`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every record.
    ///
    /// ## Rules
    /// - Product ids unique
    /// - Every product passes [`validate_product`]
    /// - Every product's category is declared (when `categories` is empty,
    ///   categories are derived from the products in first-seen order)
    /// - The `all` pseudo-category is listed first, inserted if missing
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> CoreResult<Self> {
        let mut categories = if categories.is_empty() {
            derive_categories(&products)
        } else {
            categories
        };

        let mut seen = HashSet::new();
        for category in &categories {
            validate_category(category)?;
            if !seen.insert(category.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "category".to_string(),
                    value: category.id.clone(),
                }
                .into());
            }
        }

        match categories.iter().position(Category::is_all) {
            Some(0) => {}
            Some(pos) => {
                let all = categories.remove(pos);
                categories.insert(0, all);
            }
            None => categories.insert(0, all_category()),
        }

        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            validate_product(product)?;

            if product.category == ALL_CATEGORY
                || !categories.iter().any(|c| c.id == product.category)
            {
                return Err(CoreError::UnknownCategory(product.category.clone()));
            }

            if index.insert(product.id, pos).is_some() {
                return Err(CoreError::DuplicateProduct(product.id));
            }
        }

        Ok(Catalog {
            categories,
            products,
            index,
        })
    }

    /// Parses and validates a catalog from JSON text.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Catalog;
    ///
    /// let json = r#"{
    ///   "categories": [{"id": "cars", "name": "Cars", "icon": "Car"}],
    ///   "products": [{
    ///     "id": 6, "name": "Tesla Model 3", "price": 3299000, "oldPrice": 4500000,
    ///     "discount": 27, "image": "tesla.jpg", "category": "cars",
    ///     "rating": 4.8, "reviews": 234
    ///   }]
    /// }"#;
    ///
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.categories()[0].id, "all");
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Catalog::new(file.categories, file.products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Declared categories, `all` first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&pos| self.products.get(pos))
    }

    /// Looks up a product, failing with `ProductNotFound`.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.product(id).ok_or(CoreError::ProductNotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Checks that a filter names `all` or a declared category.
    pub fn check_filter(&self, filter: &CategoryFilter) -> CoreResult<()> {
        match filter {
            CategoryFilter::All => Ok(()),
            CategoryFilter::Only(id) if self.categories.iter().any(|c| &c.id == id) => Ok(()),
            CategoryFilter::Only(id) => Err(CoreError::UnknownCategory(id.clone())),
        }
    }

    /// Products passing the category filter whose name contains `search`,
    /// case-insensitively, in catalog order.
    pub fn filter(&self, category: &CategoryFilter, search: &str) -> Vec<&Product> {
        let query = search.to_lowercase();

        self.products
            .iter()
            .filter(|p| category.matches(&p.category) && p.name_matches(&query))
            .collect()
    }

    /// The first `limit` products, for the home screen.
    pub fn hot_deals(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }
}

fn all_category() -> Category {
    Category {
        id: ALL_CATEGORY.to_string(),
        name: "Все товары".to_string(),
        icon: "Sparkles".to_string(),
    }
}

fn derive_categories(products: &[Product]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for product in products {
        if !categories.iter().any(|c| c.id == product.category) {
            categories.push(Category {
                id: product.category.clone(),
                name: product.category.clone(),
                icon: "Tag".to_string(),
            });
        }
    }

    categories
}
