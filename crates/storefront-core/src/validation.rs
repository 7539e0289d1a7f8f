//! # Validation Module
//!
//! Checks applied to catalog records when they are loaded and to free text
//! coming from the renderer.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Catalog load (once, at startup)                                       │
//! │  ├── validate_product      every record                                │
//! │  ├── validate_category     every declared category                     │
//! │  └── Catalog::new          id uniqueness, category references          │
//! │                                                                         │
//! │  Session input (every keystroke)                                       │
//! │  └── clamp_search_query    length cap only, text is kept as typed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Product};
use crate::{MAX_PRICE, MAX_PRODUCT_NAME_LEN, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("PlayStation 5").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Cuts search text typed into the header down to [`MAX_SEARCH_QUERY_LEN`]
/// characters.
///
/// The text is not trimmed: filtering uses it exactly as typed.
pub fn clamp_search_query(query: &str) -> &str {
    match query.char_indices().nth(MAX_SEARCH_QUERY_LEN) {
        Some((end, _)) => &query[..end],
        None => query,
    }
}

/// Validates a category id.
///
/// ## Rules
/// - Must not be empty
/// - Lowercase ASCII letters, digits, hyphens only
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_category_id;
///
/// assert!(validate_category_id("phones").is_ok());
/// assert!(validate_category_id("home-goods").is_ok());
/// assert!(validate_category_id("Home Goods").is_err());
/// ```
pub fn validate_category_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates one catalog product record in isolation.
///
/// ## Rules
/// - Name per [`validate_product_name`]
/// - Prices 0 to [`MAX_PRICE`]
/// - Discount 0-100
/// - Rating 0.0-5.0
/// - Category id well-formed
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;

    for (field, amount) in [("price", product.price), ("oldPrice", product.old_price)] {
        if !(0..=MAX_PRICE).contains(&amount.rubles()) {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: 0,
                max: MAX_PRICE,
            });
        }
    }

    if product.discount > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
    }

    if !(0.0..=5.0).contains(&product.rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    validate_category_id(&product.category)
}

/// Validates a declared category.
pub fn validate_category(category: &Category) -> ValidationResult<()> {
    validate_category_id(&category.id)?;

    if category.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category name".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ProductId;

    fn product() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Dyson V15 Detect".to_string(),
            price: Money::from_rubles(42_990),
            old_price: Money::from_rubles(64_990),
            discount: 34,
            image: "https://example.com/dyson.jpg".to_string(),
            category: "home".to_string(),
            rating: 4.9,
            reviews: 1234,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Tesla Model 3").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
        assert!(validate_product_name(&"Я".repeat(200)).is_ok());
    }

    #[test]
    fn test_clamp_search_query() {
        assert_eq!(clamp_search_query(""), "");
        assert_eq!(clamp_search_query("  iPhone "), "  iPhone ");
        assert_eq!(clamp_search_query(&"x".repeat(101)), "x".repeat(100));
        assert_eq!(clamp_search_query(&"я".repeat(150)).chars().count(), 100);
    }

    #[test]
    fn test_validate_category_id() {
        assert!(validate_category_id("cars").is_ok());
        assert!(validate_category_id("").is_err());
        assert!(validate_category_id("Cars").is_err());
        assert!(validate_category_id("for home").is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product()).is_ok());

        let mut bad = product();
        bad.discount = 101;
        assert!(validate_product(&bad).is_err());

        let mut bad = product();
        bad.rating = 5.5;
        assert!(validate_product(&bad).is_err());

        let mut bad = product();
        bad.price = Money::from_rubles(-1);
        assert!(validate_product(&bad).is_err());

        let mut bad = product();
        bad.price = Money::from_rubles(MAX_PRICE + 1);
        assert!(validate_product(&bad).is_err());

        let mut bad = product();
        bad.old_price = Money::from_rubles(4_000_000_000_000_000_000);
        assert!(matches!(
            validate_product(&bad),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "oldPrice"
        ));

        let mut bad = product();
        bad.name = " ".to_string();
        assert!(validate_product(&bad).is_err());
    }

    #[test]
    fn test_validate_category() {
        let cat = Category {
            id: "accessories".to_string(),
            name: "Аксессуары".to_string(),
            icon: "Watch".to_string(),
        };
        assert!(validate_category(&cat).is_ok());

        let unnamed = Category {
            name: String::new(),
            ..cat
        };
        assert!(validate_category(&unnamed).is_err());
    }
}
