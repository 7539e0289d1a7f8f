//! # Mock Catalog
//!
//! The built-in demo catalog: six categories and eight products spanning
//! phones to cars, all marked 20-40% below their reference price.
//!
//! Used when no catalog file is configured, and by tests that want the real
//! demo data.

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Category, Product, ProductId};

/// (id, display name, icon)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("all", "Все товары", "Sparkles"),
    ("electronics", "Электроника", "Smartphone"),
    ("phones", "Телефоны", "Phone"),
    ("cars", "Автомобили", "Car"),
    ("accessories", "Аксессуары", "Watch"),
    ("home", "Для дома", "Home"),
];

struct Seed {
    id: u32,
    name: &'static str,
    price: i64,
    old_price: i64,
    discount: u8,
    image: &'static str,
    category: &'static str,
    rating: f32,
    reviews: u32,
}

const PRODUCTS: &[Seed] = &[
    Seed {
        id: 1,
        name: "iPhone 15 Pro Max 256GB",
        price: 89_990,
        old_price: 139_990,
        discount: 36,
        image: "https://images.unsplash.com/photo-1696446702783-73e494e7c89c?w=400",
        category: "phones",
        rating: 4.9,
        reviews: 2847,
    },
    Seed {
        id: 2,
        name: "Samsung Galaxy S24 Ultra",
        price: 79_990,
        old_price: 124_990,
        discount: 36,
        image: "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=400",
        category: "phones",
        rating: 4.8,
        reviews: 1523,
    },
    Seed {
        id: 3,
        name: "Toyota Camry 2023",
        price: 2_499_000,
        old_price: 3_200_000,
        discount: 22,
        image: "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb?w=400",
        category: "cars",
        rating: 4.9,
        reviews: 456,
    },
    Seed {
        id: 4,
        name: "MacBook Pro 14\" M3",
        price: 149_990,
        old_price: 219_990,
        discount: 32,
        image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
        category: "electronics",
        rating: 5.0,
        reviews: 3421,
    },
    Seed {
        id: 5,
        name: "AirPods Pro 2",
        price: 16_990,
        old_price: 24_990,
        discount: 32,
        image: "https://images.unsplash.com/photo-1606841837239-c5a1a4a07af7?w=400",
        category: "accessories",
        rating: 4.7,
        reviews: 8934,
    },
    Seed {
        id: 6,
        name: "Tesla Model 3",
        price: 3_299_000,
        old_price: 4_500_000,
        discount: 27,
        image: "https://images.unsplash.com/photo-1560958089-b8a1929cea89?w=400",
        category: "cars",
        rating: 4.8,
        reviews: 234,
    },
    Seed {
        id: 7,
        name: "Dyson V15 Detect",
        price: 42_990,
        old_price: 64_990,
        discount: 34,
        image: "https://images.unsplash.com/photo-1558317374-067fb5f30001?w=400",
        category: "home",
        rating: 4.9,
        reviews: 1234,
    },
    Seed {
        id: 8,
        name: "PlayStation 5",
        price: 44_990,
        old_price: 59_990,
        discount: 25,
        image: "https://images.unsplash.com/photo-1606813907291-d86efa9b94db?w=400",
        category: "electronics",
        rating: 4.9,
        reviews: 5621,
    },
];

/// Builds the demo catalog.
///
/// Goes through [`Catalog::new`] like any other source, so the seed data is
/// held to the same validation rules as a catalog file.
pub fn mock_catalog() -> CoreResult<Catalog> {
    let categories = CATEGORIES
        .iter()
        .map(|&(id, name, icon)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect();

    let products = PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_string(),
            price: Money::from_rubles(seed.price),
            old_price: Money::from_rubles(seed.old_price),
            discount: seed.discount,
            image: seed.image.to_string(),
            category: seed.category.to_string(),
            rating: seed.rating,
            reviews: seed.reviews,
        })
        .collect();

    Catalog::new(categories, products)
}
