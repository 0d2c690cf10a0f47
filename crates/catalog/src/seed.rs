//! The menu the widget ships with.

use tidewater_core::{DomainResult, ItemId};

use crate::catalog::Catalog;
use crate::item::{Category, MenuItem};

fn item(
    id: u32,
    name: &str,
    description: &str,
    price: u64,
    category: Category,
    category_display: &str,
    image: &str,
) -> DomainResult<MenuItem> {
    Ok(MenuItem {
        id: ItemId::new(id)?,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        category_display: category_display.to_string(),
        image: image.to_string(),
    })
}

/// The coastal tasting menu: ten items across starters, mains, desserts and
/// drinks.
pub fn coastal_menu() -> DomainResult<Catalog> {
    Catalog::new(vec![
        item(
            1,
            "Truffle Porcini Risotto",
            "Arborio rice slowly cooked in saffron broth, finished with wild porcini mushrooms and fresh black truffle shavings.",
            32,
            Category::Mains,
            "Vegetarian",
            "https://images.unsplash.com/photo-1476124369491-e7addf5db371?w=400&h=300&fit=crop",
        )?,
        item(
            2,
            "Burrata & Heirloom Tomato",
            "Creamy Puglian burrata served with vine-ripened heirloom tomatoes, cold-pressed olive oil, and aged balsamic reduction.",
            18,
            Category::Starters,
            "Vegetarian",
            "./assets/Tomato.jpg",
        )?,
        item(
            3,
            "Seared Scallops with Pea Puree",
            "Pan-seared Hokkaido scallops over a vibrant sweet pea puree with crispy pancetta crumbles.",
            24,
            Category::Starters,
            "Seafood",
            "./assets/SearedSca.jpg",
        )?,
        item(
            4,
            "Wagyu Ribeye Steak",
            "A5 Japanese Wagyu ribeye, charcoal grilled, served with roasted root vegetables and red wine jus.",
            85,
            Category::Mains,
            "Premium",
            "./assets/Wagyu.jpg",
        )?,
        item(
            5,
            "Lobster Thermidor",
            "Classic French delicacy featuring tender lobster meat in a rich, creamy brandy sauce, gratinated with Gruyère.",
            68,
            Category::Mains,
            "Seafood",
            "./assets/Lobster.png",
        )?,
        item(
            6,
            "Coastal Oysters",
            "Six freshly shucked Kumamoto oysters served on crushed ice with champagne mignonette and fresh lemon.",
            28,
            Category::Starters,
            "Seafood",
            "./assets/CoastalOysters.png",
        )?,
        item(
            7,
            "Dark Chocolate Lava Cake",
            "Warm, molten center 70% dark chocolate cake served with Madagascar vanilla bean gelato.",
            14,
            Category::Desserts,
            "Dessert",
            "https://images.unsplash.com/photo-1624353365286-3f8d62daad51?w=400&h=300&fit=crop",
        )?,
        item(
            8,
            "Smoked Salmon Carpaccio",
            "Thinly sliced Scottish smoked salmon with capers, red onions, and lemon zest emulsion.",
            22,
            Category::Starters,
            "Light",
            "./assets/SmSalmon.png",
        )?,
        item(
            9,
            "Garden Herb Gnocchi",
            "Handmade potato gnocchi tossed in a light herb butter sauce with toasted pine nuts.",
            26,
            Category::Mains,
            "Vegetarian",
            "./assets/Gherb.png",
        )?,
        item(
            10,
            "Signature Martini",
            "Our house special martini with dry vermouth, premium gin, and a hint of cucumber.",
            16,
            Category::Drinks,
            "Alcoholic",
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=400&h=300&fit=crop",
        )?,
    ])
}
