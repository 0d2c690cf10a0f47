//! Pure filter engine: derive the visible subset of the catalog from the
//! active category tab and the search box text.

use crate::catalog::Catalog;
use crate::item::{CategoryFilter, MenuItem};

/// Compute the items visible under the given category filter and search
/// query.
///
/// Category and search filters are conjunctive. The search query matches
/// case-insensitively as a substring of the item name or description; an
/// empty query matches everything. Catalog order is preserved, and an empty
/// result is a valid outcome (the adapter renders an empty state for it).
pub fn visible_items<'a>(
    catalog: &'a Catalog,
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a MenuItem> {
    let needle = query.to_lowercase();
    catalog
        .items()
        .iter()
        .filter(|item| category.admits(item.category))
        .filter(|item| needle.is_empty() || matches_query(item, &needle))
        .collect()
}

fn matches_query(item: &MenuItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
}
