use std::collections::HashSet;

use serde::Serialize;

use tidewater_core::{DomainError, DomainResult, ItemId};

use crate::item::MenuItem;

/// Immutable menu catalog, fixed for the process lifetime.
///
/// Construction validates the whole menu up front; after that there is no
/// create/update/delete surface, only lookup and ordered iteration.
/// Deliberately not `Deserialize`: a catalog always enters the process
/// through [`Catalog::new`] so the invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from menu items, enforcing id uniqueness and
    /// non-empty display names.
    pub fn new(items: Vec<MenuItem>) -> DomainResult<Self> {
        let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "menu item {} has an empty name",
                    item.id
                )));
            }
            if !seen.insert(item.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate menu item id: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Items in menu order (the order cards render in).
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Category;

    fn test_item(id: u32, name: &str) -> MenuItem {
        MenuItem {
            id: ItemId::new(id).unwrap(),
            name: name.to_string(),
            description: String::new(),
            price: 10,
            category: Category::Mains,
            category_display: "Mains".to_string(),
            image: "./assets/placeholder.png".to_string(),
        }
    }

    #[test]
    fn lookup_by_id_returns_the_item() {
        let catalog =
            Catalog::new(vec![test_item(1, "Gnocchi"), test_item(2, "Risotto")]).unwrap();

        let found = catalog.get(ItemId::new(2).unwrap()).unwrap();
        assert_eq!(found.name, "Risotto");
        assert!(catalog.get(ItemId::new(9).unwrap()).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![test_item(1, "Gnocchi"), test_item(1, "Risotto")])
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Catalog::new(vec![test_item(1, "  ")]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn iteration_preserves_menu_order() {
        let catalog =
            Catalog::new(vec![test_item(3, "c"), test_item(1, "a"), test_item(2, "b")]).unwrap();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
