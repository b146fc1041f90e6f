//! Catalog - immutable reference data lookups
//!
//! Customers, sellers, products, and categories arrive pre-validated and
//! deduplicated from the upstream collaborator; the catalog only indexes
//! them for lookup. It never mutates after construction, so it can be
//! shared behind an `Arc` without locking.

use shared::models::{Category, Customer, Product, Seller};
use shared::types::{CategoryId, CustomerId, ProductId, SellerId};
use std::collections::HashMap;

/// Indexed, immutable catalog of reference data
#[derive(Debug, Default)]
pub struct Catalog {
    customers: HashMap<CustomerId, Customer>,
    sellers: HashMap<SellerId, Seller>,
    categories: HashMap<CategoryId, Category>,
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new(
        customers: Vec<Customer>,
        sellers: Vec<Seller>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            customers: customers.into_iter().map(|c| (c.id, c)).collect(),
            sellers: sellers.into_iter().map(|s| (s.id, s)).collect(),
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn seller(&self, id: SellerId) -> Option<&Seller> {
        self.sellers.get(&id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn sellers(&self) -> impl Iterator<Item = &Seller> {
        self.sellers.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hits_and_misses() {
        let catalog = Catalog::new(
            vec![Customer {
                id: 1,
                name: "Ada".to_string(),
                state: "TX".to_string(),
                address: "unknown".to_string(),
            }],
            vec![],
            vec![Category {
                id: 10,
                name: "Tools".to_string(),
            }],
            vec![Product {
                id: 7,
                name: "Hammer".to_string(),
                price: 12.5,
                cogs: 4.0,
                category: 10,
            }],
        );

        assert_eq!(catalog.customer(1).map(|c| c.name.as_str()), Some("Ada"));
        assert!(catalog.customer(2).is_none());
        assert!(catalog.seller(1).is_none());
        assert_eq!(catalog.product(7).map(|p| p.category), Some(10));
        assert_eq!(catalog.categories().count(), 1);
    }
}
