//! Extraction bundle produced by the enriched source

use super::records::{CustomerRecord, OrderRecord, ProductRecord, SalesRecord};

/// Everything an enriched source yields in a single call
///
/// All four sequences come from the same extraction and keep source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionBundle {
    pub customers: Vec<CustomerRecord>,
    pub products: Vec<ProductRecord>,
    pub orders: Vec<OrderRecord>,
    pub sales: Vec<SalesRecord>,
}

impl ExtractionBundle {
    /// Create a bundle from its four parts
    pub fn new(
        customers: Vec<CustomerRecord>,
        products: Vec<ProductRecord>,
        orders: Vec<OrderRecord>,
        sales: Vec<SalesRecord>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
            sales,
        }
    }

    /// Record counts as (customers, products, orders, sales)
    pub fn counts(&self) -> BundleCounts {
        BundleCounts {
            customers: self.customers.len(),
            products: self.products.len(),
            orders: self.orders.len(),
            sales: self.sales.len(),
        }
    }
}

/// Record counts of a bundle, kept in run reports after the bundle is dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleCounts {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub sales: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle_counts() {
        let bundle = ExtractionBundle::default();
        assert_eq!(bundle.counts(), BundleCounts::default());
    }

    #[test]
    fn test_bundle_counts() {
        let customer = CustomerRecord {
            customer_id: 1,
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            city: None,
            country: None,
        };
        let bundle = ExtractionBundle::new(vec![customer.clone(), customer], vec![], vec![], vec![]);

        let counts = bundle.counts();
        assert_eq!(counts.customers, 2);
        assert_eq!(counts.products, 0);
        assert_eq!(counts.sales, 0);
    }
}
