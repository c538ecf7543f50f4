//! Row mappings from dimension records to warehouse tables

use crate::domain::{CustomerRecord, Dimension, OrderRecord, ProductRecord};
use tokio_postgres::types::ToSql;

/// A record that can be upserted into its dimension table
pub trait DimensionRow: Send + Sync {
    /// Dimension this row belongs to
    const DIMENSION: Dimension;

    /// Parameterized upsert statement, keyed on the natural id
    const UPSERT_SQL: &'static str;

    /// Statement parameters in placeholder order
    fn params(&self) -> Vec<&(dyn ToSql + Sync)>;
}

impl DimensionRow for CustomerRecord {
    const DIMENSION: Dimension = Dimension::Customer;

    const UPSERT_SQL: &'static str = r#"
        INSERT INTO dim_customer (customer_id, first_name, last_name, email, phone, city, country)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (customer_id) DO UPDATE SET
            first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            email = EXCLUDED.email,
            phone = EXCLUDED.phone,
            city = EXCLUDED.city,
            country = EXCLUDED.country,
            loaded_at = now()
    "#;

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.customer_id,
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.city,
            &self.country,
        ]
    }
}

impl DimensionRow for ProductRecord {
    const DIMENSION: Dimension = Dimension::Product;

    const UPSERT_SQL: &'static str = r#"
        INSERT INTO dim_product (product_id, product_name, category, price, stock)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (product_id) DO UPDATE SET
            product_name = EXCLUDED.product_name,
            category = EXCLUDED.category,
            price = EXCLUDED.price,
            stock = EXCLUDED.stock,
            loaded_at = now()
    "#;

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.product_id,
            &self.product_name,
            &self.category,
            &self.price,
            &self.stock,
        ]
    }
}

impl DimensionRow for OrderRecord {
    const DIMENSION: Dimension = Dimension::Order;

    const UPSERT_SQL: &'static str = r#"
        INSERT INTO dim_order (order_id, customer_id, order_date, status)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (order_id) DO UPDATE SET
            customer_id = EXCLUDED.customer_id,
            order_date = EXCLUDED.order_date,
            status = EXCLUDED.status,
            loaded_at = now()
    "#;

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.order_id,
            &self.customer_id,
            &self.order_date,
            &self.status,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn placeholder_count(sql: &str) -> usize {
        (1..=32).filter(|i| sql.contains(&format!("${i}"))).count()
    }

    #[test]
    fn test_customer_params_match_placeholders() {
        let customer = CustomerRecord {
            customer_id: 1,
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            city: Some("Santo Domingo".to_string()),
            country: None,
        };
        assert_eq!(
            customer.params().len(),
            placeholder_count(CustomerRecord::UPSERT_SQL)
        );
        assert!(CustomerRecord::UPSERT_SQL.contains(Dimension::Customer.table_name()));
    }

    #[test]
    fn test_product_params_match_placeholders() {
        let product = ProductRecord {
            product_id: 7,
            product_name: "Laptop".to_string(),
            category: "Electronics".to_string(),
            price: 999.0,
            stock: 3,
        };
        assert_eq!(
            product.params().len(),
            placeholder_count(ProductRecord::UPSERT_SQL)
        );
    }

    #[test]
    fn test_order_params_match_placeholders() {
        let order = OrderRecord {
            order_id: 10,
            customer_id: 1,
            order_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            status: "Shipped".to_string(),
        };
        assert_eq!(order.params().len(), placeholder_count(OrderRecord::UPSERT_SQL));
        assert_eq!(OrderRecord::DIMENSION, Dimension::Order);
    }
}
