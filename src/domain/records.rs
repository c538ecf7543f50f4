//! Sales fact and dimension records
//!
//! The orchestrator treats these as opaque values; only the concrete sources
//! and loaders look inside them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One sale observation (a fact row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Order the sale belongs to
    pub order_id: i64,

    /// Customer who placed the order
    pub customer_id: i64,

    /// Product sold
    pub product_id: i64,

    /// Date of the sale
    pub sale_date: NaiveDate,

    /// Units sold
    pub quantity: i32,

    /// Price per unit at the time of sale
    pub unit_price: f64,

    /// Line total
    pub total_amount: f64,
}

/// Customer dimension row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl CustomerRecord {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Product dimension row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
}

/// Order dimension row
///
/// Orders reference customers, which is why customers are always loaded first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub status: String,
}

/// Warehouse dimension kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Customer,
    Product,
    Order,
}

impl Dimension {
    /// Order in which dimensions must be loaded
    pub const LOAD_ORDER: [Dimension; 3] = [Dimension::Customer, Dimension::Product, Dimension::Order];

    /// Warehouse table holding this dimension
    pub fn table_name(&self) -> &'static str {
        match self {
            Dimension::Customer => "dim_customer",
            Dimension::Product => "dim_product",
            Dimension::Order => "dim_order",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Customer => write!(f, "customer"),
            Dimension::Product => write!(f, "product"),
            Dimension::Order => write!(f, "order"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_order_puts_orders_last() {
        assert_eq!(Dimension::LOAD_ORDER[0], Dimension::Customer);
        assert_eq!(Dimension::LOAD_ORDER[1], Dimension::Product);
        assert_eq!(Dimension::LOAD_ORDER[2], Dimension::Order);
    }

    #[test]
    fn test_dimension_display_and_table() {
        assert_eq!(Dimension::Customer.to_string(), "customer");
        assert_eq!(Dimension::Order.table_name(), "dim_order");
    }

    #[test]
    fn test_sales_record_from_json() {
        let json = r#"{
            "order_id": 10,
            "customer_id": 3,
            "product_id": 7,
            "sale_date": "2024-03-15",
            "quantity": 2,
            "unit_price": 9.5,
            "total_amount": 19.0
        }"#;

        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.order_id, 10);
        assert_eq!(record.sale_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.total_amount, 19.0);
    }

    #[test]
    fn test_customer_optional_fields_default() {
        let json = r#"{
            "customer_id": 1,
            "first_name": "Ana",
            "last_name": "Lopez",
            "email": "ana@example.com"
        }"#;

        let customer: CustomerRecord = serde_json::from_str(json).unwrap();
        assert!(customer.phone.is_none());
        assert_eq!(customer.full_name(), "Ana Lopez");
    }
}
