//! CSV directory source
//!
//! The only enriched source: a directory export with customers, products,
//! orders and order details. Sales facts are derived by joining each order
//! detail row with its order and product.

use super::traits::{DimensionalSource, FactSource};
use crate::config::CsvSourceConfig;
use crate::domain::{
    CustomerRecord, EtlError, ExtractionBundle, OrderRecord, ProductRecord, Result, SalesRecord,
    SourceError,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One row of the order details file
#[derive(Debug, Clone, Deserialize)]
struct OrderDetailRow {
    order_id: i64,
    product_id: i64,
    quantity: i32,
    total_price: f64,
}

/// Source reading a directory of CSV files
pub struct CsvSource {
    config: CsvSourceConfig,
}

impl CsvSource {
    pub fn new(config: CsvSourceConfig) -> Self {
        Self { config }
    }

    async fn read_bundle(&self) -> Result<ExtractionBundle> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || read_bundle(&config))
            .await
            .map_err(|e| EtlError::Other(format!("CSV extraction task failed: {e}")))?
    }
}

#[async_trait]
impl FactSource for CsvSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn extract(&self) -> Result<Vec<SalesRecord>> {
        Ok(self.read_bundle().await?.sales)
    }
}

#[async_trait]
impl DimensionalSource for CsvSource {
    async fn extract_with_dimensions(&self) -> Result<ExtractionBundle> {
        self.read_bundle().await
    }
}

fn read_bundle(config: &CsvSourceConfig) -> Result<ExtractionBundle> {
    let directory = Path::new(&config.directory);
    if !directory.is_dir() {
        return Err(SourceError::FileNotFound(directory.display().to_string()).into());
    }

    let delimiter = u8::try_from(config.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            SourceError::InvalidFormat(format!(
                "delimiter {:?} is not a single ASCII character",
                config.delimiter
            ))
        })?;
    let customers: Vec<CustomerRecord> =
        read_csv(directory, &config.customers_file, delimiter)?;
    let products: Vec<ProductRecord> = read_csv(directory, &config.products_file, delimiter)?;
    let orders: Vec<OrderRecord> = read_csv(directory, &config.orders_file, delimiter)?;
    let details: Vec<OrderDetailRow> =
        read_csv(directory, &config.order_details_file, delimiter)?;

    let (sales, skipped) = derive_sales(&orders, &products, &details);
    if skipped > 0 {
        tracing::warn!(
            source = %config.name,
            skipped,
            "Order detail rows reference unknown orders, skipping"
        );
    }

    tracing::debug!(
        source = %config.name,
        customers = customers.len(),
        products = products.len(),
        orders = orders.len(),
        sales = sales.len(),
        "CSV files parsed"
    );

    Ok(ExtractionBundle::new(customers, products, orders, sales))
}

/// Read every data row of `file_name` into `T`
///
/// Row numbers in errors count data rows from 1, excluding the header.
fn read_csv<T: DeserializeOwned>(directory: &Path, file_name: &str, delimiter: u8) -> Result<Vec<T>> {
    let path = directory.join(file_name);
    if !path.is_file() {
        return Err(SourceError::FileNotFound(path.display().to_string()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|e| SourceError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<T>().enumerate() {
        let record = row.map_err(|e| SourceError::Parse {
            file: file_name.to_string(),
            row: index as u64 + 1,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Join order details with orders and products into sales facts
///
/// Returns the facts and the number of detail rows skipped because their
/// order is unknown. When the product is unknown the unit price falls back
/// to `total_price / quantity`.
fn derive_sales(
    orders: &[OrderRecord],
    products: &[ProductRecord],
    details: &[OrderDetailRow],
) -> (Vec<SalesRecord>, usize) {
    let orders_by_id: HashMap<i64, &OrderRecord> =
        orders.iter().map(|o| (o.order_id, o)).collect();
    let prices: HashMap<i64, f64> = products.iter().map(|p| (p.product_id, p.price)).collect();

    let mut sales = Vec::with_capacity(details.len());
    let mut skipped = 0;

    for detail in details {
        let Some(order) = orders_by_id.get(&detail.order_id) else {
            skipped += 1;
            continue;
        };

        let unit_price = match prices.get(&detail.product_id) {
            Some(price) => *price,
            None if detail.quantity > 0 => detail.total_price / f64::from(detail.quantity),
            None => 0.0,
        };

        sales.push(SalesRecord {
            order_id: detail.order_id,
            customer_id: order.customer_id,
            product_id: detail.product_id,
            sale_date: order.order_date,
            quantity: detail.quantity,
            unit_price,
            total_amount: detail.total_price,
        });
    }

    (sales, skipped)
}
