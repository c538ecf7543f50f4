//! PostgreSQL dimension loader
//!
//! One warehouse instance serves all three dimensions. Each load upserts its
//! records inside a single transaction.

use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::DimensionRow;
use crate::adapters::warehouse::traits::DimensionLoader;
use crate::domain::{Dimension, Result, WarehouseError};
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL-backed warehouse implementing [`DimensionLoader`] for every dimension row type
pub struct PostgresWarehouse {
    client: Arc<PostgreSQLClient>,
    dry_run: bool,
}

impl PostgresWarehouse {
    /// Create a new warehouse loader
    pub fn new(client: Arc<PostgreSQLClient>, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    async fn upsert<R: DimensionRow>(&self, records: &[R]) -> Result<usize> {
        let dimension = R::DIMENSION;

        if self.dry_run {
            tracing::info!(
                dimension = %dimension,
                count = records.len(),
                "DRY RUN: Would upsert {} rows into {}",
                records.len(),
                dimension.table_name()
            );
            return Ok(records.len());
        }

        if records.is_empty() {
            return Ok(0);
        }

        let mut connection = self.client.get_connection().await?;
        let transaction = connection
            .transaction()
            .await
            .map_err(|e| load_failed(dimension, e))?;

        transaction
            .batch_execute(&self.client.statement_timeout_sql())
            .await
            .map_err(|e| load_failed(dimension, e))?;

        let statement = transaction
            .prepare_cached(R::UPSERT_SQL)
            .await
            .map_err(|e| load_failed(dimension, e))?;

        let mut written = 0usize;
        for record in records {
            let rows = transaction
                .execute(&statement, &record.params())
                .await
                .map_err(|e| load_failed(dimension, e))?;
            written += rows as usize;
        }

        transaction
            .commit()
            .await
            .map_err(|e| load_failed(dimension, e))?;

        tracing::debug!(
            dimension = %dimension,
            table = dimension.table_name(),
            written,
            "Dimension upsert committed"
        );

        Ok(written)
    }
}

#[async_trait]
impl<R> DimensionLoader<R> for PostgresWarehouse
where
    R: DimensionRow + 'static,
{
    async fn load(&self, records: &[R]) -> Result<usize> {
        self.upsert(records).await
    }
}

fn load_failed(dimension: Dimension, err: tokio_postgres::Error) -> WarehouseError {
    WarehouseError::LoadFailed {
        dimension,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PostgreSQLConfig;
    use crate::config::secret_string;
    use crate::domain::{CustomerRecord, OrderRecord};
    use chrono::NaiveDate;

    fn warehouse(dry_run: bool) -> PostgresWarehouse {
        // Nothing listens on port 1; any real query would fail.
        let client = PostgreSQLClient::new(PostgreSQLConfig {
            connection_string: secret_string("postgresql://etl:pw@127.0.0.1:1/dw".to_string()),
            max_connections: 1,
            connection_timeout_seconds: 1,
            statement_timeout_seconds: 5,
        })
        .unwrap();
        PostgresWarehouse::new(Arc::new(client), dry_run)
    }

    #[tokio::test]
    async fn test_dry_run_reports_without_connecting() {
        let warehouse = warehouse(true);
        let customers = vec![CustomerRecord {
            customer_id: 1,
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            city: None,
            country: None,
        }];

        let written = DimensionLoader::<CustomerRecord>::load(&warehouse, &customers)
            .await
            .unwrap();
        assert_eq!(written, 1);
    }

    #[tokio::test]
    async fn test_empty_load_skips_connection() {
        let warehouse = warehouse(false);
        let orders: Vec<OrderRecord> = Vec::new();

        let written = DimensionLoader::<OrderRecord>::load(&warehouse, &orders)
            .await
            .unwrap();
        assert_eq!(written, 0);
    }

    #[tokio::test]
    async fn test_unreachable_database_is_warehouse_error() {
        let warehouse = warehouse(false);
        let orders = vec![OrderRecord {
            order_id: 1,
            customer_id: 1,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "Pending".to_string(),
        }];

        let err = DimensionLoader::<OrderRecord>::load(&warehouse, &orders)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::domain::EtlError::Warehouse(_)));
    }
}
