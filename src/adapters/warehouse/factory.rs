//! Dimension loader factory
//!
//! Builds the loader set from configuration.

use crate::adapters::postgresql::{PostgreSQLClient, PostgresWarehouse};
use crate::adapters::warehouse::traits::DimensionLoaders;
use crate::config::schema::EtlConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the customer, product and order loaders
///
/// All three share one PostgreSQL pool. Outside dry-run mode the dimension
/// schema is bootstrapped before returning.
///
/// # Errors
///
/// Returns an error if the pool cannot be created or the schema cannot be initialized
pub async fn create_dimension_loaders(config: &EtlConfig) -> Result<DimensionLoaders> {
    let dry_run = config.application.dry_run;

    tracing::info!(dry_run, "Creating PostgreSQL dimension loaders");
    let client = Arc::new(PostgreSQLClient::new(config.postgresql.clone())?);

    if dry_run {
        tracing::info!("Dry run mode - skipping schema initialization");
    } else {
        client.test_connection().await?;
        client.ensure_schema().await?;
    }

    let warehouse = Arc::new(PostgresWarehouse::new(client, dry_run));
    Ok(DimensionLoaders::shared(warehouse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ApplicationConfig, LoggingConfig, PostgreSQLConfig};
    use crate::config::secret_string;
    use crate::domain::ProductRecord;

    #[tokio::test]
    async fn test_dry_run_loaders_do_not_touch_database() {
        let config = EtlConfig {
            application: ApplicationConfig {
                log_level: "info".to_string(),
                dry_run: true,
            },
            sources: vec![],
            postgresql: PostgreSQLConfig {
                connection_string: secret_string("postgresql://etl:pw@127.0.0.1:1/dw".to_string()),
                max_connections: 1,
                connection_timeout_seconds: 1,
                statement_timeout_seconds: 5,
            },
            logging: LoggingConfig::default(),
        };

        let loaders = create_dimension_loaders(&config).await.unwrap();
        let products = vec![ProductRecord {
            product_id: 1,
            product_name: "Mouse".to_string(),
            category: "Accessories".to_string(),
            price: 15.0,
            stock: 50,
        }];

        assert_eq!(loaders.products.load(&products).await.unwrap(), 1);
    }
}
