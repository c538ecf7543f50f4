//! JSON file source

use super::traits::FactSource;
use crate::config::JsonSourceConfig;
use crate::domain::{Result, SalesRecord, SourceError};
use async_trait::async_trait;
use std::path::Path;

/// Source reading a JSON array of sales records from a file
pub struct JsonFileSource {
    config: JsonSourceConfig,
}

impl JsonFileSource {
    pub fn new(config: JsonSourceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FactSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn extract(&self) -> Result<Vec<SalesRecord>> {
        let path = Path::new(&self.config.path);
        if !path.is_file() {
            return Err(SourceError::FileNotFound(self.config.path.clone()).into());
        }

        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| SourceError::ReadFailed {
                    path: self.config.path.clone(),
                    message: e.to_string(),
                })?;

        let records: Vec<SalesRecord> =
            serde_json::from_str(&contents).map_err(|e| SourceError::Parse {
                file: self.config.path.clone(),
                row: e.line() as u64,
                message: e.to_string(),
            })?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_for(path: &str) -> JsonFileSource {
        JsonFileSource::new(JsonSourceConfig {
            name: "legacy".to_string(),
            path: path.to_string(),
        })
    }

    #[tokio::test]
    async fn test_extract_reads_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"order_id": 1, "customer_id": 2, "product_id": 3, "sale_date": "2024-02-01",
                  "quantity": 1, "unit_price": 4.0, "total_amount": 4.0}},
                {{"order_id": 1, "customer_id": 2, "product_id": 5, "sale_date": "2024-02-01",
                  "quantity": 3, "unit_price": 2.0, "total_amount": 6.0}}
            ]"#
        )
        .unwrap();

        let source = source_for(&file.path().to_string_lossy());
        let records = source.extract().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].total_amount, 6.0);
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let source = source_for("/definitely/not/here.json");
        let err = source.extract().await.unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[tokio::test]
    async fn test_extract_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();

        let source = source_for(&file.path().to_string_lossy());
        let err = source.extract().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
