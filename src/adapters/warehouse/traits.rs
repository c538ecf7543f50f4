//! Dimension loader abstraction
//!
//! This module defines the trait warehouse adapters implement to persist
//! dimension records, and the fixed set of loaders a run uses.

use crate::domain::{CustomerRecord, OrderRecord, ProductRecord, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Persists one kind of dimension record
///
/// Whether a load is idempotent is up to the implementation.
#[async_trait]
pub trait DimensionLoader<R>: Send + Sync
where
    R: Send + Sync,
{
    /// Load the given records
    ///
    /// # Returns
    ///
    /// Returns the number of records written.
    ///
    /// # Errors
    ///
    /// Returns a loader-specific error if the records cannot be persisted.
    /// Callers do not retry.
    async fn load(&self, records: &[R]) -> Result<usize>;
}

/// The three dimension loaders a run needs
#[derive(Clone)]
pub struct DimensionLoaders {
    pub customers: Arc<dyn DimensionLoader<CustomerRecord>>,
    pub products: Arc<dyn DimensionLoader<ProductRecord>>,
    pub orders: Arc<dyn DimensionLoader<OrderRecord>>,
}

impl DimensionLoaders {
    /// Create a loader set from three independent loaders
    pub fn new(
        customers: Arc<dyn DimensionLoader<CustomerRecord>>,
        products: Arc<dyn DimensionLoader<ProductRecord>>,
        orders: Arc<dyn DimensionLoader<OrderRecord>>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Create a loader set backed by a single warehouse handling all three dimensions
    pub fn shared<W>(warehouse: Arc<W>) -> Self
    where
        W: DimensionLoader<CustomerRecord>
            + DimensionLoader<ProductRecord>
            + DimensionLoader<OrderRecord>
            + 'static,
    {
        Self {
            customers: warehouse.clone(),
            products: warehouse.clone(),
            orders: warehouse,
        }
    }
}
