use crate::catalog::CatalogError;
use crate::domain::{Device, Ipsw};
use async_trait::async_trait;

/// Read-only lookups against the firmware catalog.
///
/// Every lookup is a single request with no retries. Results keep the order the catalog
/// sent them in.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn all_devices(&self) -> Result<Vec<Device>, CatalogError>;

    async fn device(&self, identifier: &str) -> Result<Device, CatalogError>;

    /// Every device and build published for an OS version.
    async fn all_ipsws(&self, version: &str) -> Result<Vec<Ipsw>, CatalogError>;

    async fn ipsw(&self, identifier: &str, build_id: &str) -> Result<Ipsw, CatalogError>;
}
