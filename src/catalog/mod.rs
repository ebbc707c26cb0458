mod catalog;
mod client;
mod error;

pub use catalog::Catalog;
pub use client::{CatalogClient, IPSW_ME_API};
pub use error::CatalogError;
