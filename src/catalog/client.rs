use crate::app_config::AppConfig;
use crate::catalog::{Catalog, CatalogError};
use crate::domain::{Device, Ipsw};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Default base url of the firmware catalog.
pub const IPSW_ME_API: &str = "https://api.ipsw.me/v4/";

/// Jailbreak status feed, reserved for a future lookup. No request uses it yet.
#[allow(dead_code)]
pub const CAN_I_JAILBREAK_API: &str = "https://canijailbreak.com/jailbreaks.json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.catalog().timeout())
            .build()?;

        Self::with_client(config.catalog().url(), http)
    }

    pub fn with_client(base_url: &str, http: Client) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::UnsupportedUrl(base_url.to_string()));
        }

        Ok(CatalogClient { http, base_url })
    }

    /// Appends percent-encoded path segments to the base url, with or without its trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Read catalog response");

        Ok(serde_json::from_slice(&body)?)
    }
}

fn require(name: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.is_empty() {
        return Err(CatalogError::EmptyArgument { name });
    }
    Ok(())
}

#[async_trait]
impl Catalog for CatalogClient {
    #[instrument(skip(self))]
    async fn all_devices(&self) -> Result<Vec<Device>, CatalogError> {
        info!("Retrieving devices...");

        let devices: Vec<Device> = self.get(self.endpoint(&["devices"])).await?;
        info!("Retrieving devices... OK, {} found", devices.len());

        Ok(devices)
    }

    #[instrument(skip(self))]
    async fn device(&self, identifier: &str) -> Result<Device, CatalogError> {
        require("identifier", identifier)?;
        info!("Retrieving device {}...", identifier);

        let device: Device = self.get(self.endpoint(&["device", identifier])).await?;
        if device.identifier != identifier {
            warn!("⚠️ Requested device {} but the catalog answered with {}", identifier, device.identifier);
        }
        info!("Retrieving device {}... OK, {} firmwares", identifier, device.firmwares.len());

        Ok(device)
    }

    #[instrument(skip(self))]
    async fn all_ipsws(&self, version: &str) -> Result<Vec<Ipsw>, CatalogError> {
        require("version", version)?;
        info!("Retrieving firmwares for {}...", version);

        let ipsws: Vec<Ipsw> = self.get(self.endpoint(&["ipsw", version])).await?;
        info!("Retrieving firmwares for {}... OK, {} found", version, ipsws.len());

        Ok(ipsws)
    }

    #[instrument(skip(self))]
    async fn ipsw(&self, identifier: &str, build_id: &str) -> Result<Ipsw, CatalogError> {
        require("identifier", identifier)?;
        require("build id", build_id)?;
        info!("Retrieving firmware {} for {}...", build_id, identifier);

        let ipsw: Ipsw = self.get(self.endpoint(&["ipsw", identifier, build_id])).await?;
        info!("Retrieving firmware {} for {}... OK", build_id, identifier);

        Ok(ipsw)
    }
}
