use crate::catalog::{Catalog, CatalogError};
use crate::cli::Command;
use crate::output::{self, OutputFormat};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, instrument};

#[instrument(skip(catalog, out))]
pub async fn run<W: Write>(
    catalog: &dyn Catalog,
    command: &Command,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Command::Devices => {
            let devices = catalog.all_devices().await?;
            match format {
                OutputFormat::Json => output::render_json(out, &devices)?,
                OutputFormat::Text => output::write_devices(out, &devices)?,
            }
        }
        Command::Device { identifier, latest_signed } => {
            let device = catalog.device(identifier).await.map_err(|err| {
                if err.is_not_found() {
                    CommandError::DeviceNotFound(identifier.clone())
                } else {
                    err.into()
                }
            })?;

            if *latest_signed {
                let firmware = device
                    .latest_signed_firmware()
                    .ok_or_else(|| CommandError::NoSignedFirmware(identifier.clone()))?;
                debug!(build_id = %firmware.build_id, "Selected newest signed firmware");
                match format {
                    OutputFormat::Json => output::render_json(out, firmware)?,
                    OutputFormat::Text => output::write_ipsw(out, firmware)?,
                }
            } else {
                match format {
                    OutputFormat::Json => output::render_json(out, &device)?,
                    OutputFormat::Text => output::write_device(out, &device)?,
                }
            }
        }
        Command::Ipsws { os_version, signed_only } => {
            let mut ipsws = catalog.all_ipsws(os_version).await?;
            if *signed_only {
                ipsws.retain(|ipsw| ipsw.signed);
            }
            match format {
                OutputFormat::Json => output::render_json(out, &ipsws)?,
                OutputFormat::Text => output::write_ipsws(out, &ipsws)?,
            }
        }
        Command::Ipsw { identifier, build_id } => {
            let ipsw = catalog.ipsw(identifier, build_id).await.map_err(|err| {
                if err.is_not_found() {
                    CommandError::IpswNotFound {
                        identifier: identifier.clone(),
                        build_id: build_id.clone(),
                    }
                } else {
                    err.into()
                }
            })?;
            match format {
                OutputFormat::Json => output::render_json(out, &ipsw)?,
                OutputFormat::Text => output::write_ipsw(out, &ipsw)?,
            }
        }
    }

    Ok(())
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("device '{0}' was not found in the catalog")]
    DeviceNotFound(String),
    #[error("build {build_id} was not found for device '{identifier}'")]
    IpswNotFound { identifier: String, build_id: String },
    #[error("no signed firmware is available for '{0}'")]
    NoSignedFirmware(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
