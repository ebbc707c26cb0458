//! Text and JSON rendering of catalog records.
//!
//! Lists render as `tabled` tables, single records as a detail block.

use crate::domain::{Device, Ipsw};
use crate::extensions::date_time_ext::ToCatalogDate;
use serde::Serialize;
use std::io::{self, Write};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Board")]
    board_config: String,
    #[tabled(rename = "Platform")]
    platform: String,
}

impl From<&Device> for DeviceRow {
    fn from(device: &Device) -> Self {
        DeviceRow {
            identifier: device.identifier.clone(),
            name: device.name.clone(),
            board_config: device.board_config.clone(),
            platform: device.platform.clone(),
        }
    }
}

#[derive(Tabled)]
struct IpswRow {
    #[tabled(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Build")]
    build_id: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Released")]
    released: String,
    #[tabled(rename = "Signed")]
    signed: &'static str,
}

impl From<&Ipsw> for IpswRow {
    fn from(ipsw: &Ipsw) -> Self {
        IpswRow {
            identifier: ipsw.identifier.clone(),
            version: ipsw.version.clone(),
            build_id: ipsw.build_id.clone(),
            size: ipsw.display_size(),
            released: ipsw.release_date.to_catalog_date(),
            signed: yes_no(ipsw.signed),
        }
    }
}

pub fn render_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn write_devices(out: &mut impl Write, devices: &[Device]) -> io::Result<()> {
    let rows = devices.iter().map(DeviceRow::from).collect::<Vec<_>>();
    writeln!(out, "{}", render_table(&rows))
}

pub fn write_ipsws(out: &mut impl Write, ipsws: &[Ipsw]) -> io::Result<()> {
    let rows = ipsws.iter().map(IpswRow::from).collect::<Vec<_>>();
    writeln!(out, "{}", render_table(&rows))
}

pub fn write_device(out: &mut impl Write, device: &Device) -> io::Result<()> {
    writeln!(out, "{}", device.name)?;
    writeln!(out, "  identifier:   {}", device.identifier)?;
    writeln!(out, "  board config: {}", device.board_config)?;
    writeln!(out, "  platform:     {}", device.platform)?;
    writeln!(out, "  cpid:         {}", optional_hex(device.cpid))?;
    writeln!(out, "  bdid:         {}", optional_hex(device.bdid))?;
    if !device.firmwares.is_empty() {
        writeln!(out, "  firmwares:")?;
        write_ipsws(out, &device.firmwares)?;
    }
    Ok(())
}

pub fn write_ipsw(out: &mut impl Write, ipsw: &Ipsw) -> io::Result<()> {
    writeln!(out, "{} {} ({})", ipsw.identifier, ipsw.version, ipsw.build_id)?;
    writeln!(out, "  signed:   {}", yes_no(ipsw.signed))?;
    writeln!(out, "  released: {}", ipsw.release_date.to_catalog_date())?;
    writeln!(out, "  uploaded: {}", ipsw.upload_date.to_catalog_date())?;
    writeln!(out, "  size:     {} ({} bytes)", ipsw.display_size(), ipsw.filesize)?;
    writeln!(out, "  sha1:     {}", ipsw.sha1)?;
    writeln!(out, "  md5:      {}", ipsw.md5)?;
    writeln!(out, "  url:      {}", ipsw.url)?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn optional_hex(value: Option<u32>) -> String {
    match value {
        Some(value) => format!("{:#x} ({})", value, value),
        None => "-".to_string(),
    }
}
