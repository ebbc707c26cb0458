use clap::{Parser, Subcommand};

/// Look up Apple devices and the IPSW firmware images published for them
#[derive(Debug, Parser)]
#[command(name = "ipsw-catalog", version, propagate_version = true, subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Log debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print records as pretty JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Catalog base url (overrides configuration)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand, PartialEq)]
pub enum Command {
    /// List every device in the catalog
    Devices,
    /// Show one device and its firmwares
    Device {
        /// Model identifier, e.g. iPhone15,2
        identifier: String,
        /// Only show the newest signed firmware
        #[arg(long)]
        latest_signed: bool,
    },
    /// List every firmware published for an OS version
    Ipsws {
        /// Marketing version, e.g. 16.1
        #[arg(value_name = "VERSION")]
        os_version: String,
        /// Skip builds Apple no longer signs
        #[arg(long)]
        signed_only: bool,
    },
    /// Show the firmware for one device and build
    Ipsw {
        identifier: String,
        build_id: String,
    },
}
