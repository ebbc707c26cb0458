use crate::domain::Ipsw;
use crate::domain::identifier_deserializer::non_empty;
use serde::{Deserialize, Serialize};

/// One hardware model known to the catalog.
///
/// `firmwares` is only populated by the single-device lookup. `cpid` and `bdid` stay
/// optional because zero is a legitimate chip or board id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "non_empty")]
    pub identifier: String,
    #[serde(rename = "boardconfig", default, skip_serializing_if = "String::is_empty")]
    pub board_config: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bdid: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub firmwares: Vec<Ipsw>,
}

impl Device {
    /// Returns the signed firmware with the newest release date.
    ///
    /// Undated firmwares rank below dated ones, ties keep the first listed.
    pub fn latest_signed_firmware(&self) -> Option<&Ipsw> {
        self.firmwares
            .iter()
            .filter(|firmware| firmware.signed)
            .fold(None, |latest: Option<&Ipsw>, candidate| match latest {
                Some(latest) if latest.release_date >= candidate.release_date => Some(latest),
                _ => Some(candidate),
            })
    }
}
