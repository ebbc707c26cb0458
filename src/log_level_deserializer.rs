use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use tracing::Level;

pub fn log_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .parse::<Level>()
        .map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"one of trace, debug, info, warn or error"))
}
