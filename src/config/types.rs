use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_delay;
use crate::error::ValidationError;

/// Values accepted from `tct.toml` / `tct.json`. Every field is optional and
/// only fills in what the command line left at its default.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub max: Option<usize>,
    pub delay: Option<DurationValue>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_delay(text),
        }
    }
}
