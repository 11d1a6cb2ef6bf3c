use crate::dto::AppState;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub log_level: Option<String>,
}

impl UiConfig {
    pub fn level(&self) -> Result<log::Level, String> {
        match self.log_level.as_deref().map(str::trim) {
            None | Some("") => Ok(DEFAULT_LOG_LEVEL),
            Some(raw) => {
                log::Level::from_str(raw).map_err(|_| format!("invalid log level '{raw}'"))
            }
        }
    }
}

/// Object the host page leaves at `window.__PURPLE__` before the app mounts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bootstrap {
    pub config: UiConfig,
    pub state: AppState,
}
