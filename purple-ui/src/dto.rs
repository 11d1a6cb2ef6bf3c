use serde::{Deserialize, Deserializer, Serialize};

/// Missing and `null` both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Header heights that are negative or not finite count as zero.
pub fn normalize_height(height: f64) -> f64 {
    if height.is_finite() {
        height.max(0.0)
    } else {
        0.0
    }
}

/// A flagged trade waiting for review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub trade_pk: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbol {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbState {
    #[serde(deserialize_with = "null_as_default")]
    pub alerts: Vec<Alert>,
    #[serde(deserialize_with = "null_as_default")]
    pub symbols: Vec<Symbol>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiState {
    #[serde(deserialize_with = "null_as_default")]
    pub header_height: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    #[serde(deserialize_with = "null_as_default")]
    pub db: DbState,
    #[serde(deserialize_with = "null_as_default")]
    pub ui: UiState,
}
