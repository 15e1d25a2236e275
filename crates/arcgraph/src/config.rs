use crate::Result;
use arcgraph_geom::GeometryConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Presenter configuration, usually loaded from JSON:
///
/// ```json
/// { "geometry": { "arrowheadLength": 10, "arrowheadWidth": 5, "labelPosition": 0.8, "clip": "axis-nearest" } }
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub geometry: GeometryConfig,
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        Ok(())
    }
}
