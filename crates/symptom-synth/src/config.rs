use serde::{Deserialize, Serialize};

use crate::error::SynthError;
use crate::sampler::NOISE_PROBABILITY;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Knobs for one batch run.
///
/// Two runs with equal configs (including `created_at`) produce identical
/// batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub seed: u64,
    pub row_count: usize,
    /// Valid rows required for `row_count_passed`.
    pub min_valid_rows: usize,
    /// Chance that an answer is replaced by a uniform pick.
    pub noise_probability: f64,
    /// Date stamped on every row. Today when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::civil::Date>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            seed: 42,
            row_count: 5200,
            min_valid_rows: 5000,
            noise_probability: NOISE_PROBABILITY,
            created_at: None,
        }
    }
}

impl GenerationConfig {
    /// Parse a raw JSON config, migrating older shapes first.
    pub fn from_json(json: serde_json::Value) -> Result<Self, SynthError> {
        let on_disk_version = match json.get("config_version") {
            None | Some(serde_json::Value::Null) => 0,
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    SynthError::InvalidConfig(format!("config_version {value} is not a valid version"))
                })?,
        };

        let migrated = migrate(json, on_disk_version)?;
        let config: GenerationConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SynthError> {
        if self.config_version > CURRENT_VERSION {
            return Err(SynthError::InvalidConfig(format!(
                "config_version {} is newer than this build supports ({CURRENT_VERSION})",
                self.config_version
            )));
        }
        if self.row_count == 0 {
            return Err(SynthError::InvalidConfig(
                "row_count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(SynthError::InvalidConfig(format!(
                "noise_probability {} is outside [0, 1]",
                self.noise_probability
            )));
        }
        Ok(())
    }

    /// The configured date, or today's date in the system time zone.
    pub fn resolved_date(&self) -> jiff::civil::Date {
        self.created_at
            .unwrap_or_else(|| jiff::Zoned::now().date())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, SynthError> {
    if from_version > CURRENT_VERSION {
        return Err(SynthError::InvalidConfig(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 → v1: stamp the version; field names are unchanged
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| SynthError::InvalidConfig("config is not a JSON object".to_string()))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::debug!("migrated generation config v0 → v1");
    }

    Ok(json)
}
