//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORMGEN_DEBUG` | `debug` |
//! | `FORMGEN_LOG_LEVEL` | `log_level` |
//! | `FORMGEN_SUBMISSION_SINK` | `submission_sink` |
//! | `FORMGEN_PROMPT` | `prompt` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use formgen_core::settings_loader;
//!
//! // Load from TOML
//! let settings = settings_loader::from_toml_file("formgen.toml").unwrap();
//!
//! // Pick the format from the file extension and apply the environment
//! let settings = settings_loader::from_path_with_env("formgen.json").unwrap();
//! ```

use std::path::Path;

use crate::error::FormgenError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, FormgenError> {
    // Deserialize into a generic value first so missing keys fall back to
    // the defaults after merging.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| FormgenError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_with_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormgenError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<Settings, FormgenError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| FormgenError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_with_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormgenError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a file, choosing the format from its extension
/// (`.json` is JSON, anything else is TOML), then applies environment overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn from_path_with_env(path: impl AsRef<Path>) -> Result<Settings, FormgenError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut settings = if is_json {
        from_json_file(path)?
    } else {
        from_toml_file(path)?
    };
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
///
/// # Errors
///
/// Returns an error if `FORMGEN_SUBMISSION_SINK` names an unknown sink.
pub fn from_env() -> Result<Settings, FormgenError> {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Applies environment variable overrides to a settings struct.
///
/// - `FORMGEN_DEBUG` -> `debug` ("true"/"1"/"yes" => true, anything else => false)
/// - `FORMGEN_LOG_LEVEL` -> `log_level`
/// - `FORMGEN_SUBMISSION_SINK` -> `submission_sink`
/// - `FORMGEN_PROMPT` -> `prompt`
///
/// # Errors
///
/// Returns an error if `FORMGEN_SUBMISSION_SINK` names an unknown sink.
pub fn apply_env_overrides(settings: &mut Settings) -> Result<(), FormgenError> {
    if let Ok(val) = std::env::var("FORMGEN_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("FORMGEN_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("FORMGEN_SUBMISSION_SINK") {
        settings.submission_sink = val.parse()?;
    }

    if let Ok(val) = std::env::var("FORMGEN_PROMPT") {
        settings.prompt = val;
    }

    Ok(())
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, format: &str) -> Result<String, FormgenError> {
    std::fs::read_to_string(path).map_err(|e| {
        FormgenError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_with_defaults(value: serde_json::Value, format: &str) -> Result<Settings, FormgenError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        FormgenError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        FormgenError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
