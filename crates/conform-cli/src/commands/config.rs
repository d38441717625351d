//! `conform config` command: get or set configuration values.
//!
//! Supports dot-notation for nested keys:
//!   conform config                                   # dump full config as JSON
//!   conform config display.max_groups                # get a value
//!   conform config case_id.policy sentinel           # set a value
//!   conform config reference.activities "A -> B -> C"

use std::path::Path;

use conform_core::config::ConformConfig;
use conform_core::types::split_variant;

pub fn run(conform_dir: &Path, key: Option<String>, value: Option<String>) -> i32 {
    if !conform_dir.exists() {
        eprintln!("conform config: not initialized. Run `conform init` first.");
        return 2;
    }

    let config = ConformConfig::load(conform_dir);
    match (key, value) {
        (None, None) => dump_config(&config),
        (Some(k), None) => get_config(&config, &k),
        (Some(k), Some(v)) => set_config(conform_dir, &config, &k, &v),
        (None, Some(_)) => {
            eprintln!("conform config: value provided without key");
            2
        }
    }
}

fn dump_config(config: &ConformConfig) -> i32 {
    match serde_json::to_string_pretty(config) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("conform config: failed to serialize: {}", e);
            2
        }
    }
}

fn get_config(config: &ConformConfig, key: &str) -> i32 {
    let json_value = match serde_json::to_value(config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("conform config: failed to serialize: {}", e);
            return 2;
        }
    };

    match resolve_dot_path(&json_value, key) {
        Some(v) => {
            let output = match v {
                serde_json::Value::String(s) => s.to_string(),
                other => other.to_string(),
            };
            println!("{}", output);
            0
        }
        None => {
            eprintln!("conform config: unknown key '{}'", key);
            1
        }
    }
}

fn set_config(conform_dir: &Path, config: &ConformConfig, key: &str, value: &str) -> i32 {
    let mut json_value = match serde_json::to_value(config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("conform config: failed to serialize: {}", e);
            return 2;
        }
    };

    let mut parsed_value = parse_value(value);
    if key == "reference.activities" {
        if let serde_json::Value::String(raw) = &parsed_value {
            parsed_value = serde_json::json!(split_variant(raw, &config.reference.delimiter));
        }
    }
    let clears = parsed_value.is_null();

    if !set_dot_path(&mut json_value, key, parsed_value) {
        eprintln!("conform config: unknown key '{}'", key);
        return 1;
    }

    // Validate by deserializing back to ConformConfig
    let updated: ConformConfig = match serde_json::from_value(json_value) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("conform config: invalid value for '{}': {}", key, e);
            return 1;
        }
    };

    // unknown fields are dropped by serde, so the key must survive a round trip
    let survives = serde_json::to_value(&updated)
        .map(|v| resolve_dot_path(&v, key).is_some())
        .unwrap_or(false);
    if !survives && !clears {
        eprintln!("conform config: unknown key '{}'", key);
        return 1;
    }

    match updated.save(conform_dir) {
        Ok(()) => {
            eprintln!("conform config: {} = {}", key, value);
            0
        }
        Err(e) => {
            eprintln!("conform config: failed to write config: {}", e);
            2
        }
    }
}

fn parse_value(value: &str) -> serde_json::Value {
    match value {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        "null" => serde_json::Value::Null,
        _ if value.starts_with('[') => serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string())),
        _ => {
            if let Ok(n) = value.parse::<i64>() {
                serde_json::Value::Number(n.into())
            } else if let Ok(f) = value.parse::<f64>() {
                serde_json::Number::from_f64(f)
                    .map(serde_json::Value::Number)
                    .unwrap_or_else(|| serde_json::Value::String(value.to_string()))
            } else {
                serde_json::Value::String(value.to_string())
            }
        }
    }
}

fn resolve_dot_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Set `path` inside `value`. Intermediate objects must exist; the last
/// segment may be new so optional fields can be filled in.
fn set_dot_path(value: &mut serde_json::Value, path: &str, new_value: serde_json::Value) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = value;
    for segment in parents {
        current = match current.get_mut(*segment) {
            Some(v) => v,
            None => return false,
        };
    }

    match current.as_object_mut() {
        Some(map) if !last.is_empty() => {
            map.insert((*last).to_string(), new_value);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
