//! Output template handling.
//!
//! The template supplies the expected shape of the YAML output. It is loaded
//! once per run by the assembler and handed to the writers as plain data;
//! nothing re-reads it from disk. Extracted data is deep-merged over the
//! template, then nulls and empty mappings are pruned recursively so the
//! output only contains what was actually found.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{ReportError, Result};

/// A loaded output template.
#[derive(Clone, Debug, Default)]
pub struct Template {
    root: Value,
}

impl Template {
    /// Loads a template from disk. A missing file is a hard error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::InputNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Ok(Self {
            root: serde_yaml::from_str(&text)?,
        })
    }

    /// An empty template: output shape comes entirely from extracted data.
    pub fn empty() -> Self {
        Self {
            root: Value::Mapping(Mapping::new()),
        }
    }

    /// Merges extracted data over the template shape and prunes the result.
    pub fn render(&self, data: Mapping) -> Result<String> {
        let mut merged = self.root.clone();
        deep_merge(&mut merged, Value::Mapping(data));
        prune(&mut merged);
        Ok(serde_yaml::to_string(&merged)?)
    }
}

/// Merges `other` into `base`; mappings merge recursively, anything else in
/// `other` replaces the value in `base`.
pub fn deep_merge(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Mapping(base_map), Value::Mapping(other_map)) => {
            for (key, other_value) in other_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, other_value),
                    None => {
                        base_map.insert(key, other_value);
                    }
                }
            }
        }
        (base, other) => *base = other,
    }
}

/// Removes nulls and empty mappings, depth first.
pub fn prune(value: &mut Value) {
    if let Value::Mapping(map) = value {
        for (_, child) in map.iter_mut() {
            prune(child);
        }
        map.retain(|_, child| !is_empty(child));
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}
