//! Generic configuration dictionary with typed access.
//!
//! Build profiles carry one loosely-typed dictionary section per modifier.
//! [`ConfigDict`] models such a section: string keys mapped to
//! [`ConfigValue`] variants, with a typed accessor that reports missing keys
//! and shape mismatches as structured errors instead of panicking or
//! silently defaulting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BuildSetError, Result};

/// A single configuration value.
///
/// The variant set mirrors the JSON data model, so any profile section
/// deserializes without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Explicit JSON `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String value.
    Str(String),
    /// Ordered list of values.
    List(Vec<ConfigValue>),
    /// Nested dictionary.
    Dict(ConfigDict),
}

impl ConfigValue {
    /// Human-readable name of the stored shape, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Dict(_) => "dictionary",
        }
    }
}

/// Conversion from a [`ConfigValue`] into a concrete Rust type.
///
/// Implementations return `None` when the stored shape does not match;
/// [`ConfigDict::get`] turns that into a [`BuildSetError::TypeMismatch`]
/// carrying both the expected and the found shape.
pub trait FromConfigValue: Sized {
    /// Shape name reported in mismatch errors.
    const EXPECTED: &'static str;

    /// Attempt the conversion.
    fn from_value(value: &ConfigValue) -> Option<Self>;
}

impl FromConfigValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromConfigValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromConfigValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromConfigValue for i32 {
    const EXPECTED: &'static str = "32-bit integer";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl FromConfigValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(x) => Some(*x),
            ConfigValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl FromConfigValue for Vec<String> {
    const EXPECTED: &'static str = "list of strings";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::List(items) => items
                .iter()
                .map(|item| match item {
                    ConfigValue::Str(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

impl FromConfigValue for ConfigDict {
    const EXPECTED: &'static str = "dictionary";

    fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Dict(dict) => Some(dict.clone()),
            _ => None,
        }
    }
}

/// String-keyed dictionary of heterogeneous configuration values.
///
/// # Examples
///
/// ```
/// use buildset::config::{ConfigDict, ConfigValue};
///
/// # fn example() -> buildset::Result<()> {
/// let mut dict = ConfigDict::new();
/// dict.insert("packageName", ConfigValue::Str("com.example.app".into()));
///
/// let name: String = dict.get("packageName")?;
/// assert_eq!(name, "com.example.app");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDict {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigDict {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous entry for the key.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: ConfigValue) {
        self.entries.insert(key.into(), value);
    }

    /// Returns whether the dictionary holds an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Typed lookup.
    ///
    /// # Errors
    ///
    /// [`BuildSetError::MissingKey`] when no entry exists for `key`,
    /// [`BuildSetError::TypeMismatch`] when the entry cannot be read as `T`.
    pub fn get<T: FromConfigValue>(&self, key: &str) -> Result<T> {
        let value = self.entries.get(key).ok_or_else(|| BuildSetError::MissingKey {
            key: key.to_string(),
        })?;

        T::from_value(value).ok_or_else(|| BuildSetError::TypeMismatch {
            key: key.to_string(),
            expected: T::EXPECTED,
            found: value.type_name(),
        })
    }
}
