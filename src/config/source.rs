use std::collections::BTreeMap;

use conf::{Config, ConfigError, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// A key holding null counts as absent.
    Absent,
    Scalar(String),
    Sequence(Vec<ConfigValue>),
    Mapping(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn is_absent(&self) -> bool {
        match self {
            ConfigValue::Absent => true,
            _ => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Absent => "absent value",
            ConfigValue::Scalar(_) => "scalar",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    pub fn entry(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// A single scalar is split on whitespace. A sequence may only hold scalars.
    pub fn to_string_sequence(&self) -> Result<Vec<String>, ConfigError> {
        match self {
            ConfigValue::Absent => Ok(vec![]),
            ConfigValue::Scalar(scalar) => {
                Ok(scalar.split_whitespace().map(String::from).collect())
            }
            ConfigValue::Sequence(items) => items
                .iter()
                .map(|item| match item {
                    ConfigValue::Scalar(scalar) => Ok(scalar.clone()),
                    other => Err(ConfigError::Message(format!(
                        "expected a sequence of strings, found a {} inside it",
                        other.kind()
                    ))),
                })
                .collect(),
            ConfigValue::Mapping(_) => Err(ConfigError::Message(String::from(
                "expected a sequence of strings, found a mapping",
            ))),
        }
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        if let Ok(table) = value.clone().into_table() {
            return ConfigValue::Mapping(
                table
                    .into_iter()
                    .map(|(key, value)| (key, ConfigValue::from(value)))
                    .collect(),
            );
        }

        if let Ok(array) = value.clone().into_array() {
            return ConfigValue::Sequence(array.into_iter().map(ConfigValue::from).collect());
        }

        // Null is the only kind that can't be rendered as a string.
        match value.into_str() {
            Ok(scalar) => ConfigValue::Scalar(scalar),
            Err(_) => ConfigValue::Absent,
        }
    }
}

pub trait ConfigSource {
    fn get(&self, key: &str) -> Result<ConfigValue, ConfigError>;

    fn get_int(&self, key: &str) -> Result<i64, ConfigError>;

    fn is_set(&self, key: &str) -> Result<bool, ConfigError> {
        Ok(!self.get(key)?.is_absent())
    }
}

impl ConfigSource for Config {
    fn get(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        match Config::get::<Value>(self, key) {
            Ok(value) => Ok(ConfigValue::from(value)),
            Err(ConfigError::NotFound(_)) => Ok(ConfigValue::Absent),
            Err(e) => Err(e),
        }
    }

    fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        Config::get_int(self, key)
    }
}

#[cfg(test)]
pub fn from_toml(toml: &str) -> Config {
    use conf::{File, FileFormat};

    let mut config = Config::new();
    config
        .merge(File::from_str(toml, FileFormat::Toml))
        .expect("Fixture should be valid TOML");

    config
}
