use crate::errors::DocumentError;
use serde_yaml::{Mapping, Value};

/// Decoded collector configuration, left untyped: any key may be missing or hold an unexpected type.
pub type ConfigDocument = Value;

pub fn from_yaml_str(raw_config: &str) -> Result<ConfigDocument, DocumentError> {
    match serde_yaml::from_str::<Value>(raw_config)? {
        Value::Null => Err(DocumentError::Empty),
        document => Ok(document),
    }
}

/// Walks `path` from `value`, returning `None` as soon as a step is not a mapping or the key is absent.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_mapping()?.get(*key))
}

pub fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path)?.as_str()
}

pub fn lookup_mapping<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Mapping> {
    lookup(value, path)?.as_mapping()
}
