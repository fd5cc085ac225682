use serde::Deserialize;
use thiserror::Error;

use crate::holiday::languagetag::LanguageTagError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' defined more than once")]
    DuplicateNameError(String),

    #[error("holiday '{name}': {reason}")]
    InvalidRuleError { name: String, reason: String },

    #[error("{0}")]
    LanguageTagError(#[from] LanguageTagError)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn invalid_rule(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidRuleError { name: name.to_owned(), reason: reason.into() }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}
