//! Validator configuration.
//!
//! The checks themselves take no options; configuration only controls how
//! a reported [`ParseError`] is presented downstream.

use crate::error::{LoadError, ParseError};
use crate::messages::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Language of `llm_message` explanations.
    pub locale: Locale,
}

impl ValidatorConfig {
    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn render(&self, err: &ParseError) -> serde_json::Value {
        err.to_json_value(self.locale)
    }
}
