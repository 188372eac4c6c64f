//! JSON document form of the validator inputs.
//!
//! A document bundles the constructor signature with the interpretation
//! list:
//!
//! ```json
//! {
//!   "constructors": { "f": 2, "a": 0 },
//!   "interpretations": [
//!     { "name": "f", "args": ["x", "y"], "monomials": [{ "factors": [{ "variable": "x" }] }] },
//!     { "name": "a", "args": [] }
//!   ]
//! }
//! ```

use crate::ast::{ConstructorArity, Interpretation};
use crate::error::{LoadError, ParseError};
use crate::validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterpretationDocument {
    pub constructors: ConstructorArity,
    #[serde(default)]
    pub interpretations: Vec<Interpretation>,
}

impl InterpretationDocument {
    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(src)?;
        Self::from_json_value(&value)
    }

    /// `constructors` is required: an absent signature would make every
    /// interpretation look excess, which hides the real input mistake.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, LoadError> {
        if value.get("constructors").is_none() {
            return Err(LoadError::MissingField {
                field: "constructors".to_string(),
            });
        }
        Ok(Self::deserialize(value)?)
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        validate::validate(&self.interpretations, &self.constructors)
    }
}
