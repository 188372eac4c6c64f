use crate::messages::{self, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, machine-oriented category of a [`ParseError`].
///
/// The string form (see [`ErrorKind::as_str`]) is what callers dispatch on;
/// it never changes with the rendering locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "empty monomial")]
    EmptyMonomial,
    #[serde(rename = "undefined arg")]
    UndefinedArg,
    #[serde(rename = "duplicate interpretation")]
    DuplicateInterpretation,
    #[serde(rename = "excess interpretation")]
    ExcessInterpretation,
    #[serde(rename = "wrong func interpretation arity")]
    WrongArity,
    #[serde(rename = "duplicate argument name")]
    DuplicateArgumentName,
    #[serde(rename = "no sufficient interpretation")]
    MissingInterpretation,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::EmptyMonomial,
        ErrorKind::UndefinedArg,
        ErrorKind::DuplicateInterpretation,
        ErrorKind::ExcessInterpretation,
        ErrorKind::WrongArity,
        ErrorKind::DuplicateArgumentName,
        ErrorKind::MissingInterpretation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyMonomial => "empty monomial",
            ErrorKind::UndefinedArg => "undefined arg",
            ErrorKind::DuplicateInterpretation => "duplicate interpretation",
            ErrorKind::ExcessInterpretation => "excess interpretation",
            ErrorKind::WrongArity => "wrong func interpretation arity",
            ErrorKind::DuplicateArgumentName => "duplicate argument name",
            ErrorKind::MissingInterpretation => "no sufficient interpretation",
        }
    }

    pub fn parse(s: &str) -> Option<ErrorKind> {
        ErrorKind::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A semantic violation found while validating monomials or
/// interpretations. Each variant carries the names involved so the
/// explanation can be rendered in any [`Locale`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("monomial must not be empty")]
    EmptyMonomial,

    #[error("argument {variable} is not declared on the left-hand side but is used on the right-hand side")]
    UndefinedArg { variable: String },

    #[error("interpretation of constructor {constructor} is given more than once, but each constructor must have exactly one interpretation")]
    DuplicateInterpretation { constructor: String },

    #[error("constructor {constructor} does not occur in the trs rules")]
    ExcessInterpretation { constructor: String },

    #[error("wrong arity of constructor {constructor}: expected arity {expected}, got arity {actual}")]
    WrongArity {
        constructor: String,
        expected: usize,
        actual: usize,
    },

    #[error("interpretation of constructor {constructor} declares variable {argument} more than once, but each variable must be declared once")]
    DuplicateArgumentName {
        constructor: String,
        argument: String,
    },

    #[error("missing interpretation for constructor {constructor}")]
    MissingInterpretation { constructor: String },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::EmptyMonomial => ErrorKind::EmptyMonomial,
            ParseError::UndefinedArg { .. } => ErrorKind::UndefinedArg,
            ParseError::DuplicateInterpretation { .. } => ErrorKind::DuplicateInterpretation,
            ParseError::ExcessInterpretation { .. } => ErrorKind::ExcessInterpretation,
            ParseError::WrongArity { .. } => ErrorKind::WrongArity,
            ParseError::DuplicateArgumentName { .. } => ErrorKind::DuplicateArgumentName,
            ParseError::MissingInterpretation { .. } => ErrorKind::MissingInterpretation,
        }
    }

    /// The stable category string, e.g. `"undefined arg"`.
    pub fn message(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Natural-language explanation for a human or an LLM-assisted fixer.
    pub fn llm_message(&self, locale: Locale) -> String {
        messages::explain(self, locale)
    }

    /// Serialize to the downstream error payload.
    /// Both fields are always present.
    pub fn to_json_value(&self, locale: Locale) -> serde_json::Value {
        serde_json::json!({
            "message":     self.message(),
            "llm_message": self.llm_message(locale),
        })
    }
}

/// Errors while reading an interpretation document or validator config.
/// These are input-format failures, distinct from semantic [`ParseError`]s.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document missing required field: '{field}'")]
    MissingField { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_round_trip() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::parse(kind.as_str()), Some(kind));
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
        assert_eq!(ErrorKind::parse("unknown"), None);
    }

    #[test]
    fn message_is_category_not_explanation() {
        let err = ParseError::WrongArity {
            constructor: "f".to_string(),
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.message(), "wrong func interpretation arity");
        assert_eq!(
            err.to_string(),
            "wrong arity of constructor f: expected arity 2, got arity 1"
        );
    }

    #[test]
    fn json_payload_has_both_fields() {
        let err = ParseError::UndefinedArg {
            variable: "z".to_string(),
        };
        let v = err.to_json_value(Locale::En);
        assert_eq!(v["message"], "undefined arg");
        assert!(v["llm_message"].as_str().unwrap().contains("z"));
    }
}
