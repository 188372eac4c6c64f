//! Shared input types for the interpretation validators.
//!
//! These types are produced by the TRS/interpretation parser and consumed
//! by the check passes. They carry no behavior beyond construction helpers
//! and serde support for the JSON document form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ──────────────────────────────────────────────
// Constructor signature
// ──────────────────────────────────────────────

/// Constructor name -> expected arity, derived from the parsed TRS rules.
pub type ConstructorArity = BTreeMap<String, usize>;

// ──────────────────────────────────────────────
// Monomials
// ──────────────────────────────────────────────

/// A single variable reference inside a monomial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub variable: String,
}

impl Factor {
    pub fn new(variable: impl Into<String>) -> Self {
        Factor {
            variable: variable.into(),
        }
    }
}

/// A product of variable factors.
///
/// `factors` is tri-state: `None` is a constant term and is always valid,
/// `Some(vec![])` is an empty product and is rejected, anything else has
/// each factor checked against the declared arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Monomial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<Vec<Factor>>,
}

impl Monomial {
    pub fn constant() -> Self {
        Monomial { factors: None }
    }

    pub fn product<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Monomial {
            factors: Some(variables.into_iter().map(Factor::new).collect()),
        }
    }
}

// ──────────────────────────────────────────────
// Interpretations
// ──────────────────────────────────────────────

/// An interpretation of one constructor: `name(args...) = monomials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub name: String,
    pub args: Vec<String>,
    /// Body of the interpretation. Only its variable references are
    /// validated; the polynomial itself is never evaluated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monomials: Vec<Monomial>,
}

impl Interpretation {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Interpretation {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            monomials: Vec::new(),
        }
    }

    pub fn with_monomials(mut self, monomials: Vec<Monomial>) -> Self {
        self.monomials = monomials;
        self
    }
}
