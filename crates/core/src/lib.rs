//! trs-interpret-core: semantic validation of polynomial interpretations
//! declared for a term-rewriting system.
//!
//! Runs before any termination analysis consumes the interpretations. It
//! only checks structure and references and never evaluates a polynomial.
//!
//! # Public API
//!
//! - [`check_monomials()`] -- body variables are bound on the left-hand side
//! - [`check_interpretations()`] -- one well-formed interpretation per constructor
//! - [`validate()`] -- both stages over a full interpretation list
//! - [`InterpretationDocument`] -- JSON bundle of signature + interpretations
//! - [`ParseError`] / [`ErrorKind`] -- the single semantic error type and its category
//! - [`Locale`] / [`ValidatorConfig`] -- how explanations are rendered

pub mod ast;
pub mod config;
pub mod document;
pub mod error;
pub mod interpretation;
pub mod messages;
pub mod monomial;
pub mod validate;

// ── Convenience re-exports: key types ────────────────────────────────

pub use ast::{ConstructorArity, Factor, Interpretation, Monomial};
pub use config::ValidatorConfig;
pub use document::InterpretationDocument;
pub use error::{ErrorKind, LoadError, ParseError};
pub use messages::Locale;

// ── Convenience re-exports: entry points ─────────────────────────────

pub use interpretation::check_interpretations;
pub use monomial::check_monomials;
pub use validate::validate;
