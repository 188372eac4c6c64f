//! Two-stage validation: interpretation bodies, then the interpretation set.
//!
//! This is a thin orchestrator over [`check_monomials`] and
//! [`check_interpretations`].

use crate::ast::{ConstructorArity, Interpretation};
use crate::error::ParseError;
use crate::interpretation::check_interpretations;
use crate::monomial::check_monomials;

/// Validate every interpretation body against its own formal arguments,
/// then the whole set against the constructor signature. Returns the
/// first violation encountered.
pub fn validate(
    interpretations: &[Interpretation],
    constructor_arity: &ConstructorArity,
) -> Result<(), ParseError> {
    for interpretation in interpretations {
        check_monomials(&interpretation.monomials, &interpretation.args)?;
    }

    check_interpretations(interpretations, constructor_arity)?;

    tracing::debug!(
        interpretations = interpretations.len(),
        "interpretations validated"
    );
    Ok(())
}
