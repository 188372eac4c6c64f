//! Monomial validation: every factor of an interpretation body must refer
//! to a variable bound on the left-hand side.

use crate::ast::{Factor, Monomial};
use crate::error::ParseError;
use std::collections::HashSet;

/// Check `monomials` in order against the declared argument names.
/// Returns the first violation found.
pub fn check_monomials(monomials: &[Monomial], declared_args: &[String]) -> Result<(), ParseError> {
    tracing::debug!(
        monomials = monomials.len(),
        declared = declared_args.len(),
        "checking monomials"
    );

    let checker = MonomialChecker {
        defined_vars: declared_args.iter().map(String::as_str).collect(),
    };

    for monomial in monomials {
        if let Err(err) = checker.check_monomial(monomial) {
            tracing::debug!(kind = %err.kind(), "monomial check failed");
            return Err(err);
        }
    }

    Ok(())
}

struct MonomialChecker<'a> {
    defined_vars: HashSet<&'a str>,
}

impl MonomialChecker<'_> {
    fn check_monomial(&self, monomial: &Monomial) -> Result<(), ParseError> {
        // Constant term: nothing to resolve.
        let Some(factors) = &monomial.factors else {
            return Ok(());
        };
        if factors.is_empty() {
            return Err(ParseError::EmptyMonomial);
        }

        for factor in factors {
            self.check_factor(factor)?;
        }

        Ok(())
    }

    fn check_factor(&self, factor: &Factor) -> Result<(), ParseError> {
        tracing::trace!(variable = %factor.variable, "checking factor");
        if !self.defined_vars.contains(factor.variable.as_str()) {
            return Err(ParseError::UndefinedArg {
                variable: factor.variable.clone(),
            });
        }
        Ok(())
    }
}
