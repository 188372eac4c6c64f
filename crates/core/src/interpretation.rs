//! Interpretation validation -- exclusivity, membership, arity and argument
//! checks per interpretation, followed by a completeness pass over the
//! constructor signature.

use crate::ast::{ConstructorArity, Interpretation};
use crate::error::ParseError;
use std::collections::HashSet;

/// Check that `interpretations` assign exactly one well-formed
/// interpretation to every constructor in `constructor_arity`.
///
/// Per-interpretation violations are reported before a missing
/// interpretation, since the latter is only known after the full scan.
pub fn check_interpretations(
    interpretations: &[Interpretation],
    constructor_arity: &ConstructorArity,
) -> Result<(), ParseError> {
    tracing::debug!(
        interpretations = interpretations.len(),
        constructors = constructor_arity.len(),
        "checking interpretations"
    );

    let mut checker = InterpretationsChecker {
        defined: HashSet::new(),
    };

    for interpretation in interpretations {
        if let Err(err) = checker.check_interpretation(interpretation, constructor_arity) {
            tracing::debug!(
                kind = %err.kind(),
                constructor = %interpretation.name,
                "interpretation check failed"
            );
            return Err(err);
        }
    }

    checker.check_completeness(constructor_arity)
}

type SubCheck<'a> =
    fn(&mut InterpretationsChecker<'a>, &'a Interpretation, &ConstructorArity) -> Result<(), ParseError>;

struct InterpretationsChecker<'a> {
    /// Constructor names already interpreted during this scan.
    defined: HashSet<&'a str>,
}

impl<'a> InterpretationsChecker<'a> {
    fn check_interpretation(
        &mut self,
        interpretation: &'a Interpretation,
        constructor_arity: &ConstructorArity,
    ) -> Result<(), ParseError> {
        tracing::trace!(constructor = %interpretation.name, "checking interpretation");

        // Order matters: a repeated or unknown name is reported before
        // anything about its arguments.
        let checks: [SubCheck<'a>; 4] = [
            Self::check_duplicate_interpretation,
            Self::check_excess_interpretation,
            Self::check_interpretation_arity,
            Self::check_duplicate_argument_name,
        ];

        for check in checks {
            check(self, interpretation, constructor_arity)?;
        }

        Ok(())
    }

    fn check_duplicate_interpretation(
        &mut self,
        interpretation: &'a Interpretation,
        _constructor_arity: &ConstructorArity,
    ) -> Result<(), ParseError> {
        if !self.defined.insert(interpretation.name.as_str()) {
            return Err(ParseError::DuplicateInterpretation {
                constructor: interpretation.name.clone(),
            });
        }
        Ok(())
    }

    fn check_excess_interpretation(
        &mut self,
        interpretation: &'a Interpretation,
        constructor_arity: &ConstructorArity,
    ) -> Result<(), ParseError> {
        if !constructor_arity.contains_key(&interpretation.name) {
            return Err(ParseError::ExcessInterpretation {
                constructor: interpretation.name.clone(),
            });
        }
        Ok(())
    }

    fn check_interpretation_arity(
        &mut self,
        interpretation: &'a Interpretation,
        constructor_arity: &ConstructorArity,
    ) -> Result<(), ParseError> {
        let expected = constructor_arity
            .get(&interpretation.name)
            .copied()
            .unwrap_or_default();
        let actual = interpretation.args.len();
        if expected != actual {
            return Err(ParseError::WrongArity {
                constructor: interpretation.name.clone(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn check_duplicate_argument_name(
        &mut self,
        interpretation: &'a Interpretation,
        _constructor_arity: &ConstructorArity,
    ) -> Result<(), ParseError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(interpretation.args.len());
        for arg in &interpretation.args {
            if !seen.insert(arg.as_str()) {
                return Err(ParseError::DuplicateArgumentName {
                    constructor: interpretation.name.clone(),
                    argument: arg.clone(),
                });
            }
        }
        Ok(())
    }

    /// Every constructor must have been interpreted. The arity table is
    /// ordered, so the reported constructor is the smallest missing name.
    fn check_completeness(&self, constructor_arity: &ConstructorArity) -> Result<(), ParseError> {
        for expected_name in constructor_arity.keys() {
            if !self.defined.contains(expected_name.as_str()) {
                tracing::debug!(constructor = %expected_name, "missing interpretation");
                return Err(ParseError::MissingInterpretation {
                    constructor: expected_name.clone(),
                });
            }
        }
        Ok(())
    }
}
