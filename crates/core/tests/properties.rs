use proptest::prelude::*;
use trs_interpret_core::{
    check_interpretations, check_monomials, ConstructorArity, ErrorKind, Interpretation,
    Monomial,
};

/// A signature of up to five constructors with distinct names.
fn signature() -> impl Strategy<Value = ConstructorArity> {
    prop::collection::btree_map("[a-e]", 0usize..4, 0..5)
}

/// One interpretation per constructor with fresh argument names.
fn exact_interpretations(table: &ConstructorArity) -> Vec<Interpretation> {
    table
        .iter()
        .map(|(name, n)| Interpretation::new(name.clone(), (0..*n).map(|i| format!("x{}", i))))
        .collect()
}

proptest! {
    #[test]
    fn present_empty_factors_always_fail(declared in prop::collection::vec("[a-z]", 0..5)) {
        let monomials = vec![Monomial { factors: Some(Vec::new()) }];
        let err = check_monomials(&monomials, &declared).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::EmptyMonomial);
    }

    #[test]
    fn undeclared_variable_fails_declared_passes(
        declared in prop::collection::btree_set("[a-m]", 1..6),
        undeclared in "[n-z]",
    ) {
        let declared: Vec<String> = declared.into_iter().collect();

        let ok = vec![Monomial::product(declared.clone())];
        prop_assert!(check_monomials(&ok, &declared).is_ok());

        let bad = vec![Monomial::product([undeclared])];
        let err = check_monomials(&bad, &declared).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UndefinedArg);
    }

    #[test]
    fn absent_factors_never_fail(declared in prop::collection::vec("[a-z]{1,3}", 0..5)) {
        let monomials = vec![Monomial::constant(); 3];
        prop_assert!(check_monomials(&monomials, &declared).is_ok());
    }

    #[test]
    fn exact_cover_succeeds(table in signature()) {
        let interps = exact_interpretations(&table);
        prop_assert!(check_interpretations(&interps, &table).is_ok());
    }

    #[test]
    fn dropping_any_interpretation_fails(table in signature(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!table.is_empty());
        let mut interps = exact_interpretations(&table);
        interps.remove(pick.index(interps.len()));
        let err = check_interpretations(&interps, &table).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MissingInterpretation);
    }

    #[test]
    fn second_occurrence_is_duplicate(
        table in signature(),
        pick in any::<prop::sample::Index>(),
        extra_args in prop::collection::vec("[a-z]", 0..4),
    ) {
        prop_assume!(!table.is_empty());
        let mut interps = exact_interpretations(&table);
        let name = interps[pick.index(interps.len())].name.clone();
        // The repeat's own arity and arguments are irrelevant.
        interps.push(Interpretation::new(name, extra_args));
        let err = check_interpretations(&interps, &table).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DuplicateInterpretation);
    }

    #[test]
    fn unknown_constructor_is_excess(
        table in signature(),
        args in prop::collection::vec("[a-c]", 0..6),
    ) {
        let mut interps = exact_interpretations(&table);
        // Names outside [a-e] are never in the signature; repeated args
        // and any arity must not be reported instead.
        interps.push(Interpretation::new("zz", args));
        let err = check_interpretations(&interps, &table).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ExcessInterpretation);
    }

    #[test]
    fn repeated_argument_names_fail(table in signature(), pick in any::<prop::sample::Index>()) {
        let candidates: Vec<&String> =
            table.iter().filter(|(_, n)| **n >= 2).map(|(name, _)| name).collect();
        prop_assume!(!candidates.is_empty());
        let target = candidates[pick.index(candidates.len())].clone();

        let mut interps = exact_interpretations(&table);
        for interp in &mut interps {
            if interp.name == target {
                interp.args[1] = interp.args[0].clone();
            }
        }
        let err = check_interpretations(&interps, &table).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DuplicateArgumentName);
    }
}
