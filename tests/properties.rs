use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use lernsat::{Result, Solver};

/// Exhaustive truth-table check, usable for small variable counts.
fn reference_sat(num_vars: usize, clauses: &[Vec<i32>]) -> bool {
    assert!(num_vars <= 16);

    (0u32..1 << num_vars).any(|bits| {
        clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let assigned = bits & (1 << (lit.unsigned_abs() - 1)) != 0;
                if lit > 0 {
                    assigned
                } else {
                    !assigned
                }
            })
        })
    })
}

fn model_satisfies(clauses: &[Vec<i32>], model: &[i32]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.iter().any(|lit| model.contains(lit)))
}

/// Arbitrary small formulas, satisfiable or not. Clauses may repeat
/// literals or contain both polarities of a variable.
fn small_formula() -> impl Strategy<Value = (usize, Vec<Vec<i32>>)> {
    (2usize..=8).prop_flat_map(|num_vars| {
        let lit = (1i32..=num_vars as i32).prop_flat_map(|v| prop_oneof![Just(v), Just(-v)]);
        let clause = proptest::collection::vec(lit, 1..=3);
        let clauses = proptest::collection::vec(clause, 1..30);
        (Just(num_vars), clauses)
    })
}

/// Random 3-SAT instances built around a hidden full assignment; every
/// clause keeps at least one literal that agrees with it.
fn planted_sat_formula() -> impl Strategy<Value = (usize, Vec<Vec<i32>>)> {
    (4usize..=30, 10usize..=120).prop_flat_map(|(num_vars, num_clauses)| {
        proptest::collection::vec(proptest::bool::ANY, num_vars).prop_perturb(
            move |hidden, mut rng| {
                let signed = |var: usize| {
                    if hidden[var - 1] {
                        var as i32
                    } else {
                        -(var as i32)
                    }
                };
                let vars: Vec<usize> = (1..=num_vars).collect();

                let mut clauses = Vec::with_capacity(num_clauses);
                for _ in 0..num_clauses {
                    let picked: Vec<usize> = vars
                        .choose_multiple(&mut rng, 3.min(num_vars))
                        .copied()
                        .collect();
                    let mut clause: Vec<i32> = picked
                        .iter()
                        .map(|&v| if rng.gen() { v as i32 } else { -(v as i32) })
                        .collect();

                    if !clause.iter().any(|&l| l == signed(l.unsigned_abs() as usize)) {
                        clause[0] = signed(picked[0]);
                    }
                    clauses.push(clause);
                }

                (num_vars, clauses)
            },
        )
    })
}

proptest! {
    #[test]
    fn verdict_matches_the_truth_table((num_vars, clauses) in small_formula()) {
        let expected = reference_sat(num_vars, &clauses);

        let mut solver = Solver::from_clauses(num_vars, clauses.clone());
        prop_assert_eq!(solver.solve().is_sat(), expected);
    }

    #[test]
    fn sat_models_satisfy_every_clause((num_vars, clauses) in small_formula()) {
        let mut solver = Solver::from_clauses(num_vars, clauses.clone());

        if let Result::Sat(model) = solver.solve() {
            let model = model.as_vec();
            prop_assert_eq!(model.len(), num_vars);
            prop_assert!(model_satisfies(&clauses, &model));
        }
    }

    #[test]
    fn planted_formulas_are_sat((num_vars, clauses) in planted_sat_formula()) {
        let mut solver = Solver::from_clauses(num_vars, clauses.clone());

        let result = solver.solve();
        prop_assert!(result.is_sat());

        let model = result.unwrap_sat().as_vec();
        prop_assert_eq!(model.len(), num_vars);
        prop_assert!(model_satisfies(&clauses, &model));
    }

    #[test]
    fn verdicts_are_idempotent((num_vars, clauses) in small_formula()) {
        let first = Solver::from_clauses(num_vars, clauses.clone()).solve().is_sat();
        let second = Solver::from_clauses(num_vars, clauses.clone()).solve().is_sat();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn embedded_contradiction_is_unsat((num_vars, mut clauses) in small_formula()) {
        clauses.push(vec![1]);
        clauses.push(vec![-1]);

        let mut solver = Solver::from_clauses(num_vars, clauses);
        prop_assert!(solver.solve().is_unsat());
    }
}
