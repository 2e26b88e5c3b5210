//! Seeded random 3-SAT instances, larger than the property-test sizes.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use lernsat::Solver;

fn signed(var: usize, polarity: bool) -> i32 {
    if polarity {
        var as i32
    } else {
        -(var as i32)
    }
}

/// A 3-SAT instance with a hidden satisfying assignment.
fn planted_instance(rng: &mut SmallRng, num_vars: usize, num_clauses: usize) -> Vec<Vec<i32>> {
    let hidden: Vec<bool> = (0..num_vars).map(|_| rng.gen()).collect();
    let vars: Vec<usize> = (1..=num_vars).collect();

    let mut clauses = Vec::with_capacity(num_clauses);
    for _ in 0..num_clauses {
        let picked: Vec<usize> = vars.choose_multiple(rng, 3).copied().collect();
        let mut clause: Vec<i32> = picked.iter().map(|&v| signed(v, rng.gen())).collect();

        let agrees = |l: i32| l == signed(l.unsigned_abs() as usize, hidden[l.unsigned_abs() as usize - 1]);
        if !clause.iter().any(|&l| agrees(l)) {
            clause[0] = signed(picked[0], hidden[picked[0] - 1]);
        }
        clauses.push(clause);
    }
    clauses
}

/// Random 3-SAT clauses around an embedded pair of contradictory units.
fn contradictory_instance(rng: &mut SmallRng, num_vars: usize, num_clauses: usize) -> Vec<Vec<i32>> {
    let vars: Vec<usize> = (1..=num_vars).collect();

    let mut clauses = vec![vec![1], vec![-1]];
    for _ in 0..num_clauses {
        let picked: Vec<usize> = vars.choose_multiple(rng, 3).copied().collect();
        clauses.push(picked.iter().map(|&v| signed(v, rng.gen())).collect());
    }
    clauses
}

#[test]
fn planted_instances_are_sat() {
    let mut rng = SmallRng::seed_from_u64(45);

    for _ in 0..10 {
        let num_vars = 50;
        let clauses = planted_instance(&mut rng, num_vars, 200);

        let mut solver = Solver::from_clauses(num_vars, clauses.clone());
        let model = solver.solve().unwrap_sat().as_vec();

        assert_eq!(model.len(), num_vars);
        for clause in &clauses {
            assert!(
                clause.iter().any(|lit| model.contains(lit)),
                "clause {clause:?} is unsatisfied"
            );
        }
    }
}

#[test]
fn contradictory_instances_are_unsat() {
    let mut rng = SmallRng::seed_from_u64(43);

    for _ in 0..10 {
        let clauses = contradictory_instance(&mut rng, 30, 100);

        let mut solver = Solver::from_clauses(30, clauses);
        assert!(solver.solve().is_unsat());
    }
}
