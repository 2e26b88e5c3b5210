mod analyze;
mod assignment;
mod clause;
mod data;
mod decide;
mod log;
mod propagate;
mod trail;
mod watch;

use tracing::debug;

use crate::dimacs::{DimacsError, Formula};

use analyze::{AnalyzeResult, AnalyzeState};
use clause::ClauseDB;
use data::LitVec;
pub use data::{Lit, Var};
use decide::Activity;
use propagate::PropagationResult;
use trail::{Trail, TrailReason};
use watch::Watch;

/// Search counters, exposed through [`Solver::stats`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub propagations: u64,
    pub conflicts: u64,
    pub decisions: u64,
    pub learned_clauses: u64,
}

#[derive(Default)]
pub struct Solver {
    clause_db: ClauseDB,

    watches: LitVec<Vec<Watch>>,

    trail: Trail,

    // Trail position where unit propagation continues.
    unpropagated_pos: usize,

    // The input formula is trivially unsat, either through an empty clause
    // or contradictory unit clauses.
    trivially_unsat: bool,

    /// Branching order bookkeeping.
    activity: Activity,

    /// Scratch data for conflict analysis, reset per conflict.
    analyze_state: AnalyzeState,

    stats: Stats,
}

/// A satisfying assignment, borrowed from the solver that produced it.
pub struct Model<'a> {
    assignment: &'a Trail,
}

impl Model<'_> {
    /// Truth value of a literal under the model.
    pub fn lit(&self, l: i32) -> bool {
        self.assignment.is_lit_satisfied(Lit::new(l))
    }

    /// Truth value of a variable under the model.
    pub fn var(&self, v: u32) -> bool {
        self.lit(v as i32)
    }

    /// The model as signed literals for variables `1..=num_vars`.
    pub fn as_vec(&self) -> Vec<i32> {
        (1..=self.assignment.total_vars())
            .map(|i| {
                let i = i as i32;
                if self.assignment.is_lit_satisfied(Lit::new(i)) {
                    i
                } else {
                    -i
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Model").field(&self.as_vec()).finish()
    }
}

#[derive(Debug)]
pub enum Result<'a> {
    Sat(Model<'a>),
    Unsat,
}

impl<'a> Result<'a> {
    pub fn is_sat(&self) -> bool {
        matches!(self, Result::Sat(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, Result::Unsat)
    }

    pub fn unwrap_sat(self) -> Model<'a> {
        match self {
            Result::Sat(model) => model,
            Result::Unsat => panic!("result is not SAT"),
        }
    }
}

impl Solver {
    /// An empty solver over variables `1..=num_vars`.
    ///
    /// Variables not constrained by any clause still receive a value in the
    /// model.
    pub fn new(num_vars: usize) -> Self {
        let mut solver = Solver::default();
        if num_vars > 0 {
            let max_var =
                i32::try_from(num_vars).expect("variable count exceeds the supported range");
            solver.reserve(Var::new(max_var));
        }
        solver
    }

    /// Build a solver from clauses of DIMACS literals.
    pub fn from_clauses<C, I>(num_vars: usize, clauses: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = i32>,
    {
        let mut solver = Self::new(num_vars);
        for cls in clauses {
            solver.add_clause(cls);
        }
        solver
    }

    pub fn from_dimacs(input: &str) -> std::result::Result<Solver, DimacsError> {
        let formula = Formula::parse(input)?;
        Ok(Self::from_clauses(formula.num_vars, formula.clauses))
    }

    fn reserve(&mut self, max_var: Var) {
        self.trail.expand(max_var);
        self.activity.expand(max_var);
        self.watches.expand(-Lit::from(max_var), Vec::new());
    }

    /// Sort and deduplicate literals. Returns true if the clause is a
    /// tautology (contains a variable in both polarities).
    fn normalise_clause(cls: &mut Vec<Lit>) -> bool {
        cls.sort_by_key(|lit| lit.get());
        cls.dedup();

        cls.windows(2).any(|pair| pair[0].var() == pair[1].var())
    }

    pub fn add_clause<I>(&mut self, cls: I)
    where
        I: IntoIterator<Item = i32>,
    {
        let mut cls: Vec<Lit> = cls.into_iter().map(Lit::new).collect();

        if Self::normalise_clause(&mut cls) {
            return;
        }

        if let Some(&max_lit) = cls.iter().max_by_key(|l| l.var().get()) {
            self.reserve(max_lit.var());
        }

        match cls.len() {
            0 => {
                self.trivially_unsat = true;
            }
            1 => {
                let unit = cls[0];
                if self.trail.is_lit_unsatisfied(unit) {
                    self.trivially_unsat = true;
                } else if self.trail.is_lit_unassigned(unit) {
                    self.trail.assign_lit(unit, TrailReason::Axiom);
                }
            }
            _ => {
                let cls_idx = self.clause_db.insert_clause(&cls);
                for &lit in &cls[0..2] {
                    self.watches[lit].push(Watch { clause: cls_idx });
                }
            }
        }
    }

    fn decide(&self) -> Option<Var> {
        self.activity.pick(&self.trail)
    }

    pub fn solve(&mut self) -> Result<'_> {
        if self.trivially_unsat {
            debug!("formula is trivially unsat");
            return Result::Unsat;
        }

        loop {
            self.log_state();

            if let PropagationResult::Contradiction(conflicting_clause) = self.propagate() {
                if self.analyze_contradiction(conflicting_clause) == AnalyzeResult::Unsat {
                    debug!(
                        "formula is unsat after {} conflicts and {} stored clauses",
                        self.stats.conflicts,
                        self.clause_db.len()
                    );
                    return Result::Unsat;
                }
                // Analysis asserted the negated UIP; propagate it before the
                // next decision.
                continue;
            }

            if self.trail.assignment_complete() {
                let model = Model {
                    assignment: &self.trail,
                };
                debug!("satisfying assignment found {:?}", model.as_vec());
                assert!(
                    self.check_assignment(),
                    "model does not satisfy the input formula"
                );
                return Result::Sat(model);
            }

            match self.decide() {
                Some(var) => {
                    self.stats.decisions += 1;
                    debug!("decision {}: {var}", self.stats.decisions);
                    self.trail.assign_lit(Lit::from(var), TrailReason::Decision);
                }
                None => {
                    unreachable!("an incomplete assignment always leaves a decision candidate")
                }
            }
        }
    }

    /// Whether the current assignment satisfies every stored clause.
    fn check_assignment(&self) -> bool {
        self.clause_db
            .iter()
            .all(|clause| self.trail.is_clause_satisfied(clause))
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
