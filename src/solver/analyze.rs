use tracing::debug;

use super::clause::ClauseIdx;
use super::data::{Lit, VarVec};
use super::trail::{Trail, TrailReason};
use super::watch::Watch;
use super::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnalyzeResult {
    Unsat,
    Done,
}

/// Scratch space for conflict analysis, reset for every conflict.
#[derive(Default)]
pub(crate) struct AnalyzeState {
    /// Variables already pulled into the resolution.
    seen: VarVec<bool>,

    /// Learned clause under construction. Literals below the conflict level
    /// collect here; the asserting literal is appended last.
    learned: Vec<Lit>,

    /// Marked literals at the conflict level whose reasons are still
    /// unresolved.
    open: u32,
}

impl AnalyzeState {
    fn reset(&mut self, num_vars: usize) {
        self.seen.fill(false);
        self.seen.resize(num_vars, false);
        self.learned.clear();
        self.open = 0;
    }

    fn has_seen(&self, lit: Lit) -> bool {
        self.seen[lit.var()]
    }

    fn examine_clause(&mut self, skip: Option<Lit>, reason: &[Lit], trail: &Trail) {
        for &lit in reason {
            if skip == Some(lit) {
                continue;
            }
            self.examine_literal(lit, trail);
        }
    }

    fn examine_literal(&mut self, lit: Lit, trail: &Trail) {
        if self.has_seen(lit) {
            return;
        }

        let lit_level = trail
            .decision_level_of(lit)
            .expect("conflict literals are assigned");
        debug_assert!(trail.is_lit_unsatisfied(lit));
        debug_assert!(lit_level <= trail.current_decision_level());

        if lit_level < trail.current_decision_level() {
            self.learned.push(lit);
        } else {
            self.open += 1;
        }
        self.seen[lit.var()] = true;
    }
}

impl Solver {
    /// Resolve the conflict into a first-UIP clause, learn it, jump back and
    /// assert its single conflict-level literal.
    ///
    /// Returns [`AnalyzeResult::Unsat`] for a conflict at decision level 0.
    pub(crate) fn analyze_contradiction(&mut self, conflict: ClauseIdx) -> AnalyzeResult {
        self.stats.conflicts += 1;

        let current_level = self.trail.current_decision_level();
        if current_level == 0 {
            return AnalyzeResult::Unsat;
        }

        debug!("conflict at level {current_level}, trail {}", self.trail.fmt_trail());
        debug_assert!(self
            .clause_db
            .get(conflict)
            .iter()
            .all(|&lit| self.trail.is_lit_unsatisfied(lit)));

        let state = &mut self.analyze_state;
        state.reset(self.trail.total_vars());

        let mut trail_pos = self.trail.assigned_vars();
        let mut reason = self.clause_db.get(conflict);
        let mut uip = None;

        // Walk the trail backward, resolving reason clauses into the learned
        // clause until a single literal of the conflict level survives.
        loop {
            state.examine_clause(uip, reason, &self.trail);

            let pivot = loop {
                debug_assert!(trail_pos > 0);
                trail_pos -= 1;
                let lit = self
                    .trail
                    .get(trail_pos)
                    .expect("the walk stays within the trail")
                    .lit;

                if state.has_seen(lit)
                    && self.trail.decision_level_of(lit) == Some(current_level)
                {
                    break lit;
                }
            };
            uip = Some(pivot);

            if state.open == 1 {
                break;
            }
            state.open -= 1;

            reason = self.clause_db.get(self.trail.reason_cls(pivot));
        }

        let uip = uip.expect("a conflict always involves the current decision level");
        state.learned.push(-uip);

        let learned = &mut state.learned;

        // The asserting literal watches first. The deepest remaining level
        // watches second and doubles as the backjump target.
        let last = learned.len() - 1;
        learned.swap(0, last);

        let mut backjump_level = 0;
        if learned.len() > 1 {
            let level_of = |lit: Lit| {
                self.trail
                    .decision_level_of(lit)
                    .expect("learned literals are assigned")
            };

            let mut deepest = 1;
            for pos in 2..learned.len() {
                if level_of(learned[pos]) > level_of(learned[deepest]) {
                    deepest = pos;
                }
            }
            learned.swap(1, deepest);
            backjump_level = level_of(learned[1]);
        }
        debug_assert!(backjump_level < current_level);
        debug!(
            "learned {}, jumping back to level {backjump_level}",
            self.trail.fmt_clause(learned)
        );

        for &lit in learned.iter() {
            self.activity.bump(lit.var());
        }
        self.activity.decay_tick();
        self.stats.learned_clauses += 1;

        self.unpropagated_pos = self.trail.backtrack(backjump_level);

        let asserting = learned[0];
        debug_assert_eq!(asserting, -uip);
        debug_assert!(self.trail.is_lit_unassigned(asserting));
        debug_assert!(learned[1..]
            .iter()
            .all(|&lit| self.trail.is_lit_unsatisfied(lit)));

        if learned.len() == 1 {
            debug_assert_eq!(backjump_level, 0);
            self.trail.assign_lit(asserting, TrailReason::Axiom);
        } else {
            let learned_idx = self.clause_db.insert_clause(learned);
            for &lit in &self.clause_db.get(learned_idx)[..2] {
                self.watches[lit].push(Watch { clause: learned_idx });
            }
            self.trail
                .assign_lit(asserting, TrailReason::Propagated { cls: learned_idx });
        }

        AnalyzeResult::Done
    }
}
