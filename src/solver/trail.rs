use super::assignment::Assignment;
use super::clause::ClauseIdx;
use super::data::{Lit, Var};

/// Why a literal entered the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrailReason {
    /// Chosen by the decision heuristic.
    Decision,

    /// Forced by unit propagation of the given clause.
    Propagated { cls: ClauseIdx },

    /// Unit clause of the input or a learned unit. Lives at level 0 and is
    /// never undone.
    Axiom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailElement {
    pub(crate) lit: Lit,
    pub(crate) reason: TrailReason,
}

/// Assignment history in chronological order, partitioned into decision
/// levels. Decision levels along the trail are non-decreasing.
#[derive(Default)]
pub(crate) struct Trail {
    elements: Vec<TrailElement>,
    /// Trail position of each decision; entry `i` opens level `i + 1`.
    decision_positions: Vec<usize>,
    assignment: Assignment,
}

impl Trail {
    pub fn assigned_vars(&self) -> usize {
        self.elements.len()
    }

    pub fn total_vars(&self) -> usize {
        self.assignment.len()
    }

    pub fn assignment_complete(&self) -> bool {
        self.elements.len() == self.assignment.len()
    }

    pub fn get(&self, idx: usize) -> Option<&TrailElement> {
        self.elements.get(idx)
    }

    pub fn elements(&self) -> &[TrailElement] {
        &self.elements
    }

    /// Expands the internal assignment for a new maximum variable.
    pub fn expand(&mut self, var: Var) {
        self.assignment.expand(var)
    }

    pub fn current_decision_level(&self) -> u32 {
        self.decision_positions.len() as u32
    }

    pub fn assign_lit(&mut self, lit: Lit, reason: TrailReason) {
        if reason == TrailReason::Decision {
            self.decision_positions.push(self.elements.len());
        }
        debug_assert!(reason != TrailReason::Axiom || self.current_decision_level() == 0);

        self.elements.push(TrailElement { lit, reason });
        self.assignment
            .assign_lit(lit, self.current_decision_level(), reason);
    }

    /// Undo every assignment above `level`, in reverse trail order.
    /// Returns the new trail length.
    pub fn backtrack(&mut self, level: u32) -> usize {
        debug_assert!(level <= self.current_decision_level());

        while self.current_decision_level() > level {
            let pos = self
                .decision_positions
                .pop()
                .expect("level bound checked against the decision count");
            while self.elements.len() > pos {
                let elem = self
                    .elements
                    .pop()
                    .expect("decision positions point into the trail");
                self.assignment.unassign_lit(elem.lit);
            }
        }

        self.elements.len()
    }

    pub fn decision_level_of(&self, lit: Lit) -> Option<u32> {
        self.assignment.decision_level(lit.var())
    }

    /// The clause that propagated `lit`. Only valid for propagated literals.
    pub fn reason_cls(&self, lit: Lit) -> ClauseIdx {
        match self.assignment.reason(lit.var()) {
            Some(TrailReason::Propagated { cls }) => cls,
            reason => unreachable!("literal {lit} was not propagated: {reason:?}"),
        }
    }

    pub fn get_lit_assignment(&self, lit: Lit) -> Option<bool> {
        self.assignment.get(lit)
    }

    pub fn is_lit_satisfied(&self, lit: Lit) -> bool {
        self.assignment.is_lit_satisfied(lit)
    }

    pub fn is_lit_unsatisfied(&self, lit: Lit) -> bool {
        self.assignment.is_lit_unsatisfied(lit)
    }

    pub fn is_lit_unassigned(&self, lit: Lit) -> bool {
        self.assignment.is_lit_unassigned(lit)
    }

    pub fn is_var_unassigned(&self, var: Var) -> bool {
        self.assignment.is_var_unassigned(var)
    }

    pub fn is_clause_satisfied(&self, clause: &[Lit]) -> bool {
        clause.iter().any(|&lit| self.is_lit_satisfied(lit))
    }
}
