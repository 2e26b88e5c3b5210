use super::data::{Lit, Var, VarVec};
use super::trail::TrailReason;

#[derive(Debug, Clone, Copy)]
struct AssignData {
    status: bool,
    decision_level: u32,
    reason: TrailReason,
}

/// The current partial assignment, indexed by variable.
#[derive(Default)]
pub(crate) struct Assignment {
    values: VarVec<Option<AssignData>>,
}

impl Assignment {
    pub fn expand(&mut self, v: Var) {
        self.values.expand(v, None);
    }

    /// Number of variables, assigned or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Truth value of `lit`, `None` while its variable is unassigned.
    pub fn get(&self, lit: Lit) -> Option<bool> {
        self.values[lit.var()].map(|data| data.status == lit.is_pos())
    }

    pub fn is_lit_satisfied(&self, lit: Lit) -> bool {
        self.get(lit) == Some(true)
    }

    pub fn is_lit_unsatisfied(&self, lit: Lit) -> bool {
        self.get(lit) == Some(false)
    }

    pub fn is_lit_unassigned(&self, lit: Lit) -> bool {
        self.values[lit.var()].is_none()
    }

    pub fn is_var_unassigned(&self, v: Var) -> bool {
        self.values[v].is_none()
    }

    pub fn decision_level(&self, v: Var) -> Option<u32> {
        self.values[v].map(|data| data.decision_level)
    }

    pub fn reason(&self, v: Var) -> Option<TrailReason> {
        self.values[v].map(|data| data.reason)
    }

    pub fn assign_lit(&mut self, lit: Lit, decision_level: u32, reason: TrailReason) {
        debug_assert!(self.is_lit_unassigned(lit));

        self.values[lit.var()] = Some(AssignData {
            status: lit.is_pos(),
            decision_level,
            reason,
        });
    }

    pub fn unassign_lit(&mut self, lit: Lit) {
        debug_assert!(self.is_lit_satisfied(lit));

        self.values[lit.var()] = None;
    }
}
