use super::data::Lit;
use super::trail::{Trail, TrailReason};
use super::Solver;

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const END: &str = "\u{1b}[0m";

impl Solver {
    /// Dump the clause database with assignment coloring. Debug builds only.
    pub(crate) fn log_state(&self) {
        #[cfg(debug_assertions)]
        {
            for cls in self.clause_db.iter() {
                tracing::debug!("{}", self.trail.fmt_clause(cls));
            }
        }
    }
}

impl Trail {
    pub(crate) fn fmt_lit(&self, lit: Lit) -> String {
        match self.get_lit_assignment(lit) {
            Some(true) => format!("{GREEN}{lit}{END}"),
            Some(false) => format!("{RED}{lit}{END}"),
            None => lit.to_string(),
        }
    }

    pub(crate) fn fmt_clause(&self, clause: &[Lit]) -> String {
        let lits: Vec<String> = clause.iter().map(|&lit| self.fmt_lit(lit)).collect();
        format!("({})", lits.join(", "))
    }

    pub(crate) fn fmt_trail(&self) -> String {
        let entries: Vec<String> = self
            .elements()
            .iter()
            .map(|elem| match elem.reason {
                TrailReason::Decision => format!("{}D", elem.lit),
                TrailReason::Propagated { .. } => format!("{}P", elem.lit),
                TrailReason::Axiom => format!("{}A", elem.lit),
            })
            .collect();
        format!("[{}]", entries.join(", "))
    }
}
