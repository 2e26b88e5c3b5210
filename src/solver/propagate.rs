//! Unit propagation with two watched literals.

use super::trail::TrailReason;
use super::watch::Watch;
use super::Solver;
use super::clause::ClauseIdx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropagationResult {
    Contradiction(ClauseIdx),
    Done,
}

impl Solver {
    /// Drain the unpropagated suffix of the trail in FIFO order.
    ///
    /// For every newly satisfied literal, the clauses watching its negation
    /// are visited once: either the other watch already satisfies the
    /// clause, or the watch moves to a non-false literal, or the clause has
    /// become unit and forces the other watch, or it is a contradiction.
    pub(crate) fn propagate(&mut self) -> PropagationResult {
        let mut trail_pos = self.unpropagated_pos;

        while let Some(&elem) = self.trail.get(trail_pos) {
            let lit = elem.lit;
            debug_assert!(self.trail.is_lit_satisfied(lit));
            self.stats.propagations += 1;

            let mut contradiction = None;

            let (watch_list, mut other_lists) = self.watches.remaining(-lit);
            watch_list.retain(|watch| {
                // Once a contradiction is found the rest of the list is kept
                // untouched.
                if contradiction.is_some() {
                    return true;
                }

                let cls_idx = watch.clause;
                let cls = self.clause_db.get_mut(cls_idx);

                // Watched literals sit at positions 0 and 1.
                let false_pos = if cls[0] == -lit {
                    0
                } else {
                    debug_assert_eq!(cls[1], -lit);
                    1
                };
                let other = cls[1 - false_pos];

                if self.trail.is_lit_satisfied(other) {
                    return true;
                }

                // Look for a non-false replacement among the unwatched
                // literals.
                for pos in 2..cls.len() {
                    let candidate = cls[pos];
                    if !self.trail.is_lit_unsatisfied(candidate) {
                        other_lists[candidate].push(Watch { clause: cls_idx });
                        cls.swap(false_pos, pos);
                        // Dropped from this list, the clause now watches
                        // `candidate` instead.
                        return false;
                    }
                }

                // Every unwatched literal is false: the clause is unit on
                // `other` or a contradiction.
                if self.trail.is_lit_unassigned(other) {
                    self.trail
                        .assign_lit(other, TrailReason::Propagated { cls: cls_idx });
                } else {
                    debug_assert!(self.trail.is_lit_unsatisfied(other));
                    contradiction = Some(cls_idx);
                }
                true
            });

            if let Some(conflicting_clause) = contradiction {
                return PropagationResult::Contradiction(conflicting_clause);
            }

            trail_pos += 1;
        }

        self.unpropagated_pos = trail_pos;
        debug_assert_eq!(self.unpropagated_pos, self.trail.assigned_vars());
        PropagationResult::Done
    }
}
