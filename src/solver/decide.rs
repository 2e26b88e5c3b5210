use super::data::{Var, VarVec};
use super::trail::Trail;

const DECAY_FACTOR: f64 = 0.5;
const DECAY_INTERVAL: u32 = 50;

/// Per-variable activity scores driving the branching order.
///
/// A variable is bumped whenever it appears in a learned clause; all scores
/// are halved every [`DECAY_INTERVAL`] conflicts, so recent conflicts weigh
/// more than old ones.
#[derive(Default)]
pub(crate) struct Activity {
    scores: VarVec<f64>,
    conflicts_since_decay: u32,
}

impl Activity {
    pub fn expand(&mut self, var: Var) {
        self.scores.expand(var, 0.0);
    }

    pub fn bump(&mut self, var: Var) {
        self.scores[var] += 1.0;
    }

    pub fn decay_tick(&mut self) {
        self.conflicts_since_decay += 1;
        if self.conflicts_since_decay >= DECAY_INTERVAL {
            self.conflicts_since_decay = 0;
            for score in &mut self.scores {
                *score *= DECAY_FACTOR;
            }
        }
    }

    /// The unassigned variable with the highest activity; the smallest
    /// index wins ties. `None` iff every variable is assigned.
    pub fn pick(&self, trail: &Trail) -> Option<Var> {
        let mut best: Option<(Var, f64)> = None;

        for (var, &score) in self.scores.iter_with_var() {
            if !trail.is_var_unassigned(var) {
                continue;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((var, score)),
            }
        }

        best.map(|(var, _)| var)
    }
}

#[cfg(test)]
mod tests {
    use super::super::data::Lit;
    use super::super::trail::TrailReason;
    use super::*;

    #[test]
    fn picks_highest_activity_smallest_index_first() {
        let mut trail = Trail::default();
        trail.expand(Var::new(3));

        let mut activity = Activity::default();
        activity.expand(Var::new(3));
        activity.bump(Var::new(2));
        activity.bump(Var::new(2));
        activity.bump(Var::new(3));
        activity.bump(Var::new(3));

        // Vars 2 and 3 are tied, the smaller index wins.
        assert_eq!(activity.pick(&trail), Some(Var::new(2)));

        trail.assign_lit(Lit::new(2), TrailReason::Decision);
        assert_eq!(activity.pick(&trail), Some(Var::new(3)));

        trail.assign_lit(Lit::new(3), TrailReason::Decision);
        trail.assign_lit(Lit::new(-1), TrailReason::Decision);
        assert_eq!(activity.pick(&trail), None);
    }

    #[test]
    fn decay_halves_scores_after_fifty_conflicts() {
        let mut activity = Activity::default();
        activity.expand(Var::new(1));
        activity.bump(Var::new(1));

        for _ in 0..DECAY_INTERVAL {
            activity.decay_tick();
        }

        let mut trail = Trail::default();
        trail.expand(Var::new(1));
        // Still picked, just with a decayed score.
        assert_eq!(activity.pick(&trail), Some(Var::new(1)));
        assert_eq!(activity.scores[Var::new(1)], 0.5);
    }
}
