//! Squad composition review
//!
//! A review is computed from live evaluations of every member: the member
//! evaluations run concurrently and are joined before any total is
//! computed, so a partial batch can never decide validity.

use crate::core::config::Limits;
use crate::core::error::Result;
use crate::engine::EvaluationEngine;
use crate::squad::SquadMember;
use crate::unit::Rank;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

/// Count of members per rank, insertion order = first-seen rank order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTally {
    entries: Vec<(Rank, u32)>,
}

impl RankTally {
    pub fn record(&mut self, rank: Rank) {
        match self.entries.iter_mut().find(|(r, _)| *r == rank) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((rank, 1)),
        }
    }

    pub fn count(&self, rank: Rank) -> u32 {
        self.entries
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Why a squad is currently illegal; both may be reported at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquadViolation {
    TooManyMembers { count: usize, max: usize },
    OverBudget { total: u32, max: u32 },
}

/// The validator's verdict on a squad-in-progress
///
/// Tagged with the workbench revision it was computed against so a result
/// arriving after further edits can be recognized as stale and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadReview {
    pub revision: u64,
    pub member_count: usize,
    pub total_rank_points: u32,
    pub composition: RankTally,
    pub violations: Vec<SquadViolation>,
}

impl SquadReview {
    /// Evaluate every member concurrently, join the full batch, then
    /// aggregate totals and check both budgets independently.
    pub async fn compute<E>(
        engine: &E,
        members: &[SquadMember],
        limits: &Limits,
        revision: u64,
    ) -> Result<Self>
    where
        E: EvaluationEngine + ?Sized,
    {
        let evaluations =
            try_join_all(members.iter().map(|m| engine.evaluate_unit(&m.stats))).await?;

        let mut total_rank_points = 0;
        let mut composition = RankTally::default();
        for evaluation in &evaluations {
            total_rank_points += limits.rank_points(evaluation.rank);
            composition.record(evaluation.rank);
        }

        let mut violations = Vec::new();
        if members.len() > limits.max_squad_size {
            violations.push(SquadViolation::TooManyMembers {
                count: members.len(),
                max: limits.max_squad_size,
            });
        }
        if total_rank_points > limits.max_squad_rank_points {
            violations.push(SquadViolation::OverBudget {
                total: total_rank_points,
                max: limits.max_squad_rank_points,
            });
        }

        Ok(Self {
            revision,
            member_count: members.len(),
            total_rank_points,
            composition,
            violations,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RulesetEngine;
    use crate::squad::SquadMember;
    use crate::unit::{ImageRef, Unit, UnitStats};

    fn trooper() -> Unit {
        // Baseline statline evaluates to cost 8, rank Trooper
        Unit::new("Piéton", ImageRef::default(), UnitStats::baseline())
    }

    fn members(n: usize) -> Vec<SquadMember> {
        let unit = trooper();
        (0..n).map(|_| SquadMember::snapshot(&unit)).collect()
    }

    #[tokio::test]
    async fn test_empty_squad_is_valid() {
        let engine = RulesetEngine::new().unwrap();
        let review = SquadReview::compute(&engine, &[], engine.limits(), 0)
            .await
            .unwrap();
        assert!(review.is_valid());
        assert_eq!(review.total_rank_points, 0);
        assert!(review.composition.is_empty());
    }

    #[tokio::test]
    async fn test_composition_tallies_by_first_seen_rank() {
        let engine = RulesetEngine::new().unwrap();
        let squad = members(3);
        let review = SquadReview::compute(&engine, &squad, engine.limits(), 0)
            .await
            .unwrap();
        assert_eq!(review.member_count, 3);
        assert_eq!(review.composition.count(Rank::Trooper), 3);
        assert_eq!(review.composition.count(Rank::Paragon), 0);
        // Three troopers at 1 point each
        assert_eq!(review.total_rank_points, 3);
        assert!(review.is_valid());
    }

    #[tokio::test]
    async fn test_both_violations_reported_simultaneously() {
        let engine = RulesetEngine::new().unwrap();
        let limits = Limits {
            rank_point_costs: [4, 6, 8, 10, 12],
            max_squad_size: 2,
            max_squad_rank_points: 8,
            ..Limits::default()
        };
        let squad = members(3);
        let review = SquadReview::compute(&engine, &squad, &limits, 0)
            .await
            .unwrap();
        assert!(!review.is_valid());
        assert_eq!(review.violations.len(), 2);
        assert!(review
            .violations
            .contains(&SquadViolation::TooManyMembers { count: 3, max: 2 }));
        assert!(review
            .violations
            .contains(&SquadViolation::OverBudget { total: 12, max: 8 }));
    }

    #[tokio::test]
    async fn test_budget_scenario_six_troopers_at_four_points() {
        // Rank cost table Trooper=4 against a 20 point budget
        let engine = RulesetEngine::new().unwrap();
        let limits = Limits {
            rank_point_costs: [4, 6, 8, 10, 12],
            max_squad_size: 6,
            max_squad_rank_points: 20,
            ..Limits::default()
        };
        let squad = members(6);
        let review = SquadReview::compute(&engine, &squad, &limits, 0)
            .await
            .unwrap();
        assert_eq!(review.total_rank_points, 24);
        assert!(!review.is_valid());
        // Over budget, but the size limit itself is respected
        assert_eq!(
            review.violations,
            vec![SquadViolation::OverBudget { total: 24, max: 20 }]
        );
        assert_eq!(review.composition.count(Rank::Trooper), 6);
    }
}
