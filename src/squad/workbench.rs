//! Squad-in-progress editing
//!
//! The workbench owns the squad being edited plus a revision counter.
//! Every membership mutation bumps the revision; reviews carry the
//! revision they were computed against, and applying a review from a
//! superseded revision is a no-op. Last write wins by request identity,
//! not by completion order.

use crate::core::config::Limits;
use crate::core::error::{BarracksError, Result};
use crate::core::types::MemberId;
use crate::engine::EvaluationEngine;
use crate::squad::validator::{RankTally, SquadReview};
use crate::squad::{Squad, SquadMember};
use crate::unit::Unit;

/// Editor state for one squad
#[derive(Debug, Clone)]
pub struct SquadWorkbench {
    squad: Squad,
    limits: Limits,
    revision: u64,
    review: Option<SquadReview>,
}

impl SquadWorkbench {
    /// Start a fresh squad
    pub fn new(limits: Limits) -> Self {
        Self {
            squad: Squad::new(""),
            limits,
            revision: 0,
            review: None,
        }
    }

    /// Edit an existing squad
    pub fn edit(squad: Squad, limits: Limits) -> Self {
        Self {
            squad,
            limits,
            revision: 0,
            review: None,
        }
    }

    pub fn squad(&self) -> &Squad {
        &self.squad
    }

    pub fn member_count(&self) -> usize {
        self.squad.members.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a snapshot of the unit, if the squad is not already full.
    ///
    /// The rank-point budget is deliberately not pre-checked here: an
    /// over-budget squad may exist while editing, it just cannot be
    /// submitted.
    pub fn add_unit(&mut self, unit: &Unit) -> Result<MemberId> {
        if self.squad.members.len() >= self.limits.max_squad_size {
            return Err(BarracksError::SquadFull {
                max: self.limits.max_squad_size,
            });
        }
        let member = SquadMember::snapshot(unit);
        let id = member.id;
        self.squad.members.push(member);
        self.revision += 1;
        Ok(id)
    }

    /// Remove a member by its squad-local id. Returns whether a member
    /// was removed.
    pub fn remove_member(&mut self, id: MemberId) -> bool {
        let before = self.squad.members.len();
        self.squad.members.retain(|m| m.id != id);
        let removed = self.squad.members.len() < before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Rename the squad. Does not touch membership, so pending reviews
    /// stay applicable.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.squad.name = name.into();
    }

    /// Compute a review of the current membership, tagged with the
    /// current revision
    pub async fn review<E>(&self, engine: &E) -> Result<SquadReview>
    where
        E: EvaluationEngine + ?Sized,
    {
        SquadReview::compute(engine, &self.squad.members, &self.limits, self.revision).await
    }

    /// Accept a completed review, unless the squad changed while it was
    /// in flight. Returns whether the review was applied.
    pub fn apply_review(&mut self, review: SquadReview) -> bool {
        if review.revision != self.revision {
            tracing::debug!(
                review_revision = review.revision,
                current_revision = self.revision,
                "discarding stale squad review"
            );
            return false;
        }
        self.review = Some(review);
        true
    }

    /// The applied review, if it still matches the current membership
    pub fn current_review(&self) -> Option<&SquadReview> {
        self.review
            .as_ref()
            .filter(|r| r.revision == self.revision)
    }

    /// Whether the squad may currently be submitted.
    ///
    /// False while no up-to-date review exists: a partially evaluated
    /// squad never counts as valid.
    pub fn is_valid(&self) -> bool {
        self.current_review().map_or(false, SquadReview::is_valid)
    }

    pub fn total_rank_points(&self) -> Option<u32> {
        self.current_review().map(|r| r.total_rank_points)
    }

    pub fn composition(&self) -> Option<&RankTally> {
        self.current_review().map(|r| &r.composition)
    }

    /// The submit gate: hand out the squad for persistence only when the
    /// current review holds and the name is filled in. An invalid squad
    /// is never silently persisted.
    pub fn submit(&self) -> Result<Squad> {
        if !self.squad.has_valid_name() {
            return Err(BarracksError::SquadRejected("squad name is empty".into()));
        }
        let review = self
            .current_review()
            .ok_or_else(|| BarracksError::SquadRejected("squad not yet reviewed".into()))?;
        if !review.is_valid() {
            return Err(BarracksError::SquadRejected(format!(
                "{} violation(s) outstanding",
                review.violations.len()
            )));
        }
        Ok(self.squad.clone())
    }
}
