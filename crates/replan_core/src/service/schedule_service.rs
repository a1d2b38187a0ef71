//! Scheduling use-case service.
//!
//! # Responsibility
//! - Load node snapshots, run the date assignment engine, and apply the
//!   results through the repository.
//! - Provide stable CRUD entry points for core callers.
//!
//! # Invariants
//! - Previews never persist anything; applying is a separate explicit
//!   call the caller decides on, including for conflicting rows.
//! - Service APIs never bypass repository validation contracts.

use crate::model::node::{NodeId, PlanNode};
use crate::repo::node_repo::{NodeRepository, RepoError, RepoResult};
use crate::schedule::bulk::{generate_bulk_assignment, BulkAssignment, BulkParams};
use crate::schedule::select::unavailable_dates_except;
use crate::schedule::suggest::{calculate_suggested_date, SuggestParams};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Use-case service wrapper around a node repository and the engine.
pub struct ScheduleService<R: NodeRepository> {
    repo: R,
}

impl<R: NodeRepository> ScheduleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the full node snapshot the engine operates on.
    pub fn snapshot(&self) -> RepoResult<Vec<PlanNode>> {
        self.repo.list_nodes()
    }

    /// Previews a bulk assignment for the selected node ids.
    ///
    /// Validation results are carried per row against the stored
    /// snapshot; nothing is persisted.
    pub fn preview_bulk(
        &self,
        selected: &[NodeId],
        params: &BulkParams,
    ) -> RepoResult<Vec<BulkAssignment>> {
        let all_nodes = self.repo.list_nodes()?;
        let selected_nodes: Vec<PlanNode> = all_nodes
            .iter()
            .filter(|node| selected.contains(&node.uuid))
            .cloned()
            .collect();

        Ok(generate_bulk_assignment(&selected_nodes, &all_nodes, params))
    }

    /// Persists engine-produced assignments via update-by-id.
    ///
    /// Conflicting rows are applied like any other: the engine only flags
    /// conflicts, it never blocks them.
    pub fn apply_assignments(&self, assignments: &[(NodeId, NaiveDate)]) -> RepoResult<()> {
        for (id, date) in assignments {
            self.repo.set_node_date(*id, Some(*date))?;
        }
        Ok(())
    }

    /// Suggests a date for one stored node relative to today.
    pub fn suggest_date(
        &self,
        id: NodeId,
        params: &SuggestParams,
    ) -> RepoResult<Option<NaiveDate>> {
        let node = self.repo.get_node(id)?.ok_or(RepoError::NotFound(id))?;
        let all_nodes = self.repo.list_nodes()?;
        Ok(calculate_suggested_date(&node, &all_nodes, params))
    }

    /// Returns the calendar days the UI should disable for a node.
    pub fn unavailable_dates(&self, exclude: Option<&NodeId>) -> RepoResult<BTreeSet<String>> {
        let all_nodes = self.repo.list_nodes()?;
        Ok(unavailable_dates_except(&all_nodes, exclude))
    }

    /// Creates a node through repository persistence.
    pub fn create_node(&self, node: &PlanNode) -> RepoResult<NodeId> {
        self.repo.create_node(node)
    }

    /// Gets one node by stable ID.
    pub fn get_node(&self, id: NodeId) -> RepoResult<Option<PlanNode>> {
        self.repo.get_node(id)
    }

    /// Updates an existing node by stable ID.
    pub fn update_node(&self, node: &PlanNode) -> RepoResult<()> {
        self.repo.update_node(node)
    }
}
