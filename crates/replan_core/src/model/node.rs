//! Plan node domain model.
//!
//! # Responsibility
//! - Define the canonical record for flow-graph plan nodes.
//! - Validate node shape where nodes enter core from the UI layer.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another node.
//! - `order`, when set, is a positive sequence position (>= 1).
//! - Only session nodes may carry `order` and `date`; other kinds are
//!   opaque to the scheduling engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every plan node.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NodeId = Uuid;

/// Discriminating tag for plan node kinds.
///
/// The scheduling engine only processes `Session` nodes; every other kind
/// flows through core untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A schedulable therapy/training session.
    Session,
    /// An exercise attached to the plan graph; never scheduled directly.
    Exercise,
}

/// Validation failures for node shape at the core boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValidationError {
    /// `order` must be >= 1 when present.
    NonPositiveOrder,
    /// Only session nodes may carry a sequence position.
    OrderOnNonSession,
    /// Only session nodes may carry an assigned date.
    DateOnNonSession,
}

impl Display for NodeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveOrder => write!(f, "node order must be a positive integer"),
            Self::OrderOnNonSession => write!(f, "only session nodes may carry an order"),
            Self::DateOnNonSession => write!(f, "only session nodes may carry a date"),
        }
    }
}

impl Error for NodeValidationError {}

/// Canonical record for one node of an intervention plan graph.
///
/// Scheduling fields are optional by design: users assemble plans
/// incrementally, so nodes routinely exist without an order or a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanNode {
    /// Stable global ID used for linking and update-by-id persistence.
    pub uuid: NodeId,
    /// Serialized as `type` to match external flow-graph naming.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Sequence position among session nodes. `None` = unordered, which
    /// excludes the node from the scheduling engine entirely.
    pub order: Option<u32>,
    /// Assigned calendar date, if any.
    pub date: Option<NaiveDate>,
    /// Display label; `display_name` falls back to `Session {order}`.
    pub name: Option<String>,
}

impl PlanNode {
    /// Creates a session node with a generated stable ID.
    pub fn session(order: Option<u32>, date: Option<NaiveDate>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: NodeKind::Session,
            order,
            date,
            name: None,
        }
    }

    /// Creates an exercise node with a generated stable ID.
    pub fn exercise(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: NodeKind::Exercise,
            order: None,
            date: None,
            name: Some(name.into()),
        }
    }

    /// Creates a node with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(uuid: NodeId, kind: NodeKind) -> Self {
        Self {
            uuid,
            kind,
            order: None,
            date: None,
            name: None,
        }
    }

    /// Returns whether the scheduling engine should consider this node.
    pub fn is_schedulable(&self) -> bool {
        self.kind == NodeKind::Session && self.order.is_some()
    }

    /// Returns the display label, falling back to `Session {order}`.
    pub fn display_name(&self) -> String {
        match (&self.name, self.order) {
            (Some(name), _) => name.clone(),
            (None, Some(order)) => format!("Session {order}"),
            (None, None) => "Session".to_string(),
        }
    }

    /// Checks the boundary contract for node shape.
    ///
    /// # Invariants
    /// - `order`, when set, is >= 1.
    /// - Non-session nodes carry neither `order` nor `date`.
    pub fn validate(&self) -> Result<(), NodeValidationError> {
        if self.order == Some(0) {
            return Err(NodeValidationError::NonPositiveOrder);
        }
        if self.kind != NodeKind::Session {
            if self.order.is_some() {
                return Err(NodeValidationError::OrderOnNonSession);
            }
            if self.date.is_some() {
                return Err(NodeValidationError::DateOnNonSession);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeKind, NodeValidationError, PlanNode};
    use chrono::NaiveDate;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("test date should parse")
    }

    #[test]
    fn session_node_with_order_is_schedulable() {
        let node = PlanNode::session(Some(1), None);
        assert!(node.is_schedulable());
    }

    #[test]
    fn unordered_session_node_is_not_schedulable() {
        let node = PlanNode::session(None, Some(date("2024-03-01")));
        assert!(!node.is_schedulable());
    }

    #[test]
    fn display_name_falls_back_to_order() {
        let mut node = PlanNode::session(Some(3), None);
        assert_eq!(node.display_name(), "Session 3");

        node.name = Some("Gait training".to_string());
        assert_eq!(node.display_name(), "Gait training");
    }

    #[test]
    fn validate_rejects_zero_order() {
        let node = PlanNode::session(Some(0), None);
        assert_eq!(
            node.validate(),
            Err(NodeValidationError::NonPositiveOrder)
        );
    }

    #[test]
    fn validate_rejects_scheduling_fields_on_exercise() {
        let mut node = PlanNode::exercise("squats");
        node.order = Some(1);
        assert_eq!(node.validate(), Err(NodeValidationError::OrderOnNonSession));

        node.order = None;
        node.date = Some(date("2024-03-01"));
        assert_eq!(node.validate(), Err(NodeValidationError::DateOnNonSession));
    }

    #[test]
    fn kind_serializes_as_type_tag() {
        let node = PlanNode::session(Some(1), None);
        let json = serde_json::to_value(&node).expect("node should serialize");
        assert_eq!(json["type"], "session");
    }
}
