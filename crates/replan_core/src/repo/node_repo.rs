//! Plan node repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `plan_nodes` storage.
//! - Expose the update-by-id date application the scheduling engine's
//!   output is persisted through.
//!
//! # Invariants
//! - Write paths must call `PlanNode::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `list_nodes` ordering is deterministic: ordered nodes first by
//!   `seq_order ASC`, then unordered, ties broken by `uuid ASC`.

use crate::db::DbError;
use crate::model::node::{NodeId, NodeKind, NodeValidationError, PlanNode};
use crate::schedule::dates::{format_date_for_picker, standardize_date};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const NODE_SELECT_SQL: &str = "SELECT
    uuid,
    kind,
    seq_order,
    date,
    name
FROM plan_nodes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for plan node persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(NodeValidationError),
    Db(DbError),
    NotFound(NodeId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "plan node not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted node data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<NodeValidationError> for RepoError {
    fn from(value: NodeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for plan node CRUD and date application.
pub trait NodeRepository {
    fn create_node(&self, node: &PlanNode) -> RepoResult<NodeId>;
    fn get_node(&self, id: NodeId) -> RepoResult<Option<PlanNode>>;
    fn list_nodes(&self) -> RepoResult<Vec<PlanNode>>;
    fn update_node(&self, node: &PlanNode) -> RepoResult<()>;
    /// Update-by-id date application: the persistence half of applying an
    /// engine-produced assignment.
    fn set_node_date(&self, id: NodeId, date: Option<NaiveDate>) -> RepoResult<()>;
}

/// SQLite-backed plan node repository.
pub struct SqliteNodeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNodeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NodeRepository for SqliteNodeRepository<'_> {
    fn create_node(&self, node: &PlanNode) -> RepoResult<NodeId> {
        node.validate()?;

        self.conn.execute(
            "INSERT INTO plan_nodes (uuid, kind, seq_order, date, name)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                node.uuid.to_string(),
                node_kind_to_db(node.kind),
                node.order,
                node.date.map(|date| format_date_for_picker(Some(date))),
                node.name.as_deref(),
            ],
        )?;

        Ok(node.uuid)
    }

    fn get_node(&self, id: NodeId) -> RepoResult<Option<PlanNode>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NODE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_node_row(row)?));
        }

        Ok(None)
    }

    fn list_nodes(&self) -> RepoResult<Vec<PlanNode>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NODE_SELECT_SQL}
             ORDER BY seq_order IS NULL, seq_order ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut nodes = Vec::new();
        while let Some(row) = rows.next()? {
            nodes.push(parse_node_row(row)?);
        }

        Ok(nodes)
    }

    fn update_node(&self, node: &PlanNode) -> RepoResult<()> {
        node.validate()?;

        let changed = self.conn.execute(
            "UPDATE plan_nodes
             SET
                kind = ?1,
                seq_order = ?2,
                date = ?3,
                name = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?5;",
            params![
                node_kind_to_db(node.kind),
                node.order,
                node.date.map(|date| format_date_for_picker(Some(date))),
                node.name.as_deref(),
                node.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(node.uuid));
        }

        Ok(())
    }

    fn set_node_date(&self, id: NodeId, date: Option<NaiveDate>) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE plan_nodes
             SET
                date = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?2;",
            params![
                date.map(|date| format_date_for_picker(Some(date))),
                id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_node_row(row: &Row<'_>) -> RepoResult<PlanNode> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in plan_nodes.uuid"))
    })?;

    let kind_text: String = row.get("kind")?;
    let kind = parse_node_kind(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid node kind `{kind_text}` in plan_nodes.kind"))
    })?;

    let order = match row.get::<_, Option<i64>>("seq_order")? {
        Some(value) => Some(u32::try_from(value).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid order value `{value}` in plan_nodes.seq_order"
            ))
        })?),
        None => None,
    };

    let date = match row.get::<_, Option<String>>("date")? {
        Some(text) => Some(standardize_date(&text).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid date value `{text}` in plan_nodes.date"))
        })?),
        None => None,
    };

    let node = PlanNode {
        uuid,
        kind,
        order,
        date,
        name: row.get("name")?,
    };
    node.validate()?;
    Ok(node)
}

fn node_kind_to_db(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Session => "session",
        NodeKind::Exercise => "exercise",
    }
}

fn parse_node_kind(value: &str) -> Option<NodeKind> {
    match value {
        "session" => Some(NodeKind::Session),
        "exercise" => Some(NodeKind::Exercise),
        _ => None,
    }
}
