use std::{path::Path, str::FromStr};

use rusqlite::{
    Connection, OptionalExtension, Row, ToSql, params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef},
};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    models::project::{NewProject, Project, ProjectId},
    storage::{ProjectRepository, StorageError},
};

const SCHEMA_PROJECT: &str = "CREATE TABLE IF NOT EXISTS project (
    project_id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_name TEXT NOT NULL CHECK (length(trim(project_name)) > 0),
    estimated_hours TEXT,
    actual_hours TEXT,
    difficulty INTEGER,
    notes TEXT
);";
const INSERT_PROJECT: &str = "INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
    VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PROJECTS: &str = "SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
    FROM project ORDER BY project_id";
const SELECT_PROJECT_BY_ID: &str = "SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
    FROM project WHERE project_id = ?1";
const UPDATE_PROJECT: &str = "UPDATE project
    SET project_name = ?1, estimated_hours = ?2, actual_hours = ?3, difficulty = ?4, notes = ?5
    WHERE project_id = ?6";
const DELETE_PROJECT: &str = "DELETE FROM project WHERE project_id = ?1";

/// Hours column value, kept as decimal text so the scale survives a round trip
struct Hours(Decimal);

impl ToSql for Hours {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(Value::Text(self.0.to_string())))
    }
}

impl FromSql for Hours {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                Decimal::from_str(text.trim())
                    .map(Hours)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            ValueRef::Integer(whole) => Ok(Hours(Decimal::from(whole))),
            ValueRef::Real(real) => Decimal::try_from(real)
                .map(Hours)
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

pub struct SqliteProjectRepository {
    conn: Connection,
}

impl SqliteProjectRepository {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), "opened project database");
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::OpenFailed {
            path: std::path::PathBuf::from(":memory:"),
            source: e,
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA_PROJECT)
            .map_err(|e| StorageError::SchemaFailed { source: e })?;
        Ok(Self { conn })
    }
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get("project_id")?,
        name: row.get("project_name")?,
        estimated_hours: row.get::<_, Option<Hours>>("estimated_hours")?.map(|h| h.0),
        actual_hours: row.get::<_, Option<Hours>>("actual_hours")?.map(|h| h.0),
        difficulty: row.get("difficulty")?,
        notes: row.get("notes")?,
    })
}

impl ProjectRepository for SqliteProjectRepository {
    fn insert_project(&self, project: NewProject) -> Result<Project, StorageError> {
        debug!(name = %project.name, "inserting project");
        self.conn
            .execute(
                INSERT_PROJECT,
                params![
                    project.name,
                    project.estimated_hours.map(Hours),
                    project.actual_hours.map(Hours),
                    project.difficulty,
                    project.notes
                ],
            )
            .map_err(|e| StorageError::InsertFailed {
                name: project.name.clone(),
                source: e,
            })?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted project");

        Ok(Project::from_new(id, project))
    }

    fn fetch_all_projects(&self) -> Result<Vec<Project>, StorageError> {
        debug!("fetching all projects");
        let mut stmt = self
            .conn
            .prepare(SELECT_PROJECTS)
            .map_err(|e| StorageError::FetchFailed { source: e })?;
        let project_iter = stmt
            .query_map([], project_from_row)
            .map_err(|e| StorageError::FetchFailed { source: e })?;

        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project.map_err(|e| StorageError::FetchFailed { source: e })?);
        }

        Ok(projects)
    }

    fn fetch_project_by_id(&self, id: ProjectId) -> Result<Option<Project>, StorageError> {
        debug!(id, "fetching project");
        self.conn
            .query_row(SELECT_PROJECT_BY_ID, params![id], project_from_row)
            .optional()
            .map_err(|e| StorageError::FetchFailed { source: e })
    }

    fn modify_project_details(&self, project: &Project) -> Result<bool, StorageError> {
        debug!(id = project.id, "updating project");
        let affected = self
            .conn
            .execute(
                UPDATE_PROJECT,
                params![
                    project.name,
                    project.estimated_hours.map(Hours),
                    project.actual_hours.map(Hours),
                    project.difficulty,
                    project.notes,
                    project.id
                ],
            )
            .map_err(|e| StorageError::UpdateFailed {
                id: project.id,
                source: e,
            })?;

        Ok(affected == 1)
    }

    fn delete_project(&self, id: ProjectId) -> Result<bool, StorageError> {
        debug!(id, "deleting project");
        let affected = self
            .conn
            .execute(DELETE_PROJECT, params![id])
            .map_err(|e| StorageError::DeleteFailed { id, source: e })?;

        Ok(affected == 1)
    }
}
