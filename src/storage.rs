use std::path::PathBuf;

use thiserror::Error;

use crate::models::project::{NewProject, Project, ProjectId};

pub mod sqlite;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open database '{path}': {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to create the project table: {source}")]
    SchemaFailed {
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to insert project '{name}': {source}")]
    InsertFailed {
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to fetch projects: {source}")]
    FetchFailed {
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to update project {id}: {source}")]
    UpdateFailed {
        id: ProjectId,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to delete project {id}: {source}")]
    DeleteFailed {
        id: ProjectId,
        #[source]
        source: rusqlite::Error,
    },
}

/// Data access for the project table.
///
/// "Not found" is never an error here: lookups return `None` and mutations
/// return `false` when no row matched the id.
pub trait ProjectRepository {
    fn insert_project(&self, project: NewProject) -> Result<Project, StorageError>;
    fn fetch_all_projects(&self) -> Result<Vec<Project>, StorageError>;
    fn fetch_project_by_id(&self, id: ProjectId) -> Result<Option<Project>, StorageError>;
    fn modify_project_details(&self, project: &Project) -> Result<bool, StorageError>;
    fn delete_project(&self, id: ProjectId) -> Result<bool, StorageError>;
}
