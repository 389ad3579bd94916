use thiserror::Error;

use crate::{
    models::project::{NewProject, Project, ProjectId},
    storage::{ProjectRepository, StorageError},
};

#[derive(Debug, Error)]
pub enum AddProjectError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub fn add_project(
    repository: &impl ProjectRepository,
    project: NewProject,
) -> Result<Project, AddProjectError> {
    Ok(repository.insert_project(project)?)
}

pub fn fetch_all_projects(
    repository: &impl ProjectRepository,
) -> Result<Vec<Project>, StorageError> {
    repository.fetch_all_projects()
}

#[derive(Debug, Error)]
pub enum FetchProjectError {
    #[error("Project with project ID={0} does not exist.")]
    ProjectNotFound(ProjectId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub fn fetch_project_by_id(
    repository: &impl ProjectRepository,
    id: ProjectId,
) -> Result<Project, FetchProjectError> {
    repository
        .fetch_project_by_id(id)?
        .ok_or(FetchProjectError::ProjectNotFound(id))
}

#[derive(Debug, Error)]
pub enum ModifyProjectError {
    #[error("Project with ID={0} does not exist.")]
    ProjectNotFound(ProjectId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub fn modify_project_details(
    repository: &impl ProjectRepository,
    project: &Project,
) -> Result<(), ModifyProjectError> {
    if !repository.modify_project_details(project)? {
        return Err(ModifyProjectError::ProjectNotFound(project.id));
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum DeleteProjectError {
    #[error("Project with ID={0} does not exist.")]
    ProjectNotFound(ProjectId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub fn delete_project(
    repository: &impl ProjectRepository,
    id: ProjectId,
) -> Result<(), DeleteProjectError> {
    if !repository.delete_project(id)? {
        return Err(DeleteProjectError::ProjectNotFound(id));
    }

    Ok(())
}
