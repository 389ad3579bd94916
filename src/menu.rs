use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::project::{NewProject, Project, ProjectChanges, ProjectId},
    services::projects::{
        self, AddProjectError, DeleteProjectError, FetchProjectError, ModifyProjectError,
    },
    storage::{ProjectRepository, StorageError},
    ui,
};

use self::input::InputError;

pub mod input;

/// Selection value meaning "leave the menu"; a blank line maps to it
const EXIT_SELECTION: i32 = -1;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Add(#[from] AddProjectError),

    #[error(transparent)]
    Fetch(#[from] FetchProjectError),

    #[error(transparent)]
    Modify(#[from] ModifyProjectError),

    #[error(transparent)]
    Delete(#[from] DeleteProjectError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Typed input could not be converted
    Parse,
    /// The requested project id has no row
    NotFound,
    /// Update/delete matched no row, or the database itself failed
    Database,
    /// Reading stdin or writing stdout failed; the menu cannot go on
    Terminal,
}

impl MenuError {
    pub fn kind(&self) -> FaultKind {
        match self {
            MenuError::Input(_) => FaultKind::Parse,
            MenuError::Fetch(FetchProjectError::ProjectNotFound(_)) => FaultKind::NotFound,
            MenuError::Terminal(_) => FaultKind::Terminal,
            MenuError::Add(_)
            | MenuError::Fetch(FetchProjectError::Storage(_))
            | MenuError::Modify(_)
            | MenuError::Delete(_)
            | MenuError::Storage(_) => FaultKind::Database,
        }
    }
}

/// State carried from one menu iteration to the next
#[derive(Debug, Default)]
pub struct Session {
    pub current_project: Option<Project>,
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, I, O> {
    repository: R,
    input: I,
    output: O,
}

impl<R: ProjectRepository, I: BufRead, O: Write> Menu<R, I, O> {
    pub fn new(repository: R, input: I, output: O) -> Self {
        Self {
            repository,
            input,
            output,
        }
    }

    /// Runs until the user exits, returning the session as it was left.
    ///
    /// Every fault from one selection is reported on a single line and the
    /// loop carries on; only terminal I/O failures end it early.
    pub fn run(&mut self) -> Result<Session, MenuError> {
        let mut session = Session::default();

        loop {
            match self.process_user_selection(&mut session) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(session),
                Err(error) => match error.kind() {
                    FaultKind::Terminal => return Err(error),
                    kind => {
                        warn!(?kind, %error, "menu selection failed");
                        ui::render_error(&mut self.output, &error)?;
                    }
                },
            }
        }
    }

    fn process_user_selection(&mut self, session: &mut Session) -> Result<Flow, MenuError> {
        ui::render_operations(&mut self.output, session.current_project.as_ref())?;
        let selection = self
            .get_int_input::<i32>("Enter a menu selection")?
            .unwrap_or(EXIT_SELECTION);

        match selection {
            EXIT_SELECTION => {
                ui::render_exit(&mut self.output)?;
                return Ok(Flow::Exit);
            }
            1 => self.create_project()?,
            2 => self.list_projects()?,
            3 => self.select_project(session)?,
            4 => self.update_project_details(session)?,
            5 => self.delete_project(session)?,
            other => ui::render_invalid_selection(&mut self.output, other)?,
        }

        Ok(Flow::Continue)
    }

    fn create_project(&mut self) -> Result<(), MenuError> {
        let name = self.get_string_input("Enter the project name")?;
        let estimated_hours = self.get_decimal_input("Enter the estimated hours")?;
        let actual_hours = self.get_decimal_input("Enter the actual hours")?;
        let difficulty = self.get_int_input("Enter the project difficulty (1-5)")?;
        let notes = self.get_string_input("Enter the project notes")?;

        let project = NewProject {
            name: name.unwrap_or_default(),
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };

        let created = projects::add_project(&self.repository, project)?;
        info!(id = created.id, "created project");
        ui::render_created(&mut self.output, &created)?;

        Ok(())
    }

    fn list_projects(&mut self) -> Result<(), MenuError> {
        let projects = projects::fetch_all_projects(&self.repository)?;
        ui::render_project_list(&mut self.output, &projects)?;
        Ok(())
    }

    fn select_project(&mut self, session: &mut Session) -> Result<(), MenuError> {
        self.list_projects()?;

        let id = self.get_int_input::<ProjectId>("\nEnter a project ID to select a project")?;
        session.current_project = None;

        let Some(id) = id else {
            ui::render_invalid_project_id(&mut self.output)?;
            return Ok(());
        };

        match projects::fetch_project_by_id(&self.repository, id) {
            Ok(project) => {
                info!(id, "selected project");
                session.current_project = Some(project);
            }
            Err(FetchProjectError::ProjectNotFound(_)) => {
                ui::render_invalid_project_id(&mut self.output)?;
            }
            Err(error) => return Err(error.into()),
        }

        Ok(())
    }

    fn update_project_details(&mut self, session: &mut Session) -> Result<(), MenuError> {
        let Some(current) = session.current_project.as_ref() else {
            ui::render_select_first(&mut self.output)?;
            return Ok(());
        };

        let changes = self.get_project_changes(current)?;
        // Blank answers fall back to the in-memory selection, not the stored row.
        let project = changes.merge_into(current);

        projects::modify_project_details(&self.repository, &project)?;

        session.current_project = Some(projects::fetch_project_by_id(
            &self.repository,
            project.id,
        )?);
        info!(id = project.id, "updated project");
        ui::render_updated(&mut self.output)?;

        Ok(())
    }

    fn get_project_changes(&mut self, current: &Project) -> Result<ProjectChanges, MenuError> {
        let name = self.get_string_input(&ui::prompt_with_current(
            "Enter the project name",
            &Some(&current.name),
        ))?;
        let estimated_hours = self.get_decimal_input(&ui::prompt_with_current(
            "Enter the estimated hours",
            &current.estimated_hours,
        ))?;
        let actual_hours = self.get_decimal_input(&ui::prompt_with_current(
            "Enter the actual hours",
            &current.actual_hours,
        ))?;
        let difficulty = self.get_int_input(&ui::prompt_with_current(
            "Enter the project difficulty (1-5)",
            &current.difficulty,
        ))?;
        let notes = self.get_string_input(&ui::prompt_with_current(
            "Enter the project notes",
            &current.notes,
        ))?;

        Ok(ProjectChanges {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        })
    }

    fn delete_project(&mut self, session: &mut Session) -> Result<(), MenuError> {
        self.list_projects()?;

        let id = self
            .get_int_input::<ProjectId>("\nEnter a project ID of the project to delete")?
            .ok_or(InputError::MissingProjectId)?;

        projects::delete_project(&self.repository, id)?;
        info!(id, "deleted project");
        ui::render_deleted(&mut self.output, id)?;

        if session
            .current_project
            .as_ref()
            .is_some_and(|project| project.id == id)
        {
            session.current_project = None;
        }

        Ok(())
    }

    fn get_string_input(&mut self, prompt: &str) -> Result<Option<String>, MenuError> {
        ui::render_prompt(&mut self.output, prompt)?;
        Ok(input::read_line(&mut self.input)?)
    }

    fn get_int_input<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, MenuError> {
        let value = self.get_string_input(prompt)?;
        Ok(input::parse_integer(value)?)
    }

    fn get_decimal_input(&mut self, prompt: &str) -> Result<Option<Decimal>, MenuError> {
        let value = self.get_string_input(prompt)?;
        Ok(input::parse_hours(value)?)
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, O) {
        (self.repository, self.output)
    }
}
