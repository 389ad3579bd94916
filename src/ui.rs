use std::{
    fmt,
    io::{self, Write},
};

use colored::*;

use crate::models::project::{Project, ProjectId, display_or_none};

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

/// Render the menu banner followed by the current selection line
pub fn render_operations(out: &mut impl Write, current: Option<&Project>) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        "These are the available selections. Press the Enter key to quit:".cyan()
    )?;
    for operation in OPERATIONS {
        writeln!(out, " {}", operation)?;
    }

    match current {
        None => writeln!(out, "\nYou are not working with a project."),
        Some(project) => writeln!(out, "\nYou are working with project: {}", project),
    }
}

/// Print a prompt and leave the cursor on the same line
pub fn render_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{}: ", prompt)?;
    out.flush()
}

/// Prompt text with the value being replaced shown as a default, e.g. "Enter the actual hours [8.00]"
pub fn prompt_with_current<T: fmt::Display>(prompt: &str, current: &Option<T>) -> String {
    format!("{} [{}]", prompt, display_or_none(current))
}

pub fn render_project_list(out: &mut impl Write, projects: &[Project]) -> io::Result<()> {
    writeln!(out, "\n{}", "Projects:".cyan())?;
    for project in projects {
        writeln!(out, "  {}: {}", project.id, project.name)?;
    }
    Ok(())
}

pub fn render_created(out: &mut impl Write, project: &Project) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        "You have successfully created project:".green(),
        project
    )
}

pub fn render_updated(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "Project details updated.".green())
}

pub fn render_deleted(out: &mut impl Write, id: ProjectId) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("Project {} was deleted successfully!", id).green()
    )
}

pub fn render_invalid_project_id(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nInvalid project ID selected")
}

pub fn render_select_first(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nPlease select a project")
}

pub fn render_invalid_selection(out: &mut impl Write, selection: i32) -> io::Result<()> {
    writeln!(out, "\n{} is not a valid selection. Try again.", selection)
}

pub fn render_error(out: &mut impl Write, error: &impl fmt::Display) -> io::Result<()> {
    writeln!(out, "\n{}", format!("Error: {} Try again.", error).red())
}

pub fn render_exit(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Exiting the menu.")
}
