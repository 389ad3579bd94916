use std::fmt;

use rust_decimal::Decimal;

pub type ProjectId = i64;

/// A project that has not been stored yet
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Project {
    /// Assigned by the database on insert, never changes afterwards
    pub id: ProjectId,
    /// Name of the project
    pub name: String,
    /// Estimated hours, two decimal places
    pub estimated_hours: Option<Decimal>,
    /// Actual hours, two decimal places
    pub actual_hours: Option<Decimal>,
    /// Difficulty, meant to be 1-5 but stored as given
    pub difficulty: Option<i32>,
    /// Free text notes
    pub notes: Option<String>,
}

impl Project {
    pub fn from_new(id: ProjectId, project: NewProject) -> Self {
        Self {
            id,
            name: project.name,
            estimated_hours: project.estimated_hours,
            actual_hours: project.actual_hours,
            difficulty: project.difficulty,
            notes: project.notes,
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID={}, name={}, estimated hours={}, actual hours={}, difficulty={}, notes={}",
            self.id,
            self.name,
            display_or_none(&self.estimated_hours),
            display_or_none(&self.actual_hours),
            display_or_none(&self.difficulty),
            display_or_none(&self.notes),
        )
    }
}

pub fn display_or_none<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("none"),
    }
}

/// Values typed in by the user while updating a project.
///
/// `None` means the field was left blank and keeps the value it had before.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl ProjectChanges {
    /// Builds the full replacement row for `current`, keeping its id and
    /// falling back to its values for every blank field.
    pub fn merge_into(self, current: &Project) -> Project {
        Project {
            id: current.id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            estimated_hours: self.estimated_hours.or(current.estimated_hours),
            actual_hours: self.actual_hours.or(current.actual_hours),
            difficulty: self.difficulty.or(current.difficulty),
            notes: self.notes.or_else(|| current.notes.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn build_deck() -> Project {
        Project {
            id: 1,
            name: String::from("Build deck"),
            estimated_hours: Some(Decimal::from_str("10.50").unwrap()),
            actual_hours: None,
            difficulty: Some(3),
            notes: None,
        }
    }

    #[test]
    fn test_display_marks_absent_fields() {
        assert_eq!(
            build_deck().to_string(),
            "ID=1, name=Build deck, estimated hours=10.50, actual hours=none, difficulty=3, notes=none"
        );
    }

    #[test]
    fn test_blank_changes_keep_everything() {
        let current = build_deck();

        let merged = ProjectChanges::default().merge_into(&current);

        assert_eq!(merged, current);
    }

    #[test]
    fn test_changes_only_touch_supplied_fields() {
        let current = build_deck();
        let changes = ProjectChanges {
            actual_hours: Some(Decimal::from_str("8.00").unwrap()),
            notes: Some(String::from("Needs stain")),
            ..ProjectChanges::default()
        };

        let merged = changes.merge_into(&current);

        assert_eq!(merged.id, 1);
        assert_eq!(merged.name, "Build deck");
        assert_eq!(merged.estimated_hours, current.estimated_hours);
        assert_eq!(merged.actual_hours, Some(Decimal::from_str("8.00").unwrap()));
        assert_eq!(merged.difficulty, Some(3));
        assert_eq!(merged.notes.as_deref(), Some("Needs stain"));
    }

    #[test]
    fn test_from_new_carries_every_field() {
        let new_project = NewProject {
            name: String::from("Paint fence"),
            estimated_hours: None,
            actual_hours: Some(Decimal::from_str("2.25").unwrap()),
            difficulty: Some(9),
            notes: Some(String::from("White")),
        };

        let project = Project::from_new(4, new_project.clone());

        assert_eq!(project.id, 4);
        assert_eq!(project.name, new_project.name);
        assert_eq!(project.actual_hours, new_project.actual_hours);
        assert_eq!(project.difficulty, Some(9));
        assert_eq!(project.notes, new_project.notes);
    }
}
