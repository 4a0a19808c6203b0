use crate::roster::{FieldRoster, Roster};
use derive_getters::Getters;
use std::fmt::{Display, Formatter};

/// A field of study as it appears in the report.
#[derive(Debug, Getters, Eq, PartialEq, Clone)]
pub struct ReportedField {
    field: String,
    count: usize,
    students: Vec<String>,
}

impl From<FieldRoster> for ReportedField {
    fn from(field_roster: FieldRoster) -> Self {
        Self {
            count: field_roster.count(),
            field: field_roster.field,
            students: field_roster.students,
        }
    }
}

/// Result of counting students.
///
/// `total_students` is the number of non-empty lines minus the header,
/// so an entirely empty database yields `-1`.
#[derive(Debug, Getters, Eq, PartialEq, Clone)]
pub struct Summary {
    total_students: i64,
    fields: Vec<ReportedField>,
}

impl Summary {
    pub fn new(line_count: usize, roster: Roster, header_field: Option<&str>) -> Self {
        let fields = roster
            .into_iter()
            .filter(|field_roster| Some(field_roster.field().as_str()) != header_field)
            .map(ReportedField::from)
            .collect();

        Self {
            total_students: line_count as i64 - 1,
            fields,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of students: {}", self.total_students)?;
        for field in &self.fields {
            writeln!(
                f,
                "Number of students in {}: {}. List: {}",
                field.field,
                field.count,
                field.students.join(", ")
            )?;
        }

        Ok(())
    }
}
