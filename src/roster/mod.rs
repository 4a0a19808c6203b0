use crate::roster::record::read_records;
use crate::roster::summary::Summary;
use derive_getters::Getters;
use std::collections::HashMap;
use std::ops::Deref;

pub mod record;
pub mod summary;

/// Students enrolled in one field of study, in reading order.
#[derive(Debug, Getters, Eq, PartialEq, Clone)]
pub struct FieldRoster {
    field: String,
    students: Vec<String>,
}

impl FieldRoster {
    fn new(field: String) -> Self {
        Self {
            field,
            students: vec![],
        }
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }
}

/// A list of [FieldRoster]s, one per distinct field, in first-seen order.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Roster {
    fields: Vec<FieldRoster>,
    positions: HashMap<String, usize>,
}

impl Deref for Roster {
    type Target = [FieldRoster];

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl IntoIterator for Roster {
    type Item = FieldRoster;
    type IntoIter = std::vec::IntoIter<FieldRoster>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Roster {
    /// Append `student` to `field`, creating the field if unknown.
    /// Fields are compared verbatim: `CS`, `cs` and `CS ` are three different fields.
    pub fn enroll(&mut self, field: &str, student: &str) {
        let position = match self.positions.get(field) {
            Some(position) => *position,
            None => {
                let position = self.fields.len();
                self.fields.push(FieldRoster::new(field.to_owned()));
                self.positions.insert(field.to_owned(), position);
                position
            }
        };

        self.fields[position].students.push(student.to_owned());
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&FieldRoster> {
        self.positions
            .get(field)
            .and_then(|position| self.fields.get(*position))
    }

    /// Number of students per field, in first-seen order.
    pub fn field_counts(&self) -> Vec<(&str, usize)> {
        self.fields
            .iter()
            .map(|field_roster| (field_roster.field.as_str(), field_roster.count()))
            .collect()
    }
}

/// Tally the students of a CSV-formatted database by field of study.
///
/// The first non-empty line is the header: it is counted as a line but not as a student,
/// and its own field column is left out of the summary.
/// The left-out field is whatever the header holds in its field column (`field` in usual databases),
/// not a fixed label: with a `major` header, a `field` data row is reported.
pub fn summarize(content: &str) -> Summary {
    let records = read_records(content);
    let header_field = records.first().map(|header| header.field().clone());

    let mut roster = Roster::default();
    for record in &records {
        roster.enroll(record.field(), record.name());
    }
    debug!(
        "Read {} line(s), students per field: {:?}",
        records.len(),
        roster.field_counts()
    );

    Summary::new(records.len(), roster, header_field.as_deref())
}
