use crate::tools::log_message_and_return;
use csv::{ReaderBuilder, StringRecord, Terminator};
use derive_getters::Getters;
use std::io::Read;

pub const NAME_COLUMN: usize = 0;
pub const FIELD_COLUMN: usize = 3;
/// Field given to a line too short to have a field column.
pub const UNDEFINED_FIELD: &str = "undefined";

/// One non-empty line of the students database, reduced to the two columns we use.
#[derive(Debug, Getters, Eq, PartialEq, Clone)]
pub struct StudentRecord {
    name: String,
    field: String,
}

impl StudentRecord {
    pub fn new(name: String, field: String) -> Self {
        Self { name, field }
    }

    fn from_csv_record(position: usize, record: &StringRecord) -> Self {
        let name = record.get(NAME_COLUMN).unwrap_or_default().to_owned();
        let field = match record.get(FIELD_COLUMN) {
            Some(field) => field.to_owned(),
            None => {
                warn!(
                    "Record #{position} has only {} column(s), filing `{name}` under `{UNDEFINED_FIELD}`.",
                    record.len()
                );
                UNDEFINED_FIELD.to_owned()
            }
        };

        Self::new(name, field)
    }
}

/// Read every non-empty line of `content` as a [StudentRecord], header included.
///
/// Lines are split on `\n` and columns on `,`, without any quoting:
/// a `"` is a regular character and a `\r` left by CRLF files stays in the last column.
/// A leading byte-order mark is data too: a line holding only one still counts.
pub fn read_records(content: &str) -> Vec<StudentRecord> {
    // The reader strips a BOM found at the very start of its input, but never after a line break.
    let input = b"\n".as_slice().chain(content.as_bytes());
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(input);

    reader
        .records()
        .filter_map(|record| {
            record
                .map_err(log_message_and_return("Error while reading student line", ()))
                .ok()
        })
        .enumerate()
        .map(|(index, record)| StudentRecord::from_csv_record(index + 1, &record))
        .collect()
}

#[cfg(test)]
mod tests {
    mod read_records {
        use crate::roster::record::{StudentRecord, UNDEFINED_FIELD, read_records};

        fn record(name: &str, field: &str) -> StudentRecord {
            StudentRecord::new(name.to_owned(), field.to_owned())
        }

        #[test]
        fn success() {
            let content = "firstname,lastname,age,field\nJohann,Schoultz,23,CS\n";

            let result = read_records(content);

            assert_eq!(
                vec![record("firstname", "field"), record("Johann", "CS")],
                result
            );
        }

        #[test]
        fn skip_empty_lines() {
            let content = "\nfirstname,lastname,age,field\n\n\nBob,Dylan,20,CS\n\n";

            let result = read_records(content);

            assert_eq!(
                vec![record("firstname", "field"), record("Bob", "CS")],
                result
            );
        }

        #[test]
        fn read_last_line_without_newline() {
            let content = "firstname,lastname,age,field\nBob,Dylan,20,CS";

            let result = read_records(content);

            assert_eq!(2, result.len());
            assert_eq!(&record("Bob", "CS"), &result[1]);
        }

        #[test]
        fn fallback_to_undefined_field_when_short_line() {
            let content = "Bob,Dylan";

            let result = read_records(content);

            assert_eq!(vec![record("Bob", UNDEFINED_FIELD)], result);
        }

        #[test]
        fn keep_extra_columns_out() {
            let content = "Bob,Dylan,20,CS,extra,columns";

            let result = read_records(content);

            assert_eq!(vec![record("Bob", "CS")], result);
        }

        #[test]
        fn keep_quotes_and_whitespaces_verbatim() {
            let content = "\"Bob\",Dylan,20, CS \nAnna,Smith,21,CS\r\n";

            let result = read_records(content);

            assert_eq!(
                vec![record("\"Bob\"", " CS "), record("Anna", "CS\r")],
                result
            );
        }

        #[test]
        fn keep_leading_byte_order_mark() {
            let content = "\u{FEFF}firstname,lastname,age,field\nBob,Dylan,20,CS\n";

            let result = read_records(content);

            assert_eq!(
                vec![record("\u{FEFF}firstname", "field"), record("Bob", "CS")],
                result
            );
        }

        #[test]
        fn count_line_holding_only_byte_order_mark() {
            let result = read_records("\u{FEFF}\nBob,Dylan,20,CS\n");

            assert_eq!(
                vec![record("\u{FEFF}", UNDEFINED_FIELD), record("Bob", "CS")],
                result
            );
        }

        #[test]
        fn read_nothing_from_empty_content() {
            assert!(read_records("").is_empty());
        }
    }
}
