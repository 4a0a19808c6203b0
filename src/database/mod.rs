use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::CantLoadDatabase;
use crate::roster::summarize;
use crate::roster::summary::Summary;
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::log_message_and_return;
use derive_getters::Getters;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod error;

pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

const DATABASE_FILE_ARG: [&str; 2] = ["-f", "--file"];
const DEFAULT_DATABASE_FILE: &str = "database.csv";

/// Retrieve the students database path from `-f=<path>` / `--file=<path>`,
/// defaulting to `database.csv`.
pub fn get_database_file() -> PathBuf {
    retrieve_arg_value(DATABASE_FILE_ARG.as_slice())
        .filter(|file| !file.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
}

/// A students database as read from disk.
#[derive(Debug, Getters, Eq, PartialEq)]
pub struct StudentsDatabase {
    /// Raw file content, as it was read.
    content: Vec<u8>,
    summary: Summary,
}

impl StudentsDatabase {
    pub fn new(content: Vec<u8>, summary: Summary) -> Self {
        Self { content, summary }
    }
}

/// Read the students database at `path`, then print how many students it holds per field.
///
/// Any read failure is logged and reported as [DatabaseError::CantLoadDatabase].
/// Malformed lines never fail: see [summarize].
pub async fn count_students<P: AsRef<Path>>(path: P) -> Result<StudentsDatabase> {
    report_students(path, &mut std::io::stdout()).await
}

/// Same as [count_students], with the report written to `output`.
/// A report that can't be written is logged, the database is still returned.
pub async fn report_students<P, W>(path: P, output: &mut W) -> Result<StudentsDatabase>
where
    P: AsRef<Path>,
    W: Write,
{
    let path = path.as_ref();
    let content = tokio::fs::read(path)
        .await
        .map_err(log_message_and_return(
            &format!("Can't read database file `{}`.", path.display()),
            CantLoadDatabase,
        ))?;

    let summary = summarize(&String::from_utf8_lossy(&content));
    let _ = write!(output, "{summary}")
        .and_then(|_| output.flush())
        .map_err(log_message_and_return("Can't print students summary.", ()));

    Ok(StudentsDatabase::new(content, summary))
}
