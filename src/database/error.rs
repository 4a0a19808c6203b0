use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("Cannot load the database")]
    CantLoadDatabase,
}
