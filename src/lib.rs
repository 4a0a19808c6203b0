#[macro_use]
extern crate log;

pub mod database;
pub mod roster;
pub mod tools;

pub use database::{StudentsDatabase, count_students, report_students};
pub use roster::{Roster, summarize, summary::Summary};
