use log::{debug, info};
use std::process::ExitCode;
use student_roster::count_students;
use student_roster::database::get_database_file;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let database_file = get_database_file();
    info!("Counting students from `{}`...", database_file.display());
    match count_students(&database_file).await {
        Ok(database) => {
            debug!("{} byte(s) read.", database.content().len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
