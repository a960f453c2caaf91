use crate::error::Error;
use crate::ledger::check_name;

use std::path::{Path, PathBuf};

mod commentary;
mod csv;
mod json;
mod ods;
mod text;

pub use crate::output::csv::CsvOutput;
pub use crate::output::json::JsonOutput;
pub use crate::output::ods::OdsOutput;
pub use crate::output::text::{render, ConsoleOutput};

pub trait Output {
    fn write(&mut self) -> Result<(), Error>;
}

fn check_output_dir(output_dir: &str) -> Result<PathBuf, Error> {
    let path = Path::new(output_dir);
    if !path.is_dir() {
        return Err(Error::new_output(format!(
            "{} must be a directory",
            output_dir
        )));
    }
    Ok(path.to_path_buf())
}

fn make_output_filename(output_dir: &Path, name: &str, suffix: &str) -> Result<PathBuf, Error> {
    check_name(name).map_err(|err| Error::new_output(err.message))?;
    Ok(output_dir.join(format!("{name}{suffix}")))
}
