use super::{check_output_dir, make_output_filename, Output};
use crate::error::Error;
use crate::pnl::Report;

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct JsonOutput<'a> {
    output_dir: PathBuf,
    report: &'a Report,
}

impl<'a> JsonOutput<'a> {
    pub fn new(output_dir: &str, report: &'a Report) -> Result<Self, Error> {
        Ok(Self {
            output_dir: check_output_dir(output_dir)?,
            report,
        })
    }
}

impl Output for JsonOutput<'_> {
    fn write(&mut self) -> Result<(), Error> {
        let filename = make_output_filename(&self.output_dir, &self.report.name, "_pnl.json")?;
        debug!("write {}", filename.display());
        let mut writer = BufWriter::new(File::create(&filename)?);
        serde_json::to_writer_pretty(&mut writer, self.report).map_err(|err| {
            Error::new_output(format!("unable to write {} : {err}", filename.display()))
        })?;
        writer.flush()?;
        Ok(())
    }
}
