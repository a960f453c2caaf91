use super::{check_output_dir, make_output_filename, Output};
use crate::error::Error;
use crate::ledger::Ledger;
use crate::pnl::{compute_net, Report};

use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct CsvOutput<'a> {
    output_dir: PathBuf,
    ledger: &'a Ledger,
    report: &'a Report,
}

impl<'a> CsvOutput<'a> {
    pub fn new(output_dir: &str, ledger: &'a Ledger, report: &'a Report) -> Result<Self, Error> {
        Ok(Self {
            output_dir: check_output_dir(output_dir)?,
            ledger,
            report,
        })
    }

    fn write_pnl(&self, filename: &Path) -> Result<(), Error> {
        let mut output_stream = File::create(filename)?;
        output_stream.write_all("Instrument;Trades;Wins;Fees;P&L\n".as_bytes())?;
        for position in self.report.positions.iter() {
            output_stream.write_all(
                format!(
                    "{};{};{};{:.2};{:.2}\n",
                    position.symbol,
                    position.trade_count(),
                    position.win_count(),
                    position.fees,
                    position.pnl
                )
                .as_bytes(),
            )?;
        }
        output_stream.write_all(
            format!(
                "Total;{};{};{:.2};{:.2}\n",
                self.report.trade_count(),
                self.report.win_count(),
                self.report.fees(),
                self.report.total
            )
            .as_bytes(),
        )?;
        Ok(())
    }

    fn write_trades(&self, filename: &Path) -> Result<(), Error> {
        let mut output_stream = File::create(filename)?;
        output_stream.write_all("Instrument;Buy;Sell;Fee;Net\n".as_bytes())?;
        for (symbol, trade) in self.ledger.positions().iter().flat_map(|position| {
            position
                .trades
                .iter()
                .map(|trade| (&position.symbol, trade))
        }) {
            output_stream.write_all(
                format!(
                    "{};{};{};{};{:.2}\n",
                    symbol,
                    trade.buy(),
                    trade.sell(),
                    trade.fee(),
                    compute_net(trade)
                )
                .as_bytes(),
            )?;
        }
        Ok(())
    }
}

impl Output for CsvOutput<'_> {
    fn write(&mut self) -> Result<(), Error> {
        let filename = make_output_filename(&self.output_dir, &self.report.name, "_pnl.csv")?;
        debug!("write {}", filename.display());
        self.write_pnl(&filename)?;

        let filename = make_output_filename(&self.output_dir, &self.report.name, "_trades.csv")?;
        debug!("write {}", filename.display());
        self.write_trades(&filename)?;
        Ok(())
    }
}
