use super::{check_output_dir, make_output_filename, Output};
use crate::error::Error;
use crate::ledger::Ledger;
use crate::pnl::{compute_net, Report};

use log::debug;
use std::path::PathBuf;
use spreadsheet_ods::format::ValueFormatTrait;
use spreadsheet_ods::{
    currency, CellStyleRef, Sheet, Value, ValueFormatCurrency, ValueFormatRef, WorkBook,
};

const CURRENCY: &str = "USD";

impl From<spreadsheet_ods::OdsError> for Error {
    fn from(error: spreadsheet_ods::OdsError) -> Self {
        Error::new_output(format!("ods error : {error}"))
    }
}

pub struct OdsOutput<'a> {
    output_filename: PathBuf,
    work_book: WorkBook,
    ledger: &'a Ledger,
    report: &'a Report,
}

impl<'a> OdsOutput<'a> {
    pub fn new(output_dir: &str, ledger: &'a Ledger, report: &'a Report) -> Result<Self, Error> {
        let output_dir = check_output_dir(output_dir)?;
        Ok(Self {
            output_filename: make_output_filename(&output_dir, &report.name, ".ods")?,
            work_book: WorkBook::new_empty(),
            ledger,
            report,
        })
    }

    fn save(&mut self) -> Result<(), Error> {
        spreadsheet_ods::write_ods(&mut self.work_book, &self.output_filename)?;
        Ok(())
    }

    fn write_header(sheet: &mut Sheet, headers: &[&str]) {
        for (i, header_name) in headers.iter().enumerate() {
            sheet.set_value(0, i as u32, Value::Text(header_name.to_string()));
        }
    }

    fn write_summary(&mut self) -> Result<(), Error> {
        let mut sheet = Sheet::new("Summary");
        Self::write_header(&mut sheet, &["Instrument", "Trades", "Wins", "Fees", "P&L"]);

        let currency_style_ref = self.get_currency_style(CURRENCY)?;
        for i in [3, 4] {
            sheet.set_col_cellstyle(i, &currency_style_ref);
        }

        let mut row: u32 = 1;
        for position in self.report.positions.iter() {
            sheet.set_value(row, 0, &position.symbol);
            sheet.set_value(row, 1, position.trade_count() as u32);
            sheet.set_value(row, 2, position.win_count() as u32);
            sheet.set_value(row, 3, currency!(CURRENCY, position.fees));
            sheet.set_value(row, 4, currency!(CURRENCY, position.pnl));
            row += 1;
        }
        sheet.set_value(row, 0, "Total");
        sheet.set_value(row, 1, self.report.trade_count() as u32);
        sheet.set_value(row, 2, self.report.win_count() as u32);
        sheet.set_value(row, 3, currency!(CURRENCY, self.report.fees()));
        sheet.set_value(row, 4, currency!(CURRENCY, self.report.total));

        self.work_book.push_sheet(sheet);
        Ok(())
    }

    fn write_trades(&mut self) -> Result<(), Error> {
        let mut sheet = Sheet::new("Trades");
        Self::write_header(&mut sheet, &["Instrument", "Buy", "Sell", "Fee", "Net"]);

        let currency_style_ref = self.get_currency_style(CURRENCY)?;
        for i in [1, 2, 3, 4] {
            sheet.set_col_cellstyle(i, &currency_style_ref);
        }

        let mut row: u32 = 1;
        for position in self.ledger.positions().iter() {
            for trade in position.trades.iter() {
                sheet.set_value(row, 0, &position.symbol);
                sheet.set_value(row, 1, currency!(CURRENCY, trade.buy()));
                sheet.set_value(row, 2, currency!(CURRENCY, trade.sell()));
                sheet.set_value(row, 3, currency!(CURRENCY, trade.fee()));
                sheet.set_value(row, 4, currency!(CURRENCY, compute_net(trade)));
                row += 1;
            }
        }

        self.work_book.push_sheet(sheet);
        Ok(())
    }

    fn get_currency_format(&mut self, name: &str) -> Result<ValueFormatRef, Error> {
        if let Some(value) = self.work_book.currency_format(name) {
            return Ok(value.format_ref());
        }
        if name == "USD" {
            let mut format_currency = ValueFormatCurrency::new_named(name);
            format_currency.part_currency().symbol("$").build();
            format_currency
                .part_number()
                .min_integer_digits(1)
                .decimal_places(2)
                .min_decimal_places(2)
                .grouping()
                .build();
            return Ok(self.work_book.add_currency_format(format_currency));
        }
        Err(Error::new_output(format!("unsupported currency {name}")))
    }

    fn get_currency_style(&mut self, currency_name: &str) -> Result<CellStyleRef, Error> {
        let style_name = format!("currency_style_{}", currency_name);
        if let Some(value) = self.work_book.cellstyle(&style_name) {
            return Ok(value.style_ref());
        }

        let value_format_ref = self.get_currency_format(currency_name)?;
        let currency_style = spreadsheet_ods::CellStyle::new(&style_name, &value_format_ref);
        let currency_style_ref = self.work_book.add_cellstyle(currency_style);
        Ok(currency_style_ref)
    }
}

impl Output for OdsOutput<'_> {
    fn write(&mut self) -> Result<(), Error> {
        debug!("write summary");
        self.write_summary()?;

        debug!("write trades");
        self.write_trades()?;

        debug!("save {}", self.output_filename.display());
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::kraken_history;
    use crate::output::tests::make_output_dir;
    use crate::pnl::compute_report;

    #[test]
    fn write_kraken_history() {
        let output_dir = make_output_dir("ods");
        let ledger = kraken_history();
        let report = compute_report(&ledger);
        OdsOutput::new(&output_dir, &ledger, &report)
            .unwrap()
            .write()
            .unwrap();

        let work_book = spreadsheet_ods::read_ods(format!("{output_dir}/kraken.ods")).unwrap();
        assert_eq!(work_book.num_sheets(), 2);
        assert_eq!(work_book.sheet(0).name(), "Summary");
        assert_eq!(work_book.sheet(1).name(), "Trades");

        std::fs::remove_dir_all(&output_dir).unwrap();
    }

    #[test]
    fn unsupported_currency() {
        let ledger = kraken_history();
        let report = compute_report(&ledger);
        let output_dir = std::env::temp_dir().display().to_string();
        let mut output = OdsOutput::new(&output_dir, &ledger, &report).unwrap();
        assert!(output.get_currency_style("EUR").is_err());
        assert!(output.get_currency_style(CURRENCY).is_ok());
    }
}
