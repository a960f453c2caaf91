mod serialize;

use crate::error::Error;
use crate::ledger::Ledger;

use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_ledger<P: AsRef<Path>>(filename: P) -> Result<Ledger, Error> {
    let filename = filename.as_ref();
    if !filename.is_file() {
        return Err(Error::new_ledger(format!(
            "{} is not valid file",
            filename.display()
        )));
    }
    let file = File::open(filename).map_err(|err| {
        Error::new_ledger(format!("unable to open {} because {err}", filename.display()))
    })?;
    let reader = BufReader::new(file);
    let ledger: Ledger = serialize::from_reader(reader)?;
    info!(
        "ledger {} loaded from {} ({} instruments)",
        ledger.name,
        filename.display(),
        ledger.positions().len()
    );
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::serialize::from_reader;
    use super::*;
    use crate::error::ErrorKind;
    use crate::ledger::TradeRecord;
    use crate::pnl::compute_report;
    use assert_float_eq::*;

    fn parse(content: &str) -> Result<Ledger, Error> {
        from_reader(content.as_bytes())
    }

    #[test]
    fn load_full_ledger() {
        let ledger = parse(
            r#"{
                "name": "kraken",
                "positions": [
                    {"symbol": "BTC/USD", "trades": [
                        {"buy": 75.0, "sell": 73.08, "fee": 0.59},
                        {"buy": 75.0, "sell": 75.0, "fee": 0.60}
                    ]},
                    {"symbol": "XRP/USD", "trades": []}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(ledger.name, "kraken");
        assert_eq!(ledger.positions().len(), 2);
        assert_eq!(ledger.positions()[0].symbol, "BTC/USD");
        let trade = ledger.positions()[0].trades[0];
        assert_float_absolute_eq!(trade.buy(), 75.0, 1e-9);
        assert_float_absolute_eq!(trade.sell(), 73.08, 1e-9);
        assert_float_absolute_eq!(trade.fee(), 0.59, 1e-9);
        assert!(ledger.positions()[1].trades.is_empty());
    }

    #[test]
    fn optional_amounts() {
        let ledger = parse(
            r#"{"name": "n", "positions": [
                {"symbol": "SOL/USD", "trades": [{"sell": 10}, {"buy": 4, "fee": null}, {}]}
            ]}"#,
        )
        .unwrap();
        let trades = &ledger.positions()[0].trades;
        assert_eq!(
            trades[0],
            TradeRecord {
                sell: Some(10.0),
                ..Default::default()
            }
        );
        assert_eq!(
            trades[1],
            TradeRecord {
                buy: Some(4.0),
                ..Default::default()
            }
        );
        assert_eq!(trades[2], TradeRecord::default());
    }

    #[test]
    fn mandatory_fields() {
        let result = parse(r#"{"positions": []}"#);
        assert_eq!(result.unwrap_err().kind, ErrorKind::Ledger);

        let result = parse(r#"{"name": "n", "positions": [{"trades": []}]}"#);
        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Ledger);
        assert!(err.message.contains("symbol"));
    }

    #[test]
    fn wrong_types() {
        let result = parse(
            r#"{"name": "n", "positions": [{"symbol": "SOL/USD", "trades": [{"buy": "12"}]}]}"#,
        );
        let err = result.unwrap_err();
        assert!(err.message.contains("buy"));

        let result = parse(r#"{"name": "n", "positions": {}}"#);
        assert!(result.is_err());

        let result = parse("[1, 2");
        assert_eq!(result.unwrap_err().kind, ErrorKind::Ledger);
    }

    #[test]
    fn reject_path_in_name() {
        for name in ["../escaped", "out/kraken", "..", ""] {
            let content = format!(r#"{{"name": "{name}", "positions": []}}"#);
            let err = parse(&content).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Ledger);
            assert!(err.message.contains("plain file name"), "{name}");
        }
        assert!(parse(r#"{"name": "kraken-2024", "positions": []}"#).is_ok());
    }

    #[test]
    fn duplicate_symbol() {
        let result = parse(
            r#"{"name": "n", "positions": [
                {"symbol": "SOL/USD", "trades": []},
                {"symbol": "SOL/USD", "trades": []}
            ]}"#,
        );
        let err = result.unwrap_err();
        assert!(err.message.contains("SOL/USD"));
    }

    #[test]
    fn load_demo_file() {
        let ledger =
            load_ledger(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/kraken.json")).unwrap();
        let builtin = crate::ledger::kraken_history();
        assert_eq!(ledger.name, builtin.name);
        assert_eq!(ledger.trades().count(), builtin.trades().count());

        let report = compute_report(&ledger);
        let expected = compute_report(&builtin);
        for (position, expected) in report.positions.iter().zip(expected.positions.iter()) {
            assert_eq!(position.symbol, expected.symbol);
            assert_float_absolute_eq!(position.pnl, expected.pnl, 1e-9);
        }
        assert_float_absolute_eq!(report.total, expected.total, 1e-9);
    }

    #[test]
    fn missing_file() {
        let result = load_ledger("/this/file/does/not/exist.json");
        assert_eq!(result.unwrap_err().kind, ErrorKind::Ledger);
    }
}
