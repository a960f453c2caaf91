use super::commentary::*;
use super::Output;
use crate::error::Error;
use crate::pnl::{is_win, Report};

use std::fmt::Write as _;
use std::io::Write;

const BANNER_WIDTH: usize = 60;

fn marker(value: f64) -> &'static str {
    if is_win(value) {
        "✅"
    } else {
        "🔴"
    }
}

/// Full console report: P&L per instrument in ledger order, the total, then
/// the fixed loss analysis and recommendations.
pub fn render(report: &Report) -> String {
    let mut buffer = String::new();
    // writing into a String never fails
    let _ = write_report(&mut buffer, report);
    buffer
}

fn write_report(buffer: &mut String, report: &Report) -> std::fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(buffer, "{banner}")?;
    writeln!(buffer, "📊 TRADE ANALYSIS REPORT")?;
    writeln!(buffer, "{banner}")?;

    for position in report.positions.iter() {
        writeln!(
            buffer,
            "\n{} {}: ${:+.2}",
            marker(position.pnl),
            position.symbol,
            position.pnl
        )?;
    }

    writeln!(buffer, "\n{banner}")?;
    writeln!(buffer, "💰 TOTAL P&L: ${:.2}", report.total)?;
    writeln!(buffer, "{banner}")?;

    writeln!(buffer, "\n{ROOT_CAUSES_TITLE}")?;
    writeln!(buffer, "{ROOT_CAUSES}")?;
    writeln!(buffer, "\n{RECOMMENDATIONS_TITLE}")?;
    writeln!(buffer, "{RECOMMENDATIONS}")?;
    Ok(())
}

pub struct ConsoleOutput<'a> {
    report: &'a Report,
}

impl<'a> ConsoleOutput<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }
}

impl Output for ConsoleOutput<'_> {
    fn write(&mut self) -> Result<(), Error> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(render(self.report).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{kraken_history, Ledger, TradeRecord};
    use crate::pnl::compute_report;

    #[test]
    fn render_small_report() {
        let ledger = Ledger::new("test")
            .with_position("AAA/USD", vec![TradeRecord::new(10.0, 12.0, 0.5)])
            .unwrap()
            .with_position("BBB/USD", vec![TradeRecord::new(10.0, 9.0, 0.25)])
            .unwrap();
        let text = render(&compute_report(&ledger));

        let expected_head = format!(
            "{0}\n📊 TRADE ANALYSIS REPORT\n{0}\n\n✅ AAA/USD: $+1.50\n\n🔴 BBB/USD: $-1.25\n\n{0}\n💰 TOTAL P&L: $0.25\n{0}\n\n🔴 ROOT CAUSES OF LOSSES:\n\n1. ASYMMETRIC RISK/REWARD (Major Issue)\n",
            "=".repeat(60)
        );
        assert!(text.starts_with(&expected_head));
        assert!(text.ends_with("\n7. LOW: Consider reducing to 1-2 assets only\n\n"));
        assert!(text.contains("\n\n\n✅ RECOMMENDED FIXES:\n\n1. IMMEDIATE: Fix SL calculation bug\n"));
    }

    #[test]
    fn zero_is_not_a_win() {
        let ledger = Ledger::new("test")
            .with_position("FLAT/USD", vec![TradeRecord::new(75.0, 75.0, 0.0)])
            .unwrap();
        let text = render(&compute_report(&ledger));
        assert!(text.contains("\n🔴 FLAT/USD: $+0.00\n"));
        assert!(!text.contains("✅ FLAT/USD"));
    }

    #[test]
    fn empty_position_renders_positive_zero() {
        let ledger = Ledger::new("test")
            .with_position("EMPTY/USD", vec![])
            .unwrap();
        let text = render(&compute_report(&ledger));
        assert!(text.contains("\n🔴 EMPTY/USD: $+0.00\n"));
        assert!(text.contains("💰 TOTAL P&L: $0.00\n"));
    }

    #[test]
    fn render_kraken_history() {
        let text = render(&compute_report(&kraken_history()));
        for line in [
            "✅ SOL/USD: $+70.68",
            "🔴 DOGE/USD: $-22.90",
            "🔴 ETH/USD: $-0.94",
            "🔴 BTC/USD: $-3.36",
            "🔴 XRP/USD: $-2.73",
        ] {
            assert!(text.contains(line), "missing {line}");
        }
        assert_eq!(text.matches("TOTAL P&L").count(), 1);
        assert!(text.contains("💰 TOTAL P&L: $40.75\n"));

        let sol = text.find("SOL/USD").unwrap();
        let xrp = text.find("XRP/USD").unwrap();
        assert!(sol < xrp);
    }

    #[test]
    fn render_is_deterministic() {
        let report = compute_report(&kraken_history());
        assert_eq!(render(&report), render(&report));
    }
}
