mod report;

pub use report::*;

use crate::ledger::{Ledger, TradeRecord};
use log::warn;

pub fn compute_net(trade: &TradeRecord) -> f64 {
    trade.sell() - trade.buy() - trade.fee()
}

// fold from +0.0, an empty sum of f64 is -0.0
pub fn compute_instrument_pnl(trades: &[TradeRecord]) -> f64 {
    trades.iter().fold(0.0, |pnl, trade| pnl + compute_net(trade))
}

/// Per instrument P&L in ledger order, plus the grand total accumulated
/// along the way.
pub fn compute_report(ledger: &Ledger) -> Report {
    let mut total = 0.0;
    let mut positions = Vec::with_capacity(ledger.positions().len());
    for position in ledger.positions() {
        if position.trades.is_empty() {
            warn!("no trade for {}", position.symbol);
        }
        let pnl = compute_instrument_pnl(&position.trades);
        total += pnl;
        positions.push(PositionPnl {
            symbol: position.symbol.clone(),
            nets: position.trades.iter().map(compute_net).collect(),
            fees: position
                .trades
                .iter()
                .fold(0.0, |fees, trade| fees + trade.fee()),
            pnl,
        });
    }
    Report {
        name: ledger.name.clone(),
        positions,
        total,
    }
}
