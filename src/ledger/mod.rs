mod builtin;
mod position;
mod trade;

pub use builtin::kraken_history;
pub use position::*;
pub use trade::*;

use crate::error::Error;

/// Trades grouped by instrument. Positions keep the order they were added in
/// and a symbol appears at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pub name: String,
    positions: Vec<Position>,
}

/// A ledger name ends up in output file names, so it must be a single plain
/// path component.
pub fn check_name(name: &str) -> Result<(), Error> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::new_ledger(format!(
            "ledger name \"{name}\" must be a plain file name"
        )));
    }
    Ok(())
}

impl Ledger {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            positions: Vec::new(),
        }
    }

    pub fn add_position(&mut self, position: Position) -> Result<(), Error> {
        if self.get_position(&position.symbol).is_some() {
            return Err(Error::new_ledger(format!(
                "instrument {} is defined twice in ledger {}",
                position.symbol, self.name
            )));
        }
        self.positions.push(position);
        Ok(())
    }

    pub fn with_position<S: Into<String>>(
        mut self,
        symbol: S,
        trades: Vec<TradeRecord>,
    ) -> Result<Self, Error> {
        self.add_position(Position::new(symbol, trades))?;
        Ok(self)
    }

    pub fn get_position(&self, symbol: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|position| position.symbol == symbol)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn trades(&self) -> impl Iterator<Item = &TradeRecord> {
        self.positions
            .iter()
            .flat_map(|position| position.trades.iter())
    }
}
