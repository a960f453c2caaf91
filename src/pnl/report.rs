use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionPnl {
    pub symbol: String,
    pub nets: Vec<f64>,
    pub fees: f64,
    pub pnl: f64,
}

impl PositionPnl {
    pub fn trade_count(&self) -> usize {
        self.nets.len()
    }

    pub fn win_count(&self) -> usize {
        self.nets.iter().filter(|net| is_win(**net)).count()
    }

    pub fn is_win(&self) -> bool {
        is_win(self.pnl)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub name: String,
    pub positions: Vec<PositionPnl>,
    pub total: f64,
}

impl Report {
    pub fn get_position(&self, symbol: &str) -> Option<&PositionPnl> {
        self.positions
            .iter()
            .find(|position| position.symbol == symbol)
    }

    pub fn trade_count(&self) -> usize {
        self.positions.iter().map(PositionPnl::trade_count).sum()
    }

    pub fn win_count(&self) -> usize {
        self.positions.iter().map(PositionPnl::win_count).sum()
    }

    pub fn winning_instruments(&self) -> usize {
        self.positions.iter().filter(|position| position.is_win()).count()
    }

    pub fn fees(&self) -> f64 {
        self.positions
            .iter()
            .fold(0.0, |fees, position| fees + position.fees)
    }
}

// zero is a loss
pub fn is_win(value: f64) -> bool {
    value > 0.0
}
