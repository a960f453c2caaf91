use super::TradeRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub trades: Vec<TradeRecord>,
}

impl Position {
    pub fn new<S: Into<String>>(symbol: S, trades: Vec<TradeRecord>) -> Self {
        Self {
            symbol: symbol.into(),
            trades,
        }
    }
}
