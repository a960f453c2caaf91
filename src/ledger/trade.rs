/// One round trip on an instrument: what was paid, what came back, and the
/// fee charged. Any amount left out counts as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TradeRecord {
    pub buy: Option<f64>,
    pub sell: Option<f64>,
    pub fee: Option<f64>,
}

impl TradeRecord {
    pub fn new(buy: f64, sell: f64, fee: f64) -> Self {
        Self {
            buy: Some(buy),
            sell: Some(sell),
            fee: Some(fee),
        }
    }

    pub fn buy(&self) -> f64 {
        self.buy.unwrap_or_default()
    }

    pub fn sell(&self) -> f64 {
        self.sell.unwrap_or_default()
    }

    pub fn fee(&self) -> f64 {
        self.fee.unwrap_or_default()
    }
}
