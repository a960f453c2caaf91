use super::{Ledger, Position, TradeRecord};

/// Kraken trade history the default report is computed on.
pub fn kraken_history() -> Ledger {
    Ledger {
        name: "kraken".to_string(),
        positions: vec![
            Position::new(
                "SOL/USD",
                vec![
                    TradeRecord::new(202.26, 201.82, 1.31),
                    TradeRecord::new(150.0, 150.03, 0.90),
                    TradeRecord::new(75.0, 149.52, 0.90),
                    TradeRecord::new(75.0, 75.28, 0.60),
                ],
            ),
            Position::new(
                "DOGE/USD",
                vec![
                    TradeRecord::new(121.48, 120.67, 0.97),
                    TradeRecord::new(272.50, 252.68, 1.30),
                ],
            ),
            Position::new(
                "ETH/USD",
                vec![
                    TradeRecord::new(299.88, 301.72, 1.11),
                    TradeRecord::new(75.0, 75.01, 0.60),
                    TradeRecord::new(75.0, 74.52, 0.60),
                ],
            ),
            Position::new(
                "BTC/USD",
                vec![
                    TradeRecord::new(75.0, 73.08, 0.59),
                    TradeRecord::new(75.0, 75.0, 0.60),
                    TradeRecord::new(75.0, 75.35, 0.60),
                ],
            ),
            Position::new(
                "XRP/USD",
                vec![
                    TradeRecord::new(50.01, 49.75, 0.40),
                    TradeRecord::new(37.70, 35.87, 0.24),
                ],
            ),
        ],
    }
}
