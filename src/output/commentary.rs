pub const ROOT_CAUSES_TITLE: &str = "🔴 ROOT CAUSES OF LOSSES:";

pub const ROOT_CAUSES: &str = "
1. ASYMMETRIC RISK/REWARD (Major Issue)
   - Stop Loss: 0.5% 
   - Take Profit: 0.75%
   - BUT: Fees are ~0.4% per trade (0.2% each way)
   - Net TP after fees: only 0.35%
   - Net SL after fees: -0.9% 
   - Risk/Reward = 0.35:0.9 = 1:2.6 (TERRIBLE!)
   
2. STOP LOSS NOT WORKING (Critical Bug!)
   - Logs show SL values like \"$33.75\" for SOL at $134
   - That's -75% stop loss, not 0.5%!
   - The SL calculation is using WRONG entry price
   
3. ENTRY TIMING (Strategy Issue)
   - Bot buys on \"dip\" signals in downtrending market
   - DOGE: Bought at $0.137, market crashed to $0.126
   - BTC: Bought at $94,977, market dropped to $92,548
   - No trend filter - buying falling knives

4. RSI OVERBOUGHT EXIT TOO AGGRESSIVE
   - Sells at +0.3% profit when RSI > 70
   - After fees, this is barely breakeven
   - Winners cut short, losers run long

5. POSITION REENTRY CHURN
   - Bot sells, then immediately rebuys
   - Creates unnecessary fee drag
   - See SOL trades: buy-sell-buy-sell-buy within minutes

6. NO MACRO TREND FILTER
   - Bot ignores market direction
   - Weekend/low-volume periods = choppy losses
   - No check if 24h trend is down

7. GRID TRADING CONFLICTS
   - Multiple order systems fight each other
   - GridTradingService + KrakenTradingLoop both placing orders
";

pub const RECOMMENDATIONS_TITLE: &str = "✅ RECOMMENDED FIXES:";

pub const RECOMMENDATIONS: &str = "
1. IMMEDIATE: Fix SL calculation bug
2. IMMEDIATE: Widen risk/reward (TP=1.5%, SL=0.5% after fees)
3. HIGH: Add trend filter (skip buys when 24h change < -2%)
4. HIGH: Add cooldown after sells (15min before rebuy)
5. MEDIUM: Disable RSI overbought early exit or raise threshold
6. MEDIUM: Reduce trading frequency to reduce fee impact
7. LOW: Consider reducing to 1-2 assets only
";
