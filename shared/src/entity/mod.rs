pub mod intraday_accuracy_signals;
pub mod intraday_alert_signals;
pub mod intraday_momentum_signals;
