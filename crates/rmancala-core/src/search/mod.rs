//! 探索モジュール
//!
//! - `alpha_beta`: Negamax + Alpha-Beta 探索（置換表つき）
//! - `driver`: 反復深化
//! - `stop`: 中断トークン
//! - `limits`: 探索制限
//! - `stats`: 探索統計

mod alpha_beta;
mod driver;
mod limits;
mod stats;
mod stop;

#[cfg(test)]
mod tests;

pub use alpha_beta::{SearchOutcome, SearchResult, Searcher};
pub use driver::{CompletedIteration, DeepeningResult, IterationInfo, StopReason};
pub use limits::SearchLimits;
pub use stats::SearchStats;
pub use stop::StopToken;
