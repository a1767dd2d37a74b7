//! # rmancala-core
//!
//! カラハ（14セルのマンカラ）向けの探索エンジンコアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Side, Move, Value, Bound, Depth）
//! - `position`: 局面表現と種まき（apply）・捕獲・追加手番
//! - `movegen`: 合法手生成
//! - `eval`: 静的評価
//! - `tt`: 置換表（Transposition Table）
//! - `search`: Negamax/Alpha-Beta 探索、反復深化、中断トークン
//!

pub mod error;
pub mod eval;
pub mod movegen;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;

pub use error::{PositionError, Result};
pub use position::Position;
pub use types::{Bound, Depth, Move, Side, Value};
