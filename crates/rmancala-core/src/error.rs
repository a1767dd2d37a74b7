//! 局面入力・指し手適用のエラー型

use crate::position::Position;
use crate::types::Move;

/// 局面の構築・指し手適用で発生するエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// セル数が14でない
    #[error("expected {expected} cell counts, got {actual}")]
    WrongCellCount { expected: usize, actual: usize },

    /// セルの値が非負整数として解釈できない
    #[error("invalid count {token:?} for cell {index}")]
    InvalidCell { index: usize, token: String },

    /// 手番の指定が不正
    #[error("invalid side {0:?} (expected 0, 1, north or south)")]
    InvalidSide(String),

    /// 種の総数が1セルに収まらない
    #[error("too many seeds on the board: {total} (at most {max})")]
    TooManySeeds { total: u32, max: u32 },

    /// 非合法手
    #[error("illegal move {mv} in position {position}")]
    IllegalMove { mv: Move, position: Position },
}

/// Result type for position operations
pub type Result<T> = std::result::Result<T, PositionError>;
