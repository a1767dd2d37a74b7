//! 合法手生成器
//!
//! 手番側の空でないピットを番号の昇順に列挙する。
//! 生成順は Alpha-Beta の同値手の優先順位を決めるので、常に同じ順序で返すこと。

use crate::position::Position;
use crate::types::{Move, MoveList};

/// 合法手を生成
pub fn generate_moves(pos: &Position) -> MoveList {
    pos.side_to_move()
        .pits()
        .filter(|&cell| pos.cell(cell) > 0)
        .map(Move::sow)
        .collect()
}
