//! 置換表エントリ

use crate::types::{Bound, Depth, Move, Side, Value};

/// 置換表エントリ
///
/// 値は格納時の局面の手番側から見たもの。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// 境界種別
    pub bound: Bound,
    /// 評価値
    pub value: Value,
    /// 計算したときの残り深さ
    pub depth: Depth,
    /// この局面の手番側の最善手（パスは入らない）
    pub best_move: Option<Move>,
}

impl TTEntry {
    /// 新しいエントリを作成
    #[inline]
    pub const fn new(bound: Bound, value: Value, depth: Depth, best_move: Option<Move>) -> Self {
        Self {
            bound,
            value,
            depth,
            best_move,
        }
    }

    /// `owner` 視点のエントリを `viewer` 視点に変換する
    ///
    /// 視点が異なる場合は値の符号を反転し、上界と下界を入れ替える。
    #[inline]
    pub fn viewed_from(self, owner: Side, viewer: Side) -> Self {
        if owner == viewer {
            self
        } else {
            Self {
                bound: self.bound.flip(),
                value: -self.value,
                ..self
            }
        }
    }

    /// 要求された残り深さを満たすかどうか
    #[inline]
    pub const fn is_deep_enough(&self, required: Depth) -> bool {
        self.depth >= required
    }
}
