//! TranspositionTable本体

use std::collections::HashMap;

use super::entry::TTEntry;
use crate::position::Position;
use crate::types::{Bound, Depth, Move, Value};

/// 置換表
///
/// 局面の構造的な等値性でキーを引く。置換ポリシーはなく、同じ局面への
/// 書き込みは深さに関係なく後勝ち。読み出し時に毎回深さを検査するので、
/// 浅い結果で深い結果を上書きしても誤った値は返らない。
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<Position, TTEntry>,
}

impl TranspositionTable {
    /// 空の置換表を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを引く
    ///
    /// 未登録、または格納時の残り深さが `required_depth` に満たない場合は `None`。
    #[inline]
    pub fn probe(&self, pos: &Position, required_depth: Depth) -> Option<TTEntry> {
        self.entries
            .get(pos)
            .copied()
            .filter(|entry| entry.is_deep_enough(required_depth))
    }

    /// エントリを書き込む（既存のエントリは無条件に上書き）
    #[inline]
    pub fn store(
        &mut self,
        pos: Position,
        bound: Bound,
        value: Value,
        depth: Depth,
        best_move: Option<Move>,
    ) {
        self.entries.insert(pos, TTEntry::new(bound, value, depth, best_move));
    }

    /// 登録済みの局面数
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// クリア
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
