//! 種まき（指し手の適用）

use super::Position;
use crate::types::{Move, NUM_CELLS};

impl Position {
    /// 指し手を適用した新しい局面を返す
    ///
    /// - 選んだピットの種をすべて取り出し、以降のセルに1個ずつまく（相手ストアは飛ばす）
    /// - 最後の1個が自分の空だったピットに入った場合（まいた後に1個）、その1個と
    ///   向かいのピット（`14 - i`）の種をすべて自分のストアに移す
    /// - 最後の1個が自分のストアに入った場合は手番が続く。それ以外は手番交代
    /// - `Move::PASS` は局面をそのまま返す
    ///
    /// 非合法手の適用は呼び出し側のバグ。検査が必要なら `try_apply` を使う。
    pub fn apply(mut self, mv: Move) -> Position {
        let Some(from) = mv.cell() else {
            return self;
        };
        debug_assert!(self.is_legal(mv), "illegal move {mv} in {self}");

        let us = self.side_to_move;
        let skip = us.opponent().store();
        let mut seeds = std::mem::take(&mut self.cells[from]);
        let mut last = from;
        while seeds > 0 {
            last = (last + 1) % NUM_CELLS;
            if last == skip {
                continue;
            }
            self.cells[last] += 1;
            seeds -= 1;
        }

        // 捕獲
        if us.owns_pit(last) && self.cells[last] == 1 {
            let mirror = NUM_CELLS - last;
            let captured = self.cells[last] + self.cells[mirror];
            self.cells[last] = 0;
            self.cells[mirror] = 0;
            self.cells[us.store()] += captured;
        }

        if last != us.store() {
            self.side_to_move = us.opponent();
        }
        self
    }
}
