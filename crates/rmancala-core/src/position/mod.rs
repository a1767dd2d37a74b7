//! 局面（Position）
//!
//! 手番と14セル（両者のピット12 + ストア2）の種の数だけを持つ値型。
//! 指し手の適用は常に新しい局面を返し、元の局面は変更しない。

use std::fmt;

use serde::Serialize;

use crate::error::{PositionError, Result};
use crate::types::{Move, NUM_CELLS, Side, Value};

mod sow;

#[cfg(test)]
mod tests;

/// 局面
///
/// 等値性とハッシュは構造的（全セルと手番が一致すれば同一局面）。
/// 置換表のキーとしてそのまま使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    side_to_move: Side,
    cells: [u8; NUM_CELLS],
}

impl Position {
    /// 盤上に置ける種の総数の上限（どのセルも `u8` に収まることを保証する）
    pub const MAX_SEEDS: u32 = u8::MAX as u32;

    /// 手番とセルの内容から局面を生成
    pub fn new(side_to_move: Side, cells: [u8; NUM_CELLS]) -> Result<Position> {
        let total: u32 = cells.iter().map(|&c| u32::from(c)).sum();
        if total > Self::MAX_SEEDS {
            return Err(PositionError::TooManySeeds {
                total,
                max: Self::MAX_SEEDS,
            });
        }
        Ok(Position {
            side_to_move,
            cells,
        })
    }

    /// 初期局面（各ピットに `seeds_per_pit` 個、ストアは空、North の手番）
    pub fn initial(seeds_per_pit: u8) -> Result<Position> {
        let mut cells = [seeds_per_pit; NUM_CELLS];
        for side in Side::ALL {
            cells[side.store()] = 0;
        }
        Position::new(Side::North, cells)
    }

    /// コマンドライン引数（手番 + 14個のセル）から局面を生成
    ///
    /// 各トークンの前後の `[` `]` `,` と空白は無視する。
    /// 局面の `Display` 出力をそのまま貼り付けても読めるようにするため。
    pub fn from_args<S: AsRef<str>>(side: &str, cells: &[S]) -> Result<Position> {
        let side: Side = side.parse()?;
        if cells.len() != NUM_CELLS {
            return Err(PositionError::WrongCellCount {
                expected: NUM_CELLS,
                actual: cells.len(),
            });
        }
        let mut parsed = [0u8; NUM_CELLS];
        for (index, (slot, token)) in parsed.iter_mut().zip(cells).enumerate() {
            let token = token.as_ref();
            let trimmed =
                token.trim_matches(|c: char| c == '[' || c == ']' || c == ',' || c.is_whitespace());
            *slot = trimmed.parse().map_err(|_| PositionError::InvalidCell {
                index,
                token: token.to_string(),
            })?;
        }
        Position::new(side, parsed)
    }

    /// 手番
    #[inline]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// セルの種の数
    #[inline]
    pub const fn cell(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// `side` のストアの種の数
    #[inline]
    pub const fn store(&self, side: Side) -> u8 {
        self.cells[side.store()]
    }

    /// 盤上の種の総数
    #[inline]
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().map(|&c| u32::from(c)).sum()
    }

    /// `side` が所有する種の数（ストア + 自分のピット）
    pub fn seeds_owned(&self, side: Side) -> u32 {
        let pits: u32 = side.pits().map(|i| u32::from(self.cells[i])).sum();
        u32::from(self.store(side)) + pits
    }

    /// `mv` が手番側の合法手かどうか（パスは常に不可）
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        match mv.cell() {
            Some(cell) => self.side_to_move.owns_pit(cell) && self.cells[cell] > 0,
            None => false,
        }
    }

    /// 手番側に合法手があるかどうか
    #[inline]
    pub fn has_moves(&self) -> bool {
        self.side_to_move.pits().any(|i| self.cells[i] > 0)
    }

    /// 合法性を検査してから指し手を適用する
    ///
    /// パスは探索専用なので、ここでは常に受け付けて局面をそのまま返す。
    pub fn try_apply(self, mv: Move) -> Result<Position> {
        if !mv.is_pass() && !self.is_legal(mv) {
            return Err(PositionError::IllegalMove { mv, position: self });
        }
        Ok(self.apply(mv))
    }

    /// 勝敗判定
    ///
    /// どちらかのストアが全種数の過半数を持てば決着。`perspective` 側から見て
    /// 勝ちなら `Value::WIN`、負けなら `-Value::WIN`、未決着なら `None`。
    pub fn terminal_value(&self, perspective: Side) -> Option<Value> {
        let total = self.total_seeds();
        let ours = u32::from(self.store(perspective));
        let theirs = u32::from(self.store(perspective.opponent()));
        if 2 * ours > total {
            Some(Value::WIN)
        } else if 2 * theirs > total {
            Some(-Value::WIN)
        } else {
            None
        }
    }

    /// 決着済みかどうか
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal_value(self.side_to_move).is_some()
    }

    /// 手詰まり時の後始末
    ///
    /// 手番側に合法手がないとき、盤上に残ったピットの種をすべて
    /// **相手**のストアに移す。手番は変えない。
    pub fn sweep_out_of_moves(mut self) -> Position {
        let receiver = self.side_to_move.opponent().store();
        for side in Side::ALL {
            for pit in side.pits() {
                let seeds = std::mem::take(&mut self.cells[pit]);
                self.cells[receiver] += seeds;
            }
        }
        self
    }
}

impl fmt::Display for Position {
    /// 通常は `"<手番> [c0 c1 ... c13]"`（コマンドライン引数として再入力可能）。
    /// `{:#}` では2段の盤面図を出力する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let row = |range: &mut dyn Iterator<Item = usize>| {
                range
                    .map(|i| format!("{:>2}", self.cells[i]))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            writeln!(f, "    {}", row(&mut Side::North.pits().rev()))?;
            writeln!(
                f,
                "{:>2}{}{:>2}",
                self.store(Side::North),
                " ".repeat(3 * 6 + 2),
                self.store(Side::South)
            )?;
            writeln!(f, "    {}", row(&mut Side::South.pits()))?;
            write!(f, "to move: {}", self.side_to_move)
        } else {
            write!(f, "{} [", self.side_to_move)?;
            for (i, c) in self.cells.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
            f.write_str("]")
        }
    }
}
