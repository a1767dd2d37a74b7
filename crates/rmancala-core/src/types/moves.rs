//! 指し手（Move）

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use super::{NUM_CELLS, PITS_PER_SIDE};

/// 指し手
///
/// 通常の手は種をまくピットのセル番号。`Move::PASS` は探索専用の番兵で、
/// 名目上の手番側ではない側の手番を「何もしない1手」として表す。
/// ゲームのルール上の手ではない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u8);

impl Move {
    /// パス（探索用の番兵）
    pub const PASS: Move = Move(u8::MAX);

    /// セル番号から種まきの手を生成
    #[inline]
    pub const fn sow(cell: usize) -> Move {
        debug_assert!(cell < NUM_CELLS);
        Move(cell as u8)
    }

    /// パスかどうか
    #[inline]
    pub const fn is_pass(self) -> bool {
        self.0 == Self::PASS.0
    }

    /// 種をまくセル番号（パスなら `None`）
    #[inline]
    pub const fn cell(self) -> Option<usize> {
        if self.is_pass() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell() {
            Some(cell) => write!(f, "{cell}"),
            None => f.write_str("pass"),
        }
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.cell() {
            Some(cell) => serializer.serialize_u8(cell as u8),
            None => serializer.serialize_str("pass"),
        }
    }
}

/// 指し手リスト（片側のピット数を超えない）
pub type MoveList = SmallVec<[Move; PITS_PER_SIDE]>;
