//! 手番（Side）

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use super::{NUM_CELLS, PITS_PER_SIDE};
use crate::error::PositionError;

/// 手番
///
/// ```text
///      13 12 11 10  9  8        <- North のピット
///    0                   7      <- 0: North のストア, 7: South のストア
///       1  2  3  4  5  6        <- South のピット
/// ```
///
/// コマンドラインでは North を `0`、South を `1` で指定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    North = 0,
    South = 1,
}

impl Side {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 全手番（インデックス順）
    pub const ALL: [Side; Side::NUM] = [Side::North, Side::South];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// ストアのセル番号
    #[inline]
    pub const fn store(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => NUM_CELLS / 2,
        }
    }

    /// 自分のピットのセル番号の範囲
    ///
    /// 相手ストアの直後から6セル。
    #[inline]
    pub fn pits(self) -> RangeInclusive<usize> {
        let first = self.opponent().store() + 1;
        first..=first + PITS_PER_SIDE - 1
    }

    /// `cell` が自分のピットかどうか
    #[inline]
    pub fn owns_pit(self, cell: usize) -> bool {
        self.pits().contains(&cell)
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for Side {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim_matches(|c: char| c == '[' || c == ']' || c == ',' || c.is_whitespace());
        match token.to_ascii_lowercase().as_str() {
            "0" | "north" | "n" => Ok(Side::North),
            "1" | "south" | "s" => Ok(Side::South),
            _ => Err(PositionError::InvalidSide(s.to_string())),
        }
    }
}
