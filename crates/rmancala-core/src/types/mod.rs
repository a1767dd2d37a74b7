//! 基本型

mod bound;
mod moves;
mod side;
mod value;

pub use bound::Bound;
pub use moves::{Move, MoveList};
pub use side::Side;
pub use value::Value;

/// 探索深さ（残り深さ）
pub type Depth = i32;

/// 反復深化の既定の最大深さ
pub const MAX_DEPTH: Depth = 30;

/// 盤上のセル数（両者のピット12 + ストア2）
pub const NUM_CELLS: usize = 14;

/// 片側のピット数
pub const PITS_PER_SIDE: usize = 6;
