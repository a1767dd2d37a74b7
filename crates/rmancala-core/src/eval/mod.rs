//! 静的評価
//!
//! 探索が終局前に打ち切られたときに使う。所有している種の数の差だけを見る。

use crate::position::Position;
use crate::types::{Side, Value};

/// `perspective` 側から見た評価値
///
/// （自分のストア + 自分のピットの種）−（相手の同じもの）。
/// 手詰まりの局面では、必ず `Position::sweep_out_of_moves` を適用した後に呼ぶこと。
#[inline]
pub fn evaluate(pos: &Position, perspective: Side) -> Value {
    let ours = pos.seeds_owned(perspective) as i32;
    let theirs = pos.seeds_owned(perspective.opponent()) as i32;
    Value::new(ours - theirs)
}
