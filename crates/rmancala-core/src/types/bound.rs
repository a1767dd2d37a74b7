//! 境界値種別（Bound）

use super::Value;

/// 境界値種別（置換表に格納する値の種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bound {
    /// 上界（fail-low: 真の値はこれ以下）
    Upper = 1,
    /// 下界（fail-high: 真の値はこれ以上）
    Lower = 2,
    /// 正確な値
    Exact = 3,
}

impl Bound {
    /// 探索結果を元の探索窓に対して分類する
    ///
    /// `alpha_orig` 以下なら上界、`beta` 以上なら下界、窓の内側なら正確な値。
    #[inline]
    pub fn classify(value: Value, alpha_orig: Value, beta: Value) -> Bound {
        if value <= alpha_orig {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }

    /// 視点を反転したときの境界種別
    ///
    /// 値の符号を反転すると上界と下界が入れ替わる。
    #[inline]
    pub const fn flip(self) -> Bound {
        match self {
            Bound::Upper => Bound::Lower,
            Bound::Lower => Bound::Upper,
            Bound::Exact => Bound::Exact,
        }
    }
}
