//! 評価値（Value）
//!
//! 値は常に「誰かの視点」から見た符号付き整数で、ゼロを中心に対称。
//! `Value::WIN` は勝敗が確定した局面、`Value::INFINITE` は探索窓の外側に使う。

use std::fmt;

use serde::Serialize;

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ（未確定・互角）
    pub const ZERO: Value = Value(0);
    /// 勝ち確定
    pub const WIN: Value = Value(1_000_000);
    /// 無限大（探索窓の初期値）
    pub const INFINITE: Value = Value(1_000_001);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 勝敗確定スコアかどうか
    #[inline]
    pub const fn is_decided(self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= -Self::WIN.0
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
