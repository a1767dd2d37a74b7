//! 中断トークン
//!
//! 外部（Ctrl-C ハンドラやタイマー）から探索を止めるための共有フラグ。
//! プロセス全体のグローバル変数は使わず、探索器に明示的に渡す。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// 中断トークン
///
/// `clone` したトークン同士はフラグを共有する。期限（deadline）はクローンごとに持つ。
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl StopToken {
    /// 新しいトークンを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 期限を設定したトークンを返す
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// 期限を設定（`None` で解除）
    pub fn set_deadline(&mut self, deadline: Option<Instant>) {
        self.deadline = deadline;
    }

    /// 期限
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 停止を要求する
    #[inline]
    pub fn raise(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// 停止要求が出ているか
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// 期限を過ぎたか（期限なしなら常に false）
    #[inline]
    pub fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// 停止要求を取り消す（次の探索のため）
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}
