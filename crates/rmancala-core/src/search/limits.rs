//! 探索制限

use std::time::Duration;

use crate::types::{Depth, MAX_DEPTH};

/// 探索制限条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// 反復深化の最大深さ（この深さまで含めて探索する）
    pub max_depth: Depth,
    /// 思考時間（`None` なら無制限。Ctrl-C などの中断のみで止まる）
    pub move_time: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            move_time: None,
        }
    }
}

impl SearchLimits {
    /// 新しいSearchLimitsを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 最大深さを設定
    pub fn max_depth(mut self, depth: Depth) -> Self {
        self.max_depth = depth;
        self
    }

    /// 思考時間を設定
    pub fn move_time(mut self, time: Duration) -> Self {
        self.move_time = Some(time);
        self
    }
}
