//! 探索統計

use serde::Serialize;

/// 探索統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// 訪問ノード数
    pub nodes: u64,
    /// 置換表のヒット数（深さ条件を満たしたもの）
    pub tt_hits: u64,
    /// 置換表による早期カットオフ数
    pub tt_cutoffs: u64,
    /// 到達した最大手数（パスを含む）
    pub max_ply: usize,
}

impl SearchStats {
    /// ノードを1つ数える
    #[inline]
    pub(super) fn visit(&mut self, ply: usize) {
        self.nodes += 1;
        self.max_ply = self.max_ply.max(ply);
    }
}
