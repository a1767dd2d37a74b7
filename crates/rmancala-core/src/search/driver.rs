//! 反復深化
//!
//! 深さ 0, 1, 2, ... と探索を繰り返し、最後に完了した深さの結果を保持する。
//! 置換表は全反復で共有するので、浅い反復の結果が深い反復の枝刈りに効く。
//! 中断された反復の結果は捨て、それ以前に完了した反復の結果だけを返す。

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;

use super::alpha_beta::{SearchOutcome, SearchResult, Searcher};
use super::limits::SearchLimits;
use super::stats::SearchStats;
use crate::position::Position;
use crate::types::{Depth, Move, Value};

/// 1回の反復が完了したときの情報（コールバック用）
#[derive(Debug, Clone, Copy)]
pub struct IterationInfo<'a> {
    /// 探索した深さ
    pub depth: Depth,
    /// ルートの手番側から見た評価値
    pub value: Value,
    /// 読み筋
    pub pv: &'a [Move],
    /// ここまでの累計ノード数
    pub nodes: u64,
    /// 反復深化の開始からの経過時間
    pub elapsed: Duration,
}

/// 完了した反復
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedIteration {
    /// 深さ
    pub depth: Depth,
    /// 探索結果
    pub result: SearchResult,
}

impl CompletedIteration {
    /// 最善手（読み筋が空なら `None`）
    #[inline]
    pub fn best_move(&self) -> Option<Move> {
        self.result.best_move()
    }
}

/// 反復深化を終えた理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// 最大深さまで探索した
    DepthLimit,
    /// 勝敗が確定した（これ以上深く読んでも変わらない）
    Decided,
    /// ルートに合法手がない
    NoMoves,
    /// 中断された（Ctrl-C または期限切れ）
    Cancelled,
}

/// 反復深化の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepeningResult {
    /// 最後に完了した反復。深さ0の途中で中断された場合のみ `None`
    pub best: Option<CompletedIteration>,
    /// 終了理由
    pub reason: StopReason,
    /// 全反復の累計統計
    pub stats: SearchStats,
}

impl DeepeningResult {
    /// 最善手
    pub fn best_move(&self) -> Option<Move> {
        self.best.as_ref().and_then(CompletedIteration::best_move)
    }
}

impl Searcher {
    /// 反復深化で探索する
    ///
    /// `on_iteration` は反復が完了するたびに呼ばれる。
    /// 中断トークンの期限は毎回 `limits.move_time` から設定し直す（なければ期限なし）。
    /// 停止要求そのものは取り消さないので、前回の期限切れや Ctrl-C の後に
    /// 続けて使うときは先に `Searcher::clear` を呼ぶこと。
    pub fn iterative_deepening<F>(
        &mut self,
        root: &Position,
        limits: &SearchLimits,
        mut on_iteration: F,
    ) -> DeepeningResult
    where
        F: FnMut(&IterationInfo<'_>),
    {
        let start = Instant::now();
        self.stop_token_mut()
            .set_deadline(limits.move_time.map(|move_time| start + move_time));
        if let Some(deadline) = self.stop_token().deadline() {
            debug!("deadline in {:?}", deadline.saturating_duration_since(start));
        }
        self.reset_stats();

        let mut best: Option<CompletedIteration> = None;
        let mut reason = StopReason::DepthLimit;

        for depth in 0..=limits.max_depth {
            let result = match self.search(root, depth) {
                SearchOutcome::Completed(result) => result,
                SearchOutcome::Cancelled => {
                    reason = StopReason::Cancelled;
                    break;
                }
            };

            let stats = *self.stats();
            on_iteration(&IterationInfo {
                depth,
                value: result.value,
                pv: &result.pv,
                nodes: stats.nodes,
                elapsed: start.elapsed(),
            });
            debug!(
                "depth {depth} done: value={} pv_len={} nodes={} max_ply={} tt_entries={} tt_hits={} tt_cutoffs={}",
                result.value,
                result.pv.len(),
                stats.nodes,
                stats.max_ply,
                self.tt().len(),
                stats.tt_hits,
                stats.tt_cutoffs
            );

            let decided = result.value.is_decided();
            let no_moves = depth > 0 && result.pv.is_empty();
            best = Some(CompletedIteration { depth, result });

            if decided {
                reason = StopReason::Decided;
                break;
            }
            if no_moves {
                reason = StopReason::NoMoves;
                break;
            }
        }

        info!(
            "search finished: reason={reason:?} depth={} nodes={} elapsed={:?}",
            best.as_ref().map_or(-1, |b| b.depth),
            self.stats().nodes,
            start.elapsed()
        );

        DeepeningResult {
            best,
            reason,
            stats: *self.stats(),
        }
    }
}
