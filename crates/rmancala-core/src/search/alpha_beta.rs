//! Negamax + Alpha-Beta 探索の実装
//!
//! 各ノードは「名目上の手番側」（`nominal`）を持つ。値は常にこの側の視点で、
//! 再帰のたびに名目上の手番は交代する。局面の手番が名目上の手番と一致する
//! ときだけ本物の手を生成し、一致しないときは深さを消費しない `Move::PASS`
//! を1つだけ展開する。追加手番で同じ側が続けて指す局面も、これで
//! 厳密な交互手番の Negamax として扱える。
//!
//! PASS の次のノードは必ず名目上の手番 = 局面の手番になるので、
//! 再帰の深さは高々 `2 * depth + 1` に収まる。
//!
//! 読み筋は決着・手詰まり・残り深さ0の葉まで必ず続く。置換表の値で打ち切るのは
//! 値が窓の外にある（読み筋に乗り得ない）ときと、格納された最善手をたどって
//! 同じ値の葉に着けたときだけ。

use log::trace;
use serde::Serialize;
use smallvec::smallvec;

use super::stats::SearchStats;
use super::stop::StopToken;
use crate::eval::evaluate;
use crate::movegen::generate_moves;
use crate::position::Position;
use crate::tt::{TTEntry, TranspositionTable};
use crate::types::{Bound, Depth, Move, MoveList, Side, Value};

/// 期限の確認間隔（ノード数）。停止フラグ自体は毎ノード確認する
const DEADLINE_CHECK_INTERVAL: i32 = 1024;

/// 1回の探索結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// ルート局面の手番側から見た評価値
    pub value: Value,
    /// 読み筋（Principal Variation）
    ///
    /// ルートから順に適用すると、`value` を与える葉（決着・手詰まり・残り深さ0）に着く。
    pub pv: Vec<Move>,
}

impl SearchResult {
    /// 最善手（読み筋が空なら `None`）
    #[inline]
    pub fn best_move(&self) -> Option<Move> {
        self.pv.first().copied()
    }
}

/// 探索の結末
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 最後まで探索できた
    Completed(SearchResult),
    /// 中断された（値は使えない）
    Cancelled,
}

/// 中断を呼び出し元まで伝えるためのマーカー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Aborted;

/// ノードの探索結果（値と、そこからの読み筋）
#[derive(Debug)]
struct Line {
    value: Value,
    pv: Vec<Move>,
}

impl Line {
    #[inline]
    fn leaf(value: Value) -> Self {
        Self {
            value,
            pv: Vec::new(),
        }
    }
}

/// 探索器
///
/// 置換表と中断トークンを保持する。探索はこのスレッドだけで行うので
/// 置換表は同期しない。
pub struct Searcher {
    tt: TranspositionTable,
    stop: StopToken,
    stats: SearchStats,
    /// 次に期限を確認するまでのノード数
    calls_cnt: i32,
}

impl Searcher {
    /// 新しい探索器を作成
    pub fn new(stop: StopToken) -> Self {
        Self {
            tt: TranspositionTable::new(),
            stop,
            stats: SearchStats::default(),
            calls_cnt: 1,
        }
    }

    /// 置換表
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// 探索統計
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// 中断トークン
    pub fn stop_token(&self) -> &StopToken {
        &self.stop
    }

    pub(super) fn stop_token_mut(&mut self) -> &mut StopToken {
        &mut self.stop
    }

    pub(super) fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// 置換表・統計・中断トークンをクリアする（別の対局・別の呼び出しの前に）
    ///
    /// 中断トークンは停止要求と期限の両方を取り消す。一度上がった停止要求は
    /// これか `StopToken::reset` を呼ぶまで残り、以降の探索はすぐに中断される。
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
        self.stop.reset();
        self.stop.set_deadline(None);
    }

    /// 残り深さ `depth` で1回探索する
    ///
    /// 置換表は呼び出し間で共有される。
    pub fn search(&mut self, root: &Position, depth: Depth) -> SearchOutcome {
        self.calls_cnt = 1;
        match self.negamax(
            root,
            depth,
            root.side_to_move(),
            -Value::INFINITE,
            Value::INFINITE,
            0,
        ) {
            Ok(line) => SearchOutcome::Completed(SearchResult {
                value: line.value,
                pv: line.pv,
            }),
            Err(Aborted) => SearchOutcome::Cancelled,
        }
    }

    /// 中断チェック
    #[inline]
    fn check_abort(&mut self) -> bool {
        if self.stop.is_raised() {
            return true;
        }

        self.calls_cnt -= 1;
        if self.calls_cnt > 0 {
            return false;
        }
        self.calls_cnt = DEADLINE_CHECK_INTERVAL;

        if self.stop.deadline_passed() {
            // 期限切れも外部からの中断と同じ経路で扱う
            self.stop.raise();
            return true;
        }
        false
    }

    fn negamax(
        &mut self,
        pos: &Position,
        depth: Depth,
        nominal: Side,
        alpha: Value,
        beta: Value,
        ply: usize,
    ) -> Result<Line, Aborted> {
        if self.check_abort() {
            return Err(Aborted);
        }
        self.stats.visit(ply);

        let (alpha_orig, beta_orig) = (alpha, beta);
        let (mut alpha, mut beta) = (alpha, beta);

        // 置換表。ルートでは読み筋を必ず得るために引かない
        if ply > 0 {
            if let Some(entry) = self.tt.probe(pos, depth) {
                self.stats.tt_hits += 1;
                let entry = entry.viewed_from(pos.side_to_move(), nominal);
                match entry.bound {
                    Bound::Exact if entry.value <= alpha || entry.value >= beta => {
                        // 窓の外の値は読み筋に乗らない
                        self.stats.tt_cutoffs += 1;
                        return Ok(Line::leaf(entry.value));
                    }
                    Bound::Exact => {
                        if let Some(line) = self.table_line(pos, depth, nominal) {
                            if line.value == entry.value {
                                self.stats.tt_cutoffs += 1;
                                return Ok(line);
                            }
                        }
                        trace!("tt line mismatch ply={ply} depth={depth}, searching");
                    }
                    Bound::Lower => alpha = alpha.max(entry.value),
                    Bound::Upper => beta = beta.min(entry.value),
                }
                if alpha >= beta {
                    trace!("tt cutoff ply={ply} depth={depth} value={}", entry.value);
                    self.stats.tt_cutoffs += 1;
                    return Ok(Line::leaf(entry.value));
                }
            }
        }

        // 決着済みの値は文脈に依存しないので置換表には書かない
        if let Some(value) = pos.terminal_value(nominal) {
            return Ok(Line::leaf(value));
        }

        if depth <= 0 {
            return Ok(Line::leaf(evaluate(pos, nominal)));
        }

        let moves: MoveList = if pos.side_to_move() == nominal {
            let moves = generate_moves(pos);
            if moves.is_empty() {
                return Ok(Line::leaf(evaluate(&pos.sweep_out_of_moves(), nominal)));
            }
            moves
        } else {
            smallvec![Move::PASS]
        };

        let mut best = self.search_moves(pos, &moves, depth, nominal, alpha, beta, ply)?;

        // 置換表の境界で狭めた窓から外れたのに元の窓には収まった値は、
        // 子の読み筋が打ち切られている可能性があるので元の窓で探索し直す
        let narrowed = alpha != alpha_orig || beta != beta_orig;
        if narrowed
            && alpha_orig < best.value
            && best.value < beta_orig
            && (best.value <= alpha || best.value >= beta)
        {
            trace!("re-search ply={ply} depth={depth} value={}", best.value);
            best = self.search_moves(pos, &moves, depth, nominal, alpha_orig, beta_orig, ply)?;
        }

        let bound = Bound::classify(best.value, alpha_orig, beta_orig);
        // 置換表には局面の手番側の視点で格納する。パスノードは続く本物の手を最善手とする
        let best_move = best.pv.iter().copied().find(|mv| !mv.is_pass());
        let stored = TTEntry::new(bound, best.value, depth, best_move)
            .viewed_from(nominal, pos.side_to_move());
        self.tt.store(*pos, stored.bound, stored.value, depth, stored.best_move);

        Ok(best)
    }

    /// 手を順に探索し、最善の値と読み筋を返す
    #[allow(clippy::too_many_arguments)]
    fn search_moves(
        &mut self,
        pos: &Position,
        moves: &MoveList,
        depth: Depth,
        nominal: Side,
        mut alpha: Value,
        beta: Value,
        ply: usize,
    ) -> Result<Line, Aborted> {
        let mut best = Line::leaf(-Value::INFINITE);
        for &mv in moves {
            let child_depth = if mv.is_pass() { depth } else { depth - 1 };
            let child = self.negamax(
                &pos.apply(mv),
                child_depth,
                nominal.opponent(),
                -beta,
                -alpha,
                ply + 1,
            )?;
            let value = -child.value;

            // 同値なら先に生成された手を残す
            if value > best.value {
                let mut pv = Vec::with_capacity(child.pv.len() + 1);
                pv.push(mv);
                pv.extend(child.pv);
                best = Line { value, pv };
            }
            if best.value > alpha {
                alpha = best.value;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }

    /// 置換表の最善手をたどって読み筋を組み立てる
    ///
    /// 探索と同じ規則（パスは深さを消費しない）で葉まで進め、葉の値を
    /// `nominal` 側の視点で返す。途中で十分な深さのエントリや最善手が
    /// 見つからなければ `None`。
    fn table_line(&self, pos: &Position, depth: Depth, nominal: Side) -> Option<Line> {
        let mut pos = *pos;
        let mut depth = depth;
        let mut nominal = nominal;
        let mut negate = false;
        let mut pv = Vec::new();

        let leaf = loop {
            if let Some(value) = pos.terminal_value(nominal) {
                break value;
            }
            if depth <= 0 {
                break evaluate(&pos, nominal);
            }
            let mv = if pos.side_to_move() != nominal {
                Move::PASS
            } else if !pos.has_moves() {
                break evaluate(&pos.sweep_out_of_moves(), nominal);
            } else {
                let mv = self.tt.probe(&pos, depth)?.best_move?;
                if !pos.is_legal(mv) {
                    return None;
                }
                depth -= 1;
                mv
            };
            pv.push(mv);
            pos = pos.apply(mv);
            nominal = nominal.opponent();
            negate = !negate;
        };

        let value = if negate { -leaf } else { leaf };
        Some(Line { value, pv })
    }
}
