//! 探索結果の出力

use std::io::{self, Write};

use rmancala_core::movegen::generate_moves;
use rmancala_core::search::{DeepeningResult, SearchStats, StopReason};
use rmancala_core::{Depth, Move, Position, Value};
use serde::Serialize;

/// 読み筋を `[m1 m2 ...]` の形に整形
pub fn format_pv(pv: &[Move]) -> String {
    let moves: Vec<String> = pv.iter().map(Move::to_string).collect();
    format!("[{}]", moves.join(" "))
}

/// 最善手を指した後の局面で、次に指せる手とその結果
#[derive(Debug, Serialize)]
pub struct Reply {
    #[serde(rename = "move")]
    pub mv: Move,
    pub position: Position,
}

/// 最終報告
#[derive(Debug, Serialize)]
pub struct Report {
    pub position: Position,
    /// 最後に完了した深さ（深さ0の途中で中断された場合は `None`）
    pub depth: Option<Depth>,
    pub value: Option<Value>,
    pub pv: Vec<Move>,
    pub best_move: Option<Move>,
    pub result_position: Option<Position>,
    pub replies: Vec<Reply>,
    pub stop_reason: StopReason,
    pub nodes: u64,
    /// 置換表のヒット・カットオフ数と最大手数
    pub stats: SearchStats,
}

impl Report {
    pub fn new(root: &Position, result: &DeepeningResult) -> rmancala_core::Result<Report> {
        let best_move = result.best_move();
        let result_position = best_move.map(|mv| root.try_apply(mv)).transpose()?;
        let replies = result_position
            .map(|next| {
                generate_moves(&next)
                    .into_iter()
                    .map(|mv| Reply {
                        mv,
                        position: next.apply(mv),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Report {
            position: *root,
            depth: result.best.as_ref().map(|b| b.depth),
            value: result.best.as_ref().map(|b| b.result.value),
            pv: result
                .best
                .as_ref()
                .map(|b| b.result.pv.clone())
                .unwrap_or_default(),
            best_move,
            result_position,
            replies,
            stop_reason: result.reason,
            nodes: result.stats.nodes,
            stats: result.stats,
        })
    }

    /// テキスト形式で書き出す
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match (self.best_move, self.result_position) {
            (Some(mv), Some(next)) => {
                writeln!(out, "bestmove {mv} -> {next}")?;
                for reply in &self.replies {
                    writeln!(out, "  {}: {}", reply.mv, reply.position)?;
                }
            }
            _ => writeln!(out, "bestmove none")?,
        }
        Ok(())
    }
}
