//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）。
//!
//! - `TTEntry`: エントリ（境界種別・値・残り深さ）
//! - `TranspositionTable`: 局面をそのままキーにするテーブル本体
//!
//! エントリは置換せず増え続ける。1回の反復深化の間だけ保持し、終わったら捨てる
//! （または `clear` する）。長時間動くプロセスに組み込む場合は呼び出しごとに消すこと。

mod entry;
mod table;

pub use entry::TTEntry;
pub use table::TranspositionTable;
