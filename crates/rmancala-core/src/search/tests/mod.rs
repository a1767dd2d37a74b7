//! search モジュールのテスト


use rand::RngCore;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

use crate::eval::evaluate;
use crate::movegen::generate_moves;
use crate::position::Position;
use crate::types::{Depth, Move, Side, Value};

pub(super) fn pos(side: Side, cells: [u8; 14]) -> Position {
    Position::new(side, cells).unwrap()
}

/// 読み筋を探索と同じ規則でたどる
///
/// 各手が合法であること（パスは名目上の手番と局面の手番が異なるときだけ）を検査し、
/// 読み筋が葉で終わっていればその葉の値（ルートの手番側視点）を返す。
/// 置換表カットオフで途切れていれば `None`。
pub(super) fn replay_pv(root: &Position, depth: Depth, pv: &[Move]) -> Option<Value> {
    let mut pos = *root;
    let mut nominal = root.side_to_move();
    let mut depth = depth;
    let mut sign = 1;

    for &mv in pv {
        assert!(pos.terminal_value(nominal).is_none(), "pv continues past a decided position");
        assert!(depth > 0, "pv continues past the horizon");
        if mv.is_pass() {
            assert_ne!(pos.side_to_move(), nominal, "pass on the nominal side's own turn");
        } else {
            assert_eq!(pos.side_to_move(), nominal, "real move on a pass turn");
            assert!(pos.is_legal(mv), "illegal pv move {mv} in {pos}");
            depth -= 1;
        }
        pos = pos.apply(mv);
        nominal = nominal.opponent();
        sign = -sign;
    }

    let leaf = if let Some(v) = pos.terminal_value(nominal) {
        v
    } else if depth <= 0 {
        evaluate(&pos, nominal)
    } else if pos.side_to_move() == nominal && !pos.has_moves() {
        evaluate(&pos.sweep_out_of_moves(), nominal)
    } else {
        return None;
    };
    Some(if sign == 1 { leaf } else { -leaf })
}

/// 置換表も枝刈りもない Negamax（探索と同じパスと深さの規則）
pub(super) fn plain_negamax(pos: &Position, depth: Depth, nominal: Side) -> Value {
    if let Some(value) = pos.terminal_value(nominal) {
        return value;
    }
    if depth <= 0 {
        return evaluate(pos, nominal);
    }
    if pos.side_to_move() != nominal {
        return -plain_negamax(pos, depth, nominal.opponent());
    }
    generate_moves(pos)
        .into_iter()
        .map(|mv| -plain_negamax(&pos.apply(mv), depth - 1, nominal.opponent()))
        .max()
        .unwrap_or_else(|| evaluate(&pos.sweep_out_of_moves(), nominal))
}

/// 初期局面からランダムに数手〜数十手進めた局面
pub(super) fn random_positions(seed: u64, count: usize) -> Vec<Position> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let mut pos = Position::initial(4).unwrap();
        let plies = 4 + rng.next_u32() as usize % 28;
        for _ in 0..plies {
            let moves = generate_moves(&pos);
            if pos.is_terminal() || moves.is_empty() {
                break;
            }
            pos = pos.apply(moves[rng.next_u32() as usize % moves.len()]);
        }
        positions.push(pos);
    }
    positions
}
