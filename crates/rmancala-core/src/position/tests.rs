//! position モジュールのテスト

use super::*;

fn pos(side: Side, cells: [u8; NUM_CELLS]) -> Position {
    Position::new(side, cells).unwrap()
}

#[test]
fn test_initial_position() {
    let p = Position::initial(4).unwrap();
    assert_eq!(p.side_to_move(), Side::North);
    assert_eq!(p.total_seeds(), 48);
    assert_eq!(p.store(Side::North), 0);
    assert_eq!(p.store(Side::South), 0);
    assert_eq!(p.seeds_owned(Side::North), 24);
    assert_eq!(p.seeds_owned(Side::South), 24);
    assert!(!p.is_terminal());
}

#[test]
fn test_initial_position_too_many_seeds() {
    assert!(Position::initial(21).is_ok());
    assert_eq!(
        Position::initial(22),
        Err(PositionError::TooManySeeds { total: 264, max: 255 })
    );
}

#[test]
fn test_apply_single_seed_into_own_store_keeps_turn() {
    // 自分のストアの隣にある1個だけのピット
    let p = pos(Side::North, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    let q = p.apply(Move::sow(13));
    assert_eq!(q, pos(Side::North, [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
    assert_eq!(q.side_to_move(), Side::North);
    assert_eq!(q.total_seeds(), p.total_seeds());
}

#[test]
fn test_apply_ending_in_own_store() {
    let p = pos(Side::North, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0]);
    let q = p.apply(Move::sow(12));
    assert_eq!(q, pos(Side::North, [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
}

#[test]
fn test_apply_passes_turn() {
    let p = pos(Side::North, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0]);
    let q = p.apply(Move::sow(12));
    // 最後の1個は South のピットに入るので捕獲なし
    assert_eq!(q, pos(Side::South, [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
}

#[test]
fn test_apply_capture_north() {
    let p = pos(Side::North, [0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0]);
    let q = p.apply(Move::sow(11));
    // 13 に最後の1個 → 13 の1個と向かいの 1 の8個をストアへ
    assert_eq!(q, pos(Side::South, [9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0]));
    assert_eq!(q.total_seeds(), p.total_seeds());
}

#[test]
fn test_apply_capture_south() {
    let p = pos(Side::South, [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0]);
    let q = p.apply(Move::sow(1));
    assert_eq!(q, pos(Side::North, [0, 0, 1, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn test_apply_no_capture_on_non_empty_pit() {
    let p = pos(Side::South, [0, 2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0]);
    let q = p.apply(Move::sow(1));
    assert_eq!(q, pos(Side::North, [0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0]));
}

#[test]
fn test_apply_capture_with_empty_mirror() {
    let p = pos(Side::South, [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let q = p.apply(Move::sow(1));
    assert_eq!(q, pos(Side::North, [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]));
}

#[test]
fn test_apply_skips_opponent_store() {
    // South が 6 から9個: 7, 8..13, (0 は飛ばす), 1, 2
    let p = pos(Side::South, [0, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0]);
    let q = p.apply(Move::sow(6));
    // 2 は空だったので、2 の1個と向かいの 12 の1個を捕獲
    assert_eq!(q, pos(Side::North, [0, 1, 0, 0, 0, 0, 0, 3, 1, 1, 1, 1, 0, 1]));
    assert_eq!(q.store(Side::North), 0);
}

#[test]
fn test_apply_full_lap_ends_in_own_store() {
    // North が 13 から14個: 0, 1..6, (7 は飛ばす), 8..13, 0
    let p = pos(Side::North, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14]);
    let q = p.apply(Move::sow(13));
    assert_eq!(q, pos(Side::North, [2, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1]));
}

#[test]
fn test_apply_pass_is_identity() {
    let p = pos(Side::North, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(p.apply(Move::PASS), p);
}

#[test]
fn test_try_apply_rejects_illegal_moves() {
    let p = pos(Side::North, [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    // 相手のピット
    assert_eq!(
        p.try_apply(Move::sow(1)),
        Err(PositionError::IllegalMove {
            mv: Move::sow(1),
            position: p
        })
    );
    // 自分のストア
    assert!(p.try_apply(Move::sow(0)).is_err());
    // 空のピット
    assert!(p.try_apply(Move::sow(12)).is_err());
    assert!(p.try_apply(Move::sow(13)).is_ok());
    assert_eq!(p.try_apply(Move::PASS), Ok(p));
}

#[test]
fn test_terminal_value() {
    let undecided = pos(Side::North, [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0]);
    assert_eq!(undecided.terminal_value(Side::North), None);
    assert!(!undecided.is_terminal());

    let north_wins = pos(Side::North, [25, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0]);
    assert_eq!(north_wins.terminal_value(Side::North), Some(Value::WIN));
    assert_eq!(north_wins.terminal_value(Side::South), Some(-Value::WIN));

    let south_wins = pos(Side::South, [1, 0, 0, 0, 0, 0, 0, 28, 1, 0, 0, 0, 1, 0]);
    assert_eq!(south_wins.terminal_value(Side::South), Some(Value::WIN));
    assert_eq!(south_wins.terminal_value(Side::North), Some(-Value::WIN));
    assert!(south_wins.is_terminal());
}

#[test]
fn test_terminal_threshold_is_strict_majority() {
    // 48個中24個ずつ: 過半数ではない
    let tie = pos(Side::North, [24, 0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0]);
    assert_eq!(tie.terminal_value(Side::North), None);

    let one_more = pos(Side::North, [25, 0, 0, 0, 0, 0, 0, 23, 0, 0, 0, 0, 0, 0]);
    assert_eq!(one_more.terminal_value(Side::North), Some(Value::WIN));

    // 全ての種がストアにあって過半数を超える
    let all_in_store = pos(Side::South, [0, 0, 0, 0, 0, 0, 0, 48, 0, 0, 0, 0, 0, 0]);
    assert_eq!(all_in_store.terminal_value(Side::South), Some(Value::WIN));

    let empty = pos(Side::North, [0; NUM_CELLS]);
    assert_eq!(empty.terminal_value(Side::North), None);
}

#[test]
fn test_sweep_out_of_moves_goes_to_opponent() {
    let p = pos(Side::South, [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0]);
    assert!(!p.has_moves());
    assert_eq!(
        p.sweep_out_of_moves(),
        pos(Side::South, [3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    );

    let p = pos(Side::North, [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
    assert!(!p.has_moves());
    assert_eq!(
        p.sweep_out_of_moves(),
        pos(Side::North, [1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0])
    );
}

#[test]
fn test_from_args() {
    let cells = ["0", "4", "4", "4", "4", "4", "4", "0", "4", "4", "4", "4", "4", "4"];
    let p = Position::from_args("0", &cells).unwrap();
    assert_eq!(p, Position::initial(4).unwrap());

    // Display の出力をそのまま貼り付けた形式
    let pasted = ["[0", "4", "4", "4", "4", "4", "4", "0", "4", "4", "4", "4", "4", "4]"];
    assert_eq!(Position::from_args("0", &pasted).unwrap(), p);
}

#[test]
fn test_from_args_errors() {
    let short = ["0"; 13];
    assert_eq!(
        Position::from_args("0", &short),
        Err(PositionError::WrongCellCount {
            expected: 14,
            actual: 13
        })
    );

    let mut bad = ["0"; 14];
    bad[3] = "x";
    assert_eq!(
        Position::from_args("1", &bad),
        Err(PositionError::InvalidCell {
            index: 3,
            token: "x".to_string()
        })
    );

    bad[3] = "-1";
    assert!(matches!(
        Position::from_args("1", &bad),
        Err(PositionError::InvalidCell { index: 3, .. })
    ));

    assert_eq!(
        Position::from_args("2", &["0"; 14]),
        Err(PositionError::InvalidSide("2".to_string()))
    );

    assert!(matches!(
        Position::from_args("0", &["200"; 14]),
        Err(PositionError::TooManySeeds { .. })
    ));
}

#[test]
fn test_display_roundtrip() {
    // 10 の4個は 11, 12, 13, 0 に入り手番が続く
    let p = Position::initial(4).unwrap().apply(Move::sow(10));
    let text = p.to_string();
    assert_eq!(text, "0 [1 4 4 4 4 4 4 0 4 4 0 5 5 5]");

    let mut tokens = text.split_whitespace();
    let side = tokens.next().unwrap();
    let cells: Vec<&str> = tokens.collect();
    assert_eq!(Position::from_args(side, &cells).unwrap(), p);
}

#[test]
fn test_display_diagram() {
    let p = Position::initial(4).unwrap();
    let diagram = format!("{p:#}");
    let lines: Vec<&str> = diagram.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].trim(), "4  4  4  4  4  4");
    assert_eq!(lines[3], "to move: 0");
}
