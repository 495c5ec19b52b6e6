use beatlane::game::{
    BASE_SCORE_MAX, JudgeWindows, PlayResult, STREAK_THRESHOLD, ScoreBoard, multiplier,
    streak_active,
};

#[test]
fn test_multiplier_band_edges() {
    for (combo, expected) in [
        (0, 1),
        (5, 1),
        (6, 2),
        (9, 2),
        (10, 4),
        (13, 4),
        (14, 8),
        (17, 8),
        (18, 16),
        (100, 16),
    ] {
        assert_eq!(multiplier(combo), expected, "combo {combo}");
    }
}

#[test]
fn test_multiplier_is_pure() {
    // Same combo always gives the same multiplier, however many times or
    // in whatever order it is read.
    for combo in [0, 7, 12, 18, 40] {
        let first = multiplier(combo);
        for _ in 0..10 {
            assert_eq!(multiplier(combo), first);
        }
    }
}

#[test]
fn test_streak_threshold() {
    assert!(!streak_active(STREAK_THRESHOLD - 1));
    assert!(streak_active(STREAK_THRESHOLD));
    assert!(streak_active(STREAK_THRESHOLD + 1));
}

#[test]
fn test_combo_counts_hits_until_miss() {
    let mut board = ScoreBoard::new();

    for _ in 0..4 {
        board.add_hit(100);
    }
    assert_eq!(board.combo, 4);
    assert_eq!(board.max_combo, 4);

    board.add_miss();
    assert_eq!(board.combo, 0);
    assert_eq!(board.max_combo, 4);

    board.add_hit(100);
    assert_eq!(board.combo, 1);
    assert_eq!(board.max_combo, 4);
}

#[test]
fn test_hit_delta_uses_post_increment_combo() {
    let mut board = ScoreBoard::new();

    // Bring combo to 5: the sixth hit lands in the 2x band.
    for _ in 0..5 {
        board.add_hit(100);
    }
    assert_eq!(board.multiplier(), 1);

    let delta = board.add_hit(100);
    assert_eq!(board.combo, 6);
    assert_eq!(delta, 200);
    assert_eq!(board.multiplier(), 2);
}

#[test]
fn test_score_accumulates_deltas() {
    let mut board = ScoreBoard::new();
    let mut expected = 0u64;

    for _ in 0..25 {
        expected += board.add_hit(BASE_SCORE_MAX);
    }
    assert_eq!(board.score, expected);
    // Combo 25 sits in the 16x band.
    assert_eq!(board.multiplier(), 16);
    assert!(board.streak_active());
}

#[test]
fn test_miss_never_reduces_score() {
    let mut board = ScoreBoard::new();
    board.add_hit(100);
    let before = board.score;

    board.add_miss();
    assert_eq!(board.score, before);
    assert_eq!(board.miss_count, 1);
}

#[test]
fn test_board_accuracy() {
    let mut board = ScoreBoard::new();
    assert_eq!(board.accuracy(), 100.0);

    board.add_hit(100);
    board.add_hit(100);
    board.add_hit(100);
    board.add_miss();
    assert_eq!(board.accuracy(), 75.0);
}

#[test]
fn test_result_rank_thresholds() {
    let result = |hit_count, miss_count| PlayResult {
        hit_count,
        miss_count,
        ..Default::default()
    };

    assert_eq!(result(0, 0).rank(), "MAX");
    assert_eq!(result(100, 0).rank(), "MAX");
    assert_eq!(result(95, 5).rank(), "AAA");
    assert_eq!(result(90, 10).rank(), "AA");
    assert_eq!(result(80, 20).rank(), "A");
    assert_eq!(result(70, 30).rank(), "B");
    assert_eq!(result(60, 40).rank(), "C");
    assert_eq!(result(50, 50).rank(), "D");
    assert_eq!(result(49, 51).rank(), "F");
    assert_eq!(result(0, 100).rank(), "F");
}

#[test]
fn test_worst_in_window_hit_still_scores() {
    let windows = JudgeWindows::normal();
    let mut board = ScoreBoard::new();

    let base = windows.base_score(windows.hit_window_s);
    let delta = board.add_hit(base);
    assert!(delta >= 10);
}
