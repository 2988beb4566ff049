// SPDX-License-Identifier: MIT OR Apache-2.0

use goban_core::{
    rules, Board, Color, Coord, Game, GameConfig, GameError, GameOverReason, GameStatus, Piece,
};

fn board(json: &str) -> Board {
    serde_json::from_str(json).expect("fixture should be a square grid")
}

fn game_from(json: &str, first_player: Color) -> Game {
    let config = GameConfig {
        first_player,
        ..GameConfig::default()
    };
    Game::from_board(board(json), config).unwrap()
}

const KO_FIXTURE: &str = "[
    [0,0,0,0,0,0,0],
    [0,0,0,0,0,0,0],
    [0,0,1,2,0,0,0],
    [0,1,2,0,2,0,0],
    [0,0,1,2,0,0,0],
    [0,0,0,0,0,0,0],
    [0,0,0,0,0,0,0]
]";

#[test]
fn surrounded_single_stone_fixture() {
    let b = board(
        "[
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,1,2,0,0,0],
        [0,1,2,1,0,0,0],
        [0,0,1,2,0,0,0],
        [0,0,2,0,0,0,0],
        [0,0,0,0,0,0,0]
    ]",
    );
    let dead = rules::enclosed_groups(&b, Piece::Black, Piece::White);
    assert_eq!(dead.len(), 1);
    assert_eq!(dead[0].len(), 1);
    assert_eq!(dead[0].stones[0], Coord::new(3, 2));
}

#[test]
fn ko_recapture_is_rejected() {
    let mut game = game_from(KO_FIXTURE, Color::White);

    let outcome = game.apply_move(3, 3).unwrap();
    assert_eq!(outcome.captured, vec![Coord::new(3, 2)]);
    assert_eq!(game.current_player(), Color::Black);

    let before = game.snapshot();
    let history_len = game.history().len();

    assert_eq!(game.apply_move(3, 2), Err(GameError::KoViolation));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.history().len(), history_len);
}

#[test]
fn ko_can_be_retaken_after_a_move_elsewhere() {
    let mut game = game_from(KO_FIXTURE, Color::White);
    game.apply_move(3, 3).unwrap();
    game.apply_move(3, 2).unwrap_err();

    game.apply_move(6, 6).unwrap(); // Black plays elsewhere
    game.apply_move(0, 0).unwrap(); // White answers elsewhere

    let outcome = game.apply_move(3, 2).unwrap();
    assert_eq!(outcome.captured, vec![Coord::new(3, 3)]);
}

#[test]
fn occupied_by_opponent() {
    let mut game = Game::with_size(7).unwrap();
    game.apply_move(0, 0).unwrap();
    let before = game.snapshot();

    assert_eq!(
        game.apply_move(0, 0),
        Err(GameError::Occupied { row: 0, col: 0 })
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn replaying_onto_own_stone_is_not_reported_as_occupied() {
    // Only opponent stones trigger `Occupied`. Dropping a stone onto one of
    // your own changes nothing on the board, so the stone count does not grow
    // and the move falls through to the suicide check.
    let mut game = Game::with_size(7).unwrap();
    game.apply_move(3, 3).unwrap();
    game.apply_move(0, 0).unwrap();
    let before = game.snapshot();

    assert_eq!(game.apply_move(3, 3), Err(GameError::SuicideViolation));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn suicide_is_rolled_back() {
    let mut game = game_from(
        "[
        [0,1,0,0,0,0,0],
        [1,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0]
    ]",
        Color::Black,
    );
    let before = game.snapshot();

    assert_eq!(game.apply_move(0, 0), Err(GameError::SuicideViolation));
    assert_eq!(game.snapshot(), before);
    assert!(game.history().is_empty());
    assert_eq!(game.board().get(0, 0).unwrap(), Piece::Empty);
}

#[test]
fn capturing_move_without_liberties_is_legal() {
    let mut game = game_from(
        "[
        [0,2,1,0,0,0,0],
        [2,1,0,0,0,0,0],
        [1,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0]
    ]",
        Color::White,
    );

    let mut outcome = game.apply_move(0, 0).unwrap();
    outcome.captured.sort();
    assert_eq!(outcome.captured, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    assert_eq!(outcome.players.black.stones(), 0);
    assert_eq!(outcome.players.white.stones(), 4);
}

#[test]
fn multi_group_capture_and_score() {
    let mut game = game_from(
        "[
        [2,0,2,1,0,0,0],
        [1,0,1,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,0],
        [0,0,0,0,0,0,2]
    ]",
        Color::White,
    );
    assert_eq!(game.players().black.stones(), 3);

    let mut outcome = game.apply_move(0, 1).unwrap();
    outcome.captured.sort();
    assert_eq!(outcome.captured, vec![Coord::new(0, 0), Coord::new(0, 2)]);

    // White walls in (0,0) and (0,2); the open area also touches Black at (6,6)
    let white = &outcome.players.white;
    let black = &outcome.players.black;
    assert_eq!((white.stones(), white.score()), (4, 2 + 4));
    assert_eq!((black.stones(), black.score()), (1, 1));
    assert_eq!(white.score(), rules::score(&outcome.board, Color::White));
}

#[test]
fn no_capture_without_adjacent_opponent() {
    let mut game = Game::with_size(7).unwrap();
    for (row, col) in [(3, 3), (0, 0), (3, 4), (6, 6)] {
        let outcome = game.apply_move(row, col).unwrap();
        assert!(outcome.captured.is_empty());
    }
}

#[test]
fn two_passes_end_the_game() {
    let mut game = Game::with_size(7).unwrap();
    assert_eq!(game.pass(), Ok(Color::Black));
    assert_eq!(
        game.pass(),
        Err(GameError::GameOver(GameOverReason::ConsecutivePasses))
    );
    assert_eq!(
        game.status(),
        GameStatus::GameOver(GameOverReason::ConsecutivePasses)
    );
    assert_eq!(
        game.apply_move(0, 0),
        Err(GameError::GameOver(GameOverReason::ConsecutivePasses))
    );
    assert!(game.tick().is_err());
}

#[test]
fn placement_resets_pass_count() {
    let mut game = Game::with_size(7).unwrap();
    game.pass().unwrap();
    game.apply_move(2, 2).unwrap(); // Black
    assert_eq!(game.pass(), Ok(Color::Black)); // White passes
    assert!(!game.is_over());
}

#[test]
fn rejected_move_keeps_pass_count() {
    let mut game = Game::with_size(7).unwrap();
    game.apply_move(0, 0).unwrap();
    game.pass().unwrap(); // Black
    game.apply_move(9, 9).unwrap_err(); // White, off the board
    assert!(game.pass().is_err());
}

#[test]
fn clock_runs_down_for_the_player_to_move() {
    let config = GameConfig {
        time_budget_secs: 3,
        ..GameConfig::default()
    };
    let mut game = Game::new(config).unwrap();

    let players = game.tick().unwrap();
    assert_eq!(players.white.time_remaining(), 2);
    assert_eq!(players.black.time_remaining(), 3);

    game.apply_move(1, 1).unwrap();
    let players = game.tick().unwrap();
    assert_eq!(players.black.time_remaining(), 2);

    game.apply_move(5, 5).unwrap();
    game.tick().unwrap();
    assert_eq!(
        game.tick(),
        Err(GameError::GameOver(GameOverReason::TimeExpired(Color::White)))
    );
    assert!(game.is_over());
    assert!(game.winner().is_ok());
}

#[test]
fn winner_is_higher_score() {
    let mut game = Game::with_size(7).unwrap();
    game.pass().unwrap(); // White
    game.apply_move(3, 3).unwrap(); // Black takes the whole empty board
    game.pass().unwrap(); // White
    game.pass().unwrap_err(); // Black

    let winner = game.winner().unwrap();
    assert_eq!(winner.color(), Color::Black);
    assert_eq!(winner.score(), 49);
}

#[test]
fn reset_restores_empty_board() {
    let mut game = Game::with_size(7).unwrap();
    game.apply_move(0, 0).unwrap();
    game.apply_move(1, 1).unwrap();
    game.tick().unwrap();
    game.pass().unwrap();
    game.pass().unwrap_err();

    let snapshot = game.reset();
    assert!(snapshot.board.is_empty());
    assert_eq!(snapshot.current_player, Color::White);
    assert_eq!(snapshot.status, GameStatus::AwaitingMove);
    assert_eq!(snapshot.players.white.time_remaining(), 120);
    assert_eq!(snapshot.players.black.stones(), 0);
    assert!(game.history().is_empty());
    assert!(game.apply_move(0, 0).is_ok());
}

#[test]
fn reset_restores_starting_position() {
    let mut game = game_from(KO_FIXTURE, Color::White);
    let initial = game.snapshot();
    game.apply_move(3, 3).unwrap();
    assert_eq!(game.reset(), initial);
}

#[test]
fn ragged_fixture_is_rejected() {
    let result: Result<Board, _> = serde_json::from_str("[[0,0],[0]]");
    assert!(result.is_err());
    let result: Result<Board, _> = serde_json::from_str("[[0,3],[0,0]]");
    assert!(result.is_err());
}

#[test]
fn snapshot_serialises_board_as_rows() {
    let mut game = Game::with_size(2).unwrap();
    game.apply_move(0, 1).unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["board"], serde_json::json!([[0, 1], [0, 0]]));
    assert_eq!(json["current_player"], "Black");
}
