//! Property tests for the validity predicate, board transforms, rotation and scoring.

use blockfall::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use blockfall::game::board::{clear_lines, empty_board, is_row_full, is_valid, merge};
use blockfall::game::piece::{rotate, Shape};
use blockfall::game::{Board, Cell, Command, Game, GameStatus, Piece, PieceType};
use blockfall::GameConfig;
use proptest::prelude::*;
use ratatui::style::Color;

fn board_from(cells: &[Vec<bool>]) -> Board {
    let mut board = empty_board();
    for (y, row) in cells.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            if filled {
                board[y][x] = Cell::Filled(Color::Gray);
            }
        }
    }
    board
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(
        prop::collection::vec(prop::bool::weighted(0.3), BOARD_WIDTH),
        BOARD_HEIGHT,
    )
    .prop_map(|cells| board_from(&cells))
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
    })
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (0usize..7, 0usize..4, -4i32..12, -4i32..22).prop_map(|(kind, turns, x, y)| {
        let mut piece = Piece::spawn(PieceType::from_index(kind));
        for _ in 0..turns {
            piece = piece.rotated();
        }
        piece.x = x;
        piece.y = y;
        piece
    })
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::SoftDrop),
        Just(Command::Rotate),
        Just(Command::HardDrop),
        Just(Command::TogglePause),
        Just(Command::Start),
    ]
}

proptest! {
    #[test]
    fn validity_matches_cellwise_definition(piece in piece_strategy(), board in board_strategy()) {
        let expected = piece.get_blocks().iter().all(|&(x, y)| {
            let in_columns = (0..BOARD_WIDTH as i32).contains(&x);
            let above_floor = y < BOARD_HEIGHT as i32;
            let free = y < 0
                || !in_columns
                || !above_floor
                || board[y as usize][x as usize] == Cell::Empty;
            in_columns && above_floor && free
        });
        prop_assert_eq!(is_valid(&piece, &board), expected);
    }

    #[test]
    fn merge_leaves_input_untouched(piece in piece_strategy(), board in board_strategy()) {
        let before = board;
        let merged = merge(&piece, &board);
        prop_assert_eq!(board, before);
        for (x, y) in piece.get_blocks() {
            if (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y) {
                prop_assert_eq!(merged[y as usize][x as usize], Cell::Filled(piece.color));
            }
        }
    }

    #[test]
    fn rotating_four_times_is_identity(shape in shape_strategy()) {
        let turned = rotate(&rotate(&rotate(&rotate(&shape))));
        prop_assert_eq!(turned, shape);
    }

    #[test]
    fn clear_lines_removes_exactly_full_rows(
        full_rows in prop::collection::btree_set(0usize..BOARD_HEIGHT, 0..=4),
        board in board_strategy(),
        gaps in prop::collection::vec(0usize..BOARD_WIDTH, BOARD_HEIGHT),
    ) {
        let mut board = board;
        for y in 0..BOARD_HEIGHT {
            if full_rows.contains(&y) {
                board[y] = [Cell::Filled(Color::Gray); BOARD_WIDTH];
            } else {
                board[y][gaps[y]] = Cell::Empty;
            }
        }
        let kept: Vec<_> = board.iter().filter(|row| !is_row_full(row)).copied().collect();

        let (cleared, count) = clear_lines(&board);

        let k = full_rows.len();
        prop_assert_eq!(count as usize, k);
        prop_assert_eq!(cleared.len(), BOARD_HEIGHT);
        prop_assert!(cleared[..k].iter().flatten().all(|&c| c == Cell::Empty));
        prop_assert_eq!(&cleared[k..], &kept[..]);
    }

    #[test]
    fn counters_stay_consistent_over_play(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 1..200),
    ) {
        let mut game = Game::new(&GameConfig::seeded(seed));
        game.handle(Command::Start);
        let mut now = 0;

        for command in commands {
            let (score, level) = (game.score(), game.level());
            let restarted = command == Command::Start && game.status() == GameStatus::GameOver;

            game.handle(command);
            now += 250;
            game.tick(now);

            prop_assert_eq!(game.level(), game.lines() / 10 + 1);
            if !restarted {
                prop_assert!(game.score() >= score);
                prop_assert!(game.level() >= level);
            }
            prop_assert_eq!(game.current_piece().is_some(), game.status() != GameStatus::GameOver);
            if let Some(piece) = game.current_piece() {
                prop_assert!(is_valid(piece, game.board()));
            }
        }
    }
}
