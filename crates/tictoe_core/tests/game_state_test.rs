//! Tests for the game state engine.

use proptest::prelude::*;
use tictoe_core::{
    CELL_COUNT, Cell, GameError, GameState, Grid, MoveResult, Outcome, Player, Position,
    evaluate_outcome,
};

fn play(state: &mut GameState, moves: &[isize]) {
    for &index in moves {
        state.apply_move(index).expect("Valid index");
    }
}

#[test]
fn test_top_row_win_for_x() {
    let mut state = GameState::new();
    play(&mut state, &[0, 3, 1, 4]);
    assert_eq!(state.outcome(), Outcome::InProgress);

    assert_eq!(state.apply_move(2), Ok(MoveResult::Placed(Player::X)));
    assert_eq!(evaluate_outcome(state.latest()), Outcome::Win(Player::X));
    assert_eq!(state.history_len(), 6);
}

#[test]
fn test_draw_on_ninth_move() {
    // X O X / X O O / O X X
    let mut state = GameState::new();
    play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert_eq!(state.outcome(), Outcome::InProgress);

    play(&mut state, &[8]);
    assert_eq!(state.outcome(), Outcome::Draw);
    assert!(state.latest().is_full());
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut state = GameState::new();
    play(&mut state, &[4]);
    let before = state.clone();

    assert_eq!(state.apply_move(4), Ok(MoveResult::Ignored));
    assert_eq!(state, before);
    assert_eq!(state.history_len(), 2);
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut state = GameState::new();
    play(&mut state, &[0]);
    let before = state.clone();

    assert_eq!(
        state.apply_move(-1),
        Err(GameError::InvalidIndex { index: -1 })
    );
    assert_eq!(
        state.apply_move(9),
        Err(GameError::InvalidIndex { index: 9 })
    );
    assert_eq!(state, before);
}

#[test]
fn test_restart_discards_history() {
    let mut state = GameState::new();
    play(&mut state, &[0, 3, 1]);
    state.restart();

    assert_eq!(state.history_len(), 1);
    assert_eq!(state.latest(), &Grid::new());
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state, GameState::new());
}

#[test]
fn test_terminal_grid_stays_terminal_until_restart() {
    let mut state = GameState::new();
    play(&mut state, &[0, 3, 1, 4, 2]);
    assert_eq!(state.outcome(), Outcome::Win(Player::X));

    // The engine does not restart on its own.
    assert_eq!(state.outcome(), Outcome::Win(Player::X));
    state.restart();
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_history_is_append_only_snapshots() {
    let mut state = GameState::new();
    play(&mut state, &[8, 0, 4]);

    let marks: Vec<usize> = state
        .history()
        .map(|grid| grid.cells().iter().filter(|c| c.mark().is_some()).count())
        .collect();
    assert_eq!(marks, vec![0, 1, 2, 3]);
    assert_eq!(state.history().last(), Some(state.latest()));
}

#[test]
fn test_triples_are_rows_then_columns_then_diagonals() {
    use Position::*;
    use tictoe_core::rules::TRIPLES;

    assert_eq!(TRIPLES.len(), 8);
    assert_eq!(TRIPLES[0], [TopLeft, TopCenter, TopRight]);
    assert_eq!(TRIPLES[2], [BottomLeft, BottomCenter, BottomRight]);
    assert_eq!(TRIPLES[3], [TopLeft, MiddleLeft, BottomLeft]);
    assert_eq!(TRIPLES[5], [TopRight, MiddleRight, BottomRight]);
    assert_eq!(TRIPLES[6], [TopLeft, Center, BottomRight]);
    assert_eq!(TRIPLES[7], [TopRight, Center, BottomLeft]);
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Marked(Player::X)),
        Just(Cell::Marked(Player::O)),
    ]
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    proptest::array::uniform9(cell_strategy()).prop_map(Grid::from_cells)
}

fn holds_triple(grid: &Grid, player: Player) -> bool {
    tictoe_core::rules::TRIPLES
        .iter()
        .any(|line| line.iter().all(|&pos| grid.get(pos) == Cell::Marked(player)))
}

proptest! {
    #[test]
    fn prop_turns_alternate_from_x(
        order in Just((0..CELL_COUNT).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let mut state = GameState::new();
        let mut expected = Player::X;
        for index in order {
            if state.outcome() != Outcome::InProgress {
                break;
            }
            prop_assert_eq!(state.current_player(), expected);
            prop_assert_eq!(
                state.apply_move(index as isize),
                Ok(MoveResult::Placed(expected))
            );
            expected = expected.opponent();
        }
    }

    #[test]
    fn prop_occupied_move_is_noop(moves in proptest::collection::vec(0usize..CELL_COUNT, 1..20)) {
        let mut state = GameState::new();
        for index in moves {
            let pos = Position::from_index(index).expect("In range");
            let before = state.clone();
            let result = state.apply_move(index as isize);
            if before.latest().is_empty(pos) {
                prop_assert_eq!(state.history_len(), before.history_len() + 1);
            } else {
                prop_assert_eq!(result, Ok(MoveResult::Ignored));
                prop_assert_eq!(&state, &before);
            }
        }
    }

    #[test]
    fn prop_outcome_matches_definition(grid in grid_strategy()) {
        match evaluate_outcome(&grid) {
            Outcome::Win(player) => prop_assert!(holds_triple(&grid, player)),
            Outcome::Draw => {
                prop_assert!(grid.is_full());
                prop_assert!(!holds_triple(&grid, Player::X));
                prop_assert!(!holds_triple(&grid, Player::O));
            }
            Outcome::InProgress => {
                prop_assert!(!grid.is_full());
                prop_assert!(!holds_triple(&grid, Player::X));
                prop_assert!(!holds_triple(&grid, Player::O));
            }
        }
    }
}
