//! Tests for win detection.

use mnk_tictactoe::{Board, BoardSize, Cell, LineSet, Mark, find_winner};

fn board(rows: usize, columns: usize, layout: &str) -> Board {
    let size = BoardSize::new(rows, columns).unwrap();
    let cells = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Cell::Occupied(Mark::X),
            'O' => Cell::Occupied(Mark::O),
            _ => Cell::Empty,
        })
        .collect();
    Board::from_cells(size, cells).unwrap()
}

#[test]
fn test_top_row_win() {
    let board = board(3, 3, "XXX ... ...");
    let lines = LineSet::new(board.size());
    let win = find_winner(&board, &lines, 3).unwrap();
    assert_eq!(*win.mark(), Mark::X);
    assert_eq!(win.cells(), &vec![0, 1, 2]);
}

#[test]
fn test_all_empty_board_has_no_winner() {
    let board = board(4, 5, &".".repeat(20));
    let lines = LineSet::new(board.size());
    for k in 1..=6 {
        assert!(find_winner(&board, &lines, k).is_none());
    }
}

#[test]
fn test_interrupted_row_does_not_win() {
    // Top row X O X is broken by O; second row X X X wins.
    let board = board(3, 3, "XOX XXX ...");
    let lines = LineSet::new(board.size());
    let win = find_winner(&board, &lines, 3).unwrap();
    assert_eq!(*win.mark(), Mark::X);
    assert_eq!(win.cells(), &vec![3, 4, 5]);
}

#[test]
fn test_interrupted_row_alone_is_no_win() {
    let board = board(3, 3, "XOX XX. ...");
    let lines = LineSet::new(board.size());
    assert!(find_winner(&board, &lines, 3).is_none());
}

#[test]
fn test_falling_diagonal_win() {
    let board = board(3, 3, "..O .O. O..");
    let lines = LineSet::new(board.size());
    let win = find_winner(&board, &lines, 3).unwrap();
    assert_eq!(*win.mark(), Mark::O);
    assert_eq!(win.cells(), &vec![2, 4, 6]);
}

#[test]
fn test_short_diagonal_on_large_board() {
    // 4x5 board, k=3, run on the rising diagonal starting at (1, 0).
    let board = board(
        4,
        5,
        "
        .....
        X....
        .X...
        ..X..
        ",
    );
    let lines = LineSet::new(board.size());
    let win = find_winner(&board, &lines, 3).unwrap();
    assert_eq!(win.cells(), &vec![5, 11, 17]);
}

#[test]
fn test_win_length_beyond_board_never_wins() {
    let board = board(3, 3, "XXX XXX XXX");
    let lines = LineSet::new(board.size());
    assert!(find_winner(&board, &lines, 4).is_none());
}

#[test]
fn test_simultaneous_wins_report_vertical_first() {
    // X completes both column 0 and row 0.
    let board = board(3, 3, "XXX X.. X..");
    let lines = LineSet::new(board.size());
    let win = find_winner(&board, &lines, 3).unwrap();
    assert_eq!(win.cells(), &vec![0, 3, 6]);
}

#[test]
fn test_falling_reported_before_rising() {
    let board = board(3, 3, "X.X .X. X.X");
    let lines = LineSet::new(board.size());
    let win = find_winner(&board, &lines, 3).unwrap();
    assert_eq!(win.cells(), &vec![2, 4, 6]);
}
