//! N-Queens backtracking as a replayable step trace.

use serde::Serialize;

/// What happened in a backtracking step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueensAction {
    Start,
    Place,
    Remove,
    Solution,
}

/// One board snapshot. `board[row][col]` is `true` where a queen stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueensStep {
    pub board: Vec<Vec<bool>>,
    pub row: Option<usize>,
    pub col: Option<usize>,
    pub action: QueensAction,
    pub description: String,
}

/// Trace the first solution search for `n` queens on an `n x n` board.
///
/// Queens are placed row by row, trying columns left to right; a dead end
/// removes the last queen. The trace ends with a `Solution` step, or with
/// the last `Remove` step when the board has no solution (n = 2 or 3).
pub fn trace_n_queens(n: usize) -> Vec<QueensStep> {
    let mut board = vec![vec![false; n]; n];
    let mut steps = vec![QueensStep {
        board: board.clone(),
        row: Some(0),
        col: Some(0),
        action: QueensAction::Start,
        description: "Starting with an empty board".to_string(),
    }];
    solve(&mut board, 0, &mut steps);
    steps
}

fn solve(board: &mut [Vec<bool>], row: usize, steps: &mut Vec<QueensStep>) -> bool {
    let n = board.len();
    if row == n {
        steps.push(QueensStep {
            board: board.to_vec(),
            row: None,
            col: None,
            action: QueensAction::Solution,
            description: "Found a solution!".to_string(),
        });
        return true;
    }

    for col in 0..n {
        if !is_safe(board, row, col) {
            continue;
        }
        board[row][col] = true;
        steps.push(QueensStep {
            board: board.to_vec(),
            row: Some(row),
            col: Some(col),
            action: QueensAction::Place,
            description: format!("Placing queen at position ({}, {})", row, col),
        });

        if solve(board, row + 1, steps) {
            return true;
        }

        board[row][col] = false;
        steps.push(QueensStep {
            board: board.to_vec(),
            row: Some(row),
            col: Some(col),
            action: QueensAction::Remove,
            description: format!("Backtracking: removing queen from ({}, {})", row, col),
        });
    }
    false
}

/// Only rows above `row` hold queens, so only upward lines need checking.
fn is_safe(board: &[Vec<bool>], row: usize, col: usize) -> bool {
    let n = board.len();
    (0..row).all(|r| {
        let up = row - r;
        !board[r][col]
            && !(col >= up && board[r][col - up])
            && !(col + up < n && board[r][col + up])
    })
}
