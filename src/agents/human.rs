//! Human input: a text prompt over any `BufRead`/`Write` pair and the
//! click geometry of a graphical board.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Move, Side};
use crate::error::GomokuError;
use crate::rules::GameEnvironment;

use super::Agent;

/// Reads moves as `column row` lines.
///
/// Lists the legal moves, then re-prompts with `Invalid move` until a
/// line names an empty on-board cell. Malformed input never ends the
/// match; only a closed input stream does.
pub struct HumanAgent<G, R, W> {
    game: G,
    input: R,
    output: W,
}

impl<G, R, W> HumanAgent<G, R, W>
where
    G: GameEnvironment,
    R: BufRead,
    W: Write,
{
    pub fn new(game: G, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Release the output sink, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Why a line of input was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    OffBoard,
    Pass,
    Occupied,
}

fn parse_entry(line: &str, n: usize) -> Result<Move, Rejection> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [column, row] = tokens.as_slice() else {
        return Err(Rejection::Malformed);
    };
    let column: usize = column.parse().map_err(|_| Rejection::Malformed)?;
    let row: usize = row.parse().map_err(|_| Rejection::Malformed)?;
    if column == n && row == 0 {
        // Reserved out-of-band pair; this environment has no pass action.
        return Err(Rejection::Pass);
    }
    let mv = Move::new(column, row);
    if !mv.is_on_board(n) {
        return Err(Rejection::OffBoard);
    }
    Ok(mv)
}

impl<G, R, W> Agent<G::Board> for HumanAgent<G, R, W>
where
    G: GameEnvironment,
    R: BufRead,
    W: Write,
{
    fn choose(&mut self, canonical: &G::Board) -> Result<usize, GomokuError> {
        let (n, _) = self.game.board_size();
        let valids = self.game.valid_moves(canonical, Side::First);

        for (action, _) in valids.iter().enumerate().filter(|(_, &valid)| valid) {
            write!(self.output, "[ {} {}] ", action / n, action % n)?;
        }
        writeln!(self.output)?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GomokuError::InputClosed);
            }
            let rejection = match parse_entry(&line, n) {
                Ok(mv) => {
                    let action = mv.to_action(n);
                    if valids[action] {
                        return Ok(action);
                    }
                    Rejection::Occupied
                }
                Err(rejection) => rejection,
            };
            warn!(input = line.trim_end(), ?rejection, "rejected human move");
            writeln!(self.output, "Invalid move")?;
            self.output.flush()?;
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Screen geometry of a graphical board: grid lines start `margin`
/// pixels in and are `cell_size` pixels apart.
///
/// A click maps to the nearest intersection. The vertical pixel axis
/// selects the column and the horizontal one the row, matching the text
/// display where each printed line is one column index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerGeometry {
    pub margin: f64,
    pub cell_size: f64,
}

impl PointerGeometry {
    /// # Panics
    ///
    /// Panics if `cell_size` is not positive.
    #[must_use]
    pub fn new(margin: f64, cell_size: f64) -> Self {
        assert!(cell_size > 0.0, "Cell size must be positive");
        Self { margin, cell_size }
    }

    fn axis(&self, pixel: f64) -> Option<usize> {
        let index = ((pixel - self.margin) / self.cell_size).round();
        (index.is_finite() && index >= 0.0).then_some(index as usize)
    }

    /// The board coordinate under a click, or `None` off the board.
    #[must_use]
    pub fn to_move(&self, x: f64, y: f64, n: usize) -> Option<Move> {
        let mv = Move::new(self.axis(y)?, self.axis(x)?);
        mv.is_on_board(n).then_some(mv)
    }

    /// The action under a click, or `None` off the board.
    #[must_use]
    pub fn to_action(&self, x: f64, y: f64, n: usize) -> Option<usize> {
        self.to_move(x, y, n).map(|mv| mv.to_action(n))
    }

    /// Pixel centre `(x, y)` of a board coordinate.
    #[must_use]
    pub fn to_pixel(&self, mv: Move) -> (f64, f64) {
        (
            self.margin + mv.row as f64 * self.cell_size,
            self.margin + mv.column as f64 * self.cell_size,
        )
    }
}

impl Default for PointerGeometry {
    fn default() -> Self {
        Self {
            margin: 20.0,
            cell_size: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::games::GomokuGame;
    use std::io::Cursor;

    fn human(input: &str) -> HumanAgent<GomokuGame, Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new(GomokuGame::new(3), Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(agent: HumanAgent<GomokuGame, Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(agent.into_output()).unwrap()
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("1 2\n", 3), Ok(Move::new(1, 2)));
        assert_eq!(parse_entry("  0   0 ", 3), Ok(Move::new(0, 0)));
        assert_eq!(parse_entry("1\n", 3), Err(Rejection::Malformed));
        assert_eq!(parse_entry("1 2 3\n", 3), Err(Rejection::Malformed));
        assert_eq!(parse_entry("a b\n", 3), Err(Rejection::Malformed));
        assert_eq!(parse_entry("-1 0\n", 3), Err(Rejection::Malformed));
        assert_eq!(parse_entry("3 1\n", 3), Err(Rejection::OffBoard));
        assert_eq!(parse_entry("3 0\n", 3), Err(Rejection::Pass));
    }

    #[test]
    fn test_lists_legal_moves() {
        let game = GomokuGame::new(3);
        let (board, _) = game.next_state(&game.init_board(), Side::First, 0).unwrap();
        let mut agent = human("2 1\n");
        assert_eq!(agent.choose(&board).unwrap(), 7);

        let out = transcript(agent);
        assert!(out.starts_with("[ 0 1] [ 0 2] [ 1 0] "));
        assert!(out.ends_with("[ 2 2] \n"));
        assert!(!out.contains("[ 0 0]"));
        assert!(!out.contains("Invalid move"));
    }

    #[test]
    #[should_panic(expected = "Board is 5x5, expected 3x3")]
    fn test_rejects_board_of_other_size() {
        let mut agent = human("4 4\n");
        let _ = agent.choose(&Board::new(5));
    }

    #[test]
    fn test_reprompts_until_legal() {
        let game = GomokuGame::new(3);
        let (board, _) = game.next_state(&game.init_board(), Side::First, 4).unwrap();
        let mut agent = human("hello\n9 9\n3 0\n1 1\n0 2\n");
        assert_eq!(agent.choose(&board).unwrap(), 2);
        assert_eq!(transcript(agent).matches("Invalid move").count(), 4);
    }

    #[test]
    fn test_input_closed() {
        let mut agent = human("x\n");
        assert!(matches!(
            agent.choose(&Board::new(3)),
            Err(GomokuError::InputClosed)
        ));
    }

    #[test]
    fn test_pointer_maps_nearest_intersection() {
        let geometry = PointerGeometry::new(20.0, 40.0);
        assert_eq!(geometry.to_move(20.0, 20.0, 15), Some(Move::new(0, 0)));
        // x selects the row, y the column
        assert_eq!(geometry.to_move(100.0, 20.0, 15), Some(Move::new(0, 2)));
        assert_eq!(geometry.to_move(20.0, 100.0, 15), Some(Move::new(2, 0)));
        assert_eq!(geometry.to_move(118.0, 61.0, 15), Some(Move::new(1, 2)));
        assert_eq!(geometry.to_action(100.0, 20.0, 15), Some(2));
    }

    #[test]
    fn test_pointer_off_board() {
        let geometry = PointerGeometry::default();
        assert_eq!(geometry.to_move(-40.0, 20.0, 15), None);
        assert_eq!(geometry.to_move(20.0, 20.0 + 15.0 * 40.0, 15), None);
        assert_eq!(geometry.to_move(f64::NAN, 20.0, 15), None);
    }

    #[test]
    fn test_pointer_round_trip() {
        let geometry = PointerGeometry::default();
        for action in 0..25 {
            let mv = Move::from_action(action, 5);
            let (x, y) = geometry.to_pixel(mv);
            assert_eq!(geometry.to_action(x, y, 5), Some(action));
        }
    }
}
