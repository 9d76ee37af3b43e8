use super::types::{cell_to_col, cell_to_row, row_col_to_cell};
use super::{Board, Move};

/// Cell jumped over when hopping from `from` to `to`.
#[inline]
fn midpoint(from: usize, to: usize) -> usize {
    let row = (cell_to_row(from) + cell_to_row(to)) / 2;
    let col = (cell_to_col(from) + cell_to_col(to)) / 2;
    row_col_to_cell(row, col)
}

impl Board {
    /// Apply a move in place and pass the turn.
    ///
    /// The move is assumed legal for this position. Captured pieces are
    /// removed hop by hop; a man is crowned only if its final landing cell
    /// is on its promotion row. Protocol sentinels and moves starting from
    /// an empty cell leave the board untouched.
    pub fn do_move(&mut self, mv: &Move) {
        let (from, to) = match mv {
            Move::Normal { from, to } => (*from as usize, *to as usize),
            Move::Jump(chain) => {
                let cells = chain.cells();
                (cells[0] as usize, cells[cells.len() - 1] as usize)
            }
            Move::EndOfGame(_) | Move::BeginOfGame | Move::Null => return,
        };
        let Some(mut piece) = self.cells[from] else {
            return;
        };

        if let Move::Jump(chain) = mv {
            for hop in chain.cells().windows(2) {
                self.set_piece(midpoint(hop[0] as usize, hop[1] as usize), None);
            }
        }
        if Board::is_promotion_cell(piece, to) {
            piece = piece.crowned();
        }
        self.set_piece(from, None);
        self.set_piece(to, Some(piece));
        self.side_to_move = self.side_to_move.opponent();
    }

    /// A copy of this board with `mv` applied.
    #[must_use]
    pub fn copy_and_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.do_move(mv);
        next
    }
}
