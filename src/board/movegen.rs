//! Legal move generation under the forced-capture rule.

use super::tables::{directions, JUMPS, STEPS};
use super::types::Chain;
use super::{Board, Move, Piece, NUM_CELLS};

type Cells = [Option<Piece>; NUM_CELLS];

/// Depth-first search for maximal capture chains starting at `from`.
///
/// Captured pieces are lifted off `cells` while the continuation is explored
/// and put back before trying the next direction, so `cells` is unchanged on
/// return. A chain is emitted only where no further capture exists and at
/// least one hop was taken. Returns true if any capture was available from
/// `from`.
fn collect_jumps(
    cells: &mut Cells,
    piece: Piece,
    from: usize,
    chain: &mut Chain,
    out: &mut Vec<Move>,
) -> bool {
    let mut found = false;

    for &dir in directions(piece) {
        let Some((over, land)) = JUMPS[from][dir] else {
            continue;
        };
        let (over, land) = (over as usize, land as usize);
        let Some(captured) = cells[over].filter(|p| p.side != piece.side) else {
            continue;
        };
        if cells[land].is_some() {
            continue;
        }

        found = true;
        cells[over] = None;
        chain.push(land as u8);
        collect_jumps(cells, piece, land, chain, out);
        chain.pop();
        cells[over] = Some(captured);
    }

    if !found && chain.jumps() > 0 {
        out.push(Move::Jump(*chain));
    }
    found
}

impl Board {
    /// All legal moves for the side to move.
    ///
    /// If any capture exists only maximal capture chains are returned,
    /// shortest first; otherwise every one-step diagonal move. Men move
    /// toward the opponent's back row, kings in all four directions.
    #[must_use]
    pub fn find_possible_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let mut scratch = self.cells;
        let mut jumps = Vec::new();
        let mut movers: Vec<(usize, Piece)> = Vec::with_capacity(12);

        for cell in 0..NUM_CELLS {
            let Some(piece) = scratch[cell].filter(|p| p.side == side) else {
                continue;
            };
            let mut chain = Chain::start(cell as u8);
            let captured = collect_jumps(&mut scratch, piece, cell, &mut chain, &mut jumps);
            if !captured && jumps.is_empty() {
                movers.push((cell, piece));
            }
        }
        debug_assert_eq!(scratch, self.cells, "capture search must restore the board");

        if !jumps.is_empty() {
            jumps.sort_by_key(Move::number_of_jumps);
            return jumps;
        }

        let mut moves = Vec::with_capacity(movers.len() * 2);
        for (cell, piece) in movers {
            for &dir in directions(piece) {
                if let Some(to) = STEPS[cell][dir] {
                    if self.cells[to as usize].is_none() {
                        moves.push(Move::normal(cell as u8, to));
                    }
                }
            }
        }
        moves
    }

    /// True if the side to move has no legal move.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.find_possible_moves().is_empty()
    }

    /// [`Board::game_over`] for an already generated move list.
    #[inline]
    #[must_use]
    pub fn game_over_with(&self, moves: &[Move]) -> bool {
        moves.is_empty()
    }

    /// Count leaf positions `depth` plies ahead.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.find_possible_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| self.copy_and_move(mv).perft(depth - 1))
            .sum()
    }
}
