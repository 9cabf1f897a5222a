//! Perft: count the leaf nodes of the legal move tree.
//!
//! Each promotion piece counts as a separate move so totals line up with
//! published reference numbers.

use super::types::{LegalMove, PieceKind, Position};
use super::GameState;

impl GameState {
    /// Number of legal move sequences of length `depth` from this position
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.iter().map(|&(_, mv)| variants(mv)).sum();
        }

        let mut nodes = 0;
        for (from, mv) in moves {
            for promote_to in promotion_choices(mv) {
                let mut child = self.clone();
                child.play(from, mv, promote_to);
                nodes += child.perft(depth - 1);
            }
        }
        nodes
    }

    /// Per-move subtree counts, sorted by origin then destination
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Position, LegalMove, u64)> {
        let mut split: Vec<(Position, LegalMove, u64)> = self
            .all_legal_moves()
            .into_iter()
            .map(|(from, mv)| {
                let nodes = promotion_choices(mv)
                    .map(|promote_to| {
                        let mut child = self.clone();
                        child.play(from, mv, promote_to);
                        child.perft(depth.saturating_sub(1))
                    })
                    .sum::<u64>();
                (from, mv, nodes)
            })
            .collect();
        split.sort_by_key(|&(from, mv, _)| (from, mv.destination()));
        split
    }
}

fn variants(mv: LegalMove) -> u64 {
    if mv.is_promotion() {
        PieceKind::PROMOTIONS.len() as u64
    } else {
        1
    }
}

fn promotion_choices(mv: LegalMove) -> impl Iterator<Item = Option<PieceKind>> {
    let kinds: &'static [PieceKind] = if mv.is_promotion() {
        &PieceKind::PROMOTIONS
    } else {
        &[]
    };
    let plain = (!mv.is_promotion()).then_some(None);
    plain.into_iter().chain(kinds.iter().map(|&kind| Some(kind)))
}
