//! The game controller: owns a [`GameState`] and notifies subscribers after
//! every accepted move.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Game, Piece, PieceKind};
//!
//! let mut game = Game::new();
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! game.apply_move(Piece::new(Color::White, PieceKind::Pawn), e2, e4, None)
//!     .unwrap();
//! assert_eq!(game.current_turn(), Color::Black);
//! ```

mod observers;

pub use observers::{BoardCallback, Observers, Subscription};

use std::fmt;

use crate::board::{
    Board, Color, GameError, GameState, GameStatus, KingRecord, LegalMove, Piece, PieceKind,
    Position,
};

/// A game in progress.
///
/// Single owner, synchronous: subscribers run inside [`Game::apply_move`]
/// after the new position is complete.
pub struct Game {
    state: GameState,
    observers: Observers,
}

impl Game {
    /// A game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Game::from_state(GameState::new())
    }

    /// A game from a position description
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Game::from_state(GameState::try_from_fen(fen)?))
    }

    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            observers: Observers::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Legal destinations for the piece on `from`; empty unless it belongs
    /// to the side to move
    #[must_use]
    pub fn legal_moves(&self, from: Position) -> Vec<LegalMove> {
        self.state.legal_moves(from)
    }

    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<(Position, LegalMove)> {
        self.state.all_legal_moves()
    }

    /// Validate and apply a move, then notify subscribers.
    ///
    /// On error nothing changes and no subscriber is called.
    pub fn apply_move(
        &mut self,
        piece: Piece,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<LegalMove, GameError> {
        let mv = self.state.apply_move(piece, from, to, promotion)?;

        debug_exec!({
            let turn = self.state.turn();
            match self.state.status() {
                GameStatus::Checkmate { winner } => debug_log!("checkmate, {winner} wins"),
                GameStatus::Stalemate => debug_log!("stalemate, {turn} has no legal move"),
                GameStatus::Ongoing if self.state.is_in_check(turn) => {
                    debug_log!("{turn} is in check");
                }
                GameStatus::Ongoing => {}
            }
        });

        self.observers.notify(self.state.board());
        Ok(mv)
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.state.turn()
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.is_in_check(color)
    }

    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.state.has_any_legal_move(color)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn king(&self, color: Color) -> KingRecord {
        self.state.king(color)
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.state.halfmove_clock()
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.state.fullmove_number()
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.state.is_fifty_move_draw()
    }

    /// Register a callback that receives the board after every accepted move.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&Board) + Send + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    /// Remove a subscriber; false if it was already gone
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        self.observers.unsubscribe(handle)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish()
    }
}
