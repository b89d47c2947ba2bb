//! Immutable board snapshots and the builder that constructs them.
//!
//! A [`Board`] represents one ply of game state. It is never mutated:
//! executing a move builds a successor board through [`BoardBuilder`],
//! copying forward every unaffected piece. Construction is two-phase —
//! occupancy and active pieces first, then both sides' raw moves, then the
//! two [`Player`] views (each needs the opponent's raw attack set).

pub mod error;
pub mod eval;
pub(crate) mod geometry;
pub(crate) mod movegen;
pub mod player;
pub mod search;
pub mod types;

#[cfg(test)]
mod tests;

use std::fmt;

use geometry::{NUM_TILES, TILES_PER_ROW};

pub use error::SquareError;
pub use player::Player;
pub use types::{Color, Move, MoveStatus, MoveTransition, Piece, PieceType, Square};

/// Square-indexed occupancy, the raw storage behind a board.
pub(crate) type Occupancy = [Option<Piece>; NUM_TILES];

/// A square paired with its occupant, if any. Tiles are cheap views
/// constructed per lookup; the board itself stores plain occupancy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    square: Square,
    piece: Option<Piece>,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.piece.is_some()
    }
}

/// One immutable ply of game state.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Occupancy,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    en_passant_pawn: Option<Piece>,
    white_player: Player,
    black_player: Player,
    to_move: Color,
}

impl Board {
    /// The standard initial position, White to move.
    #[must_use]
    pub fn standard() -> Board {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        let mut builder = BoardBuilder::new();
        for (column, &kind) in BACK_RANK.iter().enumerate() {
            builder = builder
                .piece(Piece::new(kind, Square::from_parts(0, column), Color::Black))
                .piece(Piece::new(kind, Square::from_parts(7, column), Color::White));
        }
        for column in 0..TILES_PER_ROW {
            builder = builder
                .piece(Piece::new(
                    PieceType::Pawn,
                    Square::from_parts(1, column),
                    Color::Black,
                ))
                .piece(Piece::new(
                    PieceType::Pawn,
                    Square::from_parts(6, column),
                    Color::White,
                ));
        }
        builder.move_maker(Color::White).build()
    }

    /// The tile at `square`.
    #[must_use]
    pub fn tile(&self, square: Square) -> Tile {
        Tile {
            square,
            piece: self.tiles[square.index()],
        }
    }

    /// The occupant of `square`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tiles[square.index()]
    }

    /// All active pieces of one color.
    #[must_use]
    pub fn active_pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    /// Every piece on the board, White's then Black's.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.white_pieces
            .iter()
            .chain(self.black_pieces.iter())
            .copied()
    }

    /// The pawn eligible for en-passant capture this ply, if any.
    #[inline]
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    #[must_use]
    pub fn white_player(&self) -> &Player {
        &self.white_player
    }

    #[must_use]
    pub fn black_player(&self) -> &Player {
        &self.black_player
    }

    /// The player of `color`.
    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white_player,
            Color::Black => &self.black_player,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Attempt `mv` for the current player. See [`Player::make_move`].
    #[must_use]
    pub fn make_move(&self, mv: &Move) -> MoveTransition {
        self.current_player().make_move(self, mv)
    }

    /// Raw occupancy, for layout comparisons.
    pub(crate) fn piece_layout(&self) -> &Occupancy {
        &self.tiles
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tile) in self.tiles.iter().enumerate() {
            let glyph = match tile {
                Some(piece) => piece.glyph(),
                None => '-',
            };
            write!(f, "{glyph:>3}")?;
            if (index + 1) % TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Accumulates a square-to-piece mapping and builds a [`Board`].
///
/// This is the only way to create a board other than [`Move::execute`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: Occupancy,
    to_move: Color,
    en_passant_pawn: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            config: [None; NUM_TILES],
            to_move: Color::White,
            en_passant_pawn: None,
        }
    }

    /// Place `piece` on its own square, replacing any previous occupant.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.config[piece.square().index()] = Some(piece);
        self
    }

    /// Set which side moves next.
    #[must_use]
    pub fn move_maker(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Record the pawn that just double-stepped, enabling en passant
    /// against it on the built board.
    #[must_use]
    pub fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// One-shot board construction: partition active pieces, generate both
    /// sides' raw moves, then build both players.
    ///
    /// # Panics
    /// Panics on a board that is not valid: a side with zero or multiple
    /// kings, or more than 16 pieces. The engine refuses to operate on such
    /// a position rather than guess.
    #[must_use]
    pub fn build(self) -> Board {
        let tiles = self.config;
        let white_pieces = active_pieces(&tiles, Color::White);
        let black_pieces = active_pieces(&tiles, Color::Black);
        for (color, pieces) in [
            (Color::White, &white_pieces),
            (Color::Black, &black_pieces),
        ] {
            let kings = pieces.iter().filter(|p| p.kind().is_king()).count();
            assert!(
                kings == 1,
                "not a valid board: expected exactly one {color} king, found {kings}"
            );
            assert!(
                pieces.len() <= 16,
                "not a valid board: {color} has {} pieces",
                pieces.len()
            );
        }

        let white_raw = movegen::raw_legal_moves(&tiles, self.en_passant_pawn, &white_pieces);
        let black_raw = movegen::raw_legal_moves(&tiles, self.en_passant_pawn, &black_pieces);
        let white_player = Player::build(
            Color::White,
            &tiles,
            &white_pieces,
            white_raw.clone(),
            &black_raw,
        );
        let black_player = Player::build(Color::Black, &tiles, &black_pieces, black_raw, &white_raw);

        Board {
            tiles,
            white_pieces,
            black_pieces,
            en_passant_pawn: self.en_passant_pawn,
            white_player,
            black_player,
            to_move: self.to_move,
        }
    }
}

/// Scan the occupancy once, keeping the pieces of one color.
fn active_pieces(tiles: &Occupancy, color: Color) -> Vec<Piece> {
    tiles
        .iter()
        .flatten()
        .filter(|piece| piece.color() == color)
        .copied()
        .collect()
}
