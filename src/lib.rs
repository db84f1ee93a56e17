//! Crate root module declarations for the elimination chess variant.
//!
//! The variant is played on a standard board from the standard starting
//! position, but a side wins by capturing every opponent piece of any one
//! kind. There is no check, castling, en passant, or promotion.
//!
//! The piece rule set lives in `moves`, the engine in `game_state` and
//! `move_generation`, and notation, position strings, rendering, and playouts
//! in `utils`.

pub mod errors;

pub mod console {
    pub mod console_top;
}

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_counts;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
