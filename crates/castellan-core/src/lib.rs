//! Chess rules: board state, legal destinations, move commitment and
//! check detection for two players sharing one board.

mod attacks;
mod board;
mod castle_flags;
mod castling;
mod chess_move;
mod color;
mod commit;
mod config;
mod error;
mod export;
mod legality;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod status;

pub use board::{Board, PrettyBoard};
pub use castle_flags::{CastleFlags, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use config::RulesConfig;
pub use error::{BoardError, MoveError};
pub use export::STARTING_POSITION;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use status::GameStatus;
