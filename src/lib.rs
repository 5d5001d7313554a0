pub mod board;
pub mod config;

pub use board::{Board, Color, Engine, Move, Piece, SearchParams, Square, Turn};
pub use config::BotSettings;
