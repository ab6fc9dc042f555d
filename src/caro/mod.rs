//! Implementation of the Caro environment: board state, win detection and the
//! minimax player. Caro is the Vietnamese take on [m,n,k-games]: two sides
//! place marks on a square grid and the first straight run of a fixed length
//! wins.
//!
//! [m,n,k-games]: https://en.wikipedia.org/wiki/M,n,k-game

pub mod board;
pub mod core;
pub mod evaluation;
pub mod search;
