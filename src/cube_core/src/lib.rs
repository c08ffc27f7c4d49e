#![allow(clippy::missing_panics_doc, clippy::must_use_candidate)]

//! A 3×3×3 cube as 54 coloured facelets, and the cube notation moves that
//! permute them.

mod apply;
pub mod capture;
pub mod facelet;
pub mod notation;
pub mod replay;
mod reorient;
pub(crate) mod rotation;
pub mod scramble;
pub mod scripted;
pub(crate) mod slice;
pub mod solver;
pub mod validation;

pub use facelet::{Color, CubeState, Face, FaceGrid};
pub use notation::{Move, ParseError, Reorient, Selector, Slice, Turn, parse_moves, parse_sequence};
