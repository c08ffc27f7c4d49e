use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::facelet::Face;

/// An inner layer turned by a slice move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    M,
    E,
    S,
}

impl Slice {
    pub const ALL: [Self; 3] = [Slice::M, Slice::E, Slice::S];

    pub fn letter(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }
}

/// Which way a whole-cube reorientation (`mR`/`mL`) turns the cube about the
/// vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reorient {
    Right,
    Left,
}

impl Reorient {
    pub const ALL: [Self; 2] = [Reorient::Right, Reorient::Left];

    pub fn letter(self) -> char {
        match self {
            Reorient::Right => 'R',
            Reorient::Left => 'L',
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Reorient::Right => Reorient::Left,
            Reorient::Left => Reorient::Right,
        }
    }
}

/// What a move turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Face(Face),
    Slice(Slice),
    Reorient(Reorient),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    /// The notation suffix: nothing, `'` or `2`.
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Turn::Clockwise),
            "'" => Some(Turn::CounterClockwise),
            "2" => Some(Turn::Half),
            _ => None,
        }
    }
}

/// A single move in cube notation. Moves carry no state; applying one is the
/// business of `CubeState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub selector: Selector,
    pub turn: Turn,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("`{0}` does not start with a move letter (one of R L U D F B M E S, or m)")]
    InvalidFace(String),
    #[error("Cube rotation `{0}` must be `mR` or `mL`")]
    InvalidRotation(String),
    #[error("Unrecognized move `{0}`")]
    Unrecognized(String),
}

impl Move {
    pub const fn new(selector: Selector, turn: Turn) -> Move {
        Move { selector, turn }
    }

    pub const fn face(face: Face, turn: Turn) -> Move {
        Move::new(Selector::Face(face), turn)
    }

    pub const fn slice(slice: Slice, turn: Turn) -> Move {
        Move::new(Selector::Slice(slice), turn)
    }

    pub const fn reorient(reorient: Reorient, turn: Turn) -> Move {
        Move::new(Selector::Reorient(reorient), turn)
    }

    /// The move that undoes this one. `mR'` is the same physical motion as
    /// `mL`, but the inverse keeps the selector and flips the turn.
    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            selector: self.selector,
            turn: self.turn.inverse(),
        }
    }

    /// All 33 distinct moves: six faces, three slices and two reorientations,
    /// each in three turns.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL
            .into_iter()
            .map(Selector::Face)
            .chain(Slice::ALL.into_iter().map(Selector::Slice))
            .chain(Reorient::ALL.into_iter().map(Selector::Reorient))
            .flat_map(|selector| Turn::ALL.into_iter().map(move |turn| Move::new(selector, turn)))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selector {
            Selector::Face(face) => write!(f, "{}", face.letter())?,
            Selector::Slice(slice) => write!(f, "{}", slice.letter())?,
            Selector::Reorient(reorient) => write!(f, "m{}", reorient.letter())?,
        }

        f.write_str(self.turn.suffix())
    }
}

fn selector_from_letter(letter: char) -> Option<Selector> {
    if let Some(face) = Face::from_letter(letter) {
        return Some(Selector::Face(face));
    }

    match letter {
        'M' => Some(Selector::Slice(Slice::M)),
        'E' => Some(Selector::Slice(Slice::E)),
        'S' => Some(Selector::Slice(Slice::S)),
        _ => None,
    }
}

fn reorient_from_letter(letter: char) -> Option<Reorient> {
    match letter {
        'R' => Some(Reorient::Right),
        'L' => Some(Reorient::Left),
        _ => None,
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();

        let selector = match chars.next() {
            Some('m') => match chars.next().and_then(reorient_from_letter) {
                Some(reorient) => Selector::Reorient(reorient),
                None => return Err(ParseError::InvalidRotation(token.to_owned())),
            },
            Some(letter) => match selector_from_letter(letter) {
                Some(selector) => selector,
                None => return Err(ParseError::InvalidFace(token.to_owned())),
            },
            None => return Err(ParseError::InvalidFace(token.to_owned())),
        };

        match Turn::from_suffix(chars.as_str()) {
            Some(turn) => Ok(Move::new(selector, turn)),
            None => Err(ParseError::Unrecognized(token.to_owned())),
        }
    }
}

/// Parses whitespace separated tokens, failing on the first one that isn't a
/// move.
///
/// # Errors
///
/// The `ParseError` of the first bad token.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, ParseError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Pulls every move out of loosely formatted text, such as an algorithm pasted
/// from a web page. Matches are taken left to right without overlapping, and
/// anything that isn't part of a move is skipped silently.
pub fn parse_moves(text: &str) -> Vec<Move> {
    let chars = text.chars().map(|c| if c == ',' { ' ' } else { c }).collect::<Vec<_>>();
    let mut moves = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let reorient = match chars[i] {
            'm' => chars.get(i + 1).copied().and_then(reorient_from_letter),
            _ => None,
        };

        let (selector, width) = if let Some(reorient) = reorient {
            (Selector::Reorient(reorient), 2)
        } else if let Some(selector) = selector_from_letter(chars[i]) {
            (selector, 1)
        } else {
            i += 1;
            continue;
        };

        i += width;

        let turn = match chars.get(i) {
            Some('\'') => {
                i += 1;
                Turn::CounterClockwise
            }
            Some('2') => {
                i += 1;
                Turn::Half
            }
            _ => Turn::Clockwise,
        };

        moves.push(Move::new(selector, turn));
    }

    moves
}
