use std::fmt;

use super::action::Response;
use super::seat::Seat;
use crate::tiles::{TileId, TileKind};

/// Why a transition request was refused.
///
/// A refused request never changes state; the no-op entry points simply
/// hand back the input snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The hand is already over.
    GameFinished,
    /// The acting seat is not the active seat.
    NotActive { seat: Seat, active: Seat },
    /// The action does not fit the current turn step.
    WrongStep { expected: &'static str },
    /// The named tile is not in the acting hand.
    TileNotHeld { seat: Seat, tile: TileId },
    /// No concealed quad or upgradeable triplet of this kind.
    NoQuad { seat: Seat, kind: TileKind },
    /// The response is not among the offered options.
    ResponseNotOffered { response: Response },
    /// The human seat tried to use the bot driver, or vice versa.
    NotBotSeat { seat: Seat },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::GameFinished => write!(f, "hand is already finished"),
            Rejection::NotActive { seat, active } => {
                write!(f, "{} acted but {} is active", seat, active)
            }
            Rejection::WrongStep { expected } => {
                write!(f, "action not allowed now, expected {}", expected)
            }
            Rejection::TileNotHeld { seat, tile } => {
                write!(f, "{} does not hold tile #{}", seat, tile.raw())
            }
            Rejection::NoQuad { seat, kind } => {
                write!(f, "{} cannot declare a quad of {}", seat, kind)
            }
            Rejection::ResponseNotOffered { response } => {
                write!(f, "response '{}' was not offered", response)
            }
            Rejection::NotBotSeat { seat } => write!(f, "{} is not driven by the engine", seat),
        }
    }
}

impl std::error::Error for Rejection {}

pub type EngineResult<T> = Result<T, Rejection>;

/// Snapshot encode/decode failure.
#[derive(Debug)]
pub enum SnapshotError {
    /// The bytes are not a valid encoding (including impossible tiles).
    Codec(bincode::Error),
    /// The snapshot decoded but does not hold each of the 84 tiles once.
    TilesNotConserved,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Codec(err) => write!(f, "snapshot codec error: {}", err),
            SnapshotError::TilesNotConserved => write!(f, "snapshot does not conserve tiles"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Codec(err) => Some(&**err),
            SnapshotError::TilesNotConserved => None,
        }
    }
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        SnapshotError::Codec(err)
    }
}
