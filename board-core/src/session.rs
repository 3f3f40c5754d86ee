use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::geometry::Point;
use crate::piece::PlacedPiece;

/// The one drag in flight, if any.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSession {
    /// A swatch picked from the palette; it has no board position yet.
    FromPalette { color: String, size: i32 },
    /// A piece lifted off the board. It is not in the piece list while this
    /// session is live; `piece` tracks where it would land.
    FromBoard {
        piece: PlacedPiece,
        source_index: usize,
        grab_offset: Point,
    },
}

impl DragSession {
    pub fn is_from_board(&self) -> bool {
        matches!(self, DragSession::FromBoard { .. })
    }
}

/// What to do with a board piece released outside both the board and the
/// palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePolicy {
    /// Put it back on the board where it was last shown.
    #[default]
    Restore,
    /// Drop it on the floor.
    Discard,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown release policy '{0}' (expected 'restore' or 'discard')")]
pub struct ParsePolicyError(pub String);

impl FromStr for ReleasePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restore" => Ok(ReleasePolicy::Restore),
            "discard" => Ok(ReleasePolicy::Discard),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("restore".parse::<ReleasePolicy>(), Ok(ReleasePolicy::Restore));
        assert_eq!(" Discard ".parse::<ReleasePolicy>(), Ok(ReleasePolicy::Discard));
        assert_eq!(
            "keep".parse::<ReleasePolicy>(),
            Err(ParsePolicyError("keep".into()))
        );
    }

    #[test]
    fn only_board_sessions_are_from_board() {
        let palette = DragSession::FromPalette {
            color: "#008000".into(),
            size: 2,
        };
        let board = DragSession::FromBoard {
            piece: PlacedPiece {
                x: 0,
                y: 0,
                size: 2,
                color: "#008000".into(),
            },
            source_index: 0,
            grab_offset: Point::default(),
        };
        assert!(!palette.is_from_board());
        assert!(board.is_from_board());
    }

    #[test]
    fn session_serializes_with_kind_tag() {
        let s = DragSession::FromPalette {
            color: "#FFC0CB".into(),
            size: 5,
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["kind"], "from_palette");
        assert_eq!(v["size"], 5);
    }
}
