use crate::session::ReleasePolicy;

/// Grid pitch in pixels. Piece origins are always multiples of this.
pub const GRID_UNIT: i32 = 10;
/// Outline drawn around every piece.
pub const OUTLINE_COLOR: &str = "#000";

/// Runtime knobs for a board. The host fills this from the page URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub unit: i32,
    pub outline_color: String,
    pub release_policy: ReleasePolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            unit: GRID_UNIT,
            outline_color: OUTLINE_COLOR.to_string(),
            release_policy: ReleasePolicy::default(),
        }
    }
}
