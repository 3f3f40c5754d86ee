use serde::Serialize;

/// One palette entry. Sizes are in grid units, not pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PieceArchetype {
    pub name: &'static str,
    pub color: &'static str,
    pub size: i32,
}

impl PieceArchetype {
    /// Side length in pixels for the given grid unit.
    pub fn side(&self, unit: i32) -> i32 {
        self.size * unit
    }
}

/// Palette in display order, largest swatch first.
pub const DEFAULT_CATALOG: [PieceArchetype; 8] = [
    PieceArchetype {
        name: "LightBlue",
        color: "#ADD8E6",
        size: 9,
    },
    PieceArchetype {
        name: "Brown",
        color: "#8B4513",
        size: 8,
    },
    PieceArchetype {
        name: "Yellow",
        color: "#FFFF00",
        size: 7,
    },
    PieceArchetype {
        name: "MidBlue",
        color: "#87CEFA",
        size: 6,
    },
    PieceArchetype {
        name: "Pink",
        color: "#FFC0CB",
        size: 5,
    },
    PieceArchetype {
        name: "DarkBlue",
        color: "#00008B",
        size: 4,
    },
    PieceArchetype {
        name: "Orange",
        color: "#FFA500",
        size: 3,
    },
    PieceArchetype {
        name: "Green",
        color: "#008000",
        size: 2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes_descend_from_nine_to_two() {
        let sizes: Vec<i32> = DEFAULT_CATALOG.iter().map(|a| a.size).collect();
        assert_eq!(sizes, vec![9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn colors_are_six_digit_hex() {
        for a in &DEFAULT_CATALOG {
            assert_eq!(a.color.len(), 7, "{}", a.name);
            assert!(a.color.starts_with('#'));
            assert!(a.color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn side_scales_with_unit() {
        assert_eq!(DEFAULT_CATALOG[0].side(10), 90);
        assert_eq!(DEFAULT_CATALOG[7].side(4), 8);
    }
}
