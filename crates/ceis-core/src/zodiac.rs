//! Zodiac constellation catalog
//!
//! Twelve named shapes as normalized points (both axes in [0,1]) plus the
//! index pairs of their connecting edges, and the glyph/trait metadata the
//! picker grid displays.

/// Display metadata for one sign in the picker grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInfo {
    pub name: &'static str,
    pub glyph: &'static str,
    pub trait_word: &'static str,
}

/// The twelve signs in grid order.
pub const SIGNS: &[SignInfo] = &[
    SignInfo { name: "Aries", glyph: "♈", trait_word: "Pioneering" },
    SignInfo { name: "Taurus", glyph: "♉", trait_word: "Grounded" },
    SignInfo { name: "Gemini", glyph: "♊", trait_word: "Adaptable" },
    SignInfo { name: "Cancer", glyph: "♋", trait_word: "Nurturing" },
    SignInfo { name: "Leo", glyph: "♌", trait_word: "Radiant" },
    SignInfo { name: "Virgo", glyph: "♍", trait_word: "Precise" },
    SignInfo { name: "Libra", glyph: "♎", trait_word: "Harmonizing" },
    SignInfo { name: "Scorpio", glyph: "♏", trait_word: "Intense" },
    SignInfo { name: "Sagittarius", glyph: "♐", trait_word: "Expansive" },
    SignInfo { name: "Capricorn", glyph: "♑", trait_word: "Resolute" },
    SignInfo { name: "Aquarius", glyph: "♒", trait_word: "Unconventional" },
    SignInfo { name: "Pisces", glyph: "♓", trait_word: "Transcendent" },
];

/// A named constellation shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constellation {
    pub name: &'static str,
    /// Normalized star positions, [0,1] per axis
    pub points: &'static [(f32, f32)],
    /// Index pairs into `points` forming the connecting lines
    pub edges: &'static [(usize, usize)],
}

/// Fixed catalog of all twelve shapes.
pub const CONSTELLATIONS: &[Constellation] = &[
    // Ram: curved line
    Constellation {
        name: "Aries",
        points: &[(0.2, 0.6), (0.4, 0.45), (0.6, 0.4), (0.8, 0.5)],
        edges: &[(0, 1), (1, 2), (2, 3)],
    },
    // Bull: V shape with horns
    Constellation {
        name: "Taurus",
        points: &[(0.5, 0.8), (0.4, 0.6), (0.6, 0.6), (0.2, 0.35), (0.8, 0.35)],
        edges: &[(0, 1), (0, 2), (1, 3), (2, 4)],
    },
    // Twins: two pillars joined at the middle
    Constellation {
        name: "Gemini",
        points: &[
            (0.3, 0.2),
            (0.35, 0.8),
            (0.65, 0.2),
            (0.7, 0.8),
            (0.5, 0.5),
            (0.32, 0.5),
            (0.68, 0.5),
        ],
        edges: &[(0, 1), (2, 3), (4, 5), (4, 6)],
    },
    // Crab
    Constellation {
        name: "Cancer",
        points: &[(0.5, 0.5), (0.3, 0.3), (0.7, 0.75), (0.25, 0.7), (0.75, 0.25)],
        edges: &[(0, 1), (0, 2), (1, 4), (2, 3)],
    },
    // Lion: sickle plus triangle
    Constellation {
        name: "Leo",
        points: &[
            (0.6, 0.3),
            (0.5, 0.2),
            (0.35, 0.25),
            (0.3, 0.45),
            (0.4, 0.6),
            (0.7, 0.6),
            (0.8, 0.45),
            (0.5, 0.6),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 7),
            (4, 5),
            (5, 6),
            (6, 0),
        ],
    },
    // Maiden: boxy M
    Constellation {
        name: "Virgo",
        points: &[
            (0.2, 0.4),
            (0.4, 0.35),
            (0.6, 0.35),
            (0.3, 0.6),
            (0.5, 0.6),
            (0.4, 0.8),
            (0.8, 0.3),
        ],
        edges: &[(0, 1), (1, 2), (1, 3), (3, 5), (4, 5), (2, 6), (0, 3)],
    },
    // Scales: beam over a triangle
    Constellation {
        name: "Libra",
        points: &[(0.5, 0.2), (0.2, 0.7), (0.8, 0.7), (0.3, 0.5), (0.7, 0.5)],
        edges: &[(3, 4), (1, 2), (0, 3), (0, 4)],
    },
    // Scorpion: S-hook tail
    Constellation {
        name: "Scorpio",
        points: &[
            (0.8, 0.2),
            (0.75, 0.25),
            (0.7, 0.35),
            (0.6, 0.45),
            (0.5, 0.6),
            (0.5, 0.75),
            (0.65, 0.85),
            (0.8, 0.75),
            (0.85, 0.65),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
        ],
    },
    // Archer: teapot and bow
    Constellation {
        name: "Sagittarius",
        points: &[
            (0.2, 0.7),
            (0.4, 0.5),
            (0.3, 0.3),
            (0.6, 0.5),
            (0.7, 0.3),
            (0.5, 0.8),
            (0.7, 0.8),
            (0.8, 0.5),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (1, 3),
            (3, 4),
            (3, 7),
            (5, 6),
            (6, 7),
            (5, 1),
        ],
    },
    // Goat: V with a tail
    Constellation {
        name: "Capricorn",
        points: &[(0.2, 0.3), (0.5, 0.4), (0.8, 0.3), (0.5, 0.8), (0.3, 0.4)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 1), (0, 4)],
    },
    // Water bearer: two zig-zags
    Constellation {
        name: "Aquarius",
        points: &[
            (0.2, 0.3),
            (0.3, 0.4),
            (0.4, 0.3),
            (0.5, 0.4),
            (0.6, 0.3),
            (0.3, 0.6),
            (0.4, 0.7),
            (0.5, 0.6),
            (0.6, 0.7),
            (0.7, 0.6),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 9),
        ],
    },
    // Fishes: ribbons tied at the center knot
    Constellation {
        name: "Pisces",
        points: &[
            (0.2, 0.3),
            (0.4, 0.4),
            (0.5, 0.5),
            (0.6, 0.6),
            (0.8, 0.7),
            (0.7, 0.3),
            (0.3, 0.7),
        ],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (2, 5), (2, 6)],
    },
];

/// Look up a shape by sign name. Unknown names return `None`.
pub fn constellation(name: &str) -> Option<&'static Constellation> {
    CONSTELLATIONS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_signs_and_shapes() {
        assert_eq!(SIGNS.len(), 12);
        assert_eq!(CONSTELLATIONS.len(), 12);
        for info in SIGNS {
            assert!(constellation(info.name).is_some(), "{} missing", info.name);
        }
    }

    #[test]
    fn every_edge_references_an_existing_point() {
        for shape in CONSTELLATIONS {
            for &(a, b) in shape.edges {
                assert!(a < shape.points.len(), "{}: bad edge start {a}", shape.name);
                assert!(b < shape.points.len(), "{}: bad edge end {b}", shape.name);
            }
        }
    }

    #[test]
    fn points_are_normalized() {
        for shape in CONSTELLATIONS {
            for &(x, y) in shape.points {
                assert!((0.0..=1.0).contains(&x), "{}: x out of range", shape.name);
                assert!((0.0..=1.0).contains(&y), "{}: y out of range", shape.name);
            }
        }
    }

    #[test]
    fn leo_has_eight_points_and_edges() {
        let leo = constellation("Leo").unwrap();
        assert_eq!(leo.points.len(), 8);
        assert_eq!(leo.edges.len(), 8);
        for &(a, b) in leo.edges {
            assert!(a < 8 && b < 8);
        }
    }

    #[test]
    fn unknown_sign_is_none() {
        assert!(constellation("Ophiuchus").is_none());
    }
}
