use std::fmt;

/// Edge length of a JP4 macroblock.
pub const MACROBLOCK_SIZE: usize = 16;

/// Edge length of a single component patch within a macroblock.
pub const PATCH_SIZE: usize = MACROBLOCK_SIZE / 2;

// One of the four Bayer sub-components carried by a JP4 macroblock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Gr,
    R,
    Gb,
    B,
}

impl Component {
    pub const ALL: [Component; 4] = [Component::Gr, Component::R, Component::Gb, Component::B];

    /// (row, column) of the component's 8x8 patch inside a macroblock.
    /// The sensor codes each macroblock as:
    ///
    /// ```text
    ///  Gr  R
    ///  B   Gb
    /// ```
    pub fn patch_offset(&self) -> (usize, usize) {
        match self {
            Component::Gr => (0, 0),
            Component::R => (0, PATCH_SIZE),
            Component::Gb => (PATCH_SIZE, PATCH_SIZE),
            Component::B => (PATCH_SIZE, 0),
        }
    }

    /// (row, column) of the component within a 2x2 GRBG Bayer cell.
    pub fn bayer_phase(&self) -> (usize, usize) {
        match self {
            Component::Gr => (0, 0),
            Component::R => (0, 1),
            Component::Gb => (1, 1),
            Component::B => (1, 0),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Gr => f.write_str("g1"),
            Component::R => f.write_str("r"),
            Component::Gb => f.write_str("g2"),
            Component::B => f.write_str("b"),
        }
    }
}
