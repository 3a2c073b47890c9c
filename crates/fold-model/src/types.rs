// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for FOLD data representation
//!
//! Typed indices into the document's entity arrays and the per-edge fold
//! assignment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_index {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Position in the target array
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                $name(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_index!(
    /// Index into `vertices_*` arrays
    VertexIndex,
    "v"
);

entity_index!(
    /// Index into `edges_*` arrays
    EdgeIndex,
    "e"
);

entity_index!(
    /// Index into `faces_*` arrays
    FaceIndex,
    "f"
);

/// Linear RGB color with components in 0.0-1.0
pub type Rgb = [f32; 3];

/// Fold-type classification of an edge
///
/// Decoded from the single-letter FOLD codes, case-insensitively. Codes this
/// viewer has no color for (including FOLD's `C` cut and `J` join) decode as
/// [`FoldAssignment::Unassigned`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FoldAssignment {
    Mountain,
    Valley,
    Flat,
    Boundary,
    #[default]
    Unassigned,
}

impl FoldAssignment {
    pub const MOUNTAIN_COLOR: Rgb = [0.8, 0.1, 0.05];
    pub const VALLEY_COLOR: Rgb = [0.05, 0.1, 0.5];
    pub const FLAT_COLOR: Rgb = [0.6, 0.6, 0.6];
    pub const BOUNDARY_COLOR: Rgb = [0.0, 0.0, 0.0];
    pub const UNASSIGNED_COLOR: Rgb = [0.0, 0.0, 0.0];

    /// Parse a single-letter FOLD assignment code
    pub fn parse(code: &str) -> Self {
        match code {
            "M" | "m" => FoldAssignment::Mountain,
            "V" | "v" => FoldAssignment::Valley,
            "F" | "f" => FoldAssignment::Flat,
            "B" | "b" => FoldAssignment::Boundary,
            _ => FoldAssignment::Unassigned,
        }
    }

    /// Upper-case FOLD code
    pub fn code(self) -> &'static str {
        match self {
            FoldAssignment::Mountain => "M",
            FoldAssignment::Valley => "V",
            FoldAssignment::Flat => "F",
            FoldAssignment::Boundary => "B",
            FoldAssignment::Unassigned => "U",
        }
    }

    /// Stroke color used when drawing the crease pattern
    pub fn color(self) -> Rgb {
        match self {
            FoldAssignment::Mountain => Self::MOUNTAIN_COLOR,
            FoldAssignment::Valley => Self::VALLEY_COLOR,
            FoldAssignment::Flat => Self::FLAT_COLOR,
            FoldAssignment::Boundary => Self::BOUNDARY_COLOR,
            FoldAssignment::Unassigned => Self::UNASSIGNED_COLOR,
        }
    }
}

impl FromStr for FoldAssignment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for FoldAssignment {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<FoldAssignment> for String {
    fn from(assignment: FoldAssignment) -> Self {
        assignment.code().to_string()
    }
}

impl fmt::Display for FoldAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
