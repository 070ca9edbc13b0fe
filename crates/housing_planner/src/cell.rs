//! # Cell Semantics
//!
//! The numeric encoding consumers see reuses `0` and `1` with a meaning that
//! depends on the floor:
//!
//! | code | ground floor | upper floor |
//! |------|--------------|-------------|
//! | 0    | house        | house       |
//! | 1    | balcony      | void        |
//! | 2    | -            | balcony     |
//!
//! Inside the crate each floor kind has its own type so the ambiguity never
//! reaches the generator. Codes only appear at the [`crate::plan`] boundary.

use serde::Serialize;

/// A cell of the ground floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum GroundCell {
    /// Solid house block.
    #[default]
    House = 0,
    /// Open balcony marker.
    Balcony = 1,
}

impl GroundCell {
    /// Returns the consumer-facing numeric code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns true if an upper floor may rest on this cell.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::House)
    }
}

/// A cell of an upper floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum UpperCell {
    /// Solid house block.
    House = 0,
    /// Nothing built here.
    #[default]
    Void = 1,
    /// Balcony marker on a supported block.
    Balcony = 2,
}

impl UpperCell {
    /// Returns the consumer-facing numeric code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns true if a floor above may rest on this cell.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::House)
    }

    /// Returns true if nothing has been written to this cell yet.
    #[inline]
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }
}

/// Cells that can carry the floor above them.
///
/// Both floor kinds share the rule that only house cells (code 0) support
/// anything, which is all the upper floor derivation needs to know.
pub trait SupportCell: Copy {
    /// Returns true if this cell counts as solid support.
    fn supports(self) -> bool;
}

impl SupportCell for GroundCell {
    #[inline]
    fn supports(self) -> bool {
        self.is_solid()
    }
}

impl SupportCell for UpperCell {
    #[inline]
    fn supports(self) -> bool {
        self.is_solid()
    }
}
