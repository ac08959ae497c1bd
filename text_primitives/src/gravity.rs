// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Direction, Script, VerticalDirection};

/// The orientation of glyphs in a run of text.
///
/// Vertical text is set by rotating the whole layout with a [`Matrix`]; gravity then says how
/// each run's glyphs stand relative to that rotated baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Gravity {
    /// Glyphs stand upright.
    #[default]
    South,
    /// Glyphs are rotated 90 degrees clockwise.
    East,
    /// Glyphs are upside-down.
    North,
    /// Glyphs are rotated 90 degrees counter-clockwise.
    West,
    /// Resolve the gravity from the context matrix.
    ///
    /// Only meaningful as a base gravity; resolved gravities are never `Auto`.
    Auto,
}

/// How the gravity of individual runs is derived from the base gravity in vertical text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GravityHint {
    /// Scripts take their natural gravity based on the base gravity and their own vertical
    /// direction.
    #[default]
    Natural,
    /// Every run uses the base gravity.
    Strong,
    /// Runs are rotated so that left-to-right and right-to-left text reads along the line.
    Line,
}

/// A 2D affine transform, `x' = xx * x + xy * y + x0` and `y' = yx * x + yy * y + y0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    /// Horizontal scale.
    pub xx: f64,
    /// Horizontal shear.
    pub xy: f64,
    /// Vertical shear.
    pub yx: f64,
    /// Vertical scale.
    pub yy: f64,
    /// Horizontal translation.
    pub x0: f64,
    /// Vertical translation.
    pub y0: f64,
}

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Gravity {
    /// Returns `true` for [`Gravity::East`] and [`Gravity::West`].
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    /// Returns `true` for gravities that turn glyphs against the reading direction
    /// ([`Gravity::North`] and [`Gravity::West`]).
    #[must_use]
    pub fn is_improper(self) -> bool {
        matches!(self, Self::North | Self::West)
    }

    /// The rotation, in radians, that the gravity applies to glyphs.
    #[must_use]
    pub fn to_rotation(self) -> f64 {
        use core::f64::consts::{FRAC_PI_2, PI};
        match self {
            Self::South | Self::Auto => 0.0,
            Self::North => PI,
            Self::East => -FRAC_PI_2,
            Self::West => FRAC_PI_2,
        }
    }

    /// Finds the gravity that best matches the rotation of `matrix`.
    ///
    /// Without a matrix the gravity is [`Gravity::South`].
    #[must_use]
    pub fn for_matrix(matrix: Option<&Matrix>) -> Self {
        let Some(matrix) = matrix else {
            return Self::South;
        };
        let (x, y) = (matrix.xy, matrix.yy);
        if x.abs() > y.abs() {
            if x > 0.0 {
                Self::West
            } else {
                Self::East
            }
        } else if y < 0.0 {
            Self::North
        } else {
            Self::South
        }
    }

    /// Resolves the gravity of a run of `script` text.
    ///
    /// Like [`Gravity::for_script_and_width`], with the script's own width standing in for the
    /// width of its characters.
    #[must_use]
    pub fn for_script(script: Script, base: Self, hint: GravityHint) -> Self {
        Self::for_script_and_width(script, script.is_wide(), base, hint)
    }

    /// Resolves the gravity of a run of `script` text whose characters are `wide` (set upright in
    /// vertical text) or not.
    ///
    /// An `Auto` base gravity is replaced by the script's preferred gravity. In horizontal
    /// settings, and for wide characters, the result is the base gravity. Narrow characters in a
    /// vertical setting are resolved by `hint`.
    #[must_use]
    pub fn for_script_and_width(script: Script, wide: bool, base: Self, hint: GravityHint) -> Self {
        let base = if base == Self::Auto {
            script.preferred_gravity()
        } else {
            base
        };
        if !base.is_vertical() || wide {
            return base;
        }
        match hint {
            GravityHint::Natural => match script.vertical_direction() {
                VerticalDirection::None => Self::South,
                vertical => {
                    if (base == Self::East) ^ (vertical == VerticalDirection::BottomToTop) {
                        Self::South
                    } else {
                        Self::North
                    }
                }
            },
            GravityHint::Strong => base,
            GravityHint::Line => {
                if (base == Self::East) ^ (script.horizontal_direction() == Direction::Rtl) {
                    Self::South
                } else {
                    Self::North
                }
            }
        }
    }
}
