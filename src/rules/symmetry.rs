//! Dihedral (D4) symmetries of a square board.
//!
//! A symmetry is some number of counter-clockwise quarter turns followed
//! by an optional left-right flip. Both boards and policy vectors are laid
//! out as N×N grids in linearized order (`first * N + second`), so one
//! index mapping transforms either and keeps every probability on the
//! cell it refers to.

use serde::{Deserialize, Serialize};

/// One element of the dihedral group of the square.
///
/// ```
/// use rust_gomoku::rules::Symmetry;
///
/// let quarter = Symmetry::new(1, false);
/// // Top-left corner of a 3x3 grid moves to bottom-left.
/// assert_eq!(quarter.map_index(0, 3), 6);
/// assert_eq!(Symmetry::all().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SymmetryRepr")]
pub struct Symmetry {
    quarter_turns: u8,
    flip: bool,
}

#[derive(Deserialize)]
struct SymmetryRepr {
    quarter_turns: u8,
    flip: bool,
}

impl From<SymmetryRepr> for Symmetry {
    fn from(repr: SymmetryRepr) -> Self {
        Symmetry::new(repr.quarter_turns, repr.flip)
    }
}

impl Symmetry {
    /// The identity transform.
    pub const IDENTITY: Symmetry = Symmetry {
        quarter_turns: 0,
        flip: false,
    };

    /// Rotate by `quarter_turns` (mod 4), then flip left-right if `flip`.
    #[must_use]
    pub const fn new(quarter_turns: u8, flip: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            flip,
        }
    }

    /// All eight transforms in augmentation order: one to four quarter
    /// turns, each flipped and then unflipped. The identity comes last.
    #[must_use]
    pub fn all() -> [Symmetry; 8] {
        let mut out = [Symmetry::IDENTITY; 8];
        for (i, turns) in (1..=4u8).enumerate() {
            out[2 * i] = Symmetry::new(turns, true);
            out[2 * i + 1] = Symmetry::new(turns, false);
        }
        out
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    #[must_use]
    pub const fn is_flipped(self) -> bool {
        self.flip
    }

    /// The transform that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        if self.flip {
            // Flip after rotation is a reflection, which is an involution.
            self
        } else {
            Symmetry::new((4 - self.quarter_turns % 4) % 4, false)
        }
    }

    /// Where the entry at `index` lands after the transform.
    #[must_use]
    pub fn map_index(self, index: usize, n: usize) -> usize {
        let (mut i, mut j) = (index / n, index % n);
        for _ in 0..self.quarter_turns {
            (i, j) = (n - 1 - j, i);
        }
        if self.flip {
            j = n - 1 - j;
        }
        i * n + j
    }

    /// Apply the transform to an N×N grid stored in linearized order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n * n`.
    #[must_use]
    pub fn transform<T: Copy>(self, values: &[T], n: usize) -> Vec<T> {
        assert_eq!(values.len(), n * n, "Grid length must be n * n");
        let mut out = values.to_vec();
        for (index, &value) in values.iter().enumerate() {
            out[self.map_index(index, n)] = value;
        }
        out
    }
}

impl Default for Symmetry {
    fn default() -> Self {
        Self::IDENTITY
    }
}
