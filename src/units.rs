use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// Points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;

/// A length in millimetres, measured from the top-left corner of a page when used as a
/// coordinate. All layout decisions are made in millimetres; only the PDF backend converts to
/// [Pt] when it writes content streams.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// A length in PDF points (1/72 inch), measured from the bottom-left corner of a page when
/// used as a coordinate
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Mm {
    pub const ZERO: Mm = Mm(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Mm) -> Mm {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// The smaller of two lengths
    pub fn min(self, other: Mm) -> Mm {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Convert a font size given in points into millimetres
    pub fn from_pt(size: f32) -> Mm {
        Mm(size / PT_PER_MM)
    }
}

macro_rules! scalar_ops {
    ($unit:ident) => {
        impl Mul<f32> for $unit {
            type Output = $unit;

            fn mul(self, rhs: f32) -> $unit {
                $unit(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = $unit;

            fn div(self, rhs: f32) -> $unit {
                $unit(self.0 / rhs)
            }
        }
    };
}

scalar_ops!(Mm);
scalar_ops!(Pt);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * PT_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / PT_PER_MM)
    }
}
