//! Length units used throughout layout.
//!
//! Layout happens in millimetres ([Mm]) with the origin at the top-left corner of the
//! page. Font sizes are specified in points ([Pt]). [In] exists mostly to make page
//! sizes and margins convenient to write down. All three convert into each other
//! through [From].

use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

const MM_PER_INCH: f32 = 25.4;
const PT_PER_INCH: f32 = 72.0;

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Default,
            Copy,
            Clone,
            PartialEq,
            PartialOrd,
            Add,
            Sub,
            AddAssign,
            SubAssign,
            MulAssign,
            Sum,
            From,
            Into,
            Display,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub f32);

        impl $name {
            /// The larger of two lengths
            pub fn max(self, other: $name) -> $name {
                $name(self.0.max(other.0))
            }

            /// The smaller of two lengths
            pub fn min(self, other: $name) -> $name {
                $name(self.0.min(other.0))
            }
        }

        impl Mul<f32> for $name {
            type Output = $name;

            fn mul(self, rhs: f32) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Div<f32> for $name {
            type Output = $name;

            fn div(self, rhs: f32) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl Div<$name> for $name {
            type Output = f32;

            fn div(self, rhs: $name) -> f32 {
                self.0 / rhs.0
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                $name(-self.0)
            }
        }
    };
}

unit!(
    /// Points, 1/72 of an inch. Used for font sizes and paper sizes.
    Pt
);
unit!(
    /// Millimetres. The unit all layout coordinates are expressed in.
    Mm
);
unit!(
    /// Inches
    In
);

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 * MM_PER_INCH / PT_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * PT_PER_INCH / MM_PER_INCH)
    }
}

impl From<In> for Mm {
    fn from(inches: In) -> Mm {
        Mm(inches.0 * MM_PER_INCH)
    }
}

impl From<In> for Pt {
    fn from(inches: In) -> Pt {
        Pt(inches.0 * PT_PER_INCH)
    }
}

impl From<Mm> for In {
    fn from(mm: Mm) -> In {
        In(mm.0 / MM_PER_INCH)
    }
}
