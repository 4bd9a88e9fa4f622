//! Typed lengths used throughout the crate.
//!
//! PDF user space is measured in [`Pt`] (1/72 inch). Rendering surfaces are measured
//! in CSS-style [`Px`] (1/96 inch). [`Mm`] and [`In`] exist so page sizes can be
//! specified in the units people actually think in; every length converts into [`Pt`].

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// Points, the native unit of PDF user space
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, Deref, From, Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// Millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, From, Into, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Deref, From, Into, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

/// CSS pixels, 96 to the inch
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Deref, From, Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

macro_rules! scalar_ops {
    ($($t:ident),*) => {
        $(
            impl Mul<f32> for $t {
                type Output = $t;

                fn mul(self, rhs: f32) -> $t {
                    $t(self.0 * rhs)
                }
            }

            impl Mul<$t> for f32 {
                type Output = $t;

                fn mul(self, rhs: $t) -> $t {
                    $t(self * rhs.0)
                }
            }

            impl Div<f32> for $t {
                type Output = $t;

                fn div(self, rhs: f32) -> $t {
                    $t(self.0 / rhs)
                }
            }

            impl Div<$t> for $t {
                type Output = f32;

                fn div(self, rhs: $t) -> f32 {
                    self.0 / rhs.0
                }
            }
        )*
    };
}

scalar_ops!(Pt, Mm, In, Px);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl From<Px> for Pt {
    fn from(value: Px) -> Pt {
        Pt(value.0 * 0.75)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Mm {
        Mm(value.0 * 25.4 / 72.0)
    }
}

/// The unit a page geometry is expressed in
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display("pt")]
    Pt,
    #[default]
    #[display("mm")]
    Mm,
    #[display("in")]
    In,
    #[display("px")]
    Px,
}

impl Unit {
    /// How many points one of this unit spans
    pub fn points_per_unit(self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::In => 72.0,
            Unit::Px => 0.75,
        }
    }

    /// Convert a bare value in this unit to points
    pub fn to_pt(self, value: f32) -> Pt {
        Pt(value * self.points_per_unit())
    }

    /// Convert points to a bare value in this unit
    pub fn from_pt(self, value: Pt) -> f32 {
        value.0 / self.points_per_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn a4_width_in_points() {
        let pt: Pt = Mm(210.0).into();
        assert!(close(*pt, 595.2756));
    }

    #[test]
    fn css_pixels_are_three_quarters_of_a_point() {
        let pt: Pt = Px(800.0).into();
        assert_eq!(pt, Pt(600.0));
    }

    #[test]
    fn unit_round_trips_through_points() {
        for unit in [Unit::Pt, Unit::Mm, Unit::In, Unit::Px] {
            let pt = unit.to_pt(42.0);
            assert!(close(unit.from_pt(pt), 42.0), "{unit}");
        }
    }

    #[test]
    fn arithmetic_stays_typed() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert_eq!(Pt(10.0) * 2.0, Pt(20.0));
        assert_eq!(Pt(10.0) / Pt(4.0), 2.5);
    }

    #[test]
    fn lengths_read_as_their_magnitude() {
        assert_eq!(*Mm(210.0), 210.0);
        assert_eq!(Px(12.0).abs(), 12.0);
        assert!(In(-1.0).is_sign_negative());
    }
}
