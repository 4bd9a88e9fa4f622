//! Paper sizes and page orientation.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`] trait to turn a paper size to match an [`Orientation`].
//!
//! ```
//! use ticket_pdf::pagesize::{Orientation, PageOrientation, A4};
//!
//! let (w, h) = A4.oriented(Orientation::Landscape);
//! assert!(w > h);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

/// Which way up a page is
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when the content is at least as wide as it is tall. Square content
    /// counts as landscape.
    pub fn of(width: f32, height: f32) -> Orientation {
        if width >= height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation: Sized {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;

    fn oriented(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => self.portrait(),
            Orientation::Landscape => self.landscape(),
        }
    }
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_follows_aspect() {
        assert_eq!(Orientation::of(1200.0, 400.0), Orientation::Landscape);
        assert_eq!(Orientation::of(400.0, 1200.0), Orientation::Portrait);
        assert_eq!(Orientation::of(500.0, 500.0), Orientation::Landscape);
    }

    #[test]
    fn paper_turns_to_match() {
        assert_eq!(LETTER.oriented(Orientation::Landscape), (LETTER.1, LETTER.0));
        assert_eq!(LETTER.oriented(Orientation::Portrait), LETTER);
    }
}
