//! Decorative bar patterns.
//!
//! A [`BarSpec`] is a run of alternating thin and thick stripes that gives a ticket the
//! visual texture of a barcode. It encodes nothing: the pattern is a pure function of
//! the strip length, stripe thickness and gap, so the same strip always looks the same
//! no matter which record is printed on the card.

use crate::surface::Frame;

/// The axis stripes are laid out along
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BarAxis {
    /// Stripes run left to right; each stripe is a vertical bar
    Horizontal,
    /// Stripes run top to bottom; each stripe is a horizontal bar
    Vertical,
}

/// One drawn stripe: where it starts along the axis and how thick it is
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stripe {
    pub offset: f32,
    pub thickness: f32,
}

impl Stripe {
    pub fn end(&self) -> f32 {
        self.offset + self.thickness
    }
}

/// An ordered run of stripes along one axis. The space between stripes is left
/// undrawn.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub axis: BarAxis,
    pub axis_length: f32,
    pub stripes: Vec<Stripe>,
}

impl BarSpec {
    pub fn is_empty(&self) -> bool {
        self.stripes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stripes.len()
    }

    /// Where the last stripe ends, or 0 for an empty pattern
    pub fn end(&self) -> f32 {
        self.stripes.last().map(Stripe::end).unwrap_or_default()
    }

    /// Lays the stripes out inside `within`, starting at its top-left corner and
    /// spanning its full extent across the axis
    pub fn stripe_frames(&self, within: Frame) -> impl Iterator<Item = Frame> + '_ {
        self.stripes.iter().map(move |stripe| match self.axis {
            BarAxis::Horizontal => Frame {
                x: within.x + stripe.offset,
                y: within.y,
                width: stripe.thickness,
                height: within.height,
            },
            BarAxis::Vertical => Frame {
                x: within.x,
                y: within.y + stripe.offset,
                width: within.width,
                height: stripe.thickness,
            },
        })
    }
}

/// Generates a bar pattern along an axis of `axis_length`, alternating a stripe of
/// `base_thickness` with one of `base_thickness + 1`, each followed by `gap` of empty
/// space. Generation stops once the running offset reaches the end of the axis; a
/// final stripe that would overflow is cut to fit when what remains is still at least
/// `base_thickness` thick, and dropped otherwise.
///
/// Degenerate input is clamped rather than rejected: a `base_thickness` below 1 is
/// raised to 1, a negative `gap` is treated as 0, and an `axis_length` that is not a
/// positive number produces an empty pattern. On axes so long that a stripe can no
/// longer move an `f32` offset forward, the pattern ends at the last distinct offset.
pub fn generate_bars(axis_length: f32, base_thickness: f32, gap: f32, axis: BarAxis) -> BarSpec {
    let mut spec = BarSpec {
        axis,
        axis_length,
        stripes: Vec::new(),
    };
    if !axis_length.is_finite() || axis_length <= 0.0 {
        return spec;
    }

    let base = if base_thickness.is_finite() {
        base_thickness.max(1.0)
    } else {
        1.0
    };
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };

    // accumulate in f64 so small stripes keep advancing on long axes
    let length = f64::from(axis_length);
    let mut offset = 0.0f64;
    let mut thin = true;
    while offset < length {
        let thickness = if thin { base } else { base + 1.0 };
        let at = offset as f32;
        if spec.stripes.last().is_some_and(|last| at <= last.offset) {
            log::warn!("bar pattern stopped at {at}: stripes of {thickness} no longer advance");
            break;
        }
        let remaining = length - offset;
        if f64::from(thickness) <= remaining {
            spec.stripes.push(Stripe {
                offset: at,
                thickness,
            });
        } else {
            if remaining >= f64::from(base) {
                spec.stripes.push(Stripe {
                    offset: at,
                    thickness: remaining as f32,
                });
            }
            break;
        }
        offset += f64::from(thickness) + f64::from(gap);
        thin = !thin;
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offsets(spec: &BarSpec) -> Vec<(f32, f32)> {
        spec.stripes.iter().map(|s| (s.offset, s.thickness)).collect()
    }

    #[test]
    fn alternates_thin_and_thick() {
        let spec = generate_bars(16.0, 2.0, 1.0, BarAxis::Horizontal);
        assert_eq!(
            offsets(&spec),
            vec![(0.0, 2.0), (3.0, 3.0), (7.0, 2.0), (10.0, 3.0), (14.0, 2.0)]
        );
    }

    #[test]
    fn final_stripe_is_truncated_to_fit() {
        // the thick stripe at 14 would run to 17; 2 remain, which is still legible
        let spec = generate_bars(16.0, 2.0, 1.0, BarAxis::Vertical);
        assert_eq!(spec.end(), 16.0);

        let spec = generate_bars(13.0, 2.0, 1.0, BarAxis::Vertical);
        assert_eq!(offsets(&spec), vec![(0.0, 2.0), (3.0, 3.0), (7.0, 2.0), (10.0, 3.0)]);
    }

    #[test]
    fn final_sliver_is_dropped() {
        // 1 unit remains after the stripe at 10..13 and the gap; too thin to print
        let spec = generate_bars(15.0, 2.0, 1.0, BarAxis::Horizontal);
        assert_eq!(offsets(&spec).last(), Some(&(10.0, 3.0)));
        assert!(spec.end() <= 15.0);
    }

    #[test]
    fn empty_axis_yields_no_stripes() {
        assert!(generate_bars(0.0, 2.0, 1.0, BarAxis::Horizontal).is_empty());
        assert!(generate_bars(-5.0, 2.0, 1.0, BarAxis::Horizontal).is_empty());
        assert!(generate_bars(f32::NAN, 2.0, 1.0, BarAxis::Horizontal).is_empty());
    }

    #[test]
    fn thickness_is_clamped_to_one() {
        let spec = generate_bars(10.0, 0.0, 1.0, BarAxis::Horizontal);
        assert_eq!(spec.stripes[0].thickness, 1.0);
        assert_eq!(spec.stripes[1].thickness, 2.0);
        assert!(spec.stripes.iter().all(|s| s.thickness >= 1.0));
    }

    #[test]
    fn offsets_increase_and_stay_within_bounds() {
        for length in 0..400 {
            let length = length as f32 * 0.5;
            for base in [0.5, 1.0, 2.0, 3.5] {
                for gap in [0.0, 1.0, 2.5] {
                    let spec = generate_bars(length, base, gap, BarAxis::Vertical);
                    for pair in spec.stripes.windows(2) {
                        assert!(pair[0].offset < pair[1].offset);
                    }
                    assert!(spec.end() <= length + base.max(1.0));
                }
            }
        }
    }

    #[test]
    fn long_axes_terminate_with_increasing_offsets() {
        let length = 2f32.powi(25) + 64.0;
        let spec = generate_bars(length, 1.0, 0.0, BarAxis::Horizontal);
        assert!(!spec.is_empty());
        for pair in spec.stripes.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
        assert!(spec.end() <= length + 1.0);
        // every whole offset is exact up to 2^24, so the pattern reaches at least that far
        assert!(spec.stripes.last().unwrap().offset >= 2f32.powi(24) - 3.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_bars(180.0, 2.0, 1.0, BarAxis::Vertical);
        let b = generate_bars(180.0, 2.0, 1.0, BarAxis::Vertical);
        assert_eq!(a, b);
    }

    #[test]
    fn stripes_span_the_frame_across_the_axis() {
        let spec = generate_bars(8.0, 2.0, 1.0, BarAxis::Vertical);
        let frames: Vec<Frame> = spec.stripe_frames(Frame::new(5.0, 10.0, 16.0, 8.0)).collect();
        assert_eq!(frames[0], Frame::new(5.0, 10.0, 16.0, 2.0));
        assert_eq!(frames[1], Frame::new(5.0, 13.0, 16.0, 3.0));
    }
}
