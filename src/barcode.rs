//! Sizing a linear barcode to its container.
//!
//! A barcode renderer draws one module per bar unit; left alone its output is as wide
//! as the encoded value is long, which rarely matches the box reserved for it on the
//! card. [`compute_bar_width`] derives the module width that makes it fill the box.
//! Call it again whenever the box is resized or the value changes.

use crate::config::Calibration;

/// Width of one bar unit so that `symbol_count` symbols fill `container_width`, using
/// the default [`Calibration`].
///
/// Returns 0 for a container that is not a positive width. A `symbol_count` of 0 is
/// replaced by the default count, so the result is always finite.
pub fn compute_bar_width(container_width: f32, symbol_count: usize) -> f32 {
    BarcodeFit::default().bar_width(container_width, symbol_count)
}

/// Calibration for fitting a barcode to its container
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeFit {
    /// How many bar units a single symbol visually occupies
    pub symbol_units: f32,
    /// Symbol count substituted when the value is empty
    pub default_symbol_count: usize,
}

impl Default for BarcodeFit {
    fn default() -> Self {
        BarcodeFit::from(&Calibration::default())
    }
}

impl From<&Calibration> for BarcodeFit {
    fn from(calibration: &Calibration) -> Self {
        BarcodeFit {
            symbol_units: calibration.barcode_symbol_units,
            default_symbol_count: calibration.default_symbol_count,
        }
    }
}

impl BarcodeFit {
    /// `container_width / (symbol_count * symbol_units)`, never negative
    pub fn bar_width(&self, container_width: f32, symbol_count: usize) -> f32 {
        if !container_width.is_finite() || container_width <= 0.0 {
            return 0.0;
        }
        let symbols = match symbol_count {
            0 => self.default_symbol_count.max(1),
            n => n,
        };
        let units = symbols as f32 * self.symbol_units;
        if !units.is_finite() || units <= 0.0 {
            return 0.0;
        }
        container_width / units
    }

    /// Bar width for a barcode encoding `value`, one symbol per character
    pub fn bar_width_for(&self, container_width: f32, value: &str) -> f32 {
        self.bar_width(container_width, value.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_the_container() {
        // twelve digits across 240 units: 20 units per symbol, 2 per bar unit
        assert_eq!(compute_bar_width(240.0, 12), 2.0);
        assert_eq!(compute_bar_width(120.0, 6), 2.0);
    }

    #[test]
    fn zero_symbols_uses_the_default_count() {
        let width = compute_bar_width(240.0, 0);
        assert!(width.is_finite());
        assert!(width > 0.0);
        assert_eq!(width, compute_bar_width(240.0, 12));
    }

    #[test]
    fn never_negative() {
        assert_eq!(compute_bar_width(0.0, 12), 0.0);
        assert_eq!(compute_bar_width(-50.0, 12), 0.0);
        assert_eq!(compute_bar_width(f32::INFINITY, 12), 0.0);
    }

    #[test]
    fn recalibrated_symbol_units() {
        let fit = BarcodeFit::from(&*Calibration::new().barcode_symbol_units(5.0));
        assert_eq!(fit.bar_width(240.0, 12), 4.0);
    }

    #[test]
    fn width_follows_the_value() {
        let fit = BarcodeFit::default();
        assert_eq!(fit.bar_width_for(240.0, "123456789012"), 2.0);
        assert_eq!(fit.bar_width_for(240.0, ""), 2.0);
        assert_eq!(fit.bar_width_for(240.0, "123456"), 4.0);
    }
}
