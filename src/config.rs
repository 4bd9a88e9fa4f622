/// Empirical constants that tie character counts and symbol counts to physical size.
///
/// None of these come from real font metrics; they were tuned by eye against a bold
/// uppercase sans-serif at small sizes. Adjust them when switching typefaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    /// Average advance of one glyph as a fraction of the font size
    pub glyph_width_ratio: f32,
    /// How far below the centred block top the first baseline sits, as a fraction of
    /// the font size
    pub baseline_tweak_ratio: f32,
    /// How many bar units a single barcode symbol visually occupies
    pub barcode_symbol_units: f32,
    /// Symbol count assumed when a barcode value is empty
    pub default_symbol_count: usize,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            glyph_width_ratio: 0.6,
            baseline_tweak_ratio: 0.8,
            barcode_symbol_units: 10.0,
            default_symbol_count: 12,
        }
    }
}

impl Calibration {
    /// Create a calibration with the default constants
    pub fn new() -> Calibration {
        Calibration::default()
    }

    pub fn glyph_width_ratio(&mut self, ratio: f32) -> &mut Self {
        self.glyph_width_ratio = ratio;
        self
    }

    pub fn baseline_tweak_ratio(&mut self, ratio: f32) -> &mut Self {
        self.baseline_tweak_ratio = ratio;
        self
    }

    pub fn barcode_symbol_units(&mut self, units: f32) -> &mut Self {
        self.barcode_symbol_units = units;
        self
    }

    pub fn default_symbol_count(&mut self, count: usize) -> &mut Self {
        self.default_symbol_count = count;
        self
    }

    /// Approximate advance of one glyph at `font_size`
    pub fn approx_char_width(&self, font_size: f32) -> f32 {
        font_size * self.glyph_width_ratio
    }
}
