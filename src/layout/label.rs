use crate::config::Calibration;
use crate::layout::{wrap, Margins, WrapBudget};
use crate::transform::Transform;

/// One line of a label, positioned in the label's unrotated coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Distance of the line's baseline from the top of the rotated block
    pub baseline_y: f32,
    /// Midpoint of the line along the text direction; lines are drawn centred on it
    pub center_x: f32,
}

/// Lines of a label laid out before rotation, together with the one transform that
/// puts them onto the strip.
///
/// Coordinates in `lines` are in the label's own space, where text runs left to right
/// along the strip's long side. They are only ever rotated by `transform`, once, when
/// the label is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub lines: Vec<PlacedLine>,
    pub font_size: f32,
    pub transform: Transform,
}

impl LineLayout {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Lays out already wrapped `lines` for a strip of `strip_width` x `strip_height`
/// that is read with the head tilted left, using the default [`Calibration`].
///
/// See [`RotatedLabel::layout_lines`] for how lines are placed.
pub fn layout(
    lines: &[String],
    strip_width: f32,
    strip_height: f32,
    font_size: f32,
    line_gap: f32,
) -> LineLayout {
    RotatedLabel {
        width: strip_width,
        height: strip_height,
        font_size,
        line_gap,
        ..RotatedLabel::default()
    }
    .layout_lines(lines)
}

/// A narrow vertical strip carrying a short notice, drawn rotated a quarter turn
/// counter-clockwise so that it reads bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedLabel {
    /// Width of the strip as it sits on the card
    pub width: f32,
    /// Height of the strip as it sits on the card
    pub height: f32,
    /// Inset between the strip edges and the text
    pub padding: Margins,
    pub font_size: f32,
    /// Extra space between consecutive lines
    pub line_gap: f32,
    pub calibration: Calibration,
}

impl Default for RotatedLabel {
    fn default() -> Self {
        RotatedLabel {
            width: 48.0,
            height: 200.0,
            padding: Margins::all(6.0),
            font_size: 8.0,
            line_gap: 1.0,
            calibration: Calibration::default(),
        }
    }
}

impl RotatedLabel {
    pub fn new(width: f32, height: f32) -> RotatedLabel {
        RotatedLabel {
            width,
            height,
            ..RotatedLabel::default()
        }
    }

    pub fn padding(&mut self, padding: Margins) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn font_size(&mut self, font_size: f32) -> &mut Self {
        self.font_size = font_size;
        self
    }

    pub fn line_gap(&mut self, line_gap: f32) -> &mut Self {
        self.line_gap = line_gap;
        self
    }

    pub fn calibration(&mut self, calibration: Calibration) -> &mut Self {
        self.calibration = calibration;
        self
    }

    /// Distance between consecutive baselines
    pub fn line_height(&self) -> f32 {
        self.font_size + self.line_gap
    }

    /// How much text the strip holds once rotated
    pub fn budget(&self) -> WrapBudget {
        WrapBudget::for_rotated_strip(
            self.width,
            self.height,
            &self.padding,
            self.font_size,
            self.line_gap,
            &self.calibration,
        )
    }

    /// The draw-time transform: rotate a quarter turn counter-clockwise, then shift
    /// down by the strip height so the rotated block lands back inside the strip
    pub fn transform(&self) -> Transform {
        Transform::rotate_degrees(-90.0).with_translate(0.0, self.height)
    }

    /// Wraps `message` to the strip's budget and lays out the resulting lines.
    /// Text that does not fit is dropped.
    pub fn layout_message(&self, message: &str) -> LineLayout {
        let budget = self.budget();
        log::debug!(
            "rotated label {}x{}: {} chars x {} lines",
            self.width,
            self.height,
            budget.max_chars_per_line,
            budget.max_lines
        );
        let mut lines = wrap(message, budget.max_chars_per_line, usize::MAX);
        if lines.len() > budget.max_lines {
            log::warn!(
                "rotated label holds {} lines, dropping {}",
                budget.max_lines,
                lines.len() - budget.max_lines
            );
            lines.truncate(budget.max_lines);
        }
        self.layout_lines(&lines)
    }

    /// Places `lines` in the strip's unrotated space.
    ///
    /// Every line is centred on the midpoint of the strip's long side. The block of
    /// lines as a whole is centred across the strip's short side: the first baseline
    /// starts half a block above the middle, nudged down by the calibrated baseline
    /// tweak, and each further line sits one line height below the previous one.
    pub fn layout_lines(&self, lines: &[String]) -> LineLayout {
        let line_height = self.line_height();
        let block_height = lines.len() as f32 * line_height;
        let start_y = self.width / 2.0 - block_height / 2.0
            + self.font_size * self.calibration.baseline_tweak_ratio;
        let center_x = self.height / 2.0;

        LineLayout {
            lines: lines
                .iter()
                .enumerate()
                .map(|(i, text)| PlacedLine {
                    text: text.clone(),
                    baseline_y: start_y + i as f32 * line_height,
                    center_x,
                })
                .collect(),
            font_size: self.font_size,
            transform: self.transform(),
        }
    }
}
