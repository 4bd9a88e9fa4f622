//! The drawing capability the layout code renders into.
//!
//! Layout never touches pixels. It describes what goes where through the [`Surface`]
//! trait, so bar patterns and label layouts can be checked without a real rendering
//! backend. [`Scene`] is the implementation this crate ships: it records every draw
//! call and can later be rasterized for export.

use crate::bars::BarSpec;
use crate::colour::{colours, Colour};
use crate::font::Font;
use crate::layout::LineLayout;
use std::rc::Rc;

/// An axis-aligned box on a surface, in pixels, measured from the top-left corner
/// with y growing downwards
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Frame {
        Frame {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Which point of a text run its anchor x-coordinate refers to
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub colour: Colour,
    pub anchor: TextAnchor,
    /// Extra space after every character
    pub letter_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            size: 12.0,
            colour: colours::BLACK,
            anchor: TextAnchor::Start,
            letter_spacing: 0.0,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32, colour: Colour) -> TextStyle {
        TextStyle {
            size,
            colour,
            ..TextStyle::default()
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> TextStyle {
        self.anchor = anchor;
        self
    }

    pub fn spaced(mut self, letter_spacing: f32) -> TextStyle {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// Something a ticket card can be drawn onto
pub trait Surface {
    /// Fill a box with a solid colour
    fn fill_rect(&mut self, frame: Frame, colour: Colour);

    /// Draw every stripe of `bars` inside `within`
    fn draw_bars(&mut self, bars: &BarSpec, within: Frame, colour: Colour);

    /// Draw a rotated label: `within` is the strip on the surface, the lines are in
    /// the label's unrotated space and `label.transform` maps them onto the strip
    fn draw_label(&mut self, label: &LineLayout, within: Frame, style: &TextStyle);

    /// Draw a single run of text with its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        frame: Frame,
        colour: Colour,
    },
    Bars {
        bars: BarSpec,
        within: Frame,
        colour: Colour,
    },
    Label {
        label: LineLayout,
        within: Frame,
        style: TextStyle,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        style: TextStyle,
    },
}

/// A fixed-size region that remembers what was drawn on it, in order.
///
/// A scene is the "live" rendering of a card: it can be handed to a print host as is,
/// or captured into a bitmap (see [`RenderRegion`](crate::RenderRegion)) for export.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Colour,
    pub elements: Vec<Element>,
    font: Option<Rc<Font>>,
}

impl Scene {
    /// An empty, white scene
    pub fn new(width: f32, height: f32) -> Scene {
        Scene {
            width,
            height,
            background: colours::WHITE,
            elements: Vec::new(),
            font: None,
        }
    }

    /// Use `font` for every text run in the scene. Without a font, text is recorded
    /// but cannot be rasterized.
    pub fn with_font(mut self, font: Rc<Font>) -> Scene {
        self.font = Some(font);
        self
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_deref()
    }

    /// The box the whole scene covers
    pub fn frame(&self) -> Frame {
        Frame::new(0.0, 0.0, self.width, self.height)
    }

    /// Forget everything drawn so far, keeping size, background and font
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Every text run in the scene, including label lines, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().flat_map(|element| {
            let texts: Vec<&str> = match element {
                Element::Text { text, .. } => vec![text.as_str()],
                Element::Label { label, .. } => {
                    label.lines.iter().map(|l| l.text.as_str()).collect()
                }
                _ => Vec::new(),
            };
            texts
        })
    }
}

impl Surface for Scene {
    fn fill_rect(&mut self, frame: Frame, colour: Colour) {
        self.elements.push(Element::Rect { frame, colour });
    }

    fn draw_bars(&mut self, bars: &BarSpec, within: Frame, colour: Colour) {
        self.elements.push(Element::Bars {
            bars: bars.clone(),
            within,
            colour,
        });
    }

    fn draw_label(&mut self, label: &LineLayout, within: Frame, style: &TextStyle) {
        if label.is_empty() {
            return;
        }
        self.elements.push(Element::Label {
            label: label.clone(),
            within,
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle) {
        self.elements.push(Element::Text {
            text: text.to_string(),
            x,
            baseline,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::{generate_bars, BarAxis};
    use crate::layout::layout;

    #[test]
    fn records_draw_calls_in_order() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.fill_rect(scene.frame(), colours::WHITE);
        scene.draw_bars(
            &generate_bars(16.0, 2.0, 1.0, BarAxis::Horizontal),
            Frame::new(0.0, 0.0, 16.0, 10.0),
            colours::BLACK,
        );
        scene.draw_text("GATE", 10.0, 20.0, &TextStyle::default());

        assert_eq!(scene.elements.len(), 3);
        assert!(matches!(scene.elements[0], Element::Rect { .. }));
        assert!(matches!(scene.elements[1], Element::Bars { .. }));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["GATE"]);
    }

    #[test]
    fn empty_labels_draw_nothing() {
        let mut scene = Scene::new(48.0, 200.0);
        let label = layout(&[], 48.0, 200.0, 8.0, 1.0);
        scene.draw_label(&label, scene.frame(), &TextStyle::default());
        assert!(scene.elements.is_empty());
    }

    #[test]
    fn label_lines_are_listed_as_text() {
        let mut scene = Scene::new(48.0, 200.0);
        let lines = vec!["GATES CLOSE".to_string(), "EARLY".to_string()];
        let label = layout(&lines, 48.0, 200.0, 8.0, 1.0);
        scene.draw_label(&label, scene.frame(), &TextStyle::default());
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["GATES CLOSE", "EARLY"]);
    }

    #[test]
    fn frames_without_area_are_empty() {
        assert!(Frame::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Frame::new(0.0, 0.0, 10.0, f32::NAN).is_empty());
        assert!(!Frame::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
