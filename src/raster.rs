//! Rasterizing a [`Scene`] into a bitmap.

use crate::capture::{capture_dimensions, CaptureResult, RenderRegion};
use crate::colour::Colour;
use crate::error::CaptureError;
use crate::font::Font;
use crate::surface::{Element, Frame, Scene, TextAnchor, TextStyle};
use crate::transform::Transform;
use image::{Rgba, RgbaImage};
use owned_ttf_parser::OutlineBuilder;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap};

impl RenderRegion for Scene {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    async fn capture(&self, scale: f32) -> Result<CaptureResult, CaptureError> {
        let (width, height) = capture_dimensions(self.size(), scale)?;
        log::debug!(
            "capturing {}x{} scene at {scale}x into {width}x{height}",
            self.width,
            self.height
        );
        let pixmap = rasterize(self, width, height, scale)?;
        CaptureResult::new(to_image(&pixmap), scale)
    }
}

/// Paints every element of `scene`, in order, onto a fresh `width` x `height` pixmap,
/// scaling scene coordinates by `scale`.
///
/// A scene holding text but no font is refused with [CaptureError::MissingFont]
/// before anything is painted.
pub fn rasterize(
    scene: &Scene,
    width: u32,
    height: u32,
    scale: f32,
) -> Result<Pixmap, CaptureError> {
    let font = scene.font();
    if font.is_none() {
        let runs = scene.texts().filter(|text| !text.is_empty()).count();
        if runs > 0 {
            return Err(CaptureError::MissingFont { runs });
        }
    }

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        CaptureError::Unreadable(format!("cannot allocate a {width}x{height} bitmap"))
    })?;
    pixmap.fill(sk_colour(scene.background));

    let base = tiny_skia::Transform::from_scale(scale, scale);

    for element in scene.elements.iter() {
        match (element, font) {
            (Element::Rect { frame, colour }, _) => fill_frame(&mut pixmap, *frame, *colour, base),
            (
                Element::Bars {
                    bars,
                    within,
                    colour,
                },
                _,
            ) => {
                for stripe in bars.stripe_frames(*within) {
                    fill_frame(&mut pixmap, stripe, *colour, base);
                }
            }
            (
                Element::Text {
                    text,
                    x,
                    baseline,
                    style,
                },
                Some(font),
            ) => draw_run(&mut pixmap, font, text, *x, *baseline, style, base),
            (
                Element::Label {
                    label,
                    within,
                    style,
                },
                Some(font),
            ) => {
                let placed = Transform::translate(within.x, within.y);
                let device = base.pre_concat(sk_transform(label.transform.then(placed)));
                let style = TextStyle {
                    size: label.font_size,
                    ..style.clone()
                };
                for line in label.lines.iter() {
                    draw_run(
                        &mut pixmap,
                        font,
                        &line.text,
                        line.center_x,
                        line.baseline_y,
                        &style,
                        device,
                    );
                }
            }
            // only empty runs get here without a font
            (Element::Text { .. } | Element::Label { .. }, None) => {}
        }
    }

    Ok(pixmap)
}

fn fill_frame(pixmap: &mut Pixmap, frame: Frame, colour: Colour, transform: tiny_skia::Transform) {
    let Some(rect) = tiny_skia::Rect::from_xywh(frame.x, frame.y, frame.width, frame.height) else {
        return;
    };
    let mut paint = solid(colour);
    // stripes must keep hard edges
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, transform, None);
}

fn draw_run(
    pixmap: &mut Pixmap,
    font: &Font,
    text: &str,
    x: f32,
    baseline: f32,
    style: &TextStyle,
    transform: tiny_skia::Transform,
) {
    if text.is_empty() || !(style.size > 0.0) {
        return;
    }

    let width = font.width_of_text(text, style.size, style.letter_spacing);
    let mut pen_x = match style.anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width / 2.0,
        TextAnchor::End => x - width,
    };
    let scale = font.units_to_px(style.size);
    let paint = solid(style.colour);

    for ch in text.chars() {
        let Some(glyph) = font.glyph_or_fallback(ch) else {
            continue;
        };
        let mut builder = GlyphPathBuilder::new(pen_x, baseline, scale);
        if font.outline_glyph(glyph, &mut builder) {
            if let Some(path) = builder.finish() {
                pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
        pen_x += font.advance(glyph, style.size) + style.letter_spacing;
    }
}

fn solid(colour: Colour) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(sk_colour(colour));
    paint
}

fn sk_colour(colour: Colour) -> tiny_skia::Color {
    let [r, g, b] = colour.to_rgb_bytes();
    tiny_skia::Color::from_rgba8(r, g, b, u8::MAX)
}

fn sk_transform(t: Transform) -> tiny_skia::Transform {
    tiny_skia::Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}

/// Copies a pixmap out into a straight-alpha RGBA image
pub fn to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

/// Builds a glyph path in surface space: font units are scaled to pixels and flipped,
/// since fonts grow upwards from the baseline and surfaces grow downwards
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            origin_x,
            origin_y,
            scale,
        }
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
