use crate::TicketError;
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder, OwnedFace};

/// A parsed TrueType or OpenType font, used to measure text and to rasterize glyph
/// outlines when a card is captured.
///
/// All sizes are in surface pixels: a `size` of 8.0 means an em square 8 pixels tall.
pub struct Font {
    pub face: OwnedFace,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("units_per_em", &self.face.as_face_ref().units_per_em())
            .field("glyphs", &self.face.as_face_ref().number_of_glyphs())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TicketError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn for `ch`, falling back to the replacement character and then to
    /// `?` for characters the font doesn't cover
    pub fn glyph_or_fallback(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
    }

    /// Horizontal advance of a glyph at the given size
    pub fn advance(&self, glyph: u16, size: f32) -> f32 {
        self.units_to_px(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(GlyphId(glyph))
                .unwrap_or_default() as f32
    }

    /// Calculate the width of a given string of text given the font size and extra
    /// spacing after every character
    pub fn width_of_text(&self, text: &str, size: f32, letter_spacing: f32) -> f32 {
        text.chars()
            .filter_map(|ch| self.glyph_or_fallback(ch))
            .map(|gid| self.advance(gid, size) + letter_spacing)
            .sum()
    }

    /// Feed the outline of a glyph, in font units, to `builder`. Returns `false` for
    /// glyphs without an outline, such as spaces.
    pub fn outline_glyph(&self, glyph: u16, builder: &mut dyn OutlineBuilder) -> bool {
        self.face
            .as_face_ref()
            .outline_glyph(GlyphId(glyph), builder)
            .is_some()
    }

    /// Scale factor from font units to pixels at `size`
    pub fn units_to_px(&self, size: f32) -> f32 {
        size / self.face.as_face_ref().units_per_em().max(1) as f32
    }
}
