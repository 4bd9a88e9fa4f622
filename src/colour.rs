/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a `#rrggbb` or `#rgb` hex colour, as used by stylesheets
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Colour::new_rgb_bytes(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Colour::new_rgb_bytes(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// The colour as 8-bit RGB channels
    pub fn to_rgb_bytes(self) -> [u8; 3] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self {
            Colour::RGB { r, g, b } => [byte(r), byte(g), byte(b)],
            Colour::Grey { g } => [byte(g); 3],
        }
    }
}

/// The palette a ticket card is painted with
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// `#666666`, secondary captions
    pub const CAPTION_GREY: Colour = Colour::Grey { g: 0.4 };
    /// `#f8f9fa`, the stub background
    pub const STUB_GREY: Colour = Colour::RGB {
        r: 248.0 / 255.0,
        g: 249.0 / 255.0,
        b: 250.0 / 255.0,
    };
    /// `#ccc`, the perforation between panel and stub
    pub const PERFORATION_GREY: Colour = Colour::Grey { g: 0.8 };
    /// `#0066cc`, the airline header
    pub const AIRLINE_BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.4,
        b: 0.8,
    };
    /// `#d32f2f`, the warning strip
    pub const WARNING_RED: Colour = Colour::RGB {
        r: 211.0 / 255.0,
        g: 47.0 / 255.0,
        b: 47.0 / 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Colour::from_hex("#d32f2f"), Some(colours::WARNING_RED));
        assert_eq!(
            Colour::from_hex("#ccc").map(Colour::to_rgb_bytes),
            Some([204, 204, 204])
        );
        assert_eq!(Colour::from_hex("#12"), None);
        assert_eq!(Colour::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn grey_expands_to_rgb() {
        assert_eq!(colours::BLACK.to_rgb_bytes(), [0, 0, 0]);
        assert_eq!(colours::WHITE.to_rgb_bytes(), [255, 255, 255]);
    }
}
