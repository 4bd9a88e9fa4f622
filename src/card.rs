//! The boarding pass card itself.
//!
//! A card is 600x200 pixels: a white main panel on the left carrying the airline,
//! passenger, route, flight details and a barcode; a perforation; and a grey stub
//! on the right repeating the essentials, with a red warning strip along its outer
//! edge. [`TicketCard::draw`] lays all of it out on any [`Surface`].

use crate::barcode::BarcodeFit;
use crate::bars::{generate_bars, BarAxis};
use crate::colour::{colours, Colour};
use crate::font::Font;
use crate::layout::{LineLayout, RotatedLabel};
use crate::surface::{Frame, Scene, Surface, TextAnchor, TextStyle};
use crate::ticket::TicketRecord;
use std::rc::Rc;

/// Printed on the warning strip
pub const NOTICE: &str = "BOARDING GATES CLOSE 15 MINUTES BEFORE DEPARTURE TIME. \
                          PASSENGERS MAY NOT BE ACCEPTED FOR TRAVEL AFTER GATES CLOSE.";

/// Colours of a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub background: Colour,
    pub ink: Colour,
    pub accent: Colour,
    pub caption: Colour,
    pub stub: Colour,
    pub perforation: Colour,
    pub warning: Colour,
    pub warning_ink: Colour,
}

impl Default for CardStyle {
    fn default() -> Self {
        CardStyle {
            background: colours::WHITE,
            ink: colours::BLACK,
            accent: colours::AIRLINE_BLUE,
            caption: colours::CAPTION_GREY,
            stub: colours::STUB_GREY,
            perforation: colours::PERFORATION_GREY,
            warning: colours::WARNING_RED,
            warning_ink: colours::WHITE,
        }
    }
}

/// Geometry and content settings for laying out a boarding pass
#[derive(Debug, Clone, PartialEq)]
pub struct TicketCard {
    pub width: f32,
    pub height: f32,
    /// Width of the tear-off stub, warning strip included
    pub stub_width: f32,
    pub style: CardStyle,
    /// The rotated strip along the right edge
    pub warning: RotatedLabel,
    pub notice: String,
    pub bar_thickness: f32,
    pub bar_gap: f32,
    pub barcode: BarcodeFit,
}

impl Default for TicketCard {
    fn default() -> Self {
        TicketCard {
            width: 600.0,
            height: 200.0,
            stub_width: 150.0,
            style: CardStyle::default(),
            warning: RotatedLabel::default(),
            notice: NOTICE.to_string(),
            bar_thickness: 2.0,
            bar_gap: 1.0,
            barcode: BarcodeFit::default(),
        }
    }
}

const PANEL_PADDING: f32 = 20.0;
const CONTENT_INDENT: f32 = 25.0;
const STUB_PADDING: f32 = 10.0;

impl TicketCard {
    pub fn new() -> TicketCard {
        TicketCard::default()
    }

    pub fn style(&mut self, style: CardStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn notice<S: ToString>(&mut self, notice: S) -> &mut Self {
        self.notice = notice.to_string();
        self
    }

    pub fn warning(&mut self, warning: RotatedLabel) -> &mut Self {
        self.warning = warning;
        self
    }

    fn main_panel(&self) -> Frame {
        Frame::new(0.0, 0.0, self.width - self.stub_width, self.height)
    }

    fn stub(&self) -> Frame {
        let main = self.main_panel();
        Frame::new(main.right(), 0.0, self.stub_width, self.height)
    }

    /// Where the warning strip sits, flush with the right edge
    pub fn warning_strip(&self) -> Frame {
        Frame::new(
            self.width - self.warning.width,
            0.0,
            self.warning.width,
            self.warning.height.min(self.height),
        )
    }

    /// The box the adaptive barcode fills
    pub fn barcode_frame(&self) -> Frame {
        let main = self.main_panel();
        let left = PANEL_PADDING + CONTENT_INDENT;
        Frame::new(left, main.bottom() - 38.0, main.right() - PANEL_PADDING - left, 18.0)
    }

    /// The warning notice wrapped and laid out for the strip
    pub fn warning_label(&self) -> LineLayout {
        self.warning.layout_message(&self.notice)
    }

    /// A blank scene the size of the card, ready to draw on
    pub fn scene(&self, font: Option<Rc<Font>>) -> Scene {
        let mut scene = Scene::new(self.width, self.height);
        scene.background = self.style.background;
        match font {
            Some(font) => scene.with_font(font),
            None => scene,
        }
    }

    /// Lay out the whole card for `record`
    pub fn draw<S: Surface + ?Sized>(&self, record: &TicketRecord, surface: &mut S) {
        surface.fill_rect(Frame::new(0.0, 0.0, self.width, self.height), self.style.background);
        self.draw_main_panel(record, surface);
        self.draw_perforation(surface);
        self.draw_stub(record, surface);
        self.draw_warning(surface);
    }

    fn draw_main_panel<S: Surface + ?Sized>(&self, record: &TicketRecord, surface: &mut S) {
        let main = self.main_panel();
        let style = &self.style;

        let strip = Frame::new(5.0, 10.0, 16.0, main.height - 20.0);
        let bars = generate_bars(strip.height, self.bar_thickness, self.bar_gap, BarAxis::Vertical);
        surface.draw_bars(&bars, strip, style.ink);

        let left = PANEL_PADDING + CONTENT_INDENT;
        let right = main.right() - PANEL_PADDING;

        surface.draw_text(
            &record.airline.to_uppercase(),
            left,
            38.0,
            &TextStyle::new(18.0, style.accent),
        );
        surface.draw_text(
            "BOARDING PASS",
            right,
            36.0,
            &TextStyle::new(12.0, style.caption).anchored(TextAnchor::End),
        );

        surface.draw_text(&record.full_name, left, 68.0, &TextStyle::new(16.0, style.ink));
        surface.draw_text(
            &format!(
                "{}  \u{2192}  {}",
                airport_code(&record.origin_airport),
                airport_code(&record.destination_airport)
            ),
            left,
            88.0,
            &TextStyle::new(14.0, style.ink),
        );
        surface.draw_text(
            &format!(
                "{} \u{2192} {}",
                airport_city(&record.origin_airport),
                airport_city(&record.destination_airport)
            ),
            left,
            104.0,
            &TextStyle::new(12.0, style.caption),
        );

        let details = [
            ("FLIGHT", record.flight_number.clone()),
            ("DATE", record.ticket_date()),
            ("BOARDING", record.boarding_time.clone()),
            ("GATE", record.gate.clone()),
            ("SEAT", record.seat.clone()),
        ];
        let column = (right - left) / details.len() as f32;
        for (i, (caption, value)) in details.iter().enumerate() {
            let x = left + i as f32 * column;
            surface.draw_text(caption, x, 128.0, &TextStyle::new(10.0, style.caption));
            surface.draw_text(value, x, 144.0, &TextStyle::new(12.0, style.ink));
        }

        let barcode = self.barcode_frame();
        let bar_width = self.barcode.bar_width_for(barcode.width, &record.record_locator);
        let bars = generate_bars(barcode.width, bar_width, bar_width, BarAxis::Horizontal);
        surface.draw_bars(&bars, barcode, style.ink);
    }

    fn draw_perforation<S: Surface + ?Sized>(&self, surface: &mut S) {
        let x = self.main_panel().right() - 1.0;
        let mut y = 0.0;
        while y < self.height {
            surface.fill_rect(
                Frame::new(x, y, 2.0, 6.0_f32.min(self.height - y)),
                self.style.perforation,
            );
            y += 10.0;
        }
    }

    fn draw_stub<S: Surface + ?Sized>(&self, record: &TicketRecord, surface: &mut S) {
        let stub = self.stub();
        let style = &self.style;
        surface.fill_rect(
            Frame::new(stub.x + 1.0, stub.y, stub.width - 1.0, stub.height),
            style.stub,
        );

        // the warning strip covers the right of the stub; centre on what is left
        let content = Frame::new(
            stub.x + STUB_PADDING,
            stub.y + STUB_PADDING,
            stub.width - self.warning.width - 2.0 * STUB_PADDING,
            stub.height - 2.0 * STUB_PADDING,
        );
        let centre = content.x + content.width / 2.0;
        let centred = |size: f32, colour: Colour| {
            TextStyle::new(size, colour).anchored(TextAnchor::Middle)
        };

        surface.draw_text("BOARDING PASS", centre, 22.0, &centred(8.0, style.caption));
        surface.draw_text(&record.full_name, centre, 48.0, &centred(9.0, style.ink));
        surface.draw_text(
            &format!(
                "{} \u{2192} {}",
                airport_code(&record.origin_airport),
                airport_code(&record.destination_airport)
            ),
            centre,
            60.0,
            &centred(8.0, style.caption),
        );
        surface.draw_text(&record.flight_number, centre, 86.0, &centred(10.0, style.ink));
        surface.draw_text(&record.stub_date(), centre, 98.0, &centred(8.0, style.caption));
        surface.draw_text(&record.seat, centre, 111.0, &centred(9.0, style.ink));
        surface.draw_text(&record.sequence, centre, 123.0, &centred(8.0, style.caption));

        let strip_width = content.width.min(90.0);
        let strip = Frame::new(centre - strip_width / 2.0, content.bottom() - 16.0, strip_width, 16.0);
        let bars = generate_bars(strip.width, self.bar_thickness, self.bar_gap, BarAxis::Horizontal);
        surface.draw_bars(&bars, strip, style.ink);
    }

    fn draw_warning<S: Surface + ?Sized>(&self, surface: &mut S) {
        let strip = self.warning_strip();
        surface.fill_rect(strip, self.style.warning);
        let label = self.warning_label();
        let style = TextStyle::new(self.warning.font_size, self.style.warning_ink)
            .anchored(TextAnchor::Middle)
            .spaced(0.2);
        surface.draw_label(&label, strip, &style);
    }
}

/// `JFK NEW YORK` -> `JFK`
fn airport_code(airport: &str) -> &str {
    airport.split_whitespace().next().unwrap_or(airport)
}

/// `JFK NEW YORK` -> `NEW YORK`; falls back to the whole value when there is no city
fn airport_city(airport: &str) -> &str {
    match airport.trim().split_once(char::is_whitespace) {
        Some((_, city)) if !city.trim().is_empty() => city.trim(),
        _ => airport.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Element;
    use pretty_assertions::assert_eq;

    fn drawn(record: &TicketRecord) -> Scene {
        let card = TicketCard::default();
        let mut scene = card.scene(None);
        card.draw(record, &mut scene);
        scene
    }

    #[test]
    fn airports_split_into_code_and_city() {
        assert_eq!(airport_code("JFK NEW YORK"), "JFK");
        assert_eq!(airport_city("JFK NEW YORK"), "NEW YORK");
        assert_eq!(airport_city("DUB"), "DUB");
        assert_eq!(airport_code(""), "");
    }

    #[test]
    fn prints_the_record() {
        let scene = drawn(&TicketRecord::default());
        let texts: Vec<&str> = scene.texts().collect();
        for expected in ["AMERICAN AIRLINES", "CHRIS O'BRYAN", "AA 208", "APR 23 2025", "23 APR", "52B"] {
            assert!(texts.contains(&expected), "missing {expected}");
        }
        assert!(texts.contains(&"JFK  \u{2192}  DUB"));
    }

    #[test]
    fn warning_strip_carries_the_notice() {
        let card = TicketCard::default();
        assert_eq!(card.warning_strip(), Frame::new(552.0, 0.0, 48.0, 200.0));

        let label = card.warning_label();
        assert_eq!(
            label.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec![
                "BOARDING GATES CLOSE 15 MINUTES BEFORE",
                "DEPARTURE TIME. PASSENGERS MAY NOT BE",
                "ACCEPTED FOR TRAVEL AFTER GATES CLOSE.",
            ]
        );

        let scene = drawn(&TicketRecord::default());
        let warning = scene.elements.iter().find_map(|e| match e {
            Element::Label { within, style, .. } => Some((*within, style.colour)),
            _ => None,
        });
        assert_eq!(warning, Some((card.warning_strip(), colours::WHITE)));
    }

    #[test]
    fn bar_strips_use_the_card_defaults() {
        let scene = drawn(&TicketRecord::default());
        let strips: Vec<(BarAxis, f32, Frame)> = scene
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Bars { bars, within, .. } => Some((bars.axis, bars.axis_length, *within)),
                _ => None,
            })
            .collect();
        assert_eq!(strips.len(), 3);
        assert_eq!(strips[0], (BarAxis::Vertical, 180.0, Frame::new(5.0, 10.0, 16.0, 180.0)));
        assert_eq!(strips[2].0, BarAxis::Horizontal);
        assert_eq!(strips[2].1, 82.0);
    }

    #[test]
    fn barcode_adapts_to_the_locator() {
        let card = TicketCard::default();
        let frame = card.barcode_frame();
        let mut short = TicketRecord::default();
        short.record_locator = "AB".into();
        let bars_for = |record: &TicketRecord| {
            drawn(record)
                .elements
                .iter()
                .filter_map(|e| match e {
                    Element::Bars { bars, within, .. } if *within == frame => Some(bars.clone()),
                    _ => None,
                })
                .next()
        };
        let long = bars_for(&TicketRecord::default()).unwrap();
        let short = bars_for(&short).unwrap();
        assert!(short.stripes[0].thickness > long.stripes[0].thickness);
    }

    #[test]
    fn everything_stays_on_the_card() {
        let scene = drawn(&TicketRecord::default());
        for element in scene.elements.iter() {
            let frame = match element {
                Element::Rect { frame, .. } => *frame,
                Element::Bars { within, .. } => *within,
                Element::Label { within, .. } => *within,
                Element::Text { x, baseline, .. } => Frame::new(*x, *baseline, 0.0, 0.0),
            };
            assert!(frame.x >= 0.0 && frame.right() <= 600.0, "{element:?}");
            assert!(frame.y >= 0.0 && frame.bottom() <= 200.0, "{element:?}");
        }
    }
}
