//! Boarding pass cards, laid out for the screen and exported as pixel-accurate PDFs.
//!
//! A [`TicketCard`] draws a [`TicketRecord`] onto any [`Surface`]. The bundled
//! [`Scene`] surface records what was drawn and can be captured into a bitmap at a
//! supersampling scale, which [`export_to_document`] embeds losslessly in a
//! single-page PDF sized to the bitmap's aspect ratio.

mod barcode;
pub use barcode::*;

mod bars;
pub use bars::*;

mod capture;
pub use capture::*;

mod card;
pub use card::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Wrapping and positioning text inside narrow strips
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod print;
pub use print::*;

mod raster;
pub use raster::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod ticket;
pub use ticket::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
