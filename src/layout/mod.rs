//! Fitting text into the small boxes of a ticket card.
//!
//! # Layout Functions
//!
//! - [`wrap`](crate::layout::wrap) - greedy word wrapping against a character and line budget
//! - [`WrapBudget::for_rotated_strip`](crate::layout::WrapBudget::for_rotated_strip) - derives that budget from a strip's size
//! - [`layout`](crate::layout::layout) / [`RotatedLabel`](crate::layout::RotatedLabel) - positions wrapped lines in a strip drawn rotated 90°
//!
//! Layout is computed in the label's own, unrotated space and rotated exactly once when
//! drawn. Callers re-run layout whenever the strip size or the message changes; nothing
//! is cached between renders.
//!
//! # Example
//!
//! ```
//! use ticket_pdf::layout::RotatedLabel;
//!
//! let label = RotatedLabel::default();
//! let lines = label.layout_message("GATES CLOSE 15 MINUTES BEFORE DEPARTURE");
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines.lines[0].center_x, 100.0);
//! ```

mod label;
mod margins;
mod wrap;

pub use label::*;
pub use margins::*;
pub use wrap::*;
