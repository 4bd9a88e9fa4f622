use crate::config::Calibration;
use crate::layout::Margins;

/// How much text fits in a box: characters per line and lines per box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WrapBudget {
    pub max_chars_per_line: usize,
    pub max_lines: usize,
}

impl WrapBudget {
    /// Fewest characters a line budget is ever given
    pub const MIN_CHARS_PER_LINE: usize = 10;

    /// Derives the budget for a strip of `strip_width` x `strip_height` whose text is
    /// drawn rotated a quarter turn. After rotation the strip's height becomes the
    /// length of each line and its width becomes the room lines stack into, so the
    /// two are swapped before the padding is taken off.
    ///
    /// Never returns less than [`WrapBudget::MIN_CHARS_PER_LINE`] characters or one
    /// line, no matter how small the strip is.
    pub fn for_rotated_strip(
        strip_width: f32,
        strip_height: f32,
        padding: &Margins,
        font_size: f32,
        line_gap: f32,
        calibration: &Calibration,
    ) -> WrapBudget {
        let along = (strip_height - padding.vertical()).max(1.0);
        let across = (strip_width - padding.horizontal()).max(1.0);
        let line_height = font_size + line_gap;
        let char_width = calibration.approx_char_width(font_size);

        WrapBudget {
            max_chars_per_line: fit_count(along, char_width).max(Self::MIN_CHARS_PER_LINE),
            max_lines: fit_count(across, line_height).max(1),
        }
    }
}

// how many `step`s fit in `extent`; a non-positive step fits nothing useful
fn fit_count(extent: f32, step: f32) -> usize {
    if step.is_finite() && step > 0.0 {
        let n = (extent / step).floor();
        if n.is_finite() && n > 0.0 {
            return n as usize;
        }
    }
    0
}

/// Breaks `message` into display lines of at most `max_chars_per_line` characters,
/// keeping at most `max_lines` of them.
///
/// # Wrapping Behavior
///
/// Words (runs of non-whitespace) are packed greedily: each word joins the current
/// line, separated by a single space, as long as the line stays within budget;
/// otherwise the line is finished and the word starts the next one. A word that is
/// longer than a whole line is cut into budget-sized chunks, each on its own line, so
/// that no line ever exceeds the budget.
///
/// Lines beyond `max_lines` are dropped. Lengths are counted in `char`s.
///
/// This never fails: an empty or all-whitespace message yields no lines, and a budget
/// of zero characters is treated as one.
pub fn wrap(message: &str, max_chars_per_line: usize, max_lines: usize) -> Vec<String> {
    let max_chars = max_chars_per_line.max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in message.split_whitespace() {
        let word_len = word.chars().count();
        let joined_len = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if joined_len <= max_chars {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = joined_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len > max_chars {
            // hard-split; every chunk is a finished line of its own
            let chars: Vec<char> = word.chars().collect();
            lines.extend(chars.chunks(max_chars).map(|chunk| chunk.iter().collect()));
        } else {
            current.push_str(word);
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines.truncate(max_lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOTICE: &str = "BOARDING GATES CLOSE 15 MINUTES BEFORE DEPARTURE TIME. \
                          PASSENGERS MAY NOT BE ACCEPTED FOR TRAVEL AFTER GATES CLOSE.";

    #[test]
    fn packs_words_greedily() {
        assert_eq!(
            wrap(NOTICE, 39, 10),
            vec![
                "BOARDING GATES CLOSE 15 MINUTES BEFORE",
                "DEPARTURE TIME. PASSENGERS MAY NOT BE",
                "ACCEPTED FOR TRAVEL AFTER GATES CLOSE.",
            ]
        );
    }

    #[test]
    fn every_line_fits_the_budget() {
        for budget in 10..60 {
            for line in wrap(NOTICE, budget, usize::MAX) {
                assert!(line.chars().count() <= budget, "{line:?} exceeds {budget}");
            }
        }
    }

    #[test]
    fn truncates_to_max_lines() {
        let lines = wrap(NOTICE, 10, 2);
        assert_eq!(lines, vec!["BOARDING", "GATES"]);
    }

    #[test]
    fn empty_message_wraps_to_nothing() {
        assert!(wrap("", 20, 4).is_empty());
        assert!(wrap("   \t  ", 20, 4).is_empty());
    }

    #[test]
    fn long_token_is_hard_split() {
        let token = "X".repeat(30);
        let lines = wrap(&token, 10, 10);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 10));
    }

    #[test]
    fn chunks_of_a_split_token_do_not_absorb_the_next_word() {
        let lines = wrap("ABCDEFGHIJKLM NO", 10, 10);
        assert_eq!(lines, vec!["ABCDEFGHIJ", "KLM", "NO"]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap("GATE   32\n\tNOW", 20, 4), vec!["GATE 32 NOW"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let lines = wrap("ÉÉÉÉÉ ÉÉÉÉÉ", 11, 4);
        assert_eq!(lines, vec!["ÉÉÉÉÉ ÉÉÉÉÉ"]);
    }

    #[test]
    fn wrapping_is_repeatable() {
        assert_eq!(wrap(NOTICE, 17, 3), wrap(NOTICE, 17, 3));
    }

    #[test]
    fn zero_budget_still_terminates() {
        assert_eq!(wrap("AB", 0, 5), vec!["A", "B"]);
        assert!(wrap("AB", 5, 0).is_empty());
    }

    #[test]
    fn budget_for_the_default_warning_strip() {
        let budget = WrapBudget::for_rotated_strip(
            48.0,
            200.0,
            &Margins::all(6.0),
            8.0,
            1.0,
            &Calibration::default(),
        );
        assert_eq!(
            budget,
            WrapBudget {
                max_chars_per_line: 39,
                max_lines: 4
            }
        );
    }

    #[test]
    fn budget_never_drops_below_minimums() {
        let budget = WrapBudget::for_rotated_strip(
            4.0,
            4.0,
            &Margins::all(6.0),
            8.0,
            1.0,
            &Calibration::default(),
        );
        assert_eq!(budget.max_chars_per_line, WrapBudget::MIN_CHARS_PER_LINE);
        assert_eq!(budget.max_lines, 1);
    }
}
