use crossterm::style::{style, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::{Result, SharedOutput};

/// Number of spaces that center a line of `text_width` columns.
pub fn left_padding(text_width: usize, terminal_width: usize) -> usize {
    terminal_width.saturating_sub(text_width) / 2
}

/// Formats the banner centered for `terminal_width` columns, followed by a
/// blank line. Each line is wrapped in bold cyan when `styled` is set.
pub fn format_header<S: AsRef<str>>(banner: &[S], terminal_width: u16, styled: bool) -> String {
    let mut block = String::new();

    for line in banner {
        let line = line.as_ref();
        let padded = format!(
            "{}{line}",
            " ".repeat(left_padding(line.width(), terminal_width.into()))
        );
        if styled {
            block.push_str(&style(padded).bold().cyan().to_string());
        } else {
            block.push_str(&padded);
        }
        block.push('\n');
    }

    block.push('\n');
    block
}

/// Writes the centered banner in a single critical section.
pub fn render_header<S: AsRef<str>>(
    banner: &[S],
    terminal_width: u16,
    styled: bool,
    output: &SharedOutput,
) -> Result<()> {
    output.write_block(&format_header(banner, terminal_width, styled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BufferSink;

    #[test]
    fn centers_single_column_line() {
        assert_eq!(left_padding(1, 11), 5);
        assert_eq!(format_header(&["X"], 11, false), "     X\n\n");
    }

    #[test]
    fn wide_lines_get_no_padding() {
        assert_eq!(left_padding(100, 80), 0);
        assert_eq!(format_header(&["abcdef"], 4, false), "abcdef\n\n");
    }

    #[test]
    fn measures_columns_not_code_points() {
        // Three code points, two columns.
        let line = "e\u{0301}x";
        assert_eq!(format_header(&[line], 6, false), format!("  {line}\n\n"));
    }

    #[test]
    fn styled_lines_carry_escape_sequences() {
        let block = format_header(&["X"], 3, true);
        assert!(block.contains("\u{1b}["));
        assert!(block.contains(" X"));
    }

    #[test]
    fn renders_through_shared_output() {
        let buffer = BufferSink::new();
        let output = SharedOutput::new(buffer.clone());

        render_header(&["ab", "c"], 6, false, &output).unwrap();

        assert_eq!(buffer.contents(), "  ab\n  c\n\n");
    }
}
