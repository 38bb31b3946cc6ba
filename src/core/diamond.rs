use crate::domain::ports::TokenSource;
use crate::utils::error::{CalcError, Result};
use std::io::Write;

pub const SIZE_PROMPT: &str = "Enter a number for the hollow diamond pattern: ";

/// Renders a hollow diamond of `2 * size` rows, each `2 * size` characters wide.
///
/// The upper half narrows from a solid row to a single `fill` on each edge; the
/// lower half mirrors it back out. Every row ends with a newline. Callers keep
/// `size` within `config::MAX_DIAMOND_SIZE`; the output grows quadratically.
pub fn render_hollow_diamond(size: usize, fill: char) -> String {
    let width = size.saturating_mul(2);
    let mut out = String::with_capacity(width.saturating_mul(width.saturating_add(1)));

    for i in 1..=size {
        push_row(&mut out, fill, size - i + 1, 2 * (i - 1));
    }
    for i in 0..size {
        push_row(&mut out, fill, i + 1, 2 * (size - i - 1));
    }

    out
}

fn push_row(out: &mut String, fill: char, edge: usize, gap: usize) {
    out.extend(std::iter::repeat(fill).take(edge));
    out.extend(std::iter::repeat(' ').take(gap));
    out.extend(std::iter::repeat(fill).take(edge));
    out.push('\n');
}

/// Prompts for the diamond size and reads it as an integer token.
pub fn read_size<S: TokenSource, W: Write>(input: &mut S, output: &mut W) -> Result<i64> {
    output.write_all(SIZE_PROMPT.as_bytes())?;
    output.flush()?;

    let token = input.next_token()?.ok_or_else(|| CalcError::ConfigError {
        message: "no size was entered".to_string(),
    })?;

    token.parse::<i64>().map_err(|_| CalcError::InvalidNumberError {
        field: "size".to_string(),
        value: token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::input::LineTokenReader;
    use std::io::Cursor;

    #[test]
    fn test_read_size_prompts_then_parses() {
        let mut input = LineTokenReader::new(Cursor::new("  7\n"));
        let mut output = Vec::new();
        assert_eq!(read_size(&mut input, &mut output).unwrap(), 7);
        assert_eq!(String::from_utf8(output).unwrap(), SIZE_PROMPT);
    }

    #[test]
    fn test_size_three() {
        let expected = "\
******
**  **
*    *
*    *
**  **
******
";
        assert_eq!(render_hollow_diamond(3, '*'), expected);
    }

    #[test]
    fn test_size_one() {
        assert_eq!(render_hollow_diamond(1, '*'), "**\n**\n");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(render_hollow_diamond(0, '*'), "");
    }

    #[test]
    fn test_rows_have_uniform_width() {
        let diamond = render_hollow_diamond(7, '#');
        let rows: Vec<&str> = diamond.lines().collect();
        assert_eq!(rows.len(), 14);
        assert!(rows.iter().all(|row| row.chars().count() == 14));
        assert!(rows.iter().all(|row| row.starts_with('#') && row.ends_with('#')));
        assert_eq!(rows[6], format!("#{}#", " ".repeat(12)));
    }
}
