use crate::{ast::Statement, error::ParseError, interpreter::parser::statement::parse_statement};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole source file into its top-level statement list.
///
/// Source is read line by line; blank lines and lines starting with `#`
/// (after trimming) are comments. Block statements consume the following
/// lines up to their matching `END`, so the top-level list contains them
/// as single entries with nested bodies.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Errors
/// Any `ParseError`; a stray top-level `END` is a `BadStatement`.
///
/// # Example
/// ```
/// use lumina::interpreter::parser::core::parse_program;
///
/// let program = parse_program("x: 10\n# a comment\n!PRINTLINE x").unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(source: &str) -> ParseResult<Vec<Statement>> {
    let lines: Vec<(usize, &str)> = source.lines()
                                          .enumerate()
                                          .map(|(index, text)| (index + 1, text))
                                          .collect();
    let mut cursor = 0;
    let mut statements = Vec::new();

    while let Some((line, text)) = next_meaningful(&lines, &mut cursor) {
        if text.eq_ignore_ascii_case("END") {
            return Err(ParseError::BadStatement { head: text.to_string(),
                                                  line });
        }
        statements.push(parse_statement(text, line, &lines, &mut cursor)?);
    }

    Ok(statements)
}

/// Parses the body of a block statement, consuming lines up to `END`.
///
/// # Parameters
/// - `lines`: All source lines with their numbers.
/// - `cursor`: Shared read position, already past the block's head line.
/// - `opening_line`: Where the block started, for the `MissingEnd` report.
///
/// # Errors
/// `ParseError::MissingEnd` when input runs out before the terminator.
pub fn parse_block(lines: &[(usize, &str)],
                   cursor: &mut usize,
                   opening_line: usize)
                   -> ParseResult<Vec<Statement>> {
    let mut body = Vec::new();

    while let Some((line, text)) = next_meaningful(lines, cursor) {
        if text.eq_ignore_ascii_case("END") {
            return Ok(body);
        }
        body.push(parse_statement(text, line, lines, cursor)?);
    }

    Err(ParseError::MissingEnd { line: opening_line })
}

/// Advances the cursor to the next non-comment, non-blank line and
/// returns it trimmed.
fn next_meaningful<'a>(lines: &[(usize, &'a str)], cursor: &mut usize) -> Option<(usize, &'a str)> {
    while *cursor < lines.len() {
        let (line, text) = lines[*cursor];
        *cursor += 1;

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Some((line, trimmed));
    }

    None
}
