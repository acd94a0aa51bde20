use crate::{
    ast::{Comparison, Condition, Expr, Lifetime, Statement},
    error::ParseError,
    interpreter::{
        lexer::{strip_quotes, tokenize},
        parser::{
            core::{parse_block, ParseResult},
            utils::{split_arguments, split_parts},
        },
    },
};

/// Parses a single trimmed statement line.
///
/// Recognition order:
/// 1. plain assignment — the first part ends with `:`,
/// 2. lifetime assignment — the second part ends with `:` while the first
///    does not,
/// 3. the fixed keywords (`IMPORT`, `DELETE`, `RETURN`, `REVERSE`,
///    `PREVIOUS`, `IF`, `WHILE`), matched case-insensitively,
/// 4. inline calls, introduced by `!`,
/// 5. function definitions, introduced by any spelling of the function
///    keyword.
///
/// Anything else is a `BadStatement`. Block statements pull their bodies
/// from the shared line cursor.
///
/// # Parameters
/// - `text`: The trimmed statement line.
/// - `line`: Its source line number.
/// - `lines`: All source lines, for block bodies.
/// - `cursor`: Shared read position, already past this line.
///
/// # Returns
/// The parsed [`Statement`].
pub fn parse_statement(text: &str,
                       line: usize,
                       lines: &[(usize, &str)],
                       cursor: &mut usize)
                       -> ParseResult<Statement> {
    let parts = split_parts(text, line)?;
    let head = &parts[0];

    if head.text.len() > 1 && head.text.ends_with(':') {
        let name = head.text[..head.text.len() - 1].to_string();
        let expr = expr_from(&text[head.end..], line)?;
        return Ok(Statement::Assign { name,
                                      lifetime: None,
                                      expr,
                                      line });
    }

    if let [first, second, ..] = parts.as_slice()
       && !first.text.ends_with(':')
       && second.text.ends_with(':')
    {
        let marker = &second.text[..second.text.len() - 1];
        let lifetime = parse_lifetime(marker, line)?;
        let expr = expr_from(&text[second.end..], line)?;
        return Ok(Statement::Assign { name: first.text.clone(),
                                      lifetime: Some(lifetime),
                                      expr,
                                      line });
    }

    match head.text.to_lowercase().as_str() {
        "import" => {
            let Some(path) = parts.get(1) else {
                return Err(ParseError::BadStatement { head: head.text.clone(),
                                                      line });
            };
            return Ok(Statement::Import { path: strip_quotes(&path.text),
                                          line });
        },
        "delete" => {
            let Some(target) = parts.get(1) else {
                return Err(ParseError::BadStatement { head: head.text.clone(),
                                                      line });
            };
            return Ok(Statement::Delete { token: target.text.clone(),
                                          line });
        },
        "return" => {
            let expr = expr_from(&text[head.end..], line)?;
            return Ok(Statement::Return { expr, line });
        },
        "reverse" => return Ok(Statement::Reverse { line }),
        "previous" => {
            let Some(name) = parts.get(1) else {
                return Err(ParseError::BadStatement { head: head.text.clone(),
                                                      line });
            };
            return Ok(Statement::Previous { name: name.text.clone(),
                                            line });
        },
        "if" => {
            let condition = parse_condition(&text[head.end..], line)?;
            let body = parse_block(lines, cursor, line)?;
            return Ok(Statement::If { condition,
                                      body,
                                      line });
        },
        "while" => {
            let condition = parse_condition(&text[head.end..], line)?;
            let body = parse_block(lines, cursor, line)?;
            return Ok(Statement::While { condition,
                                         body,
                                         line });
        },
        _ => {},
    }

    if let Some(callee) = head.text.strip_prefix('!')
       && !callee.is_empty()
    {
        let rest = text[head.end..].trim();
        let args = if rest.is_empty() {
            Vec::new()
        } else {
            split_arguments(rest, line)?.iter()
                                        .map(|piece| expr_from(piece, line))
                                        .collect::<ParseResult<Vec<Expr>>>()?
        };
        return Ok(Statement::Call { name: callee.to_string(),
                                    args,
                                    line });
    }

    if is_function_keyword(&head.text) && parts.len() >= 2 {
        let body = parse_block(lines, cursor, line)?;
        return Ok(Statement::FunctionDef { keyword: head.text.clone(),
                                           name: parts[1].text.clone(),
                                           body,
                                           line });
    }

    Err(ParseError::BadStatement { head: head.text.clone(),
                                   line })
}

/// Recognizes a function-definition keyword.
///
/// Any non-empty, case-insensitive subsequence of `FUNCTION` introduces a
/// definition, so `F`, `FN`, `FUNC` and `FCTION` all work. Every spelling
/// is its own token as far as `DELETE` is concerned.
///
/// # Example
/// ```
/// use lumina::interpreter::parser::statement::is_function_keyword;
///
/// assert!(is_function_keyword("fn"));
/// assert!(is_function_keyword("FCTION"));
/// assert!(!is_function_keyword("fnx"));
/// assert!(!is_function_keyword(""));
/// ```
#[must_use]
pub fn is_function_keyword(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    let mut pattern = "function".chars();
    word.to_lowercase().chars().all(|c| pattern.any(|p| p == c))
}

/// Parses the `<life>` marker of a lifetime assignment.
///
/// A trailing `s` makes it seconds (a non-negative float); otherwise it
/// must be a signed integer counting executed lines.
fn parse_lifetime(marker: &str, line: usize) -> ParseResult<Lifetime> {
    if let Some(prefix) = marker.strip_suffix(['s', 'S']) {
        return match prefix.parse::<f64>() {
            Ok(seconds) if seconds >= 0.0 && seconds.is_finite() => Ok(Lifetime::Seconds(seconds)),
            _ => Err(ParseError::BadLifetime { marker: marker.to_string(),
                                               line }),
        };
    }

    marker.parse::<i64>()
          .map(Lifetime::Lines)
          .map_err(|_| ParseError::BadLifetime { marker: marker.to_string(),
                                                 line })
}

/// Parses an `IF`/`WHILE` condition.
///
/// The first part that spells a comparison operator splits the text into
/// the two operand expressions; with no such part the whole text is one
/// truthiness expression.
fn parse_condition(text: &str, line: usize) -> ParseResult<Condition> {
    for part in split_parts(text, line)? {
        if let Some(op) = Comparison::from_part(&part.text) {
            let left = expr_from(&text[..part.start], line)?;
            let right = expr_from(&text[part.end..], line)?;
            return Ok(Condition::Comparison { left,
                                              op,
                                              symbol: part.text,
                                              right });
        }
    }

    Ok(Condition::Truthy(expr_from(text, line)?))
}

/// Tokenizes an expression substring into an [`Expr`].
fn expr_from(text: &str, line: usize) -> ParseResult<Expr> {
    Ok(Expr { tokens: tokenize(text.trim(), line)?,
              line })
}
