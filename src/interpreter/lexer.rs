use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token inside an expression.
///
/// Expressions are tokenized separately from statement heads: the only
/// characters with their own meaning are the five arithmetic operators and
/// parentheses, plus quote runs. Everything else clumps into an [`Atom`],
/// which is why any Unicode scribble works as a variable name.
///
/// [`Atom`]: Token::Atom
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A string literal delimited by runs of `"` or `'` of any length.
    ///
    /// The token keeps its delimiters; they are stripped during atom
    /// resolution so that `"""x"""` still reads as `x`.
    #[regex(r#"["]+"#, lex_quoted)]
    #[regex(r"[']+", lex_quoted)]
    Quoted(String),
    /// Any maximal run of characters that is not whitespace, an operator,
    /// a parenthesis, or a quote.
    #[regex(r#"[^\s+\-*/%()"']+"#, |lex| lex.slice().to_string())]
    Atom(String),
    /// Spaces, tabs and feeds between tokens.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Completes a string literal opened by a run of identical quote characters.
///
/// The matched slice is the opening delimiter. The literal extends through
/// the next occurrence of the same run; the whole span, delimiters
/// included, becomes one token.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the opening run.
///
/// # Returns
/// - `Some(String)`: The full literal, if a closing run exists.
/// - `None`: If the input ends before the delimiter repeats.
fn lex_quoted(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let delimiter = lex.slice().to_string();
    let closing = lex.remainder().find(&delimiter)?;

    lex.bump(closing + delimiter.len());
    Some(lex.slice().to_string())
}

/// Tokenizes one expression substring.
///
/// # Parameters
/// - `text`: The expression text, never a whole program.
/// - `line`: Source line number for error reporting.
///
/// # Returns
/// The ordered token list.
///
/// # Errors
/// `ParseError::UnterminatedString` when a quote run is never closed; it is
/// the only way this tokenizer can fail.
///
/// # Example
/// ```
/// use lumina::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x * 2", 1).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Atom("x".to_string()),
///                 Token::Star,
///                 Token::Atom("2".to_string())]);
/// ```
pub fn tokenize(text: &str, line: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();

    for token in Token::lexer(text) {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(ParseError::UnterminatedString { line }),
        }
    }

    Ok(tokens)
}

/// Strips matching outer quote runs from a literal, repeatedly, so that
/// `"""x"""` yields `x`.
///
/// # Example
/// ```
/// use lumina::interpreter::lexer::strip_quotes;
///
/// assert_eq!(strip_quotes("'''bye'''"), "bye");
/// assert_eq!(strip_quotes("\"plain\""), "plain");
/// ```
#[must_use]
pub fn strip_quotes(literal: &str) -> String {
    let mut text = literal;

    while text.len() >= 2 {
        let mut chars = text.chars();
        let first = chars.next();
        let last = chars.next_back();

        match (first, last) {
            (Some(open @ ('"' | '\'')), Some(close)) if open == close => {
                text = &text[open.len_utf8()..text.len() - close.len_utf8()];
            },
            _ => break,
        }
    }

    text.to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Quoted(text) | Self::Atom(text) => write!(f, "{text}"),
            Self::Ignored => Ok(()),
        }
    }
}
