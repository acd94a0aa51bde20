use crate::interpreter::lexer::Token;

/// An unevaluated expression: the token list produced by the expression
/// tokenizer, plus the source line it came from.
///
/// Expressions stay in token form until execution because their meaning can
/// change between visits: tokens get deleted, variables expire, and
/// probability names roll fresh dice on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The tokens of the expression, in source order.
    pub tokens: Vec<Token>,
    /// Line number in the source code.
    pub line:   usize,
}

/// A per-assignment lifetime marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifetime {
    /// Expiry measured in executed statements. Negative counts bind the
    /// variable retroactively before its own definition.
    Lines(i64),
    /// Expiry measured in wall-clock seconds from the assignment.
    Seconds(f64),
}

/// A comparison operator usable in `IF` and `WHILE` conditions.
///
/// Each operator has a symbolic spelling and a word spelling; both parse to
/// the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `<` / `LESS`
    Less,
    /// `>` / `GREATER`
    Greater,
    /// `<=` / `LESSEQ`
    LessEq,
    /// `>=` / `GREATEREQ`
    GreaterEq,
    /// `==` / `EQUAL`
    Equal,
    /// `!=` / `NOTEQUAL`
    NotEqual,
}

impl Comparison {
    /// Recognizes one whitespace-separated part as a comparison operator.
    ///
    /// Word spellings are case-insensitive, matching the rest of the
    /// language.
    ///
    /// # Example
    /// ```
    /// use lumina::ast::Comparison;
    ///
    /// assert_eq!(Comparison::from_part("<="), Some(Comparison::LessEq));
    /// assert_eq!(Comparison::from_part("greatereq"), Some(Comparison::GreaterEq));
    /// assert_eq!(Comparison::from_part("about"), None);
    /// ```
    #[must_use]
    pub fn from_part(part: &str) -> Option<Self> {
        match part.to_lowercase().as_str() {
            "<" | "less" => Some(Self::Less),
            ">" | "greater" => Some(Self::Greater),
            "<=" | "lesseq" => Some(Self::LessEq),
            ">=" | "greatereq" => Some(Self::GreaterEq),
            "==" | "equal" => Some(Self::Equal),
            "!=" | "notequal" => Some(Self::NotEqual),
            _ => None,
        }
    }
}

/// The condition of an `IF` or `WHILE` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A binary comparison `<left> <cmp> <right>`.
    Comparison {
        /// Left operand.
        left:   Expr,
        /// The recognized operator.
        op:     Comparison,
        /// The spelling the source used, kept for the disabled-token check.
        symbol: String,
        /// Right operand.
        right:  Expr,
    },
    /// A single expression judged by truthiness.
    Truthy(Expr),
}

/// A user-defined function: a name and the statements of its body.
///
/// Functions run in a fresh frame with no access to the caller's variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The function's name.
    pub name: String,
    /// The statements executed on call.
    pub body: Vec<Statement>,
}

/// An executable statement.
///
/// Every variant carries its source line. The executor drives statements
/// through a single discriminant match; there is no per-statement dispatch
/// object.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `IMPORT "path"` — registers a foreign library handle.
    Import {
        /// The library path as written, quotes stripped.
        path: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `<fk> NAME` … `END` — stores a function definition when executed.
    FunctionDef {
        /// The spelling of the function keyword actually used.
        keyword: String,
        /// The function's name.
        name:    String,
        /// The statements of the body.
        body:    Vec<Statement>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `NAME: <expr>` or `NAME <life>: <expr>`.
    Assign {
        /// The variable name.
        name:     String,
        /// The lifetime marker, when the second form was used.
        lifetime: Option<Lifetime>,
        /// The value expression.
        expr:     Expr,
        /// Line number in the source code.
        line:     usize,
    },
    /// `!NAME arg, arg…` — calls a builtin, user function, or foreign name.
    Call {
        /// The callee's name.
        name: String,
        /// Argument expressions, in source order.
        args: Vec<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// `DELETE TOKEN` — purges a variable, or removes the token from the
    /// language.
    Delete {
        /// The target token.
        token: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `PREVIOUS NAME` — rebinds a name to its last recorded value.
    Previous {
        /// The variable name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `RETURN <expr>` — sets the return value and unwinds one frame.
    Return {
        /// The result expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `REVERSE` — flips the top-level execution direction.
    Reverse {
        /// Line number in the source code.
        line: usize,
    },
    /// `IF <condition>` … `END`.
    If {
        /// The entry condition.
        condition: Condition,
        /// The statements of the body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `WHILE <condition>` … `END`.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Condition,
        /// The statements of the body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// The token that introduces this statement.
    ///
    /// The keyword is what the runtime checks against the disabled set
    /// before executing: deleting `WHILE` kills loops, deleting a function's
    /// name kills calls to it, and deleting `:` kills assignment itself.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Import { .. } => "IMPORT",
            Self::FunctionDef { keyword, .. } => keyword,
            Self::Assign { .. } => ":",
            Self::Call { name, .. } => name,
            Self::Delete { .. } => "DELETE",
            Self::Previous { .. } => "PREVIOUS",
            Self::Return { .. } => "RETURN",
            Self::Reverse { .. } => "REVERSE",
            Self::If { .. } => "IF",
            Self::While { .. } => "WHILE",
        }
    }

    /// The source line the statement was read from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Import { line, .. }
            | Self::FunctionDef { line, .. }
            | Self::Assign { line, .. }
            | Self::Call { line, .. }
            | Self::Delete { line, .. }
            | Self::Previous { line, .. }
            | Self::Return { line, .. }
            | Self::Reverse { line }
            | Self::If { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}
