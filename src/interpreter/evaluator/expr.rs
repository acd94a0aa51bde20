use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            chance,
            core::{Context, EvalResult},
        },
        lexer::{strip_quotes, Token},
        value::core::Value,
    },
};

/// Returns the binding strength of an arithmetic operator token, or `None`
/// for operands and parentheses.
const fn precedence(token: &Token) -> Option<u8> {
    match token {
        Token::Plus | Token::Minus => Some(1),
        Token::Star | Token::Slash | Token::Percent => Some(2),
        _ => None,
    }
}

/// Converts an infix token list to reverse Polish notation.
///
/// Classic shunting yard over the fixed two-level precedence table; all
/// operators are left-associative and parentheses group.
///
/// # Parameters
/// - `tokens`: The infix tokens.
/// - `line`: Source line number for error reporting.
///
/// # Returns
/// The tokens in RPN order, parentheses removed.
///
/// # Errors
/// `RuntimeError::MismatchedParens` when the parentheses do not balance.
fn to_rpn(tokens: &[Token], line: usize) -> EvalResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Atom(_) | Token::Quoted(_) => output.push(token.clone()),
            Token::LParen => operators.push(token.clone()),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(RuntimeError::MismatchedParens { line }),
                }
            },
            _ => {
                let strength = precedence(token);
                while let Some(top) = operators.last() {
                    if precedence(top) >= strength {
                        output.push(operators.pop().unwrap());
                    } else {
                        break;
                    }
                }
                operators.push(token.clone());
            },
        }
    }

    while let Some(op) = operators.pop() {
        if op == Token::LParen {
            return Err(RuntimeError::MismatchedParens { line });
        }
        output.push(op);
    }

    Ok(output)
}

impl Context {
    /// Evaluates an expression against the current context.
    ///
    /// A single operand bypasses the shunting yard entirely and goes
    /// straight to atom resolution, so an emoji variable with no operator
    /// characters anywhere near it always resolves. Everything else is
    /// converted to RPN and reduced over a value stack.
    ///
    /// # Parameters
    /// - `expr`: The expression to evaluate.
    ///
    /// # Returns
    /// The resulting value.
    ///
    /// # Example
    /// ```
    /// use lumina::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let expr = Expr { tokens: tokenize("2 + 3 * 4", 1).unwrap(),
    ///                   line:   1, };
    ///
    /// assert_eq!(context.eval_expr(&expr).unwrap(), Value::Number(14.0));
    /// ```
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        let line = expr.line;

        if let [token @ (Token::Atom(_) | Token::Quoted(_))] = expr.tokens.as_slice() {
            return self.resolve_atom(token, line);
        }

        for token in &expr.tokens {
            if matches!(token, Token::LParen | Token::RParen)
               && self.is_disabled(&token.to_string())
            {
                return Err(RuntimeError::DisabledToken { token: token.to_string(),
                                                         line });
            }
        }

        let mut stack: Vec<Value> = Vec::new();

        for item in to_rpn(&expr.tokens, line)? {
            match item {
                Token::Atom(_) | Token::Quoted(_) => stack.push(self.resolve_atom(&item, line)?),
                op => {
                    let right = stack.pop().ok_or(RuntimeError::BadExpression { line })?;
                    let left = stack.pop().ok_or(RuntimeError::BadExpression { line })?;
                    stack.push(self.apply_operator(&op, &left, &right, line)?);
                },
            }
        }

        match stack.len() {
            1 => Ok(stack.pop().unwrap()),
            _ => Err(RuntimeError::BadExpression { line }),
        }
    }

    /// Resolves a single non-operator token to a value.
    ///
    /// Resolution order, first match wins:
    /// 1. disabled tokens fail,
    /// 2. a variable of the current frame,
    /// 3. a probability name (a fresh draw per read),
    /// 4. a number word,
    /// 5. a quoted literal, outer quote runs stripped,
    /// 6. a decimal number,
    /// 7. the token's own text.
    ///
    /// # Parameters
    /// - `token`: The token to resolve.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// The resolved value.
    pub fn resolve_atom(&self, token: &Token, line: usize) -> EvalResult<Value> {
        let text = token.to_string();

        if self.is_disabled(&text) {
            return Err(RuntimeError::DisabledToken { token: text, line });
        }
        if let Some(value) = self.get_variable(&text) {
            return Ok(value.clone());
        }
        if let Some(probability) = chance::chance_of(&text) {
            return Ok(chance::draw(probability).into());
        }
        if let Some(number) = chance::number_word(&text) {
            return Ok(number.into());
        }
        if let Token::Quoted(literal) = token {
            return Ok(strip_quotes(literal).into());
        }
        if let Ok(number) = text.parse::<f64>() {
            return Ok(number.into());
        }

        Ok(text.into())
    }

    /// Applies one arithmetic operator to two evaluated operands.
    ///
    /// `+` adds numbers and concatenates everything else through
    /// stringification. `-`, `*` and `%` require numbers. `/` additionally
    /// refuses a zero divisor.
    ///
    /// # Parameters
    /// - `op`: The operator token.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// The operation's result.
    pub fn apply_operator(&self,
                          op: &Token,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        if self.is_disabled(&op.to_string()) {
            return Err(RuntimeError::DisabledToken { token: op.to_string(),
                                                     line });
        }

        match op {
            Token::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                _ => Ok(Value::Text(format!("{left}{right}"))),
            },
            Token::Minus => Ok(Value::Number(left.as_number(line)? - right.as_number(line)?)),
            Token::Star => Ok(Value::Number(left.as_number(line)? * right.as_number(line)?)),
            Token::Percent => Ok(Value::Number(left.as_number(line)? % right.as_number(line)?)),
            Token::Slash => {
                let divisor = right.as_number(line)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Value::Number(left.as_number(line)? / divisor))
            },
            _ => Err(RuntimeError::BadExpression { line }),
        }
    }
}
