use std::{
    collections::{HashMap, HashSet},
    io::Write,
    time::{Duration, Instant},
};

use crate::{
    ast::{Comparison, Condition, Function, Lifetime, Statement},
    error::RuntimeError,
    interpreter::{
        ffi::{ForeignLibrary, ForeignLoader, InertLoader},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Control flow produced by executing a statement.
///
/// `Return` unwinds exactly one call frame, or the whole top-level loop
/// when no call is active. It is ordinary flow, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution proceeds to the next statement.
    Continue,
    /// A `RETURN` fired; stop executing the current body.
    Return,
}

/// Folds a name for the language's universal case-insensitive comparison.
pub(crate) fn canon(name: &str) -> String {
    name.to_lowercase()
}

/// A call-local variable store with per-name binding history.
///
/// The bottom frame is the top-level frame; each function call pushes a
/// fresh one, so bodies never see the caller's variables.
#[derive(Debug, Default)]
pub struct Frame {
    vars:    HashMap<String, Value>,
    history: HashMap<String, Vec<Value>>,
}

impl Frame {
    /// Looks up a variable, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(&canon(name))
    }

    /// Binds a variable, pushing any old value onto its history.
    pub fn bind(&mut self, name: &str, value: Value) {
        let key = canon(name);

        if let Some(old) = self.vars.insert(key.clone(), value) {
            self.history.entry(key).or_default().push(old);
        }
    }

    /// Rebinds a variable to the most recent entry of its history.
    ///
    /// # Errors
    /// - `NoPrevious` when the name is bound but has no recorded history.
    /// - `UndefinedName` when the name was never bound at all.
    pub fn rebind_previous(&mut self, name: &str, line: usize) -> EvalResult<()> {
        let key = canon(name);

        match self.history.get_mut(&key).and_then(Vec::pop) {
            Some(old) => {
                self.vars.insert(key, old);
                Ok(())
            },
            None if self.vars.contains_key(&key) => {
                Err(RuntimeError::NoPrevious { name: name.to_string(),
                                               line })
            },
            None => Err(RuntimeError::UndefinedName { name: name.to_string(),
                                                      line }),
        }
    }

    /// Removes a variable and clears its history.
    ///
    /// Returns `true` if a binding existed.
    pub fn purge(&mut self, name: &str) -> bool {
        let key = canon(name);

        self.history.remove(&key);
        self.vars.remove(&key).is_some()
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the whole interpreter state: the frame stack, the
/// user-defined function registry, the disabled-token set, loaded foreign
/// library handles, the top-level direction flag, the execution-line
/// counter, both lifetime tables, the inline-call argument stack, and the
/// most recent return value.
///
/// ## Usage
///
/// A `Context` is created once per run and threaded through every
/// evaluation. Tests swap the output writer to observe `PRINTLINE`.
pub struct Context {
    /// The frame stack; the bottom frame is the top-level frame.
    pub frames:           Vec<Frame>,
    /// User-defined functions, keyed by folded name. Redefinition
    /// overwrites.
    pub functions:        HashMap<String, Function>,
    /// Tokens removed from the language. The set only grows.
    pub disabled:         HashSet<String>,
    /// Foreign library handles, in import order.
    pub libraries:        Vec<Box<dyn ForeignLibrary>>,
    /// Opens foreign libraries on `IMPORT`. The default loader produces
    /// inert handles that resolve no names.
    pub loader:           Box<dyn ForeignLoader>,
    /// Top-level execution direction; `true` walks the program backwards.
    pub reverse:          bool,
    /// Statements executed so far, at the top level and inside functions.
    pub current_line:     u64,
    /// Execution line at which each variable expires.
    pub line_expirations: HashMap<String, u64>,
    /// Wall-clock deadlines, checked lazily at statement boundaries.
    pub time_expirations: Vec<(String, Instant)>,
    /// Arguments pushed by inline calls to non-builtin functions. Nothing
    /// pops it; see the crate documentation.
    pub arg_stack:        Vec<Value>,
    /// Result of the most recent call or `RETURN`.
    pub last_return:      Value,
    /// Where `PRINTLINE` writes.
    pub output:           Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context writing to standard output, with
    /// the top-level frame already pushed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    /// Creates a context that writes `PRINTLINE` output to the given
    /// writer.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self { frames: vec![Frame::default()],
               functions: HashMap::new(),
               disabled: HashSet::new(),
               libraries: Vec::new(),
               loader: Box::new(InertLoader),
               reverse: false,
               current_line: 0,
               line_expirations: HashMap::new(),
               time_expirations: Vec::new(),
               arg_stack: Vec::new(),
               last_return: Value::Number(0.0),
               output }
    }

    /// Tests a token against the disabled set, case-insensitively.
    #[must_use]
    pub fn is_disabled(&self, token: &str) -> bool {
        self.disabled.contains(&canon(token))
    }

    /// The frame of the innermost active call, or the top-level frame.
    #[must_use]
    pub fn current_frame(&self) -> &Frame {
        self.frames.last().expect("the frame stack is never empty")
    }

    /// Mutable access to the innermost frame.
    pub fn current_frame_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("the frame stack is never empty")
    }

    /// Looks up a variable of the current frame.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.current_frame().get(name)
    }

    /// Binds a variable in the current frame, recording the old value.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.current_frame_mut().bind(name, value);
    }

    /// Executes a single statement.
    ///
    /// The statement's keyword is checked against the disabled set first;
    /// after the statement runs, the execution-line counter advances and
    /// expired variables are swept. Those two bookkeeping steps apply to
    /// every statement, inside or outside function bodies.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// `Flow::Return` when a `RETURN` fired in or below this statement,
    /// `Flow::Continue` otherwise.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        let keyword = statement.keyword();
        if self.is_disabled(keyword) {
            return Err(RuntimeError::DisabledToken { token: keyword.to_string(),
                                                     line:  statement.line(), });
        }

        let flow = self.execute_inner(statement)?;

        self.current_line += 1;
        self.sweep_expired();
        Ok(flow)
    }

    fn execute_inner(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Import { path, line } => {
                let handle =
                    self.loader
                        .open(path)
                        .map_err(|details| RuntimeError::ForeignCallFailed { details,
                                                                             line: *line, })?;
                self.libraries.push(handle);
                Ok(Flow::Continue)
            },
            Statement::FunctionDef { name, body, .. } => {
                self.functions.insert(canon(name),
                                      Function { name: name.clone(),
                                                 body: body.clone(), });
                Ok(Flow::Continue)
            },
            Statement::Assign { name,
                                lifetime,
                                expr,
                                .. } => {
                let value = self.eval_expr(expr)?;
                self.bind(name, value);
                self.schedule_lifetime(name, *lifetime);
                Ok(Flow::Continue)
            },
            Statement::Call { name, args, line } => {
                self.call_function(name, args, *line)?;
                Ok(Flow::Continue)
            },
            Statement::Delete { token, .. } => {
                self.delete_token(token);
                Ok(Flow::Continue)
            },
            Statement::Previous { name, line } => {
                self.current_frame_mut().rebind_previous(name, *line)?;
                Ok(Flow::Continue)
            },
            Statement::Return { expr, .. } => {
                self.last_return = self.eval_expr(expr)?;
                Ok(Flow::Return)
            },
            Statement::Reverse { .. } => {
                // The direction flag belongs to the top-level driver;
                // a REVERSE inside a call frame toggles nothing.
                if self.frames.len() == 1 {
                    self.reverse = !self.reverse;
                }
                Ok(Flow::Continue)
            },
            Statement::If { condition, body, .. } => {
                if self.eval_condition(condition)? {
                    return self.execute_body(body);
                }
                Ok(Flow::Continue)
            },
            Statement::While { condition, body, .. } => {
                while self.eval_condition(condition)? {
                    if self.execute_body(body)? == Flow::Return {
                        return Ok(Flow::Return);
                    }
                }
                Ok(Flow::Continue)
            },
        }
    }

    /// Executes the statements of a block or function body in order.
    ///
    /// Stops early when a `RETURN` fires and reports it to the caller.
    pub fn execute_body(&mut self, body: &[Statement]) -> EvalResult<Flow> {
        for statement in body {
            if self.execute(statement)? == Flow::Return {
                return Ok(Flow::Return);
            }
        }

        Ok(Flow::Continue)
    }

    /// Evaluates an `IF`/`WHILE` condition.
    ///
    /// The comparison spelling itself is subject to the disabled-token
    /// check, so `DELETE ==` breaks every equality condition from then on.
    pub fn eval_condition(&mut self, condition: &Condition) -> EvalResult<bool> {
        match condition {
            Condition::Comparison { left,
                                    op,
                                    symbol,
                                    right, } => {
                if self.is_disabled(symbol) {
                    return Err(RuntimeError::DisabledToken { token: symbol.clone(),
                                                             line:  left.line, });
                }

                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                let ordering = lhs.compare(&rhs, left.line)?;

                Ok(match op {
                    Comparison::Less => ordering.is_lt(),
                    Comparison::Greater => ordering.is_gt(),
                    Comparison::LessEq => ordering.is_le(),
                    Comparison::GreaterEq => ordering.is_ge(),
                    Comparison::Equal => ordering.is_eq(),
                    Comparison::NotEqual => ordering.is_ne(),
                })
            },
            Condition::Truthy(expr) => Ok(self.eval_expr(expr)?.is_truthy()),
        }
    }

    /// Records the expiry of a fresh assignment, clearing any schedule the
    /// name had before.
    ///
    /// Zero lifetimes are plain assignments. A negative line count expires
    /// on this very statement; its retroactive half is handled by the
    /// top-level driver, which binds the name on the lines before the
    /// definition.
    fn schedule_lifetime(&mut self, name: &str, lifetime: Option<Lifetime>) {
        let key = canon(name);
        let this_line = self.current_line + 1;

        self.line_expirations.remove(&key);
        self.time_expirations.retain(|(n, _)| *n != key);

        match lifetime {
            Some(Lifetime::Lines(count)) if count > 0 => {
                self.line_expirations
                    .insert(key, this_line + count.unsigned_abs());
            },
            Some(Lifetime::Lines(count)) if count < 0 => {
                self.line_expirations.insert(key, this_line);
            },
            Some(Lifetime::Seconds(seconds)) if seconds > 0.0 => {
                self.time_expirations
                    .push((key, Instant::now() + Duration::from_secs_f64(seconds)));
            },
            _ => {},
        }
    }

    /// Removes every variable whose line or wall-clock lifetime has run
    /// out.
    ///
    /// Runs after each statement. Expiry removes the binding from the
    /// current frame, clears its history, and purges any same-named
    /// function.
    fn sweep_expired(&mut self) {
        let line = self.current_line;
        let now = Instant::now();

        let mut expired: Vec<String> = self.line_expirations
                                           .iter()
                                           .filter(|(_, at)| **at <= line)
                                           .map(|(name, _)| name.clone())
                                           .collect();
        expired.extend(self.time_expirations
                           .iter()
                           .filter(|(_, deadline)| now >= *deadline)
                           .map(|(name, _)| name.clone()));

        for name in expired {
            self.line_expirations.remove(&name);
            self.time_expirations.retain(|(n, _)| *n != name);
            self.current_frame_mut().purge(&name);
            self.functions.remove(&name);
        }
    }

    /// Executes `DELETE` on one token.
    ///
    /// A variable of the current frame is purged together with its history
    /// and schedules. Anything else loses any same-named function and then
    /// joins the disabled set for the rest of the run; there is no way
    /// back, and `DELETE DELETE` locks the door behind itself.
    fn delete_token(&mut self, token: &str) {
        let key = canon(token);

        if self.current_frame_mut().purge(token) {
            self.line_expirations.remove(&key);
            self.time_expirations.retain(|(n, _)| *n != key);
            return;
        }

        self.functions.remove(&key);
        self.disabled.insert(key);
    }
}
