use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{canon, Context, EvalResult, Frame},
            function::print,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context, the evaluated argument values, and the
/// line number, and returns the call's result.
type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// `AtLeast(n)` accepts any count of `n` or more, which covers the
/// variadic `PRINTLINE`.
#[derive(Clone, Copy)]
enum Arity {
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name (matched case-insensitively),
/// - an arity specification,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "PRINTLINE" => { arity: Arity::AtLeast(0), func: print::print_line },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl Context {
    /// Executes an inline call.
    ///
    /// Arguments are evaluated left to right first. Builtins are called
    /// directly with the value list. Any other callee gets the arguments
    /// pushed onto the context's arg stack and goes through external
    /// dispatch: the user-function registry, then each imported foreign
    /// library in order.
    ///
    /// The call's result lands in `last_return`.
    ///
    /// # Parameters
    /// - `name`: The callee's name.
    /// - `args`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DisabledToken` when the name was deleted.
    /// - `UnknownFunction` when nothing resolves the name.
    /// - `TypeError` when a builtin rejects its argument count.
    pub fn call_function(&mut self, name: &str, args: &[Expr], line: usize) -> EvalResult<()> {
        if self.is_disabled(name) {
            return Err(RuntimeError::DisabledToken { token: name.to_string(),
                                                     line });
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }

        if let Some(builtin) = BUILTIN_TABLE.iter()
                                            .find(|b| b.name.eq_ignore_ascii_case(name))
        {
            if !builtin.arity.check(values.len()) {
                return Err(RuntimeError::TypeError { details: format!("{name} does not take \
                                                                       {} arguments",
                                                                      values.len()),
                                                     line });
            }
            self.last_return = (builtin.func)(self, &values, line)?;
            return Ok(());
        }

        self.arg_stack.extend(values.iter().cloned());
        self.external_call(name, &values, line)
    }

    /// Dispatches a non-builtin call: user functions first, then the
    /// foreign libraries in import order.
    fn external_call(&mut self, name: &str, values: &[Value], line: usize) -> EvalResult<()> {
        if let Some(function) = self.functions.get(&canon(name)).cloned() {
            return self.call_user_function(&function.body);
        }

        let resolved = self.libraries
                           .iter()
                           .find_map(|library| library.resolve(name, values));
        if let Some(result) = resolved {
            self.last_return =
                result.map_err(|details| RuntimeError::ForeignCallFailed { details,
                                                                           line })?;
            return Ok(());
        }

        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            line })
    }

    /// Runs a user-defined function body in a fresh frame.
    ///
    /// The frame starts empty: there is no closure capture and the caller's
    /// variables stay invisible. A `RETURN` in the body has already set
    /// `last_return` by the time the frame pops.
    fn call_user_function(&mut self, body: &[Statement]) -> EvalResult<()> {
        self.frames.push(Frame::default());
        let outcome = self.execute_body(body);
        self.frames.pop();

        outcome?;
        Ok(())
    }
}
