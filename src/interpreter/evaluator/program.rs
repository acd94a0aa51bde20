use std::collections::HashMap;

use crate::{
    ast::{Expr, Lifetime, Statement},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

/// A loaded top-level program.
///
/// Besides the statement list this precomputes the synthetic bindings that
/// retroactive (negative-line) lifetimes produce: an assignment with
/// lifetime `-k` at 1-indexed position `p` binds its variable on every
/// execution line in `[max(1, p - k), p)`, before the statement on that
/// line runs.
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
    retroactive:    HashMap<u64, Vec<(String, Expr)>>,
}

impl Program {
    /// Prepares a statement list for execution.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        let mut retroactive: HashMap<u64, Vec<(String, Expr)>> = HashMap::new();

        for (index, statement) in statements.iter().enumerate() {
            if let Statement::Assign { name,
                                       lifetime: Some(Lifetime::Lines(count)),
                                       expr,
                                       .. } = statement
               && *count < 0
            {
                let def_line = index as u64 + 1;
                let first = def_line.saturating_sub(count.unsigned_abs()).max(1);

                for target in first..def_line {
                    retroactive.entry(target)
                               .or_default()
                               .push((name.clone(), expr.clone()));
                }
            }
        }

        Self { statements,
               retroactive }
    }

    /// Drives the top-level instruction pointer.
    ///
    /// The pointer starts at whichever end the direction flag selects and
    /// moves one statement per step, re-reading the flag after each one,
    /// so a `REVERSE` mid-run walks back over statements that already
    /// executed. Execution stops when the pointer leaves the program or a
    /// top-level `RETURN` fires.
    ///
    /// Before each step, any synthetic retroactive bindings scheduled for
    /// the upcoming execution line are applied.
    ///
    /// # Parameters
    /// - `context`: The evaluation context to run against.
    ///
    /// # Errors
    /// Any runtime error raised by a statement; execution does not resume.
    pub fn run(&self, context: &mut Context) -> EvalResult<()> {
        if self.statements.is_empty() {
            return Ok(());
        }

        let last = self.statements.len() - 1;
        let mut ip: i64 = if context.reverse { last as i64 } else { 0 };

        while ip >= 0 && ip as usize <= last {
            let upcoming = context.current_line + 1;
            if let Some(bindings) = self.retroactive.get(&upcoming) {
                for (name, expr) in bindings {
                    let value = context.eval_expr(expr)?;
                    context.bind(name, value);
                }
            }

            if context.execute(&self.statements[ip as usize])? == Flow::Return {
                return Ok(());
            }

            ip += if context.reverse { -1 } else { 1 };
        }

        Ok(())
    }
}
