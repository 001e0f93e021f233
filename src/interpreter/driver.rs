use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::Statement,
    error::{ExpressionError, ScriptError},
    interpreter::{
        classifier::classify, environment::Environment, evaluator::core::Evaluator,
        value::core::Value,
    },
};

/// Control-flow state of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    /// Outside any conditional block; every line executes.
    Normal,
    /// Inside the block of the most recent `if`. `else` negates `condition`.
    InBlock { condition: bool },
}

/// Returns `true` if the raw line keeps the current block open.
fn is_block_member(raw: &str) -> bool {
    raw.starts_with(' ')
}

/// The execution driver.
///
/// Runs a script line by line, owning the variable environment for the whole
/// run and writing `print` output to `output`.
///
/// ## Blocks
///
/// An `if` line opens a block and every following line that starts with a
/// space belongs to it. Member lines execute only while the block's
/// condition holds, and `else` negates that condition. Only one block is
/// tracked: an `if` inside a block replaces the active block. A line that
/// does not start with a space closes the block *after* it has been handled,
/// so the first dedented line is still subject to the block's condition.
pub struct Interpreter<W: Write> {
    environment: Environment,
    state:       BlockState,
    output:      W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty environment that prints to
    /// `output`.
    pub fn new(output: W) -> Self {
        Self { environment: Environment::new(),
               state: BlockState::Normal,
               output }
    }

    /// Runs every line of `source` in order.
    ///
    /// # Errors
    /// Stops at the first failing line and returns its error; output written
    /// before the failure is kept.
    ///
    /// # Example
    /// ```
    /// use flo::interpreter::driver::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.run("let x = 3\nif x > 1:\n print x\nelse\n print 0").unwrap();
    ///
    /// assert_eq!(interpreter.into_output(), b"3\n");
    /// ```
    pub fn run(&mut self, source: &str) -> Result<(), ScriptError> {
        for (index, line) in source.lines().enumerate() {
            self.execute_line(line, index + 1)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Executes one raw source line.
    ///
    /// # Parameters
    /// - `raw`: The line as written, including indentation.
    /// - `line`: The 1-based line number, for error reporting.
    pub fn execute_line(&mut self, raw: &str, line: usize) -> Result<(), ScriptError> {
        let statement = classify(raw);
        trace!(line, ?statement, state = ?self.state, "classified line");

        match statement {
            Statement::Conditional { expr } => {
                let condition = self.handle_conditional(expr, line)?;
                if self.state != BlockState::Normal {
                    debug!(line, "conditional replaces the active block");
                }
                debug!(line, condition, "entering block");
                self.state = BlockState::InBlock { condition };
            },
            Statement::Else => self.handle_else(line),
            _ => match self.state {
                BlockState::Normal => self.execute(statement, line)?,
                BlockState::InBlock { condition } => {
                    if condition {
                        self.execute(statement, line)?;
                    } else {
                        trace!(line, "skipped line in inactive block");
                    }
                    if !is_block_member(raw) {
                        debug!(line, "left block");
                        self.state = BlockState::Normal;
                    }
                },
            },
        }
        Ok(())
    }

    /// Runs the handler of an assignment, print or passthrough statement.
    fn execute(&mut self, statement: Statement<'_>, line: usize) -> Result<(), ScriptError> {
        match statement {
            Statement::Assignment { name, expr } => self.handle_assignment(name, expr, line)?,
            Statement::Print { expr } => self.handle_print(expr, line)?,
            Statement::Passthrough { text } => {
                self.evaluate(text, line)?;
            },
            Statement::Conditional { .. } | Statement::Else | Statement::Blank => {},
        }
        Ok(())
    }

    fn evaluate(&self, expr: &str, line: usize) -> Result<Value, ExpressionError> {
        Evaluator::new(&self.environment).evaluate(expr, line)
    }

    /// `let <name> = <expr>`: binds `name`, replacing any previous value.
    fn handle_assignment(&mut self, name: &str, expr: &str, line: usize) -> Result<(), ExpressionError> {
        let value = self.evaluate(expr, line)?;
        debug!(line, name, %value, "assigned variable");
        self.environment.set(name, value);
        Ok(())
    }

    /// `print <expr>`: writes the value's textual form as one line.
    fn handle_print(&mut self, expr: &str, line: usize) -> Result<(), ScriptError> {
        let value = self.evaluate(expr, line)?;
        writeln!(self.output, "{value}")?;
        Ok(())
    }

    /// `if <expr>:`: returns the truthiness of the condition.
    fn handle_conditional(&self, expr: &str, line: usize) -> Result<bool, ExpressionError> {
        Ok(self.evaluate(expr, line)?.is_truthy())
    }

    /// `else`: negates the active block's condition. Evaluates nothing and
    /// has no effect outside a block.
    fn handle_else(&mut self, line: usize) {
        if let BlockState::InBlock { condition } = self.state {
            debug!(line, condition = !condition, "else branch");
            self.state = BlockState::InBlock { condition: !condition };
        }
    }

    /// Returns the variable environment.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns `true` while a conditional block is active.
    pub const fn in_block(&self) -> bool {
        matches!(self.state, BlockState::InBlock { .. })
    }

    /// Returns the condition of the active block, or `false` outside a
    /// block.
    pub const fn condition_result(&self) -> bool {
        matches!(self.state, BlockState::InBlock { condition: true })
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
