/// The statement classifier recognizes the form of each source line.
///
/// It trims a raw line and matches it against the `let`, `print`, `if` and
/// `else` statement shapes, falling back to a passthrough statement. It never
/// looks at indentation.
pub mod classifier;
/// The execution driver runs a script line by line.
///
/// It owns the variable environment and the stack of open conditional
/// blocks, decides per line whether the line executes, and dispatches to the
/// statement handlers.
///
/// # Responsibilities
/// - Iterates the script lines in order.
/// - Tracks block membership through leading-space indentation.
/// - Writes `print` output to its sink and aborts on the first error.
pub mod driver;
/// The variable environment maps names to values for one run.
pub mod environment;
/// The evaluator module computes the value of an expression.
///
/// The evaluator substitutes bound variables into the token stream of an
/// expression, parses it, and walks the resulting tree, performing
/// arithmetic, string, comparison and logical operations.
///
/// # Responsibilities
/// - Evaluates expressions against the current environment.
/// - Reports unknown variables, type mismatches, division by zero and
///   overflow.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens for
/// numbers, strings, booleans, identifiers, keywords and operators.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a precedence-climbing recursive descent over a closed
/// operator set.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
