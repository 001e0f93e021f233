use crate::interpreter::value::core::Value;

/// Represents a node in the abstract syntax tree of an expression.
///
/// Expressions are parsed from the token stream produced after variable
/// substitution, so a `Variable` node only survives parsing when the name
/// was unbound at substitution time.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value, either written in the source or substituted for a
    /// bound variable.
    Literal {
        /// The constant value.
        value: Value,
    },
    /// Reference to a variable that was not bound during substitution.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, logical and, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A chain of comparisons such as `a < b <= c`.
    ///
    /// Each operand is evaluated at most once and the chain stops at the first
    /// comparison that fails.
    Comparison {
        /// The leftmost operand.
        first: Box<Self>,
        /// Each comparison operator with its right-hand operand, in order.
        rest:  Vec<(BinaryOperator, Self)>,
    },
}

impl Expr {
    /// Returns the number of nodes on the longest path from this node to a
    /// leaf. Leaves have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Comparison { first, rest } => {
                1 + rest.iter().map(|(_, operand)| operand.depth()).fold(first.depth(), usize::max)
            },
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the short-circuiting
/// logical operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or string repetition (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equality (`==`)
    Equal,
    /// Inequality (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation (`-x`).
    Negate,
    /// Numeric identity (`+x`).
    Plus,
    /// Logical not (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// Represents one classified source line.
///
/// Statements borrow their payload from the line they were classified from
/// and live for a single iteration of the execution driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `let <name> = <expr>`
    Assignment {
        /// The variable being bound.
        name: &'a str,
        /// The unevaluated right-hand side.
        expr: &'a str,
    },
    /// `print <expr>`
    Print {
        /// The expression whose value is printed.
        expr: &'a str,
    },
    /// `if <expr>:`
    Conditional {
        /// The condition expression.
        expr: &'a str,
    },
    /// Any line starting with `else`.
    Else,
    /// A line that matched no statement form, evaluated as a bare
    /// expression.
    Passthrough {
        /// The trimmed line text.
        text: &'a str,
    },
    /// An empty line or a `#` comment.
    Blank,
}
