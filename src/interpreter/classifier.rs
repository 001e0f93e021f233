use crate::{
    ast::Statement,
    interpreter::lexer::{is_identifier, is_identifier_char},
};

/// Marks a whole-line comment.
pub const COMMENT_MARKER: char = '#';

/// Classifies one raw source line.
///
/// The line is trimmed first, so indentation never influences the result.
/// Prefixes are tested in the fixed order `let`, `print`, `if`, `else`; the
/// first prefix that matches decides the statement form, and a line whose
/// prefix matches but whose shape does not (for example `let x 5`) becomes a
/// [`Statement::Passthrough`].
///
/// # Example
/// ```
/// use flo::{ast::Statement, interpreter::classifier::classify};
///
/// assert_eq!(classify("  let x = 1 + 2"), Statement::Assignment { name: "x", expr: "1 + 2" });
/// assert_eq!(classify("if x > 1:"), Statement::Conditional { expr: "x > 1" });
/// assert_eq!(classify("# note"), Statement::Blank);
/// ```
#[must_use]
pub fn classify(line: &str) -> Statement<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Statement::Blank;
    }

    let matched = if line.starts_with("let") {
        match_assignment(line)
    } else if line.starts_with("print") {
        match_print(line)
    } else if line.starts_with("if") {
        match_conditional(line)
    } else if line.starts_with("else") {
        Some(Statement::Else)
    } else {
        None
    };

    matched.unwrap_or(Statement::Passthrough { text: line })
}

/// Matches `let <identifier> = <expression>`.
///
/// The name must be an identifier as the lexer reads it, directly followed
/// by ` = `, so that every bound name can be referenced later.
fn match_assignment(line: &str) -> Option<Statement<'_>> {
    let rest = line.strip_prefix("let ")?;
    let name_len = rest.find(|c: char| !is_identifier_char(c)).unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_len);
    let expr = rest.strip_prefix(" = ")?;

    (is_identifier(name) && !expr.is_empty()).then_some(Statement::Assignment { name, expr })
}

/// Matches `print <expression>`.
fn match_print(line: &str) -> Option<Statement<'_>> {
    let expr = line.strip_prefix("print ")?;
    (!expr.is_empty()).then_some(Statement::Print { expr })
}

/// Matches `if <expression>:`.
///
/// The condition runs up to the last `:` of the line; anything after that
/// colon is ignored.
fn match_conditional(line: &str) -> Option<Statement<'_>> {
    let rest = line.strip_prefix("if ")?;
    let colon = rest.rfind(':')?;
    let expr = &rest[..colon];
    (!expr.is_empty()).then_some(Statement::Conditional { expr })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(classify(""), Statement::Blank);
        assert_eq!(classify("   \t"), Statement::Blank);
        assert_eq!(classify("  # comment"), Statement::Blank);
    }

    #[test]
    fn assignment_requires_exact_shape() {
        assert_eq!(classify("let total_1 = x * 2"),
                   Statement::Assignment { name: "total_1",
                                           expr: "x * 2", });
        assert_eq!(classify("let x=5"), Statement::Passthrough { text: "let x=5" });
        assert_eq!(classify("let x 5"), Statement::Passthrough { text: "let x 5" });
        assert_eq!(classify("let = 5"), Statement::Passthrough { text: "let = 5" });
        assert_eq!(classify("letter = 5"), Statement::Passthrough { text: "letter = 5" });
    }

    #[test]
    fn assignment_names_must_be_identifiers() {
        assert_eq!(classify("let x² = 1"), Statement::Assignment { name: "x²", expr: "1" });
        assert_eq!(classify("let 1x = 5"), Statement::Passthrough { text: "let 1x = 5" });
    }

    #[test]
    fn print_requires_an_expression() {
        assert_eq!(classify("print 'hi'"), Statement::Print { expr: "'hi'" });
        assert_eq!(classify("print"), Statement::Passthrough { text: "print" });
        assert_eq!(classify("printer"), Statement::Passthrough { text: "printer" });
    }

    #[test]
    fn conditional_requires_trailing_colon() {
        assert_eq!(classify(" if x > 1:"), Statement::Conditional { expr: "x > 1" });
        assert_eq!(classify("if x > 1"), Statement::Passthrough { text: "if x > 1" });
        assert_eq!(classify("if :"), Statement::Passthrough { text: "if :" });
        assert_eq!(classify("iffy:"), Statement::Passthrough { text: "iffy:" });
    }

    #[test]
    fn conditional_runs_to_the_last_colon() {
        assert_eq!(classify("if a: b:"), Statement::Conditional { expr: "a: b" });
        assert_eq!(classify("if x: print x"), Statement::Conditional { expr: "x" });
    }

    #[test]
    fn else_only_checks_the_prefix() {
        assert_eq!(classify("else"), Statement::Else);
        assert_eq!(classify("  else:"), Statement::Else);
        assert_eq!(classify("elsewhere"), Statement::Else);
    }

    #[test]
    fn unrecognized_lines_pass_through_trimmed() {
        assert_eq!(classify("   x + 1  "), Statement::Passthrough { text: "x + 1" });
    }
}
