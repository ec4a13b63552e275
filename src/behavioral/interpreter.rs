/*!

# Interpreter

Represent each rule of a small language as a type, build sentences of the language as trees of
those types, and evaluate a sentence by asking the root to evaluate itself. The language here
is integer arithmetic with two operators, `plus` and `minus`, written as s-expressions:

```text
(minus 63 (plus 45 37))
```

In C++ each rule is a subclass of `Expression` with a virtual `evaluate`. In Rust a closed
grammar is an `enum`, and evaluation is a `match`. That is the whole pattern; the compiler checks
that every kind of expression is handled.

Two decisions the textbook leaves open:

- **Bad input is an error, not a zero.** An unknown operator or a malformed number yields an
  [`EvalError`] instead of printing a complaint and carrying on.
- **Numbers stay as text until evaluation**, as they were written. Parsing accepts any atom in
  number position, so `(plus 1 two)` parses and fails to evaluate, which keeps the parser and
  the evaluator separately testable.
- **Nesting is bounded.** [`parse`] refuses input nested deeper than [`MAX_DEPTH`], so every
  tree it returns can be evaluated, printed, and dropped without exhausting the stack.

*/

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Unrecognized operator: {0}")]
    UnknownOperator(String),
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("arithmetic overflow")]
    Overflow,
}

/// How many operations [`parse`] will nest inside one another.
pub const MAX_DEPTH: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected {found:?} at token {position}")]
    Unexpected { found: String, position: usize },
    #[error("trailing input starting at token {0}")]
    Trailing(usize),
    #[error("operations nested deeper than {limit}")]
    TooDeep { limit: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Number(String),
    Operation {
        operator: String,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
}

impl Expression {
    pub fn number(text: impl Into<String>) -> Self {
        Expression::Number(text.into())
    }

    pub fn operation(operator: impl Into<String>, lhs: Expression, rhs: Expression) -> Self {
        Expression::Operation {
            operator: operator.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn evaluate(&self) -> Result<i64, EvalError> {
        match self {
            Expression::Number(text) => text
                .trim()
                .parse()
                .map_err(|_| EvalError::InvalidNumber(text.clone())),
            Expression::Operation { operator, lhs, rhs } => {
                let apply: fn(i64, i64) -> Option<i64> = match operator.as_str() {
                    "plus" => i64::checked_add,
                    "minus" => i64::checked_sub,
                    _ => return Err(EvalError::UnknownOperator(operator.clone())),
                };
                apply(lhs.evaluate()?, rhs.evaluate()?).ok_or(EvalError::Overflow)
            }
        }
    }
}

/// Prints the s-expression form, which [`parse`] reads back.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(text) => f.write_str(text),
            Expression::Operation { operator, lhs, rhs } => {
                write!(f, "({operator} {lhs} {rhs})")
            }
        }
    }
}

/// Parses one expression: either an atom, or `(operator lhs rhs)`.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(input);
    let mut parser = Parser {
        tokens: &tokens,
        position: 0,
        depth: 0,
    };
    let expression = parser.expression()?;
    if parser.position != tokens.len() {
        return Err(ParseError::Trailing(parser.position));
    }
    Ok(expression)
}

fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (index, c) in input.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&input[s..index]);
            }
            if !c.is_whitespace() {
                tokens.push(&input[index..index + 1]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    tokens
}

struct Parser<'t> {
    tokens: &'t [&'t str],
    position: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn bump(&mut self) -> Result<&'t str, ParseError> {
        let token = self
            .tokens
            .get(self.position)
            .copied()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.position += 1;
        Ok(token)
    }

    fn unexpected(&self, found: &str) -> ParseError {
        ParseError::Unexpected {
            found: found.to_string(),
            position: self.position - 1,
        }
    }

    fn atom(&mut self) -> Result<&'t str, ParseError> {
        match self.bump()? {
            token @ ("(" | ")") => Err(self.unexpected(token)),
            token => Ok(token),
        }
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        match self.bump()? {
            "(" => {
                if self.depth == MAX_DEPTH {
                    return Err(ParseError::TooDeep { limit: MAX_DEPTH });
                }
                self.depth += 1;
                let operator = self.atom()?;
                let lhs = self.expression()?;
                let rhs = self.expression()?;
                self.depth -= 1;
                match self.bump()? {
                    ")" => Ok(Expression::operation(operator, lhs, rhs)),
                    other => Err(self.unexpected(other)),
                }
            }
            ")" => Err(self.unexpected(")")),
            atom => Ok(Expression::number(atom)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum() -> Expression {
        Expression::operation("plus", Expression::number("45"), Expression::number("37"))
    }

    #[test]
    fn evaluates_nested_operations() {
        assert_eq!(sum().evaluate(), Ok(82));
        let difference = Expression::operation("minus", Expression::number("63"), sum());
        assert_eq!(difference.evaluate(), Ok(-19));
    }

    #[test]
    fn bad_input_is_an_error() {
        let times = Expression::operation("times", Expression::number("2"), Expression::number("3"));
        let err = times.evaluate().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized operator: times");

        let word = Expression::operation("plus", Expression::number("1"), Expression::number("two"));
        assert_eq!(word.evaluate(), Err(EvalError::InvalidNumber("two".into())));

        let huge = Expression::operation(
            "plus",
            Expression::number(i64::MAX.to_string()),
            Expression::number("1"),
        );
        assert_eq!(huge.evaluate(), Err(EvalError::Overflow));
    }

    #[test]
    fn parses_what_it_prints() {
        let text = "(minus 63 (plus 45 37))";
        let parsed = parse(text).unwrap();
        assert_eq!(
            parsed,
            Expression::operation("minus", Expression::number("63"), sum())
        );
        assert_eq!(parsed.to_string(), text);
        assert_eq!(parse("  (minus\n63(plus 45 37) ) ").unwrap(), parsed);
        assert_eq!(parse("-7").unwrap().evaluate(), Ok(-7));
    }

    fn nested_sum(depth: usize) -> String {
        format!("{}1{}", "(plus 1 ".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn nesting_is_bounded() {
        let deepest = parse(&nested_sum(MAX_DEPTH)).unwrap();
        assert_eq!(deepest.evaluate(), Ok(MAX_DEPTH as i64 + 1));
        assert_eq!(deepest.to_string(), nested_sum(MAX_DEPTH));

        let too_deep = ParseError::TooDeep { limit: MAX_DEPTH };
        assert_eq!(parse(&nested_sum(MAX_DEPTH + 1)), Err(too_deep.clone()));
        assert_eq!(parse(&nested_sum(200_000)), Err(too_deep));
    }

    #[test]
    fn parse_errors_point_at_the_problem() {
        assert_eq!(parse(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("(plus 1"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("1 2"), Err(ParseError::Trailing(1)));
        assert_eq!(
            parse("(plus 1 2 3)"),
            Err(ParseError::Unexpected {
                found: "3".into(),
                position: 4
            })
        );
        assert_eq!(
            parse("(( 1 2)"),
            Err(ParseError::Unexpected {
                found: "(".into(),
                position: 1
            })
        );
    }
}
