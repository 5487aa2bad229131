//! Value expressions.
//!
//! The right-hand side of both `name := expr` and `key : expr` is one of four shapes, tried in
//! a fixed order:
//!
//! 1. decimal digits: `8080`
//! 2. a single-quoted string: `'localhost'`
//! 3. a constant reference: `@(port)`
//! 4. a boolean: `true` / `false`
//!
//! The shapes cannot overlap, so the order only matters for which error is reported.

// internal imports
use crate::cfgtypes::{ConstantTable, Value};
use crate::constants::{CONST_REF_CLOSE, CONST_REF_OPEN, FALSE_TOKEN, STR_TOKEN, TRUE_TOKEN};
use crate::error::{ErrorKind, SyntaxError};
use crate::parserline::is_identifier;

/// Evaluates `expr` against the constants declared so far.
///
/// Constant references are resolved immediately; a reference to a name that has not been
/// declared yet is an error.
pub fn evaluate(expr: &str, constants: &ConstantTable) -> Result<Value, SyntaxError> {
    let expr = expr.trim();

    if let Some(n) = parse_integer(expr)? {
        return Ok(Value::Int(n));
    }
    if let Some(s) = parse_string(expr) {
        return Ok(Value::Str(s.to_string()));
    }
    if let Some(name) = parse_reference(expr) {
        return match constants.get(name) {
            Some(val) => Ok(val.clone()),
            None => Err(ErrorKind::UndefinedConstant(name.to_string()).into()),
        };
    }
    match expr {
        TRUE_TOKEN => Ok(Value::Bool(true)),
        FALSE_TOKEN => Ok(Value::Bool(false)),
        _ => Err(ErrorKind::InvalidValue(expr.to_string()).into()),
    }
}

/// `Ok(None)` if `expr` is not a digit string at all.
fn parse_integer(expr: &str) -> Result<Option<i64>, SyntaxError> {
    if expr.is_empty() || !expr.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    // only overflow can fail once every byte is a digit
    match expr.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ErrorKind::IntegerOverflow(expr.to_string()).into()),
    }
}

/// Content of `'...'`. The content ends at the first closing quote, which must end `expr`.
fn parse_string(expr: &str) -> Option<&str> {
    let rest = expr.strip_prefix(STR_TOKEN)?;
    let end = rest.find(STR_TOKEN)?;
    if end + STR_TOKEN.len() == rest.len() {
        Some(&rest[..end])
    } else {
        None
    }
}

/// Name inside `@(...)`.
fn parse_reference(expr: &str) -> Option<&str> {
    let name = expr
        .strip_prefix(CONST_REF_OPEN)?
        .strip_suffix(CONST_REF_CLOSE)?;
    if is_identifier(name) {
        Some(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str) -> Result<Value, SyntaxError> {
        evaluate(expr, &ConstantTable::new())
    }

    #[test]
    fn integers() {
        for (text, expected) in [("0", 0), ("8080", 8080), ("007", 7), (" 42 ", 42)] {
            assert_eq!(eval(text), Ok(Value::Int(expected)));
        }
        assert_eq!(eval("9223372036854775807"), Ok(Value::Int(i64::MAX)));
        assert_eq!(
            eval("9223372036854775808").unwrap_err().kind,
            ErrorKind::IntegerOverflow("9223372036854775808".into())
        );
    }

    #[test]
    fn every_digit_string_is_its_number() {
        for n in (0..100_000_i64).step_by(7) {
            assert_eq!(eval(&n.to_string()), Ok(Value::Int(n)));
        }
    }

    #[test]
    fn strings() {
        assert_eq!(eval("'localhost'"), Ok(Value::from("localhost")));
        assert_eq!(eval("''"), Ok(Value::from("")));
        assert_eq!(eval("'12'"), Ok(Value::from("12")));
        assert_eq!(eval("'a \"quoted\" word'"), Ok(Value::from("a \"quoted\" word")));
        assert_eq!(eval("'no\\escapes'"), Ok(Value::from("no\\escapes")));
    }

    #[test]
    fn booleans() {
        assert_eq!(eval("true"), Ok(Value::Bool(true)));
        assert_eq!(eval("false"), Ok(Value::Bool(false)));
    }

    #[test]
    fn references() {
        let mut consts = ConstantTable::new();
        consts.declare("port", Value::Int(8080));

        assert_eq!(evaluate("@(port)", &consts), Ok(Value::Int(8080)));
        let err = evaluate("@(undefined_constant)", &consts).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UndefinedConstant("undefined_constant".into()));
        assert_eq!(err.text(), "undefined_constant");
    }

    #[test]
    fn malformed_values() {
        for text in [
            "",
            "-1",
            "+1",
            "1.5",
            "1_000",
            "True",
            "yes",
            "'unterminated",
            "'one' 'two'",
            "'trailing'x",
            "\"double\"",
            "@(port",
            "@(Port)",
            "@()",
            "@(port)x",
            "=8080",
            "port",
        ] {
            let result = evaluate(text, &ConstantTable::new());
            match result {
                Err(SyntaxError {
                    kind: ErrorKind::InvalidValue(shown),
                    line: None,
                }) => assert_eq!(shown, text.trim()),
                other => panic!("{:?} evaluated to {:?}", text, other),
            }
        }
    }
}
