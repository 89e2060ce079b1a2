//! Operator insertion over a digit string.
//!
//! Between every pair of neighbouring digits one of `+`, `-` or nothing is
//! placed, so an n-digit string yields 3^(n-1) expressions.

use crate::utils::error::{GroupSumError, Result};
use crate::utils::validation::validate_digits;

const OPERATORS: [&str; 3] = ["+", "-", ""];

/// Calls `visit` with every expression for `digits` as it is built, in
/// `+`, `-`, empty order at each gap. Only the expression under
/// construction is held in memory. An error from `visit` stops the walk.
pub fn for_each_expression(
    digits: &str,
    mut visit: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    validate_digits("digits", digits)?;

    let chars: Vec<char> = digits.chars().collect();
    if let Some(&first) = chars.first() {
        let mut current = String::with_capacity(chars.len() * 2);
        current.push(first);
        extend(&chars, 1, &mut current, &mut visit)?;
    }
    Ok(())
}

fn extend(
    chars: &[char],
    index: usize,
    current: &mut String,
    visit: &mut impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    if index == chars.len() {
        return visit(current);
    }

    for op in OPERATORS {
        let mark = current.len();
        current.push_str(op);
        current.push(chars[index]);
        extend(chars, index + 1, current, visit)?;
        current.truncate(mark);
    }
    Ok(())
}

/// Like [`for_each_expression`], restricted to expressions that evaluate
/// to `target`. Expressions whose terms do not fit in `i64` are skipped.
pub fn for_each_solution(
    digits: &str,
    target: i64,
    mut visit: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    for_each_expression(digits, |expr| match evaluate(expr) {
        Ok(value) if value == target => visit(expr),
        _ => Ok(()),
    })
}

/// Every expression for `digits`, collected.
pub fn expressions(digits: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for_each_expression(digits, |expr| {
        out.push(expr.to_string());
        Ok(())
    })?;
    Ok(out)
}

/// Evaluates a `+`/`-` expression left to right.
pub fn evaluate(expr: &str) -> Result<i64> {
    let mut total: i64 = 0;
    let mut sign: i64 = 1;
    let mut term = String::new();
    let mut position = 0usize;

    for c in expr.chars() {
        match c {
            '+' | '-' => {
                total = add_term(total, sign, &term, position)?;
                term.clear();
                position += 1;
                sign = if c == '+' { 1 } else { -1 };
            }
            _ => term.push(c),
        }
    }

    add_term(total, sign, &term, position)
}

fn add_term(total: i64, sign: i64, term: &str, position: usize) -> Result<i64> {
    let invalid = || GroupSumError::ParseError {
        line: 1,
        token: term.to_string(),
        position,
    };
    let value: i64 = term.parse().map_err(|_| invalid())?;
    total.checked_add(sign * value).ok_or_else(invalid)
}

fn operator_count(expr: &str) -> usize {
    expr.chars().filter(|c| matches!(c, '+' | '-')).count()
}

/// Expressions over `digits` that evaluate to `target`, collected.
pub fn solutions(digits: &str, target: i64) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for_each_solution(digits, target, |expr| {
        out.push(expr.to_string());
        Ok(())
    })?;
    Ok(out)
}

/// The solution with the fewest `+`/`-` signs; the earliest one wins ties.
pub fn fewest_operators(digits: &str, target: i64) -> Result<Option<String>> {
    let mut best: Option<(usize, String)> = None;
    for_each_solution(digits, target, |expr| {
        let count = operator_count(expr);
        if best.as_ref().map_or(true, |(fewest, _)| count < *fewest) {
            best = Some((count, expr.to_string()));
        }
        Ok(())
    })?;
    Ok(best.map(|(_, expr)| expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expressions_for_three_digits() {
        let all = expressions("123").unwrap();
        assert_eq!(
            all,
            vec!["1+2+3", "1+2-3", "1+23", "1-2+3", "1-2-3", "1-23", "12+3", "12-3", "123"]
        );
    }

    #[test]
    fn test_expressions_edge_inputs() {
        assert!(expressions("").unwrap().is_empty());
        assert_eq!(expressions("7").unwrap(), vec!["7"]);
        assert!(expressions("12x").is_err());
        assert_eq!(expressions("123456789").unwrap().len(), 6561);
    }

    #[test]
    fn test_for_each_expression_streams_in_order() {
        let mut seen = Vec::new();
        for_each_expression("123", |expr| {
            seen.push(expr.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, expressions("123").unwrap());

        let mut count = 0usize;
        for_each_expression("1234567890123", |_| {
            count += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(count, 3usize.pow(12));
    }

    #[test]
    fn test_visitor_error_stops_the_walk() {
        let mut visited = 0;
        let result = for_each_expression("123456789", |_| {
            visited += 1;
            if visited == 3 {
                return Err(GroupSumError::MissingInput {
                    what: "room".to_string(),
                });
            }
            Ok(())
        });
        assert!(matches!(result, Err(GroupSumError::MissingInput { .. })));
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_for_each_solution_filters_on_the_fly() {
        let mut hits = Vec::new();
        for_each_solution("123456789", 100, |expr| {
            assert_eq!(evaluate(expr).unwrap(), 100);
            hits.push(expr.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(hits.len(), 11);
        assert!(hits.contains(&"123-45-67+89".to_string()));
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("1+2+3").unwrap(), 6);
        assert_eq!(evaluate("12-3").unwrap(), 9);
        assert_eq!(evaluate("1-23").unwrap(), -22);
        assert_eq!(evaluate("123-45-67+89").unwrap(), 100);
        assert!(evaluate("99999999999999999999").is_err());
    }

    #[test]
    fn test_fewest_operators_to_one_hundred() {
        let best = fewest_operators("123456789", 100).unwrap();
        assert_eq!(best.as_deref(), Some("123-45-67+89"));
    }

    #[test]
    fn test_solutions() {
        assert_eq!(solutions("123", 6).unwrap(), vec!["1+2+3"]);
        assert!(solutions("123", 1000).unwrap().is_empty());
        assert_eq!(fewest_operators("123", 1000).unwrap(), None);
    }
}
