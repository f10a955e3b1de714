//! Query, expression and token conversion to serde_json values

use serde_json::{Value, json};

use crate::ast::{Argument, Expression, Query, Token, TokenValue};
use crate::location::Position;
use crate::number::{Comparison, NumberArg};

fn number_to_json(n: NumberArg) -> Value {
    let comparison = match n.comparison {
        Comparison::Exact => "exact",
        Comparison::GreaterThan => "greater_than",
        Comparison::LessThan => "less_than",
    };
    json!({ "magnitude": n.magnitude, "comparison": comparison })
}

fn argument_to_json(arg: &Argument) -> Value {
    match arg {
        Argument::String(s) => Value::String(s.clone()),
        Argument::Number(n) => number_to_json(*n),
    }
}

fn position_to_json(p: Position) -> Value {
    json!({ "line": p.line, "column": p.column, "offset": p.offset })
}

/// Convert an expression tree to JSON
pub fn expression_to_json(expr: &Expression) -> Value {
    match expr {
        Expression::True => json!({ "type": "true" }),
        Expression::False => json!({ "type": "false" }),
        Expression::Not(inner) => json!({ "type": "not", "operand": expression_to_json(inner) }),
        Expression::And(left, right) => json!({
            "type": "and",
            "left": expression_to_json(left),
            "right": expression_to_json(right),
        }),
        Expression::Or(left, right) => json!({
            "type": "or",
            "left": expression_to_json(left),
            "right": expression_to_json(right),
        }),
        Expression::List(items) => json!({
            "type": "list",
            "items": items.iter().map(expression_to_json).collect::<Vec<_>>(),
        }),
        Expression::Predicate { name, arguments } => json!({
            "type": "predicate",
            "name": name,
            "arguments": arguments.iter().map(argument_to_json).collect::<Vec<_>>(),
        }),
        Expression::Exec { action, arguments } => json!({
            "type": "exec",
            "action": action,
            "arguments": arguments,
        }),
    }
}

/// Convert a parsed query to JSON
pub fn query_to_json(query: &Query) -> Value {
    json!({
        "starting_points": query.starting_points,
        "expression": query.expression.as_ref().map(expression_to_json),
    })
}

/// Convert a token, including its span, to JSON
pub fn token_to_json(token: &Token) -> Value {
    let value = match &token.value {
        TokenValue::None => Value::Null,
        TokenValue::Text(s) => Value::String(s.clone()),
        TokenValue::Number(n) => number_to_json(*n),
    };
    json!({
        "kind": format!("{:?}", token.kind),
        "value": value,
        "begin": position_to_json(token.location.begin),
        "end": position_to_json(token.location.end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn converts_nested_expression() {
        let expr = Expression::or(
            Expression::predicate("name", vec![Argument::String("build".into())]),
            Expression::not(Expression::predicate(
                "mindepth",
                vec![Argument::Number(NumberArg::exact(2))],
            )),
        );
        let value = expression_to_json(&expr);
        assert_eq!(value["type"], "or");
        assert_eq!(value["left"]["arguments"][0], "build");
        assert_eq!(value["right"]["operand"]["arguments"][0]["magnitude"], 2);
        assert_eq!(value["right"]["operand"]["arguments"][0]["comparison"], "exact");
    }

    #[test]
    fn converts_empty_query() {
        let value = query_to_json(&Query::default());
        assert_eq!(value["expression"], Value::Null);
        assert_eq!(value["starting_points"], json!([]));
    }

    #[test]
    fn converts_token_with_span() {
        let token = Token::string_arg("f", Location::default());
        let value = token_to_json(&token);
        assert_eq!(value["kind"], "StringArg");
        assert_eq!(value["value"], "f");
        assert_eq!(value["begin"]["line"], 1);
    }
}
