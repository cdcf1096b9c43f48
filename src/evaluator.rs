use crate::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::environment::Environment;
use crate::object::{Object, FALSE, NULL, TRUE};
use std::cell::RefCell;
use std::rc::Rc;

pub fn eval(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    eval_statements(program.statements(), env)
}

// Program-level walk: unwraps a ReturnValue so the REPL sees the inner
// object. Blocks must NOT unwrap (see eval_block_statement).
fn eval_statements(statements: &[Statement], env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;
    for statement in statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(..) => return result,
            _ => {}
        }
    }
    result
}

// Block-level walk: a ReturnValue passes through untouched so that it keeps
// bubbling up to the enclosing function call (or program).
fn eval_block_statement(statements: &[Statement], env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = NULL;
    for statement in statements {
        result = eval_statement(statement, env);
        match result {
            Object::ReturnValue(..) | Object::Error(..) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Object {
    match statement {
        Statement::ExpressionStatement(exp) => eval_expression(exp, env),
        Statement::BlockStatement(statements) => eval_block_statement(statements, env),
        Statement::ReturnStatement(value) => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::LetStatement { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name, value);
            NULL
        }
    }
}

fn eval_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> Object {
    match expression {
        Expression::IntegerLiteral(value) => Object::Integer(*value),
        Expression::StringLiteral(value) => Object::MonkeyString(value.clone()),
        Expression::Boolean(value) => Object::from_native_bool(*value),
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::PrefixExpression { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(*operator, right)
        }
        Expression::InfixExpression {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(*operator, left, right)
        }
        Expression::IfExpression {
            condition,
            consequence,
            alternative,
        } => eval_if_expression(condition, consequence, alternative.as_deref(), env),
        Expression::FunctionLiteral { parameters, body } => Object::Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        },
        Expression::CallExpression {
            function,
            arguments,
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                let value = eval_expression(argument, env);
                if value.is_error() {
                    return value;
                }
                args.push(value);
            }
            apply_function(function, args)
        }
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if name == "null" {
        return NULL;
    }
    match env.borrow().get(name) {
        Some(value) => value,
        None => Object::Error(format!("Identifier not found: {}", name)),
    }
}

fn eval_prefix_expression(operator: PrefixOperator, right: Object) -> Object {
    match operator {
        PrefixOperator::BANG => eval_bang_operator_expression(right),
        PrefixOperator::MINUS => eval_minus_operator_expression(right),
    }
}

fn eval_bang_operator_expression(target: Object) -> Object {
    match target {
        Object::Boolean(true) => FALSE,
        Object::Boolean(false) => TRUE,
        Object::Null => TRUE,
        _ => FALSE,
    }
}

fn eval_minus_operator_expression(right: Object) -> Object {
    match right {
        Object::Integer(value) => Object::Integer(-value),
        right => Object::Error(format!("Unsupported operator: - {}", right.r#type())),
    }
}

fn eval_infix_expression(operator: InfixOperator, left: Object, right: Object) -> Object {
    match left {
        Object::Integer(..) => eval_integer_infix_expression(operator, left, right),
        Object::Boolean(..) => eval_boolean_infix_expression(operator, left, right),
        Object::MonkeyString(..) => eval_string_infix_expression(operator, left, right),
        _ => Object::Error(format!(
            "Unsupported operator: {} {} {}",
            left.r#type(),
            operator,
            right.r#type()
        )),
    }
}

fn eval_integer_infix_expression(
    operator: InfixOperator,
    left: Object,
    right: Object,
) -> Object {
    use InfixOperator::*;
    let (left_value, right_value) = match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => (*l, *r),
        _ => {
            return Object::Error(format!(
                "Type mismatch: {} {} {}",
                left.r#type(),
                operator,
                right.r#type()
            ));
        }
    };
    match operator {
        PLUS => Object::Integer(left_value + right_value),
        MINUS => Object::Integer(left_value - right_value),
        ASTERISK => Object::Integer(left_value * right_value),
        SLASH => {
            if right_value == 0 {
                Object::Error("division by zero".to_string())
            } else {
                Object::Integer(left_value / right_value)
            }
        }
        LT => Object::from_native_bool(left_value < right_value),
        LE => Object::from_native_bool(left_value <= right_value),
        GT => Object::from_native_bool(left_value > right_value),
        GE => Object::from_native_bool(left_value >= right_value),
        EQ => Object::from_native_bool(left_value == right_value),
        NE => Object::from_native_bool(left_value != right_value),
    }
}

fn eval_boolean_infix_expression(
    operator: InfixOperator,
    left: Object,
    right: Object,
) -> Object {
    let (left_value, right_value) = match (&left, &right) {
        (Object::Boolean(l), Object::Boolean(r)) => (*l, *r),
        _ => {
            return Object::Error(format!(
                "Type mismatch: {} {} {}",
                left.r#type(),
                operator,
                right.r#type()
            ));
        }
    };
    match operator {
        InfixOperator::EQ => Object::from_native_bool(left_value == right_value),
        InfixOperator::NE => Object::from_native_bool(left_value != right_value),
        _ => Object::Error(format!(
            "Unsupported operator: {} {} {}",
            left.r#type(),
            operator,
            right.r#type()
        )),
    }
}

fn eval_string_infix_expression(
    operator: InfixOperator,
    left: Object,
    right: Object,
) -> Object {
    let (left_value, right_value) = match (&left, &right) {
        (Object::MonkeyString(l), Object::MonkeyString(r)) => (l, r),
        _ => {
            return Object::Error(format!(
                "Type mismatch: {} {} {}",
                left.r#type(),
                operator,
                right.r#type()
            ));
        }
    };
    match operator {
        InfixOperator::PLUS => Object::MonkeyString(format!("{}{}", left_value, right_value)),
        _ => Object::Error(format!(
            "Unsupported operator: {} {} {}",
            left.r#type(),
            operator,
            right.r#type()
        )),
    }
}

// Truthiness is identity with the TRUE singleton: integers, strings, and
// null all take the non-true path.
fn eval_if_expression(
    condition: &Expression,
    consequence: &Statement,
    alternative: Option<&Statement>,
    env: &Rc<RefCell<Environment>>,
) -> Object {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition == TRUE {
        eval_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_statement(alternative, env)
    } else {
        NULL
    }
}

fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    let (parameters, body, env) = match function {
        Object::Function {
            parameters,
            body,
            env,
        } => (parameters, body, env),
        function => {
            return Object::Error(format!("Not a function: {}", function.r#type()));
        }
    };
    if parameters.len() != arguments.len() {
        return Object::Error("argument count mismatch".to_string());
    }
    let call_env = Environment::new_enclosed(env);
    for (parameter, argument) in parameters.iter().zip(arguments) {
        call_env.borrow_mut().set(parameter, argument);
    }
    let result = eval_statement(&body, &call_env);
    match result {
        Object::ReturnValue(value) => *value,
        result => result,
    }
}
