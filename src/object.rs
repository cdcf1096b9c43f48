use crate::ast::Statement;
use crate::environment::Environment;
use std::cell::RefCell;
use std::rc::Rc;

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    MonkeyString(String),
    Null,
    ReturnValue(Box<Object>),
    Error(String),
    Function {
        parameters: Vec<String>,
        body: Box<Statement>,
        env: Rc<RefCell<Environment>>,
    },
}

impl Object {
    pub fn r#type(&self) -> &'static str {
        use Object::*;
        match self {
            Integer(..) => "INTEGER",
            Boolean(..) => "BOOLEAN",
            MonkeyString(..) => "STRING",
            Null => "NULL",
            ReturnValue(..) => "RETURN_VALUE",
            Error(..) => "ERROR",
            Function { .. } => "FUNCTION",
        }
    }
    pub fn inspect(&self) -> String {
        use Object::*;
        match self {
            Integer(value) => value.to_string(),
            Boolean(value) => value.to_string(),
            MonkeyString(value) => format!("\"{}\"", value),
            Null => "NULL".to_string(),
            ReturnValue(value) => value.inspect(),
            Error(message) => format!("ERROR: {}", message),
            Function {
                parameters, body, ..
            } => {
                // the body prints without its outer braces
                let body = match body.as_ref() {
                    Statement::BlockStatement(statements) => statements
                        .iter()
                        .map(|s| s.to_string())
                        .collect::<String>(),
                    stmt => stmt.to_string(),
                };
                format!("fn ({}) {{\n{}\n}}", parameters.join(", "), body)
            }
        }
    }
    pub fn from_native_bool(value: bool) -> Object {
        if value {
            TRUE
        } else {
            FALSE
        }
    }
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(..))
    }
}

// Functions compare by their captured frame's identity; everything else
// compares by value, which keeps comparisons against the TRUE/FALSE/NULL
// constants equivalent to identity checks.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        use Object::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (MonkeyString(a), MonkeyString(b)) => a == b,
            (Null, Null) => true,
            (ReturnValue(a), ReturnValue(b)) => a == b,
            (Error(a), Error(b)) => a == b,
            (
                Function {
                    parameters: a_parameters,
                    body: a_body,
                    env: a_env,
                },
                Function {
                    parameters: b_parameters,
                    body: b_body,
                    env: b_env,
                },
            ) => {
                a_parameters == b_parameters
                    && a_body == b_body
                    && Rc::ptr_eq(a_env, b_env)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::object::{Object, FALSE, NULL, TRUE};

    #[test]
    fn test_type_tags() {
        let tests = vec![
            (Object::Integer(1), "INTEGER"),
            (TRUE, "BOOLEAN"),
            (Object::MonkeyString("x".to_string()), "STRING"),
            (NULL, "NULL"),
            (Object::ReturnValue(Box::new(Object::Integer(1))), "RETURN_VALUE"),
            (Object::Error("boom".to_string()), "ERROR"),
        ];
        for (object, expected) in tests {
            assert_eq!(object.r#type(), expected);
        }
    }

    #[test]
    fn test_inspect() {
        let tests = vec![
            (Object::Integer(5), "5"),
            (Object::Integer(-5), "-5"),
            (TRUE, "true"),
            (FALSE, "false"),
            (Object::MonkeyString("hello".to_string()), "\"hello\""),
            (NULL, "NULL"),
            (Object::Error("boom".to_string()), "ERROR: boom"),
            (Object::ReturnValue(Box::new(Object::Integer(7))), "7"),
        ];
        for (object, expected) in tests {
            assert_eq!(object.inspect(), expected);
        }
    }

    #[test]
    fn test_from_native_bool() {
        assert_eq!(Object::from_native_bool(true), TRUE);
        assert_eq!(Object::from_native_bool(false), FALSE);
    }
}
