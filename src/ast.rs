use std::fmt;

#[derive(Debug, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    LetStatement { name: String, value: Expression },
    ReturnStatement(Expression),
    ExpressionStatement(Expression),
    BlockStatement(Vec<Statement>),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Statement::*;
        match self {
            LetStatement { name, value } => {
                write!(f, "let {} = {};", name, value)
            }
            ReturnStatement(value) => {
                write!(f, "return {};", value)
            }
            ExpressionStatement(exp) => {
                write!(f, "{}", exp)
            }
            BlockStatement(statements) => {
                write!(f, "{{")?;
                for statement in statements {
                    write!(f, "{}", statement)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    Boolean(bool),
    StringLiteral(String),
    PrefixExpression {
        operator: PrefixOperator,
        right: Box<Expression>,
    },
    InfixExpression {
        left: Box<Expression>,
        operator: InfixOperator,
        right: Box<Expression>,
    },
    IfExpression {
        condition: Box<Expression>,
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
    },
    FunctionLiteral {
        parameters: Vec<String>,
        body: Box<Statement>,
    },
    CallExpression {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Identifier(name) => {
                write!(f, "{}", name)
            }
            IntegerLiteral(value) => {
                write!(f, "{}", value)
            }
            Boolean(value) => {
                write!(f, "{}", value)
            }
            StringLiteral(value) => {
                write!(f, "{}", value)
            }
            PrefixExpression { operator, right } => {
                write!(f, "({}{})", operator, right)
            }
            InfixExpression {
                left,
                operator,
                right,
            } => {
                write!(f, "({} {} {})", left, operator, right)
            }
            IfExpression {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else {}", alternative)?;
                }
                Ok(())
            }
            FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {}", parameters.join(","), body)
            }
            CallExpression {
                function,
                arguments,
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, arguments.join(", "))
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PrefixOperator {
    MINUS,
    BANG,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PrefixOperator::*;
        match self {
            MINUS => write!(f, "-"),
            BANG => write!(f, "!"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InfixOperator {
    PLUS,
    MINUS,
    ASTERISK,
    SLASH,
    LT,
    LE,
    GT,
    GE,
    EQ,
    NE,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::*;
        match self {
            PLUS => write!(f, "+"),
            MINUS => write!(f, "-"),
            ASTERISK => write!(f, "*"),
            SLASH => write!(f, "/"),
            LT => write!(f, "<"),
            LE => write!(f, "<="),
            GT => write!(f, ">"),
            GE => write!(f, ">="),
            EQ => write!(f, "=="),
            NE => write!(f, "!="),
        }
    }
}
