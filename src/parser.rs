use crate::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::lexer::Lexer;
use crate::token::Token;
use anyhow::{bail, Result};
use std::mem;

#[derive(PartialOrd, PartialEq, Clone, Copy)]
enum Precedence {
    LOWEST,
    EQUALS,
    LESSGREATER,
    SUM,
    PRODUCT,
    PREFIX,
    CALL,
}

impl Token {
    fn precedence(&self) -> Precedence {
        use Precedence::*;
        use Token::*;
        match self {
            EQ | NE => EQUALS,
            LT | LE | GT | GE => LESSGREATER,
            PLUS | MINUS => SUM,
            ASTERISK | SLASH => PRODUCT,
            LPAREN => CALL,
            _ => LOWEST,
        }
    }
}

pub struct Parser<'a> {
    l: Lexer<'a>,
    cur: Token,
    peek: Token,
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(l: Lexer<'a>) -> Self {
        let mut parser = Parser {
            l,
            cur: Token::EOF,
            peek: Token::EOF,
            errors: vec![],
        };
        parser.next_token();
        parser.next_token();
        parser
    }
    fn next_token(&mut self) {
        // self.cur <- self.peek
        // self.peek <- self.l.next()
        mem::swap(&mut self.cur, &mut self.peek);
        self.peek = self.l.next().unwrap_or(Token::EOF);
    }
    fn cur_token_is(&self, token: &Token) -> bool {
        &self.cur == token
    }
    fn peek_token_is(&self, token: &Token) -> bool {
        &self.peek == token
    }
    fn expect_peek(&self, token: &Token) -> Result<()> {
        if !self.peek_token_is(token) {
            bail!(
                "expected next token to be {}, got {} instead",
                token.kind(),
                self.peek.kind()
            );
        }
        Ok(())
    }
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cur_token_is(&Token::EOF) {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => self.errors.push(err.to_string()),
            }
            self.next_token();
        }
        Program::new(statements)
    }
    fn parse_statement(&mut self) -> Result<Statement> {
        match self.cur {
            Token::LET => self.parse_let_statement(),
            Token::RETURN => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }
    fn parse_let_statement(&mut self) -> Result<Statement> {
        match &self.peek {
            Token::IDENT(literal) => {
                let name = literal.to_string();
                self.next_token(); // self.cur <- IDENT

                self.expect_peek(&Token::ASSIGN)?; // =
                self.next_token(); // self.cur <- ASSIGN

                self.next_token();
                let value = self.parse_expression(Precedence::LOWEST)?;

                if self.peek_token_is(&Token::SEMICOLON) {
                    self.next_token();
                }
                Ok(Statement::LetStatement { name, value })
            }
            peek => {
                bail!(
                    "expected next token to be IDENT, got {} instead",
                    peek.kind()
                )
            }
        }
    }
    fn parse_return_statement(&mut self) -> Result<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(&Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::ReturnStatement(value))
    }
    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let exp = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(&Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::ExpressionStatement(exp))
    }
    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression> {
        use Expression::*;
        use Token::*;
        let mut exp = match &self.cur {
            IDENT(literal) => Identifier(literal.to_string()),
            INT(literal) => {
                let value = literal.parse::<i64>()?;
                IntegerLiteral(value)
            }
            STRING(literal) => StringLiteral(literal.to_string()),
            TRUE => Boolean(true),
            FALSE => Boolean(false),
            MINUS | BANG => self.parse_prefix_expression()?,
            LPAREN => self.parse_grouped_expression()?,
            IF => self.parse_if_expression()?,
            FUNCTION => self.parse_function_literal()?,
            token => {
                bail!("no prefix parse function for {} found", token.kind());
            }
        };
        while !self.peek_token_is(&Token::SEMICOLON) && precedence < self.peek.precedence() {
            exp = match &self.peek {
                PLUS | MINUS | ASTERISK | SLASH | LT | LE | GT | GE | EQ | NE => {
                    self.next_token();
                    self.parse_infix_expression(exp)?
                }
                LPAREN => {
                    self.next_token();
                    self.parse_call_expression(exp)?
                }
                _ => return Ok(exp),
            };
        }
        Ok(exp)
    }
    fn parse_grouped_expression(&mut self) -> Result<Expression> {
        assert_eq!(self.cur, Token::LPAREN); // (
        self.next_token();
        let exp = self.parse_expression(Precedence::LOWEST)?;
        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token();
        Ok(exp)
    }
    fn parse_prefix_expression(&mut self) -> Result<Expression> {
        let op = match &self.cur {
            Token::MINUS => PrefixOperator::MINUS,
            Token::BANG => PrefixOperator::BANG,
            token => {
                bail!("unexpected operator: {:?}", token);
            }
        };
        self.next_token();
        let right = self.parse_expression(Precedence::PREFIX)?;
        Ok(Expression::PrefixExpression {
            operator: op,
            right: Box::new(right),
        })
    }
    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression> {
        let op = match &self.cur {
            Token::PLUS => InfixOperator::PLUS,
            Token::MINUS => InfixOperator::MINUS,
            Token::ASTERISK => InfixOperator::ASTERISK,
            Token::SLASH => InfixOperator::SLASH,
            Token::LT => InfixOperator::LT,
            Token::LE => InfixOperator::LE,
            Token::GT => InfixOperator::GT,
            Token::GE => InfixOperator::GE,
            Token::EQ => InfixOperator::EQ,
            Token::NE => InfixOperator::NE,
            token => {
                bail!("unexpected operator: {:?}", token);
            }
        };
        let precedence = self.cur.precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::InfixExpression {
            left: Box::new(left),
            operator: op,
            right: Box::new(right),
        })
    }
    fn parse_if_expression(&mut self) -> Result<Expression> {
        self.expect_peek(&Token::LPAREN)?; // (
        self.next_token(); // self.cur <- LPAREN

        self.next_token();
        let condition = self.parse_expression(Precedence::LOWEST)?;

        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token(); // self.cur <- RPAREN

        self.expect_peek(&Token::LBRACE)?; // {
        self.next_token(); // self.cur <- LBRACE

        let consequence = self.parse_block_statement()?;
        let alternative = if self.peek_token_is(&Token::ELSE) {
            self.next_token();

            self.expect_peek(&Token::LBRACE)?; // {
            self.next_token(); // self.cur <- LBRACE

            let alt = self.parse_block_statement()?;
            Some(Box::new(alt))
        } else {
            None
        };
        Ok(Expression::IfExpression {
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative,
        })
    }
    fn parse_function_literal(&mut self) -> Result<Expression> {
        self.expect_peek(&Token::LPAREN)?; // (
        self.next_token(); // self.cur <- LPAREN

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(&Token::LBRACE)?; // {
        self.next_token(); // self.cur <- LBRACE

        let body = self.parse_block_statement()?;
        Ok(Expression::FunctionLiteral {
            parameters,
            body: Box::new(body),
        })
    }
    fn parse_function_parameters(&mut self) -> Result<Vec<String>> {
        let mut parameters = Vec::new();
        if self.peek_token_is(&Token::RPAREN) {
            self.next_token(); // self.cur <- RPAREN
            return Ok(parameters);
        }
        loop {
            self.next_token();
            match &self.cur {
                Token::IDENT(literal) => parameters.push(literal.to_string()),
                token => {
                    bail!(
                        "expected next token to be IDENT, got {} instead",
                        token.kind()
                    );
                }
            }
            if self.peek_token_is(&Token::COMMA) {
                self.next_token(); // self.cur <- COMMA
            } else {
                break;
            }
        }
        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token();
        Ok(parameters)
    }
    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression> {
        assert_eq!(self.cur, Token::LPAREN); // (
        let arguments = self.parse_call_arguments()?;
        Ok(Expression::CallExpression {
            function: Box::new(function),
            arguments,
        })
    }
    fn parse_call_arguments(&mut self) -> Result<Vec<Expression>> {
        let mut arguments = Vec::new();
        if self.peek_token_is(&Token::RPAREN) {
            self.next_token(); // self.cur <- RPAREN
            return Ok(arguments);
        }
        loop {
            self.next_token();
            arguments.push(self.parse_expression(Precedence::LOWEST)?);
            if self.peek_token_is(&Token::COMMA) {
                self.next_token(); // self.cur <- COMMA
            } else {
                break;
            }
        }
        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token();
        Ok(arguments)
    }
    fn parse_block_statement(&mut self) -> Result<Statement> {
        self.next_token();
        let mut statements = Vec::new();
        while !self.cur_token_is(&Token::RBRACE) {
            let stmt = self.parse_statement()?;
            statements.push(stmt);
            self.next_token();
        }
        Ok(Statement::BlockStatement(statements))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse(input: &str) -> Program {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parser has errors: {:?}",
            parser.errors()
        );
        program
    }

    fn parse_errors(input: &str) -> Vec<String> {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        parser.parse_program();
        parser.errors().to_vec()
    }

    #[test]
    fn test_let_statements() {
        let program = parse("let x = 5; let y = true; let foobar = y;");
        let statements = program.statements();
        assert_eq!(statements.len(), 3);

        assert_eq!(
            statements[0],
            Statement::LetStatement {
                name: "x".to_string(),
                value: Expression::IntegerLiteral(5)
            }
        );
        assert_eq!(
            statements[1],
            Statement::LetStatement {
                name: "y".to_string(),
                value: Expression::Boolean(true)
            }
        );
        assert_eq!(
            statements[2],
            Statement::LetStatement {
                name: "foobar".to_string(),
                value: Expression::Identifier("y".to_string()),
            }
        );
    }

    #[test]
    fn test_let_statement_without_semicolon() {
        let program = parse("let x = 5");
        assert_eq!(
            program.statements(),
            &[Statement::LetStatement {
                name: "x".to_string(),
                value: Expression::IntegerLiteral(5)
            }]
        );
    }

    #[test]
    fn test_return_statements() {
        let program = parse("return 5; return 993322;");
        assert_eq!(
            program.statements(),
            &[
                Statement::ReturnStatement(Expression::IntegerLiteral(5)),
                Statement::ReturnStatement(Expression::IntegerLiteral(993322)),
            ]
        );
    }

    #[test]
    fn test_identifier_expression() {
        let program = parse("foobar;");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::Identifier(
                "foobar".to_string()
            ))]
        );
    }

    #[test]
    fn test_integer_literal_expression() {
        let program = parse("123;");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::IntegerLiteral(
                123
            ))]
        );
    }

    #[test]
    fn test_string_literal_expression() {
        let program = parse(r#""hello world";"#);
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::StringLiteral(
                "hello world".to_string()
            ))]
        );
    }

    #[test]
    fn test_prefix_expressions() {
        let tests = vec![
            ("!5", PrefixOperator::BANG, Expression::IntegerLiteral(5)),
            ("-15", PrefixOperator::MINUS, Expression::IntegerLiteral(15)),
            ("!true", PrefixOperator::BANG, Expression::Boolean(true)),
            ("!false", PrefixOperator::BANG, Expression::Boolean(false)),
        ];
        for (input, operator, right) in tests {
            let program = parse(input);
            assert_eq!(
                program.statements(),
                &[Statement::ExpressionStatement(
                    Expression::PrefixExpression {
                        operator,
                        right: Box::new(right),
                    }
                )],
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_infix_expressions() {
        use InfixOperator::*;
        let tests = vec![
            ("5 + 5;", PLUS),
            ("5 - 5;", MINUS),
            ("5 * 5;", ASTERISK),
            ("5 / 5;", SLASH),
            ("5 < 5;", LT),
            ("5 <= 5;", LE),
            ("5 > 5;", GT),
            ("5 >= 5;", GE),
            ("5 == 5;", EQ),
            ("5 != 5;", NE),
        ];
        for (input, operator) in tests {
            let program = parse(input);
            assert_eq!(
                program.statements(),
                &[Statement::ExpressionStatement(
                    Expression::InfixExpression {
                        left: Box::new(Expression::IntegerLiteral(5)),
                        operator,
                        right: Box::new(Expression::IntegerLiteral(5)),
                    }
                )],
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_operator_precedence_parsing() {
        let tests = vec![
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            ("5 >= 4 == 3 <= 4", "((5 >= 4) == (3 <= 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("- (5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("fn(x){ x; }", "fn(x) {x}"),
            ("fn(x, y){ x + y; }", "fn(x,y) {(x + y)}"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
        ];
        for (input, expected) in tests {
            let program = parse(input);
            assert_eq!(program.to_string(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_rendering_is_a_fixed_point() {
        let inputs = vec![
            "a + b * c + d / e - f",
            "if (x < y) { x } else { y }",
            "let f = fn(x, y){ x + y; }; f(1, 2 * 3)",
            "-a * b == !c",
        ];
        for input in inputs {
            let once = parse(input).to_string();
            let twice = parse(&once).to_string();
            assert_eq!(once, twice, "input: {}", input);
        }
    }

    #[test]
    fn test_if_expression() {
        let program = parse("if (x < y) { x }");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::IfExpression {
                condition: Box::new(Expression::InfixExpression {
                    left: Box::new(Expression::Identifier("x".to_string())),
                    operator: InfixOperator::LT,
                    right: Box::new(Expression::Identifier("y".to_string())),
                }),
                consequence: Box::new(Statement::BlockStatement(vec![
                    Statement::ExpressionStatement(Expression::Identifier(
                        "x".to_string()
                    )),
                ])),
                alternative: None,
            })]
        );
    }

    #[test]
    fn test_if_else_expression() {
        let program = parse("if (1 < 2) { 3; 4 } else { 5; }");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::IfExpression {
                condition: Box::new(Expression::InfixExpression {
                    left: Box::new(Expression::IntegerLiteral(1)),
                    operator: InfixOperator::LT,
                    right: Box::new(Expression::IntegerLiteral(2)),
                }),
                consequence: Box::new(Statement::BlockStatement(vec![
                    Statement::ExpressionStatement(Expression::IntegerLiteral(3)),
                    Statement::ExpressionStatement(Expression::IntegerLiteral(4)),
                ])),
                alternative: Some(Box::new(Statement::BlockStatement(vec![
                    Statement::ExpressionStatement(Expression::IntegerLiteral(5)),
                ]))),
            })]
        );
    }

    #[test]
    fn test_function_literal_parsing() {
        let program = parse("fn(x, y){ x + y; }");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(
                Expression::FunctionLiteral {
                    parameters: vec!["x".to_string(), "y".to_string()],
                    body: Box::new(Statement::BlockStatement(vec![
                        Statement::ExpressionStatement(
                            Expression::InfixExpression {
                                left: Box::new(Expression::Identifier(
                                    "x".to_string()
                                )),
                                operator: InfixOperator::PLUS,
                                right: Box::new(Expression::Identifier(
                                    "y".to_string()
                                )),
                            }
                        ),
                    ])),
                }
            )]
        );
    }

    #[test]
    fn test_function_parameter_parsing() {
        let tests = vec![
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];
        for (input, expected) in tests {
            let program = parse(input);
            match &program.statements()[0] {
                Statement::ExpressionStatement(Expression::FunctionLiteral {
                    parameters,
                    ..
                }) => {
                    assert_eq!(parameters, &expected, "input: {}", input);
                }
                stmt => panic!("not a function literal: {:?}", stmt),
            }
        }
    }

    #[test]
    fn test_call_expression_parsing() {
        let program = parse("add(1, 2 * 3, 4 + 5)");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::CallExpression {
                function: Box::new(Expression::Identifier("add".to_string())),
                arguments: vec![
                    Expression::IntegerLiteral(1),
                    Expression::InfixExpression {
                        left: Box::new(Expression::IntegerLiteral(2)),
                        operator: InfixOperator::ASTERISK,
                        right: Box::new(Expression::IntegerLiteral(3)),
                    },
                    Expression::InfixExpression {
                        left: Box::new(Expression::IntegerLiteral(4)),
                        operator: InfixOperator::PLUS,
                        right: Box::new(Expression::IntegerLiteral(5)),
                    },
                ],
            })]
        );
    }

    #[test]
    fn test_call_without_arguments() {
        let program = parse("noop()");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::CallExpression {
                function: Box::new(Expression::Identifier("noop".to_string())),
                arguments: vec![],
            })]
        );
    }

    #[test]
    fn test_curried_call() {
        let program = parse("mk(3)(4)");
        assert_eq!(
            program.statements(),
            &[Statement::ExpressionStatement(Expression::CallExpression {
                function: Box::new(Expression::CallExpression {
                    function: Box::new(Expression::Identifier("mk".to_string())),
                    arguments: vec![Expression::IntegerLiteral(3)],
                }),
                arguments: vec![Expression::IntegerLiteral(4)],
            })]
        );
    }

    #[test]
    fn test_missing_right_paren() {
        let errors = parse_errors("(1");
        assert_eq!(
            errors,
            vec!["expected next token to be RPAREN, got EOF instead".to_string()]
        );
    }

    #[test]
    fn test_missing_prefix_parse_function() {
        let errors = parse_errors("1 + ;");
        assert_eq!(
            errors,
            vec!["no prefix parse function for SEMICOLON found".to_string()]
        );
    }

    #[test]
    fn test_let_statement_errors() {
        let tests = vec![
            (
                "let = 5;",
                "expected next token to be IDENT, got ASSIGN instead",
            ),
            (
                "let x 5;",
                "expected next token to be ASSIGN, got INT instead",
            ),
        ];
        for (input, expected) in tests {
            let errors = parse_errors(input);
            assert!(
                errors.iter().any(|e| e == expected),
                "input: {}, errors: {:?}",
                input,
                errors
            );
        }
    }

    #[test]
    fn test_parsing_continues_past_errors() {
        let lexer = Lexer::new("let = 1; let y = 2;");
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(!parser.errors().is_empty());
        // the second statement still parses
        assert!(program.statements().contains(&Statement::LetStatement {
            name: "y".to_string(),
            value: Expression::IntegerLiteral(2),
        }));
    }
}
