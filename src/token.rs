use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Token {
    ILLEGAL(char),
    EOF,

    IDENT(String),
    INT(String),
    STRING(String),

    ASSIGN,   // =
    PLUS,     // +
    MINUS,    // -
    BANG,     // !
    ASTERISK, // *
    SLASH,    // /

    LT, // <
    LE, // <=
    GT, // >
    GE, // >=
    EQ, // ==
    NE, // !=

    COMMA,     // ,
    SEMICOLON, // ;

    LPAREN, // (
    RPAREN, // )
    LBRACE, // {
    RBRACE, // }

    FUNCTION, // fn
    LET,
    RETURN,
    TRUE,
    FALSE,
    IF,
    ELSE,
}

static KEYWORDS: Lazy<HashMap<&'static str, Token>> = Lazy::new(|| {
    use Token::*;
    let mut map = HashMap::new();
    map.insert("fn", FUNCTION);
    map.insert("let", LET);
    map.insert("return", RETURN);
    map.insert("true", TRUE);
    map.insert("false", FALSE);
    map.insert("if", IF);
    map.insert("else", ELSE);
    map
});

pub fn lookup_ident(ident: &str) -> Token {
    KEYWORDS
        .get(ident)
        .cloned()
        .unwrap_or_else(|| Token::IDENT(ident.to_string()))
}

impl Token {
    pub fn kind(&self) -> &'static str {
        use Token::*;
        match self {
            ILLEGAL(..) => "ILLEGAL",
            EOF => "EOF",
            IDENT(..) => "IDENT",
            INT(..) => "INT",
            STRING(..) => "STRING",
            ASSIGN => "ASSIGN",
            PLUS => "PLUS",
            MINUS => "MINUS",
            BANG => "BANG",
            ASTERISK => "ASTERISK",
            SLASH => "SLASH",
            LT => "LT",
            LE => "LE",
            GT => "GT",
            GE => "GE",
            EQ => "EQ",
            NE => "NE",
            COMMA => "COMMA",
            SEMICOLON => "SEMICOLON",
            LPAREN => "LPAREN",
            RPAREN => "RPAREN",
            LBRACE => "LBRACE",
            RBRACE => "RBRACE",
            FUNCTION => "FUNCTION",
            LET => "LET",
            RETURN => "RETURN",
            TRUE => "TRUE",
            FALSE => "FALSE",
            IF => "IF",
            ELSE => "ELSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{lookup_ident, Token};

    #[test]
    fn test_lookup_ident() {
        let tests = vec![
            ("fn", Token::FUNCTION),
            ("let", Token::LET),
            ("return", Token::RETURN),
            ("true", Token::TRUE),
            ("false", Token::FALSE),
            ("if", Token::IF),
            ("else", Token::ELSE),
            ("foobar", Token::IDENT("foobar".to_string())),
            ("lets", Token::IDENT("lets".to_string())),
        ];
        for (input, expected) in tests {
            assert_eq!(lookup_ident(input), expected);
        }
    }
}
