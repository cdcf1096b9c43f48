use crate::token::{self, Token};
use std::str::Chars;

pub struct Lexer<'a> {
    input: Chars<'a>,
    cur: Option<char>,
    peek: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input: input.chars(),
            cur: None,
            peek: None,
        };
        lexer.read_char();
        lexer.read_char();
        lexer
    }
    pub fn next_token(&mut self) -> Token {
        self.next().unwrap_or(Token::EOF)
    }
    fn read_char(&mut self) {
        self.cur = self.peek;
        self.peek = self.input.next();
    }
    fn skip_whitespace(&mut self) {
        while self.cur.map_or(false, |c| c.is_ascii_whitespace()) {
            self.read_char();
        }
    }
    fn read_number(&mut self) -> String {
        let mut res = String::new();
        while self.cur.map_or(false, |c| c.is_ascii_digit()) {
            res.push(self.cur.unwrap());
            self.read_char();
        }
        res
    }
    fn read_identifier(&mut self) -> String {
        let mut res = String::new();
        while self.cur.map_or(false, is_letter) {
            res.push(self.cur.unwrap());
            self.read_char();
        }
        res
    }
    fn read_string(&mut self) -> String {
        // the opening quote is self.cur; the closing quote is consumed and
        // not part of the literal
        let mut res = String::new();
        self.read_char();
        while self.cur.map_or(false, |c| c != '"') {
            res.push(self.cur.unwrap());
            self.read_char();
        }
        self.read_char();
        res
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        use Token::*;
        self.skip_whitespace();
        let c = self.cur?;
        let token = match c {
            '=' => {
                if self.peek == Some('=') {
                    self.read_char();
                    self.read_char();
                    EQ
                } else {
                    self.read_char();
                    ASSIGN
                }
            }
            '!' => {
                if self.peek == Some('=') {
                    self.read_char();
                    self.read_char();
                    NE
                } else {
                    self.read_char();
                    BANG
                }
            }
            '<' => {
                if self.peek == Some('=') {
                    self.read_char();
                    self.read_char();
                    LE
                } else {
                    self.read_char();
                    LT
                }
            }
            '>' => {
                if self.peek == Some('=') {
                    self.read_char();
                    self.read_char();
                    GE
                } else {
                    self.read_char();
                    GT
                }
            }
            '+' => {
                self.read_char();
                PLUS
            }
            '-' => {
                self.read_char();
                MINUS
            }
            '*' => {
                self.read_char();
                ASTERISK
            }
            '/' => {
                self.read_char();
                SLASH
            }
            ';' => {
                self.read_char();
                SEMICOLON
            }
            ',' => {
                self.read_char();
                COMMA
            }
            '(' => {
                self.read_char();
                LPAREN
            }
            ')' => {
                self.read_char();
                RPAREN
            }
            '{' => {
                self.read_char();
                LBRACE
            }
            '}' => {
                self.read_char();
                RBRACE
            }
            '"' => STRING(self.read_string()),
            c if c.is_ascii_digit() => INT(self.read_number()),
            c if is_letter(c) => token::lookup_ident(&self.read_identifier()),
            c => {
                self.read_char();
                ILLEGAL(c)
            }
        };
        Some(token)
    }
}
