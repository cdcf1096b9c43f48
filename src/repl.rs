use crate::environment::Environment;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::object::NULL;
use crate::parser::Parser;
use std::io;
use std::io::Write;

const PROMPT: &'static str = ">> ";

pub fn start() {
    // bindings accumulate across lines
    let env = Environment::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().unwrap();
        let mut input = String::new();
        let read = io::stdin().read_line(&mut input).unwrap();
        if read == 0 {
            // EOF
            return;
        }
        let input = input.trim_end();
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            for error in parser.errors() {
                println!("{}", error);
            }
            continue;
        }
        let result = evaluator::eval(&program, &env);
        if result != NULL {
            println!("{}", result.inspect());
        }
    }
}
