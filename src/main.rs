use monkey_interpreter::repl;
use std::env;

fn main() {
    let user = env::var("USER").unwrap_or_else(|_| "there".to_string());
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type commands");
    repl::start();
}
