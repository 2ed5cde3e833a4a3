use std::{
    fs,
    io::{self, Write},
};

use clap::Parser;
use curria::interpreter::program::Program;

/// curria is an easy to use, dynamically-typed functional language with
/// automatic currying.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells curria to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Script contents. When omitted, an interactive prompt is started.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut program = Program::new();

    let Some(contents) = args.contents else {
        prompt(&mut program);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    for (number, line) in script.lines().enumerate() {
        match program.read_line(line, number + 1) {
            Ok(true) => {},
            Ok(false) => break,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}

/// Reads statements from standard input until `quit:` or end of input.
///
/// Errors are reported and the loop continues, so a typo does not end the
/// session.
fn prompt(program: &mut Program) {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        match program.read_line(line.trim_end(), 1) {
            Ok(true) => {},
            Ok(false) => return,
            Err(e) => eprintln!("{e}"),
        }
    }
}
