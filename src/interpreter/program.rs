use std::{
    fs,
    io::{self, Write},
};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{declare, resolve, Namespace},
        lexer::separate,
    },
};

/// The line-oriented program driver.
///
/// Owns the global namespace (pre-seeded with the builtin overload set) and
/// all console/file I/O. The evaluation core below it never performs I/O.
pub struct Program {
    globals: Namespace,
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    /// Creates a program with the builtins installed.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: Namespace::with_builtins() }
    }

    /// The program's global namespace.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.globals
    }

    /// Processes one statement line.
    ///
    /// A line holding exactly one `=` is a declaration: the left-hand tokens
    /// are the function name and its parameter patterns, the right-hand side
    /// is the unparsed body. More than one `=` is a syntax error. Any other
    /// line is an action — `action: data`, where a bare line with no colon is
    /// shorthand for `output: <line>`. Blank lines are skipped.
    ///
    /// # Parameters
    /// - `line`: The statement text.
    /// - `line_number`: Source line for error reporting.
    ///
    /// # Returns
    /// `Ok(true)` to continue processing, `Ok(false)` when a `quit:` action
    /// was reached.
    pub fn read_line(&mut self,
                     line: &str,
                     line_number: usize)
                     -> Result<bool, Box<dyn std::error::Error>> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        let parts: Vec<&str> = line.split('=').collect();

        if parts.len() > 2 {
            return Err(Box::new(ParseError::MultipleEquals { line: line_number }));
        }

        if parts.len() == 2 {
            let tokens = separate(parts[0]);
            let Some((name, patterns)) = tokens.split_first() else {
                return Err(Box::new(ParseError::InvalidDeclaration { line: line_number }));
            };

            declare(name, patterns, parts[1].trim(), &mut self.globals)?;
            return Ok(true);
        }

        let pieces: Vec<&str> = parts[0].split(':').collect();
        let (action, data) = match pieces.as_slice() {
            [action, data] => (action.trim(), data.trim()),
            [data] => ("output", data.trim()),
            _ => return Err(Box::new(ParseError::MalformedAction { line: line_number })),
        };

        self.run_action(action, data, line_number)
    }

    /// Dispatches a recognized action.
    fn run_action(&mut self,
                  action: &str,
                  data: &str,
                  line_number: usize)
                  -> Result<bool, Box<dyn std::error::Error>> {
        match action {
            "output" => {
                let result = resolve(data, &self.globals)?;
                println!("{data} = {result}");
                Ok(true)
            },
            "input" => {
                print!("{data}: ");
                io::stdout().flush()?;

                let mut reply = String::new();
                io::stdin().read_line(&mut reply)?;

                let value = resolve(reply.trim(), &self.globals)?;
                self.globals.insert(data, value);
                Ok(true)
            },
            "run" => {
                let script = fs::read_to_string(data)?;

                for (number, line) in script.lines().enumerate() {
                    if !self.read_line(line, number + 1)? {
                        return Ok(false);
                    }
                }

                Ok(true)
            },
            "quit" => Ok(false),
            _ => Err(Box::new(ParseError::UnknownAction { action: action.to_string(),
                                                          line:   line_number, })),
        }
    }
}
