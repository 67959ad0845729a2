//! The interactive command loop.
//!
//! Each iteration reads one line, resolves it against the catalog, validates
//! the argument count, runs the query, prints the rendered result and, for
//! commands that support it, offers to store the result in a file. Every
//! per-command error is reported here and the loop carries on.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::catalog::{Command, usage_menu};
use crate::db::{DbError, ResultSet};
use crate::executor::QueryExecutor;
use crate::export::{ExportError, export};
use crate::output::render;
use crate::validate::{ArityError, ParsedInput, validate};

/// Errors raised while handling a single command line.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Incorrect command: '{command}'")]
    NotFound { command: String },

    #[error(transparent)]
    Arity(#[from] ArityError),

    #[error("Database error occurred: {0}")]
    Database(#[from] DbError),

    #[error("Error saving data: {0}")]
    Export(#[from] ExportError),
}

/// What the loop should do after a command line has been handled.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Exit,
    Query {
        command: Command,
        text: String,
        result: ResultSet,
    },
}

/// States of the "store this result?" interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportPrompt {
    AwaitChoice,
    AwaitFilename,
    Done,
}

/// Line-oriented prompt over any buffered input and writable output.
pub struct Repl<R, W> {
    executor: QueryExecutor,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(executor: QueryExecutor, input: R, output: W) -> Self {
        Self { executor, input, output }
    }

    /// Run until the exit command or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the data querying app!")?;

        loop {
            writeln!(self.output)?;
            write!(self.output, "{}Type your option here: ", usage_menu())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed");
                break;
            };
            writeln!(self.output)?;

            let Some(input) = ParsedInput::parse(&line) else {
                continue;
            };

            match self.handle(&input) {
                Ok(Outcome::Exit) => {
                    writeln!(self.output, "Programme exited successfully!")?;
                    break;
                }
                Ok(Outcome::Query { command, text, result }) => {
                    if !text.is_empty() {
                        writeln!(self.output, "{}", text)?;
                    }
                    if command.offers_export() {
                        self.offer_export(&result)?;
                    }
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        Ok(())
    }

    /// Resolve, validate and execute one parsed line. Performs no terminal I/O.
    pub fn handle(&self, input: &ParsedInput) -> Result<Outcome, CommandError> {
        let command = Command::lookup(&input.command).ok_or_else(|| CommandError::NotFound {
            command: input.command.clone(),
        })?;

        validate(input, command.arity())?;

        if command == Command::Exit {
            return Ok(Outcome::Exit);
        }

        tracing::debug!(command = command.token(), "dispatching");
        let result = self.executor.execute(command, &input.args)?;
        let text = render(command, &input.args, &result);

        Ok(Outcome::Query { command, text, result })
    }

    /// Ask whether to store `result`, looping until the user declines, a file
    /// is written, or input ends.
    fn offer_export(&mut self, result: &ResultSet) -> io::Result<()> {
        let mut state = ExportPrompt::AwaitChoice;

        while state != ExportPrompt::Done {
            state = match state {
                ExportPrompt::AwaitChoice => {
                    writeln!(self.output, "Would you like to store this result?")?;
                    write!(self.output, "Y/[N]? : ")?;
                    self.output.flush()?;

                    match self.read_line()? {
                        None => ExportPrompt::Done,
                        Some(answer) => match parse_choice(&answer) {
                            Some(true) => ExportPrompt::AwaitFilename,
                            Some(false) => ExportPrompt::Done,
                            None => {
                                writeln!(self.output, "Invalid choice")?;
                                ExportPrompt::AwaitChoice
                            }
                        },
                    }
                }
                ExportPrompt::AwaitFilename => {
                    write!(self.output, "Specify filename. Must end in .xml or .json: ")?;
                    self.output.flush()?;

                    match self.read_line()? {
                        None => ExportPrompt::Done,
                        Some(filename) => self.store(result, filename.trim())?,
                    }
                }
                ExportPrompt::Done => ExportPrompt::Done,
            };
        }

        Ok(())
    }

    fn store(&mut self, result: &ResultSet, filename: &str) -> io::Result<ExportPrompt> {
        match export(result, filename) {
            Ok(_) => {
                writeln!(self.output, "Data saved to {}", filename)?;
                Ok(ExportPrompt::Done)
            }
            Err(ExportError::UnsupportedExtension { .. }) => {
                writeln!(self.output, "Invalid file extension. Please use .xml or .json")?;
                Ok(ExportPrompt::AwaitChoice)
            }
            Err(e) => {
                tracing::warn!(filename, error = %e, "export failed");
                writeln!(self.output, "{}", CommandError::from(e))?;
                Ok(ExportPrompt::AwaitChoice)
            }
        }
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Interpret a yes/no answer. Only y/yes/n/no are accepted, in any case.
fn parse_choice(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
