//! Command-line tokenizing and arity validation.

use thiserror::Error;

/// A typed line split into its command token and argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Split `line` on whitespace. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().map(String::from);
        let command = tokens.next()?;
        Some(Self {
            command,
            args: tokens.collect(),
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The {command} command requires {expected} arguments.")]
pub struct ArityError {
    pub command: String,
    pub expected: usize,
}

/// Check that `input` carries exactly `required` arguments.
pub fn validate(input: &ParsedInput, required: usize) -> Result<(), ArityError> {
    if input.args.len() == required {
        Ok(())
    } else {
        Err(ArityError {
            command: input.command.clone(),
            expected: required,
        })
    }
}
