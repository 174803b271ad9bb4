use crate::error::Error;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Press '(y)' to continue, 'd' to show name diff, 'n' to abort:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Yes,
    No,
    Diff,
}

/// Empty input accepts. Only the first word counts.
pub fn parse_response(input: &str) -> Response {
    let word = input.split_whitespace().next().unwrap_or("");
    match word.to_lowercase().as_str() {
        "" | "y" => Response::Yes,
        "d" => Response::Diff,
        _ => Response::No,
    }
}

pub fn prompt_user<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Response, Error> {
    write!(output, "{}", PROMPT).map_err(|e| Error::Prompt(e.to_string()))?;
    output.flush().map_err(|e| Error::Prompt(e.to_string()))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::Prompt(e.to_string()))?;
    if read == 0 {
        return Err(Error::Prompt("EOF".to_string()));
    }

    Ok(parse_response(&line))
}
