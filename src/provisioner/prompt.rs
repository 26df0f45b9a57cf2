//! Interactive credential prompts.

use std::io::{self, BufRead, Write};

use super::errors::ProvisionError;
use crate::github_client::Credentials;

/// Read credentials from `input`, prompting on standard output.
///
/// Both values are trimmed of surrounding whitespace. A blank value fails
/// with the matching `MissingInput` error before any network call is made,
/// and end-of-input counts as blank.
pub fn collect_from<R: BufRead>(input: &mut R) -> Result<Credentials, ProvisionError> {
    let username = prompt_line(input, "GitHub username: ")?;
    if username.is_empty() {
        return Err(ProvisionError::MissingInput("Username"));
    }

    let token = prompt_line(input, "GitHub Personal Access Token: ")?;
    if token.is_empty() {
        return Err(ProvisionError::MissingInput("Token"));
    }

    Ok(Credentials { username, token })
}

fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, ProvisionError> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
