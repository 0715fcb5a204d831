//! Interactive input collection for the login flow.

use std::io::{self, Write};

use crate::domain::models::config::sanitize_input;

/// Prompt on stdout and read one trimmed line from stdin.
///
/// # Errors
/// Propagates terminal I/O failures.
pub fn read_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(sanitize_input(&line).to_string())
}

/// Prompt and read a value without echoing it to the terminal.
///
/// # Errors
/// Propagates terminal I/O failures.
pub fn read_secret(prompt: &str) -> io::Result<String> {
    let value = rpassword::prompt_password(prompt)?;
    Ok(sanitize_input(&value).to_string())
}
