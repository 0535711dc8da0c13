//! Interactive credential input.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};

/// Read the API secret key from stdin. Whitespace is trimmed; an empty key
/// aborts the run before any network call.
pub fn read_token() -> Result<String> {
    print!("Enter the API secret key: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read the secret key")?;

    let token = line.trim();
    if token.is_empty() {
        bail!("the secret key must not be empty");
    }
    Ok(token.to_string())
}
