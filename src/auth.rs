use anyhow::{Result, bail};
use std::io::{self, IsTerminal, Read};
use zeroize::Zeroizing;

/// Resolves the password, in order of precedence:
///
///   1. the `--password` flag
///   2. the SALTBOX_PASSWORD environment variable
///      SALTBOX_PASSWORD="supersecret" saltbox decrypt --text ...
///   3. piped stdin, when the content comes from `--text` or `--file`
///   4. an interactive prompt; with `confirm` the password is asked twice
///      (used when encrypting, so a typo does not produce an unopenable
///      container)
pub fn read_password(flag: Option<String>, confirm: bool) -> Result<Zeroizing<String>> {
    if let Some(pw) = flag {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    if let Ok(pw) = std::env::var("SALTBOX_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    if io::stdin().is_terminal() {
        let pw = rpassword::prompt_password("Password: ")?;

        if pw.is_empty() {
            bail!("password cannot be empty");
        }

        if confirm {
            let pw2 = rpassword::prompt_password("Confirm password: ")?;
            if pw != pw2 {
                bail!("passwords do not match");
            }
        }

        return Ok(Zeroizing::new(pw));
    }

    bail!("No password provided")
}

/// Reads the content to encrypt or decrypt when neither `--text` nor
/// `--file` was given: piped stdin if present, an interactive prompt
/// otherwise.
pub fn read_content() -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    eprint!("Enter content: ");
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
