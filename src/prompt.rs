// minipix/src/prompt.rs
use crate::core::{MinipixError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Turns one raw answer into a typed value.
///
/// Empty input yields the default when there is one; anything else is
/// trimmed and parsed.
pub fn parse_answer<T>(raw: &str, default: Option<&T>) -> Result<T>
where
    T: FromStr + Clone,
{
    let answer = raw.trim();

    if answer.is_empty() {
        if let Some(default) = default {
            return Ok(default.clone());
        }
    }

    answer
        .parse()
        .map_err(|_| MinipixError::InvalidInput(format!("could not parse '{}'", answer)))
}

/// `y`/`Y` means yes, everything else means no.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// `e`/`E` ends the session.
pub fn is_exit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("e")
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks until the answer parses. Closed input is an error.
    pub fn ask<T>(&mut self, message: &str, default: Option<T>) -> Result<T>
    where
        T: FromStr + Clone,
    {
        loop {
            let raw = self.read_answer(message)?;
            match parse_answer(&raw, default.as_ref()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("{}", e);
                    self.error("Invalid input. Please try again.")?;
                }
            }
        }
    }

    /// Asks until the answer names an existing directory.
    pub fn ask_directory(&mut self, message: &str) -> Result<PathBuf> {
        loop {
            let answer: String = self.ask(message, None)?;
            let path = PathBuf::from(answer);
            if path.is_dir() {
                return Ok(path);
            }
            self.error("Invalid directory. Please try again.")?;
        }
    }

    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer: String = self.ask(message, Some("n".to_string()))?;
        Ok(is_yes(&answer))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_answer(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message.cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_answer_uses_default() {
        assert_eq!(parse_answer::<i64>("", Some(&90)).unwrap(), 90);
        assert_eq!(parse_answer::<i64>("  \n", Some(&90)).unwrap(), 90);
    }

    #[test]
    fn answer_is_trimmed_and_parsed() {
        assert_eq!(parse_answer::<i64>(" 120 \n", Some(&90)).unwrap(), 120);
        assert_eq!(parse_answer::<String>("  /tmp  ", None).unwrap(), "/tmp");
    }

    #[test]
    fn non_integer_is_rejected() {
        assert!(matches!(
            parse_answer::<i64>("ninety", Some(&90)),
            Err(MinipixError::InvalidInput(_))
        ));
        assert_eq!(parse_answer::<i64>("-5", Some(&90)).unwrap(), -5);
        assert!(parse_answer::<i64>("", None).is_err());
    }

    #[test]
    fn yes_and_exit_ignore_case() {
        assert!(is_yes("Y"));
        assert!(!is_yes("yes"));
        assert!(!is_yes(""));
        assert!(is_exit("E\n"));
        assert!(!is_exit("n"));
    }

    #[test]
    fn ask_reprompts_until_valid() {
        let input = Cursor::new("abc\n12.5\n42\n");
        let mut out = Vec::new();
        let mut prompter = Prompter::new(input, &mut out);

        let value: i64 = prompter.ask("Size: ", Some(90)).unwrap();
        assert_eq!(value, 42);

        let transcript = String::from_utf8_lossy(&out);
        assert_eq!(transcript.matches("Invalid input. Please try again.").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask::<i64>("Size: ", Some(90)).unwrap_err();
        assert!(matches!(err, MinipixError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn directory_prompt_skips_missing_paths() {
        let temp = tempfile::tempdir().unwrap();
        let script = format!("/definitely/not/here\n\n{}\n", temp.path().display());
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(script), &mut out);

        let dir = prompter.ask_directory("Dir: ").unwrap();

        assert_eq!(dir, temp.path());
        let transcript = String::from_utf8_lossy(&out);
        assert_eq!(transcript.matches("Invalid directory. Please try again.").count(), 2);
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut prompter = Prompter::new(Cursor::new("\ny\n"), Vec::new());
        assert!(!prompter.confirm("Move? ").unwrap());
        assert!(prompter.confirm("Move? ").unwrap());
    }
}
