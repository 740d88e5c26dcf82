use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

/// Line-oriented prompts over any reader/writer pair.
///
/// Each read consumes one whole line. End of input surfaces as
/// `io::ErrorKind::UnexpectedEof`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and returns the next line without its line ending.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn int(&mut self, prompt: &str) -> io::Result<i32> {
        let line = self.line(prompt)?;
        Ok(coerce_int(&line))
    }

    /// First non-blank character of the line, if any.
    pub fn choice(&mut self, prompt: &str) -> io::Result<Option<char>> {
        let line = self.line(prompt)?;
        Ok(line.trim_start().chars().next())
    }
}

/// Reads the leading integer of `text`: optional whitespace, optional sign,
/// then digits. Anything after the digits is ignored. No digits gives 0 and
/// out-of-range values saturate.
pub fn coerce_int(text: &str) -> i32 {
    let s = text.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digit_len = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digit_len == 0 {
        return 0;
    }

    match s[..sign_len + digit_len].parse::<i32>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i32::MAX,
            IntErrorKind::NegOverflow => i32::MIN,
            _ => 0,
        },
    }
}
