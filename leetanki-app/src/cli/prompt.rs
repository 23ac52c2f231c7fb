use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line-oriented console I/O. Generic so sessions can be driven by scripted
/// input in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

pub fn stdio() -> Prompter<StdinLock<'static>, Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `prompt` and returns the reply without its line ending.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Only an explicit `y` counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.trim().eq_ignore_ascii_case("y"))
    }

    /// Reads lines until one containing only `END`.
    pub fn read_block(&mut self, intro: &str) -> io::Result<String> {
        self.say(intro)?;
        let mut lines = Vec::new();
        loop {
            let line = self.ask("")?;
            if line.trim() == "END" {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub fn scripted(input: &str) -> Prompter<io::Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}
