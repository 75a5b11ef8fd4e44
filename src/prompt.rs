use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented console prompting over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Print `message` on its own line and return the trimmed reply.
    ///
    /// Fails once input is exhausted so callers that loop on invalid input
    /// can't spin forever.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        self.say(message)?;
        self.read_reply()
    }

    /// Read one trimmed line of input.
    pub fn read_reply(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = self
            .input
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed");
        }
        Ok(input.trim().to_string())
    }

    /// Prompt until the reply parses as an integer within `min..=max`.
    pub fn prompt_bounded(&mut self, message: &str, min: i32, max: i32) -> Result<i32> {
        loop {
            let input = self.prompt(message)?;
            match input.parse::<i32>() {
                Ok(v) if (min..=max).contains(&v) => return Ok(v),
                _ => self.say(&format!(
                    "Please enter a valid number between {} and {}.",
                    min, max
                ))?,
            }
        }
    }

    /// Writer that prompts and replies are echoed to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
