//! Colored console output for release progress.
//!
//! Progress goes to stdout and errors to stderr. Quiet mode keeps only
//! errors; verbose mode adds detail lines. Colors are used only when the
//! stream is a terminal.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const RULE_WIDTH: usize = 60;
const BANNER_WIDTH: usize = 70;

/// Output manager for colored terminal output.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Output manager that only reports errors.
    pub fn quiet() -> Self {
        Self::new(false, true)
    }

    /// Plain line.
    pub fn println(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = stdout();
        writeln!(stdout, "{}", message)
    }

    /// Detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.indent(message)
    }

    /// Green `✓ message`
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Green, "✓", message)
    }

    /// Yellow `! message`
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Yellow, "!", message)
    }

    /// Red `✗ message` on stderr, shown even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
        write_marked(&mut stderr, Color::Red, "✗", message)
    }

    /// Cyan `→ message`
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Cyan, "→", message)
    }

    /// Step header framed by rules.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let rule = "=".repeat(RULE_WIDTH);
        let mut stdout = stdout();
        writeln!(stdout, "\n{rule}")?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{title}")?;
        stdout.reset()?;
        writeln!(stdout, "\n{rule}")
    }

    /// Run banner framed by wider rules.
    pub fn banner(&self, lines: &[String]) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        let body: Vec<String> = lines.iter().map(|line| format!("  {line}")).collect();
        self.println(&format!("\n{rule}\n{}\n{rule}", body.join("\n")))
    }

    /// Two-space indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.println(&format!("  {}", message))
    }

    fn marked(&self, color: Color, marker: &str, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_marked(&mut stdout(), color, marker, message)
    }
}

fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(io::stdout().is_terminal()))
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes `marker message`, with only the marker colored.
fn write_marked<W: WriteColor>(
    out: &mut W,
    color: Color,
    marker: &str,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{marker}")?;
    out.reset()?;
    writeln!(out, " {message}")
}
