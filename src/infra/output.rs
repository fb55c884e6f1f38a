use crate::core::estimator::TokenBudget;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: String,
}

impl FileWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing prompt to file: {}", self.path);
        fs::write(Path::new(&self.path), content)?;
        info!("Prompt written to {}", self.path);
        Ok(())
    }
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing prompt to stdout");
        io::stdout().write_all(content.as_bytes())?;
        io::stdout().write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(feature = "clipboard-support")]
pub struct ClipboardWriter;

#[cfg(feature = "clipboard-support")]
impl OutputWriter for ClipboardWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        use clipboard::{ClipboardContext, ClipboardProvider};

        debug!("Writing prompt to clipboard");

        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| anyhow::anyhow!("failed to access clipboard: {}", e))?;

        ctx.set_contents(content.to_owned())
            .map_err(|e| anyhow::anyhow!("failed to copy to clipboard: {}", e))?;

        info!("Prompt copied to clipboard ({} bytes)", content.len());
        Ok(())
    }
}

/// Writes the composed prompt to its destination. On clipboard failure
/// the prompt falls back to stdout.
pub fn write_output(
    content: &str,
    output_path: Option<String>,
    clipboard: bool,
) -> anyhow::Result<()> {
    if clipboard {
        match write_clipboard(content) {
            Ok(()) => {
                let mut stdout = io::stdout();
                stdout.execute(SetForegroundColor(Color::Green))?;
                writeln!(stdout, "Prompt copied to clipboard!")?;
                stdout.execute(ResetColor)?;
                return Ok(());
            }
            Err(e) => {
                warn!("{}; printing to stdout instead", e);
            }
        }
    }

    match output_path {
        Some(path) => FileWriter::new(path).write(content),
        None => ConsoleWriter.write(content),
    }
}

#[cfg(feature = "clipboard-support")]
fn write_clipboard(content: &str) -> anyhow::Result<()> {
    ClipboardWriter.write(content)
}

#[cfg(not(feature = "clipboard-support"))]
fn write_clipboard(_content: &str) -> anyhow::Result<()> {
    Err(anyhow::anyhow!(
        "clipboard support is not compiled in (enable the clipboard-support feature)"
    ))
}

/// Token summary goes to stderr so piped stdout stays clean.
pub fn print_summary(estimate: usize, budget: TokenBudget) -> anyhow::Result<()> {
    let mut stderr = io::stderr();
    let color = if budget.is_over(estimate) {
        Color::Red
    } else {
        Color::Green
    };

    stderr.execute(SetForegroundColor(color))?;
    writeln!(stderr, "~{} tokens (limit {})", estimate, budget.limit)?;
    stderr.execute(ResetColor)?;

    if budget.is_over(estimate) {
        warn!(
            "Estimated {} tokens exceeds the {} token budget",
            estimate, budget.limit
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_writer() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();
        let writer = FileWriter::new(path.clone());
        let content = "Test output";

        writer.write(content).unwrap();

        let read_content = fs::read_to_string(path).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        write_output("prompt body", Some(path.clone()), false).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "prompt body");
    }

    #[test]
    fn test_file_writer_rejects_bad_path() {
        let writer = FileWriter::new("/no/such/dir/out.txt".to_string());
        assert!(writer.write("x").is_err());
    }
}
