//! Dialog invoker: shells out to the native macOS dialog utility.

use std::path::PathBuf;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;

/// Default dialog utility.
pub const DEFAULT_DIALOG_COMMAND: &str = "/usr/bin/osascript";

#[derive(Error, Debug)]
pub enum DialogError {
    /// The dialog command could not be launched at all.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The dialog command exited non-zero; the message is its captured output.
    #[error("{0}")]
    CommandFailed(String),
}

/// Invokes the OS dialog utility. One attempt per call, no retry.
#[derive(Debug, Clone)]
pub struct DialogInvoker {
    program: PathBuf,
}

impl Default for DialogInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_DIALOG_COMMAND)
    }
}

impl DialogInvoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Show a dialog with the given title and message.
    ///
    /// Waits until the child exits. Exit 0 is success; anything else
    /// surfaces the command's combined stdout/stderr as the failure detail.
    pub async fn show(&self, title: &str, message: &str) -> Result<(), DialogError> {
        let script = build_script(title, message);
        log::debug!("Running {} -e {:?}", self.program.display(), script);

        let output = Command::new(&self.program)
            .arg("-e")
            .arg(&script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| DialogError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        // Both pipes are concatenated so no diagnostic text is lost.
        // Non-UTF-8 output degrades to an empty detail.
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        let detail = String::from_utf8(combined)
            .unwrap_or_default()
            .trim()
            .to_string();
        log::warn!(
            "Dialog command exited with {:?}: {}",
            output.status.code(),
            detail
        );
        Err(DialogError::CommandFailed(detail))
    }
}

/// Build the AppleScript source for a dialog. Interpolated strings are
/// escaped into AppleScript string-literal syntax.
fn build_script(title: &str, message: &str) -> String {
    format!(
        "display dialog \"{}\" with title \"{}\"",
        escape(message),
        escape(title)
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
