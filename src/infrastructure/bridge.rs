//! Process-per-call bridge to the pasteboard adapter
//!
//! Spawns the adapter binary once per operation, supplies arguments
//! and an optional stdin payload, and maps exit status plus captured
//! output to typed results. Each call is independent: no retries, no
//! timeouts, and no serialization of concurrent calls; ordering
//! against the same pasteboard is the host clipboard's concern.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Pasteboard, PasteboardError};
use crate::domain::{ImageFormat, PasteboardName};

/// Adapter binary name
#[cfg(not(windows))]
const ADAPTER_BIN: &str = "pasteport";
#[cfg(windows)]
const ADAPTER_BIN: &str = "pasteport.exe";

/// Environment variable overriding the adapter executable location
pub const ADAPTER_ENV: &str = "PASTEPORT_ADAPTER";

/// Resolve the adapter executable: environment override first, then a
/// sibling of the current executable, then the bare name on PATH.
fn locate_adapter() -> PathBuf {
    if let Ok(path) = env::var(ADAPTER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Ok(exe) = env::current_exe() {
        let sibling = exe.with_file_name(ADAPTER_BIN);
        if sibling.is_file() {
            return sibling;
        }
    }

    PathBuf::from(ADAPTER_BIN)
}

fn base_args(command: &str, pasteboard: &PasteboardName) -> Vec<String> {
    vec![
        command.to_string(),
        "--pasteboard".to_string(),
        pasteboard.to_string(),
    ]
}

/// Pasteboard adapter spawned once per call
pub struct ProcessBridge {
    adapter: PathBuf,
}

impl ProcessBridge {
    /// Create a bridge using the default adapter location
    pub fn new() -> Self {
        Self {
            adapter: locate_adapter(),
        }
    }

    /// Create a bridge using an explicit adapter executable
    pub fn with_adapter(adapter: impl Into<PathBuf>) -> Self {
        Self {
            adapter: adapter.into(),
        }
    }

    /// Path of the adapter executable this bridge spawns
    pub fn adapter_path(&self) -> &Path {
        &self.adapter
    }

    /// Spawn the adapter, feed it `payload` on stdin, and collect its
    /// stdout. A non-zero exit becomes an error carrying the adapter's
    /// stderr text verbatim.
    async fn run(
        &self,
        args: Vec<String>,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, PasteboardError> {
        tracing::debug!(adapter = %self.adapter.display(), ?args, "spawning pasteboard adapter");

        let mut child = Command::new(&self.adapter)
            .args(&args)
            .stdin(if payload.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PasteboardError::AdapterNotFound(self.adapter.display().to_string())
                } else {
                    PasteboardError::Spawn(e.to_string())
                }
            })?;

        if let Some(payload) = payload {
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(&payload)
                    .await
                    .map_err(|e| PasteboardError::Io(e.to_string()))?;
                // Dropping the handle closes the pipe; the adapter
                // sees EOF and starts processing.
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| PasteboardError::Io(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.trim();
            if message.is_empty() {
                let code = output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                return Err(PasteboardError::Adapter(format!(
                    "adapter exited with code {}",
                    code
                )));
            }
            return Err(PasteboardError::Adapter(message.to_string()));
        }

        Ok(output.stdout)
    }
}

impl Default for ProcessBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Pasteboard for ProcessBridge {
    async fn list_types(
        &self,
        pasteboard: &PasteboardName,
    ) -> Result<Vec<String>, PasteboardError> {
        let stdout = self.run(base_args("list-types", pasteboard), None).await?;
        serde_json::from_slice(&stdout).map_err(|e| PasteboardError::Decode(e.to_string()))
    }

    async fn read_text(&self, pasteboard: &PasteboardName) -> Result<String, PasteboardError> {
        let stdout = self.run(base_args("read-text", pasteboard), None).await?;
        String::from_utf8(stdout).map_err(|_| {
            PasteboardError::Decode("adapter returned text that is not valid UTF-8".to_string())
        })
    }

    async fn write_text(
        &self,
        pasteboard: &PasteboardName,
        text: &str,
    ) -> Result<(), PasteboardError> {
        self.run(
            base_args("write-text", pasteboard),
            Some(text.as_bytes().to_vec()),
        )
        .await?;
        Ok(())
    }

    async fn read_image(
        &self,
        pasteboard: &PasteboardName,
        format: ImageFormat,
    ) -> Result<String, PasteboardError> {
        let mut args = base_args("read-image", pasteboard);
        args.push("--format".to_string());
        args.push(format.to_string());
        let stdout = self.run(args, None).await?;
        // Base64 is handed back undecoded; interpretation is the
        // caller's responsibility.
        String::from_utf8(stdout).map_err(|_| {
            PasteboardError::Decode("adapter returned malformed base64 output".to_string())
        })
    }

    async fn write_image(
        &self,
        pasteboard: &PasteboardName,
        base64_data: &str,
        format: ImageFormat,
    ) -> Result<(), PasteboardError> {
        let mut args = base_args("write-image", pasteboard);
        args.push("--format".to_string());
        args.push(format.to_string());
        self.run(args, Some(base64_data.as_bytes().to_vec())).await?;
        Ok(())
    }

    async fn read_data(
        &self,
        pasteboard: &PasteboardName,
        type_id: &str,
    ) -> Result<String, PasteboardError> {
        let mut args = base_args("read", pasteboard);
        args.push("--type".to_string());
        args.push(type_id.to_string());
        let stdout = self.run(args, None).await?;
        String::from_utf8(stdout).map_err(|_| {
            PasteboardError::Decode("adapter returned a payload that is not valid UTF-8".to_string())
        })
    }

    async fn write_data(
        &self,
        pasteboard: &PasteboardName,
        type_id: &str,
        payload: &str,
        base64: bool,
    ) -> Result<(), PasteboardError> {
        let mut args = base_args("write", pasteboard);
        args.push("--type".to_string());
        args.push(type_id.to_string());
        if base64 {
            args.push("--base64".to_string());
        }
        self.run(args, Some(payload.as_bytes().to_vec())).await?;
        Ok(())
    }

    async fn clear(&self, pasteboard: &PasteboardName) -> Result<(), PasteboardError> {
        self.run(base_args("clear", pasteboard), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_args_carry_command_and_pasteboard() {
        let args = base_args("read-text", &PasteboardName::General);
        assert_eq!(args, vec!["read-text", "--pasteboard", "general"]);
    }

    #[test]
    fn base_args_pass_custom_names_through() {
        let name: PasteboardName = "com.example.scratch".parse().unwrap();
        let args = base_args("clear", &name);
        assert_eq!(args, vec!["clear", "--pasteboard", "com.example.scratch"]);
    }

    #[test]
    fn with_adapter_uses_explicit_path() {
        let bridge = ProcessBridge::with_adapter("/opt/tools/pasteport");
        assert_eq!(bridge.adapter_path(), Path::new("/opt/tools/pasteport"));
    }
}
