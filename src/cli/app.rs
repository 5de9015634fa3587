//! Adapter runner for one-shot pasteboard operations

use std::process::ExitCode;

use thiserror::Error;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};
use tokio::task;

use crate::application::operations;
use crate::application::OperationError;
use crate::infrastructure::create_store;

use super::args::{Cli, Commands};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Adapter runner errors
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("failed to read standard input: {0}")]
    Stdin(String),

    #[error("failed to encode type list: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("adapter task failed: {0}")]
    Task(String),
}

/// Run one adapter invocation, writing the operation's output to
/// stdout and any failure message to stderr.
pub async fn run(cli: Cli) -> ExitCode {
    match execute(cli.command).await {
        Ok(Some(bytes)) => {
            let mut stdout = io::stdout();
            if stdout.write_all(&bytes).await.is_err() || stdout.flush().await.is_err() {
                eprintln!("failed to write standard output");
                return ExitCode::from(EXIT_FAILURE);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(None) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Execute one command; `Some` carries the bytes destined for stdout.
async fn execute(command: Commands) -> Result<Option<Vec<u8>>, AdapterError> {
    // Drain stdin fully before the clipboard is first touched, so an
    // invalid payload never disturbs the pasteboard.
    let stdin = if command.reads_stdin() {
        Some(read_stdin().await?)
    } else {
        None
    };

    // Clipboard access is blocking; run the operation off the runtime.
    task::spawn_blocking(move || dispatch(command, stdin))
        .await
        .map_err(|e| AdapterError::Task(e.to_string()))?
}

async fn read_stdin() -> Result<Vec<u8>, AdapterError> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .await
        .map_err(|e| AdapterError::Stdin(e.to_string()))?;
    Ok(buf)
}

fn dispatch(command: Commands, stdin: Option<Vec<u8>>) -> Result<Option<Vec<u8>>, AdapterError> {
    let stdin = stdin.unwrap_or_default();
    match command {
        Commands::ListTypes { target } => {
            let mut store = create_store(&target.pasteboard);
            let types = operations::list_types(store.as_mut())?;
            let mut encoded = serde_json::to_vec(&types)?;
            encoded.push(b'\n');
            Ok(Some(encoded))
        }
        Commands::ReadText { target } => {
            let mut store = create_store(&target.pasteboard);
            let text = operations::read_text(store.as_mut())?;
            Ok(Some(text.into_bytes()))
        }
        Commands::WriteText { target } => {
            let mut store = create_store(&target.pasteboard);
            operations::write_text(store.as_mut(), &stdin)?;
            Ok(None)
        }
        Commands::ReadImage { target, format } => {
            let mut store = create_store(&target.pasteboard);
            let base64 = operations::read_image(store.as_mut(), format.into())?;
            Ok(Some(base64.into_bytes()))
        }
        Commands::WriteImage { target, format } => {
            let mut store = create_store(&target.pasteboard);
            operations::write_image(store.as_mut(), &stdin, format.into())?;
            Ok(None)
        }
        Commands::Read { r#type, target } => {
            let mut store = create_store(&target.pasteboard);
            let payload = operations::read_data(store.as_mut(), &r#type)?;
            Ok(Some(payload.into_wire_bytes()))
        }
        Commands::Write {
            r#type,
            target,
            base64,
        } => {
            let mut store = create_store(&target.pasteboard);
            operations::write_data(store.as_mut(), &r#type, &stdin, base64)?;
            Ok(None)
        }
        Commands::Clear { target } => {
            let mut store = create_store(&target.pasteboard);
            operations::clear(store.as_mut())?;
            Ok(None)
        }
    }
}
