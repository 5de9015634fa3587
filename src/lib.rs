//! Pasteport - typed host-clipboard access over a process-per-call adapter
//!
//! This crate exposes the operating system's shared clipboard (the
//! "pasteboard") through typed operations: enumerate representations,
//! read/write plain text, read/write images, and read/write arbitrary
//! typed payloads. The privileged clipboard surface lives in a small
//! adapter binary that performs exactly one operation per process; the
//! library spawns it per call and maps exit status and captured output
//! to typed results.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: pasteboard names, type identifiers, image transcoding,
//!   and payload shapes
//! - **Application**: per-command operation semantics and port
//!   interfaces (traits)
//! - **Infrastructure**: store backends (arboard, in-memory) and the
//!   subprocess bridge
//! - **CLI**: the adapter binary's argument grammar and runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
