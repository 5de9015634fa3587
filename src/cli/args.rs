//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{ImageFormat, PasteboardName};

/// Pasteport - one operation against the host pasteboard per run
#[derive(Parser, Debug)]
#[command(name = "pasteport")]
#[command(version)]
#[command(about = "Perform one operation against the host pasteboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Pasteboard selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct PasteboardArg {
    /// Target pasteboard (general, find, font, ruler, drag, or a custom name)
    #[arg(long, value_name = "NAME", default_value = "general")]
    pub pasteboard: PasteboardName,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the type identifiers currently on the pasteboard
    ListTypes {
        #[command(flatten)]
        target: PasteboardArg,
    },
    /// Print the pasteboard's plain-text contents
    ReadText {
        #[command(flatten)]
        target: PasteboardArg,
    },
    /// Replace the pasteboard's contents with UTF-8 text from stdin
    WriteText {
        #[command(flatten)]
        target: PasteboardArg,
    },
    /// Print the pasteboard's image as base64 in the requested format
    ReadImage {
        #[command(flatten)]
        target: PasteboardArg,

        /// Output image container
        #[arg(long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,
    },
    /// Replace the pasteboard's contents with a base64 image from stdin
    WriteImage {
        #[command(flatten)]
        target: PasteboardArg,

        /// Logical image container being written
        #[arg(long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,
    },
    /// Print the payload stored under a type identifier
    Read {
        /// Type identifier to read
        #[arg(long, value_name = "UTI")]
        r#type: String,

        #[command(flatten)]
        target: PasteboardArg,
    },
    /// Replace the pasteboard's contents with a payload from stdin
    Write {
        /// Type identifier to write under
        #[arg(long, value_name = "UTI")]
        r#type: String,

        #[command(flatten)]
        target: PasteboardArg,

        /// Treat stdin as base64-encoded binary data
        #[arg(long)]
        base64: bool,
    },
    /// Remove all representations from the pasteboard
    Clear {
        #[command(flatten)]
        target: PasteboardArg,
    },
}

impl Commands {
    /// Whether this command consumes a stdin payload
    pub fn reads_stdin(&self) -> bool {
        matches!(
            self,
            Commands::WriteText { .. } | Commands::WriteImage { .. } | Commands::Write { .. }
        )
    }
}

/// Image format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    Tiff,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Tiff => ImageFormat::Tiff,
        }
    }
}

impl From<ImageFormat> for FormatArg {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => FormatArg::Png,
            ImageFormat::Tiff => FormatArg::Tiff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_list_types_with_default_pasteboard() {
        let cli = Cli::parse_from(["pasteport", "list-types"]);
        if let Commands::ListTypes { target } = cli.command {
            assert_eq!(target.pasteboard, PasteboardName::General);
        } else {
            panic!("Expected ListTypes command");
        }
    }

    #[test]
    fn cli_parses_named_pasteboard() {
        let cli = Cli::parse_from(["pasteport", "read-text", "--pasteboard", "find"]);
        if let Commands::ReadText { target } = cli.command {
            assert_eq!(target.pasteboard, PasteboardName::Find);
        } else {
            panic!("Expected ReadText command");
        }
    }

    #[test]
    fn cli_parses_custom_pasteboard() {
        let cli = Cli::parse_from(["pasteport", "clear", "--pasteboard", "com.test.board"]);
        if let Commands::Clear { target } = cli.command {
            assert_eq!(
                target.pasteboard,
                PasteboardName::Custom("com.test.board".to_string())
            );
        } else {
            panic!("Expected Clear command");
        }
    }

    #[test]
    fn cli_parses_read_image_format_default() {
        let cli = Cli::parse_from(["pasteport", "read-image"]);
        if let Commands::ReadImage { format, .. } = cli.command {
            assert_eq!(format, FormatArg::Png);
        } else {
            panic!("Expected ReadImage command");
        }
    }

    #[test]
    fn cli_parses_write_image_tiff() {
        let cli = Cli::parse_from(["pasteport", "write-image", "--format", "tiff"]);
        if let Commands::WriteImage { format, .. } = cli.command {
            assert_eq!(format, FormatArg::Tiff);
        } else {
            panic!("Expected WriteImage command");
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pasteport", "read-image", "--format", "jpeg"]).is_err());
    }

    #[test]
    fn cli_parses_typed_read() {
        let cli = Cli::parse_from(["pasteport", "read", "--type", "com.test.custom"]);
        if let Commands::Read { r#type, .. } = cli.command {
            assert_eq!(r#type, "com.test.custom");
        } else {
            panic!("Expected Read command");
        }
    }

    #[test]
    fn cli_requires_type_for_typed_read() {
        assert!(Cli::try_parse_from(["pasteport", "read"]).is_err());
    }

    #[test]
    fn cli_parses_typed_write_with_base64() {
        let cli = Cli::parse_from(["pasteport", "write", "--type", "com.test.custom", "--base64"]);
        if let Commands::Write { r#type, base64, .. } = cli.command {
            assert_eq!(r#type, "com.test.custom");
            assert!(base64);
        } else {
            panic!("Expected Write command");
        }
    }

    #[test]
    fn cli_rejects_unknown_argument() {
        assert!(Cli::try_parse_from(["pasteport", "clear", "--bogus"]).is_err());
    }

    #[test]
    fn stdin_consumption_matches_write_commands() {
        let write = Cli::parse_from(["pasteport", "write-text"]);
        assert!(write.command.reads_stdin());
        let read = Cli::parse_from(["pasteport", "read-text"]);
        assert!(!read.command.reads_stdin());
    }

    #[test]
    fn format_arg_converts_to_image_format() {
        assert_eq!(ImageFormat::from(FormatArg::Png), ImageFormat::Png);
        assert_eq!(ImageFormat::from(FormatArg::Tiff), ImageFormat::Tiff);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
