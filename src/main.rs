//! # Blockgraph CLI
//!
//! Command-line interface for rendering images as block-graphics text.
//!
//! ## Usage
//!
//! ```bash
//! # Render a PNG to stdout
//! blockgraph logo.png
//!
//! # Declare the content type explicitly
//! blockgraph image/png logo.png
//!
//! # Append to a file instead of printing
//! blockgraph --append --output banner.txt logo.png
//!
//! # Plain ASCII terminals get '?' for every block glyph
//! blockgraph --ascii logo.png
//! ```

use clap::Parser;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

use blockgraph::{
    BlockgraphError, Charset, GlyphSet,
    convert::convert,
    decode::ContentType,
};

/// Exit status for every runtime failure.
const EXIT_FAILURE: u8 = 8;

/// Blockgraph - render an image as text using block graphic symbols
#[derive(Parser, Debug)]
#[command(name = "blockgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Optional content type (default 'image/png') followed by the input file
    #[arg(value_name = "[CONTENT_TYPE] INPUT", required = true, num_args = 1..=2)]
    operands: Vec<String>,

    /// Output file (default is standard output)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Append text to the output file
    #[arg(short, long)]
    append: bool,

    /// Restrict output to ASCII; block glyphs become '?'
    #[arg(long)]
    ascii: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Split operands into the declared content type and the input path.
    fn content_type_and_input(&self) -> (Option<&str>, &Path) {
        match self.operands.as_slice() {
            [content_type, input] => (Some(content_type.as_str()), Path::new(input)),
            [input] => (None, Path::new(input)),
            _ => unreachable!("clap enforces 1..=2 operands"),
        }
    }

    fn charset(&self) -> Charset {
        if self.ascii { Charset::Ascii } else { Charset::Utf8 }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<(), BlockgraphError> {
    let (content_type, input) = cli.content_type_and_input();
    let content_type = match content_type {
        Some(mime) => ContentType::from_mime(mime)?,
        None => ContentType::default(),
    };

    let bytes = std::fs::read(input).map_err(|e| {
        BlockgraphError::Io(io::Error::new(
            e.kind(),
            format!("Could not open input file '{}': {}", input.display(), e),
        ))
    })?;
    if bytes.is_empty() {
        return Err(BlockgraphError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Input file '{}' must not be empty", input.display()),
        )));
    }

    let mut out = open_output(cli.output.as_deref(), cli.append)?;

    let glyphs = GlyphSet::UTF8.for_charset(cli.charset());
    let text = convert(&bytes, content_type, &glyphs)?;
    tracing::debug!(bytes = text.len(), "rendered text");

    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Open the destination before decoding, so a bad path fails fast.
fn open_output(path: Option<&Path>, append: bool) -> Result<Box<dyn Write>, BlockgraphError> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdout().lock()));
    };

    let file: io::Result<File> = if append {
        OpenOptions::new().create(true).append(true).open(path)
    } else {
        File::create(path)
    };
    let file = file.map_err(|e| {
        BlockgraphError::Io(io::Error::new(
            e.kind(),
            format!("Could not open output file '{}': {}", path.display(), e),
        ))
    })?;
    Ok(Box::new(io::BufWriter::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_only() {
        let cli = Cli::parse_from(["blockgraph", "logo.png"]);
        assert_eq!(cli.content_type_and_input(), (None, Path::new("logo.png")));
        assert!(cli.output.is_none());
        assert!(!cli.append);
        assert_eq!(cli.charset(), Charset::Utf8);
    }

    #[test]
    fn test_content_type_and_input() {
        let cli = Cli::parse_from(["blockgraph", "image/png", "logo.png"]);
        assert_eq!(
            cli.content_type_and_input(),
            (Some("image/png"), Path::new("logo.png"))
        );
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        assert!(Cli::try_parse_from(["blockgraph"]).is_err());
        assert!(Cli::try_parse_from(["blockgraph", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_output_flags() {
        let cli = Cli::parse_from(["blockgraph", "-a", "-o", "out.txt", "--ascii", "in.png"]);
        assert!(cli.append);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.charset(), Charset::Ascii);
    }

    #[test]
    fn test_empty_input_is_invalid_input() {
        let path = std::env::temp_dir().join(format!("blockgraph-empty-{}.png", std::process::id()));
        File::create(&path).unwrap();

        let arg = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["blockgraph", arg.as_str()]);
        let result = run(&cli);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(BlockgraphError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidInput),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_content_type() {
        let cli = Cli::parse_from(["blockgraph", "text/plain", "in.png"]);
        assert!(matches!(
            run(&cli),
            Err(BlockgraphError::UnsupportedContentType(_))
        ));
    }
}
