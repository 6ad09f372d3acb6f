use std::{
    io::Read,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tagmeld_core::{
    decode_probe_json, parse_atom_dump, parse_native, parse_vorbis_dump_with, AppConfig,
    CanonicalTagSet, NativeFormat, TagMeldError, TagProfile, ToolCapture,
};
use tracing_subscriber::EnvFilter;

const STDIN_PATH: &str = "-";
const ATOM_TOOL: &str = "AtomicParsley";
const VORBIS_TOOL: &str = "metaflac";

fn main() -> tagmeld_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Atoms {
            input,
            verify_standard,
        } => run_atoms(&config, input.as_deref(), verify_standard),
        Commands::Vorbis {
            input,
            pictures,
            verify_standard,
        } => run_vorbis(&config, input.as_deref(), pictures.as_deref(), verify_standard),
        Commands::Probe { input } => run_probe(&config, input.as_deref()),
        Commands::Unsupported { format, path } => run_unsupported(format, &path),
    }
}

fn run_atoms(
    config: &AppConfig,
    input: Option<&Path>,
    verify_standard: bool,
) -> tagmeld_core::Result<()> {
    tracing::info!(?input, "parsing atom dump");

    let capture = capture_from(ATOM_TOOL, input)?;
    let tags = parse_atom_dump(&capture)?;
    if verify_standard {
        report_mismatches(&tags);
    }
    emit(config, &tags)
}

fn run_vorbis(
    config: &AppConfig,
    input: Option<&Path>,
    pictures: Option<&Path>,
    verify_standard: bool,
) -> tagmeld_core::Result<()> {
    tracing::info!(?input, ?pictures, "parsing vorbis comment export");

    let capture = capture_from(VORBIS_TOOL, input)?;
    let listing = pictures.map(capture_listing);
    let tags = parse_vorbis_dump_with(&config.vorbis, &capture, listing.as_ref())?;
    if verify_standard {
        report_mismatches(&tags);
    }
    emit(config, &tags)
}

fn run_probe(config: &AppConfig, input: Option<&Path>) -> tagmeld_core::Result<()> {
    tracing::info!(?input, "decoding probe report");

    let bytes = read_input(input)?;
    let report = decode_probe_json(&bytes)?;
    let summary = report.audio_summary()?;
    emit(config, &json!({ "audio": summary, "report": report }))
}

fn run_unsupported(format: FormatArg, path: &Path) -> tagmeld_core::Result<()> {
    tracing::info!(?format, ?path, "invoking native reader");
    parse_native(format.into(), path).map(|_| ())
}

fn capture_from(tool: &str, input: Option<&Path>) -> tagmeld_core::Result<ToolCapture> {
    let stdout = read_input(input)?;
    let path = input.unwrap_or(Path::new(STDIN_PATH));
    Ok(ToolCapture::success(tool, path, stdout))
}

// An unreadable listing is treated like a failed listing run.
fn capture_listing(path: &Path) -> ToolCapture {
    match std::fs::read(path) {
        Ok(stdout) => ToolCapture::success(VORBIS_TOOL, path, stdout),
        Err(err) => {
            tracing::warn!(?path, %err, "cannot read picture listing");
            ToolCapture::failure(VORBIS_TOOL, path, None, err.to_string())
        }
    }
}

fn read_input(input: Option<&Path>) -> tagmeld_core::Result<Vec<u8>> {
    match input {
        Some(path) if path != Path::new(STDIN_PATH) => Ok(std::fs::read(path)?),
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn load_config(path: Option<&Path>) -> tagmeld_core::Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    tracing::debug!(?path, "loading configuration");
    let text = std::fs::read_to_string(path)?;
    AppConfig::from_json_str(&text)
}

fn report_mismatches(tags: &CanonicalTagSet) {
    let mismatches = TagProfile::standard().diff(tags);
    if mismatches.is_empty() {
        tracing::info!("tags match the standard profile");
    }
    for mismatch in mismatches {
        tracing::warn!(
            field = %mismatch.field,
            expected = %mismatch.expected,
            found = ?mismatch.found,
            "tag differs from the standard profile"
        );
    }
}

fn emit<T: serde::Serialize + ?Sized>(config: &AppConfig, value: &T) -> tagmeld_core::Result<()> {
    let text = if config.output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|err| TagMeldError::msg(format!("cannot render output: {err}")))?;

    println!("{text}");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalise audio tag dumps into canonical metadata", long_about = None)]
struct Cli {
    /// Optional JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse captured `AtomicParsley -t` output.
    Atoms {
        /// File holding the dump; stdin when absent or `-`.
        input: Option<PathBuf>,
        /// Compare the result against the standard test profile.
        #[arg(long)]
        verify_standard: bool,
    },
    /// Parse captured `metaflac --export-tags-to=-` output.
    Vorbis {
        /// File holding the export; stdin when absent or `-`.
        input: Option<PathBuf>,
        /// Captured `metaflac --list --block-type=PICTURE` output.
        #[arg(short, long)]
        pictures: Option<PathBuf>,
        /// Compare the result against the standard test profile.
        #[arg(long)]
        verify_standard: bool,
    },
    /// Decode an ffprobe JSON report and summarise its audio stream.
    Probe {
        /// File holding the report; stdin when absent or `-`.
        input: Option<PathBuf>,
    },
    /// Invoke one of the native readers that are not implemented.
    Unsupported {
        format: FormatArg,
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Id3v2,
    Vorbis,
    Opus,
}

impl From<FormatArg> for NativeFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Id3v2 => NativeFormat::Id3v2,
            FormatArg::Vorbis => NativeFormat::OggVorbis,
            FormatArg::Opus => NativeFormat::Opus,
        }
    }
}
