use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use indoseg_lib::{normalize, Engine, Reconstruction, SegmenterError, Segmentation};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] SegmenterError),

    #[error("failed to open input file '{path}': {source}")]
    InputFileOpen { path: PathBuf, source: io::Error },

    #[error("failed to create output file '{path}': {source}")]
    OutputFileCreate { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to serialise output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "indoseg", version, about = "Indonesian morphological segmenter")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::default(), global = true)]
    format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Root word list (default: packaged list).
    #[arg(long, value_name = "FILE", global = true)]
    dictionary: Option<PathBuf>,

    /// Affix rules in JSON (default: packaged rules).
    #[arg(long, value_name = "FILE", global = true)]
    rules: Option<PathBuf>,

    /// Engine configuration in JSON.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Log engine decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Segment one word, e.g. `mempertaruhkan` -> `meN~per~taruh~kan`.
    Segment { word: String },
    /// Rebuild a word from its segmentation.
    Reconstruct { segmented: String },
    /// Segment every line of a file.
    SegmentFile {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

fn main() {
    if let Err(err) = run() {
        if let CliError::Io(e) = &err {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return;
            }
        }

        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine = Engine::from_paths(
        cli.dictionary.as_deref(),
        cli.rules.as_deref(),
        cli.config.as_deref(),
    )?;
    let mut writer = get_writer(cli.output.as_deref())?;

    let rendered = match &cli.command {
        Command::Segment { word } => {
            let record = Segmentation {
                input: word.clone(),
                normalized: normalize(word),
                segmented: engine.segment(word),
            };
            render(&[record], cli.format, cli.pretty, false)?
        }
        Command::Reconstruct { segmented } => {
            let record = Reconstruction {
                segmented: segmented.clone(),
                word: engine.reconstruct(segmented),
            };
            render(&[record], cli.format, cli.pretty, false)?
        }
        Command::SegmentFile { path } => {
            let words = read_words(path)?;
            debug!(words = words.len(), path = %path.display(), "segmenting file");
            let records = engine.segment_all(&words);
            render(&records, cli.format, cli.pretty, true)?
        }
    };

    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn get_writer(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(p) => {
            let file = fs::File::create(p).map_err(|source| CliError::OutputFileCreate {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Non-blank lines of a word list, trimmed.
fn read_words(path: &Path) -> Result<Vec<String>, CliError> {
    let file = fs::File::open(path).map_err(|source| CliError::InputFileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

// ---------------------------------------------------------------------------
// Output formatting
// ---------------------------------------------------------------------------

/// A record printable as text, JSON or a CSV row.
trait Tabular: Serialize {
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<&str>;

    fn text(&self, batch: bool) -> String;
}

impl Tabular for Segmentation {
    const HEADER: &'static [&'static str] = &["input", "normalized", "segmented"];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.input.as_str(),
            self.normalized.as_str(),
            self.segmented.as_str(),
        ]
    }

    fn text(&self, batch: bool) -> String {
        if batch {
            format!("{}\t{}", self.input, self.segmented)
        } else {
            self.segmented.clone()
        }
    }
}

impl Tabular for Reconstruction {
    const HEADER: &'static [&'static str] = &["segmented", "word"];

    fn fields(&self) -> Vec<&str> {
        vec![self.segmented.as_str(), self.word.as_str()]
    }

    fn text(&self, _batch: bool) -> String {
        self.word.clone()
    }
}

/// Render records in the requested format, newline-terminated.
///
/// JSON output is a single object for one-word commands and an array for
/// batches.
fn render<T: Tabular>(
    records: &[T],
    format: OutputFormat,
    pretty: bool,
    batch: bool,
) -> Result<String, CliError> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for record in records {
                out.push_str(&record.text(batch));
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let json = match (batch, records.first()) {
                (false, Some(record)) => to_json(record, pretty)?,
                _ => to_json(&records, pretty)?,
            };
            out.push_str(&json);
            out.push('\n');
        }
        OutputFormat::Csv => {
            out.push_str(&T::HEADER.join(","));
            out.push('\n');
            for record in records {
                let row: Vec<Cow<'_, str>> = record.fields().into_iter().map(csv_field).collect();
                out.push_str(&row.join(","));
                out.push('\n');
            }
        }
    }
    Ok(out)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmentation(input: &str, segmented: &str) -> Segmentation {
        Segmentation {
            input: input.to_string(),
            normalized: input.to_lowercase(),
            segmented: segmented.to_string(),
        }
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["indoseg", "segment", "makanan", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Segment { ref word } if word == "makanan"));
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["indoseg", "segment-file", "words.txt"]).unwrap();
        assert!(matches!(cli.command, Command::SegmentFile { .. }));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_render_text() {
        let records = [segmentation("Makanan", "makan~an")];
        assert_eq!(
            render(&records, OutputFormat::Text, false, false).unwrap(),
            "makan~an\n"
        );
        assert_eq!(
            render(&records, OutputFormat::Text, false, true).unwrap(),
            "Makanan\tmakan~an\n"
        );
    }

    #[test]
    fn test_render_json() {
        let records = [segmentation("dibaca", "di~baca")];
        let single = render(&records, OutputFormat::Json, false, false).unwrap();
        assert_eq!(
            single,
            "{\"input\":\"dibaca\",\"normalized\":\"dibaca\",\"segmented\":\"di~baca\"}\n"
        );
        let batch = render(&records, OutputFormat::Json, false, true).unwrap();
        assert!(batch.starts_with('['));

        let record = [Reconstruction {
            segmented: "meN~pukul".to_string(),
            word: "memukul".to_string(),
        }];
        let json = render(&record, OutputFormat::Json, false, false).unwrap();
        assert_eq!(json, "{\"segmented\":\"meN~pukul\",\"word\":\"memukul\"}\n");
    }

    #[test]
    fn test_render_csv() {
        let records = [
            segmentation("rumah-rumah", "rumah~ulg"),
            segmentation("a,b", "a,b"),
        ];
        let csv = render(&records, OutputFormat::Csv, false, true).unwrap();
        assert_eq!(
            csv,
            "input,normalized,segmented\nrumah-rumah,rumah-rumah,rumah~ulg\n\"a,b\",\"a,b\",\"a,b\"\n"
        );
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_read_words_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "makanan\n\n  dibaca  \n").unwrap();
        assert_eq!(read_words(file.path()).unwrap(), vec!["makanan", "dibaca"]);

        let missing = read_words(Path::new("/nonexistent/words.txt"));
        assert!(matches!(missing, Err(CliError::InputFileOpen { .. })));
    }
}
