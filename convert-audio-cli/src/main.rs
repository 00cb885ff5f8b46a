use convert_audio::ConfigError;
use convert_audio::Options;
use convert_audio::ValuesPerLine;
use std::env;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// What the command line asked for, before any file is touched.
#[derive(Debug, Default, PartialEq)]
struct Args {
    input: Option<String>,
    output: Option<String>,
    per_line: Option<ValuesPerLine>,
    config_path: Option<String>,
    help: bool,
}

impl Args {
    /// Options from `--config` (or the defaults), with `--output` and `--per-line` on top.
    fn options(&self) -> Result<Options, ConfigError> {
        let mut options = match &self.config_path {
            Some(path) => Options::from_json_file(path)?,
            None => Options::default(),
        };
        if let Some(output) = &self.output {
            options = options.with_output(output);
        }
        if let Some(per_line) = self.per_line {
            options = options.with_values_per_line(per_line);
        }

        Ok(options)
    }
}

enum State {
    Normal,
    Output,
    PerLine,
    Config,
}

fn usage(message: impl Into<String>) {
    let message = message.into();
    if !message.is_empty() {
        eprintln!("{}", message);
    }
    eprintln!(
        "{}",
        r#"convert_audio

Converts a file into a block of 0xNN, byte literals for a C header.

Usage:
    convert_audio [--output audio.txt] [--per-line 22] [--config cfg.json] input.wav

Options:
    -o, --output     where to write the literals (default: audio.txt)
    -n, --per-line   values per line (default: 22)
    -c, --config     JSON file with "output" and/or "values_per_line"
"#
    );

    std::process::exit(1);
}

fn report(message: &str, err: &dyn Error) -> ! {
    eprintln!("{}\n    {}", message, err);
    if let Some(source) = err.source() {
        eprintln!("    {}", source);
    }
    std::process::exit(1)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();

    let mut state = State::Normal;
    for arg in args {
        match state {
            State::Normal => match arg.as_str() {
                "-o" | "--output" => state = State::Output,
                "-n" | "--per-line" => state = State::PerLine,
                "-c" | "--config" => state = State::Config,
                "-h" | "--help" => parsed.help = true,
                x if x.starts_with('-') && x.len() > 1 => {
                    return Err(format!("Unexpected argument {:?}", x))
                }
                // the last positional argument is the input
                _ => parsed.input = Some(arg),
            },
            State::Output => {
                parsed.output = Some(arg);
                state = State::Normal
            }
            State::PerLine => {
                let count = arg
                    .parse::<usize>()
                    .ok()
                    .and_then(ValuesPerLine::new)
                    .ok_or_else(|| {
                        format!("--per-line must be a positive number, got {:?}", arg)
                    })?;
                parsed.per_line = Some(count);
                state = State::Normal
            }
            State::Config => {
                parsed.config_path = Some(arg);
                state = State::Normal
            }
        }
    }

    if !matches!(state, State::Normal) {
        return Err("A value is required after the last flag".to_owned());
    }

    Ok(parsed)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(env::args().skip(1)).unwrap_or_else(|message| {
        usage(message);
        unreachable!()
    });
    if args.help {
        usage("");
    }

    let input = args.input.clone().unwrap_or_else(|| {
        usage("An input file is required");
        unreachable!()
    });

    let options = args
        .options()
        .unwrap_or_else(|err| report("Failed to load the config file.", &err));

    match convert_audio::convert(&input, &options) {
        Ok(summary) => {
            info!(
                bytes = summary.byte_count,
                lines = summary.line_count,
                "converted"
            );
            eprintln!(
                "Wrote {} bytes as {} lines to {}",
                summary.byte_count,
                summary.line_count,
                summary.output.display()
            );
        }
        Err(err) => report("Failed to convert the file.", &err),
    }
}
