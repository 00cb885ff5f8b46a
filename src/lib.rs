//! Turns the raw bytes of a file (typically a short audio clip) into the body of a C byte
//! array, ready to be pasted into a generated header such as `audio.h`.
//!
//! Every byte becomes a `0xNN,` literal. Literals on a line are separated by a single space,
//! and a new line, indented by two spaces, starts after every `values_per_line` literals.
//!
//! # Example
//! ```
//! use convert_audio::{parse_literals, to_literals, ValuesPerLine};
//!
//! let per_line = ValuesPerLine::new(2).unwrap();
//! let text = to_literals(&[0x00, 0x1a, 0xff], per_line);
//! assert_eq!(text, "  0x00, 0x1a,\n  0xff,");
//!
//! assert_eq!(parse_literals(&text).unwrap(), vec![0x00, 0x1a, 0xff]);
//! ```
mod error;
mod parse;
/// Serialize/Deserialize impls are in here
mod serde;
mod util;

pub use error::{ConfigError, ConvertError, ParseError};
pub use parse::parse_literals;
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "audio.txt";

/// Number of literals per line when not configured otherwise. With a 44 byte WAV file
/// header this puts the header on exactly the first two lines.
pub const DEFAULT_VALUES_PER_LINE: usize = 22;

const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(DEFAULT_VALUES_PER_LINE) {
    Some(width) => width,
    None => panic!("DEFAULT_VALUES_PER_LINE must not be zero"),
};

/// How many literals are placed on one output line before wrapping. Never zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ValuesPerLine(NonZeroUsize);

impl ValuesPerLine {
    /// Returns `None` for a count of zero.
    ///
    /// ```
    /// use convert_audio::ValuesPerLine;
    ///
    /// assert!(ValuesPerLine::new(0).is_none());
    /// assert_eq!(ValuesPerLine::new(16).unwrap().get(), 16);
    /// ```
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ValuesPerLine {
    fn default() -> Self {
        Self(DEFAULT_WIDTH)
    }
}

impl fmt::Display for ValuesPerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where to write the output, and how wide its lines are.
///
/// The defaults are `audio.txt` and 22 values per line. Fields missing from a JSON config
/// fall back to these individually.
///
/// ```
/// use convert_audio::{Options, ValuesPerLine};
///
/// let options = Options::default()
///     .with_output("wav_header.txt")
///     .with_values_per_line(ValuesPerLine::new(12).unwrap());
/// assert_eq!(options.values_per_line.get(), 12);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Options {
    pub output: PathBuf,
    pub values_per_line: ValuesPerLine,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            output: PathBuf::from(DEFAULT_OUTPUT),
            values_per_line: ValuesPerLine::default(),
        }
    }
}

impl Options {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_values_per_line(mut self, values_per_line: ValuesPerLine) -> Self {
        self.values_per_line = values_per_line;
        self
    }

    /// Load options from a JSON file such as `{ "output": "audio.txt", "values_per_line": 22 }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_owned(),
            source,
        })
    }
}

/// What a successful [`convert`] did.
///
/// [`convert`]: ./fn.convert.html
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Summary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub byte_count: usize,
    pub line_count: usize,
}

/// Render `bytes` as literal text into `target`.
///
/// The break before a literal is decided from its byte index alone: index 0 gets the
/// indent, every other multiple of `values_per_line` gets a newline and the indent, and
/// everything else a single space.
pub fn write_literals(
    mut target: impl fmt::Write,
    bytes: &[u8],
    values_per_line: ValuesPerLine,
) -> fmt::Result {
    let per_line = values_per_line.get();

    for (index, &byte) in bytes.iter().enumerate() {
        if index == 0 {
            target.write_str(util::INDENT)?;
        } else if index % per_line == 0 {
            target.write_char('\n')?;
            target.write_str(util::INDENT)?;
        } else {
            target.write_char(' ')?;
        }

        util::write_literal(&mut target, byte)?;
    }

    Ok(())
}

/// Render `bytes` as literal text. Empty input gives an empty string.
///
/// ```
/// use convert_audio::{to_literals, ValuesPerLine};
///
/// assert_eq!(to_literals(&[], ValuesPerLine::default()), "");
/// assert_eq!(to_literals(&[0x52, 0x49], ValuesPerLine::default()), "  0x52, 0x49,");
/// ```
pub fn to_literals(bytes: &[u8], values_per_line: ValuesPerLine) -> String {
    let mut s = String::with_capacity(util::rendered_len(bytes.len(), values_per_line.get()));

    // writing into a String can't fail
    let _ = write_literals(&mut s, bytes, values_per_line);

    s
}

/// Read `input`, render it, and write the text to `options.output` in one go.
///
/// The output file is created or truncated. Nothing is cleaned up if the write fails
/// part way.
pub fn convert(input: impl AsRef<Path>, options: &Options) -> Result<Summary, ConvertError> {
    let input = input.as_ref();

    let bytes = fs::read(input).map_err(ConvertError::read(input))?;
    debug!(input = %input.display(), bytes = bytes.len(), "read input");

    let text = to_literals(&bytes, options.values_per_line);
    let line_count = util::row_count(bytes.len(), options.values_per_line.get());
    debug!(
        values_per_line = options.values_per_line.get(),
        lines = line_count,
        chars = text.len(),
        "rendered literals"
    );

    fs::write(&options.output, &text).map_err(ConvertError::write(&options.output))?;
    debug!(output = %options.output.display(), "wrote output");

    Ok(Summary {
        input: input.to_owned(),
        output: options.output.clone(),
        byte_count: bytes.len(),
        line_count,
    })
}

/// [`convert`] with `audio.txt` and 22 values per line.
///
/// [`convert`]: ./fn.convert.html
pub fn convert_with_defaults(input: impl AsRef<Path>) -> Result<Summary, ConvertError> {
    convert(input, &Options::default())
}
