// Stdin → JSON adapter.
//
// Runs one extraction per call and always yields an `Outcome`; every failure
// is reported as data. The `extract` binary prints the outcome as a single
// JSON line and exits 0 regardless of what happened.

use std::any::Any;
use std::fmt;
use std::io::{self, Read, Write};
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::{ContentExtractor, Extractor, Options};

/// Machine-oriented failure codes carried in the `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The extraction capability could not be initialized.
    CapabilityUnavailable,
    /// Standard input could not be read.
    ReadFailed,
    /// The input was zero-length.
    EmptyHtml,
    /// Extraction ran but produced no text.
    NoText,
    /// Extraction returned an error or panicked.
    ExtractFailed,
}

impl FailureKind {
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::CapabilityUnavailable => "extraction_capability_unavailable",
            FailureKind::ReadFailed => "read_failed",
            FailureKind::EmptyHtml => "empty_html",
            FailureKind::NoText => "no_text",
            FailureKind::ExtractFailed => "extract_failed",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The result of one adapter run.
///
/// Serializes as `{"ok":true,"text":...}` or `{"ok":false,"error":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Wire", into = "Wire")]
pub enum Outcome {
    Success { text: String },
    Failure { error: String },
}

impl Outcome {
    /// A failure carrying only its code, e.g. `empty_html`.
    pub fn failure(kind: FailureKind) -> Self {
        Outcome::Failure {
            error: kind.code().to_string(),
        }
    }

    /// A failure with details appended: `extract_failed: <details>`.
    pub fn failure_with(kind: FailureKind, details: impl fmt::Display) -> Self {
        Outcome::Failure {
            error: format!("{kind}: {details}"),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Write the outcome as one newline-terminated JSON line.
    pub fn emit<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")
    }
}

/// Wire shape shared by serialization and deserialization.
#[derive(Serialize, Deserialize)]
struct Wire {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<Outcome> for Wire {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success { text } => Wire {
                ok: true,
                text: Some(text),
                error: None,
            },
            Outcome::Failure { error } => Wire {
                ok: false,
                text: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<Wire> for Outcome {
    type Error = String;

    fn try_from(wire: Wire) -> Result<Self, Self::Error> {
        match (wire.ok, wire.text, wire.error) {
            (true, Some(text), None) => Ok(Outcome::Success { text }),
            (false, None, Some(error)) => Ok(Outcome::Failure { error }),
            (true, _, _) => Err("ok outcome must carry `text` and no `error`".to_string()),
            (false, _, _) => Err("failed outcome must carry `error` and no `text`".to_string()),
        }
    }
}

/// Run the adapter: load the capability, read the whole input, extract.
///
/// Never fails: each way this can go wrong maps to an `Outcome::Failure`.
pub fn run<E, L, R>(load: L, mut input: R) -> Outcome
where
    E: ContentExtractor,
    L: FnOnce() -> Result<E, ExtractError>,
    R: Read,
{
    let extractor = match load() {
        Ok(extractor) => extractor,
        Err(err) => return Outcome::failure_with(FailureKind::CapabilityUnavailable, err),
    };

    let mut bytes = Vec::new();
    if let Err(err) = input.read_to_end(&mut bytes) {
        return Outcome::failure_with(FailureKind::ReadFailed, err);
    }
    if bytes.is_empty() {
        return Outcome::failure(FailureKind::EmptyHtml);
    }
    let html = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "read input");

    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(&html))) {
        Ok(Ok(Some(text))) if !text.is_empty() => Outcome::Success { text },
        Ok(Ok(_)) => Outcome::failure(FailureKind::NoText),
        Ok(Err(err)) => Outcome::failure_with(FailureKind::ExtractFailed, err),
        Err(payload) => Outcome::failure_with(FailureKind::ExtractFailed, panic_message(&*payload)),
    };
    debug!(ok = outcome.is_ok(), "extraction outcome");
    outcome
}

/// `run` with the built-in extractor on default options, reading stdin.
pub fn run_stdin() -> Outcome {
    run(|| Extractor::new(&Options::default()), io::stdin().lock())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panic: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panic: {msg}")
    } else {
        "panic".to_string()
    }
}
