//! The per-document parsing state machine
//!
//! Folds classified lines into a hierarchical record (group number →
//! prefecture → municipality → local addresses) and flushes the record
//! through the expander whenever a hierarchy value changes. Flushing
//! is triggered by value change, not line adjacency, so markers echoed
//! across page breaks never fragment the output.

use crate::classifier::{classify, LineClass};
use crate::error::{ParseError, Result};
use crate::expander::expand;

/// Mutable working record for one document.
///
/// Hierarchy fields stay `None` until their first marker is seen.
/// `pending` buffers local-address text for the current
/// (group, prefecture, municipality) triple and is only ever non-empty
/// once all three fields are set.
#[derive(Debug, Default)]
pub struct ParseState {
    group: Option<u32>,
    prefecture: Option<String>,
    municipality: Option<String>,
    pending: String,
}

impl ParseState {
    /// Fresh state for a new document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw line into the state.
    ///
    /// Addresses flushed by a hierarchy change are appended to `out`.
    /// Fails on a malformed group marker or on address text arriving
    /// before any municipality is known.
    pub fn push_line(&mut self, raw: &str, out: &mut Vec<String>) -> Result<()> {
        let line = raw.trim();
        match classify(line)? {
            LineClass::Blank | LineClass::PageNumber => {}
            LineClass::Group(number) => {
                // Same value restated is not a change.
                if self.group != Some(number) {
                    self.flush_into(out);
                    self.group = Some(number);
                }
            }
            // Preamble before the first group header is skipped.
            _ if self.group.is_none() => {}
            LineClass::Prefecture(name) => {
                if self.prefecture.as_deref() != Some(name) {
                    self.flush_into(out);
                    self.prefecture = Some(name.to_owned());
                }
            }
            // Below-prefecture lines are skipped until the prefecture
            // is known.
            _ if self.prefecture.is_none() => {}
            LineClass::Municipality(name) => {
                if self.municipality.as_deref() != Some(name) {
                    self.flush_into(out);
                    self.municipality = Some(name.to_owned());
                }
            }
            LineClass::LocalAddress(text) => {
                if self.municipality.is_none() {
                    return Err(ParseError::MunicipalityMissing {
                        line: line.to_owned(),
                    });
                }
                self.pending.push_str(text);
            }
        }
        Ok(())
    }

    /// End of input: flush whatever record is still pending.
    pub fn finish(mut self, out: &mut Vec<String>) {
        self.flush_into(out);
    }

    /// Expand the buffered record into `out` and clear the buffer.
    ///
    /// A no-op while any hierarchy field is unset, which makes it safe
    /// to call on every first-ever marker.
    fn flush_into(&mut self, out: &mut Vec<String>) {
        out.extend(expand(
            self.group,
            self.prefecture.as_deref(),
            self.municipality.as_deref(),
            &self.pending,
        ));
        self.pending.clear();
    }
}
