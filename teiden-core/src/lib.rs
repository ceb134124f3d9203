//! Address list extraction for planned-outage schedules
//!
//! Parses the raw text extracted from planned-outage schedule documents
//! into flat `"<prefecture><municipality><local-address> <group>"` lines.
//! The input is an ordered sequence of text lines; where those lines come
//! from (PDF extraction, plain files) is the caller's concern.

#![warn(missing_docs)]

pub mod accumulator;
pub mod classifier;
pub mod error;
pub mod expander;

// Re-export key types
pub use accumulator::ParseState;
pub use classifier::{classify, LineClass};
pub use error::{ParseError, Result};
pub use expander::expand;

/// Parse one document's extracted lines into formatted address lines.
///
/// Lines are folded in order through a fresh [`ParseState`]; the state
/// is flushed once more at end of input so a trailing record is never
/// lost.
pub fn extract_address_lines<I, S>(lines: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParseState::new();
    let mut out = Vec::new();
    for line in lines {
        state.push_line(line.as_ref(), &mut out)?;
    }
    state.finish(&mut out);
    Ok(out)
}
