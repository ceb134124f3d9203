//! Line classification for extracted schedule text
//!
//! Every trimmed line of the raw text falls into exactly one category,
//! recognized by fixed textual markers. Classification is pure and
//! stateless; the accumulator decides what each category means given
//! the current parsing position.

use crate::error::{ParseError, Result};

/// Prefix of a group marker line.
const GROUP_PREFIX: &str = "第";

/// Suffix of a group marker line.
const GROUP_SUFFIX: &str = "グループ";

/// Opening bracket of a prefecture marker line.
const PREFECTURE_OPEN: &str = "【";

/// Closing bracket of a prefecture marker line.
const PREFECTURE_CLOSE: &str = "】";

/// Suffixes marking a municipality line: city, ward, town, village.
const MUNICIPALITY_SUFFIXES: [char; 4] = ['市', '区', '町', '村'];

/// Characters separating local addresses within one municipality,
/// full-width and half-width comma.
pub(crate) const LOCAL_SEPARATORS: [char; 2] = ['，', ','];

/// Category of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming; carries no information.
    Blank,
    /// A bare page number: one or two half-width digits.
    PageNumber,
    /// A group header carrying the outage group number.
    Group(u32),
    /// A bracketed header carrying a prefecture name.
    Prefecture(&'a str),
    /// A municipality name line.
    Municipality(&'a str),
    /// Free-form local address text below the municipality level.
    LocalAddress(&'a str),
}

/// Classify one trimmed line.
///
/// Order matters: blank and page-number lines absorb everything, then
/// the three markers in group > prefecture > municipality precedence,
/// then the local-address fallthrough. The only failure is a group
/// marker whose digits do not parse.
pub fn classify(line: &str) -> Result<LineClass<'_>> {
    if line.is_empty() {
        return Ok(LineClass::Blank);
    }
    if is_page_number(line) {
        return Ok(LineClass::PageNumber);
    }
    if let Some(digits) = line
        .strip_prefix(GROUP_PREFIX)
        .and_then(|rest| rest.strip_suffix(GROUP_SUFFIX))
    {
        return Ok(LineClass::Group(parse_group_number(line, digits)?));
    }
    if let Some(name) = line
        .strip_prefix(PREFECTURE_OPEN)
        .and_then(|rest| rest.strip_suffix(PREFECTURE_CLOSE))
    {
        return Ok(LineClass::Prefecture(name));
    }
    if line.ends_with(MUNICIPALITY_SUFFIXES) && !line.contains(LOCAL_SEPARATORS) {
        return Ok(LineClass::Municipality(line));
    }
    Ok(LineClass::LocalAddress(line))
}

/// Page numbers are at most two half-width digits.
fn is_page_number(line: &str) -> bool {
    line.len() <= 2 && line.bytes().all(|b| b.is_ascii_digit())
}

/// The digits of a group marker may be printed full-width; fold them
/// to ASCII before parsing so both glyph sets yield the same integer.
fn parse_group_number(line: &str, digits: &str) -> Result<u32> {
    let normalized: String = digits
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect();
    normalized
        .parse()
        .map_err(|source| ParseError::InvalidGroupNumber {
            line: line.to_owned(),
            source,
        })
}
