//! Parsing of rock-mass input decks.
//!
//! A deck is a plain-text file of whitespace-separated decimal numbers:
//!
//! ```text
//! gx gy gz                                  global origin
//! a b c d phi cohesion                      one rock-volume face per line
//! %                                         sentinel
//! nx ny nz d lox loy loz cx cy cz phi cohesion [bx by bz bd]*
//! ```
//!
//! Every joint line carries 12 mandatory values followed by zero or more
//! groups of 4 values, one group per bounding face of the joint's finite
//! extent. Parsing stops at the first malformed line and reports its 1-based
//! line number; no partial result is ever produced. Faces and joints are
//! normalized on construction (unit normals, non-negative distances), so the
//! decomposition core never sees raw coefficients.

use std::io::BufRead;

use crate::math::{Point, Real, Vector};
use crate::shape::{Face, Joint};

/// Validated contents of a rock-mass input deck.
#[derive(Debug, Clone, PartialEq)]
pub struct RockMassInput {
    /// The global origin the rock-volume faces are expressed against.
    pub origin: Point,
    /// The faces of the initial rock volume.
    pub volume: Vec<Face>,
    /// The joints to cut the volume by, in application order.
    pub joints: Vec<Joint>,
}

/// A malformed or unreadable input deck.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// A token failed to parse as a decimal number.
    #[error("line {line}, token {token}: expected a number, found `{found}`")]
    NotANumber {
        /// 1-based line number.
        line: usize,
        /// 1-based token index within the line.
        token: usize,
        /// The offending token.
        found: String,
    },
    /// A record had the wrong number of values.
    #[error("line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        /// 1-based line number.
        line: usize,
        /// The number of values the record requires.
        expected: usize,
        /// The number of values present.
        found: usize,
    },
    /// A joint's trailing bounding-face values did not form complete groups.
    #[error("line {line}: joint bounding faces must come in groups of 4 values")]
    PartialBoundGroup {
        /// 1-based line number.
        line: usize,
    },
    /// A face or joint normal was too short to normalize.
    #[error("line {line}: degenerate (zero) normal vector")]
    DegenerateNormal {
        /// 1-based line number.
        line: usize,
    },
    /// The `%` sentinel separating faces from joints never appeared.
    #[error("missing `%` sentinel separating rock-volume faces from joints")]
    MissingSentinel,
    /// The deck ended before the global-origin line.
    #[error("input ended before the global origin line")]
    MissingOrigin,
    /// No rock-volume faces appeared before the sentinel.
    #[error("no rock-volume faces before the `%` sentinel")]
    EmptyVolume,
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

enum Section {
    Origin,
    Volume,
    Joints,
}

/// Parses a rock-mass input deck from a buffered reader.
pub fn parse_rock_mass<R: BufRead>(reader: R) -> Result<RockMassInput, InputError> {
    let mut section = Section::Origin;
    let mut origin = Point::origin();
    let mut volume = Vec::new();
    let mut joints = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let text = line?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        match section {
            Section::Origin => {
                let values = parse_values(text, line_no, 3)?;
                origin = Point::new(values[0], values[1], values[2]);
                section = Section::Volume;
            }
            Section::Volume => {
                if text == "%" {
                    if volume.is_empty() {
                        return Err(InputError::EmptyVolume);
                    }
                    section = Section::Joints;
                    continue;
                }
                let v = parse_values(text, line_no, 6)?;
                let face = Face::from_raw(v[0], v[1], v[2], v[3], v[4], v[5])
                    .ok_or(InputError::DegenerateNormal { line: line_no })?;
                volume.push(face);
            }
            Section::Joints => {
                joints.push(parse_joint(text, line_no)?);
            }
        }
    }

    match section {
        Section::Origin => Err(InputError::MissingOrigin),
        Section::Volume => Err(InputError::MissingSentinel),
        Section::Joints => Ok(RockMassInput {
            origin,
            volume,
            joints,
        }),
    }
}

/// Parses a rock-mass input deck held in a string.
pub fn parse_rock_mass_str(deck: &str) -> Result<RockMassInput, InputError> {
    parse_rock_mass(deck.as_bytes())
}

fn parse_joint(text: &str, line_no: usize) -> Result<Joint, InputError> {
    let v = parse_tokens(text, line_no)?;
    if v.len() < 12 {
        return Err(InputError::WrongTokenCount {
            line: line_no,
            expected: 12,
            found: v.len(),
        });
    }
    if (v.len() - 12) % 4 != 0 {
        return Err(InputError::PartialBoundGroup { line: line_no });
    }

    let bounds = v[12..]
        .chunks(4)
        .map(|g| (Vector::new(g[0], g[1], g[2]), g[3]))
        .collect();

    Joint::from_raw(
        Vector::new(v[0], v[1], v[2]),
        v[3],
        Point::new(v[4], v[5], v[6]),
        Point::new(v[7], v[8], v[9]),
        v[10],
        v[11],
        bounds,
    )
    .ok_or(InputError::DegenerateNormal { line: line_no })
}

fn parse_values(text: &str, line_no: usize, expected: usize) -> Result<Vec<Real>, InputError> {
    let values = parse_tokens(text, line_no)?;
    if values.len() != expected {
        return Err(InputError::WrongTokenCount {
            line: line_no,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

fn parse_tokens(text: &str, line_no: usize) -> Result<Vec<Real>, InputError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<Real>().map_err(|_| InputError::NotANumber {
                line: line_no,
                token: i + 1,
                found: token.to_string(),
            })
        })
        .collect()
}
