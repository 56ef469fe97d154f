//! This module provides the parser for the line-based `.santa` instance format:
//!
//! ```text
//! c comments start with a 'c'
//! p santa <num-participants>
//! n <id> <id> ...
//! x <giver> <receiver>
//! r <giver> <receiver>
//! ```
//!
//! The header has to precede all other (non-comment) lines. Participants are listed on `n` lines,
//! which may occur multiple times; the total number of participants has to match the header. An
//! `x` line excludes a directional pair, and an `r` line records a pairing of the previous round
//! which may not be repeated; every giver has at most one `r` line. Identifiers are unsigned
//! integers.
//!
//! Empty lines are ignored. Errors report the (1-based) line on which they occurred.
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use santa_core::constraints::ExclusionSet;
use santa_core::constraints::NoRepeatMap;
use santa_core::DrawRequest;
use thiserror::Error;

/// The identifier of a participant in an instance file.
pub type ParticipantId = u64;

#[derive(Debug, Error)]
pub enum InstanceParseError {
    #[error("failed to read instance")]
    Io(#[from] std::io::Error),

    #[error("missing 'p santa' header")]
    MissingHeader,

    #[error("line {line}: '{content}' is an invalid header")]
    InvalidHeader { line: usize, content: String },

    #[error("line {line}: multiple headers found")]
    DuplicateHeader { line: usize },

    #[error("line {line}: expected the header before any '{kind}' line")]
    UnexpectedBeforeHeader { line: usize, kind: char },

    #[error("line {line}: unknown line type '{kind}'")]
    UnknownLineType { line: usize, kind: String },

    #[error("line {line}: '{token}' is an invalid participant identifier")]
    InvalidIdentifier { line: usize, token: String },

    #[error("line {line}: expected a giver and a receiver, but found {found} value(s)")]
    ExpectedPair { line: usize, found: usize },

    #[error("line {line}: participant {giver} already gave a gift to {previous} in the previous round")]
    DuplicatePreviousPairing {
        line: usize,
        giver: ParticipantId,
        previous: ParticipantId,
    },

    #[error("expected {expected} participants, but parsed {parsed}")]
    IncorrectParticipantCount { expected: usize, parsed: usize },
}

/// The contents of an instance file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawInstance {
    pub participants: Vec<ParticipantId>,
    pub exclusions: ExclusionSet<ParticipantId>,
    pub no_repeat: NoRepeatMap<ParticipantId>,
}

impl DrawInstance {
    /// Creates the request for a draw of this instance.
    pub fn into_request(self, seed: Option<u64>) -> DrawRequest<ParticipantId> {
        let request = DrawRequest::new(self.participants)
            .with_exclusions(self.exclusions)
            .with_no_repeat(self.no_repeat);

        match seed {
            Some(seed) => request.with_seed(seed),
            None => request,
        }
    }
}

pub fn parse_instance_file(path: impl AsRef<Path>) -> Result<DrawInstance, InstanceParseError> {
    let file = File::open(path)?;
    parse_instance(BufReader::new(file))
}

pub fn parse_instance(source: impl BufRead) -> Result<DrawInstance, InstanceParseError> {
    let mut expected_participants = None;
    let mut instance = DrawInstance::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;

        let mut tokens = line.split_whitespace();
        let Some(kind) = tokens.next() else {
            continue;
        };

        match kind {
            "c" => continue,

            "p" => {
                if expected_participants.is_some() {
                    return Err(InstanceParseError::DuplicateHeader { line: line_number });
                }
                expected_participants = Some(parse_header(line_number, &line, tokens)?);
            }

            "n" | "x" | "r" => {
                if expected_participants.is_none() {
                    return Err(InstanceParseError::UnexpectedBeforeHeader {
                        line: line_number,
                        kind: kind.chars().next().unwrap_or_default(),
                    });
                }

                let identifiers = tokens
                    .map(|token| parse_identifier(line_number, token))
                    .collect::<Result<Vec<_>, _>>()?;

                match kind {
                    "n" => instance.participants.extend(identifiers),
                    "x" => {
                        let (giver, receiver) = expect_pair(line_number, &identifiers)?;
                        let _ = instance.exclusions.insert(giver, receiver);
                    }
                    _ => {
                        let (giver, receiver) = expect_pair(line_number, &identifiers)?;
                        if let Some(previous) = instance.no_repeat.previous_receiver(giver) {
                            return Err(InstanceParseError::DuplicatePreviousPairing {
                                line: line_number,
                                giver,
                                previous,
                            });
                        }
                        let _ = instance.no_repeat.insert(giver, receiver);
                    }
                }
            }

            _ => {
                return Err(InstanceParseError::UnknownLineType {
                    line: line_number,
                    kind: kind.to_owned(),
                })
            }
        }
    }

    let expected = expected_participants.ok_or(InstanceParseError::MissingHeader)?;
    if instance.participants.len() != expected {
        return Err(InstanceParseError::IncorrectParticipantCount {
            expected,
            parsed: instance.participants.len(),
        });
    }

    Ok(instance)
}

fn parse_header<'a>(
    line_number: usize,
    line: &str,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<usize, InstanceParseError> {
    let invalid_header = || InstanceParseError::InvalidHeader {
        line: line_number,
        content: line.trim().to_owned(),
    };

    if tokens.next() != Some("santa") {
        return Err(invalid_header());
    }

    let num_participants = tokens
        .next()
        .and_then(|count| count.parse::<usize>().ok())
        .ok_or_else(invalid_header)?;

    if tokens.next().is_some() {
        return Err(invalid_header());
    }

    Ok(num_participants)
}

fn parse_identifier(line_number: usize, token: &str) -> Result<ParticipantId, InstanceParseError> {
    token
        .parse()
        .map_err(|_| InstanceParseError::InvalidIdentifier {
            line: line_number,
            token: token.to_owned(),
        })
}

fn expect_pair(
    line_number: usize,
    identifiers: &[ParticipantId],
) -> Result<(ParticipantId, ParticipantId), InstanceParseError> {
    match identifiers {
        &[giver, receiver] => Ok((giver, receiver)),
        _ => Err(InstanceParseError::ExpectedPair {
            line: line_number,
            found: identifiers.len(),
        }),
    }
}
