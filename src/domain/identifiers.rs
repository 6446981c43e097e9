use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The category of identifier named by the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Isbn,
    RecordId,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized identifier kind: {0}")]
pub struct UnknownKind(pub String);

impl IdentifierKind {
    /// Name of the indexed field a term query for this kind matches against.
    pub fn field_name(self) -> &'static str {
        match self {
            IdentifierKind::Isbn => "isbn",
            IdentifierKind::RecordId => "recordId",
        }
    }
}

impl FromStr for IdentifierKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "isbn" => Ok(IdentifierKind::Isbn),
            "recordid" | "tnr" | "titlenr" | "biblionr" | "biblionumber" => {
                Ok(IdentifierKind::RecordId)
            }
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Isbn => f.write_str("isbn"),
            IdentifierKind::RecordId => f.write_str("record-id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub kind: IdentifierKind,
    /// Passed to the backend untouched.
    pub value: String,
}

impl Identifier {
    pub fn parse(kind: &str, value: impl Into<String>) -> Result<Self, UnknownKind> {
        Ok(Self {
            kind: kind.parse()?,
            value: value.into(),
        })
    }
}
