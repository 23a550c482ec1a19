use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Silhouette category used to tailor a recommendation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Hourglass,
    Pear,
    Apple,
    Rectangle,
    #[serde(rename = "inverted triangle")]
    InvertedTriangle,
}

impl BodyType {
    pub const ALL: [BodyType; 5] = [
        BodyType::Hourglass,
        BodyType::Pear,
        BodyType::Apple,
        BodyType::Rectangle,
        BodyType::InvertedTriangle,
    ];

    /// Value sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            BodyType::Hourglass => "hourglass",
            BodyType::Pear => "pear",
            BodyType::Apple => "apple",
            BodyType::Rectangle => "rectangle",
            BodyType::InvertedTriangle => "inverted triangle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyType::Hourglass => "Hourglass",
            BodyType::Pear => "Pear",
            BodyType::Apple => "Apple",
            BodyType::Rectangle => "Rectangle",
            BodyType::InvertedTriangle => "Inverted Triangle",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        BodyType::ALL
            .into_iter()
            .find(|b| b.as_str() == normalized)
            .ok_or_else(|| UnknownOption {
                kind: "body type",
                value: s.to_string(),
            })
    }
}

/// One of the six style personalities a quiz answer can pick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleLabel {
    Classic,
    Bohemian,
    Minimalist,
    Preppy,
    Edgy,
    Romantic,
}

impl StyleLabel {
    pub const ALL: [StyleLabel; 6] = [
        StyleLabel::Classic,
        StyleLabel::Bohemian,
        StyleLabel::Minimalist,
        StyleLabel::Preppy,
        StyleLabel::Edgy,
        StyleLabel::Romantic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleLabel::Classic => "classic",
            StyleLabel::Bohemian => "bohemian",
            StyleLabel::Minimalist => "minimalist",
            StyleLabel::Preppy => "preppy",
            StyleLabel::Edgy => "edgy",
            StyleLabel::Romantic => "romantic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StyleLabel::Classic => "Classic",
            StyleLabel::Bohemian => "Bohemian",
            StyleLabel::Minimalist => "Minimalist",
            StyleLabel::Preppy => "Preppy",
            StyleLabel::Edgy => "Edgy",
            StyleLabel::Romantic => "Romantic",
        }
    }
}

impl fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleLabel {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        StyleLabel::ALL
            .into_iter()
            .find(|l| l.as_str() == normalized)
            .ok_or_else(|| UnknownOption {
                kind: "style",
                value: s.to_string(),
            })
    }
}
