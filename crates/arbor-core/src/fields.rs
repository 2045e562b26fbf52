use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Token attributes the renderer knows how to display.
///
/// This is a closed set: selection is validated when options are
/// constructed, not per token at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Id,
    Form,
    Lemma,
    Upos,
    Xpos,
    Head,
    Deprel,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Form,
        Field::Lemma,
        Field::Upos,
        Field::Xpos,
        Field::Head,
        Field::Deprel,
    ];

    /// Canonical CoNLL-U column name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Form => "FORM",
            Field::Lemma => "LEMMA",
            Field::Upos => "UPOS",
            Field::Xpos => "XPOS",
            Field::Head => "HEAD",
            Field::Deprel => "DEPREL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is not a standard CoNLL-U field")]
    Unknown(String),

    #[error("{0} is a standard CoNLL-U field but cannot be displayed")]
    Unsupported(String),
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ID" => Ok(Field::Id),
            "FORM" => Ok(Field::Form),
            "LEMMA" => Ok(Field::Lemma),
            "UPOS" => Ok(Field::Upos),
            "XPOS" => Ok(Field::Xpos),
            "HEAD" => Ok(Field::Head),
            "DEPREL" => Ok(Field::Deprel),
            "FEATS" | "DEPS" | "MISC" => Err(FieldError::Unsupported(s.trim().to_string())),
            _ => Err(FieldError::Unknown(s.trim().to_string())),
        }
    }
}

/// Ordered, de-duplicated set of display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    fields: Vec<Field>,
}

impl FieldSelection {
    /// Builds a selection, keeping the first occurrence of each field.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut out = Vec::new();
        for field in fields {
            if !out.contains(&field) {
                out.push(field);
            }
        }
        Self { fields: out }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldSelection {
    /// The conventional display set: FORM, UPOS, HEAD, DEPREL.
    fn default() -> Self {
        Self::new([Field::Form, Field::Upos, Field::Head, Field::Deprel])
    }
}

impl FromIterator<Field> for FieldSelection {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self::new(iter)
    }
}
