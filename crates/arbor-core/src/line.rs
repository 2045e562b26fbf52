use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One CoNLL-U token record: ten tab-separated columns.
///
/// All fields are kept as raw strings so a parsed line can be serialized
/// back column-for-column with [`WordLine::to_tsv`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLine {
    pub id: String,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
    pub head: String,
    pub deprel: String,
    pub deps: String,
    pub misc: String,
}

impl WordLine {
    /// Classifies a line as a token record.
    ///
    /// A line qualifies iff, after trimming, it splits into exactly ten
    /// tab-separated fields and the first field starts with an ASCII digit.
    /// Anything else yields `None`; callers treat that as "skip".
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() != 10 {
            return None;
        }
        if !fields[0].starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            id: fields[0].to_string(),
            form: fields[1].to_string(),
            lemma: fields[2].to_string(),
            upos: fields[3].to_string(),
            xpos: fields[4].to_string(),
            feats: fields[5].to_string(),
            head: fields[6].to_string(),
            deprel: fields[7].to_string(),
            deps: fields[8].to_string(),
            misc: fields[9].to_string(),
        })
    }

    /// Serializes back to the ten tab-joined CoNLL-U columns.
    pub fn to_tsv(&self) -> String {
        [
            self.id.as_str(),
            self.form.as_str(),
            self.lemma.as_str(),
            self.upos.as_str(),
            self.xpos.as_str(),
            self.feats.as_str(),
            self.head.as_str(),
            self.deprel.as_str(),
            self.deps.as_str(),
            self.misc.as_str(),
        ]
        .join("\t")
    }

    /// True when the ID is a plain positive integer.
    ///
    /// Decimal empty-node ids (`7.1`) and multiword ranges (`3-4`) are valid
    /// CoNLL-U but are never visualized.
    pub fn has_plain_id(&self) -> bool {
        !self.id.is_empty() && self.id.bytes().all(|b| b.is_ascii_digit())
    }

    /// True for the sentence root (HEAD == "0").
    pub fn is_root(&self) -> bool {
        self.head == "0"
    }

    /// Morphological features as `key=value` pairs in order of appearance.
    ///
    /// Parts without a `=` (including the conventional `_` placeholder) are
    /// skipped.
    pub fn feats(&self) -> IndexMap<String, String> {
        let mut out = IndexMap::new();
        for part in self.feats.split('|') {
            if let Some((key, val)) = part.split_once('=') {
                out.insert(key.to_string(), val.to_string());
            }
        }
        out
    }
}

/// Metadata comment line: `# key = value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaLine {
    pub key: String,
    pub val: String,
}

impl MetaLine {
    /// Classifies a line as a metadata record.
    ///
    /// A line qualifies iff it starts with `#` and the remainder contains a
    /// `=`; the remainder is split at the first `=` with both sides trimmed.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('#')?;
        let (key, val) = rest.split_once('=')?;
        Some(Self {
            key: key.trim().to_string(),
            val: val.trim().to_string(),
        })
    }
}

/// A recognized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Word(WordLine),
    Meta(MetaLine),
}

/// Classifies one input line; `None` means neither kind (blank, malformed,
/// plain comment) and the line is dropped by stanza scanning.
pub fn classify_line(line: &str) -> Option<Line> {
    if let Some(word) = WordLine::parse(line) {
        return Some(Line::Word(word));
    }
    MetaLine::parse(line).map(Line::Meta)
}
