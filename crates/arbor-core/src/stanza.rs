use crate::line::{Line, WordLine, classify_line};
use crate::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One sentence's worth of annotation: tokens in input order plus the
/// stanza's `# key = value` metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stanza {
    /// Plain-integer-ID tokens only; empty-node ids (`7.1`) and multiword
    /// ranges (`3-4`) are dropped at this level.
    pub tokens: Vec<WordLine>,
    pub metadata: IndexMap<String, String>,
}

/// One dependency relation as 0-based token positions (not token IDs).
///
/// `src` is the dependent, `trg` the governing head; the arrowhead is drawn
/// at the dependent end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprel {
    pub src: usize,
    pub trg: usize,
    pub label: String,
}

impl Deprel {
    /// Arc endpoints in left-to-right order.
    pub fn span(&self) -> (usize, usize) {
        (self.src.min(self.trg), self.src.max(self.trg))
    }

    /// True when the head lies to the left of the dependent.
    pub fn is_leftward(&self) -> bool {
        self.trg < self.src
    }
}

impl Stanza {
    /// Scans a blank-line-delimited block: token and metadata records are
    /// collected, every other line is dropped silently.
    pub fn parse(block: &str) -> Self {
        let mut tokens = Vec::new();
        let mut metadata = IndexMap::new();
        for line in block.lines() {
            match classify_line(line) {
                Some(Line::Word(word)) => {
                    if word.has_plain_id() {
                        tokens.push(word);
                    }
                }
                Some(Line::Meta(meta)) => {
                    metadata.insert(meta.key, meta.val);
                }
                None => {}
            }
        }
        Self { tokens, metadata }
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 0-based position of the unique token with HEAD == "0".
    pub fn root_position(&self) -> Result<usize> {
        if self.tokens.is_empty() {
            return Err(Error::EmptyStanza);
        }
        let mut roots = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_root());
        let Some((position, _)) = roots.next() else {
            return Err(Error::NoRoot);
        };
        let extra = roots.count();
        if extra > 0 {
            return Err(Error::MultipleRoots { count: extra + 1 });
        }
        Ok(position)
    }

    /// Dependency relations for every governed token, with HEAD ids resolved
    /// to 0-based positions. The root contributes no arc.
    pub fn deprels(&self) -> Result<Vec<Deprel>> {
        let position_of: FxHashMap<&str, usize> = self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.id.as_str(), i))
            .collect();

        let mut out = Vec::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if token.is_root() {
                continue;
            }
            if token.head.is_empty() || !token.head.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidHead {
                    id: token.id.clone(),
                    head: token.head.clone(),
                });
            }
            let Some(&trg) = position_of.get(token.head.as_str()) else {
                return Err(Error::DanglingHead {
                    id: token.id.clone(),
                    head: token.head.clone(),
                });
            };
            if trg == i {
                return Err(Error::SelfHead {
                    id: token.id.clone(),
                });
            }
            out.push(Deprel {
                src: i,
                trg,
                label: token.deprel.clone(),
            });
        }
        Ok(out)
    }
}

/// Splits a document into stanza blocks at blank-line boundaries,
/// dropping whitespace-only spans.
pub fn split_stanzas(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .filter(|span| !span.trim().is_empty())
        .collect()
}
