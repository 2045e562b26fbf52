use crate::line::WordLine;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rooted, ordered dependency tree: a token plus its dependents in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepTree {
    pub node: WordLine,
    pub children: Vec<DepTree>,
}

/// Builds a dependency tree from a stanza's word lines by linking every
/// token to the token whose ID equals its HEAD.
///
/// Fails with [`Error::NoRoot`] when no token has HEAD == "0", and with
/// [`Error::InconsistentTree`] when the head links leave tokens unreachable
/// from the root (cycles, duplicate ids pointing at each other).
pub fn build_deptree(lines: &[WordLine]) -> Result<DepTree> {
    let root = lines
        .iter()
        .position(|line| line.is_root())
        .ok_or(Error::NoRoot)?;

    let mut visited = vec![false; lines.len()];
    let tree = attach(lines, &mut visited, root);
    if visited.iter().any(|seen| !seen) {
        return Err(Error::InconsistentTree);
    }
    Ok(tree)
}

fn attach(lines: &[WordLine], visited: &mut [bool], parent: usize) -> DepTree {
    visited[parent] = true;
    let mut children = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if !visited[i] && line.head == lines[parent].id {
            children.push(attach(lines, visited, i));
        }
    }
    DepTree {
        node: lines[parent].clone(),
        children,
    }
}

impl DepTree {
    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(DepTree::size).sum::<usize>()
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DepTree::depth)
            .max()
            .unwrap_or(0)
    }

    /// All word lines of the tree, sorted by numeric ID.
    ///
    /// Decimal ids like `7.1` sort by their integer part.
    pub fn wordlines(&self) -> Vec<WordLine> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out.sort_by_key(|line| numeric_id(&line.id));
        out
    }

    fn collect(&self, out: &mut Vec<WordLine>) {
        out.push(self.node.clone());
        for child in &self.children {
            child.collect(out);
        }
    }

    /// The sentence as space-joined surface forms.
    pub fn sentence(&self) -> String {
        self.wordlines()
            .iter()
            .map(|line| line.form.clone())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indented one-node-per-line dump, each node as its ten tab-joined
    /// columns.
    pub fn prettyprint(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.prettyprint_into(0, &mut lines);
        lines
    }

    fn prettyprint_into(&self, level: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", "  ".repeat(level), self.node.to_tsv()));
        for child in &self.children {
            child.prettyprint_into(level + 1, lines);
        }
    }

    /// True when the tree does not span a contiguous ID range, i.e. some
    /// token between its leftmost and rightmost members belongs to another
    /// subtree.
    pub fn is_nonprojective(&self) -> bool {
        let mut ids: Vec<u64> = self
            .wordlines()
            .iter()
            .filter(|line| line.has_plain_id())
            .filter_map(|line| line.id.parse().ok())
            .collect();
        ids.sort_unstable();
        match (ids.first(), ids.last()) {
            (Some(&min), Some(&max)) => (ids.len() as u64) < 1 + max - min,
            _ => false,
        }
    }
}

/// Sort key for CoNLL-U ids: plain integers parse directly, decimal
/// sub-token ids (`7.1`) truncate to their integer part.
fn numeric_id(id: &str) -> u64 {
    if id.bytes().all(|b| b.is_ascii_digit()) {
        id.parse().unwrap_or(0)
    } else {
        id.parse::<f64>().map(|v| v.trunc() as u64).unwrap_or(0)
    }
}
