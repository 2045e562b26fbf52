use crate::Result;
use crate::metrics::Metrics;
use crate::model::{ArcLayout, Point, RootLayout, StanzaLayout, TokenLayout};
use arbor_core::{Deprel, Field, FieldSelection, Stanza, WordLine};
use rustc_hash::FxHashMap;
use unicode_width::UnicodeWidthStr;

/// Width of one token column: the widest displayed attribute in display
/// columns, normalized against the reference word length, scaled to the
/// base pixel width, plus the inter-token gap.
pub fn token_width(token: &WordLine, fields: &FieldSelection, metrics: &Metrics) -> f64 {
    let pos_cols = token.upos.width()
        + if fields.contains(Field::Xpos) {
            token.xpos.width() + 3
        } else {
            0
        };
    let longest = token.form.width().max(token.lemma.width()).max(pos_cols);
    let abs_len = metrics.char_len * longest as f64;
    metrics.base_token_width * (abs_len / metrics.default_word_len) + metrics.space_len
}

/// Prefix-sum table of token widths and x positions.
///
/// Positions strictly increase with the token index, so tokens never
/// overlap by construction.
#[derive(Debug, Clone)]
pub struct Spacing {
    widths: Vec<f64>,
    prefix: Vec<f64>,
}

impl Spacing {
    pub fn new(stanza: &Stanza, fields: &FieldSelection, metrics: &Metrics) -> Self {
        let widths: Vec<f64> = stanza
            .tokens
            .iter()
            .map(|token| token_width(token, fields, metrics))
            .collect();
        let mut prefix = Vec::with_capacity(widths.len() + 1);
        let mut acc = 0.0;
        prefix.push(0.0);
        for width in &widths {
            acc += width;
            prefix.push(acc);
        }
        Self { widths, prefix }
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn width(&self, i: usize) -> f64 {
        self.widths[i]
    }

    /// Left edge of token `i`.
    pub fn x(&self, i: usize) -> f64 {
        self.prefix[i]
    }

    /// Horizontal span an arc between positions `a` and `b` must bridge.
    /// Symmetric in its arguments.
    pub fn dist(&self, a: usize, b: usize) -> f64 {
        let (lo, hi) = (a.min(b), a.max(b));
        self.prefix[hi] - self.prefix[lo]
    }

    /// Total canvas width: the sum of all token widths (each already
    /// carries its trailing gap).
    pub fn total(&self) -> f64 {
        *self.prefix.last().unwrap_or(&0.0)
    }
}

/// Nesting depths for one stanza's arcs, memoized per `(start, end)` span.
#[derive(Debug)]
pub struct ArcStack {
    spans: Vec<(usize, usize)>,
    memo: FxHashMap<(usize, usize), usize>,
}

impl ArcStack {
    pub fn new(deprels: &[Deprel]) -> Self {
        Self {
            spans: deprels.iter().map(Deprel::span).collect(),
            memo: FxHashMap::default(),
        }
    }

    /// Height of the arc between `src` and `trg`, in nesting units.
    /// Always ≥ 1, and symmetric in its arguments.
    pub fn height(&mut self, src: usize, trg: usize) -> usize {
        self.depth(src.min(trg), src.max(trg)) + 1
    }

    /// Tallest arc of the stanza, 0 when there are no arcs.
    pub fn max_height(&mut self) -> usize {
        let mut max = 0;
        for i in 0..self.spans.len() {
            let (a, b) = self.spans[i];
            max = max.max(self.height(a, b));
        }
        max
    }

    /// Nesting depth of the span `(a, b)`: one more than the deepest
    /// qualifying sub-arc, where a sub-arc either starts strictly inside
    /// and ends no later than `b`, or shares the left endpoint and ends
    /// strictly earlier. Qualifying spans are strictly shorter, so the
    /// recursion terminates; results are memoized per span.
    fn depth(&mut self, a: usize, b: usize) -> usize {
        if let Some(&depth) = self.memo.get(&(a, b)) {
            return depth;
        }
        let nested: Vec<(usize, usize)> = self
            .spans
            .iter()
            .copied()
            .filter(|&(x, y)| (a < x && y <= b) || (a == x && y < b))
            .collect();
        let depth = nested
            .into_iter()
            .map(|(x, y)| 1 + self.depth(x, y))
            .max()
            .unwrap_or(0);
        self.memo.insert((a, b), depth);
        depth
    }
}

/// Vertical flip from the bottom-up arc coordinates to the top-left SVG
/// origin.
fn flip_y(total_h: f64, y: f64) -> f64 {
    total_h.round() - y.round() - 5.0
}

/// Computes the full diagram geometry for one stanza.
///
/// Fails when the stanza has no tokens, lacks a unique root, or carries
/// unresolvable HEAD pointers; the caller substitutes a textual notice for
/// that stanza alone.
pub fn layout_stanza(
    stanza: &Stanza,
    fields: &FieldSelection,
    metrics: &Metrics,
) -> Result<StanzaLayout> {
    let root_position = stanza.root_position()?;
    let deprels = stanza.deprels()?;

    let spacing = Spacing::new(stanza, fields, metrics);
    let mut arc_stack = ArcStack::new(&deprels);

    let total_w = spacing.total();
    let total_h = metrics.base_height + metrics.depth_step * arc_stack.max_height() as f64;

    let tokens = stanza
        .tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let mut pos_parts = Vec::new();
            if fields.contains(Field::Upos) && !token.upos.is_empty() {
                pos_parts.push(token.upos.as_str());
            }
            if fields.contains(Field::Xpos) && !token.xpos.is_empty() {
                pos_parts.push(token.xpos.as_str());
            }
            TokenLayout {
                x: spacing.x(i),
                width: spacing.width(i),
                id: token.id.clone(),
                form: token.form.clone(),
                lemma: token.lemma.clone(),
                pos: pos_parts.join(" - "),
            }
        })
        .collect();

    let arcs = deprels
        .iter()
        .map(|deprel| arc_layout(deprel, &spacing, &mut arc_stack, metrics, total_h))
        .collect();

    let root = root_layout(root_position, &spacing, metrics, total_h);

    Ok(StanzaLayout {
        width: total_w,
        height: total_h,
        tokens,
        arcs,
        root,
    })
}

fn arc_layout(
    deprel: &Deprel,
    spacing: &Spacing,
    arc_stack: &mut ArcStack,
    metrics: &Metrics,
    total_h: f64,
) -> ArcLayout {
    let (lo, hi) = deprel.span();
    let leftward = deprel.is_leftward();
    let height = arc_stack.height(deprel.src, deprel.trg);

    let dxy = spacing.dist(lo, hi);
    let rise = metrics.arc_depth_rise * height as f64;
    let w = dxy - metrics.arc_chord_inset / dxy;
    let h = rise / 1.5;
    let r = h / 2.0;

    let x = spacing.x(lo) + dxy / 2.0 + if leftward { 20.0 } else { 10.0 };
    let y = metrics.arc_base_y;
    let x1 = x - w / 2.0;
    let x2 = x.min(x1 + r);
    let x4 = x + w / 2.0;
    let x3 = x.max(x4 - r);
    let y1 = flip_y(total_h, y);
    let y2 = flip_y(total_h, y + r);

    // Arrowhead at the dependent end of the arc.
    let x_arr = if leftward { x + w / 2.0 } else { x - w / 2.0 };
    let y_arr = flip_y(total_h, y - 5.0);
    let arrow = [
        Point { x: x_arr, y: y_arr },
        Point {
            x: x_arr - 3.0,
            y: y_arr - 6.0,
        },
        Point {
            x: x_arr + 3.0,
            y: y_arr - 6.0,
        },
    ];

    let label_x = x - (deprel.label.width() as f64 * metrics.label_char_width) / 2.0;
    let label_y = flip_y(total_h, h / 2.0 + metrics.arc_base_y + 3.0);

    ArcLayout {
        start: Point { x: x1, y: y1 },
        corner_start: Point { x: x2, y: y2 },
        corner_end: Point { x: x3, y: y2 },
        end: Point { x: x4, y: y1 },
        arrow,
        label: deprel.label.clone(),
        label_x,
        label_y,
        leftward,
        height,
    }
}

fn root_layout(
    root_position: usize,
    spacing: &Spacing,
    metrics: &Metrics,
    total_h: f64,
) -> RootLayout {
    let x = spacing.x(root_position) + 15.0;
    let y_top = flip_y(total_h, total_h);
    let y_bottom = y_top + (total_h - metrics.arc_base_y);
    let arrow = [
        Point { x, y: y_bottom },
        Point {
            x: x - 3.0,
            y: y_bottom - 6.0,
        },
        Point {
            x: x + 3.0,
            y: y_bottom - 6.0,
        },
    ];
    RootLayout {
        x,
        y_top,
        y_bottom,
        arrow,
        label_x: x + 5.0,
        label_y: flip_y(total_h, total_h - 15.0),
    }
}
