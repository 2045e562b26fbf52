use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One token's position and displayable attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLayout {
    /// Left edge of the token column.
    pub x: f64,
    /// Column width including the trailing gap.
    pub width: f64,
    pub id: String,
    pub form: String,
    pub lemma: String,
    /// POS line as displayed: UPOS, XPOS, or both joined by `" - "`,
    /// depending on the field selection.
    pub pos: String,
}

/// Geometry of one dependency arc: a rounded step path drawn from the head
/// side to the dependent side, an arrowhead at the dependent end, and a
/// centered relation label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcLayout {
    /// Path start, on the baseline at the left end of the chord.
    pub start: Point,
    /// End of the first quarter curve, on the raised span.
    pub corner_start: Point,
    /// Start of the final quarter curve.
    pub corner_end: Point,
    /// Path end, back on the baseline at the right end of the chord.
    pub end: Point,
    pub arrow: [Point; 3],
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    /// True when the head lies to the left of the dependent.
    pub leftward: bool,
    /// Nesting height of the arc (≥ 1).
    pub height: usize,
}

/// The root marker: a vertical line spanning the available height with an
/// arrowhead pointing down at the root token, plus a "root" label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootLayout {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub arrow: [Point; 3],
    pub label_x: f64,
    pub label_y: f64,
}

/// Complete geometry of one stanza diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StanzaLayout {
    pub width: f64,
    pub height: f64,
    pub tokens: Vec<TokenLayout>,
    pub arcs: Vec<ArcLayout>,
    pub root: RootLayout,
}
