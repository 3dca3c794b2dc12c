//! Kurven-Evaluator: Cardinal-Spline und rationale kubische Bézier-Segmente.
//!
//! Beide Verfahren nehmen vier geordnete Punkte pro Segment und liefern eine
//! endliche, neu startbare Folge von Abtastpunkten ([`SegmentSamples`]).
//! Alles hier ist zustandslos; kein Logging im Auswertungspfad.

use super::{ModelError, Node, NodeModel};
use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Erlaubter Tension-Bereich des Cardinal-Splines.
pub const TENSION_RANGE: (f32, f32) = (-2.0, 2.0);
/// Unterhalb dieser Gewichtssumme gilt ein rationales Segment als entartet.
pub const RATIONAL_DENOMINATOR_EPSILON: f32 = 1e-6;

/// Punkt auf einem Cardinal-Segment von `p1` nach `p2` (Blend-Funktionen).
///
/// `s = (1 − tension) / 2`. Bei `t <= 0` bzw. `t >= 1` werden `p1` bzw. `p2`
/// exakt zurückgegeben.
pub fn cardinal_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32, tension: f32) -> Vec2 {
    if t <= 0.0 {
        return p1;
    }
    if t >= 1.0 {
        return p2;
    }
    let s = (1.0 - tension) * 0.5;
    let t2 = t * t;
    let t3 = t2 * t;
    let b1 = -s * t3 + 2.0 * s * t2 - s * t;
    let b2 = (2.0 - s) * t3 + (s - 3.0) * t2 + 1.0;
    let b3 = (s - 2.0) * t3 + (3.0 - 2.0 * s) * t2 + s * t;
    let b4 = s * t3 - s * t2;
    p0 * b1 + p1 * b2 + p2 * b3 + p3 * b4
}

/// Punkt auf einem rationalen kubischen Bézier-Segment.
///
/// `P(t) = Σ wᵢ·pᵢ·Bᵢ(t) / Σ wᵢ·Bᵢ(t)`. Ist der Nenner kleiner als
/// [`RATIONAL_DENOMINATOR_EPSILON`], wird `p0` zurückgegeben.
pub fn rational_cubic_point(points: [Vec2; 4], weights: [f32; 4], t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let basis = [
        inv * inv * inv,
        3.0 * t * inv * inv,
        3.0 * t * t * inv,
        t * t * t,
    ];

    let mut numerator = Vec2::ZERO;
    let mut denominator = 0.0;
    for ((p, w), b) in points.iter().zip(weights).zip(basis) {
        let wb = w * b;
        numerator += *p * wb;
        denominator += wb;
    }

    if denominator.abs() < RATIONAL_DENOMINATOR_EPSILON {
        return points[0];
    }
    numerator / denominator
}

/// Prüft eine Tension auf Endlichkeit und Bereich.
pub fn validate_tension(tension: f32) -> Result<f32, ModelError> {
    if !tension.is_finite() {
        return Err(ModelError::NonFiniteValue);
    }
    let (min, max) = TENSION_RANGE;
    if tension < min || tension > max {
        return Err(ModelError::TensionOutOfRange { value: tension });
    }
    Ok(tension)
}

/// Ein auswertbares Kurvensegment mit Parameter `t ∈ [0, 1]`.
pub trait SegmentCurve {
    /// Punkt bei Parameter `t`.
    fn position(&self, t: f32) -> Vec2;

    /// Lazy-Abtastung mit `steps` Schritten (siehe [`SegmentSamples`]).
    fn samples(self, steps: usize) -> SegmentSamples<Self>
    where
        Self: Sized,
    {
        SegmentSamples::new(self, steps)
    }
}

/// Cardinal-Segment in Basis-Matrix-Form.
///
/// Die Koeffizienten `a + b·t + c·t² + d·t³` werden einmal pro Segment
/// berechnet (`C = M·G`), danach ist jede Auswertung ein Polynom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalSegment {
    anchors: [Vec2; 2],
    coeffs: [Vec2; 4],
}

impl CardinalSegment {
    /// Baut das Segment aus vier Kontrollpunkten und der Tension.
    pub fn new(points: [Vec2; 4], tension: f32) -> Self {
        let s = (1.0 - tension) * 0.5;
        let char_matrix = [
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, s, 0.0],
            [2.0 * s, s - 3.0, 3.0 - 2.0 * s, -s],
            [-s, 2.0 - s, s - 2.0, s],
        ];
        let coeffs = char_matrix.map(|row| {
            row.iter()
                .zip(points)
                .fold(Vec2::ZERO, |acc, (&m, p)| acc + p * m)
        });
        Self {
            anchors: [points[1], points[2]],
            coeffs,
        }
    }

    /// Polynom-Koeffizienten `[a, b, c, d]`.
    pub fn coefficients(&self) -> [Vec2; 4] {
        self.coeffs
    }
}

impl SegmentCurve for CardinalSegment {
    fn position(&self, t: f32) -> Vec2 {
        if t <= 0.0 {
            return self.anchors[0];
        }
        if t >= 1.0 {
            return self.anchors[1];
        }
        let [a, b, c, d] = self.coeffs;
        a + (b + (c + d * t) * t) * t
    }
}

/// Rationales kubisches Segment zwischen zwei Nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalSegment {
    pub points: [Vec2; 4],
    pub weights: Vec4,
}

impl RationalSegment {
    /// `p0 = start.position`, `p1 = start.handle_out`, `p2 = end.handle_in`,
    /// `p3 = end.position`; Gewichte aus den zugehörigen Node-Feldern.
    pub fn from_nodes(start: &Node, end: &Node) -> Self {
        Self {
            points: [start.position, start.handle_out, end.handle_in, end.position],
            weights: Vec4::new(
                start.weight_position,
                start.weight_out,
                end.weight_in,
                end.weight_position,
            ),
        }
    }
}

impl SegmentCurve for RationalSegment {
    fn position(&self, t: f32) -> Vec2 {
        rational_cubic_point(self.points, self.weights.to_array(), t)
    }
}

/// Lazy, endliche und neu startbare Abtastung eines Segments.
///
/// Liefert `t = k/S` für `k = 1..=S`, also ohne den Startpunkt: so lassen sich
/// aufeinanderfolgende Segmente ohne Doppelpunkte aneinanderhängen.
#[derive(Debug, Clone)]
pub struct SegmentSamples<C> {
    curve: C,
    steps: usize,
    next: usize,
}

impl<C: SegmentCurve> SegmentSamples<C> {
    /// `steps` wird auf mindestens 1 angehoben.
    pub fn new(curve: C, steps: usize) -> Self {
        Self {
            curve,
            steps: steps.max(1),
            next: 1,
        }
    }

    /// Setzt die Abtastung auf den Anfang zurück.
    pub fn restart(&mut self) {
        self.next = 1;
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<C: SegmentCurve> Iterator for SegmentSamples<C> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.next > self.steps {
            return None;
        }
        let t = self.next as f32 / self.steps as f32;
        self.next += 1;
        Some(self.curve.position(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<C: SegmentCurve> ExactSizeIterator for SegmentSamples<C> {}

/// Welches Verfahren die Kontur auswertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveScheme {
    /// Tension-gesteuerter Spline nur durch die Node-Positionen
    Cardinal,
    /// Gewichtete Bézier-Segmente über Handles
    #[default]
    RationalCubic,
}

/// Auswertungs-Konfiguration der Kontur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    pub scheme: CurveScheme,
    pub tension: f32,
    pub cardinal_steps: usize,
    pub rational_steps: usize,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            scheme: CurveScheme::default(),
            tension: 0.0,
            cardinal_steps: 30,
            rational_steps: 40,
        }
    }
}

impl CurveSettings {
    /// Schrittzahl pro Segment für das aktive Verfahren.
    pub fn steps(&self) -> usize {
        match self.scheme {
            CurveScheme::Cardinal => self.cardinal_steps,
            CurveScheme::RationalCubic => self.rational_steps,
        }
    }

    /// Setzt die Tension nach Bereichsprüfung.
    pub fn set_tension(&mut self, tension: f32) -> Result<(), ModelError> {
        self.tension = validate_tension(tension)?;
        Ok(())
    }
}

/// Cardinal-Segment `index` der zyklischen Kontur.
pub fn cardinal_segment(model: &NodeModel, index: usize, tension: f32) -> CardinalSegment {
    let n = model.len();
    let nodes = model.nodes();
    let i = index % n;
    let points = [
        nodes[model.prev_index(i)].position,
        nodes[i].position,
        nodes[(i + 1) % n].position,
        nodes[(i + 2) % n].position,
    ];
    CardinalSegment::new(points, tension)
}

/// Rationales Segment `index` der zyklischen Kontur.
pub fn rational_segment(model: &NodeModel, index: usize) -> RationalSegment {
    let (start, end) = model.segment(index);
    RationalSegment::from_nodes(start, end)
}

/// Wertet die gesamte geschlossene Kontur aus.
///
/// Ergebnis: Position von Node 0, danach `S` Punkte pro Segment. Der letzte
/// Punkt fällt mit dem ersten zusammen.
pub fn sample_outline(model: &NodeModel, settings: &CurveSettings) -> Vec<Vec2> {
    let steps = settings.steps().max(1);
    let mut outline = Vec::with_capacity(model.len() * steps + 1);
    outline.push(model.nodes()[0].position);

    for i in 0..model.len() {
        match settings.scheme {
            CurveScheme::Cardinal => {
                outline.extend(cardinal_segment(model, i, settings.tension).samples(steps));
            }
            CurveScheme::RationalCubic => {
                outline.extend(rational_segment(model, i).samples(steps));
            }
        }
    }

    outline
}
