use std::fmt;

use serde::{Deserialize, Serialize};

/// Which curve of a function a series holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Activation,
    Derivative,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Activation => write!(f, "Activation"),
            SeriesKind::Derivative => write!(f, "Derivative"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered run of `(x, y)` samples of one curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<SamplePoint>,
}

impl SampledSeries {
    /// Display title, e.g. `"Derivative GeLU"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.kind, self.name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Activation and derivative curves of a single function over the same domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPair {
    pub activation: SampledSeries,
    pub derivative: SampledSeries,
}

impl SeriesPair {
    pub fn name(&self) -> &str {
        &self.activation.name
    }
}
