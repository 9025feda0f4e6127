use serde::Serialize;

/// Score used when the model's SCORE value is missing or not numeric.
pub const DEFAULT_SCORE: f64 = 8.5;
/// Gravity used when the model's GRAVITY value is missing or not numeric.
pub const DEFAULT_GRAVITY: f64 = 120.0;

/// A candidate affiliate product extracted from model output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 1-based index of the source block.
    pub id: usize,
    pub name: String,
    pub description: String,
    pub price: String,
    pub commission: String,
    pub score: f64,
    pub gravity: f64,
    pub epc: String,
    pub cvr: String,
    pub pain_points: Vec<String>,
    pub emotions: Vec<String>,
    pub triggers: Vec<String>,
}

/// Display band for a product score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl Product {
    pub fn score_band(&self) -> ScoreBand {
        if self.score >= 9.0 {
            ScoreBand::High
        } else if self.score >= 7.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}
