//! Risk Report Rendering
//!
//! Turns a prediction response into the lines shown to the user. The
//! display band is derived from the server's `risk_level` label by exact
//! match with a high-risk fallback; the label itself is echoed verbatim.

use crate::logic::backend::client::PredictionResponse;

/// Display band for a risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Map a server label to its band. Exact match only; anything
    /// unrecognized (including "HIGH RISK") lands on the high band.
    pub fn from_level(level: &str) -> Self {
        match level {
            "LOW RISK" => RiskBand::Low,
            "MODERATE RISK" => RiskBand::Moderate,
            _ => RiskBand::High,
        }
    }

    /// Display class carried alongside the label
    pub fn class_name(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
        }
    }

    /// Marker glyph used in the console rendering
    fn marker(&self) -> &'static str {
        match self {
            RiskBand::Low => "[+]",
            RiskBand::Moderate => "[~]",
            RiskBand::High => "[!]",
        }
    }
}

/// Two-decimal percentage label, whatever the input precision
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Render a prediction response as display lines
pub fn render(response: &PredictionResponse, verbose: bool) -> Vec<String> {
    let band = RiskBand::from_level(&response.risk_level);

    let mut lines = Vec::new();
    lines.push(format!(
        "{} Risk assessment: {} ({})",
        band.marker(),
        response.risk_level,
        band.class_name()
    ));
    lines.push(format!(
        "    Disease probability:    {}",
        format_percent(response.disease_probability)
    ));
    lines.push(format!(
        "    No-disease probability: {}",
        format_percent(response.no_disease_probability)
    ));

    if !response.recommendation.is_empty() {
        lines.push("    Recommendations:".to_string());
        for (i, item) in response.recommendation.iter().enumerate() {
            lines.push(format!("      {}. {}", i + 1, item));
        }
    }

    if verbose {
        lines.push(format!(
            "    Model output: prediction={}, risk_probability={:.4}, color={}",
            response.prediction, response.risk_probability, response.color
        ));
    }

    lines
}
