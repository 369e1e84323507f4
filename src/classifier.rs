use crate::config::HeuristicConfig;
use crate::explainer::{Explainer, Reason};
use crate::scorer::{percentages, Scorer};
use crate::signals::SignalDetector;
use serde::{Deserialize, Serialize};

/// Wire-shaped classification output.
///
/// `heuristic` distinguishes local verdicts from remote-service ones when
/// both flow through the same consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub score: f64,
    pub phishing: bool,
    pub heuristic: bool,
    pub safety_percentage: f64,
    pub risk_percentage: f64,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<Reason>,
}

/// Partial result from the remote classification service. Only `score` and
/// `phishing` are guaranteed; everything else may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteResult {
    pub score: f64,
    pub phishing: bool,
    #[serde(default)]
    pub safety_percentage: Option<f64>,
    #[serde(default)]
    pub risk_percentage: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub reasons: Option<Vec<Reason>>,
}

/// The heuristic URL risk classifier: extraction, scoring, explanation.
pub struct Classifier {
    detector: SignalDetector,
    scorer: Scorer,
    explainer: Explainer,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Classifier {
    pub fn new(config: HeuristicConfig) -> Self {
        Self {
            detector: SignalDetector::new(config.clone()),
            scorer: Scorer::new(config.clone()),
            explainer: Explainer::new(config),
        }
    }

    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = HeuristicConfig::load_from_file(path)?;
        Ok(Self::new(config))
    }

    /// Classify a raw URL or text snippet. Total: never fails, never panics;
    /// unparseable input degrades to string-level signals plus the base score.
    pub fn classify(&self, raw: &str) -> ClassificationResult {
        let signals = self.detector.detect(raw);
        let breakdown = self.scorer.score(&signals);
        let reasons = self.explainer.reasons(&signals);
        let explanation = self.explainer.explanation(breakdown.phishing, &reasons);
        let (safety_percentage, risk_percentage) = percentages(breakdown.score);

        log::debug!(
            "classified {:?}: score={:.3} phishing={} override={} signals={:?}",
            raw,
            breakdown.score,
            breakdown.phishing,
            breakdown.critical_override,
            signals
        );

        ClassificationResult {
            score: breakdown.score,
            phishing: breakdown.phishing,
            heuristic: true,
            safety_percentage,
            risk_percentage,
            explanation,
            reasons,
        }
    }

    /// Complete a partial remote result without overriding its verdict.
    ///
    /// Missing percentages are derived from the remote score; a missing
    /// explanation is built from the remote reasons when present, otherwise
    /// from signals re-derived off the URL (degraded mode).
    pub fn complete_remote(&self, raw: &str, remote: RemoteResult) -> ClassificationResult {
        let (derived_safety, derived_risk) = percentages(remote.score);
        let reasons = remote.reasons.unwrap_or_default();

        let explanation = match remote.explanation {
            Some(explanation) => explanation,
            None if !reasons.is_empty() => self.explainer.explanation(remote.phishing, &reasons),
            None => {
                let signals = self.detector.detect(raw);
                self.explainer.degraded_explanation(remote.phishing, &signals)
            }
        };

        ClassificationResult {
            score: remote.score,
            phishing: remote.phishing,
            heuristic: false,
            safety_percentage: remote.safety_percentage.unwrap_or(derived_safety),
            risk_percentage: remote.risk_percentage.unwrap_or(derived_risk),
            explanation,
            reasons,
        }
    }
}
