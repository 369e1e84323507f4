pub mod classifier;
pub mod config;
pub mod explainer;
pub mod scorer;
pub mod signals;

pub use classifier::{ClassificationResult, Classifier, RemoteResult};
pub use config::{HeuristicConfig, ScoreWeights, SignalLimits};
pub use explainer::{Explainer, Reason, Severity};
pub use scorer::{ScoreBreakdown, Scorer};
pub use signals::{SignalDetector, UrlSignals};
