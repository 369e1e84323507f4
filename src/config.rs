use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Heuristic configuration: signal lists, score weights, and decision limits.
///
/// All lists are plain data so that new keywords, TLDs, or shortener domains
/// can be added without touching the scoring logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeuristicConfig {
    pub suspicious_keywords: Vec<String>,
    pub abused_tlds: Vec<String>,
    pub shorteners: Vec<String>,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub limits: SignalLimits,
}

/// Additive score contribution for each signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base: f64,
    pub keyword: f64,     // per keyword match
    pub keyword_cap: f64, // maximum total keyword contribution
    pub ip_hostname: f64,
    pub subdomains: f64,
    pub punycode: f64,
    pub abused_tld: f64,
    pub shortener: f64,
    pub long_url: f64,
    pub separators: f64,
    pub plain_http: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalLimits {
    /// Scores above this are phishing even without a critical override.
    pub phishing_threshold: f64,
    /// Keyword matches at or above this count force a phishing verdict.
    pub keyword_override_count: usize,
    /// URLs longer than this many characters count as "long".
    pub long_url_length: usize,
    /// More than this many `-`/`_` characters counts as excessive.
    pub separator_limit: usize,
    /// Hostnames with at least this many dots count as excessive subdomains.
    pub subdomain_dots: usize,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 0.08,
            keyword: 0.15,
            keyword_cap: 0.45,
            ip_hostname: 0.35,
            subdomains: 0.15,
            punycode: 0.12,
            abused_tld: 0.10,
            shortener: 0.25,
            long_url: 0.12,
            separators: 0.08,
            plain_http: 0.08,
        }
    }
}

impl Default for SignalLimits {
    fn default() -> Self {
        Self {
            phishing_threshold: 0.25,
            keyword_override_count: 3,
            long_url_length: 75,
            separator_limit: 6,
            subdomain_dots: 3,
        }
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            suspicious_keywords: [
                "login",
                "signin",
                "secure",
                "update",
                "verify",
                "account",
                "confirm",
                "bank",
                "paypal",
                "webscr",
                "password",
                "reset",
                "unlock",
                "suspended",
                "expired",
                "urgent",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            abused_tlds: [
                "zip", "mov", "ru", "tk", "cn", "top", "gq", "ml", "ga", "cf", "xyz", "click",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            shorteners: [
                "bit.ly",
                "tinyurl",
                "t.co",
                "goo.gl",
                "ow.ly",
                "is.gd",
                "buff.ly",
                "short.link",
                "cutt.ly",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            weights: ScoreWeights::default(),
            limits: SignalLimits::default(),
        }
    }
}

impl HeuristicConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: HeuristicConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn generate_default(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let config = Self::default();
        let yaml = serde_yaml::to_string(&config)?;
        fs::write(Path::new(path), yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let config = HeuristicConfig::default();
        assert_eq!(config.suspicious_keywords.len(), 16);
        assert_eq!(config.abused_tlds.len(), 12);
        assert_eq!(config.shorteners.len(), 9);
        assert!(config.suspicious_keywords.contains(&"paypal".to_string()));
        assert!(config.shorteners.contains(&"bit.ly".to_string()));
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.base, 0.08);
        assert_eq!(weights.ip_hostname, 0.35);
        assert_eq!(weights.keyword_cap, 0.45);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = HeuristicConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: HeuristicConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.suspicious_keywords, config.suspicious_keywords);
        assert_eq!(parsed.limits.phishing_threshold, 0.25);
    }

    #[test]
    fn test_partial_config_uses_default_weights() {
        let yaml = r#"
suspicious_keywords: ["login"]
abused_tlds: ["xyz"]
shorteners: ["bit.ly"]
"#;
        let config: HeuristicConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.suspicious_keywords.len(), 1);
        assert_eq!(config.weights.base, 0.08);
        assert_eq!(config.limits.long_url_length, 75);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(HeuristicConfig::load_from_file("/nonexistent/heuristics.yaml").is_err());
    }
}
