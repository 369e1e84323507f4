use crate::config::HeuristicConfig;
use crate::signals::UrlSignals;

/// Score plus the two-tier verdict derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Aggregated risk in [0, 1], rounded to 3 decimal places.
    pub score: f64,
    /// True when an individually strong signal forced the verdict.
    pub critical_override: bool,
    pub phishing: bool,
}

/// Aggregates weighted signal contributions and applies the decision policy.
pub struct Scorer {
    config: HeuristicConfig,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Scorer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, signals: &UrlSignals) -> ScoreBreakdown {
        let weights = &self.config.weights;
        let mut score = weights.base;

        if signals.keyword_matches > 0 {
            score += (signals.keyword_matches as f64 * weights.keyword).min(weights.keyword_cap);
        }
        if signals.ip_hostname {
            score += weights.ip_hostname;
        }
        if signals.excessive_subdomains {
            score += weights.subdomains;
        }
        if signals.punycode {
            score += weights.punycode;
        }
        if signals.abused_tld.is_some() {
            score += weights.abused_tld;
        }
        if signals.shortener.is_some() {
            score += weights.shortener;
        }
        if signals.long_url {
            score += weights.long_url;
        }
        if signals.excessive_separators {
            score += weights.separators;
        }
        if signals.plain_http {
            score += weights.plain_http;
        }

        let score = round3(score.min(1.0));
        let critical_override = self.has_critical_override(signals);
        let phishing = critical_override || score > self.config.limits.phishing_threshold;

        ScoreBreakdown {
            score,
            critical_override,
            phishing,
        }
    }

    /// Signals that are each strong enough evidence on their own that
    /// score-averaging would dilute them.
    fn has_critical_override(&self, signals: &UrlSignals) -> bool {
        signals.ip_hostname
            || signals.has_at
            || signals.keyword_matches >= self.config.limits.keyword_override_count
            || signals.shortener.is_some()
            || signals.abused_tld.is_some()
            || signals.plain_http
    }
}

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage pair derived from an already-rounded score.
pub fn percentages(score: f64) -> (f64, f64) {
    let safety = round1(clamp01(1.0 - score) * 100.0);
    let risk = round1(clamp01(score) * 100.0);
    (safety, risk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalDetector;

    fn score_url(url: &str) -> ScoreBreakdown {
        let detector = SignalDetector::default();
        Scorer::default().score(&detector.detect(url))
    }

    #[test]
    fn test_base_score_only() {
        let breakdown = score_url("https://example.com");
        assert_eq!(breakdown.score, 0.08);
        assert!(!breakdown.critical_override);
        assert!(!breakdown.phishing);
    }

    #[test]
    fn test_score_clamped_and_rounded() {
        // IP + 3 keywords + HTTP + 3-dot hostname sums past 1.0
        let breakdown = score_url("http://192.168.1.10/login/verify/account");
        assert_eq!(breakdown.score, 1.0);
        assert!(breakdown.phishing);
    }

    #[test]
    fn test_keyword_contribution_capped() {
        let detector = SignalDetector::default();
        let signals = detector.detect("https://login-signin-verify-update-confirm.example.com");
        assert_eq!(signals.keyword_matches, 5);
        let breakdown = Scorer::default().score(&signals);
        // 0.08 base + 0.45 cap + 0.15 subdomains... hostname has 2 dots, so
        // just base + cap
        assert_eq!(breakdown.score, 0.53);
    }

    #[test]
    fn test_threshold_is_strict() {
        // one keyword on HTTPS: 0.08 + 0.15 = 0.23, below the 0.25 threshold
        let breakdown = score_url("https://login.example.com");
        assert_eq!(breakdown.score, 0.23);
        assert!(!breakdown.phishing);

        // keyword + excessive subdomains crosses it without any override
        let breakdown = score_url("https://login.a.b.example.com");
        assert_eq!(breakdown.score, 0.38);
        assert!(!breakdown.critical_override);
        assert!(breakdown.phishing);
    }

    #[test]
    fn test_override_ip() {
        let breakdown = score_url("https://192.168.1.10/");
        assert!(breakdown.critical_override);
        assert!(breakdown.phishing);
    }

    #[test]
    fn test_override_at_sign() {
        let breakdown = score_url("https://user@example.com");
        assert!(breakdown.critical_override);
        assert!(breakdown.phishing);
    }

    #[test]
    fn test_override_shortener_despite_https() {
        let breakdown = score_url("https://bit.ly/abc123");
        assert!(breakdown.critical_override);
        assert!(breakdown.phishing);
        // aggregate alone would also cross: 0.08 + 0.25 = 0.33
        assert_eq!(breakdown.score, 0.33);
    }

    #[test]
    fn test_override_abused_tld() {
        let breakdown = score_url("https://example.xyz");
        assert!(breakdown.critical_override);
        assert!(breakdown.phishing);
        assert_eq!(breakdown.score, 0.18);
    }

    #[test]
    fn test_override_plain_http() {
        let breakdown = score_url("http://example.com");
        assert!(breakdown.critical_override);
        assert!(breakdown.phishing);
        assert_eq!(breakdown.score, 0.16);
    }

    #[test]
    fn test_override_keyword_count() {
        let breakdown = score_url("https://secure-login-verify.example.com");
        assert!(breakdown.critical_override);
        assert!(breakdown.phishing);
    }

    #[test]
    fn test_monotonicity() {
        let urls = [
            "https://example.com",
            "https://login.example.com",
            "https://login.verify.example.com",
            "https://login.verify.a.b.example.com",
        ];
        let scores: Vec<f64> = urls.iter().map(|u| score_url(u).score).collect();
        for pair in scores.windows(2) {
            assert!(pair[1] >= pair[0], "scores must not decrease: {:?}", scores);
        }
    }

    #[test]
    fn test_percentages_from_rounded_score() {
        let (safety, risk) = percentages(0.08);
        assert_eq!(safety, 92.0);
        assert_eq!(risk, 8.0);

        let (safety, risk) = percentages(1.0);
        assert_eq!(safety, 0.0);
        assert_eq!(risk, 100.0);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round1(92.04), 92.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(-0.5), 0.0);
    }
}
