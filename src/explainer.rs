use crate::config::HeuristicConfig;
use crate::signals::UrlSignals;
use serde::{Deserialize, Serialize};

/// Severity tier of a reason. Ordering here is display-tier precedence, not
/// derive-based comparison: headline selection walks [`HEADLINE_TIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Positive,
}

/// Tiers that outrank plain detection order when picking the headline.
const HEADLINE_TIERS: [Severity; 2] = [Severity::Critical, Severity::High];

/// One human-readable justification tied to a fired signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Reason {
    fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Builds ranked reasons and the one-line explanation for a verdict.
pub struct Explainer {
    config: HeuristicConfig,
}

impl Default for Explainer {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Explainer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Reasons for every fired signal, in detection order.
    ///
    /// Excessive separators contribute to the score but never emit a reason.
    /// The positive HTTPS reason is emitted only when the list is still empty
    /// when the scheme check runs, so any earlier entry suppresses it.
    pub fn reasons(&self, signals: &UrlSignals) -> Vec<Reason> {
        let mut reasons = Vec::new();

        if signals.keyword_matches > 0 {
            if signals.keyword_matches >= self.config.limits.keyword_override_count {
                reasons.push(Reason::new(
                    Severity::High,
                    "Multiple Suspicious Keywords",
                    "The URL contains multiple phishing-related keywords. \
                     Legitimate sites rarely combine these words in URLs.",
                ));
            } else {
                reasons.push(Reason::new(
                    Severity::Medium,
                    "Suspicious Keywords Detected",
                    "The URL contains keywords commonly used in phishing attacks \
                     to create urgency or mimic trusted services.",
                ));
            }
        }

        if signals.ip_hostname {
            reasons.push(Reason::new(
                Severity::Critical,
                "IP Address in URL",
                "Legitimate websites use domain names, not IP addresses. \
                 This is a strong indicator of phishing.",
            ));
        }

        if signals.excessive_subdomains {
            reasons.push(Reason::new(
                Severity::Medium,
                "Too Many Subdomains",
                "The URL has an excessive number of subdomains, \
                 which is uncommon for legitimate sites.",
            ));
        }

        if signals.punycode {
            reasons.push(Reason::new(
                Severity::Medium,
                "Punycode Domain Detected",
                "This domain uses Punycode encoding, which can be used to create \
                 look-alike domains that appear legitimate but are actually different.",
            ));
        }

        if let Some(tld) = &signals.abused_tld {
            reasons.push(Reason::new(
                Severity::High,
                format!("Suspicious Top-Level Domain (.{})", tld),
                "This TLD is frequently abused by phishers because it's cheap \
                 and has lax registration policies.",
            ));
        }

        if signals.shortener.is_some() {
            reasons.push(Reason::new(
                Severity::High,
                "URL Shortener Detected",
                "URL shorteners hide the true destination, making it impossible \
                 to verify legitimacy before clicking.",
            ));
        }

        if signals.long_url {
            reasons.push(Reason::new(
                Severity::Medium,
                "Very Long URL",
                "The URL is unusually long, which phishers use to hide \
                 malicious content or make URLs look complex.",
            ));
        }

        if signals.plain_http {
            reasons.push(Reason::new(
                Severity::High,
                "No HTTPS Encryption",
                "This site uses HTTP instead of HTTPS, meaning your connection is \
                 not encrypted. Legitimate sites handling sensitive information \
                 always use HTTPS.",
            ));
        } else if signals.https && reasons.is_empty() {
            reasons.push(Reason::new(
                Severity::Positive,
                "Uses HTTPS Encryption",
                "The site uses HTTPS, which encrypts your connection and is a \
                 standard security practice.",
            ));
        }

        reasons
    }

    /// Pick the reason that leads the explanation: critical outranks high,
    /// high outranks detection order.
    pub fn headline<'a>(&self, reasons: &'a [Reason]) -> Option<&'a Reason> {
        for tier in HEADLINE_TIERS {
            if let Some(reason) = reasons.iter().find(|r| r.severity == tier) {
                return Some(reason);
            }
        }
        reasons.first()
    }

    /// One-line explanation, prefixed with a verdict marker.
    pub fn explanation(&self, phishing: bool, reasons: &[Reason]) -> String {
        let marker = if phishing { "PHISHING DETECTED" } else { "SAFE" };
        match self.headline(reasons) {
            Some(reason) => format!("{}: {}. {}", marker, reason.title, reason.description),
            None if phishing => {
                // Unreachable while the override rule holds, kept for safety.
                format!("{}: Multiple risk signals detected in the URL structure.", marker)
            }
            None => format!(
                "{}: No suspicious patterns detected. Uses expected domain \
                 structure and appears safe.",
                marker
            ),
        }
    }

    /// Plain-string flags for results that carry no structured reason list,
    /// e.g. a remote verdict that arrived with only a score.
    pub fn flags(&self, signals: &UrlSignals) -> Vec<String> {
        let mut flags = Vec::new();
        if signals.keyword_matches > 0 {
            flags.push(format!(
                "Suspicious keywords in URL ({} found)",
                signals.keyword_matches
            ));
        }
        if signals.ip_hostname {
            flags.push("IP address used as hostname".to_string());
        }
        if signals.excessive_subdomains {
            flags.push("Unusually many subdomains".to_string());
        }
        if signals.punycode {
            flags.push("Punycode domain (look-alike risk)".to_string());
        }
        if let Some(tld) = &signals.abused_tld {
            flags.push(format!("Suspicious or abused TLD (.{})", tld));
        }
        if signals.shortener.is_some() {
            flags.push("URL shortener detected".to_string());
        }
        if signals.long_url {
            flags.push("Very long URL".to_string());
        }
        if signals.excessive_separators {
            flags.push("Excessive separators (- or _)".to_string());
        }
        if signals.plain_http {
            flags.push("Not using HTTPS".to_string());
        }
        flags
    }

    /// Degraded-mode explanation: joins up to three re-derived flags.
    pub fn degraded_explanation(&self, phishing: bool, signals: &UrlSignals) -> String {
        if !phishing {
            return "SAFE: No suspicious patterns detected. Uses expected domain \
                    structure and appears safe."
                .to_string();
        }
        let flags = self.flags(signals);
        if flags.is_empty() {
            return "PHISHING DETECTED: Multiple risk signals detected in the URL \
                    structure."
                .to_string();
        }
        let top: Vec<&str> = flags.iter().take(3).map(|s| s.as_str()).collect();
        format!("PHISHING DETECTED: {}.", top.join("; "))
    }
}
