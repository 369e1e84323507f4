use crate::config::HeuristicConfig;
use regex::Regex;
use url::Url;

/// Every risk observation derived from a single URL string.
///
/// Pure data: scoring and explanation both read from this one struct so the
/// two paths can never drift apart.
#[derive(Debug, Clone, Default)]
pub struct UrlSignals {
    pub keyword_matches: usize,
    pub ip_hostname: bool,
    pub excessive_subdomains: bool,
    pub punycode: bool,
    pub abused_tld: Option<String>,
    pub shortener: Option<String>,
    pub long_url: bool,
    pub excessive_separators: bool,
    pub plain_http: bool,
    pub https: bool,
    pub has_at: bool,
    pub hostname: Option<String>,
}

impl UrlSignals {
    /// True when nothing risk-relevant fired (the base score still applies).
    pub fn is_clean(&self) -> bool {
        self.keyword_matches == 0
            && !self.ip_hostname
            && !self.excessive_subdomains
            && !self.punycode
            && self.abused_tld.is_none()
            && self.shortener.is_none()
            && !self.long_url
            && !self.excessive_separators
            && !self.plain_http
            && !self.has_at
    }
}

/// Extracts [`UrlSignals`] from raw URL text.
pub struct SignalDetector {
    config: HeuristicConfig,
    keyword_regex: Regex,
    tld_regex: Regex,
    ip_regex: Regex,
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl SignalDetector {
    pub fn new(config: HeuristicConfig) -> Self {
        // List entries are escaped, so the alternations always compile.
        let keywords = config
            .suspicious_keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let tlds = config
            .abused_tlds
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            keyword_regex: Regex::new(&format!(r"\b(?:{})\b", keywords)).unwrap(),
            tld_regex: Regex::new(&format!(r"\.({})(?:[:/]|$)", tlds)).unwrap(),
            ip_regex: Regex::new(r"^\d+\.\d+\.\d+\.\d+$").unwrap(),
            config,
        }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Derive the full signal set from a raw string.
    ///
    /// Never fails: when the string cannot be parsed as a URL, every
    /// hostname-dependent signal stays false and the string-level signals
    /// still apply.
    pub fn detect(&self, raw: &str) -> UrlSignals {
        let url = raw.to_lowercase();
        let limits = &self.config.limits;

        let mut signals = UrlSignals {
            keyword_matches: self.keyword_regex.find_iter(&url).count(),
            has_at: url.contains('@'),
            plain_http: url.starts_with("http://"),
            https: url.starts_with("https://"),
            long_url: url.len() > limits.long_url_length,
            excessive_separators: url.chars().filter(|c| *c == '-' || *c == '_').count()
                > limits.separator_limit,
            abused_tld: self
                .tld_regex
                .captures(&url)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string()),
            shortener: self
                .config
                .shorteners
                .iter()
                .find(|s| url.contains(s.as_str()))
                .cloned(),
            ..UrlSignals::default()
        };

        if let Some(host) = hostname_of(&url) {
            signals.ip_hostname = self.ip_regex.is_match(&host);
            signals.excessive_subdomains = host.matches('.').count() >= limits.subdomain_dots;
            signals.punycode = host.starts_with("xn--");
            signals.hostname = Some(host);
        }

        signals
    }
}

/// Hostname of the URL, prepending `http://` for scheme-less input.
fn hostname_of(url: &str) -> Option<String> {
    let full = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    };
    Url::parse(&full)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}
