//! Compact listing of imported exchanges.

use har2loli_domain::Exchange;
use serde::Serialize;

const MAX_URL_CHARS: usize = 80;

/// One line of an exchange listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeSummary {
    /// Position in the capture, used to address the exchange in a project.
    pub index: usize,
    /// Request method as captured.
    pub method: String,
    /// Request URL, shortened for display.
    pub url: String,
    /// Captured response status.
    pub status: u16,
}

impl std::fmt::Display for ExchangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:<7} {:>3}  {}",
            self.index, self.method, self.status, self.url
        )
    }
}

/// Summarizes exchanges for listing, truncating long URLs.
#[must_use]
pub fn summarize(exchanges: &[Exchange]) -> Vec<ExchangeSummary> {
    exchanges
        .iter()
        .enumerate()
        .map(|(index, exchange)| ExchangeSummary {
            index,
            method: exchange.request.method.clone(),
            url: truncate(&exchange.request.url),
            status: exchange.response.status,
        })
        .collect()
}

fn truncate(url: &str) -> String {
    if url.chars().count() > MAX_URL_CHARS {
        let mut short: String = url.chars().take(MAX_URL_CHARS - 3).collect();
        short.push_str("...");
        short
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use har2loli_domain::{Request, Response};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_line() {
        let exchanges = vec![Exchange::new(
            Request::post("https://example.com/login"),
            Response::new(302),
        )];
        let summary = summarize(&exchanges);

        assert_eq!(summary[0].to_string(), "[0] POST    302  https://example.com/login");
    }

    #[test]
    fn test_long_url_truncated() {
        let url = format!("https://example.com/{}", "a".repeat(100));
        let summary = summarize(&[Exchange::new(Request::get(&url), Response::new(200))]);

        assert_eq!(summary[0].url.chars().count(), MAX_URL_CHARS);
        assert!(summary[0].url.ends_with("..."));
        assert!(url.starts_with(summary[0].url.trim_end_matches("...")));
    }

    #[test]
    fn test_exact_length_url_kept() {
        let url = format!("https://x/{}", "b".repeat(MAX_URL_CHARS - 10));
        let summary = summarize(&[Exchange::new(Request::get(&url), Response::new(200))]);
        assert_eq!(summary[0].url, url);
    }
}
