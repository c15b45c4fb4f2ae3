use crate::models::RawDocument;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use scraper::{ElementRef, Html};
use std::time::Duration;
use tracing::debug;
use webchat_config::CrawlerConfig;

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "svg"];

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "title", "tr", "ul",
];

/// Produces the readable text of a page.
#[async_trait]
pub trait Crawler: Send + Sync {
    async fn crawl(&self, url: &str) -> Result<String>;
}

/// Fetches a page over HTTP(S) and strips it down to visible text.
pub struct HttpCrawler {
    client: reqwest::Client,
}

impl HttpCrawler {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            // each blocking crawl runs on its own runtime; pooled connections would outlive it
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Crawler for HttpCrawler {
    async fn crawl(&self, url: &str) -> Result<String> {
        let parsed = parse_url(url)?;
        let res = self
            .client
            .get(parsed)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", url))?
            .error_for_status()?;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_ascii_lowercase();
        let body = res.text().await.context("failed to read response body")?;
        debug!(url, bytes = body.len(), %content_type, "fetched page");

        if content_type.contains("html") {
            Ok(extract_text(&body))
        } else if content_type.starts_with("text/") {
            Ok(body)
        } else {
            Err(anyhow!("unsupported content type {} for {}", content_type, url))
        }
    }
}

fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).with_context(|| format!("invalid URL: {}", url))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(anyhow!("unsupported URL scheme '{}' in {}", other, url)),
    }
}

/// Drive a crawl to completion from synchronous code.
pub fn crawl_blocking(crawler: &dyn Crawler, url: &str) -> Result<RawDocument> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start crawler runtime")?;
    let text = runtime.block_on(crawler.crawl(url))?;
    Ok(RawDocument::new(url.trim(), text))
}

/// Visible text of an HTML document, one text run per line.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = LineCollector::default();
    lines.walk(document.root_element());
    lines.finish()
}

#[derive(Default)]
struct LineCollector {
    lines: Vec<String>,
    current: String,
}

impl LineCollector {
    fn walk(&mut self, element: ElementRef<'_>) {
        let tag = element.value().name();
        if SKIPPED_TAGS.contains(&tag) {
            return;
        }
        let block = BLOCK_TAGS.contains(&tag);
        if block {
            self.break_line();
        }
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                self.push_text(text);
            } else if let Some(child_element) = ElementRef::wrap(child) {
                self.walk(child_element);
            }
        }
        if block {
            self.break_line();
        }
    }

    fn push_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            if !self.current.is_empty() {
                self.current.push(' ');
            }
            self.current.push_str(word);
        }
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_visible_text_only() {
        let html = r#"<html><head><title>Capitals</title><style>p { color: red }</style>
            <script>var x = "hidden";</script></head>
            <body><h1>France</h1><p>Paris is the <b>capital</b> of France.</p>
            <noscript>enable js</noscript>
            <ul><li>Eiffel Tower</li><li>Louvre</li></ul></body></html>"#;
        let text = extract_text(html);
        assert_eq!(
            text,
            "Capitals\nFrance\nParis is the capital of France.\nEiffel Tower\nLouvre"
        );
        assert!(!text.contains("hidden"));
        assert!(!text.contains("enable js"));
    }

    #[test]
    fn empty_page_yields_empty_text() {
        assert_eq!(extract_text("<html><body>   </body></html>"), "");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(parse_url("ftp://example.com/file").is_err());
        assert!(parse_url("not a url").is_err());
        assert!(parse_url(" https://example.com/page ").is_ok());
    }

    struct StaticCrawler(&'static str);

    #[async_trait]
    impl Crawler for StaticCrawler {
        async fn crawl(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingCrawler;

    #[async_trait]
    impl Crawler for FailingCrawler {
        async fn crawl(&self, url: &str) -> Result<String> {
            Err(anyhow!("connection refused: {}", url))
        }
    }

    #[test]
    fn crawl_blocking_tags_document_with_url() {
        let doc = crawl_blocking(&StaticCrawler("hello"), "https://example.com").unwrap();
        assert_eq!(doc.source(), "https://example.com");
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn crawl_blocking_propagates_failure() {
        let err = crawl_blocking(&FailingCrawler, "https://down.example").unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
