//! Article content extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing. Extraction runs an
//! ordered list of strategies and returns the first non-empty text found.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;

/// Browser-like User-Agent sent by the raw-text fallback fetch
const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Timeout for the raw-text fallback fetch
const FALLBACK_TIMEOUT: Duration = Duration::from_secs(10);

/// Strategies tried in order until one yields non-empty text
const STRATEGIES: &[Strategy] = &[Strategy::Article, Strategy::RawText];

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("error extracting content: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Could not extract content from the URL")]
    NoContent,
}

/// One way of turning a raw web page into plain article text.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Structured article parse: main-content selectors, paragraph harvest
    Article,
    /// Generic markup strip: every visible text node, scripts and styles dropped
    RawText,
}

/// Fetches a URL and extracts its article text.
pub struct Extractor {
    client: Client,
}

impl Extractor {
    /// Create an extractor with its own HTTP client.
    ///
    /// The client carries no global timeout; only the fallback fetch is
    /// bounded, per request.
    pub fn new() -> Result<Self, ExtractError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Fetch `url` and return its plain-text article body.
    ///
    /// A strategy that cleanly finds no text falls through to the next one in
    /// the list; a strategy that fails aborts the whole chain. When every
    /// strategy comes back empty the URL has no extractable content.
    pub async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        for strategy in STRATEGIES {
            let text = self.run(*strategy, url).await?;
            if !text.trim().is_empty() {
                return Ok(text);
            }
        }
        Err(ExtractError::NoContent)
    }

    async fn run(&self, strategy: Strategy, url: &str) -> Result<String, ExtractError> {
        match strategy {
            Strategy::Article => self.fetch_article(url).await,
            Strategy::RawText => self.fetch_raw_text(url).await,
        }
    }

    /// Structured strategy: download the page and harvest article text.
    async fn fetch_article(&self, url: &str) -> Result<String, ExtractError> {
        let response = self.client.get(url).send().await?;
        let html = response.text().await?;
        let document = Html::parse_document(&html);
        Ok(article_text(&document))
    }

    /// Fallback strategy: plain GET with a browser User-Agent and a fixed
    /// timeout, then strip the markup down to its visible text.
    async fn fetch_raw_text(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, FALLBACK_USER_AGENT)
            .timeout(FALLBACK_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        let document = Html::parse_document(&html);
        Ok(visible_text(&document))
    }
}

/// Extract readable article text from the page
fn article_text(document: &Html) -> String {
    // Try to find main content areas first
    let main_selectors = ["article", "main", "[role='main']", ".content", "#content"];

    for selector_str in main_selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = paragraph_text(element);
                if !text.trim().is_empty() {
                    return text;
                }
            }
        }
    }

    // Fall back to harvesting from the whole document
    paragraph_text(document.root_element())
}

/// Collect text from paragraphs, headings and list items under `element`
fn paragraph_text(element: ElementRef) -> String {
    let content_selector = Selector::parse("p, h1, h2, h3, h4, h5, h6, li").unwrap();

    let mut paragraphs: Vec<String> = Vec::new();

    for element in element.select(&content_selector) {
        let text: String = element.text().collect::<Vec<_>>().join(" ");
        let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if !cleaned.is_empty() && cleaned.len() > 20 {
            paragraphs.push(cleaned);
        }
    }

    paragraphs.join("\n\n")
}

/// Collect every visible text node in the document, one per line,
/// skipping script and style subtrees
fn visible_text(document: &Html) -> String {
    let mut lines: Vec<String> = Vec::new();
    collect_visible(document.root_element(), &mut lines);
    lines.join("\n")
}

fn collect_visible(element: ElementRef, lines: &mut Vec<String>) {
    if matches!(element.value().name(), "script" | "style") {
        return;
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_visible(child_element, lines);
        }
    }
}
