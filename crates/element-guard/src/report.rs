//! Accuracy report: tag guard vs. interface check
//!
//! Builds one element per tag and counts how many of them each approach can
//! identify. The interface check only identifies tags that have an interface
//! of their own; the guard has to single out every tag, and that is measured
//! here rather than assumed.

use crate::guard::is_html_element;
use dom::interfaces::HtmlElement;
use dom::{Document, DocumentConfig, HtmlInterface, Result, TagName};
use std::fmt;
use tracing::debug;

const RULE: &str = "=====================================================================";
const THIN_RULE: &str = "---------------------------------------------------------------------";

/// Report settings
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub title: String,
    pub document: DocumentConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Comparative Analysis: is_html_element vs. interface check".to_string(),
            document: DocumentConfig::default(),
        }
    }
}

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    pub title: String,
    pub total: usize,
    /// Tags the guard identified, and only as themselves
    pub guard_hits: usize,
    /// Tags whose element has a specific interface
    pub interface_hits: usize,
    /// Tags that only resolve to the generic `HTMLElement`
    pub problematic: Vec<TagName>,
}

impl AccuracyReport {
    /// Analyse `tags` with the default settings
    pub fn analyze(tags: &[TagName]) -> Result<Self> {
        Self::analyze_with_config(tags, ReportConfig::default())
    }

    pub fn analyze_with_config(tags: &[TagName], config: ReportConfig) -> Result<Self> {
        let mut document = Document::with_config(config.document);
        let mut guard_hits = 0;
        let mut interface_hits = 0;
        let mut problematic = Vec::new();

        for &tag in tags {
            let node_id = document.create_element(tag.as_str())?;
            let node = document.node(node_id)?;

            let interface = node.interface_name().unwrap_or(HtmlElement::NAME);
            if interface == HtmlElement::NAME {
                problematic.push(tag);
            } else {
                interface_hits += 1;
            }

            let confused = tags
                .iter()
                .any(|&other| other != tag && is_html_element(node, Some(other)));
            if is_html_element(node, Some(tag)) && !confused {
                guard_hits += 1;
            }
        }

        let report = Self {
            title: config.title,
            total: tags.len(),
            guard_hits,
            interface_hits,
            problematic,
        };

        debug!(
            total = report.total,
            guard = report.guard_hits,
            interface = report.interface_hits,
            problematic = report.problematic.len(),
            "accuracy report ready"
        );
        Ok(report)
    }

    /// Guard accuracy in percent
    pub fn guard_accuracy(&self) -> f64 {
        percent(self.guard_hits, self.total)
    }

    /// Interface check accuracy in percent
    pub fn interface_accuracy(&self) -> f64 {
        percent(self.interface_hits, self.total)
    }
}

fn percent(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.problematic.iter().map(|t| t.as_str()).collect();

        writeln!(f, "{}", RULE)?;
        writeln!(f, "      {}", self.title)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(f, "Accuracy Score")?;
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(
            f,
            "- is_html_element: {}/{} ({:.2}%)",
            self.guard_hits,
            self.total,
            self.guard_accuracy()
        )?;
        writeln!(
            f,
            "- interface check: {}/{} ({:.2}%)",
            self.interface_hits,
            self.total,
            self.interface_accuracy()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(
            f,
            "Problematic Tags for the interface check ({} tags)",
            self.problematic.len()
        )?;
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(f, "These tags all resolve to the generic HTMLElement interface.")?;
        writeln!(f, "is_html_element identifies every one of them by tag name.")?;
        writeln!(f)?;
        writeln!(f, "{}", tags.join(", "))?;
        write!(f, "{}", RULE)
    }
}
