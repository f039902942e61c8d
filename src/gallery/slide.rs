// SPDX-License-Identifier: MPL-2.0
//! Slides collected from selector markup.

use super::focus::NodeId;
use super::markup::SelectorMarkup;

/// One navigable image entry. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    source: String,
    alt: String,
    origin: NodeId,
}

impl Slide {
    #[must_use]
    pub fn new(source: impl Into<String>, alt: impl Into<String>, origin: NodeId) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            origin,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// The selector control this slide was collected from.
    #[must_use]
    pub fn origin(&self) -> NodeId {
        self.origin
    }
}

/// Builds the slide sequence from selectors.
///
/// Selectors without a source are skipped. Missing labels become
/// `"{alt_prefix} N"`, N being the selector's 1-based position.
pub fn collect_slides(selectors: &[SelectorMarkup], alt_prefix: &str) -> Vec<Slide> {
    selectors
        .iter()
        .enumerate()
        .filter(|(_, selector)| !selector.source.is_empty())
        .map(|(position, selector)| {
            let alt = selector
                .label
                .clone()
                .unwrap_or_else(|| format!("{alt_prefix} {}", position + 1));
            Slide::new(selector.source.clone(), alt, selector.control)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::focus::NodeAllocator;
    use crate::gallery::markup::GalleryMarkup;

    #[test]
    fn selectors_without_source_are_skipped() {
        let mut nodes = NodeAllocator::new();
        let markup = GalleryMarkup::standard(&mut nodes, &[("a.jpg", "A"), ("", "B"), ("c.jpg", "C")]);

        let slides = collect_slides(&markup.selectors, "Image");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].source(), "c.jpg");
        assert_eq!(slides[1].origin(), markup.selectors[2].control);
    }

    #[test]
    fn missing_label_uses_selector_position() {
        let mut nodes = NodeAllocator::new();
        let markup = GalleryMarkup::standard(&mut nodes, &[("", ""), ("b.jpg", "")]);

        let slides = collect_slides(&markup.selectors, "Image");
        assert_eq!(slides[0].alt(), "Image 2");
    }
}
