use std::collections::BTreeSet;

/// The four link categories gathered during a crawl
///
/// Used both for a single page's findings and for the crawl-wide
/// accumulators; sets are ordered so reports come out sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSets {
    /// Absolute URLs on the seed's host
    pub internal: BTreeSet<String>,

    /// Absolute URLs on any other host
    pub external: BTreeSet<String>,

    /// `mailto:` references, verbatim
    pub mailto: BTreeSet<String>,

    /// Anchors and `tel:`, `sms:`, `javascript:`, `data:` references, verbatim
    pub non_html: BTreeSet<String>,
}

impl LinkSets {
    /// Creates an empty set of links
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions another page's findings into these sets
    pub fn merge(&mut self, other: LinkSets) {
        self.internal.extend(other.internal);
        self.external.extend(other.external);
        self.mailto.extend(other.mailto);
        self.non_html.extend(other.non_html);
    }

    /// Returns true if no link of any kind was recorded
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty()
            && self.external.is_empty()
            && self.mailto.is_empty()
            && self.non_html.is_empty()
    }
}
