use std::collections::BTreeSet;

use similar::TextDiff;

use crate::types::evidence::{Cluster, ContextWindow};

pub trait SimilarityMeasure {
    /// Normalized similarity in `[0.0, 1.0]`. Symmetric; `1.0` only for
    /// identical strings.
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Longest-common-subsequence ratio over characters:
/// `2 * matched / (len(a) + len(b))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LcsRatio;

impl SimilarityMeasure for LcsRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let ratio = f64::from(TextDiff::from_chars(a, b).ratio());
        // f32 rounding must not report distinct strings as identical
        ratio.min(1.0 - f64::EPSILON)
    }
}

/// One accepted group of clusters sharing a representative context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceGroup {
    /// Raw text of the first match of the group's earliest cluster.
    pub primary_date: String,
    pub dates: BTreeSet<String>,
    /// The representative window: the longest context seen so far.
    pub window: ContextWindow,
    pub cluster_count: usize,
}

impl EvidenceGroup {
    pub fn from_cluster(cluster: &Cluster, window: ContextWindow) -> Self {
        Self {
            primary_date: cluster.first().text.clone(),
            dates: cluster.matches().iter().map(|m| m.text.clone()).collect(),
            window,
            cluster_count: 1,
        }
    }

    /// Fold a later group into this one. Dates are unioned; the other window
    /// becomes representative only when its text is strictly longer.
    fn absorb(&mut self, other: EvidenceGroup) {
        self.dates.extend(other.dates);
        self.cluster_count += other.cluster_count;
        if other.window.text.chars().count() > self.window.text.chars().count() {
            self.window = other.window;
        }
    }
}

/// Collapse near-duplicate clusters.
///
/// Each pair is compared, in accumulator order, against the representative
/// context of every accepted group; the first group whose ratio exceeds
/// `threshold` absorbs it (first-fit, not best-fit). Unabsorbed pairs become
/// new groups. Passes repeat over the accepted groups until one merges
/// nothing, so re-running on the output never merges further.
pub fn deduplicate<M: SimilarityMeasure + ?Sized>(
    pairs: Vec<(Cluster, ContextWindow)>,
    measure: &M,
    threshold: f64,
) -> Vec<EvidenceGroup> {
    let mut groups: Vec<EvidenceGroup> = pairs
        .into_iter()
        .map(|(cluster, window)| EvidenceGroup::from_cluster(&cluster, window))
        .collect();

    loop {
        let before = groups.len();
        groups = merge_pass(groups, measure, threshold);
        if groups.len() == before {
            return groups;
        }
    }
}

/// A single first-fit pass over `groups` in order.
pub fn merge_pass<M: SimilarityMeasure + ?Sized>(
    groups: Vec<EvidenceGroup>,
    measure: &M,
    threshold: f64,
) -> Vec<EvidenceGroup> {
    let mut accepted: Vec<EvidenceGroup> = Vec::with_capacity(groups.len());

    for candidate in groups {
        let target = accepted.iter().position(|group| {
            measure.ratio(&candidate.window.text, &group.window.text) > threshold
        });
        match target {
            Some(i) => accepted[i].absorb(candidate),
            None => accepted.push(candidate),
        }
    }
    accepted
}
