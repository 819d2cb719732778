use crate::types::evidence::{Cluster, DateMatch};

/// Greedy left-to-right partition of matches into clusters.
///
/// A match opens a new cluster when it starts `max_gap` bytes or more after
/// the end of the current cluster's last match; otherwise it joins that
/// cluster. Boundaries are never revisited. Every match lands in exactly one
/// cluster, and clusters come out in source order.
pub fn cluster_matches(mut matches: Vec<DateMatch>, max_gap: usize) -> Vec<Cluster> {
    matches.sort_by_key(|m| m.start);

    let mut clusters: Vec<Cluster> = Vec::new();
    for m in matches {
        match clusters.last_mut() {
            Some(current) if m.start.saturating_sub(current.last().end) < max_gap => {
                current.push(m);
            }
            _ => clusters.push(Cluster::new(m)),
        }
    }
    clusters
}
