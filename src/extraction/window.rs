use crate::extraction::offsets::TokenMap;
use crate::types::evidence::{Cluster, ContextWindow};

/// Cut the token window around a cluster.
///
/// `before` tokens precede the token holding the first match and `after`
/// tokens follow the token holding the last match's end, clipped to the
/// document. The token holding the last match's end is always kept, so the
/// window contains every match of the cluster even with `after == 0`.
pub fn build_window(cluster: &Cluster, map: &TokenMap<'_>, before: usize, after: usize) -> ContextWindow {
    let token_count = map.len();
    let cluster_start = map.token_index(cluster.first().start);
    let cluster_end = map.token_index(cluster.last().end);

    let start_token = cluster_start.saturating_sub(before);
    let end_token = cluster_end
        .saturating_add(after)
        .max(cluster_end + 1)
        .min(token_count);

    ContextWindow {
        text: map.render(start_token, end_token),
        start_token,
        end_token,
    }
}
