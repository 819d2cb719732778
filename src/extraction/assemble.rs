use crate::extraction::calendar::parse_date;
use crate::extraction::dedup::EvidenceGroup;
use crate::types::evidence::EvidenceRecord;
use crate::types::identifiers::ContextFingerprint;

/// One record per accepted group, in first-occurrence order.
pub fn assemble_records(groups: Vec<EvidenceGroup>, prefer_dayfirst: bool) -> Vec<EvidenceRecord> {
    groups
        .into_iter()
        .map(|group| {
            let fingerprint = ContextFingerprint::from_context(&group.window.text);
            EvidenceRecord {
                normalized_date: parse_date(&group.primary_date, prefer_dayfirst),
                primary_date: group.primary_date,
                related_dates: group.dates,
                context: group.window.text,
                start_token: group.window.start_token,
                end_token: group.window.end_token,
                cluster_count: group.cluster_count,
                fingerprint,
            }
        })
        .collect()
}
