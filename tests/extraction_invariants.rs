use std::collections::BTreeMap;

use evidence_core::extraction::{
    build_window, cluster_matches, deduplicate, merge_pass, ContextExtractor, DatePattern,
    ExtractionConfig, LcsRatio, OffsetMapping, TokenMap,
};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// A notice board page: twelve notices, each with two distinct dates,
/// separated by boilerplate of varying length. Boilerplate repeats across
/// notices, so some windows end up similar enough to merge.
fn notice_board() -> String {
    let mut lines = Vec::new();
    for i in 0..12usize {
        lines.push(format!(
            "Notice {i}: the last date to apply for programme {i} is {:02}.{:02}.2025 and fees are due by {} {} 2025.",
            i + 1,
            i + 1,
            i + 10,
            MONTHS[i]
        ));
        let filler = format!("section {i} body text");
        lines.push(vec![filler.as_str(); (i % 3 + 1) * 40].join(" "));
    }
    lines.join("\n")
}

fn configs() -> Vec<ExtractionConfig> {
    vec![
        ExtractionConfig::default(),
        ExtractionConfig {
            before_tokens: 5,
            after_tokens: 5,
            max_cluster_gap_chars: 40,
            similarity_threshold: 0.5,
            ..Default::default()
        },
        ExtractionConfig {
            before_tokens: 0,
            after_tokens: 0,
            max_cluster_gap_chars: 0,
            similarity_threshold: 1.0,
            offset_mapping: OffsetMapping::Exact,
            ..Default::default()
        },
        ExtractionConfig {
            before_tokens: 200,
            after_tokens: 3,
            max_cluster_gap_chars: 5_000,
            similarity_threshold: 0.0,
            ..Default::default()
        },
    ]
}

#[test]
fn every_match_lands_in_exactly_one_record() {
    let text = notice_board();
    let pattern = DatePattern::admission_default();
    let matches = pattern.find_matches(&text);
    assert_eq!(matches.len(), 24);

    for config in configs() {
        let extractor = ContextExtractor::new(config.clone()).unwrap();
        let records = extractor.extract(&text, &pattern);

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &records {
            for date in &record.related_dates {
                *seen.entry(date.as_str()).or_default() += 1;
            }
        }
        for m in &matches {
            assert_eq!(
                seen.get(m.text.as_str()),
                Some(&1),
                "{} must appear in exactly one record under {config:?}",
                m.text
            );
        }
    }
}

#[test]
fn clusters_partition_matches_without_overlap() {
    let text = notice_board();
    let matches = DatePattern::admission_default().find_matches(&text);

    for gap in [0, 40, 500, 100_000] {
        let clusters = cluster_matches(matches.clone(), gap);
        let total: usize = clusters.iter().map(|c| c.matches().len()).sum();
        assert_eq!(total, matches.len());

        for pair in clusters.windows(2) {
            assert!(pair[0].last().end <= pair[1].first().start);
            assert!(pair[1].first().start - pair[0].last().end >= gap);
        }
    }
}

#[test]
fn windows_contain_their_cluster_and_stay_in_bounds() {
    let text = notice_board();
    let pattern = DatePattern::admission_default();
    let token_count = text.split_whitespace().count();

    for config in configs() {
        let map = TokenMap::build(&text, config.offset_mapping);
        for cluster in cluster_matches(pattern.find_matches(&text), config.max_cluster_gap_chars) {
            let window = build_window(&cluster, &map, config.before_tokens, config.after_tokens);
            assert!(window.start_token <= window.end_token);
            assert!(window.end_token <= token_count);
            for m in cluster.matches() {
                assert!(
                    window.text.contains(m.text.as_str()),
                    "{} missing from its own window under {config:?}",
                    m.text
                );
            }
        }
    }
}

#[test]
fn record_context_is_a_real_token_span() {
    let text = notice_board();
    let tokens: Vec<&str> = text.split_whitespace().collect();

    for config in configs() {
        let extractor = ContextExtractor::new(config.clone()).unwrap();
        for record in extractor.extract(&text, &DatePattern::admission_default()) {
            assert!(record.start_token <= record.end_token);
            assert!(record.end_token <= tokens.len());
            assert!(record.related_dates.contains(&record.primary_date));
            assert_eq!(tokens[record.start_token..record.end_token].join(" "), record.context);

            // a merged record keeps only the longest context, which need not
            // contain the dates of the clusters it absorbed
            if record.cluster_count == 1 {
                for date in &record.related_dates {
                    assert!(record.context.contains(date.as_str()));
                }
            }
        }
    }
}

#[test]
fn exact_mapping_keeps_containment_with_irregular_whitespace() {
    let text = "Hostel   allotment\t\tlist:  apply   before 12 Apr 2025,   late fee\n\n after 20-04-2025 only";
    let config = ExtractionConfig {
        before_tokens: 1,
        after_tokens: 2,
        max_cluster_gap_chars: 5,
        offset_mapping: OffsetMapping::Exact,
        similarity_threshold: 1.0,
        ..Default::default()
    };
    let extractor = ContextExtractor::new(config).unwrap();
    let records = extractor.extract(text, &DatePattern::admission_default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].context, "before 12 Apr 2025, late");
    assert_eq!(records[1].context, "after 20-04-2025 only");
}

#[test]
fn record_count_never_exceeds_cluster_count() {
    let text = notice_board();
    let pattern = DatePattern::admission_default();

    for config in configs() {
        let clusters = cluster_matches(pattern.find_matches(&text), config.max_cluster_gap_chars);
        let extractor = ContextExtractor::new(config.clone()).unwrap();
        let records = extractor.extract(&text, &pattern);

        assert!(!records.is_empty());
        assert!(records.len() <= clusters.len());
        let merged: usize = records.iter().map(|r| r.cluster_count).sum();
        assert_eq!(merged, clusters.len());
    }
}

#[test]
fn zero_threshold_collapses_everything_and_one_keeps_everything() {
    let text = notice_board();
    let pattern = DatePattern::admission_default();

    let collapse = ContextExtractor::new(ExtractionConfig {
        similarity_threshold: 0.0,
        max_cluster_gap_chars: 0,
        ..Default::default()
    })
    .unwrap();
    let keep = ContextExtractor::new(ExtractionConfig {
        similarity_threshold: 1.0,
        max_cluster_gap_chars: 0,
        ..Default::default()
    })
    .unwrap();

    // the filler shares characters with every notice, so every pair scores above 0
    assert_eq!(collapse.extract(&text, &pattern).len(), 1);
    assert_eq!(keep.extract(&text, &pattern).len(), 24);
}

#[test]
fn dedup_output_is_a_fixed_point() {
    let text = notice_board();
    let pattern = DatePattern::admission_default();

    for config in configs() {
        let map = TokenMap::build(&text, config.offset_mapping);
        let pairs: Vec<_> = cluster_matches(pattern.find_matches(&text), config.max_cluster_gap_chars)
            .into_iter()
            .map(|c| {
                let w = build_window(&c, &map, config.before_tokens, config.after_tokens);
                (c, w)
            })
            .collect();

        let groups = deduplicate(pairs, &LcsRatio, config.similarity_threshold);
        let again = merge_pass(groups.clone(), &LcsRatio, config.similarity_threshold);
        assert_eq!(again, groups, "second pass must change nothing under {config:?}");
    }
}

#[test]
fn records_follow_first_occurrence_order() {
    let text = notice_board();
    let extractor = ContextExtractor::new(ExtractionConfig {
        before_tokens: 5,
        after_tokens: 5,
        max_cluster_gap_chars: 40,
        similarity_threshold: 1.0,
        ..Default::default()
    })
    .unwrap();
    let records = extractor.extract(&text, &DatePattern::admission_default());

    let positions: Vec<usize> = records
        .iter()
        .map(|r| text.find(r.primary_date.as_str()).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
