// tests/integration_pipeline.rs
//! End-to-end checks of the recommendation pipeline over small graphs.

use std::collections::{HashMap, HashSet};

use whotofollow_core::dataflow::{ParallelSubstrate, SequentialSubstrate, Substrate};
use whotofollow_core::graph::RecommendationEngine;
use whotofollow_core::io::{loader, writer};
use whotofollow_core::types::{Adjacency, RecommendationList, UserId};

// --- Helpers ---

fn run_on<S: Substrate>(substrate: S, graph: Vec<Adjacency>) -> Vec<RecommendationList> {
    RecommendationEngine::new(substrate).run(graph).lists
}

fn lines(lists: &[RecommendationList]) -> Vec<String> {
    lists.iter().map(ToString::to_string).collect()
}

fn follows(graph: &[Adjacency]) -> HashMap<UserId, HashSet<UserId>> {
    let mut out: HashMap<UserId, HashSet<UserId>> = HashMap::new();
    for record in graph {
        out.entry(record.follower.clone())
            .or_default()
            .extend(record.followees.iter().cloned());
    }
    out
}

/// Deterministic pseudo-random graph without duplicate or self edges.
fn random_graph(users: u64, seed: u64) -> Vec<Adjacency> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };
    (0..users)
        .map(|u| {
            let degree = next() % 6;
            let mut followees: Vec<UserId> = Vec::new();
            for _ in 0..degree {
                let target = next() % users;
                let id = UserId::from(format!("u{target}"));
                if target != u && !followees.contains(&id) {
                    followees.push(id);
                }
            }
            Adjacency::new(format!("u{u}"), followees)
        })
        .collect()
}

const WORKED_EXAMPLE: &str = "1 3 4\n2 3 4\n5 4\n3\n4\n";

// --- Tests ---

#[test]
fn test_worked_example() {
    let out = run_on(SequentialSubstrate, loader::parse_str(WORKED_EXAMPLE));
    assert_eq!(
        lines(&out),
        ["1 2(2) 5(1)", "2 1(2) 5(1)", "3", "4", "5 1(1) 2(1)"]
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let graph = random_graph(200, 7);
    let seq = run_on(SequentialSubstrate, graph.clone());
    let par = run_on(ParallelSubstrate::default(), graph.clone());
    let pinned = run_on(
        ParallelSubstrate::with_threads(Some(3)).unwrap(),
        graph,
    );
    assert_eq!(writer::render(&seq), writer::render(&par));
    assert_eq!(writer::render(&seq), writer::render(&pinned));
}

#[test]
fn test_idempotent_output() {
    let graph = random_graph(150, 42);
    let first = run_on(ParallelSubstrate::default(), graph.clone());
    let second = run_on(ParallelSubstrate::default(), graph);
    assert_eq!(writer::digest(&first), writer::digest(&second));
}

#[test]
fn test_no_self_and_no_direct_followee() {
    let graph = random_graph(120, 3);
    let edges = follows(&graph);
    for list in run_on(SequentialSubstrate, graph) {
        let followed = edges.get(&list.user).cloned().unwrap_or_default();
        for rec in &list.recommendations {
            assert_ne!(rec.candidate, list.user, "{} recommended to itself", list.user);
            assert!(
                !followed.contains(&rec.candidate),
                "{} already follows {}",
                list.user,
                rec.candidate
            );
        }
    }
}

#[test]
fn test_scores_count_shared_followees() {
    let graph = random_graph(100, 11);
    let edges = follows(&graph);
    let empty = HashSet::new();
    for list in run_on(SequentialSubstrate, graph) {
        let mine = edges.get(&list.user).unwrap_or(&empty);
        for rec in &list.recommendations {
            let theirs = edges.get(&rec.candidate).unwrap_or(&empty);
            let shared = mine.intersection(theirs).count();
            assert_eq!(rec.score, shared, "{} -> {}", list.user, rec.candidate);
        }
    }
}

#[test]
fn test_lists_are_non_increasing_and_unique() {
    for list in run_on(SequentialSubstrate, random_graph(100, 5)) {
        let scores: Vec<usize> = list.recommendations.iter().map(|r| r.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{list}");
        let distinct: HashSet<&UserId> = list.recommendations.iter().map(|r| &r.candidate).collect();
        assert_eq!(distinct.len(), list.len());
    }
}

#[test]
fn test_symmetry_modulo_exclusion() {
    let graph = random_graph(100, 9);
    let edges = follows(&graph);
    let out = run_on(SequentialSubstrate, graph);
    let by_user: HashMap<&UserId, &RecommendationList> = out.iter().map(|l| (&l.user, l)).collect();

    for list in &out {
        for rec in &list.recommendations {
            let excluded = edges
                .get(&rec.candidate)
                .is_some_and(|f| f.contains(&list.user));
            if excluded {
                continue;
            }
            let back = by_user
                .get(&rec.candidate)
                .and_then(|l| l.score_of(&list.user));
            assert_eq!(back, Some(rec.score), "{} <-> {}", list.user, rec.candidate);
        }
    }
}

#[test]
fn test_isolated_user_gets_empty_record() {
    let out = run_on(SequentialSubstrate, loader::parse_str("loner\n"));
    assert_eq!(lines(&out), ["loner"]);
}

#[test]
fn test_empty_graph_gives_no_records() {
    assert!(run_on(SequentialSubstrate, Vec::new()).is_empty());
}

#[test]
fn test_direct_edge_excludes_candidate() {
    // 1 and 2 share followee 3, but 1 already follows 2.
    let out = run_on(SequentialSubstrate, loader::parse_str("1 3 2\n2 3\n"));
    assert_eq!(lines(&out), ["1", "2 1(1)", "3"]);
}

#[test]
fn test_self_follow_never_self_recommends() {
    // a follows itself; c follows a, so a is excluded from c's list too.
    let out = run_on(SequentialSubstrate, loader::parse_str("a a b\nc a b\n"));
    assert_eq!(lines(&out), ["a c(2)", "b", "c"]);
}

#[test]
fn test_duplicate_edges_inflate_scores() {
    let out = run_on(SequentialSubstrate, loader::parse_str("1 3 3\n2 3\n"));
    assert_eq!(lines(&out), ["1 2(2)", "2 1(2)", "3"]);
}

#[test]
fn test_ids_resembling_old_sentinel_are_plain_ids() {
    // "-2" is a user, not a negated "2".
    let out = run_on(SequentialSubstrate, loader::parse_str("1 3\n-2 3\n2 3\n"));
    assert_eq!(lines(&out), ["-2 1(1) 2(1)", "1 -2(1) 2(1)", "2 -2(1) 1(1)", "3"]);
}
