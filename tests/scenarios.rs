//! Concrete end-to-end scenarios, run only through the public API.

use seqdiff::{diff_lines_with_similarities, AlgorithmKind, OpCode, SequenceMatcher, Tag};

fn eq(i1: usize, i2: usize, j1: usize, j2: usize) -> OpCode {
    OpCode::new(Tag::Equal, i1, i2, j1, j2)
}
fn del(i1: usize, i2: usize, j1: usize, j2: usize) -> OpCode {
    OpCode::new(Tag::Delete, i1, i2, j1, j2)
}
fn ins(i1: usize, i2: usize, j1: usize, j2: usize) -> OpCode {
    OpCode::new(Tag::Insert, i1, i2, j1, j2)
}
fn rep(i1: usize, i2: usize, j1: usize, j2: usize) -> OpCode {
    OpCode::new(Tag::Replace, i1, i2, j1, j2)
}
fn mv(i1: usize, i2: usize, j1: usize, j2: usize) -> OpCode {
    OpCode::new(Tag::Move, i1, i2, j1, j2)
}
fn moved(i1: usize, i2: usize, j1: usize, j2: usize) -> OpCode {
    OpCode::new(Tag::Moved, i1, i2, j1, j2)
}

fn words(s: &[&str]) -> Vec<String> {
    s.iter().map(|w| w.to_string()).collect()
}

// S1 / S2 — Paul Heckel's own worked example from "A Technique for
// Isolating Differences Between Files".
const HECKEL_A: &[&str] = &[
    "MUCH", "WRITING", "IS", "LIKE", "SNOW", ",", "A", "MASS", "OF", "LONG", "WORDS", "AND",
    "PHRASES", "FALLS", "UPON", "THE", "RELEVANT", "FACTS", "COVERING", "UP", "THE", "DETAILS",
    ".",
];
const HECKEL_B: &[&str] = &[
    "A", "MASS", "OF", "LATIN", "WORDS", "FALLS", "UPON", "THE", "RELEVANT", "FACTS", "LIKE",
    "SOFT", "SNOW", ",", "COVERING", "UP", "THE", "DETAILS", ".",
];

#[test]
fn s1_heckel_paper_example_without_replace_folding() {
    let m = SequenceMatcher::new(words(HECKEL_A), words(HECKEL_B)).with_replace_mode(false);
    let ops = m.get_opcodes();
    assert_eq!(
        ops,
        vec![
            del(0, 3, 0, 0),
            mv(3, 4, 10, 10),
            mv(4, 6, 12, 12),
            eq(6, 9, 0, 3),
            del(9, 10, 3, 3),
            ins(10, 10, 3, 4),
            eq(10, 11, 4, 5),
            del(11, 13, 5, 5),
            eq(13, 18, 5, 10),
            moved(3, 3, 10, 11),
            ins(18, 18, 11, 12),
            moved(4, 4, 12, 14),
            eq(18, 23, 14, 19),
        ]
    );
}

#[test]
fn s2_heckel_paper_example_with_replace_folding() {
    let m = SequenceMatcher::new(words(HECKEL_A), words(HECKEL_B));
    let ops = m.get_opcodes();
    assert_eq!(
        ops,
        vec![
            del(0, 3, 0, 0),
            mv(3, 4, 10, 10),
            mv(4, 6, 12, 12),
            eq(6, 9, 0, 3),
            rep(9, 10, 3, 4),
            eq(10, 11, 4, 5),
            del(11, 13, 5, 5),
            eq(13, 18, 5, 10),
            moved(3, 3, 10, 11),
            ins(18, 18, 11, 12),
            moved(4, 4, 12, 14),
            eq(18, 23, 14, 19),
        ]
    );
}

#[test]
fn s3_pure_reversal() {
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![5, 4, 3, 2, 1];
    let ops = SequenceMatcher::new(a, b).get_opcodes();
    assert_eq!(
        ops,
        vec![
            mv(0, 1, 4, 4),
            mv(1, 2, 3, 3),
            mv(2, 3, 2, 2),
            mv(3, 4, 1, 1),
            eq(4, 5, 0, 1),
            moved(3, 3, 1, 2),
            moved(2, 2, 2, 3),
            moved(1, 1, 3, 4),
            moved(0, 0, 4, 5),
        ]
    );
}

#[test]
fn s4_insertion_deletion_edge_case() {
    let a = words(&["f1", "f2", "f7", "f8", "f9", "f4", "f5", "f11", "f4", "f5"]);
    let b = words(&["f1", "f2", "f3", "f4", "f7", "f8", "f9", "f10", "f5", "f3", "f4", "f5"]);
    let ops = SequenceMatcher::new(a, b).get_opcodes();
    assert_eq!(
        ops,
        vec![eq(0, 2, 0, 2), ins(2, 2, 2, 4), eq(2, 5, 4, 7), rep(5, 10, 7, 12)]
    );
}

#[test]
fn s5_complete_mismatch() {
    let a = vec![3, 0, 1, 6, 6, 0, 4, 6, 1, 6, 3];
    let b = vec![5, 8, 7, 5, 7, 4, 7, 3, 4, 7, 6];
    let ops = SequenceMatcher::new(a, b).get_opcodes();
    assert_eq!(ops, vec![rep(0, 11, 0, 11)]);
}

#[test]
fn s6_line_differ_with_one_similar_line() {
    let (a_lines, b_lines, ops) = diff_lines_with_similarities("aa1\nbb2\ncc3", "aa1\ncc2", 0.6).unwrap();
    assert_eq!(a_lines, vec!["aa1", "bb2", "cc3"]);
    assert_eq!(b_lines, vec!["aa1", "cc2"]);

    assert_eq!(ops.len(), 3);
    assert_eq!(ops[0].op, eq(0, 1, 0, 1));
    assert_eq!(ops[1].op, del(1, 2, 1, 1));
    assert_eq!(ops[2].op, rep(2, 3, 1, 2));
    assert!(ops[0].children.is_empty());
    assert!(ops[1].children.is_empty());
    assert_eq!(ops[2].children, vec![eq(0, 2, 0, 2), rep(2, 3, 2, 3)]);
}

#[test]
fn displacement_algorithm_also_satisfies_s3() {
    // Displacement's occurrence-cursor pairing should agree with Heckel's
    // uniqueness heuristic whenever every element is already unique.
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![5, 4, 3, 2, 1];
    let heckel = SequenceMatcher::new(a.clone(), b.clone()).get_opcodes();
    let displacement = SequenceMatcher::new(a, b)
        .with_algorithm(AlgorithmKind::Displacement)
        .get_opcodes();
    assert_eq!(heckel, displacement);
}
