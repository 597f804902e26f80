//! Whole-output properties of the splitter.

mod common;
use common::*;

const AWKWARD_INPUTS: &[&str] = &[
    "", "'", "\"", "[", "]", "/", "-", "/*", "--", "*/", "\n", "\nG", "\nGO", "\ngo;",
    "\nGO\n", "\nGO 1", "\nGO x", "\r\n", "GO", "\n  \t", "\nGO--", "\nGO/*",
];

#[test]
fn always_returns_at_least_one_batch() {
    for input in AWKWARD_INPUTS {
        assert!(!batches(input).is_empty(), "no batches for {input:?}");
    }
}

#[test]
fn batch_count_is_go_count_plus_one() {
    assert_eq!(batches("A\nGO\nB\nGO\nC").len(), 3);
    assert_eq!(batches("\nGO").len(), 2);
    assert_eq!(batches("A\nGO\n\nGO\n").len(), 3);
}

#[test]
fn rejoining_restores_comment_free_script() {
    let scripts = [
        "SELECT 1\nGO\nSELECT 2",
        "SELECT 1\nGO\nSELECT 'GO\n'\nGO\nSELECT [a\nGO\nb]",
        "CREATE TABLE t (v VARCHAR(10))\nGO\nINSERT INTO t VALUES ('a-b/c')\nGO\n",
        "A\nGO\n\nGO\nB",
    ];
    for script in scripts {
        assert_eq!(rejoin(&batches(script)), script);
    }
}

/// Comment-free pieces that never merge into a comment opener or an
/// indented `GO` line when placed side by side.
const FRAGMENTS: &[&str] = &[
    "SELECT 1", "\n", "GO\n", "a-b", "4/2", "'x\nGO\n'", "[c\nGO\n]", "\"q\"",
];

/// Every concatenation of up to `max_len` fragments.
fn generated_scripts(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| FRAGMENTS.iter().map(move |f| format!("{prefix}{f}")))
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn rejoining_restores_generated_scripts() {
    for script in generated_scripts(4) {
        let split = batches(&script);
        assert_eq!(rejoin(&split), script, "batches: {split:?}");
    }
}

#[test]
fn joined_batches_split_the_same_way() {
    for script in generated_scripts(3) {
        let values = batch_values(&script);
        assert_eq!(batch_values(&join_batches(&values)), values, "script: {script:?}");
    }
}

#[test]
fn comments_never_reach_output() {
    let script = "/* secret */SELECT 1 -- hidden\nGO\n-- also hidden\nSELECT 2 /* gone */";
    for batch in batches(script) {
        assert!(!batch.contains("secret"));
        assert!(!batch.contains("hidden"));
        assert!(!batch.contains("gone"));
    }
}

#[test]
fn blank_batches_are_reported() {
    let values = batch_values("A\nGO\n  \nGO\n");
    let blank: Vec<bool> = values.iter().map(|b| b.is_blank()).collect();
    assert_eq!(blank, vec![false, true, true]);
}
