//! Comment handling: comments never reach a batch and never hide or
//! produce a batch boundary.

mod common;
use common::*;

#[test]
fn block_comment_removed_inline() {
    assert_split("SELECT /* a */ 1", &["SELECT  1"]);
}

#[test]
fn block_comment_spanning_lines() {
    assert_split("A/*\nGO\n*/B", &["AB"]);
}

#[test]
fn empty_block_comment() {
    assert_split("A/**/B", &["AB"]);
}

#[test]
fn go_in_line_comment_is_ignored() {
    assert_split("SELECT 1 -- GO\nSELECT 2", &["SELECT 1 \nSELECT 2"]);
}

#[test]
fn line_comment_before_go_line() {
    assert_split("A -- GO\nGO\nB", &["A \n", "B"]);
}

#[test]
fn line_comment_does_not_open_block_comment() {
    assert_split("-- /*\nA\nGO\nB", &["\nA\n", "B"]);
}

#[test]
fn quote_inside_comment_is_not_scanned() {
    assert_split("-- it's\nA\nGO\nB", &["\nA\n", "B"]);
    assert_split("/* [ */A\nGO\nB", &["A\n", "B"]);
}

#[test]
fn unterminated_block_comment_swallows_rest() {
    assert_split("A\nGO\nB /* GO\nGO\n", &["A\n", "B "]);
}

#[test]
fn line_comment_at_end_of_input() {
    assert_split("A --", &["A "]);
}

#[test]
fn comment_after_go_starts_next_batch() {
    assert_split("A\nGO -- next\nB", &["A\n", "\nB"]);
    assert_split("A\nGO /* next */ B", &["A\n", " B"]);
}
