//! End-to-end splitting of small, realistic scripts.

mod common;
use common::*;

#[test]
fn two_batches() {
    assert_split("SELECT 1\nGO\nSELECT 2", &["SELECT 1\n", "SELECT 2"]);
}

#[test]
fn no_go_is_one_batch() {
    assert_split("SELECT 1", &["SELECT 1"]);
}

#[test]
fn leading_comment_and_trailing_go() {
    // The comment text goes, its newline stays; a GO closing the script
    // leaves an empty final batch.
    assert_split("-- comment\nSELECT 1\nGO", &["\nSELECT 1\n", ""]);
}

#[test]
fn bracket_text_inside_string() {
    assert_split(
        "SELECT '[bracket-looking] text'\nGO\nSELECT 2",
        &["SELECT '[bracket-looking] text'\n", "SELECT 2"],
    );
}

#[test]
fn go_inside_block_comment() {
    assert_split(
        "SELECT 1 /* GO \n GO \n */\nGO\nSELECT 2",
        &["SELECT 1 \n", "SELECT 2"],
    );
}

#[test]
fn procedure_script() {
    let script = "\
IF OBJECT_ID('dbo.usp_ping') IS NOT NULL
    DROP PROCEDURE dbo.usp_ping;
GO
CREATE PROCEDURE dbo.usp_ping
AS
BEGIN
    SELECT 'pong' AS [reply]; -- always pong
END
GO
EXEC dbo.usp_ping;
";
    assert_split(
        script,
        &[
            "IF OBJECT_ID('dbo.usp_ping') IS NOT NULL\n    DROP PROCEDURE dbo.usp_ping;\n",
            "CREATE PROCEDURE dbo.usp_ping\nAS\nBEGIN\n    SELECT 'pong' AS [reply]; \nEND\n",
            "EXEC dbo.usp_ping;\n",
        ],
    );
}

#[test]
fn repeat_counts_travel_with_their_batch() {
    let batches = batch_values("INSERT INTO t DEFAULT VALUES\nGO 10\nSELECT COUNT(*) FROM t\ngo\n");
    let counts: Vec<Option<u64>> = batches.iter().map(|b| b.repeat_count).collect();
    assert_eq!(counts, vec![Some(10), None, None]);
}

#[test]
fn script_of_only_whitespace() {
    assert_split("  \n\t", &["  \n\t"]);
}
