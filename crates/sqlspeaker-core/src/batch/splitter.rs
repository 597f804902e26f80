//! `GO`-delimited batch splitter.

use super::Cursor;

/// A single executable batch cut from a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Batch text, verbatim except for removed comments.
    pub sql: String,
    /// Numeric token that followed the `GO` closing this batch (`GO 3`).
    ///
    /// Parsed for compatibility only: nothing in this crate repeats a batch.
    /// Always `None` for the final batch of a script.
    pub repeat_count: Option<u64>,
}

impl Batch {
    /// Creates a batch.
    #[must_use]
    pub const fn new(sql: String, repeat_count: Option<u64>) -> Self {
        Self { sql, repeat_count }
    }

    /// Returns true if the batch holds nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.sql.trim().is_empty()
    }
}

impl From<Batch> for String {
    fn from(batch: Batch) -> Self {
        batch.sql
    }
}

/// Splits a T-SQL script into batches the way SQLCMD does.
///
/// A batch ends at a line whose first non-blank token is `GO`
/// (case-insensitive). The `GO` line and its terminator are dropped.
/// Comments are stripped; quoted strings and bracketed identifiers are
/// copied verbatim and never searched for `GO`.
///
/// The scan is total: unterminated comments, literals, or `GO` lines
/// run to the end of input instead of failing.
///
/// # Example
///
/// ```rust
/// use sqlspeaker_core::BatchSplitter;
///
/// let batches = BatchSplitter::new("SELECT 1\nGO\nSELECT 2").split();
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[0].sql, "SELECT 1\n");
/// assert_eq!(batches[1].sql, "SELECT 2");
/// ```
#[derive(Debug)]
pub struct BatchSplitter<'a> {
    /// Scan position over the script.
    cursor: Cursor<'a>,
    /// The batch being assembled.
    current: String,
    /// Completed batches, in script order.
    batches: Vec<Batch>,
}

impl<'a> BatchSplitter<'a> {
    /// Creates a splitter for the given script.
    #[must_use]
    pub const fn new(script: &'a str) -> Self {
        Self {
            cursor: Cursor::new(script),
            current: String::new(),
            batches: Vec::new(),
        }
    }

    /// Runs the scan and returns every batch.
    ///
    /// The result always holds `committed GO lines + 1` batches; the last
    /// one is whatever followed the final `GO`, possibly empty.
    #[must_use]
    pub fn split(mut self) -> Vec<Batch> {
        while let Some(c) = self.cursor.advance() {
            match c {
                '/' if self.cursor.peek() == Some('*') => {
                    self.cursor.advance();
                    self.skip_block_comment();
                }
                '-' if self.cursor.peek() == Some('-') => {
                    self.cursor.advance();
                    self.cursor.skip_while(|c| c != '\n');
                }
                '\'' | '"' => self.copy_quoted(c, c),
                '[' => self.copy_quoted(c, ']'),
                '\n' => {
                    self.current.push(c);
                    self.scan_go_line();
                }
                _ => self.current.push(c),
            }
        }

        let last = std::mem::take(&mut self.current);
        self.batches.push(Batch::new(last, None));
        self.batches
    }

    /// Skips past the closing `*/`, or to end of input.
    fn skip_block_comment(&mut self) {
        loop {
            match self.cursor.advance() {
                Some('*') if self.cursor.eat('/') => break,
                Some(_) => {}
                None => break,
            }
        }
    }

    /// Copies a literal through its closer. Doubled closers are not escapes.
    fn copy_quoted(&mut self, open: char, close: char) {
        self.current.push(open);
        while let Some(c) = self.cursor.advance() {
            self.current.push(c);
            if c == close {
                break;
            }
        }
    }

    /// Checks whether the line starting at the cursor is a `GO` line and
    /// commits the current batch if so.
    ///
    /// On a miss the cursor is left where it was, so the line is scanned
    /// as ordinary text.
    fn scan_go_line(&mut self) {
        let line_start = self.cursor.position();
        self.cursor.skip_while(|c| c == ' ' || c == '\t');

        let is_go = matches!(self.cursor.peek(), Some('G' | 'g'))
            && matches!(self.cursor.peek_next(), Some('O' | 'o'));
        if !is_go {
            self.cursor.reset(line_start);
            return;
        }
        self.cursor.advance();
        self.cursor.advance();

        let mut repeat = String::new();
        let mut only_count = true;
        loop {
            // A comment ends the GO line; leave it for the main loop.
            if self.cursor.at_comment_start() {
                self.commit(&repeat);
                return;
            }
            match self.cursor.advance() {
                Some('\n' | '\r' | ';') => {
                    self.commit(&repeat);
                    return;
                }
                Some(c) if c.is_ascii_digit() => repeat.push(c),
                Some(' ' | '\t') => {}
                // Anything else is skipped without ending the GO line.
                Some(_) => only_count = false,
                None => {
                    if only_count {
                        self.commit(&repeat);
                    } else {
                        self.cursor.reset(line_start);
                    }
                    return;
                }
            }
        }
    }

    fn commit(&mut self, repeat: &str) {
        let sql = std::mem::take(&mut self.current);
        self.batches.push(Batch::new(sql, repeat.parse().ok()));
    }
}

/// Splits a script into batch texts.
///
/// Shorthand for [`BatchSplitter::split`] when the repeat counts are not
/// needed.
#[must_use]
pub fn split(script: &str) -> Vec<String> {
    split_batches(script).into_iter().map(String::from).collect()
}

/// Splits a script into [`Batch`] values.
#[must_use]
pub fn split_batches(script: &str) -> Vec<Batch> {
    BatchSplitter::new(script).split()
}

/// Renders batches back into a script, with a `GO` line (and its repeat
/// count, if any) after every batch but the last.
///
/// The last batch is written verbatim, so splitting the result again gives
/// the same batches for any script whose comments have already been removed.
#[must_use]
pub fn join_batches(batches: &[Batch]) -> String {
    let mut script = String::new();
    let Some((last, closed)) = batches.split_last() else {
        return script;
    };

    for batch in closed {
        script.push_str(&batch.sql);
        if !batch.sql.ends_with('\n') {
            script.push('\n');
        }
        match batch.repeat_count {
            Some(count) => script.push_str(&format!("GO {count}\n")),
            None => script.push_str("GO\n"),
        }
    }
    script.push_str(&last.sql);
    script
}
