//! Cursor-based editing of the draft text.
//!
//! The widget owns the draft; the editor only tracks where the cursor sits
//! and computes the next draft for each edit. The cursor is a byte offset that
//! always lies on a char boundary.

/// A single editing command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    InsertStr(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Edit {
    /// Build an insertion from pasted text, folding carriage returns.
    pub fn paste(text: &str) -> Self {
        Edit::InsertStr(text.replace("\r\n", "\n").replace('\r', "\n"))
    }
}

#[derive(Clone, Debug, Default)]
pub struct DraftEditor {
    cursor: usize,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Re-anchor after the draft changed outside the editor.
    pub fn clamp(&mut self, text: &str) {
        if self.cursor > text.len() || !text.is_char_boundary(self.cursor) {
            self.cursor = text.len();
        }
    }

    /// Apply `edit` to `text`, returning the new draft if it changed.
    pub fn apply(&mut self, edit: Edit, text: &str) -> Option<String> {
        self.clamp(text);

        match edit {
            Edit::Insert(ch) => {
                let mut buf = [0u8; 4];
                Some(self.insert(text, ch.encode_utf8(&mut buf)))
            }
            Edit::InsertStr(s) if s.is_empty() => None,
            Edit::InsertStr(s) => Some(self.insert(text, &s)),
            Edit::Newline => Some(self.insert(text, "\n")),
            Edit::Backspace => {
                let start = prev_boundary(text, self.cursor)?;
                let next = splice(text, start, self.cursor, "");
                self.cursor = start;
                Some(next)
            }
            Edit::Delete => {
                let end = next_boundary(text, self.cursor)?;
                Some(splice(text, self.cursor, end, ""))
            }
            Edit::Left => {
                if let Some(pos) = prev_boundary(text, self.cursor) {
                    self.cursor = pos;
                }
                None
            }
            Edit::Right => {
                if let Some(pos) = next_boundary(text, self.cursor) {
                    self.cursor = pos;
                }
                None
            }
            Edit::Home => {
                self.cursor = line_start(text, self.cursor);
                None
            }
            Edit::End => {
                self.cursor = line_end(text, self.cursor);
                None
            }
            Edit::Up => {
                let (row, col) = self.position(text);
                if row > 0 {
                    self.cursor = offset_at(text, row - 1, col);
                }
                None
            }
            Edit::Down => {
                let (row, col) = self.position(text);
                if row + 1 < text.split('\n').count() {
                    self.cursor = offset_at(text, row + 1, col);
                }
                None
            }
        }
    }

    /// Zero-based (row, column) of the cursor, columns counted in chars.
    pub fn position(&self, text: &str) -> (usize, usize) {
        let cursor = self.cursor.min(text.len());
        let before = &text[..cursor];
        let row = before.matches('\n').count();
        let col = before[line_start(text, cursor)..].chars().count();
        (row, col)
    }

    fn insert(&mut self, text: &str, fragment: &str) -> String {
        let next = splice(text, self.cursor, self.cursor, fragment);
        self.cursor += fragment.len();
        next
    }
}

fn splice(text: &str, start: usize, end: usize, fragment: &str) -> String {
    let mut next = String::with_capacity(text.len() - (end - start) + fragment.len());
    next.push_str(&text[..start]);
    next.push_str(fragment);
    next.push_str(&text[end..]);
    next
}

fn prev_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|ch| pos + ch.len_utf8())
}

fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

/// Byte offset of `col` on line `row`, clamped to the line's length.
fn offset_at(text: &str, row: usize, col: usize) -> usize {
    let start: usize = text
        .split('\n')
        .take(row)
        .map(|line| line.len() + 1)
        .sum();
    let line = text[start..].split('\n').next().unwrap_or("");
    start
        + line
            .char_indices()
            .nth(col)
            .map_or(line.len(), |(i, _)| i)
}
