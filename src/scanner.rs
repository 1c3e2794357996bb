use crate::marker::{closes, marker, open_tag};
use log::{debug, warn};
use std::iter::Enumerate;
use std::mem;
use std::str::Split;

/// One icon cut from the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub filename: String,
    pub content: String,
}

/// Line scanner state. Owns the pending filename and any buffered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanner {
    Idle { pending: Option<String> },
    InBlock { filename: String, lines: Vec<String> },
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::Idle { pending: None }
    }
}

impl Scanner {
    /// The filename the next completed block would be written to.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Scanner::Idle { pending } => pending.as_deref(),
            Scanner::InBlock { filename, .. } => Some(filename),
        }
    }

    pub fn in_block(&self) -> bool {
        matches!(self, Scanner::InBlock { .. })
    }

    /// Advance over one line, yielding a block when the line completes one.
    pub fn step(self, line: &str) -> (Scanner, Option<Block>) {
        self.step_marked(line, marker(line))
    }

    /// As `step`, with the line's marker already parsed.
    pub fn step_marked(self, line: &str, mark: Option<&str>) -> (Scanner, Option<Block>) {
        if let Some(name) = mark {
            let filename = name.to_owned();
            return match open_tag(line) {
                Some(at) => open(filename, &line[at..], closes(line)),
                None => (self.rename(filename), None),
            };
        }

        match self {
            Scanner::Idle {
                pending: Some(filename),
            } if open_tag(line).is_some() => open(filename, line, closes(line)),
            Scanner::InBlock {
                filename,
                mut lines,
            } => {
                lines.push(line.to_owned());
                if closes(line) {
                    let content = lines.join("\n");
                    (Scanner::default(), Some(Block { filename, content }))
                } else {
                    (Scanner::InBlock { filename, lines }, None)
                }
            }
            idle => (idle, None),
        }
    }

    /// A marker without a tag replaces the filename but keeps any open buffer.
    fn rename(self, filename: String) -> Scanner {
        match self {
            Scanner::Idle { .. } => Scanner::Idle {
                pending: Some(filename),
            },
            Scanner::InBlock { lines, .. } => Scanner::InBlock { filename, lines },
        }
    }
}

fn open(filename: String, first: &str, closed: bool) -> (Scanner, Option<Block>) {
    if closed {
        let content = first.to_owned();
        (Scanner::default(), Some(Block { filename, content }))
    } else {
        let lines = vec![first.to_owned()];
        (Scanner::InBlock { filename, lines }, None)
    }
}

/// The blocks of a sheet in source order, scanned lazily.
pub struct Blocks<'a> {
    lines: Enumerate<Split<'a, char>>,
    scanner: Scanner,
}

impl<'a> Blocks<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').enumerate(),
            scanner: Scanner::default(),
        }
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        for (index, line) in self.lines.by_ref() {
            let number = index + 1;
            let mark = marker(line);
            if let Some(name) = mark {
                match self.scanner.filename() {
                    Some(old) if !self.scanner.in_block() => {
                        warn!("line {number}: marker {name} replaces pending {old}")
                    }
                    _ => debug!("line {number}: marker {name}"),
                }
            }
            let (scanner, block) = mem::take(&mut self.scanner).step_marked(line, mark);
            self.scanner = scanner;
            if let Some(block) = block {
                debug!("line {number}: closed {}", block.filename);
                return Some(block);
            }
        }
        if let Some(name) = self.scanner.filename() {
            debug!("marker {name} abandoned at end of sheet");
            self.scanner = Scanner::default();
        }
        None
    }
}
