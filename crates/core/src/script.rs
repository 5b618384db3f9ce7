//! Edit script types
//!
//! The engine's output is an ordered list of tagged operations that, applied
//! to the old sequence, reproduce the new one. Internally the toolbox works
//! with [`RawOp`]s over interned symbols; the dispatcher resolves them to
//! user-visible [`EditOp`]s once, at script-assembly time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tokenizers::{Symbol, TokenTable};

/// The three edit operation tags.
///
/// `Equal` and `Remove` consume one symbol from the old sequence; `Equal`
/// and `Add` emit one symbol to the new sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EditKind {
    Equal,
    Add,
    Remove,
}

/// An operation over an interned symbol, as produced by strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawOp {
    pub kind: EditKind,
    pub symbol: Symbol,
}

impl RawOp {
    pub fn equal(symbol: Symbol) -> Self {
        Self {
            kind: EditKind::Equal,
            symbol,
        }
    }

    pub fn add(symbol: Symbol) -> Self {
        Self {
            kind: EditKind::Add,
            symbol,
        }
    }

    pub fn remove(symbol: Symbol) -> Self {
        Self {
            kind: EditKind::Remove,
            symbol,
        }
    }
}

/// A user-visible operation with the symbol resolved back to its string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub kind: EditKind,
    pub text: String,
}

impl EditOp {
    pub fn new(kind: EditKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            EditKind::Equal => ' ',
            EditKind::Add => '+',
            EditKind::Remove => '-',
        };
        write!(f, "{}{}", tag, self.text)
    }
}

/// An ordered edit program transforming the old input into the new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    pub ops: Vec<EditOp>,
}

impl EditScript {
    /// Resolve raw symbol operations into a finished script.
    pub(crate) fn from_raw(raw: &[RawOp], table: &TokenTable) -> Self {
        let ops = raw
            .iter()
            .map(|op| EditOp::new(op.kind, table.resolve(op.symbol)))
            .collect();
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True when every operation is `Equal` (the inputs were identical).
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| op.kind == EditKind::Equal)
    }

    /// Count operations of one kind.
    pub fn count(&self, kind: EditKind) -> usize {
        self.ops.iter().filter(|op| op.kind == kind).count()
    }

    /// Apply the script to the old input, producing the new one.
    ///
    /// Returns `None` if the script does not apply cleanly, i.e. an `Equal`
    /// or `Remove` operation disagrees with the next unconsumed old element
    /// or the old input is not consumed exactly.
    pub fn apply_to(&self, old: &[String]) -> Option<Vec<String>> {
        let mut out = Vec::new();
        let mut cursor = 0usize;

        for op in &self.ops {
            match op.kind {
                EditKind::Equal => {
                    if old.get(cursor)? != &op.text {
                        return None;
                    }
                    out.push(op.text.clone());
                    cursor += 1;
                }
                EditKind::Remove => {
                    if old.get(cursor)? != &op.text {
                        return None;
                    }
                    cursor += 1;
                }
                EditKind::Add => out.push(op.text.clone()),
            }
        }

        if cursor == old.len() {
            Some(out)
        } else {
            None
        }
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}
