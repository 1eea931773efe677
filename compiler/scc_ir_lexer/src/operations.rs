//! Operation mnemonics.
//!
//! The operation set is not fixed by the lexer: a back end supplies its
//! mnemonics and opcodes through an [`OperationTable`]. The default table is
//! empty, in which case every would-be mnemonic classifies as an identifier.

use std::fmt;

use rustc_hash::FxHashMap;

/// Opcode assigned to an operation by the table's owner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OpCode(pub u16);

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mnemonic to opcode map.
#[derive(Clone, Default, Debug)]
pub struct OperationTable {
    by_mnemonic: FxHashMap<String, OpCode>,
}

impl OperationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, mnemonic: impl Into<String>, op: OpCode) -> Self {
        self.insert(mnemonic, op);
        self
    }

    /// Register a mnemonic, returning the opcode it previously mapped to.
    pub fn insert(&mut self, mnemonic: impl Into<String>, op: OpCode) -> Option<OpCode> {
        self.by_mnemonic.insert(mnemonic.into(), op)
    }

    #[inline]
    pub fn lookup(&self, mnemonic: &str) -> Option<OpCode> {
        self.by_mnemonic.get(mnemonic).copied()
    }

    pub fn len(&self) -> usize {
        self.by_mnemonic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_mnemonic.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, OpCode)> for OperationTable {
    fn from_iter<I: IntoIterator<Item = (S, OpCode)>>(iter: I) -> Self {
        let mut table = OperationTable::new();
        table.extend(iter);
        table
    }
}

impl<S: Into<String>> Extend<(S, OpCode)> for OperationTable {
    fn extend<I: IntoIterator<Item = (S, OpCode)>>(&mut self, iter: I) {
        for (mnemonic, op) in iter {
            self.insert(mnemonic, op);
        }
    }
}
