//! Basic Blocks and Control Flow
//!
//! A basic block is a straight-line run of instructions that ends in exactly one
//! terminator. Blocks point at each other only through [`BlockId`] handles, so
//! loops (back edges) need no special ownership treatment.

use super::instr::{InstrId, Instruction};
use crate::error::{IrError, IrResult};
use std::fmt;

/// Basic block identifier, also its index in the owning executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl BlockId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bb{}", self.0)
    }
}

/// A basic block: sequence of instructions with single entry and exit
#[derive(Debug, Clone)]
pub struct BasicBlock {
    /// Unique identifier for this block
    pub id: BlockId,
    /// Name used when dumping, e.g. `Entry` or `WhileCond`
    pub name_hint: String,
    instructions: Vec<Instruction>,
}

impl BasicBlock {
    /// Create a new empty basic block
    pub fn new(id: BlockId, name_hint: impl Into<String>) -> Self {
        Self {
            id,
            name_hint: name_hint.into(),
            instructions: Vec::new(),
        }
    }

    /// `<name_hint>_<id>`, the form used in dumps. Control characters in the
    /// hint are escaped so a label always stays on one line.
    pub fn label(&self) -> String {
        format!("{}_{}", self.name_hint.escape_debug(), self.id.0)
    }

    /// Add an instruction to the end of this block.
    ///
    /// # Panics
    ///
    /// Panics if the block already ends with a terminator.
    pub(crate) fn append(&mut self, instr: Instruction) -> usize {
        if let Some(term) = self.terminator() {
            panic!(
                "internal compiler error: cannot append #{} ({}) to block {} after terminator #{} ({})",
                instr.id,
                instr.kind.name(),
                self.label(),
                term.id,
                term.kind.name()
            );
        }
        self.instructions.push(instr);
        self.instructions.len() - 1
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub(crate) fn instructions_mut(&mut self) -> &mut [Instruction] {
        &mut self.instructions
    }

    /// The trailing terminator, if the block has one
    pub fn terminator(&self) -> Option<&Instruction> {
        self.instructions.last().filter(|instr| instr.is_terminator())
    }

    /// Check if this block ends with a terminator
    pub fn is_terminated(&self) -> bool {
        self.terminator().is_some()
    }

    /// Leading phi instructions
    pub fn phis(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().take_while(|instr| instr.is_phi())
    }

    /// Successor blocks, in the order the terminator names them.
    ///
    /// A block that is not terminated yet has no successors.
    pub fn successors(&self) -> Vec<BlockId> {
        self.terminator()
            .map(|term| term.kind.block_targets())
            .unwrap_or_default()
    }

    /// Get the number of instructions, terminator included
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if this block has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Check the local block invariants: non-empty, exactly one terminator
    /// which is the last instruction, phis before everything else.
    pub fn verify(&self) -> IrResult<()> {
        let Some(last) = self.instructions.last() else {
            return Err(IrError::EmptyBlock { block: self.id });
        };
        if !last.is_terminator() {
            return Err(IrError::MissingTerminator { block: self.id });
        }

        let body = &self.instructions[..self.instructions.len() - 1];
        if let Some(term) = body.iter().find(|instr| instr.is_terminator()) {
            return Err(IrError::TerminatorNotLast {
                block: self.id,
                instr: term.id,
            });
        }

        let mut seen_non_phi = false;
        for instr in &self.instructions {
            if instr.is_phi() {
                if seen_non_phi {
                    return Err(IrError::PhiAfterNonPhi {
                        block: self.id,
                        instr: instr.id,
                    });
                }
            } else {
                seen_non_phi = true;
            }
        }

        Ok(())
    }
}
