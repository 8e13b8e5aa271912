//! IR consistency errors
//!
//! Every variant describes a defect in the builder or the analyzer, never in the
//! program being compiled. Callers that cannot recover treat them as fatal via
//! [`Executable::assert_valid`](crate::Executable::assert_valid).

use crate::ir::{BlockId, InstrId};
use thiserror::Error;

pub type IrResult<T> = Result<T, IrError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IrError {
    #[error("executable has no basic blocks")]
    EmptyExecutable,

    #[error("block {block} has no instructions")]
    EmptyBlock { block: BlockId },

    #[error("block {block} does not end with a terminator")]
    MissingTerminator { block: BlockId },

    #[error("terminator #{instr} in block {block} is not the last instruction")]
    TerminatorNotLast { block: BlockId, instr: InstrId },

    #[error("phi #{instr} in block {block} follows a non-phi instruction")]
    PhiAfterNonPhi { block: BlockId, instr: InstrId },

    #[error("phi #{instr} lists block {incoming} more than once")]
    DuplicatePhiIncoming { instr: InstrId, incoming: BlockId },

    #[error(
        "phi #{instr} in block {block} has incoming blocks [{found}] but the block's predecessors are [{expected}]"
    )]
    PhiPredecessorMismatch {
        instr: InstrId,
        block: BlockId,
        expected: String,
        found: String,
    },

    #[error("#{user} references instruction #{operand} which is not part of this executable")]
    DanglingInstruction { user: InstrId, operand: InstrId },

    #[error("#{user} references block {target} which is not part of this executable")]
    DanglingBlock { user: InstrId, target: BlockId },

    #[error("operand references of #{instr} form a cycle")]
    OperandCycle { instr: InstrId },

    #[error("instruction #{instr} is recorded in block {expected} but stored in block {found}")]
    MisplacedInstruction {
        instr: InstrId,
        expected: BlockId,
        found: BlockId,
    },

    #[error("instruction #{instr} is recorded at index {index} of block {block} but not stored there")]
    StaleInstructionIndex {
        instr: InstrId,
        block: BlockId,
        index: usize,
    },
}
