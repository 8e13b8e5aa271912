//! IR Builder
//!
//! Thin cursor over an [`Executable`] used by AST lowering: it tracks the block
//! being filled and the source span of the node being lowered, and hands out
//! instructions in emission order.

use super::block::BlockId;
use super::executable::Executable;
use super::instr::{InstrId, InstrKind, PhiIncoming, SwitchCase};
use super::ops::{BinOp, UnOp};
use super::value::ConstValue;
use crate::error::IrResult;
use crate::span::Span;

/// Emits instructions into an executable
pub struct IrBuilder {
    exec: Executable,
    current_block: Option<BlockId>,
    span: Span,
}

impl IrBuilder {
    /// Start building the executable of function `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            exec: Executable::new(name),
            current_block: None,
            span: Span::default(),
        }
    }

    /// Allocate a new block. The first block allocated is the entry block.
    ///
    /// The cursor does not move; call [`switch_to`](Self::switch_to) to fill it.
    pub fn new_block(&mut self, name_hint: &str) -> BlockId {
        let id = self.exec.add_block(name_hint);
        log::trace!("{}: new block {}_{}", self.exec.name, name_hint, id.as_u32());
        id
    }

    /// Move the cursor to the end of `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block` was not allocated by this builder.
    pub fn switch_to(&mut self, block: BlockId) {
        if self.exec.block(block).is_none() {
            panic!(
                "internal compiler error: switch to unknown block {} in `{}`",
                block, self.exec.name
            );
        }
        self.current_block = Some(block);
    }

    pub fn current_block(&self) -> Option<BlockId> {
        self.current_block
    }

    /// Source location attached to subsequently emitted instructions
    pub fn set_span(&mut self, span: Span) {
        self.span = span;
    }

    /// Check if the current block already ends with a terminator
    pub fn current_block_is_terminated(&self) -> bool {
        self.current_block
            .and_then(|id| self.exec.block(id))
            .map(|b| b.is_terminated())
            .unwrap_or(false)
    }

    /// Add an instruction to the current block.
    ///
    /// # Panics
    ///
    /// Panics if there is no current block or it is already terminated.
    pub fn emit(&mut self, kind: InstrKind) -> InstrId {
        let Some(block) = self.current_block else {
            panic!(
                "internal compiler error: emit {} in `{}` with no current block",
                kind.name(),
                self.exec.name
            );
        };
        if kind.is_terminator() {
            log::trace!(
                "{}: terminate {} with {} at {}",
                self.exec.name,
                block,
                kind.name(),
                self.span
            );
        }
        self.exec.append(block, kind, self.span)
    }

    pub fn constant(&mut self, literal: impl Into<ConstValue>) -> InstrId {
        self.emit(InstrKind::Const {
            literal: literal.into(),
        })
    }

    pub fn bin_op(&mut self, op: BinOp, op1: InstrId, op2: InstrId) -> InstrId {
        self.emit(InstrKind::BinOp {
            op,
            op1,
            op2,
            safety_check: true,
        })
    }

    pub fn un_op(&mut self, op: UnOp, operand: InstrId) -> InstrId {
        self.emit(InstrKind::UnOp { op, operand })
    }

    pub fn phi(&mut self, incoming: &[(BlockId, InstrId)]) -> InstrId {
        let incoming = incoming
            .iter()
            .map(|&(block, value)| PhiIncoming { block, value })
            .collect();
        self.emit(InstrKind::Phi { incoming })
    }

    pub fn br(&mut self, dest: BlockId) -> InstrId {
        self.emit(InstrKind::Br { dest })
    }

    pub fn cond_br(&mut self, condition: InstrId, then_block: BlockId, else_block: BlockId) -> InstrId {
        self.emit(InstrKind::CondBr {
            condition,
            then_block,
            else_block,
        })
    }

    pub fn switch_br(
        &mut self,
        target: InstrId,
        cases: &[(InstrId, BlockId)],
        else_block: BlockId,
    ) -> InstrId {
        let cases = cases
            .iter()
            .map(|&(value, block)| SwitchCase { value, block })
            .collect();
        self.emit(InstrKind::SwitchBr {
            target,
            cases,
            else_block,
        })
    }

    pub fn ret(&mut self, operand: Option<InstrId>) -> InstrId {
        self.emit(InstrKind::Return { operand })
    }

    pub fn unreachable(&mut self) -> InstrId {
        self.emit(InstrKind::Unreachable)
    }

    /// The executable built so far
    pub fn executable(&self) -> &Executable {
        &self.exec
    }

    /// Verify and return the finished executable
    pub fn finish(self) -> IrResult<Executable> {
        self.exec.verify()?;
        Ok(self.exec)
    }

    /// Return the executable without verifying it, e.g. to dump partial IR
    pub fn finish_unchecked(self) -> Executable {
        self.exec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;

    #[test]
    fn test_build_straight_line() {
        let mut b = IrBuilder::new("answer");
        let entry = b.new_block("Entry");
        b.switch_to(entry);
        let a = b.constant(40i128);
        let c = b.constant(2i128);
        let sum = b.bin_op(BinOp::Add, a, c);
        b.ret(Some(sum));
        assert!(b.current_block_is_terminated());

        let exec = b.finish().unwrap();
        assert_eq!(exec.block_count(), 1);
        assert_eq!(exec.instruction_count(), 4);
        assert_eq!(exec.instruction(sum).unwrap().operands(), vec![a, c]);
    }

    #[test]
    fn test_span_is_attached() {
        let mut b = IrBuilder::new("spans");
        let entry = b.new_block("Entry");
        b.switch_to(entry);
        b.set_span(Span::new(10, 14, 2, 3));
        let id = b.unreachable();
        let exec = b.finish_unchecked();
        assert_eq!(exec.instruction(id).unwrap().span, Span::new(10, 14, 2, 3));
    }

    #[test]
    fn test_finish_reports_unterminated_block() {
        let mut b = IrBuilder::new("open");
        let entry = b.new_block("Entry");
        b.switch_to(entry);
        b.constant(true);
        assert_eq!(
            b.finish().unwrap_err(),
            IrError::MissingTerminator { block: entry }
        );
    }

    #[test]
    #[should_panic(expected = "no current block")]
    fn test_emit_without_block_panics() {
        let mut b = IrBuilder::new("nowhere");
        b.unreachable();
    }

    #[test]
    #[should_panic(expected = "unknown block")]
    fn test_switch_to_unknown_block_panics() {
        let mut b = IrBuilder::new("lost");
        b.switch_to(BlockId(3));
    }
}
