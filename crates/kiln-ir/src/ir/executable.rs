//! Executables
//!
//! An [`Executable`] is the IR of one function: an arena of basic blocks in
//! stored order, entry block first. It also owns the debug-id counter for its
//! instructions, so independent executables never share mutable state.

use super::block::{BasicBlock, BlockId};
use super::instr::{InstrId, InstrKind, Instruction};
use super::value::Value;
use crate::error::{IrError, IrResult};
use crate::span::Span;
use crate::types::{TypeId, TypeTable};
use rustc_hash::{FxHashMap, FxHashSet};

/// Where an instruction lives inside its executable
#[derive(Debug, Clone, Copy)]
struct InstrLocation {
    block: BlockId,
    index: usize,
}

/// The IR of a single function
#[derive(Debug, Clone)]
pub struct Executable {
    /// Function name, for diagnostics only
    pub name: String,
    /// Basic blocks (in order), indexed by `BlockId`
    blocks: Vec<BasicBlock>,
    /// Instruction locations, indexed by `InstrId`
    locations: Vec<InstrLocation>,
    /// Next debug id to hand out
    next_instr_id: u32,
    /// Names of the result types referenced by instructions
    types: TypeTable,
}

impl Executable {
    /// Create a new executable with no blocks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
            locations: Vec::new(),
            next_instr_id: 0,
            types: TypeTable::new(),
        }
    }

    /// Create and add a new empty block, returning its ID
    pub fn add_block(&mut self, name_hint: impl Into<String>) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(BasicBlock::new(id, name_hint));
        id
    }

    /// Append a new instruction to `block`, assigning it the next debug id.
    ///
    /// # Panics
    ///
    /// Panics if `block` does not belong to this executable or is already terminated.
    pub fn append(&mut self, block: BlockId, kind: InstrKind, span: Span) -> InstrId {
        let id = InstrId(self.next_instr_id);
        let name = &self.name;
        let target = self.blocks.get_mut(block.index()).unwrap_or_else(|| {
            panic!("internal compiler error: block {} does not exist in `{}`", block, name)
        });

        log::trace!("{}: append #{} ({}) to {}", name, id, kind.name(), target.label());
        let index = target.append(Instruction::new(id, kind, span));

        self.locations.push(InstrLocation { block, index });
        self.next_instr_id += 1;
        id
    }

    /// Get a block by ID
    pub fn block(&self, id: BlockId) -> Option<&BasicBlock> {
        self.blocks.get(id.index())
    }

    /// Get the entry block
    pub fn entry(&self) -> Option<&BasicBlock> {
        self.blocks.first()
    }

    /// Iterate over all blocks in stored order
    pub fn blocks(&self) -> impl Iterator<Item = &BasicBlock> {
        self.blocks.iter()
    }

    /// Get the number of blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if this executable has any blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up an instruction by debug id
    pub fn instruction(&self, id: InstrId) -> Option<&Instruction> {
        let loc = self.locations.get(id.index())?;
        self.blocks[loc.block.index()].instructions().get(loc.index)
    }

    fn instruction_mut(&mut self, id: InstrId) -> Option<&mut Instruction> {
        let loc = *self.locations.get(id.index())?;
        self.blocks[loc.block.index()]
            .instructions_mut()
            .get_mut(loc.index)
    }

    /// Block that contains the instruction
    pub fn block_of(&self, id: InstrId) -> Option<BlockId> {
        self.locations.get(id.index()).map(|loc| loc.block)
    }

    /// Compute the total number of instructions across all blocks
    pub fn instruction_count(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum()
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeTable {
        &mut self.types
    }

    /// Record the analysis result of an instruction: its result type and value.
    ///
    /// # Panics
    ///
    /// Panics if the instruction does not exist or was already resolved; each
    /// instruction is resolved exactly once.
    pub fn resolve(&mut self, id: InstrId, ty: TypeId, value: Value) {
        let name = self.name.clone();
        let instr = self.instruction_mut(id).unwrap_or_else(|| {
            panic!("internal compiler error: #{} does not exist in `{}`", id, name)
        });
        if instr.is_resolved() {
            panic!(
                "internal compiler error: #{} ({}) in `{}` was already resolved",
                id,
                instr.kind.name(),
                name
            );
        }

        log::trace!("{}: resolve #{} ({}) to {:?}", name, id, instr.kind.name(), value);
        instr.ty = Some(ty);
        instr.value = value;
    }

    /// Point every use of `old` at `new` instead, returning the number of rewritten operands
    pub fn replace_all_uses(&mut self, old: InstrId, new: InstrId) -> usize {
        let mut replaced = 0;
        for block in &mut self.blocks {
            for instr in block.instructions_mut() {
                replaced += instr.replace_operand(old, new);
            }
        }
        log::debug!("{}: replaced {} uses of #{} with #{}", self.name, replaced, old, new);
        replaced
    }

    /// Number of operand references to each instruction, indexed by debug id
    pub fn use_counts(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.next_instr_id as usize];
        for block in &self.blocks {
            for instr in block.instructions() {
                for operand in instr.operands() {
                    if let Some(count) = counts.get_mut(operand.index()) {
                        *count += 1;
                    }
                }
            }
        }
        counts
    }

    /// Predecessors of every block, each listed once, in stored block order
    pub fn predecessor_map(&self) -> FxHashMap<BlockId, Vec<BlockId>> {
        let mut preds: FxHashMap<BlockId, Vec<BlockId>> = FxHashMap::default();
        for block in &self.blocks {
            for succ in block.successors() {
                let entry = preds.entry(succ).or_default();
                if !entry.contains(&block.id) {
                    entry.push(block.id);
                }
            }
        }
        preds
    }

    /// Predecessors of one block
    pub fn predecessors(&self, block: BlockId) -> Vec<BlockId> {
        self.predecessor_map().remove(&block).unwrap_or_default()
    }

    /// Validate the executable structure.
    ///
    /// Checks every block's local invariants, that every handle resolves inside
    /// this executable, that phis list exactly the actual predecessors of their
    /// block, and that instruction operands never form a cycle that does not
    /// pass through a phi.
    pub fn verify(&self) -> IrResult<()> {
        let result = self.verify_inner();
        match &result {
            Ok(()) => log::debug!(
                "{}: verified {} blocks, {} instructions",
                self.name,
                self.block_count(),
                self.instruction_count()
            ),
            Err(err) => log::debug!("{}: verification failed: {}", self.name, err),
        }
        result
    }

    /// Verify and treat any violation as a fatal internal error.
    ///
    /// # Panics
    ///
    /// Panics with the first violation found.
    pub fn assert_valid(&self) {
        if let Err(err) = self.verify() {
            panic!("internal compiler error in `{}`: {}", self.name, err);
        }
    }

    fn verify_inner(&self) -> IrResult<()> {
        if self.blocks.is_empty() {
            return Err(IrError::EmptyExecutable);
        }

        for block in &self.blocks {
            block.verify()?;
        }

        self.verify_locations()?;
        self.verify_references()?;
        self.verify_phis()?;
        self.verify_acyclic_operands()
    }

    fn verify_locations(&self) -> IrResult<()> {
        for block in &self.blocks {
            for instr in block.instructions() {
                let loc = self.locations.get(instr.id.index()).ok_or(
                    IrError::DanglingInstruction {
                        user: instr.id,
                        operand: instr.id,
                    },
                )?;
                if loc.block != block.id {
                    return Err(IrError::MisplacedInstruction {
                        instr: instr.id,
                        expected: loc.block,
                        found: block.id,
                    });
                }
                let stored = block.instructions().get(loc.index).map(|i| i.id);
                if stored != Some(instr.id) {
                    return Err(IrError::StaleInstructionIndex {
                        instr: instr.id,
                        block: block.id,
                        index: loc.index,
                    });
                }
            }
        }
        Ok(())
    }

    fn verify_references(&self) -> IrResult<()> {
        for block in &self.blocks {
            for instr in block.instructions() {
                for operand in instr.operands() {
                    if self.instruction(operand).is_none() {
                        return Err(IrError::DanglingInstruction {
                            user: instr.id,
                            operand,
                        });
                    }
                }
                for target in instr.kind.block_targets() {
                    if self.block(target).is_none() {
                        return Err(IrError::DanglingBlock {
                            user: instr.id,
                            target,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn verify_phis(&self) -> IrResult<()> {
        let preds = self.predecessor_map();
        for block in &self.blocks {
            let expected: FxHashSet<BlockId> = preds
                .get(&block.id)
                .map(|p| p.iter().copied().collect())
                .unwrap_or_default();

            for phi in block.phis() {
                let InstrKind::Phi { incoming } = &phi.kind else {
                    continue;
                };

                let mut found = FxHashSet::default();
                for inc in incoming {
                    if !found.insert(inc.block) {
                        return Err(IrError::DuplicatePhiIncoming {
                            instr: phi.id,
                            incoming: inc.block,
                        });
                    }
                }

                if found != expected {
                    return Err(IrError::PhiPredecessorMismatch {
                        instr: phi.id,
                        block: block.id,
                        expected: self.format_block_set(&expected),
                        found: self.format_block_set(&found),
                    });
                }
            }
        }
        Ok(())
    }

    fn format_block_set(&self, set: &FxHashSet<BlockId>) -> String {
        let mut ids: Vec<_> = set.iter().copied().collect();
        ids.sort();
        ids.iter()
            .map(|id| match self.block(*id) {
                Some(block) => block.label(),
                None => id.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Depth-first search over operand edges; an edge back into the
    /// current path is a cycle. Phi operands are not followed, since loop
    /// carried values reach their phi through a back edge.
    fn verify_acyclic_operands(&self) -> IrResult<()> {
        const UNVISITED: u8 = 0;
        const ON_PATH: u8 = 1;
        const DONE: u8 = 2;

        let count = self.next_instr_id as usize;
        let mut state = vec![UNVISITED; count];

        for root in 0..count {
            if state[root] != UNVISITED {
                continue;
            }
            let root = InstrId(root as u32);
            let mut stack: Vec<(InstrId, Vec<InstrId>)> = Vec::new();
            state[root.index()] = ON_PATH;
            stack.push((root, self.operands_of(root)));

            while let Some((current, pending)) = stack.last_mut() {
                match pending.pop() {
                    Some(next) => match state.get(next.index()).copied() {
                        Some(ON_PATH) => return Err(IrError::OperandCycle { instr: next }),
                        Some(UNVISITED) => {
                            state[next.index()] = ON_PATH;
                            let operands = self.operands_of(next);
                            stack.push((next, operands));
                        }
                        _ => {}
                    },
                    None => {
                        state[current.index()] = DONE;
                        stack.pop();
                    }
                }
            }
        }
        Ok(())
    }

    fn operands_of(&self, id: InstrId) -> Vec<InstrId> {
        self.instruction(id)
            .filter(|instr| !instr.is_phi())
            .map(|instr| instr.operands())
            .unwrap_or_default()
    }
}
