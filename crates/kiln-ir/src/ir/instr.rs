//! IR Instructions
//!
//! One closed enum, [`InstrKind`], lists every operation the IR can express. Each
//! variant carries only the operands its kind needs. Operands are [`InstrId`]
//! handles to other instructions of the same executable and [`BlockId`] handles
//! to its blocks; nothing here owns another instruction.

use super::block::BlockId;
use super::ops::{AtomicOrder, AtomicRmwOp, BinOp, CastOp, OverflowOp, UnOp};
use super::value::{ConstValue, Value};
use crate::span::Span;
use crate::types::TypeId;
use std::fmt;

/// Debug id of an instruction, unique within its executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstrId(pub u32);

impl InstrId {
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

impl fmt::Display for InstrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `case => block` arm of a switch terminator
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub value: InstrId,
    pub block: BlockId,
}

/// One `predecessor: value` pair of a phi
#[derive(Debug, Clone, PartialEq)]
pub struct PhiIncoming {
    pub block: BlockId,
    pub value: InstrId,
}

/// One `.name = value` entry of a struct initializer
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInit {
    pub name: String,
    pub value: InstrId,
}

/// An IR instruction together with its analysis state
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub id: InstrId,
    /// Location of the AST node this was lowered from
    pub span: Span,
    /// Result type, `None` until analysis assigns one
    pub ty: Option<TypeId>,
    pub value: Value,
    pub kind: InstrKind,
}

impl Instruction {
    pub fn new(id: InstrId, kind: InstrKind, span: Span) -> Self {
        Self {
            id,
            span,
            ty: None,
            value: Value::Unknown,
            kind,
        }
    }

    pub fn is_terminator(&self) -> bool {
        self.kind.is_terminator()
    }

    pub fn is_phi(&self) -> bool {
        matches!(self.kind, InstrKind::Phi { .. })
    }

    pub fn has_side_effects(&self) -> bool {
        self.kind.has_side_effects()
    }

    /// Whether analysis has already filled in type and value
    pub fn is_resolved(&self) -> bool {
        self.ty.is_some() || !self.value.is_unknown()
    }

    /// Instruction operands in field order
    pub fn operands(&self) -> Vec<InstrId> {
        self.kind.operands()
    }

    /// Rewrite every operand equal to `old` into `new`, returning how many were rewritten
    pub fn replace_operand(&mut self, old: InstrId, new: InstrId) -> usize {
        self.kind.replace_operand(old, new)
    }
}

/// Every instruction kind of the IR
#[derive(Debug, Clone, PartialEq)]
pub enum InstrKind {
    // ------------------------------------------------------------------
    // Terminators
    // ------------------------------------------------------------------
    /// Unconditional branch
    Br { dest: BlockId },

    CondBr {
        condition: InstrId,
        then_block: BlockId,
        else_block: BlockId,
    },

    /// Multi-way branch; `else_block` is taken when no case matches
    SwitchBr {
        target: InstrId,
        cases: Vec<SwitchCase>,
        else_block: BlockId,
    },

    Return { operand: Option<InstrId> },

    Unreachable,

    // ------------------------------------------------------------------
    // Control-flow merge
    // ------------------------------------------------------------------
    Phi { incoming: Vec<PhiIncoming> },

    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------
    Const { literal: ConstValue },

    /// Stand-in for a construct the generator could not lower yet
    Invalid,

    // ------------------------------------------------------------------
    // Arithmetic and logic
    // ------------------------------------------------------------------
    BinOp {
        op: BinOp,
        op1: InstrId,
        op2: InstrId,
        safety_check: bool,
    },

    UnOp { op: UnOp, operand: InstrId },

    /// Arithmetic that stores the wrapped result through `result_ptr`
    /// and yields whether it overflowed
    OverflowOp {
        op: OverflowOp,
        operand_type: InstrId,
        op1: InstrId,
        op2: InstrId,
        result_ptr: InstrId,
    },

    Clz { operand: InstrId },
    Ctz { operand: InstrId },
    PopCount { operand: InstrId },

    // ------------------------------------------------------------------
    // Memory and pointers
    // ------------------------------------------------------------------
    DeclVar {
        name: String,
        var_type: Option<InstrId>,
        align: Option<InstrId>,
        init: InstrId,
        is_const: bool,
    },

    VarPtr { name: String },

    LoadPtr { ptr: InstrId },

    StorePtr { ptr: InstrId, value: InstrId },

    Ref { value: InstrId, is_const: bool },

    ElemPtr {
        array_ptr: InstrId,
        index: InstrId,
        safety_check: bool,
    },

    FieldPtr {
        container_ptr: InstrId,
        field_name: String,
    },

    StructFieldPtr {
        struct_ptr: InstrId,
        field_name: String,
    },

    Memset {
        dest_ptr: InstrId,
        byte: InstrId,
        count: InstrId,
    },

    Memcpy {
        dest_ptr: InstrId,
        src_ptr: InstrId,
        count: InstrId,
    },

    Slice {
        ptr: InstrId,
        start: InstrId,
        end: Option<InstrId>,
        safety_check: bool,
    },

    Call {
        callee: InstrId,
        args: Vec<InstrId>,
        is_async: bool,
    },

    // ------------------------------------------------------------------
    // Switch helpers
    // ------------------------------------------------------------------
    /// Value a switch dispatches on, loaded from the switched-on pointer
    SwitchTarget { target_ptr: InstrId },

    /// Payload captured by a switch prong
    SwitchVar {
        target_ptr: InstrId,
        prong_value: InstrId,
    },

    // ------------------------------------------------------------------
    // Type-level operations
    // ------------------------------------------------------------------
    SizeOf { type_value: InstrId },
    AlignOf { type_value: InstrId },
    TypeOf { value: InstrId },
    TypeName { type_value: InstrId },
    MemberCount { container: InstrId },

    /// Implicit conversion inserted by analysis
    Cast { value: InstrId, dest_type: TypeId },

    /// Conversion spelled out in the source program
    ExplicitCast {
        op: CastOp,
        dest_type: InstrId,
        target: InstrId,
    },

    IntToPtr { dest_type: InstrId, target: InstrId },
    PtrToInt { target: InstrId },
    IntToEnum { dest_type: InstrId, target: InstrId },
    EnumToInt { target: InstrId },
    IntToErr { target: InstrId },
    ErrToInt { target: InstrId },

    // ------------------------------------------------------------------
    // Compile-time builtins
    // ------------------------------------------------------------------
    Import { name: InstrId },
    CompileErr { msg: InstrId },
    CompileLog { msgs: Vec<InstrId> },
    EmbedFile { name: InstrId },
    SetCold { is_cold: InstrId },
    SetRuntimeSafety { enabled: InstrId },

    // ------------------------------------------------------------------
    // Coroutines
    // ------------------------------------------------------------------
    CoroId { promise_ptr: InstrId },
    CoroAlloc { coro_id: InstrId },
    CoroSize,
    CoroBegin {
        coro_id: InstrId,
        coro_mem_ptr: InstrId,
    },
    CoroAllocFail { err_val: InstrId },
    CoroSuspend {
        save_point: Option<InstrId>,
        is_final: InstrId,
    },
    CoroEnd,
    CoroFree {
        coro_id: InstrId,
        coro_handle: InstrId,
    },
    CoroResume { awaiter_handle: InstrId },
    CoroSave { coro_handle: InstrId },
    CoroPromise { coro_handle: InstrId },
    Cancel { target: InstrId },

    // ------------------------------------------------------------------
    // Atomics
    // ------------------------------------------------------------------
    AtomicRmw {
        operand_type: InstrId,
        ptr: InstrId,
        op: AtomicRmwOp,
        operand: InstrId,
        ordering: AtomicOrder,
    },

    AtomicLoad {
        operand_type: InstrId,
        ptr: InstrId,
        ordering: AtomicOrder,
    },

    Fence { ordering: AtomicOrder },

    Cmpxchg {
        ptr: InstrId,
        cmp_value: InstrId,
        new_value: InstrId,
        success_order: AtomicOrder,
        failure_order: AtomicOrder,
        is_weak: bool,
    },

    // ------------------------------------------------------------------
    // Optionals and error unions
    // ------------------------------------------------------------------
    TestNonNull { value: InstrId },
    UnwrapOptional { value: InstrId, safety_check: bool },
    OptionalWrap { value: InstrId },
    TestErr { value: InstrId },
    UnwrapErrCode { err_union: InstrId },
    UnwrapErrPayload {
        err_union: InstrId,
        safety_check: bool,
    },
    ErrWrapCode { value: InstrId },
    ErrWrapPayload { value: InstrId },
    ErrName { value: InstrId },

    // ------------------------------------------------------------------
    // Aggregate initialization
    // ------------------------------------------------------------------
    /// Array-style initializer: `T{a, b, c}`
    ContainerInitList {
        container_type: InstrId,
        items: Vec<InstrId>,
    },

    /// Struct-style initializer: `T{.a = x, .b = y}`
    ContainerInitFields {
        container_type: InstrId,
        fields: Vec<FieldInit>,
    },

    UnionInit {
        union_type: InstrId,
        field_name: String,
        init: InstrId,
    },

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------
    Panic { msg: InstrId },
    Breakpoint,
    ReturnAddress,
    FrameAddress,
}

/// Call `$f` on every instruction operand of `$kind`, in field order.
///
/// Works on both `&InstrKind` and `&mut InstrKind`: bindings follow the
/// reference mode of the scrutinee, so `$f` sees `&InstrId` or `&mut InstrId`.
macro_rules! for_each_operand {
    ($kind:expr, $f:ident) => {
        match $kind {
            InstrKind::Br { .. }
            | InstrKind::Unreachable
            | InstrKind::Const { .. }
            | InstrKind::Invalid
            | InstrKind::VarPtr { .. }
            | InstrKind::CoroSize
            | InstrKind::CoroEnd
            | InstrKind::Fence { .. }
            | InstrKind::Breakpoint
            | InstrKind::ReturnAddress
            | InstrKind::FrameAddress => {}

            InstrKind::CondBr { condition, .. } => $f(condition),
            InstrKind::SwitchBr { target, cases, .. } => {
                $f(target);
                for SwitchCase { value, .. } in cases {
                    $f(value);
                }
            }
            InstrKind::Return { operand } => {
                if let Some(operand) = operand {
                    $f(operand);
                }
            }
            InstrKind::Phi { incoming } => {
                for PhiIncoming { value, .. } in incoming {
                    $f(value);
                }
            }

            InstrKind::BinOp { op1, op2, .. } => {
                $f(op1);
                $f(op2);
            }
            InstrKind::UnOp { operand, .. } => $f(operand),
            InstrKind::OverflowOp {
                operand_type,
                op1,
                op2,
                result_ptr,
                ..
            } => {
                $f(operand_type);
                $f(op1);
                $f(op2);
                $f(result_ptr);
            }
            InstrKind::Clz { operand }
            | InstrKind::Ctz { operand }
            | InstrKind::PopCount { operand } => $f(operand),

            InstrKind::DeclVar {
                var_type,
                align,
                init,
                ..
            } => {
                if let Some(var_type) = var_type {
                    $f(var_type);
                }
                if let Some(align) = align {
                    $f(align);
                }
                $f(init);
            }
            InstrKind::LoadPtr { ptr } => $f(ptr),
            InstrKind::StorePtr { ptr, value } => {
                $f(ptr);
                $f(value);
            }
            InstrKind::Ref { value, .. } => $f(value),
            InstrKind::ElemPtr {
                array_ptr, index, ..
            } => {
                $f(array_ptr);
                $f(index);
            }
            InstrKind::FieldPtr { container_ptr, .. } => $f(container_ptr),
            InstrKind::StructFieldPtr { struct_ptr, .. } => $f(struct_ptr),
            InstrKind::Memset {
                dest_ptr,
                byte,
                count,
            } => {
                $f(dest_ptr);
                $f(byte);
                $f(count);
            }
            InstrKind::Memcpy {
                dest_ptr,
                src_ptr,
                count,
            } => {
                $f(dest_ptr);
                $f(src_ptr);
                $f(count);
            }
            InstrKind::Slice { ptr, start, end, .. } => {
                $f(ptr);
                $f(start);
                if let Some(end) = end {
                    $f(end);
                }
            }
            InstrKind::Call { callee, args, .. } => {
                $f(callee);
                for arg in args {
                    $f(arg);
                }
            }

            InstrKind::SwitchTarget { target_ptr } => $f(target_ptr),
            InstrKind::SwitchVar {
                target_ptr,
                prong_value,
            } => {
                $f(target_ptr);
                $f(prong_value);
            }

            InstrKind::SizeOf { type_value }
            | InstrKind::AlignOf { type_value }
            | InstrKind::TypeName { type_value } => $f(type_value),
            InstrKind::TypeOf { value } => $f(value),
            InstrKind::MemberCount { container } => $f(container),
            InstrKind::Cast { value, .. } => $f(value),
            InstrKind::ExplicitCast {
                dest_type, target, ..
            }
            | InstrKind::IntToPtr { dest_type, target }
            | InstrKind::IntToEnum { dest_type, target } => {
                $f(dest_type);
                $f(target);
            }
            InstrKind::PtrToInt { target }
            | InstrKind::EnumToInt { target }
            | InstrKind::IntToErr { target }
            | InstrKind::ErrToInt { target } => $f(target),

            InstrKind::Import { name } | InstrKind::EmbedFile { name } => $f(name),
            InstrKind::CompileErr { msg } | InstrKind::Panic { msg } => $f(msg),
            InstrKind::CompileLog { msgs } => {
                for msg in msgs {
                    $f(msg);
                }
            }
            InstrKind::SetCold { is_cold } => $f(is_cold),
            InstrKind::SetRuntimeSafety { enabled } => $f(enabled),

            InstrKind::CoroId { promise_ptr } => $f(promise_ptr),
            InstrKind::CoroAlloc { coro_id } => $f(coro_id),
            InstrKind::CoroBegin {
                coro_id,
                coro_mem_ptr,
            } => {
                $f(coro_id);
                $f(coro_mem_ptr);
            }
            InstrKind::CoroAllocFail { err_val } => $f(err_val),
            InstrKind::CoroSuspend {
                save_point,
                is_final,
            } => {
                if let Some(save_point) = save_point {
                    $f(save_point);
                }
                $f(is_final);
            }
            InstrKind::CoroFree {
                coro_id,
                coro_handle,
            } => {
                $f(coro_id);
                $f(coro_handle);
            }
            InstrKind::CoroResume { awaiter_handle } => $f(awaiter_handle),
            InstrKind::CoroSave { coro_handle } | InstrKind::CoroPromise { coro_handle } => {
                $f(coro_handle)
            }
            InstrKind::Cancel { target } => $f(target),

            InstrKind::AtomicRmw {
                operand_type,
                ptr,
                operand,
                ..
            } => {
                $f(operand_type);
                $f(ptr);
                $f(operand);
            }
            InstrKind::AtomicLoad {
                operand_type, ptr, ..
            } => {
                $f(operand_type);
                $f(ptr);
            }
            InstrKind::Cmpxchg {
                ptr,
                cmp_value,
                new_value,
                ..
            } => {
                $f(ptr);
                $f(cmp_value);
                $f(new_value);
            }

            InstrKind::TestNonNull { value }
            | InstrKind::UnwrapOptional { value, .. }
            | InstrKind::OptionalWrap { value }
            | InstrKind::TestErr { value }
            | InstrKind::ErrWrapCode { value }
            | InstrKind::ErrWrapPayload { value }
            | InstrKind::ErrName { value } => $f(value),
            InstrKind::UnwrapErrCode { err_union }
            | InstrKind::UnwrapErrPayload { err_union, .. } => $f(err_union),

            InstrKind::ContainerInitList {
                container_type,
                items,
            } => {
                $f(container_type);
                for item in items {
                    $f(item);
                }
            }
            InstrKind::ContainerInitFields {
                container_type,
                fields,
            } => {
                $f(container_type);
                for FieldInit { value, .. } in fields {
                    $f(value);
                }
            }
            InstrKind::UnionInit {
                union_type, init, ..
            } => {
                $f(union_type);
                $f(init);
            }
        }
    };
}

impl InstrKind {
    /// Check if this kind ends a basic block
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            InstrKind::Br { .. }
                | InstrKind::CondBr { .. }
                | InstrKind::SwitchBr { .. }
                | InstrKind::Return { .. }
                | InstrKind::Unreachable
        )
    }

    /// Check if this kind has effects beyond producing its value.
    ///
    /// Such instructions are always live; the dumper shows `-` instead of a use count.
    pub fn has_side_effects(&self) -> bool {
        match self {
            InstrKind::Br { .. }
            | InstrKind::CondBr { .. }
            | InstrKind::SwitchBr { .. }
            | InstrKind::Return { .. }
            | InstrKind::Unreachable
            | InstrKind::OverflowOp { .. }
            | InstrKind::DeclVar { .. }
            | InstrKind::StorePtr { .. }
            | InstrKind::Memset { .. }
            | InstrKind::Memcpy { .. }
            | InstrKind::Call { .. }
            | InstrKind::CompileErr { .. }
            | InstrKind::CompileLog { .. }
            | InstrKind::SetCold { .. }
            | InstrKind::SetRuntimeSafety { .. }
            | InstrKind::CoroId { .. }
            | InstrKind::CoroAlloc { .. }
            | InstrKind::CoroBegin { .. }
            | InstrKind::CoroAllocFail { .. }
            | InstrKind::CoroSuspend { .. }
            | InstrKind::CoroEnd
            | InstrKind::CoroResume { .. }
            | InstrKind::CoroSave { .. }
            | InstrKind::Cancel { .. }
            | InstrKind::AtomicRmw { .. }
            | InstrKind::Fence { .. }
            | InstrKind::Cmpxchg { .. }
            | InstrKind::Panic { .. }
            | InstrKind::Breakpoint => true,

            InstrKind::Phi { .. }
            | InstrKind::Const { .. }
            | InstrKind::Invalid
            | InstrKind::BinOp { .. }
            | InstrKind::UnOp { .. }
            | InstrKind::Clz { .. }
            | InstrKind::Ctz { .. }
            | InstrKind::PopCount { .. }
            | InstrKind::VarPtr { .. }
            | InstrKind::LoadPtr { .. }
            | InstrKind::Ref { .. }
            | InstrKind::ElemPtr { .. }
            | InstrKind::FieldPtr { .. }
            | InstrKind::StructFieldPtr { .. }
            | InstrKind::Slice { .. }
            | InstrKind::SwitchTarget { .. }
            | InstrKind::SwitchVar { .. }
            | InstrKind::SizeOf { .. }
            | InstrKind::AlignOf { .. }
            | InstrKind::TypeOf { .. }
            | InstrKind::TypeName { .. }
            | InstrKind::MemberCount { .. }
            | InstrKind::Cast { .. }
            | InstrKind::ExplicitCast { .. }
            | InstrKind::IntToPtr { .. }
            | InstrKind::PtrToInt { .. }
            | InstrKind::IntToEnum { .. }
            | InstrKind::EnumToInt { .. }
            | InstrKind::IntToErr { .. }
            | InstrKind::ErrToInt { .. }
            | InstrKind::Import { .. }
            | InstrKind::EmbedFile { .. }
            | InstrKind::CoroSize
            | InstrKind::CoroFree { .. }
            | InstrKind::CoroPromise { .. }
            | InstrKind::AtomicLoad { .. }
            | InstrKind::TestNonNull { .. }
            | InstrKind::UnwrapOptional { .. }
            | InstrKind::OptionalWrap { .. }
            | InstrKind::TestErr { .. }
            | InstrKind::UnwrapErrCode { .. }
            | InstrKind::UnwrapErrPayload { .. }
            | InstrKind::ErrWrapCode { .. }
            | InstrKind::ErrWrapPayload { .. }
            | InstrKind::ErrName { .. }
            | InstrKind::ContainerInitList { .. }
            | InstrKind::ContainerInitFields { .. }
            | InstrKind::UnionInit { .. }
            | InstrKind::ReturnAddress
            | InstrKind::FrameAddress => false,
        }
    }

    /// Instruction operands in field order
    pub fn operands(&self) -> Vec<InstrId> {
        let mut operands = Vec::new();
        let mut push = |id: &InstrId| operands.push(*id);
        for_each_operand!(self, push);
        operands
    }

    /// Rewrite every operand equal to `old` into `new`
    pub fn replace_operand(&mut self, old: InstrId, new: InstrId) -> usize {
        let mut replaced = 0;
        let mut rewrite = |id: &mut InstrId| {
            if *id == old {
                *id = new;
                replaced += 1;
            }
        };
        for_each_operand!(self, rewrite);
        replaced
    }

    /// Blocks this instruction refers to: branch targets for terminators,
    /// incoming blocks for phis
    pub fn block_targets(&self) -> Vec<BlockId> {
        match self {
            InstrKind::Br { dest } => vec![*dest],
            InstrKind::CondBr {
                then_block,
                else_block,
                ..
            } => vec![*then_block, *else_block],
            InstrKind::SwitchBr {
                cases, else_block, ..
            } => {
                let mut targets: Vec<_> = cases.iter().map(|case| case.block).collect();
                targets.push(*else_block);
                targets
            }
            InstrKind::Phi { incoming } => incoming.iter().map(|inc| inc.block).collect(),
            _ => Vec::new(),
        }
    }

    /// Stable snake_case name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            InstrKind::Br { .. } => "br",
            InstrKind::CondBr { .. } => "cond_br",
            InstrKind::SwitchBr { .. } => "switch_br",
            InstrKind::Return { .. } => "return",
            InstrKind::Unreachable => "unreachable",
            InstrKind::Phi { .. } => "phi",
            InstrKind::Const { .. } => "const",
            InstrKind::Invalid => "invalid",
            InstrKind::BinOp { .. } => "bin_op",
            InstrKind::UnOp { .. } => "un_op",
            InstrKind::OverflowOp { .. } => "overflow_op",
            InstrKind::Clz { .. } => "clz",
            InstrKind::Ctz { .. } => "ctz",
            InstrKind::PopCount { .. } => "pop_count",
            InstrKind::DeclVar { .. } => "decl_var",
            InstrKind::VarPtr { .. } => "var_ptr",
            InstrKind::LoadPtr { .. } => "load_ptr",
            InstrKind::StorePtr { .. } => "store_ptr",
            InstrKind::Ref { .. } => "ref",
            InstrKind::ElemPtr { .. } => "elem_ptr",
            InstrKind::FieldPtr { .. } => "field_ptr",
            InstrKind::StructFieldPtr { .. } => "struct_field_ptr",
            InstrKind::Memset { .. } => "memset",
            InstrKind::Memcpy { .. } => "memcpy",
            InstrKind::Slice { .. } => "slice",
            InstrKind::Call { .. } => "call",
            InstrKind::SwitchTarget { .. } => "switch_target",
            InstrKind::SwitchVar { .. } => "switch_var",
            InstrKind::SizeOf { .. } => "size_of",
            InstrKind::AlignOf { .. } => "align_of",
            InstrKind::TypeOf { .. } => "type_of",
            InstrKind::TypeName { .. } => "type_name",
            InstrKind::MemberCount { .. } => "member_count",
            InstrKind::Cast { .. } => "cast",
            InstrKind::ExplicitCast { .. } => "explicit_cast",
            InstrKind::IntToPtr { .. } => "int_to_ptr",
            InstrKind::PtrToInt { .. } => "ptr_to_int",
            InstrKind::IntToEnum { .. } => "int_to_enum",
            InstrKind::EnumToInt { .. } => "enum_to_int",
            InstrKind::IntToErr { .. } => "int_to_err",
            InstrKind::ErrToInt { .. } => "err_to_int",
            InstrKind::Import { .. } => "import",
            InstrKind::CompileErr { .. } => "compile_err",
            InstrKind::CompileLog { .. } => "compile_log",
            InstrKind::EmbedFile { .. } => "embed_file",
            InstrKind::SetCold { .. } => "set_cold",
            InstrKind::SetRuntimeSafety { .. } => "set_runtime_safety",
            InstrKind::CoroId { .. } => "coro_id",
            InstrKind::CoroAlloc { .. } => "coro_alloc",
            InstrKind::CoroSize => "coro_size",
            InstrKind::CoroBegin { .. } => "coro_begin",
            InstrKind::CoroAllocFail { .. } => "coro_alloc_fail",
            InstrKind::CoroSuspend { .. } => "coro_suspend",
            InstrKind::CoroEnd => "coro_end",
            InstrKind::CoroFree { .. } => "coro_free",
            InstrKind::CoroResume { .. } => "coro_resume",
            InstrKind::CoroSave { .. } => "coro_save",
            InstrKind::CoroPromise { .. } => "coro_promise",
            InstrKind::Cancel { .. } => "cancel",
            InstrKind::AtomicRmw { .. } => "atomic_rmw",
            InstrKind::AtomicLoad { .. } => "atomic_load",
            InstrKind::Fence { .. } => "fence",
            InstrKind::Cmpxchg { .. } => "cmpxchg",
            InstrKind::TestNonNull { .. } => "test_non_null",
            InstrKind::UnwrapOptional { .. } => "unwrap_optional",
            InstrKind::OptionalWrap { .. } => "optional_wrap",
            InstrKind::TestErr { .. } => "test_err",
            InstrKind::UnwrapErrCode { .. } => "unwrap_err_code",
            InstrKind::UnwrapErrPayload { .. } => "unwrap_err_payload",
            InstrKind::ErrWrapCode { .. } => "err_wrap_code",
            InstrKind::ErrWrapPayload { .. } => "err_wrap_payload",
            InstrKind::ErrName { .. } => "err_name",
            InstrKind::ContainerInitList { .. } => "container_init_list",
            InstrKind::ContainerInitFields { .. } => "container_init_fields",
            InstrKind::UnionInit { .. } => "union_init",
            InstrKind::Panic { .. } => "panic",
            InstrKind::Breakpoint => "breakpoint",
            InstrKind::ReturnAddress => "return_address",
            InstrKind::FrameAddress => "frame_address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> InstrId {
        InstrId::new(n)
    }

    #[test]
    fn test_terminator_kinds() {
        assert!(InstrKind::Br { dest: BlockId(1) }.is_terminator());
        assert!(InstrKind::Unreachable.is_terminator());
        assert!(InstrKind::Return { operand: None }.is_terminator());
        assert!(!InstrKind::Phi { incoming: vec![] }.is_terminator());
        assert!(!InstrKind::Breakpoint.is_terminator());
    }

    #[test]
    fn test_side_effects() {
        assert!(InstrKind::StorePtr { ptr: id(0), value: id(1) }.has_side_effects());
        assert!(InstrKind::Fence { ordering: AtomicOrder::SeqCst }.has_side_effects());
        assert!(!InstrKind::LoadPtr { ptr: id(0) }.has_side_effects());
        assert!(!InstrKind::Const { literal: ConstValue::Int(1) }.has_side_effects());
    }

    #[test]
    fn test_operands_in_field_order() {
        let kind = InstrKind::SwitchBr {
            target: id(0),
            cases: vec![
                SwitchCase { value: id(1), block: BlockId(1) },
                SwitchCase { value: id(2), block: BlockId(2) },
            ],
            else_block: BlockId(3),
        };
        assert_eq!(kind.operands(), vec![id(0), id(1), id(2)]);

        let kind = InstrKind::DeclVar {
            name: "x".to_string(),
            var_type: None,
            align: Some(id(4)),
            init: id(5),
            is_const: true,
        };
        assert_eq!(kind.operands(), vec![id(4), id(5)]);

        assert!(InstrKind::CoroSize.operands().is_empty());
    }

    #[test]
    fn test_replace_operand() {
        let mut instr = Instruction::new(
            id(3),
            InstrKind::BinOp {
                op: BinOp::Add,
                op1: id(1),
                op2: id(1),
                safety_check: true,
            },
            Span::default(),
        );
        assert_eq!(instr.replace_operand(id(1), id(2)), 2);
        assert_eq!(instr.operands(), vec![id(2), id(2)]);
        assert_eq!(instr.replace_operand(id(9), id(0)), 0);
    }

    #[test]
    fn test_block_targets() {
        let kind = InstrKind::CondBr {
            condition: id(0),
            then_block: BlockId(4),
            else_block: BlockId(2),
        };
        assert_eq!(kind.block_targets(), vec![BlockId(4), BlockId(2)]);

        let phi = InstrKind::Phi {
            incoming: vec![PhiIncoming { block: BlockId(7), value: id(1) }],
        };
        assert_eq!(phi.block_targets(), vec![BlockId(7)]);
        assert!(InstrKind::Return { operand: Some(id(0)) }.block_targets().is_empty());
    }

    #[test]
    fn test_new_instruction_is_unresolved() {
        let instr = Instruction::new(id(0), InstrKind::ReturnAddress, Span::default());
        assert!(!instr.is_resolved());
        assert!(instr.ty.is_none());
        assert!(instr.value.is_unknown());
        assert_eq!(instr.kind.name(), "return_address");
    }
}
