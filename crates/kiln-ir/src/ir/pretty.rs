//! Pretty-printing for IR
//!
//! Renders an [`Executable`] as text: one header line per block followed by one
//! line per instruction, both in stored order. Each instruction line starts with
//! a fixed-width prefix (debug id, result type, use count) and ends with a
//! kind-specific body.
//!
//! Operands whose value is known at compile time are printed as literals; any
//! other operand is printed as a back-reference `#<id>`. The printer never
//! mutates the executable and never fails on half-built or half-analyzed IR.

use super::block::{BasicBlock, BlockId};
use super::executable::Executable;
use super::instr::{InstrId, InstrKind, Instruction};
use super::value::Value;
use crate::types::TypeId;
use std::io;

/// Indentation used by [`PrettyPrint`]
pub const DEFAULT_INDENT: usize = 4;

/// Placeholder for an instruction whose result type is not assigned yet
const UNKNOWN_TYPE: &str = "(unknown)";

/// Trait for pretty-printing IR constructs
pub trait PrettyPrint {
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Executable {
    fn pretty_print(&self) -> String {
        let mut output = String::new();
        for line in Printer::new(self, DEFAULT_INDENT).lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

/// Write the dump of `exec` to `out`, indenting instruction lines by `indent` spaces
pub fn print_executable<W: io::Write>(
    out: &mut W,
    exec: &Executable,
    indent: usize,
) -> io::Result<()> {
    for line in Printer::new(exec, indent).lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

struct Printer<'a> {
    exec: &'a Executable,
    use_counts: Vec<u32>,
    indent: usize,
}

impl<'a> Printer<'a> {
    fn new(exec: &'a Executable, indent: usize) -> Self {
        Self {
            exec,
            use_counts: exec.use_counts(),
            indent,
        }
    }

    fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.exec.blocks().flat_map(move |block| {
            std::iter::once(self.block_header(block)).chain(
                block
                    .instructions()
                    .iter()
                    .map(move |instr| self.instruction_line(instr)),
            )
        })
    }

    fn block_header(&self, block: &BasicBlock) -> String {
        format!("{}:", block.label())
    }

    fn instruction_line(&self, instr: &Instruction) -> String {
        let ty = match instr.ty {
            Some(ty) => self.type_name(ty),
            None => UNKNOWN_TYPE.to_string(),
        };
        let uses = if instr.has_side_effects() {
            "-".to_string()
        } else {
            let count = self.use_counts.get(instr.id.0 as usize).copied().unwrap_or(0);
            count.to_string()
        };
        format!(
            "{:indent$}#{:<3}| {:<22}| {:<12}| {}",
            "",
            instr.id.0,
            ty,
            uses,
            self.format_instr(&instr.kind),
            indent = self.indent
        )
    }

    fn type_name(&self, ty: TypeId) -> String {
        match self.exec.types().name(ty) {
            Some(name) => name.escape_debug().to_string(),
            None => ty.to_string(),
        }
    }

    /// Literal text for compile-time known operands, `#<id>` otherwise
    fn operand(&self, id: InstrId) -> String {
        match self.exec.instruction(id).map(|instr| &instr.value) {
            Some(Value::Known(value)) => value.display(self.exec.types()).to_string(),
            Some(Value::Runtime) | Some(Value::Unknown) | None => format!("#{}", id.0),
        }
    }

    fn operands(&self, ids: &[InstrId]) -> String {
        ids.iter()
            .map(|&id| self.operand(id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn block_ref(&self, id: BlockId) -> String {
        match self.exec.block(id) {
            Some(block) => format!("${}", block.label()),
            None => format!("$(unknown)_{}", id.0),
        }
    }

    fn builtin(&self, name: &str, args: &[InstrId]) -> String {
        format!("{}({})", name, self.operands(args))
    }

    fn format_instr(&self, kind: &InstrKind) -> String {
        let no_safety = |safety_check: bool| if safety_check { "" } else { " // no safety" };

        match kind {
            InstrKind::Br { dest } => format!("goto {}", self.block_ref(*dest)),
            InstrKind::CondBr {
                condition,
                then_block,
                else_block,
            } => format!(
                "if ({}) {} else {}",
                self.operand(*condition),
                self.block_ref(*then_block),
                self.block_ref(*else_block)
            ),
            InstrKind::SwitchBr {
                target,
                cases,
                else_block,
            } => {
                let mut arms: Vec<String> = cases
                    .iter()
                    .map(|case| format!("{} => {}", self.operand(case.value), self.block_ref(case.block)))
                    .collect();
                arms.push(format!("else => {}", self.block_ref(*else_block)));
                format!("switch ({}) {}", self.operand(*target), arms.join(", "))
            }
            InstrKind::Return { operand: Some(operand) } => {
                format!("return {}", self.operand(*operand))
            }
            InstrKind::Return { operand: None } => "return".to_string(),
            InstrKind::Unreachable => "unreachable".to_string(),

            InstrKind::Phi { incoming } => incoming
                .iter()
                .map(|inc| format!("{}:{}", self.block_ref(inc.block), self.operand(inc.value)))
                .collect::<Vec<_>>()
                .join(" "),

            InstrKind::Const { literal } => literal.display(self.exec.types()).to_string(),
            InstrKind::Invalid => "(invalid)".to_string(),

            InstrKind::BinOp {
                op,
                op1,
                op2,
                safety_check,
            } => format!(
                "{} {} {}{}",
                self.operand(*op1),
                op,
                self.operand(*op2),
                no_safety(*safety_check)
            ),
            InstrKind::UnOp { op, operand } => format!("{} {}", op, self.operand(*operand)),
            InstrKind::OverflowOp {
                op,
                operand_type,
                op1,
                op2,
                result_ptr,
            } => self.builtin(op.builtin_name(), &[*operand_type, *op1, *op2, *result_ptr]),
            InstrKind::Clz { operand } => self.builtin("@clz", &[*operand]),
            InstrKind::Ctz { operand } => self.builtin("@ctz", &[*operand]),
            InstrKind::PopCount { operand } => self.builtin("@popCount", &[*operand]),

            InstrKind::DeclVar {
                name,
                var_type,
                align,
                init,
                is_const,
            } => {
                let mut out = format!(
                    "{} {}",
                    if *is_const { "const" } else { "var" },
                    name.escape_debug()
                );
                if let Some(var_type) = var_type {
                    out.push_str(&format!(": {}", self.operand(*var_type)));
                }
                if let Some(align) = align {
                    out.push_str(&format!(" align({})", self.operand(*align)));
                }
                out.push_str(&format!(" = {}", self.operand(*init)));
                out
            }
            InstrKind::VarPtr { name } => format!("&{}", name.escape_debug()),
            InstrKind::LoadPtr { ptr } => format!("*{}", self.operand(*ptr)),
            InstrKind::StorePtr { ptr, value } => {
                format!("*{} = {}", self.operand(*ptr), self.operand(*value))
            }
            InstrKind::Ref { value, is_const } => format!(
                "{}ref {}",
                if *is_const { "const " } else { "" },
                self.operand(*value)
            ),
            InstrKind::ElemPtr {
                array_ptr,
                index,
                safety_check,
            } => format!(
                "&{}[{}]{}",
                self.operand(*array_ptr),
                self.operand(*index),
                no_safety(*safety_check)
            ),
            InstrKind::FieldPtr {
                container_ptr,
                field_name,
            } => format!(
                "fieldptr {}.{}",
                self.operand(*container_ptr),
                field_name.escape_debug()
            ),
            InstrKind::StructFieldPtr {
                struct_ptr,
                field_name,
            } => format!(
                "@StructFieldPtr(&{}.{})",
                self.operand(*struct_ptr),
                field_name.escape_debug()
            ),
            InstrKind::Memset {
                dest_ptr,
                byte,
                count,
            } => self.builtin("@memset", &[*dest_ptr, *byte, *count]),
            InstrKind::Memcpy {
                dest_ptr,
                src_ptr,
                count,
            } => self.builtin("@memcpy", &[*dest_ptr, *src_ptr, *count]),
            InstrKind::Slice {
                ptr,
                start,
                end,
                safety_check,
            } => format!(
                "{}[{}..{}]{}",
                self.operand(*ptr),
                self.operand(*start),
                end.map(|end| self.operand(end)).unwrap_or_default(),
                no_safety(*safety_check)
            ),
            InstrKind::Call {
                callee,
                args,
                is_async,
            } => format!(
                "{}{}({})",
                if *is_async { "async " } else { "" },
                self.operand(*callee),
                self.operands(args)
            ),

            InstrKind::SwitchTarget { target_ptr } => {
                format!("switchtarget {}", self.operand(*target_ptr))
            }
            InstrKind::SwitchVar {
                target_ptr,
                prong_value,
            } => format!(
                "switchvar {}, {}",
                self.operand(*target_ptr),
                self.operand(*prong_value)
            ),

            InstrKind::SizeOf { type_value } => self.builtin("@sizeOf", &[*type_value]),
            InstrKind::AlignOf { type_value } => self.builtin("@alignOf", &[*type_value]),
            InstrKind::TypeOf { value } => self.builtin("@typeOf", &[*value]),
            InstrKind::TypeName { type_value } => self.builtin("@typeName", &[*type_value]),
            InstrKind::MemberCount { container } => self.builtin("@memberCount", &[*container]),
            InstrKind::Cast { value, dest_type } => format!(
                "cast {} to {}",
                self.operand(*value),
                self.type_name(*dest_type)
            ),
            InstrKind::ExplicitCast {
                op,
                dest_type,
                target,
            } => self.builtin(op.builtin_name(), &[*dest_type, *target]),
            InstrKind::IntToPtr { dest_type, target } => {
                self.builtin("@intToPtr", &[*dest_type, *target])
            }
            InstrKind::PtrToInt { target } => self.builtin("@ptrToInt", &[*target]),
            InstrKind::IntToEnum { dest_type, target } => {
                self.builtin("@intToEnum", &[*dest_type, *target])
            }
            InstrKind::EnumToInt { target } => self.builtin("@enumToInt", &[*target]),
            InstrKind::IntToErr { target } => self.builtin("@intToError", &[*target]),
            InstrKind::ErrToInt { target } => self.builtin("@errorToInt", &[*target]),

            InstrKind::Import { name } => self.builtin("@import", &[*name]),
            InstrKind::CompileErr { msg } => self.builtin("@compileError", &[*msg]),
            InstrKind::CompileLog { msgs } => self.builtin("@compileLog", msgs),
            InstrKind::EmbedFile { name } => self.builtin("@embedFile", &[*name]),
            InstrKind::SetCold { is_cold } => self.builtin("@setCold", &[*is_cold]),
            InstrKind::SetRuntimeSafety { enabled } => {
                self.builtin("@setRuntimeSafety", &[*enabled])
            }

            InstrKind::CoroId { promise_ptr } => self.builtin("@coroId", &[*promise_ptr]),
            InstrKind::CoroAlloc { coro_id } => self.builtin("@coroAlloc", &[*coro_id]),
            InstrKind::CoroSize => "@coroSize()".to_string(),
            InstrKind::CoroBegin {
                coro_id,
                coro_mem_ptr,
            } => self.builtin("@coroBegin", &[*coro_id, *coro_mem_ptr]),
            InstrKind::CoroAllocFail { err_val } => self.builtin("@coroAllocFail", &[*err_val]),
            InstrKind::CoroSuspend {
                save_point,
                is_final,
            } => format!(
                "@coroSuspend({}, {})",
                save_point
                    .map(|save| self.operand(save))
                    .unwrap_or_else(|| "null".to_string()),
                self.operand(*is_final)
            ),
            InstrKind::CoroEnd => "@coroEnd()".to_string(),
            InstrKind::CoroFree {
                coro_id,
                coro_handle,
            } => self.builtin("@coroFree", &[*coro_id, *coro_handle]),
            InstrKind::CoroResume { awaiter_handle } => {
                self.builtin("@coroResume", &[*awaiter_handle])
            }
            InstrKind::CoroSave { coro_handle } => self.builtin("@coroSave", &[*coro_handle]),
            InstrKind::CoroPromise { coro_handle } => {
                self.builtin("@coroPromise", &[*coro_handle])
            }
            InstrKind::Cancel { target } => format!("cancel {}", self.operand(*target)),

            InstrKind::AtomicRmw {
                operand_type,
                ptr,
                op,
                operand,
                ordering,
            } => format!(
                "@atomicRmw({}, {}, {}, {}, {})",
                self.operand(*operand_type),
                self.operand(*ptr),
                op,
                self.operand(*operand),
                ordering
            ),
            InstrKind::AtomicLoad {
                operand_type,
                ptr,
                ordering,
            } => format!(
                "@atomicLoad({}, {}, {})",
                self.operand(*operand_type),
                self.operand(*ptr),
                ordering
            ),
            InstrKind::Fence { ordering } => format!("@fence({})", ordering),
            InstrKind::Cmpxchg {
                ptr,
                cmp_value,
                new_value,
                success_order,
                failure_order,
                is_weak,
            } => format!(
                "@cmpxchg{}({}, {}, {}, {}, {})",
                if *is_weak { "Weak" } else { "Strong" },
                self.operand(*ptr),
                self.operand(*cmp_value),
                self.operand(*new_value),
                success_order,
                failure_order
            ),

            InstrKind::TestNonNull { value } => format!("{} != null", self.operand(*value)),
            InstrKind::UnwrapOptional {
                value,
                safety_check,
            } => format!("{}.?{}", self.operand(*value), no_safety(*safety_check)),
            InstrKind::OptionalWrap { value } => self.builtin("@optionalWrap", &[*value]),
            InstrKind::TestErr { value } => self.builtin("@testError", &[*value]),
            InstrKind::UnwrapErrCode { err_union } => {
                self.builtin("@unwrapErrCode", &[*err_union])
            }
            InstrKind::UnwrapErrPayload {
                err_union,
                safety_check,
            } => format!(
                "{}{}",
                self.builtin("@unwrapErrPayload", &[*err_union]),
                no_safety(*safety_check)
            ),
            InstrKind::ErrWrapCode { value } => self.builtin("@errWrapCode", &[*value]),
            InstrKind::ErrWrapPayload { value } => self.builtin("@errWrapPayload", &[*value]),
            InstrKind::ErrName { value } => self.builtin("@errorName", &[*value]),

            InstrKind::ContainerInitList {
                container_type,
                items,
            } => format!("{}{{{}}}", self.operand(*container_type), self.operands(items)),
            InstrKind::ContainerInitFields {
                container_type,
                fields,
            } => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        format!(".{} = {}", field.name.escape_debug(), self.operand(field.value))
                    })
                    .collect();
                format!("{}{{{}}}", self.operand(*container_type), fields.join(", "))
            }
            InstrKind::UnionInit {
                union_type,
                field_name,
                init,
            } => format!(
                "{}{{.{} = {}}}",
                self.operand(*union_type),
                field_name.escape_debug(),
                self.operand(*init)
            ),

            InstrKind::Panic { msg } => self.builtin("@panic", &[*msg]),
            InstrKind::Breakpoint => "@breakpoint()".to_string(),
            InstrKind::ReturnAddress => "@returnAddress()".to_string(),
            InstrKind::FrameAddress => "@frameAddress()".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::instr::{FieldInit, PhiIncoming};
    use crate::ir::ops::{AtomicOrder, AtomicRmwOp, BinOp, CastOp};
    use crate::ir::value::ConstValue;
    use crate::span::Span;

    /// Executable with one block holding a known `u8` type constant (#0),
    /// a known integer 7 (#1) and a runtime value (#2), terminated by `unreachable`
    /// once the test has appended the instruction under test.
    fn fixture() -> (Executable, BlockId) {
        let mut exec = Executable::new("fixture");
        let bb = exec.add_block("Entry");
        let type_ty = exec.types_mut().intern("type");
        let u8_ty = exec.types_mut().intern("u8");
        let t = exec.append(
            bb,
            InstrKind::Const {
                literal: ConstValue::Type(u8_ty),
            },
            Span::default(),
        );
        let seven = exec.append(
            bb,
            InstrKind::Const {
                literal: ConstValue::Int(7),
            },
            Span::default(),
        );
        let rt = exec.append(bb, InstrKind::VarPtr { name: "x".into() }, Span::default());
        exec.resolve(t, type_ty, Value::Known(ConstValue::Type(u8_ty)));
        exec.resolve(seven, u8_ty, Value::Known(ConstValue::Int(7)));
        exec.resolve(rt, u8_ty, Value::Runtime);
        (exec, bb)
    }

    fn render(kind: InstrKind) -> String {
        let (mut exec, bb) = fixture();
        let id = exec.append(bb, kind, Span::default());
        let printer = Printer::new(&exec, 0);
        printer.format_instr(&exec.instruction(id).unwrap().kind)
    }

    const T: InstrId = InstrId(0);
    const SEVEN: InstrId = InstrId(1);
    const RT: InstrId = InstrId(2);

    #[test]
    fn test_bin_op_renders_literal_and_back_reference() {
        let body = render(InstrKind::BinOp {
            op: BinOp::Add,
            op1: SEVEN,
            op2: RT,
            safety_check: true,
        });
        assert_eq!(body, "7 + #2");

        let body = render(InstrKind::BinOp {
            op: BinOp::MultWrap,
            op1: RT,
            op2: RT,
            safety_check: false,
        });
        assert_eq!(body, "#2 *% #2 // no safety");
    }

    #[test]
    fn test_unresolved_operand_is_back_reference() {
        let body = render(InstrKind::LoadPtr { ptr: InstrId(99) });
        assert_eq!(body, "*#99");
    }

    #[test]
    fn test_memory_renderers() {
        assert_eq!(
            render(InstrKind::StorePtr { ptr: RT, value: SEVEN }),
            "*#2 = 7"
        );
        assert_eq!(
            render(InstrKind::ElemPtr {
                array_ptr: RT,
                index: SEVEN,
                safety_check: true,
            }),
            "&#2[7]"
        );
        assert_eq!(
            render(InstrKind::FieldPtr {
                container_ptr: RT,
                field_name: "len".into(),
            }),
            "fieldptr #2.len"
        );
        assert_eq!(
            render(InstrKind::Slice {
                ptr: RT,
                start: SEVEN,
                end: None,
                safety_check: true,
            }),
            "#2[7..]"
        );
        assert_eq!(
            render(InstrKind::DeclVar {
                name: "y".into(),
                var_type: Some(T),
                align: None,
                init: SEVEN,
                is_const: true,
            }),
            "const y: u8 = 7"
        );
        assert_eq!(render(InstrKind::Ref { value: RT, is_const: true }), "const ref #2");
    }

    #[test]
    fn test_call_renderer() {
        assert_eq!(
            render(InstrKind::Call {
                callee: RT,
                args: vec![SEVEN, RT],
                is_async: false,
            }),
            "#2(7, #2)"
        );
        assert_eq!(
            render(InstrKind::Call {
                callee: RT,
                args: vec![],
                is_async: true,
            }),
            "async #2()"
        );
    }

    #[test]
    fn test_type_level_renderers() {
        assert_eq!(render(InstrKind::SizeOf { type_value: T }), "@sizeOf(u8)");
        assert_eq!(render(InstrKind::TypeOf { value: RT }), "@typeOf(#2)");
        assert_eq!(
            render(InstrKind::ExplicitCast {
                op: CastOp::Truncate,
                dest_type: T,
                target: RT,
            }),
            "@truncate(u8, #2)"
        );
        assert_eq!(
            render(InstrKind::Cast {
                value: RT,
                dest_type: crate::types::TypeId::new(1),
            }),
            "cast #2 to u8"
        );
        assert_eq!(render(InstrKind::PtrToInt { target: RT }), "@ptrToInt(#2)");
    }

    #[test]
    fn test_coroutine_renderers() {
        assert_eq!(render(InstrKind::CoroSize), "@coroSize()");
        assert_eq!(
            render(InstrKind::CoroSuspend {
                save_point: None,
                is_final: RT,
            }),
            "@coroSuspend(null, #2)"
        );
        assert_eq!(
            render(InstrKind::CoroBegin {
                coro_id: RT,
                coro_mem_ptr: RT,
            }),
            "@coroBegin(#2, #2)"
        );
        assert_eq!(render(InstrKind::Cancel { target: RT }), "cancel #2");
    }

    #[test]
    fn test_atomic_renderers() {
        assert_eq!(
            render(InstrKind::AtomicRmw {
                operand_type: T,
                ptr: RT,
                op: AtomicRmwOp::Add,
                operand: SEVEN,
                ordering: AtomicOrder::SeqCst,
            }),
            "@atomicRmw(u8, #2, Add, 7, SeqCst)"
        );
        assert_eq!(
            render(InstrKind::Fence {
                ordering: AtomicOrder::Acquire,
            }),
            "@fence(Acquire)"
        );
        assert_eq!(
            render(InstrKind::Cmpxchg {
                ptr: RT,
                cmp_value: SEVEN,
                new_value: SEVEN,
                success_order: AtomicOrder::SeqCst,
                failure_order: AtomicOrder::Monotonic,
                is_weak: true,
            }),
            "@cmpxchgWeak(#2, 7, 7, SeqCst, Monotonic)"
        );
    }

    #[test]
    fn test_optional_and_error_renderers() {
        assert_eq!(render(InstrKind::TestNonNull { value: RT }), "#2 != null");
        assert_eq!(
            render(InstrKind::UnwrapOptional {
                value: RT,
                safety_check: true,
            }),
            "#2.?"
        );
        assert_eq!(
            render(InstrKind::UnwrapErrPayload {
                err_union: RT,
                safety_check: false,
            }),
            "@unwrapErrPayload(#2) // no safety"
        );
        assert_eq!(render(InstrKind::ErrWrapCode { value: RT }), "@errWrapCode(#2)");
    }

    #[test]
    fn test_aggregate_renderers() {
        assert_eq!(
            render(InstrKind::ContainerInitList {
                container_type: T,
                items: vec![SEVEN, RT],
            }),
            "u8{7, #2}"
        );
        assert_eq!(
            render(InstrKind::ContainerInitFields {
                container_type: RT,
                fields: vec![
                    FieldInit { name: "a".into(), value: SEVEN },
                    FieldInit { name: "b".into(), value: RT },
                ],
            }),
            "#2{.a = 7, .b = #2}"
        );
        assert_eq!(
            render(InstrKind::UnionInit {
                union_type: RT,
                field_name: "tag".into(),
                init: SEVEN,
            }),
            "#2{.tag = 7}"
        );
    }

    #[test]
    fn test_diagnostic_and_placeholder_renderers() {
        assert_eq!(render(InstrKind::Panic { msg: RT }), "@panic(#2)");
        assert_eq!(render(InstrKind::Breakpoint), "@breakpoint()");
        assert_eq!(render(InstrKind::ReturnAddress), "@returnAddress()");
        assert_eq!(render(InstrKind::Invalid), "(invalid)");
        assert_eq!(
            render(InstrKind::CompileLog { msgs: vec![SEVEN, RT] }),
            "@compileLog(7, #2)"
        );
    }

    #[test]
    fn test_unknown_block_reference() {
        assert_eq!(
            render(InstrKind::Br { dest: BlockId(12) }),
            "goto $(unknown)_12"
        );
    }

    #[test]
    fn test_phi_renderer() {
        assert_eq!(
            render(InstrKind::Phi {
                incoming: vec![
                    PhiIncoming { block: BlockId(0), value: SEVEN },
                    PhiIncoming { block: BlockId(0), value: RT },
                ],
            }),
            "$Entry_0:7 $Entry_0:#2"
        );
    }

    #[test]
    fn test_instruction_line_prefix() {
        let (mut exec, bb) = fixture();
        exec.append(bb, InstrKind::Return { operand: Some(RT) }, Span::default());
        let printer = Printer::new(&exec, 2);

        let block = exec.entry().unwrap();
        let lines: Vec<String> = block
            .instructions()
            .iter()
            .map(|instr| printer.instruction_line(instr))
            .collect();

        assert_eq!(lines[1], format!("  #1  | {:<22}| {:<12}| 7", "u8", "0"));
        assert_eq!(lines[2], format!("  #2  | {:<22}| {:<12}| &x", "u8", "1"));
        assert_eq!(lines[3], format!("  #3  | {:<22}| {:<12}| return #2", "(unknown)", "-"));
    }

    #[test]
    fn test_pretty_print_executable() {
        let (mut exec, bb) = fixture();
        exec.append(bb, InstrKind::Unreachable, Span::default());
        let output = exec.pretty_print();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1 + 4);
        assert_eq!(lines[0], "Entry_0:");
        assert!(lines[4].ends_with("| unreachable"));
        assert!(lines[1].starts_with("    #0  | type"));
    }

    #[test]
    fn test_print_executable_to_writer() {
        let (mut exec, bb) = fixture();
        exec.append(bb, InstrKind::Unreachable, Span::default());
        let mut buf = Vec::new();
        print_executable(&mut buf, &exec, 4).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), exec.pretty_print());
    }
}
