//! Intermediate Representation (IR)
//!
//! Sits between AST lowering and code generation. Instructions form an SSA-style
//! graph: operands are references to the instructions that produce them, and
//! merges go through explicit phi instructions.
//!
//! # Structure
//!
//! - `Executable` - The IR of one function: blocks in order, entry first
//! - `BasicBlock` - A sequence of instructions ending in exactly one terminator
//! - `Instruction` - Debug id, source span, result type, known value and kind
//! - `InstrKind` - The closed set of instruction kinds
//! - `Value` - What the analyzer knows about an instruction's result

pub mod block;
pub mod builder;
pub mod executable;
pub mod instr;
pub mod ops;
pub mod pretty;
pub mod value;

pub use block::{BasicBlock, BlockId};
pub use builder::IrBuilder;
pub use executable::Executable;
pub use instr::{FieldInit, InstrId, InstrKind, Instruction, PhiIncoming, SwitchCase};
pub use ops::{AtomicOrder, AtomicRmwOp, BinOp, CastOp, OverflowOp, UnOp};
pub use pretty::{print_executable, PrettyPrint, DEFAULT_INDENT};
pub use value::{ConstDisplay, ConstValue, Value};
