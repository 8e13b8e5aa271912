//! Kiln IR - the intermediate representation between AST lowering and code generation
//!
//! A function body is an [`Executable`]: an arena of basic blocks, each holding an
//! ordered list of instructions that ends in exactly one terminator. Instructions
//! start out untyped and unresolved; the analyzer fills in their result type and
//! [`Value`] in place, and the printer renders the graph at any point along the way.

pub mod error;
pub mod ir;
pub mod span;
pub mod types;

pub use error::{IrError, IrResult};
pub use ir::{
    print_executable, BasicBlock, BlockId, ConstValue, Executable, InstrId, InstrKind,
    Instruction, IrBuilder, PrettyPrint, Value,
};
pub use span::Span;
pub use types::{TypeId, TypeTable};
