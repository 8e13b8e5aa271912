//! Operator payloads carried by IR instructions

use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Logical
    BoolOr,
    BoolAnd,

    // Comparison
    CmpEq,
    CmpNotEq,
    CmpLessThan,
    CmpGreaterThan,
    CmpLessOrEq,
    CmpGreaterOrEq,

    // Bitwise
    BinOr,
    BinXor,
    BinAnd,
    BitShiftLeft,
    BitShiftLeftLossy,
    BitShiftRight,

    // Arithmetic
    Add,
    AddWrap,
    Sub,
    SubWrap,
    Mult,
    MultWrap,
    Div,
    Rem,

    // Aggregates
    ArrayCat,
    ArrayMult,
    MergeErrorSets,
}

impl BinOp {
    /// Check if this is an arithmetic operator
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinOp::Add
                | BinOp::AddWrap
                | BinOp::Sub
                | BinOp::SubWrap
                | BinOp::Mult
                | BinOp::MultWrap
                | BinOp::Div
                | BinOp::Rem
        )
    }

    /// Check if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinOp::CmpEq
                | BinOp::CmpNotEq
                | BinOp::CmpLessThan
                | BinOp::CmpGreaterThan
                | BinOp::CmpLessOrEq
                | BinOp::CmpGreaterOrEq
        )
    }

    /// Check if this is a logical operator
    pub fn is_logical(&self) -> bool {
        matches!(self, BinOp::BoolOr | BinOp::BoolAnd)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::BoolOr => "or",
            BinOp::BoolAnd => "and",
            BinOp::CmpEq => "==",
            BinOp::CmpNotEq => "!=",
            BinOp::CmpLessThan => "<",
            BinOp::CmpGreaterThan => ">",
            BinOp::CmpLessOrEq => "<=",
            BinOp::CmpGreaterOrEq => ">=",
            BinOp::BinOr => "|",
            BinOp::BinXor => "^",
            BinOp::BinAnd => "&",
            BinOp::BitShiftLeft => "<<",
            BinOp::BitShiftLeftLossy => "<<%",
            BinOp::BitShiftRight => ">>",
            BinOp::Add => "+",
            BinOp::AddWrap => "+%",
            BinOp::Sub => "-",
            BinOp::SubWrap => "-%",
            BinOp::Mult => "*",
            BinOp::MultWrap => "*%",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::ArrayCat => "++",
            BinOp::ArrayMult => "**",
            BinOp::MergeErrorSets => "||",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOp {
    /// Bitwise not (~)
    BinNot,
    /// Logical not (!)
    BoolNot,
    /// Numeric negation (-)
    Negation,
    /// Wrapping negation (-%)
    NegationWrap,
    /// Pointer dereference
    Dereference,
    /// Optional type constructor (?T)
    Optional,
    /// Error union type constructor (%T)
    Error,
}

impl UnOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnOp::BinNot => "~",
            UnOp::BoolNot => "!",
            UnOp::Negation => "-",
            UnOp::NegationWrap => "-%",
            UnOp::Dereference => "*",
            UnOp::Optional => "?",
            UnOp::Error => "%",
        }
    }
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Arithmetic that reports overflow through a result pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowOp {
    Add,
    Sub,
    Mul,
    Shl,
}

impl OverflowOp {
    /// Builtin name used by the dumper
    pub fn builtin_name(&self) -> &'static str {
        match self {
            OverflowOp::Add => "@addWithOverflow",
            OverflowOp::Sub => "@subWithOverflow",
            OverflowOp::Mul => "@mulWithOverflow",
            OverflowOp::Shl => "@shlWithOverflow",
        }
    }
}

/// Explicit conversions requested by the source program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastOp {
    IntCast,
    FloatCast,
    IntToFloat,
    FloatToInt,
    Truncate,
    BitCast,
    PtrCast,
    ErrSetCast,
    WidenOrShorten,
}

impl CastOp {
    /// Builtin name used by the dumper
    pub fn builtin_name(&self) -> &'static str {
        match self {
            CastOp::IntCast => "@intCast",
            CastOp::FloatCast => "@floatCast",
            CastOp::IntToFloat => "@intToFloat",
            CastOp::FloatToInt => "@floatToInt",
            CastOp::Truncate => "@truncate",
            CastOp::BitCast => "@bitCast",
            CastOp::PtrCast => "@ptrCast",
            CastOp::ErrSetCast => "@errSetCast",
            CastOp::WidenOrShorten => "@widenOrShorten",
        }
    }
}

/// Read-modify-write operations for atomics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicRmwOp {
    Xchg,
    Add,
    Sub,
    And,
    Nand,
    Or,
    Xor,
    Max,
    Min,
}

impl fmt::Display for AtomicRmwOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AtomicRmwOp::Xchg => "Xchg",
            AtomicRmwOp::Add => "Add",
            AtomicRmwOp::Sub => "Sub",
            AtomicRmwOp::And => "And",
            AtomicRmwOp::Nand => "Nand",
            AtomicRmwOp::Or => "Or",
            AtomicRmwOp::Xor => "Xor",
            AtomicRmwOp::Max => "Max",
            AtomicRmwOp::Min => "Min",
        };
        f.write_str(s)
    }
}

/// Memory orderings for atomics and fences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomicOrder {
    Unordered,
    Monotonic,
    Acquire,
    Release,
    AcqRel,
    SeqCst,
}

impl fmt::Display for AtomicOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AtomicOrder::Unordered => "Unordered",
            AtomicOrder::Monotonic => "Monotonic",
            AtomicOrder::Acquire => "Acquire",
            AtomicOrder::Release => "Release",
            AtomicOrder::AcqRel => "AcqRel",
            AtomicOrder::SeqCst => "SeqCst",
        };
        f.write_str(s)
    }
}
