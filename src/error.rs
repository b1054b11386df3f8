use crate::stack;
use crate::types::Id;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    // Structural
    ModuleTooShort,
    ModuleIsEmpty,
    InvalidMagicHeader,
    InvalidVersionHeader,
    InvalidSection { wanted: Id, got: Option<u8> },
    InvalidSectionSize { id: Id },
    BufferExhausted,
    Leb128Overflow,

    // Semantic
    InvalidValueType { got: u8 },
    InvalidFunctionType { got: u8 },
    InvalidExportType { got: u8 },
    InvalidExportName,
    InvalidInstruction { opcode: u8 },
    InvalidSignatureIndex { index: u32 },
    InvalidFunctionIndex { index: u32 },
    FunctionCountMismatch { functions: u32, bodies: u32 },
    MissingEnd,

    // Invocation
    ExportNotFound,
    InvalidArgumentsNumber { wanted: u32, got: u32 },
    InvalidLocal { index: u32 },
    MissingImmediate { opcode: u8 },
    NoResult,
    DivisionByZero,
    IntegerOverflow,
    StackError(stack::Error),
}

impl From<stack::Error> for Error {
    fn from(other: stack::Error) -> Error {
        Error::StackError(other)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;
        match *self {
            ModuleTooShort => write!(f, "Module is too short"),
            ModuleIsEmpty => write!(f, "Module is empty"),
            InvalidMagicHeader => write!(f, "Invalid magic header"),
            InvalidVersionHeader => write!(f, "Invalid version header"),
            InvalidSection { wanted, got: Some(got) } => {
                write!(f, "Invalid section: expected {} ({}), got {}", wanted.as_str(), wanted as u8, got)
            },
            InvalidSection { wanted, got: None } => {
                write!(f, "Invalid section: expected {} ({}), got end of module", wanted.as_str(), wanted as u8)
            },
            InvalidSectionSize { id } => write!(f, "Invalid section size: {}", id.as_str()),
            BufferExhausted => write!(f, "Unexpected end of buffer"),
            Leb128Overflow => write!(f, "Integer representation too long"),
            InvalidValueType { got } => write!(f, "Invalid value type: 0x{:02x}", got),
            InvalidFunctionType { got } => write!(f, "Invalid function type: 0x{:02x}", got),
            InvalidExportType { got } => write!(f, "Invalid export type: 0x{:02x}", got),
            InvalidExportName => write!(f, "Invalid export name"),
            InvalidInstruction { opcode } => write!(f, "Invalid instruction: 0x{:02x}", opcode),
            InvalidSignatureIndex { index } => write!(f, "Invalid signature index: {}", index),
            InvalidFunctionIndex { index } => write!(f, "Invalid function index: {}", index),
            FunctionCountMismatch { functions, bodies } => {
                write!(f, "Function and code section counts differ: {} != {}", functions, bodies)
            },
            MissingEnd => write!(f, "Function body is missing end"),
            ExportNotFound => write!(f, "Export not found"),
            InvalidArgumentsNumber { wanted, got } => {
                write!(f, "Invalid number of arguments: expected {}, got {}", wanted, got)
            },
            InvalidLocal { index } => write!(f, "Invalid local index: {}", index),
            MissingImmediate { opcode } => write!(f, "Missing immediate for instruction 0x{:02x}", opcode),
            NoResult => write!(f, "Function returned no result"),
            DivisionByZero => write!(f, "Integer divide by zero"),
            IntegerOverflow => write!(f, "Integer overflow"),
            StackError(e) => write!(f, "Stack error: {:?}", e),
        }
    }
}

impl std::error::Error for Error {}
