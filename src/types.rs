use crate::Error;

pub type Index = u32;

/// Section ids understood by the decoder, in the order they must appear.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Id {
    Type = 1,
    Function = 3,
    Export = 7,
    Code = 10,
}

impl Id {
    pub fn as_str(&self) -> &'static str {
        use self::Id::*;
        match *self {
            Type => "Type",
            Function => "Function",
            Export => "Export",
            Code => "Code",
        }
    }
}

pub const FUNC_TYPE: u8 = 0x60;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    I32 = 0x7f,
}

impl ValueType {
    pub fn from_u8(other: u8) -> Result<ValueType, Error> {
        match other {
            0x7f => Ok(ValueType::I32),
            _ => Err(Error::InvalidValueType { got: other }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            ValueType::I32 => "i32",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FuncType {
    pub params: Vec<ValueType>,
    pub results: Vec<ValueType>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExportKind {
    Func = 0x00,
}

impl ExportKind {
    pub fn from_u8(other: u8) -> Result<ExportKind, Error> {
        match other {
            0x00 => Ok(ExportKind::Func),
            _ => Err(Error::InvalidExportType { got: other }),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Export {
    pub name: String,
    pub kind: ExportKind,
    pub function_index: Index,
}

/// A decoded function body.
///
/// Immediates are kept in side tables: `locals` holds the index operand of
/// every `local.get` and `constants` the operand of every `i32.const`, each
/// in encounter order. `instructions` holds the bare opcode bytes.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FunctionBody {
    pub local_count: u32,
    pub locals: Vec<Index>,
    pub constants: Vec<i32>,
    pub instructions: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type() {
        assert_eq!(ValueType::from_u8(0x7f), Ok(ValueType::I32));
        assert_eq!(ValueType::I32 as u8, 0x7f);
        for &t in [0x7e, 0x7d, 0x7c, 0x7b, 0x40, 0x00].iter() {
            assert_eq!(ValueType::from_u8(t), Err(Error::InvalidValueType { got: t }));
        }
    }

    #[test]
    fn test_export_kind() {
        assert_eq!(ExportKind::from_u8(0x00), Ok(ExportKind::Func));
        for t in 1..4 {
            assert_eq!(ExportKind::from_u8(t), Err(Error::InvalidExportType { got: t }));
        }
    }
}
