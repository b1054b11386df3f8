use crate::{Error, MAGIC, VERSION_LEN};
use crate::reader::Reader;
use crate::section::{read_type_section, read_function_section, read_export_section, read_code_section};
use crate::types::{Index, FuncType, Export, FunctionBody};

use byteorder::{ByteOrder, LittleEndian};

/// A decoded module. Immutable once built.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Module {
    version: u32,
    types: Vec<FuncType>,
    function_signatures: Vec<Index>,
    exports: Vec<Export>,
    code: Vec<FunctionBody>,
}

/// Validates the module header, leaving `r` positioned after it.
pub fn check_header(r: &mut Reader) -> Result<u32, Error> {
    if r.len() < 8 {
        return Err(Error::ModuleTooShort)
    }
    if r.len() == 8 {
        return Err(Error::ModuleIsEmpty)
    }
    if r.read_word()? != MAGIC {
        return Err(Error::InvalidMagicHeader)
    }
    let version = r.read_word().map_err(|_| Error::InvalidVersionHeader)?;
    if version.len() != VERSION_LEN {
        return Err(Error::InvalidVersionHeader)
    }
    Ok(LittleEndian::read_u32(version))
}

impl Module {
    /// Decodes `buf`: header, then the type, function, export and code
    /// sections in that order. Anything after the code section is ignored.
    pub fn new(buf: &[u8]) -> Result<Module, Error> {
        let mut r = Reader::new(buf);
        let version = check_header(&mut r)?;
        debug!("module: {} bytes, version {}", buf.len(), version);

        let types = read_type_section(&mut r)?;
        let function_signatures = read_function_section(&mut r, types.len())?;
        let exports = read_export_section(&mut r, function_signatures.len())?;
        let code = read_code_section(&mut r)?;

        if code.len() != function_signatures.len() {
            return Err(Error::FunctionCountMismatch {
                functions: function_signatures.len() as u32,
                bodies: code.len() as u32,
            })
        }
        if !r.done() {
            debug!("ignoring {} trailing bytes at 0x{:x}", r.remaining(), r.pos());
        }

        Ok(Module { version, types, function_signatures, exports, code })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn types(&self) -> &[FuncType] {
        &self.types
    }

    pub fn function_signatures(&self) -> &[Index] {
        &self.function_signatures
    }

    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    pub fn code(&self) -> &[FunctionBody] {
        &self.code
    }

    /// First export named `name`.
    pub fn export(&self, name: &str) -> Option<&Export> {
        self.exports.iter().find(|e| e.name == name)
    }

    pub fn function_type(&self, function_index: Index) -> Option<&FuncType> {
        self.function_signatures.get(function_index as usize)
            .and_then(|&sig| self.types.get(sig as usize))
    }

    pub fn function_body(&self, function_index: Index) -> Option<&FunctionBody> {
        self.code.get(function_index as usize)
    }
}
