use crate::Error;
use crate::reader::{Reader, Read};
use crate::types::{Id, Export, ExportKind};
use super::Section;

use std::str;

impl<'a> Read<Export> for Reader<'a> {
    fn read(&mut self) -> Result<Export, Error> {
        let len = self.read_var_u32()?;
        let field = self.read_slice(len as usize)?;
        let name = str::from_utf8(field)
            .map_err(|_| Error::InvalidExportName)?
            .replace('"', "");
        if name.is_empty() {
            return Err(Error::InvalidExportName)
        }
        let kind = ExportKind::from_u8(self.read_u8()?)?;
        let function_index = self.read_var_u32()?;
        Ok(Export { name, kind, function_index })
    }
}

/// Decodes the export section. Every export must name one of the
/// `function_count` declared functions.
pub fn read_export_section(r: &mut Reader, function_count: usize) -> Result<Vec<Export>, Error> {
    let exports: Vec<Export> = Section::read(r, Id::Export)?.items()?;
    for e in exports.iter() {
        if e.function_index as usize >= function_count {
            return Err(Error::InvalidFunctionIndex { index: e.function_index })
        }
        debug!("export {:?} => function {}", e.name, e.function_index);
    }
    Ok(exports)
}
