use crate::Error;
use crate::reader::{Reader, Read};
use crate::types::{Id, FunctionBody, ValueType};
use crate::opcode::{Opcode, ImmediateType, END};
use super::Section;

impl<'a> Read<FunctionBody> for Reader<'a> {
    fn read(&mut self) -> Result<FunctionBody, Error> {
        let body_size = self.read_var_u32()?;
        let mut r = self.sub_reader(body_size as usize)?;
        let mut body = FunctionBody::default();

        let local_decls = r.read_var_u32()?;
        for _ in 0..local_decls {
            let n = r.read_var_u32()?;
            let _: ValueType = r.read()?;
            body.local_count = body.local_count.saturating_add(n);
        }

        loop {
            if r.done() {
                return Err(Error::MissingEnd)
            }
            let code = r.read_u8()?;
            let op = match Opcode::from_code(code) {
                Some(op) if op.is_supported() => op,
                _ => return Err(Error::InvalidInstruction { opcode: code }),
            };
            body.instructions.push(code);
            match op.immediate_type() {
                ImmediateType::Local => body.locals.push(r.read_var_u32()?),
                ImmediateType::I32 => body.constants.push(r.read_var_i32()?),
                _ => {},
            }
            if code == END {
                break
            }
        }
        if !r.done() {
            return Err(Error::InvalidSectionSize { id: Id::Code })
        }
        trace!("body: {:?}", body);
        Ok(body)
    }
}

/// Decodes the code section. Each body is bounded by its declared size.
pub fn read_code_section(r: &mut Reader) -> Result<Vec<FunctionBody>, Error> {
    let code: Vec<FunctionBody> = Section::read(r, Id::Code)?.items()?;
    debug!("code: {} function bodies", code.len());
    Ok(code)
}
