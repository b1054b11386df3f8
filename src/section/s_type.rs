use crate::Error;
use crate::reader::{Reader, Read};
use crate::types::{Id, FuncType, ValueType, FUNC_TYPE};
use super::Section;

impl<'a> Read<ValueType> for Reader<'a> {
    fn read(&mut self) -> Result<ValueType, Error> {
        ValueType::from_u8(self.read_u8()?)
    }
}

impl<'a> Read<FuncType> for Reader<'a> {
    fn read(&mut self) -> Result<FuncType, Error> {
        let form = self.read_u8()?;
        if form != FUNC_TYPE {
            return Err(Error::InvalidFunctionType { got: form })
        }
        let params = read_value_types(self)?;
        let results = read_value_types(self)?;
        Ok(FuncType { params, results })
    }
}

fn read_value_types(r: &mut Reader) -> Result<Vec<ValueType>, Error> {
    let count = r.read_var_u32()?;
    let mut types = Vec::new();
    for _ in 0..count {
        let t: ValueType = r.read()?;
        types.push(t);
    }
    Ok(types)
}

/// Decodes the type section into function signatures in declaration order.
pub fn read_type_section(r: &mut Reader) -> Result<Vec<FuncType>, Error> {
    let types: Vec<FuncType> = Section::read(r, Id::Type)?.items()?;
    debug!("types: {:?}", types);
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType::I32;

    #[test]
    fn test_type_section() {
        let buf = [0x01, 0x07, 0x01, 0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f];
        let mut r = Reader::new(&buf);
        let types = read_type_section(&mut r).unwrap();
        assert!(r.done());
        assert_eq!(types, vec![FuncType { params: vec![I32, I32], results: vec![I32] }]);
    }

    #[test]
    fn test_multiple_types() {
        let buf = [
            0x01, 0x0f, 0x03,
            0x60, 0x00, 0x00,
            0x60, 0x01, 0x7f, 0x00,
            0x60, 0x03, 0x7f, 0x7f, 0x7f, 0x01, 0x7f,
        ];
        let mut r = Reader::new(&buf);
        let types = read_type_section(&mut r).unwrap();
        assert!(r.done());
        assert_eq!(types.len(), 3);
        assert_eq!(types[0], FuncType { params: vec![], results: vec![] });
        assert_eq!(types[1], FuncType { params: vec![I32], results: vec![] });
        assert_eq!(types[2], FuncType { params: vec![I32, I32, I32], results: vec![I32] });
    }

    #[test]
    fn test_invalid_param_type() {
        let buf = [0x01, 0x07, 0x01, 0x60, 0x02, 0x7f, 0x7e, 0x01, 0x7f];
        let mut r = Reader::new(&buf);
        assert_eq!(read_type_section(&mut r), Err(Error::InvalidValueType { got: 0x7e }));
    }

    #[test]
    fn test_invalid_result_type() {
        let buf = [0x01, 0x07, 0x01, 0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7c];
        let mut r = Reader::new(&buf);
        assert_eq!(read_type_section(&mut r), Err(Error::InvalidValueType { got: 0x7c }));
    }

    #[test]
    fn test_invalid_form() {
        let buf = [0x01, 0x04, 0x01, 0x40, 0x00, 0x00];
        let mut r = Reader::new(&buf);
        assert_eq!(read_type_section(&mut r), Err(Error::InvalidFunctionType { got: 0x40 }));
    }

    #[test]
    fn test_wrong_section() {
        let buf = [0x03, 0x02, 0x01, 0x00];
        let mut r = Reader::new(&buf);
        assert_eq!(read_type_section(&mut r), Err(Error::InvalidSection { wanted: Id::Type, got: Some(0x03) }));
    }
}
