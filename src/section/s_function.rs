use crate::Error;
use crate::reader::Reader;
use crate::types::{Id, Index};
use super::Section;

/// Decodes the function section: one signature index per declared function.
///
/// Every index must refer to one of the `type_count` decoded types.
pub fn read_function_section(r: &mut Reader, type_count: usize) -> Result<Vec<Index>, Error> {
    let signatures: Vec<Index> = Section::read(r, Id::Function)?.items()?;
    for &index in signatures.iter() {
        if index as usize >= type_count {
            return Err(Error::InvalidSignatureIndex { index })
        }
    }
    debug!("function signatures: {:?}", signatures);
    Ok(signatures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_section() {
        let buf = [0x03, 0x02, 0x01, 0x00];
        let mut r = Reader::new(&buf);
        assert_eq!(read_function_section(&mut r, 1), Ok(vec![0]));
        assert!(r.done());
    }

    #[test]
    fn test_multiple_functions() {
        let buf = [0x03, 0x04, 0x03, 0x01, 0x00, 0x01];
        let mut r = Reader::new(&buf);
        assert_eq!(read_function_section(&mut r, 2), Ok(vec![1, 0, 1]));
    }

    #[test]
    fn test_signature_out_of_range() {
        let buf = [0x03, 0x03, 0x02, 0x00, 0x01];
        let mut r = Reader::new(&buf);
        assert_eq!(read_function_section(&mut r, 1), Err(Error::InvalidSignatureIndex { index: 1 }));
    }

    #[test]
    fn test_wrong_section() {
        let buf = [0x01, 0x02, 0x01, 0x00];
        let mut r = Reader::new(&buf);
        assert_eq!(read_function_section(&mut r, 1), Err(Error::InvalidSection { wanted: Id::Function, got: Some(0x01) }));
    }
}
