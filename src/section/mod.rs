mod s_type;
mod s_function;
mod s_export;
mod s_code;

pub use self::s_type::*;
pub use self::s_function::*;
pub use self::s_export::*;
pub use self::s_code::*;

use crate::Error;
use crate::reader::{Reader, Read, FallibleIterator};
use crate::types::Id;

use std::marker::PhantomData;

/// The payload of one section, bounded by its declared size.
pub struct Section<'a> {
    pub id: Id,
    pub buf: Reader<'a>,
}

impl<'a> Section<'a> {
    /// Reads the section tag and size, failing unless the tag is `id`.
    /// Running out of input before the tag counts as a missing section.
    pub fn read(r: &mut Reader<'a>, id: Id) -> Result<Section<'a>, Error> {
        if r.done() {
            return Err(Error::InvalidSection { wanted: id, got: None })
        }
        let tag = r.read_u8()?;
        if tag != id as u8 {
            return Err(Error::InvalidSection { wanted: id, got: Some(tag) })
        }
        let size = r.read_var_u32()?;
        let buf = r.sub_reader(size as usize)?;
        debug!("section {} size: {}", id.as_str(), size);
        Ok(Section { id, buf })
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn iter<T>(self) -> SectionIter<'a, T> {
        SectionIter { id: self.id, r: self.buf, count: None, _phantom: PhantomData }
    }

    /// Decodes every item of the section in declaration order.
    pub fn items<T>(self) -> Result<Vec<T>, Error>
    where Reader<'a>: Read<T> {
        let mut iter = self.iter();
        let mut items = Vec::new();
        while let Some(item) = iter.next()? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Yields the `count` items that follow a section's count prefix.
///
/// Once the last item is read the payload must be fully consumed.
pub struct SectionIter<'a, T> {
    id: Id,
    r: Reader<'a>,
    count: Option<u32>,
    _phantom: PhantomData<T>,
}

impl<'a, T> FallibleIterator for SectionIter<'a, T>
where Reader<'a>: Read<T> {
    type Item = T;
    type Error = Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let count = match self.count {
            Some(count) => count,
            None => {
                let count = self.r.read_var_u32()?;
                trace!("section {} count: {}", self.id.as_str(), count);
                count
            }
        };
        if count == 0 {
            self.count = Some(0);
            if !self.r.done() {
                return Err(Error::InvalidSectionSize { id: self.id })
            }
            return Ok(None)
        }
        let item: T = self.r.read()?;
        self.count = Some(count - 1);
        Ok(Some(item))
    }
}
