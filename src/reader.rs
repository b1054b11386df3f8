use crate::Error;

pub use fallible_iterator::FallibleIterator;

pub type ReaderResult<T> = Result<T, Error>;

/// Sequential, position-tracked read access over a borrowed byte buffer.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf: buf, pos: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn done(&self) -> bool {
        self.pos >= self.buf.len()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn read_with<T, F: FnOnce(&'a [u8]) -> T>(&mut self, size: usize, f: F) -> ReaderResult<T> {
        if size > self.remaining() { return Err(Error::BufferExhausted) }
        let v = f(&self.buf[self.pos..self.pos + size]);
        self.pos += size;
        Ok(v)
    }

    #[inline]
    pub fn read_u8(&mut self) -> ReaderResult<u8> {
        self.read_with(1, |buf| buf[0])
    }

    #[inline]
    pub fn read_slice(&mut self, len: usize) -> ReaderResult<&'a [u8]> {
        self.read_with(len, |buf| buf)
    }

    /// Reads a four byte word without interpreting it.
    #[inline]
    pub fn read_word(&mut self) -> ReaderResult<&'a [u8]> {
        self.read_slice(4)
    }

    /// Splits off the next `len` bytes as an independent reader.
    pub fn sub_reader(&mut self, len: usize) -> ReaderResult<Reader<'a>> {
        self.read_slice(len).map(Reader::new)
    }

    pub fn read_var_u32(&mut self) -> ReaderResult<u32> {
        let mut byte = self.read_u8()?;
        if byte & 0x80 == 0 {
            Ok(byte as u32)
        } else {
            let mut value = (byte & 0x7f) as u32;
            let mut shift = 7;
            loop {
                byte = self.read_u8()?;
                value |= ((byte & 0x7f) as u32) << shift;
                if byte & 0x80 == 0 { break }
                shift += 7;
                if shift > 31 { return Err(Error::Leb128Overflow) }
            }
            Ok(value)
        }
    }

    pub fn read_var_i32(&mut self) -> ReaderResult<i32> {
        let mut byte = self.read_u8()?;
        if byte & 0x80 == 0 {
            if byte & 0x40 != 0 {
                byte |= 0x80;
            }
            Ok(byte as i8 as i32)
        } else {
            let mut value = (byte & 0x7f) as u32;
            let mut shift = 7;
            loop {
                byte = self.read_u8()?;
                value |= ((byte & 0x7f) as u32) << shift;
                if byte & 0x80 == 0 {
                    if byte & 0x40 != 0 && shift < 25 {
                        value |= 0xffff_ff80 << shift;
                    }
                    break
                }
                shift += 7;
                if shift > 31 { return Err(Error::Leb128Overflow) }
            }
            Ok(value as i32)
        }
    }
}

pub trait Read<T> {
    fn read(&mut self) -> ReaderResult<T>;
}

impl<'a> Read<u32> for Reader<'a> {
    fn read(&mut self) -> ReaderResult<u32> {
        self.read_var_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u8() {
        let mut r = Reader::new(&[1, 2]);
        assert_eq!(r.read_u8(), Ok(1));
        assert_eq!(r.pos(), 1);
        assert_eq!(r.read_u8(), Ok(2));
        assert!(r.done());
        assert_eq!(r.read_u8(), Err(Error::BufferExhausted));
        assert_eq!(r.pos(), 2);
    }

    #[test]
    fn test_read_slice() {
        let mut r = Reader::new(b"\0asm\x01\0\0\0");
        assert_eq!(r.read_slice(4), Ok(&b"\0asm"[..]));
        assert_eq!(r.read_word(), Ok(&[1, 0, 0, 0][..]));
        assert_eq!(r.read_slice(1), Err(Error::BufferExhausted));
    }

    #[test]
    fn test_read_past_end_keeps_position() {
        let mut r = Reader::new(&[0, 1, 2]);
        r.read_u8().unwrap();
        assert_eq!(r.read_word(), Err(Error::BufferExhausted));
        assert_eq!(r.pos(), 1);
        assert_eq!(r.remaining(), 2);
    }

    #[test]
    fn test_sub_reader() {
        let mut r = Reader::new(&[3, 0xa, 0xb, 0xc, 0xd]);
        let len = r.read_u8().unwrap() as usize;
        let mut s = r.sub_reader(len).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.read_u8(), Ok(0xa));
        assert_eq!(s.remaining(), 2);
        assert_eq!(r.read_u8(), Ok(0xd));
        assert_eq!(Reader::new(&[4, 0]).sub_reader(4).err(), Some(Error::BufferExhausted));
    }

    #[test]
    fn test_read_var_u32() {
        fn read_u32(buf: &[u8]) -> u32 {
            let mut r = Reader::new(buf);
            let v = r.read_var_u32().unwrap();
            assert!(r.done());
            v
        }

        assert_eq!(read_u32(&[0b0000000]), 0b0000000);
        assert_eq!(read_u32(&[0b1111111]), 0b1111111);
        assert_eq!(read_u32(&[0b10000000, 0b0000001]), 0b1_0000000);
        assert_eq!(read_u32(&[0b11111111, 0b0000001]), 0b1_1111111);
        assert_eq!(read_u32(&[0b10000000, 0b10000001, 0b0000001]), 0b1_0000001_0000000);
        assert_eq!(read_u32(&[0b11111111, 0b11111111, 0b11111111, 0b11111111, 0b00001111]), 0xffff_ffff);

        let mut r = Reader::new(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]);
        assert_eq!(r.read_var_u32(), Err(Error::Leb128Overflow));
        assert_eq!(Reader::new(&[0x80]).read_var_u32(), Err(Error::BufferExhausted));
    }

    #[test]
    fn test_read_var_i32() {
        fn read_i32(buf: &[u8]) -> i32 {
            let mut r = Reader::new(buf);
            let v = r.read_var_i32().unwrap();
            assert!(r.done());
            v
        }

        assert_eq!(read_i32(&[0x0]), 0);
        assert_eq!(read_i32(&[0x1]), 1);
        assert_eq!(read_i32(&[0x7f]), -1);
        assert_eq!(read_i32(&[0x7e]), -2);

        assert_eq!(read_i32(&[0xff, 0]), 127);
        assert_eq!(read_i32(&[0x80, 1]), 128);

        assert_eq!(read_i32(&[0x81, 0x7f]), -127);
        assert_eq!(read_i32(&[0x80, 0x7f]), -128);
        assert_eq!(read_i32(&[0xff, 0x7e]), -129);

        assert_eq!(read_i32(&[0xff, 0xff, 0xff, 0xff, 0x07]), i32::max_value());
        assert_eq!(read_i32(&[0x80, 0x80, 0x80, 0x80, 0x78]), i32::min_value());
    }
}
