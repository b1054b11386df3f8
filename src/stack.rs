use std::fmt;

pub type StackResult<T> = Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    Overflow,
    Underflow,
}

/// Fixed-capacity LIFO stack over a caller-provided buffer.
pub struct Stack<'a, T: 'a + Copy> {
    buf: &'a mut [T],
    pos: usize,
}

impl<'a, T: 'a + Copy> Stack<'a, T> {
    pub fn new(buf: &'a mut [T]) -> Self {
        Stack { buf: buf, pos: 0 }
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.pos == self.buf.len()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0
    }

    #[inline]
    pub fn push(&mut self, value: T) -> StackResult<()> {
        if self.full() {
            return Err(Error::Overflow)
        }
        self.buf[self.pos] = value;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> StackResult<T> {
        if self.empty() {
            return Err(Error::Underflow)
        }
        self.pos -= 1;
        Ok(self.buf[self.pos])
    }

    /// Returns a copy of the item at the top of the stack.
    #[inline]
    pub fn top(&self) -> StackResult<T> {
        if self.empty() {
            Err(Error::Underflow)
        } else {
            Ok(self.buf[self.pos - 1])
        }
    }

    /// Live items, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.pos]
    }
}

impl<'a, T: 'a + Copy + fmt::Debug> Stack<'a, T> {
    pub fn dump(&self) {
        for i in 0..self.len() {
            trace!("0x{:04}: {:?}", i, self.buf[self.pos - i - 1]);
        }
    }
}

impl<'a, T: 'a + Copy + fmt::Debug> fmt::Debug for Stack<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stack {{ len: {} }}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut buf = [0i32; 8];
        let mut s = Stack::new(&mut buf);
        assert!(s.empty());
        assert!(!s.full());
        assert_eq!(s.cap(), 8);
        assert_eq!(s.len(), 0);

        for i in 0..8 {
            s.push(i).unwrap();
        }

        assert_eq!(s.push(8), Err(Error::Overflow));
        assert_eq!(s.len(), 8);

        assert!(!s.empty());
        assert!(s.full());

        assert_eq!(s.top().unwrap(), 7);
        for i in 0..8 {
            assert_eq!(s.pop().unwrap(), 7 - i);
        }
        assert_eq!(s.pop(), Err(Error::Underflow));
        assert_eq!(s.top(), Err(Error::Underflow));
    }

    #[test]
    fn test_as_slice() {
        let mut buf = [0i32; 4];
        let mut s = Stack::new(&mut buf);
        assert!(s.as_slice().is_empty());
        s.push(10).unwrap();
        s.push(4).unwrap();
        assert_eq!(s.as_slice(), &[10, 4]);
        s.reset();
        assert_eq!(s.len(), 0);
        assert!(s.as_slice().is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf = [0i32; 0];
        let mut s = Stack::new(&mut buf);
        assert!(s.full());
        assert_eq!(s.push(1), Err(Error::Overflow));
    }
}
