use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Bounded stack
///
/// A `Vec` that refuses to grow past 65535 entries. Running out of room
/// is reported as "Out of memory" with the message given at creation.

pub struct Stack<T> {
    overflow: &'static str,
    items: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Stack<T> {
    const LIMIT: usize = u16::MAX as usize;

    pub fn new(overflow: &'static str) -> Stack<T> {
        Stack {
            overflow,
            items: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= Self::LIMIT {
            return Err(error!(OutOfMemory; self.overflow));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| error!(InternalError; "STACK UNDERFLOW"))
    }
}
