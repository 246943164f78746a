use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced LIFO with optional depth bound
///
/// One type serves both stacks: the data stack is unbounded, the call
/// stack caps its depth so runaway recursion becomes a reported error
/// instead of unbounded growth. The error codes differ per use, so the
/// owner picks them at construction.

pub struct Stack<T> {
    underflow: ErrorCode,
    overflow: ErrorCode,
    max_depth: Option<usize>,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn unbounded(underflow: ErrorCode) -> Stack<T> {
        Stack {
            underflow,
            overflow: underflow,
            max_depth: None,
            vec: vec![],
        }
    }

    pub fn bounded(underflow: ErrorCode, overflow: ErrorCode, max_depth: usize) -> Stack<T> {
        Stack {
            underflow,
            overflow,
            max_depth: Some(max_depth),
            vec: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    pub fn peek(&self) -> Result<&T> {
        match self.vec.last() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }

    pub fn push(&mut self, val: T) -> Result<()> {
        if let Some(max_depth) = self.max_depth {
            if self.vec.len() >= max_depth {
                return Err(
                    Error::new(self.overflow).message(format!("{} ({})", self.overflow, max_depth))
                );
            }
        }
        self.vec.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }

    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
