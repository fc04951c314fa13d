//! The data stack.

/// LIFO stack of signed integers with an implicit infinite floor of zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pop the top value, `None` when empty.
    ///
    /// Only opcodes whose underflow policy is not "treat as zero" use this.
    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    /// Pop the top value, reading an empty stack as `0`.
    pub fn pop_or_zero(&mut self) -> i64 {
        self.values.pop().unwrap_or(0)
    }

    pub fn peek(&self) -> Option<i64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Contents bottom first.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}
