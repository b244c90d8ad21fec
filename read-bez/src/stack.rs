//! Operand stack for program evaluation.

use types::Fixed;

/// Maximum number of operands that may precede an operator.
///
/// The largest operator (`flxa`) consumes 17.
pub(crate) const MAX_STACK: usize = 48;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum StackError {
    Overflow,
    Underflow,
}

/// Operand stack holding 24.8 fixed point values.
pub(crate) struct Stack {
    values: [Fixed; MAX_STACK],
    top: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            values: [Fixed::ZERO; MAX_STACK],
            top: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    pub fn clear(&mut self) {
        self.top = 0;
    }

    pub fn push(&mut self, value: Fixed) -> Result<(), StackError> {
        *self
            .values
            .get_mut(self.top)
            .ok_or(StackError::Overflow)? = value;
        self.top += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Fixed, StackError> {
        self.top = self.top.checked_sub(1).ok_or(StackError::Underflow)?;
        Ok(self.values[self.top])
    }

    /// Returns the `N` topmost values, deepest first.
    pub fn top<const N: usize>(&self) -> Result<[Fixed; N], StackError> {
        let start = self.top.checked_sub(N).ok_or(StackError::Underflow)?;
        let mut values = [Fixed::ZERO; N];
        values.copy_from_slice(&self.values[start..self.top]);
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push(Fixed::from_i32(1)).unwrap();
        stack.push(Fixed::from_i32(2)).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(Fixed::from_i32(2)));
        assert_eq!(stack.pop(), Ok(Fixed::from_i32(1)));
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn top_values_in_push_order() {
        let mut stack = Stack::new();
        for i in 0..5 {
            stack.push(Fixed::from_i32(i)).unwrap();
        }
        assert_eq!(
            stack.top::<2>(),
            Ok([Fixed::from_i32(3), Fixed::from_i32(4)])
        );
        assert_eq!(stack.top::<6>(), Err(StackError::Underflow));
    }

    #[test]
    fn overflow() {
        let mut stack = Stack::new();
        for _ in 0..MAX_STACK {
            stack.push(Fixed::ONE).unwrap();
        }
        assert_eq!(stack.push(Fixed::ONE), Err(StackError::Overflow));
        stack.clear();
        assert!(stack.is_empty());
    }
}
