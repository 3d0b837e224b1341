//! Single-register calculator memory (MC / MR / M+ / M-)

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Memory register surviving `Clear`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    value: f64,
}

impl Memory {
    /// Creates an empty register
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Current register value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns true when the register holds a non-zero value
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }

    /// M+
    ///
    /// An overflowing sum leaves the register untouched.
    pub fn add(&mut self, amount: f64) -> CalcResult<()> {
        self.store(self.value + amount)
    }

    /// M-
    ///
    /// An overflowing difference leaves the register untouched.
    pub fn subtract(&mut self, amount: f64) -> CalcResult<()> {
        self.store(self.value - amount)
    }

    fn store(&mut self, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        self.value = value;
        Ok(())
    }

    /// MC
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_new_is_empty() {
        let m = Memory::new();
        assert_eq!(m.value(), 0.0);
        assert!(!m.is_set());
        assert_eq!(m, Memory::default());
    }

    #[test]
    fn test_memory_add_subtract() {
        let mut m = Memory::new();
        m.add(5.0).unwrap();
        m.add(2.5).unwrap();
        assert_eq!(m.value(), 7.5);
        m.subtract(10.0).unwrap();
        assert_eq!(m.value(), -2.5);
        assert!(m.is_set());
    }

    #[test]
    fn test_memory_clear() {
        let mut m = Memory::new();
        m.add(3.0).unwrap();
        m.clear();
        assert!(!m.is_set());
    }

    #[test]
    fn test_memory_overflow_keeps_value() {
        let mut m = Memory::new();
        m.add(f64::MAX).unwrap();
        assert_eq!(m.add(f64::MAX), Err(CalcError::Overflow));
        assert_eq!(m.value(), f64::MAX);
        assert_eq!(m.subtract(f64::MAX), Ok(()));
        m.subtract(f64::MAX).unwrap();
        assert_eq!(m.subtract(f64::MAX), Err(CalcError::Overflow));
        assert_eq!(m.value(), -f64::MAX);
    }
}
