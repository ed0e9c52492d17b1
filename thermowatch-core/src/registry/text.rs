//! Fixed-capacity display text

use core::fmt;
use heapless::String;

/// Owned text with a byte capacity of `N`
///
/// Assignment never fails: input longer than `N` bytes is cut at the last
/// whole character that fits. The wire terminator is not part of `N`.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundedText<const N: usize>(String<N>);

impl<const N: usize> BoundedText<N> {
    /// Byte capacity
    pub const CAPACITY: usize = N;

    /// Create an empty text
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Create from `value`, truncating if needed
    pub fn truncating(value: &str) -> Self {
        let mut text = Self::new();
        text.set(value);
        text
    }

    /// Replace the content with `value`
    ///
    /// Returns `true` when `value` had to be truncated.
    pub fn set(&mut self, value: &str) -> bool {
        self.0.clear();
        for ch in value.chars() {
            if self.0.push(ch).is_err() {
                return true;
            }
        }
        false
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> fmt::Debug for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq<str> for BoundedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> AsRef<str> for BoundedText<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
