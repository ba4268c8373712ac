//! The abyss: the interpreter's data stack.
//!
//! Bubbles are stored bottom to top, so the top of the abyss is the end of
//! the backing vector.

use crate::error::StackError;
use crate::value::Bubble;

/// The runtime stack of bubbles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Abyss {
    items: Vec<Bubble>,
    max_depth: Option<usize>,
}

impl Abyss {
    /// Create a new empty abyss.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_depth: None,
        }
    }

    /// Create an abyss with a maximum depth.
    pub fn with_max_depth(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max_depth: Some(max),
        }
    }

    /// Number of bubbles in the abyss.
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn require(&self, needed: usize) -> Result<(), StackError> {
        if self.items.len() < needed {
            return Err(StackError::Underflow {
                needed,
                depth: self.items.len(),
            });
        }
        Ok(())
    }

    /// Push a bubble.
    pub fn push(&mut self, bubble: Bubble) -> Result<(), StackError> {
        if let Some(limit) = self.max_depth
            && self.items.len() >= limit
        {
            return Err(StackError::Overflow { limit });
        }
        self.items.push(bubble);
        Ok(())
    }

    /// Push several bubbles, first item ending up deepest.
    pub fn push_many(&mut self, bubbles: impl IntoIterator<Item = Bubble>) -> Result<(), StackError> {
        for bubble in bubbles {
            self.push(bubble)?;
        }
        Ok(())
    }

    /// Pop the top bubble.
    pub fn pop(&mut self) -> Result<Bubble, StackError> {
        self.items.pop().ok_or(StackError::Underflow {
            needed: 1,
            depth: 0,
        })
    }

    /// Pop `count` bubbles, returned in pop order (top first).
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<Bubble>, StackError> {
        self.require(count)?;
        let split = self.items.len() - count;
        let mut popped = self.items.split_off(split);
        popped.reverse();
        Ok(popped)
    }

    /// Pop the top two bubbles as `(top, next)`. Nothing is removed unless
    /// both are present.
    pub fn pop_pair(&mut self) -> Result<(Bubble, Bubble), StackError> {
        self.require(2)?;
        let top = self.pop()?;
        let next = self.pop()?;
        Ok((top, next))
    }

    /// Peek at the top bubble.
    pub fn top(&self) -> Result<&Bubble, StackError> {
        self.peek(0)
    }

    /// Peek at a bubble by depth (0 = top).
    pub fn peek(&self, depth: usize) -> Result<&Bubble, StackError> {
        self.require(depth + 1)?;
        Ok(&self.items[self.items.len() - 1 - depth])
    }

    /// Push a copy of the top bubble.
    pub fn dup(&mut self) -> Result<(), StackError> {
        let top = self.top()?.clone();
        self.push(top)
    }

    /// Rotate the top of the abyss downwards.
    ///
    /// With `n == 0`, or `n` past the bottom, the whole abyss rotates: the top
    /// bubble sinks to the bottom. Otherwise only the top `n + 1` bubbles take
    /// part and the top sinks to the bottom of that window. Fewer than two
    /// bubbles leave the abyss unchanged.
    pub fn submerge(&mut self, n: usize) {
        let len = self.items.len();
        if len < 2 {
            return;
        }
        let start = if n == 0 || n > len - 1 { 0 } else { len - (n + 1) };
        self.items[start..].rotate_right(1);
    }

    /// All bubbles, bottom to top.
    pub fn as_slice(&self) -> &[Bubble] {
        &self.items
    }

    /// Take the bubbles, bottom to top.
    pub fn into_vec(self) -> Vec<Bubble> {
        self.items
    }
}
