/// Cursor over interleaved fragments and substitution values.
///
/// The cursor sits inside one fragment at a time. A value is "pending" once
/// the current fragment has been fully consumed and another fragment follows;
/// taking the value moves the cursor to the start of that next fragment.
pub struct Cursor<'a, V> {
    fragments: Vec<&'a str>,
    values: std::vec::IntoIter<V>,
    index: usize,
    pos: usize,
}

impl<'a, V> Cursor<'a, V> {
    /// Create a cursor. Callers guarantee `fragments.len() == values.len() + 1`.
    pub fn new(fragments: Vec<&'a str>, values: Vec<V>) -> Self {
        debug_assert_eq!(fragments.len(), values.len() + 1);
        Self {
            fragments,
            values: values.into_iter(),
            index: 0,
            pos: 0,
        }
    }

    /// Unconsumed text of the current fragment.
    pub fn rest(&self) -> &'a str {
        let fragment: &'a str = self.fragments.get(self.index).copied().unwrap_or("");
        &fragment[self.pos.min(fragment.len())..]
    }

    /// Consume `len` bytes of the current fragment.
    pub fn bump(&mut self, len: usize) {
        self.pos += len;
    }

    /// Consume the rest of the current fragment.
    pub fn bump_all(&mut self) {
        self.pos += self.rest().len();
    }

    /// Whether a substitution value follows the current fragment.
    pub fn has_value_after(&self) -> bool {
        self.index + 1 < self.fragments.len()
    }

    /// Whether a substitution value sits right at the cursor.
    pub fn value_pending(&self) -> bool {
        self.rest().is_empty() && self.has_value_after()
    }

    /// Take the pending value and move to the next fragment.
    pub fn take_value(&mut self) -> Option<V> {
        if !self.value_pending() {
            return None;
        }
        let value = self.values.next()?;
        self.index += 1;
        self.pos = 0;
        Some(value)
    }

    /// Whether all fragments and values have been consumed.
    pub fn is_finished(&self) -> bool {
        self.rest().is_empty() && !self.has_value_after()
    }

    /// Index of the current fragment.
    pub fn fragment_index(&self) -> usize {
        self.index
    }

    /// Byte offset inside the current fragment.
    pub fn offset(&self) -> usize {
        self.pos
    }
}
