//! Mode and progress tracking for the tokenizer.

/// Which lexing rules are active.
///
/// Attribute lists and pipe text never overlap: neither can be opened
/// from inside the other.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexMode {
    /// Structural markup: tags, classes, ids, inline content.
    #[default]
    Normal,
    /// Inside `( ... )`: only attribute entries are recognized.
    AttributeList,
    /// After `|`: classes, ids and further pipes; anything else is text.
    PipeText,
}

/// Hard ceiling on dispatch steps.
///
/// The counter only grows; a stream that keeps dispatching without reaching
/// end of input eventually trips it.
#[derive(Clone, Debug)]
pub(crate) struct LoopGuard {
    steps: usize,
    limit: usize,
}

impl LoopGuard {
    pub(crate) fn new(limit: usize) -> Self {
        Self { steps: 0, limit }
    }

    /// Count one step. Returns `false` once the ceiling is exceeded.
    #[inline]
    pub(crate) fn tick(&mut self) -> bool {
        self.steps += 1;
        self.steps <= self.limit
    }

    #[inline]
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub(crate) fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        assert_eq!(LexMode::default(), LexMode::Normal);
    }

    #[test]
    fn guard_trips_after_limit() {
        let mut guard = LoopGuard::new(2);
        assert!(guard.tick());
        assert!(guard.tick());
        assert!(!guard.tick());
        assert_eq!(guard.steps(), 3);
        assert_eq!(guard.limit(), 2);
    }

    #[test]
    fn zero_limit_trips_immediately() {
        let mut guard = LoopGuard::new(0);
        assert!(!guard.tick());
    }
}
