//! Local echo of an externally owned value
//!
//! A form field keeps a local copy of the value it edits so keystrokes show
//! up immediately. The copy must follow the canonical value when that
//! changes from outside (reload, another row committing a list reorder),
//! otherwise the field keeps showing a stale local edit.

/// Local copy of a value owned elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalEcho<T> {
    local: T,
    external: T,
}

impl<T: Clone + PartialEq> LocalEcho<T> {
    pub fn new(value: T) -> Self {
        Self {
            local: value.clone(),
            external: value,
        }
    }

    /// The value shown to the user.
    pub fn local(&self) -> &T {
        &self.local
    }

    pub fn local_mut(&mut self) -> &mut T {
        &mut self.local
    }

    /// The last canonical value observed.
    pub fn external(&self) -> &T {
        &self.external
    }

    pub fn set_local(&mut self, value: T) {
        self.local = value;
    }

    /// Observe the current canonical value.
    ///
    /// When it differs from the last one observed, the local copy is
    /// replaced and `true` is returned. An unchanged canonical value leaves
    /// local edits alone.
    pub fn observe(&mut self, external: &T) -> bool {
        if &self.external == external {
            return false;
        }
        self.external = external.clone();
        self.local = external.clone();
        true
    }

    /// Local copy differs from the canonical value.
    pub fn is_diverged(&self) -> bool {
        self.local != self.external
    }

    /// Drop local edits.
    pub fn reset(&mut self) {
        self.local = self.external.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_edits_survive_unchanged_external() {
        let mut echo = LocalEcho::new("Hello".to_string());
        echo.local_mut().push('!');
        assert!(!echo.observe(&"Hello".to_string()));
        assert_eq!(echo.local(), "Hello!");
        assert!(echo.is_diverged());
    }

    #[test]
    fn test_external_change_resyncs_local() {
        let mut echo = LocalEcho::new("Hello".to_string());
        echo.set_local("Draft".to_string());
        assert!(echo.observe(&"Reloaded".to_string()));
        assert_eq!(echo.local(), "Reloaded");
        assert!(!echo.is_diverged());
    }

    #[test]
    fn test_reset_drops_local_edits() {
        let mut echo = LocalEcho::new(3);
        echo.set_local(7);
        echo.reset();
        assert_eq!(*echo.local(), 3);
    }
}
