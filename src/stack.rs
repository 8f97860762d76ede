//! Stack model: the navigator's believed stack state

use crate::identity::ScreenId;
use crate::logger::Logger;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered identifiers, index 0 = root, last = top.
///
/// Never holds the same identifier twice. Only the navigator writes to it.
#[derive(Debug, Clone)]
pub struct StackModel {
    ids: Vec<ScreenId>,
    logger: Arc<Logger>,
}

impl StackModel {
    /// Create an empty stack
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            ids: Vec::new(),
            logger,
        }
    }

    /// Push `id` on top. Ignored (and logged) if it is already present.
    pub fn append(&mut self, id: ScreenId) -> bool {
        if self.contains(&id) {
            self.logger
                .debug(&format!("fail to add {} because it already exists.", id));
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove every identifier in `ids`, keeping survivors in order.
    /// Returns the identifiers actually removed, bottom to top.
    pub fn remove_all(&mut self, ids: &HashSet<ScreenId>) -> Vec<ScreenId> {
        if ids.is_empty() {
            self.logger.debug("fail to remove empty identifier set.");
            return Vec::new();
        }
        let mut removed = Vec::new();
        self.ids.retain(|id| {
            if ids.contains(id) {
                removed.push(id.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Keep only the root. Returns what was dropped, bottom to top.
    pub fn truncate_to_first(&mut self) -> Vec<ScreenId> {
        if self.ids.len() <= 1 {
            return Vec::new();
        }
        self.ids.split_off(1)
    }

    pub fn top(&self) -> Option<&ScreenId> {
        self.ids.last()
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &ScreenId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ScreenId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;

    fn stack(ids: &[&str]) -> StackModel {
        let mut stack = StackModel::new(Arc::new(Logger::new(LogLevel::Warning)));
        for id in ids {
            stack.append(ScreenId::from(*id));
        }
        stack
    }

    fn names(stack: &StackModel) -> Vec<&str> {
        stack.ids().iter().map(ScreenId::as_str).collect()
    }

    #[test]
    fn test_append_is_ordered() {
        let stack = stack(&["root", "a", "b"]);
        assert_eq!(names(&stack), ["root", "a", "b"]);
        assert_eq!(stack.top().map(ScreenId::as_str), Some("b"));
        assert_eq!(stack.count(), 3);
    }

    #[test]
    fn test_append_rejects_duplicates() {
        let mut stack = stack(&["root", "a"]);
        assert!(!stack.append(ScreenId::from("root")));
        assert_eq!(stack.count(), 2);
        assert_eq!(stack.top().map(ScreenId::as_str), Some("a"));
    }

    #[test]
    fn test_remove_all_preserves_survivor_order() {
        let mut stack = stack(&["root", "a", "b", "c", "d"]);
        let doomed: HashSet<ScreenId> = ["b", "d", "zzz"].into_iter().map(ScreenId::from).collect();

        let removed = stack.remove_all(&doomed);

        assert_eq!(names(&stack), ["root", "a", "c"]);
        assert_eq!(removed, vec![ScreenId::from("b"), ScreenId::from("d")]);
    }

    #[test]
    fn test_remove_all_empty_set_is_noop() {
        let mut stack = stack(&["root", "a"]);
        assert!(stack.remove_all(&HashSet::new()).is_empty());
        assert_eq!(stack.count(), 2);
    }

    #[test]
    fn test_truncate_to_first() {
        let mut stack = stack(&["root", "a", "b"]);
        let dropped = stack.truncate_to_first();
        assert_eq!(names(&stack), ["root"]);
        assert_eq!(dropped.len(), 2);

        assert!(stack.truncate_to_first().is_empty());
        assert_eq!(stack.count(), 1);
    }

    #[test]
    fn test_empty_stack_reads() {
        let mut stack = stack(&[]);
        assert!(stack.top().is_none());
        assert!(stack.is_empty());
        assert!(stack.truncate_to_first().is_empty());
    }
}
