use serde::{Deserialize, Serialize};

/// How a new file selection combines with the thumbnails already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreviewPolicy {
    /// Drop the previous thumbnails, show only the latest selection.
    #[default]
    Replace,
    /// Keep the previous thumbnails and add the latest selection after them.
    Append,
}

/// The thumbnails of one preview container.
///
/// Items are owned: replacing them drops the old ones, which is where the
/// frontend releases each thumbnail's object URL.
#[derive(Debug)]
pub struct PreviewSet<T> {
    policy: PreviewPolicy,
    items: Vec<T>,
}

impl<T> PreviewSet<T> {
    pub fn new(policy: PreviewPolicy) -> Self {
        Self {
            policy,
            items: Vec::new(),
        }
    }

    pub fn policy(&self) -> PreviewPolicy {
        self.policy
    }

    /// Applies one file-selection event. An empty replace clears the set.
    pub fn select<I>(&mut self, selection: I)
    where
        I: IntoIterator<Item = T>,
    {
        if self.policy == PreviewPolicy::Replace {
            self.items.clear();
        }
        self.items.extend(selection);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Tracked {
        name: &'static str,
        released: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.released.borrow_mut().push(self.name);
        }
    }

    fn names<T: AsRef<str>>(set: &PreviewSet<T>) -> Vec<&str> {
        set.items().iter().map(|s| s.as_ref()).collect()
    }

    #[test]
    fn replace_keeps_only_latest_selection() {
        let mut set = PreviewSet::new(PreviewPolicy::Replace);
        set.select(["a.png", "b.png"]);
        set.select(["c.png"]);
        assert_eq!(names(&set), vec!["c.png"]);
    }

    #[test]
    fn append_keeps_union_in_selection_order() {
        let mut set = PreviewSet::new(PreviewPolicy::Append);
        set.select(["shirt.png", "pants.png"]);
        set.select(["hat.png"]);
        assert_eq!(names(&set), vec!["shirt.png", "pants.png", "hat.png"]);
    }

    #[test]
    fn empty_selection_renders_nothing() {
        let mut set: PreviewSet<&str> = PreviewSet::new(PreviewPolicy::Append);
        set.select(Vec::new());
        assert!(set.is_empty());

        let mut set = PreviewSet::new(PreviewPolicy::Replace);
        set.select(["a.png"]);
        set.select(Vec::new());
        assert!(set.is_empty());
    }

    #[test]
    fn replaced_items_are_released_once() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let tracked = |name| Tracked {
            name,
            released: released.clone(),
        };

        let mut set = PreviewSet::new(PreviewPolicy::Replace);
        set.select([tracked("first"), tracked("second")]);
        assert!(released.borrow().is_empty());

        set.select([tracked("third")]);
        assert_eq!(*released.borrow(), vec!["first", "second"]);
        assert_eq!(set.len(), 1);

        drop(set);
        assert_eq!(*released.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn append_releases_nothing_until_cleared() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut set = PreviewSet::new(PreviewPolicy::Append);
        set.select([Tracked {
            name: "a",
            released: released.clone(),
        }]);
        set.select([Tracked {
            name: "b",
            released: released.clone(),
        }]);
        assert!(released.borrow().is_empty());

        set.clear();
        assert_eq!(*released.borrow(), vec!["a", "b"]);
    }
}
