//! Tab container: exactly one of several modules active at a time.

use crate::error::{Error, Result};
use crate::module::{ModuleId, ModuleTree, Widget};

/// Keeps one module of a list running and the rest paused.
///
/// The tabs are ordinary modules already in the tree; the container only
/// starts and stops them.
#[derive(Debug, Clone)]
pub struct TabModule {
    tabs: Vec<ModuleId>,
    index: usize,
}

impl TabModule {
    /// Add a tab container for `tabs` under `parent`.
    ///
    /// Tab 0 is started and every other tab stopped.
    pub fn attach(
        tree: &mut ModuleTree,
        parent: ModuleId,
        tabs: Vec<ModuleId>,
    ) -> Result<ModuleId> {
        if tabs.is_empty() {
            return Err(Error::EmptyTabs);
        }
        for (i, &tab) in tabs.iter().enumerate() {
            if i == 0 {
                tree.start(tab)?;
            } else {
                tree.stop(tab)?;
            }
        }
        tree.add_fill(parent, Self { tabs, index: 0 })
    }

    /// Switch the container at `id` to tab `index`.
    pub fn select(tree: &mut ModuleTree, id: ModuleId, index: usize) -> Result<()> {
        tree.with_widget::<Self, _>(id, |tabs, tree| tabs.set_index(tree, index))?
    }

    /// Stop the current tab and start tab `index`.
    pub fn set_index(&mut self, tree: &mut ModuleTree, index: usize) -> Result<()> {
        let Some(&next) = self.tabs.get(index) else {
            return Err(Error::TabIndex {
                index,
                len: self.tabs.len(),
            });
        };
        tree.stop(self.tab())?;
        tree.start(next)?;
        self.index = index;
        Ok(())
    }

    /// Index of the active tab.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The active tab.
    #[inline]
    pub fn tab(&self) -> ModuleId {
        self.tabs[self.index]
    }

    /// All tabs in order.
    pub fn tabs(&self) -> &[ModuleId] {
        &self.tabs
    }
}

impl Widget for TabModule {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RootGrid;
    use crate::module::Blank;

    fn setup() -> (RootGrid, ModuleTree, ModuleId, ModuleId) {
        let root = RootGrid::headless((10, 20));
        let mut tree = ModuleTree::new(&root).unwrap();
        let tab1 = tree.add_fill(tree.root(), Blank).unwrap();
        let tab2 = tree.add_fill(tree.root(), Blank).unwrap();
        (root, tree, tab1, tab2)
    }

    #[test]
    fn test_tab_initial_state() {
        let (_root, mut tree, tab1, tab2) = setup();
        let top = tree.root();
        let id = TabModule::attach(&mut tree, top, vec![tab1, tab2]).unwrap();

        let tabs = tree.widget::<TabModule>(id).unwrap();
        assert_eq!(tabs.index(), 0);
        assert_eq!(tabs.tab(), tab1);
        assert_eq!(tabs.tabs(), &[tab1, tab2]);
        assert!(!tree.is_paused(tab1).unwrap());
        assert!(tree.is_paused(tab2).unwrap());
    }

    #[test]
    fn test_tab_switch() {
        let (_root, mut tree, tab1, tab2) = setup();
        let top = tree.root();
        let id = TabModule::attach(&mut tree, top, vec![tab1, tab2]).unwrap();

        TabModule::select(&mut tree, id, 1).unwrap();
        let tabs = tree.widget::<TabModule>(id).unwrap();
        assert_eq!(tabs.index(), 1);
        assert_eq!(tabs.tab(), tab2);
        assert!(tree.is_paused(tab1).unwrap());
        assert!(!tree.is_paused(tab2).unwrap());

        TabModule::select(&mut tree, id, 1).unwrap();
        assert!(!tree.is_paused(tab2).unwrap());
    }

    #[test]
    fn test_tab_errors() {
        let (_root, mut tree, tab1, tab2) = setup();
        let top = tree.root();
        assert!(matches!(
            TabModule::attach(&mut tree, top, Vec::new()),
            Err(Error::EmptyTabs)
        ));

        let id = TabModule::attach(&mut tree, top, vec![tab1, tab2]).unwrap();
        assert!(matches!(
            TabModule::select(&mut tree, id, 2),
            Err(Error::TabIndex { index: 2, len: 2 })
        ));
        assert_eq!(tree.widget::<TabModule>(id).unwrap().index(), 0);
        assert!(!tree.is_paused(tab1).unwrap());
    }
}
