/// At most one selected item, keyed by `K`.
///
/// Clicking an item toggles it: a second click on the selected item clears
/// the selection, a click on another item moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<K> {
    current: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Copy + PartialEq> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `key` selected, or with nothing for `None`.
    pub fn from_option(key: Option<K>) -> Self {
        Self { current: key }
    }

    pub fn toggle(&mut self, key: K) {
        self.current = match self.current {
            Some(selected) if selected == key => None,
            _ => Some(key),
        };
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn selected(&self) -> Option<K> {
        self.current
    }

    pub fn is_selected(&self, key: K) -> bool {
        self.current == Some(key)
    }

    /// Drops the selection when `visible` rejects it, e.g. after filtering
    /// removed the selected item from view.
    pub fn retain(&mut self, visible: impl Fn(K) -> bool) {
        if let Some(selected) = self.current
            && !visible(selected)
        {
            self.current = None;
        }
    }
}

/// One click on a selectable list: the item open before the click, the item
/// clicked, or a click outside every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionInput<K> {
    pub selected: Option<K>,
    pub click: Option<K>,
    pub dismiss: bool,
}

impl<K> Default for SelectionInput<K> {
    fn default() -> Self {
        Self {
            selected: None,
            click: None,
            dismiss: false,
        }
    }
}

impl<K: Copy + PartialEq> SelectionInput<K> {
    /// Selection after the click. Dismissing wins over a clicked item.
    pub fn resolve(self) -> Selection<K> {
        let mut selection = Selection::from_option(self.selected);
        if self.dismiss {
            selection.clear();
        } else if let Some(key) = self.click {
            selection.toggle(key);
        }
        selection
    }
}
