//! View and layout-guide handles
//!
//! This is the capability surface the chain algebra needs from a host UI
//! toolkit: identity, an optional parent link, and a safe-inset guide owned
//! by each view. Handles are retained (`Rc`-backed) and compare by identity,
//! like the toolkit objects they stand in for. Everything here is
//! single-threaded by contract; layout runs on the host's main thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct ViewNode {
    name: String,
    parent: RefCell<Weak<ViewNode>>,
    safe_area: RefCell<Option<LayoutGuide>>,
}

/// A retained handle to a view in the host hierarchy.
///
/// Clones share the same underlying view; equality is identity.
#[derive(Clone)]
pub struct View(Rc<ViewNode>);

impl View {
    /// Create a detached view. The name only shows up in debug output and
    /// error messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Rc::new(ViewNode {
            name: name.into(),
            parent: RefCell::new(Weak::new()),
            safe_area: RefCell::new(None),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Insert `child` into the hierarchy under this view. A view has at most
    /// one parent; re-adding moves it.
    pub fn add_subview(&self, child: &View) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
    }

    /// The containing view, if this view has been inserted into a hierarchy.
    pub fn parent(&self) -> Option<View> {
        self.0.parent.borrow().upgrade().map(View)
    }

    /// The guide tracking this view's safe inset region. Created lazily and
    /// cached, so repeated calls return the same guide.
    pub fn safe_area_guide(&self) -> LayoutGuide {
        let mut slot = self.0.safe_area.borrow_mut();
        slot.get_or_insert_with(|| {
            LayoutGuide(Rc::new(GuideNode {
                name: format!("{}.safe_area", self.0.name),
                owner: Rc::downgrade(&self.0),
            }))
        })
        .clone()
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

struct GuideNode {
    name: String,
    owner: Weak<ViewNode>,
}

/// A layout guide: an anchorable rectangle owned by a view, such as its
/// safe-area region. Compares by identity, like [`View`].
#[derive(Clone)]
pub struct LayoutGuide(Rc<GuideNode>);

impl LayoutGuide {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The view owning this guide, if it is still alive.
    pub fn owner(&self) -> Option<View> {
        self.0.owner.upgrade().map(View)
    }
}

impl PartialEq for LayoutGuide {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for LayoutGuide {}

impl fmt::Debug for LayoutGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

/// A constraint endpoint: either a view or a layout guide.
#[derive(Clone, PartialEq, Eq)]
pub enum Item {
    View(View),
    Guide(LayoutGuide),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::View(view) => view.name(),
            Item::Guide(guide) => guide.name(),
        }
    }
}

impl From<&View> for Item {
    fn from(view: &View) -> Self {
        Item::View(view.clone())
    }
}

impl From<&LayoutGuide> for Item {
    fn from(guide: &LayoutGuide) -> Self {
        Item::Guide(guide.clone())
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = View::new("a");
        let b = View::new("a");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_parent_link() {
        let container = View::new("container");
        let child = View::new("child");
        assert!(child.parent().is_none());

        container.add_subview(&child);
        assert_eq!(child.parent(), Some(container.clone()));
    }

    #[test]
    fn test_safe_area_guide_is_cached() {
        let view = View::new("view");
        let first = view.safe_area_guide();
        let second = view.safe_area_guide();
        assert_eq!(first, second);
        assert_eq!(first.owner(), Some(view));
    }

    #[test]
    fn test_item_equality_distinguishes_views_and_guides() {
        let view = View::new("view");
        let guide = view.safe_area_guide();
        assert_ne!(Item::from(&view), Item::from(&guide));
        assert_eq!(Item::from(&view), Item::from(&view));
    }
}
