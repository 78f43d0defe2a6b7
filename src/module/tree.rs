//! Arena-backed module tree.

use super::widget::{Blank, Widget};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::grid::{Grid, SubGrid};
use crate::layout::{Rect, Shape};
use slotmap::{new_key_type, SlotMap};
use std::any::{type_name, Any};

new_key_type! {
    /// Handle to a node of a [`ModuleTree`].
    pub struct ModuleId;
}

struct Node {
    parent: Option<ModuleId>,
    grid: SubGrid,
    /// `None` for the root node.
    bbox: Option<Rect>,
    paused: bool,
    submodules: Vec<ModuleId>,
    /// Taken out while `with_widget` runs.
    widget: Option<Box<dyn Widget>>,
}

/// A tree of modules over one root grid.
///
/// Submodules are kept in registration order. Later siblings are treated as
/// front-most: they are drawn last and offered events first.
pub struct ModuleTree {
    nodes: SlotMap<ModuleId, Node>,
    root: ModuleId,
}

impl ModuleTree {
    /// Create a tree whose root node covers all of `grid` and has no
    /// behaviour.
    pub fn new<G: Grid>(grid: &G) -> Result<Self> {
        Self::with_root(grid, Blank)
    }

    /// Create a tree whose root node covers all of `grid` and runs `widget`.
    pub fn with_root<G: Grid, W: Widget>(grid: &G, widget: W) -> Result<Self> {
        let grid = SubGrid::from_rect(grid, Rect::from_shape(grid.shape()))?;
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            parent: None,
            grid,
            bbox: None,
            paused: false,
            submodules: Vec::new(),
            widget: Some(Box::new(widget)),
        });
        Ok(Self { nodes, root })
    }

    fn node(&self, id: ModuleId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::UnknownModule)
    }

    fn node_mut(&mut self, id: ModuleId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::UnknownModule)
    }

    /// Add a child of `parent` covering `rect` of the parent's grid.
    ///
    /// The child is appended to the parent's submodules and starts active.
    pub fn add<W: Widget>(&mut self, parent: ModuleId, rect: Rect, widget: W) -> Result<ModuleId> {
        self.add_boxed(parent, rect, Box::new(widget))
    }

    /// Add a child of `parent` covering the parent's whole grid.
    pub fn add_fill<W: Widget>(&mut self, parent: ModuleId, widget: W) -> Result<ModuleId> {
        let rect = Rect::from_shape(self.shape(parent)?);
        self.add(parent, rect, widget)
    }

    /// Add an already boxed widget. See [`add`](Self::add).
    pub fn add_boxed(
        &mut self,
        parent: ModuleId,
        rect: Rect,
        widget: Box<dyn Widget>,
    ) -> Result<ModuleId> {
        let grid = SubGrid::from_rect(&self.node(parent)?.grid, rect)?;
        let id = self.nodes.insert(Node {
            parent: Some(parent),
            grid,
            bbox: Some(rect),
            paused: false,
            submodules: Vec::new(),
            widget: Some(widget),
        });
        self.node_mut(parent)?.submodules.push(id);
        Ok(id)
    }

    /// Drop `id` together with its whole subtree.
    ///
    /// Removing the root drops its submodules but keeps the root itself.
    pub fn remove(&mut self, id: ModuleId) -> Result<()> {
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent {
            self.node_mut(parent)?.submodules.retain(|&child| child != id);
            self.drop_subtree(id);
        } else {
            let children = std::mem::take(&mut self.node_mut(id)?.submodules);
            for child in children {
                self.drop_subtree(child);
            }
        }
        Ok(())
    }

    fn drop_subtree(&mut self, id: ModuleId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.submodules);
            }
        }
    }

    /// Mark `id` active. Idempotent.
    pub fn start(&mut self, id: ModuleId) -> Result<()> {
        self.node_mut(id)?.paused = false;
        Ok(())
    }

    /// Mark `id` paused. A paused node and its subtree neither tick, draw
    /// nor receive events. Idempotent.
    pub fn stop(&mut self, id: ModuleId) -> Result<()> {
        self.node_mut(id)?.paused = true;
        Ok(())
    }

    /// Whether `id` is paused.
    pub fn is_paused(&self, id: ModuleId) -> Result<bool> {
        Ok(self.node(id)?.paused)
    }

    /// Run the tick hook of every active node, parents first.
    pub fn tick(&mut self) {
        self.tick_at(self.root);
    }

    fn tick_at(&mut self, id: ModuleId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        if node.paused {
            return;
        }
        if let Some(widget) = node.widget.as_mut() {
            widget.tick();
        }
        for child in node.submodules.clone() {
            self.tick_at(child);
        }
    }

    /// Run the draw hook of every active node, parents first.
    pub fn draw(&mut self) -> Result<()> {
        self.draw_at(self.root)
    }

    fn draw_at(&mut self, id: ModuleId) -> Result<()> {
        let node = self.node_mut(id)?;
        if node.paused {
            return Ok(());
        }
        if let Some(widget) = node.widget.as_mut() {
            widget.draw(&node.grid)?;
        }
        for child in node.submodules.clone() {
            self.draw_at(child)?;
        }
        Ok(())
    }

    /// Push the root buffer to the backend.
    pub fn flush(&self) -> Result<()> {
        self.node(self.root)?.grid.draw()
    }

    /// Route `event` from the root. Returns whether some node consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.handle_event_at(self.root, event)
    }

    /// Route `event`, given in `id`'s coordinates, into the subtree at `id`.
    ///
    /// Submodules are tried last-registered first. Mouse events reach only
    /// the children whose box contains the position, translated into the
    /// child's coordinates. Key events reach every child. If no child
    /// consumes the event, the node's own widget gets it. Paused nodes and
    /// unknown ids consume nothing.
    pub fn handle_event_at(&mut self, id: ModuleId, event: &Event) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if node.paused {
            return false;
        }

        for &child in node.submodules.clone().iter().rev() {
            let Some(bbox) = self.nodes.get(child).and_then(|n| n.bbox) else {
                continue;
            };
            let consumed = match event {
                Event::Mouse(mouse) => {
                    if !bbox.contains(mouse.pos) {
                        continue;
                    }
                    self.handle_event_at(child, &Event::Mouse(mouse.translated(bbox.origin())))
                }
                Event::Key(_) => self.handle_event_at(child, event),
            };
            if consumed {
                return true;
            }
        }

        self.nodes
            .get_mut(id)
            .and_then(|node| node.widget.as_mut())
            .is_some_and(|widget| widget.handle_event(event))
    }

    /// The root node.
    #[inline]
    pub const fn root(&self) -> ModuleId {
        self.root
    }

    /// Parent of `id`; `None` for the root or an unknown id.
    pub fn parent(&self, id: ModuleId) -> Option<ModuleId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Submodules of `id` in registration order.
    pub fn submodules(&self, id: ModuleId) -> &[ModuleId] {
        self.nodes.get(id).map_or(&[], |node| node.submodules.as_slice())
    }

    /// Shape of `id`'s grid.
    pub fn shape(&self, id: ModuleId) -> Result<Shape> {
        Ok(self.node(id)?.grid.shape())
    }

    /// Box of `id` in its parent's coordinates; `None` for the root.
    pub fn bbox(&self, id: ModuleId) -> Result<Option<Rect>> {
        Ok(self.node(id)?.bbox)
    }

    /// The grid `id` draws into.
    pub fn grid(&self, id: ModuleId) -> Result<&SubGrid> {
        Ok(&self.node(id)?.grid)
    }

    /// Whether `id` names a node of this tree.
    pub fn contains(&self, id: ModuleId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The widget of `id`, if it is a `W`.
    pub fn widget<W: Widget>(&self, id: ModuleId) -> Option<&W> {
        let widget: &dyn Any = self.nodes.get(id)?.widget.as_deref()?;
        widget.downcast_ref()
    }

    /// The widget of `id` mutably, if it is a `W`.
    pub fn widget_mut<W: Widget>(&mut self, id: ModuleId) -> Option<&mut W> {
        let widget: &mut dyn Any = self.nodes.get_mut(id)?.widget.as_deref_mut()?;
        widget.downcast_mut()
    }

    /// Run `f` with `id`'s widget taken out of the tree, so `f` can mutate
    /// other nodes. The widget is put back afterwards.
    ///
    /// While `f` runs, `id` has no widget: events and hooks skip it.
    pub fn with_widget<W: Widget, R>(
        &mut self,
        id: ModuleId,
        f: impl FnOnce(&mut W, &mut Self) -> R,
    ) -> Result<R> {
        let mut widget = self
            .node_mut(id)?
            .widget
            .take()
            .ok_or(Error::UnknownModule)?;

        let any: &mut dyn Any = &mut *widget;
        let result = match any.downcast_mut::<W>() {
            Some(typed) => Ok(f(typed, self)),
            None => Err(Error::WidgetType(type_name::<W>())),
        };

        // f may have removed the node
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget = Some(widget);
        }
        result
    }
}

impl std::fmt::Debug for ModuleTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleTree")
            .field("root", &self.root)
            .field("len", &self.nodes.len())
            .finish()
    }
}
