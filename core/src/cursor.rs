//! # FlowCursor: Branching Flow Builder
//!
//! A `FlowCursor` is a position inside a shared [`GraphStore`]: the node the
//! next append will hang off, plus an optional edge label staged for that
//! append.
//!
//! ## Checkout
//!
//! `set_pending_edge` (and its `wait` shorthand) opens a [`Checkout`]. The
//! checkout hands out a branch cursor that starts where the caller stands,
//! with the staged label. Appends on the branch grow the shared store; the
//! caller does not move. When the checkout is dropped the caller is put back
//! on the node it stood on before the checkout and its staged label is
//! cleared, so the next checkout fans out from the same node.
//!
//! ```rust
//! use dendrite_core::Flow;
//!
//! let mut flow = Flow::new("fan-out");
//! flow.node();
//! {
//!     let mut a = flow.wait(15);
//!     a.node();
//! }
//! {
//!     let mut b = flow.wait(100);
//!     b.node();
//! }
//! let schematic = flow.snapshot();
//! assert_eq!(schematic.edges_from(0).count(), 2);
//! assert_eq!(flow.current(), Some(0));
//! ```
//!
//! A branch cursor taken out with [`Checkout::into_branch`] keeps growing the
//! store from its own position after the caller was restored. Nothing stops
//! it (or the restored caller) from attaching nodes to a parent the author
//! did not intend; keeping track of which cursor is live is up to the caller.

use crate::error::GraphResult;
use crate::schematic::{NodeId, Schematic};
use crate::store::{GraphStore, SharedStore};
use crate::transition::{Transition, Wait};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Cursor over string-labelled nodes and [`Transition`] edges.
pub type Flow = FlowCursor<String, Transition>;

/// Builder handle over a shared [`GraphStore`].
pub struct FlowCursor<N, E> {
    store: SharedStore<N, E>,
    current: Option<NodeId>,
    pending_edge: Option<E>,
}

impl<N, E> Default for FlowCursor<N, E> {
    fn default() -> Self {
        Self::with_store(GraphStore::default().into_shared())
    }
}

impl<N, E> FlowCursor<N, E> {
    /// Root cursor over a new, empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_store(GraphStore::new(name).into_shared())
    }

    /// Root cursor over an existing store. The first append starts a new,
    /// unconnected chain.
    pub fn with_store(store: SharedStore<N, E>) -> Self {
        Self {
            store,
            current: None,
            pending_edge: None,
        }
    }

    /// Cursor standing on node `at` of an existing store.
    pub fn resume(store: SharedStore<N, E>, at: NodeId) -> GraphResult<Self> {
        store.borrow().check(at)?;
        Ok(Self {
            store,
            current: Some(at),
            pending_edge: None,
        })
    }

    /// Handle to the shared store.
    pub fn store(&self) -> SharedStore<N, E> {
        Rc::clone(&self.store)
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn pending_edge(&self) -> Option<&E> {
        self.pending_edge.as_ref()
    }

    /// Append a node after the current one and move onto it.
    ///
    /// The edge from the current node carries whatever label is staged
    /// (possibly none). The staged label is consumed either way.
    pub fn append_node(&mut self, payload: N) -> NodeId {
        let mut store = self.store.borrow_mut();
        let id = store.add_node(payload);
        let edge = self.pending_edge.take();
        if let Some(from) = self.current {
            store.add_edge(from, id, edge);
        }
        self.current = Some(id);
        id
    }

    /// Stage an edge label for the next append on this cursor, without
    /// opening a checkout.
    pub fn stage_edge(&mut self, payload: E) -> &mut Self {
        self.pending_edge = Some(payload);
        self
    }
}

impl<N, E: Clone> FlowCursor<N, E> {
    /// Stage `payload` and open a checkout from the current node.
    pub fn set_pending_edge(&mut self, payload: E) -> Checkout<'_, N, E> {
        self.pending_edge = Some(payload);
        let checkpoint = self.current;
        let branch = self.branch();
        tracing::debug!(checkpoint = ?checkpoint, "checkout opened");
        Checkout {
            origin: self,
            checkpoint,
            branch,
        }
    }

    /// Run `body` on a checkout cursor; the caller is restored afterwards,
    /// also when `body` panics.
    pub fn checkout<R>(
        &mut self,
        payload: E,
        body: impl FnOnce(&mut FlowCursor<N, E>) -> R,
    ) -> R {
        let mut scope = self.set_pending_edge(payload);
        body(&mut scope)
    }

    /// New cursor on the same store, at the same position, with the same
    /// staged label.
    pub fn branch(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            current: self.current,
            pending_edge: self.pending_edge.clone(),
        }
    }
}

impl<N, E: From<Wait> + Clone> FlowCursor<N, E> {
    /// Shorthand for `set_pending_edge(Wait(duration).into())`.
    pub fn wait(&mut self, duration: u64) -> Checkout<'_, N, E> {
        self.set_pending_edge(Wait(duration).into())
    }

    /// Shorthand for `stage_edge(Wait(duration).into())`.
    pub fn stage_wait(&mut self, duration: u64) -> &mut Self {
        self.stage_edge(Wait(duration).into())
    }
}

impl<N: From<&'static str>, E> FlowCursor<N, E> {
    /// Append a plain `"node"` step.
    pub fn node(&mut self) -> NodeId {
        self.append_node(N::from("node"))
    }
}

impl<N: Clone, E: Clone> FlowCursor<N, E> {
    pub fn snapshot(&self) -> Schematic<N, E> {
        self.store.borrow().snapshot()
    }
}

impl<N, E: fmt::Debug> fmt::Debug for FlowCursor<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowCursor")
            .field("store", &self.store.borrow().id())
            .field("current", &self.current)
            .field("pending_edge", &self.pending_edge)
            .finish()
    }
}

/// Scope opened by [`FlowCursor::set_pending_edge`].
///
/// Dereferences to the branch cursor. Dropping it (end of scope, `?`,
/// unwinding) restores the originating cursor.
#[must_use = "dropping a checkout immediately restores the cursor; use `stage_edge` to label the next append"]
pub struct Checkout<'a, N, E> {
    origin: &'a mut FlowCursor<N, E>,
    checkpoint: Option<NodeId>,
    branch: FlowCursor<N, E>,
}

impl<N, E> Checkout<'_, N, E> {
    /// Node the originating cursor returns to.
    pub fn checkpoint(&self) -> Option<NodeId> {
        self.checkpoint
    }

    /// Close the checkout and keep the branch cursor.
    pub fn into_branch(mut self) -> FlowCursor<N, E> {
        let detached = FlowCursor::with_store(self.branch.store());
        let branch = std::mem::replace(&mut self.branch, detached);
        tracing::debug!(at = ?branch.current, "branch cursor left its checkout");
        branch
    }
}

impl<N, E> Deref for Checkout<'_, N, E> {
    type Target = FlowCursor<N, E>;

    fn deref(&self) -> &Self::Target {
        &self.branch
    }
}

impl<N, E> DerefMut for Checkout<'_, N, E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.branch
    }
}

impl<N, E> Drop for Checkout<'_, N, E> {
    fn drop(&mut self) {
        self.origin.pending_edge = None;
        self.origin.current = self.checkpoint;
        tracing::debug!(checkpoint = ?self.checkpoint, "checkout restored");
    }
}
