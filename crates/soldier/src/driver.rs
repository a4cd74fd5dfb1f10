//! Per-frame driver for a soldier's behavior tree.

use std::time::Duration;

use behavior_tree::{BoxedNode, NodeState};

use crate::AgentContext;

/// Owns a tree's root and ticks it once per frame.
///
/// The driver is the root's single owner: dropping it drops the tree,
/// [`Driver::release`] releases it explicitly.
pub struct Driver {
    root: BoxedNode<AgentContext>,
    ticks: u64,
    last: NodeState,
}

impl Driver {
    pub fn new(root: BoxedNode<AgentContext>) -> Self {
        Self {
            root,
            ticks: 0,
            last: NodeState::None,
        }
    }

    /// Ticks the root once with `delta` of elapsed simulated time.
    ///
    /// Stamps `ctx.delta` and `ctx.frame` before the tree sees the context.
    pub fn tick(&mut self, ctx: &mut AgentContext, delta: Duration) -> NodeState {
        ctx.delta = delta;
        ctx.frame = self.ticks;

        let state = self.root.tick(ctx);
        self.ticks += 1;

        if state != self.last {
            tracing::debug!(frame = ctx.frame, %state, "root state changed");
        }
        self.last = state;
        state
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Root state returned by the most recent tick (`None` before the first).
    pub fn last_state(&self) -> NodeState {
        self.last
    }

    /// Releases the whole tree.
    pub fn release(self) {
        tracing::debug!(ticks = self.ticks, "releasing behavior tree");
        self.root.release();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use behavior_tree::{Node, Shape, leaf};

    use super::*;
    use crate::Soldier;

    #[test]
    fn stamps_frame_and_delta() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let record = Arc::clone(&seen);
        let mut driver = Driver::new(leaf("Record", move |ctx: &mut AgentContext| {
            record.lock().unwrap().push((ctx.frame, ctx.delta));
            NodeState::Running
        }));

        let mut ctx = AgentContext::new(Soldier::default());
        let step = Duration::from_millis(50);
        assert_eq!(driver.last_state(), NodeState::None);
        driver.tick(&mut ctx, step);
        driver.tick(&mut ctx, step);

        assert_eq!(driver.ticks(), 2);
        assert_eq!(driver.last_state(), NodeState::Running);
        assert_eq!(*seen.lock().unwrap(), [(0u64, step), (1u64, step)]);
    }

    #[test]
    fn release_reaches_root() {
        struct Root(Arc<AtomicUsize>);
        impl Node<AgentContext> for Root {
            fn tick(&mut self, _ctx: &mut AgentContext) -> NodeState {
                NodeState::Success
            }

            fn release(self: Box<Self>) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }

            fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
                Shape::Leaf(self)
            }
        }

        let released = Arc::new(AtomicUsize::new(0));
        let driver = Driver::new(Box::new(Root(Arc::clone(&released))));
        driver.release();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
