//! Transition logging for behavior trees.
//!
//! [`LoggingDecorator`] wraps one node and reports each change of its state
//! through a caller-supplied sink. [`TreeLogger`] rebuilds a whole tree so
//! that every node at every depth gets its own decorator, without changing
//! what the tree returns.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use behavior_tree::{AlwaysSuccess, LoggerSettings, Node, NodeState, TreeLogger, sequence};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&lines);
//! let settings = LoggerSettings::new(move |line: &str| sink.lock().unwrap().push(line.to_owned()));
//!
//! let tree = sequence::<()>(vec![Box::new(AlwaysSuccess), Box::new(AlwaysSuccess)]);
//! let mut tree = TreeLogger::new(settings).wrap(tree);
//!
//! assert_eq!(tree.tick(&mut ()), NodeState::Success);
//! assert_eq!(lines.lock().unwrap().len(), 3);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{BoxedNode, Node, NodeState, SettingsError, Shape};

/// Function receiving one formatted log line.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns a sink that forwards log lines to `tracing` at `INFO` level.
///
/// Never installed implicitly; pass it to [`LoggerSettings::new`] to opt in.
pub fn tracing_sink() -> impl Fn(&str) + Send + Sync + 'static {
    |line: &str| tracing::info!(target: "behavior_tree", "{}", line)
}

/// Immutable configuration shared by every decorator of a logged tree.
#[derive(Clone)]
pub struct LoggerSettings {
    prefix: String,
    postfix: String,
    sink: LogSink,
}

impl LoggerSettings {
    /// Settings with empty prefix and postfix.
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            prefix: String::new(),
            postfix: String::new(),
            sink: Arc::new(sink),
        }
    }

    /// Starts a builder; a sink must be supplied before [`LoggerSettingsBuilder::build`].
    pub fn builder() -> LoggerSettingsBuilder {
        LoggerSettingsBuilder::default()
    }

    /// Text placed before every line.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text placed after every line.
    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Formats one transition line: `{prefix}{name}#{id} {state}{postfix}`.
    pub fn format(&self, name: &str, id: u64, state: NodeState) -> String {
        format!("{}{}#{} {}{}", self.prefix, name, id, state, self.postfix)
    }

    /// Hands a line to the sink.
    pub fn emit(&self, line: &str) {
        (self.sink)(line)
    }
}

impl fmt::Debug for LoggerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerSettings")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .finish_non_exhaustive()
    }
}

/// Builder for [`LoggerSettings`]; the sink is mandatory.
#[derive(Default)]
pub struct LoggerSettingsBuilder {
    prefix: Option<String>,
    postfix: Option<String>,
    sink: Option<LogSink>,
}

impl LoggerSettingsBuilder {
    /// Text prepended to every line.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Text appended to every line.
    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    /// Destination for formatted lines. Required.
    pub fn sink(mut self, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Finishes the settings.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingSink`] if no sink was supplied.
    pub fn build(self) -> Result<LoggerSettings, SettingsError> {
        let sink = self.sink.ok_or(SettingsError::MissingSink)?;
        Ok(LoggerSettings {
            prefix: self.prefix.unwrap_or_default(),
            postfix: self.postfix.unwrap_or_default(),
            sink,
        })
    }
}

static NEXT_DECORATOR_ID: AtomicU64 = AtomicU64::new(1);

/// Logs the state of one wrapped node whenever it changes.
///
/// Repeated identical results are collapsed: a node that returns `Running`
/// three ticks in a row produces one line. The initial remembered state is
/// `None`, so the first tick logs unless the node itself returns `None`.
///
/// Each decorator carries an id taken from a process-wide counter; it
/// appears in every line so lines from the same node can be correlated.
pub struct LoggingDecorator<C> {
    inner: BoxedNode<C>,
    previous: NodeState,
    id: u64,
    settings: Arc<LoggerSettings>,
}

impl<C> LoggingDecorator<C> {
    /// Wraps `inner` under a fresh id; nothing is logged until the first tick.
    pub fn new(inner: BoxedNode<C>, settings: Arc<LoggerSettings>) -> Self {
        Self {
            inner,
            previous: NodeState::None,
            id: NEXT_DECORATOR_ID.fetch_add(1, Ordering::Relaxed),
            settings,
        }
    }

    /// Identity token printed in this decorator's lines.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Last state observed from the wrapped node.
    pub fn last_state(&self) -> NodeState {
        self.previous
    }
}

impl<C: 'static> Node<C> for LoggingDecorator<C> {
    fn tick(&mut self, ctx: &mut C) -> NodeState {
        let state = self.inner.tick(ctx);
        if state != self.previous {
            let line = self.settings.format(self.inner.name(), self.id, state);
            self.settings.emit(&line);
            self.previous = state;
        }
        state
    }

    fn release(self: Box<Self>) {
        self.inner.release();
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Leaf(self)
    }
}

/// Instruments every node of a tree with its own [`LoggingDecorator`].
///
/// The rebuilt tree is structurally identical to the input. Wrapping goes
/// bottom-up: children first, then a fresh composite over the wrapped
/// children, then that composite's own decorator. Within one tick a
/// parent's line therefore follows its children's lines.
///
/// Descent follows [`Node::into_shape`]: composites and decorators are
/// taken apart and rebuilt, leaves are wrapped as they are. An existing
/// `LoggingDecorator` reports itself as a leaf, so a logged tree gains one
/// outer layer per node when wrapped again.
#[derive(Debug, Clone)]
pub struct TreeLogger {
    settings: Arc<LoggerSettings>,
}

impl TreeLogger {
    /// Logger whose decorators all share `settings`.
    pub fn new(settings: LoggerSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Settings handed to every decorator this logger creates.
    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    /// Consumes `root` and returns the instrumented equivalent.
    pub fn wrap<C: 'static>(&self, root: BoxedNode<C>) -> BoxedNode<C> {
        let mut wrapped_nodes = 0;
        let root = self.wrap_node(root, &mut wrapped_nodes);
        tracing::debug!(nodes = wrapped_nodes, "instrumented behavior tree");
        root
    }

    fn wrap_node<C: 'static>(&self, node: BoxedNode<C>, count: &mut usize) -> BoxedNode<C> {
        let rebuilt = match node.into_shape() {
            Shape::Leaf(leaf) => leaf,
            Shape::Decorator { child, rebuild } => rebuild(self.wrap_node(child, count)),
            Shape::Composite { children, rebuild } => {
                let children = children
                    .into_iter()
                    .map(|child| self.wrap_node(child, count))
                    .collect();
                rebuild(children)
            }
        };

        *count += 1;
        Box::new(LoggingDecorator::new(rebuilt, Arc::clone(&self.settings)))
    }
}
