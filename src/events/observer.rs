//! Observer registration.
//!
//! Observers register directly on the engine and are notified
//! synchronously, in registration order, after each mutation. There is
//! no process-wide bus; dropping the engine drops its observers.
//!
//! Closures work as observers out of the box:
//!
//! ```
//! use tilepress::{Dictionary, GameConfig, GameEngine, GameEvent};
//!
//! let mut game = GameEngine::new(
//!     GameConfig::fixed(3, 3, "PDDODAGIP"),
//!     Dictionary::from_words(["dog"]),
//!     42,
//! );
//!
//! game.subscribe(|event: &GameEvent| println!("{:?}", event));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// A consumer of engine events.
///
/// Implemented automatically for any `FnMut(&GameEvent)`.
pub trait GameObserver {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// A recording observer for tests and simple consumers.
///
/// `EventLog` is a cheap handle: clones share the same underlying
/// buffer, so one clone can be subscribed while another inspects what
/// arrived. Single-threaded, like the engine itself.
///
/// ## Usage
///
/// ```
/// use tilepress::{Dictionary, EventLog, GameConfig, GameEngine};
///
/// let mut game = GameEngine::new(
///     GameConfig::fixed(3, 3, "PDDODAGIP"),
///     Dictionary::from_words(["dog"]),
///     42,
/// );
///
/// let log = EventLog::new();
/// game.subscribe(log.clone());
///
/// game.toggle_letter(0, 1).unwrap();
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Drain the log, returning what was recorded.
    pub fn take(&self) -> Vec<GameEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Discard everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
