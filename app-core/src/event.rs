//! Deferred application events and the queue that drains them once per
//! iteration of the GUI event loop.

/// Outcome of applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    /// The event is done and can be dropped.
    Finished,
    /// The event waits on something (e.g. a dialog thread) and must be
    /// applied again in the next iteration.
    Busy,
}

pub trait AppEvent {
    type App;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;

    fn describe(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
pub struct EventQueue<App> {
    /// Stores events for later processing.
    queue: Vec<Box<dyn AppEvent<App = App>>>,
    /// Temporarily stores events that have not yet finished running.
    tmp_backlog: Vec<Box<dyn AppEvent<App = App>>>,
}

impl<App> Default for EventQueue<App> {
    fn default() -> Self {
        Self::new()
    }
}

impl<App> EventQueue<App> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            tmp_backlog: Vec::new(),
        }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = App>>) {
        self.queue.push(event);
    }

    pub fn discard_events(&mut self) {
        self.queue.drain(..);
        self.tmp_backlog.drain(..);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Applies all queued events in the order they were queued and returns
    /// the number of events that finished (successfully or not).
    ///
    /// Busy events are kept and retried on the next call.
    pub fn run(&mut self, app: &mut App) -> usize {
        let mut finished = 0;
        for mut event in self.queue.drain(..) {
            match event.apply(app) {
                Ok(EventState::Finished) => finished += 1,
                Ok(EventState::Busy) => {
                    // Add busy event to the backlog.
                    self.tmp_backlog.push(event);
                }
                Err(err) => {
                    log::error!("event '{}' failed: {}", event.describe(), err);
                    finished += 1;
                }
            }
        }

        // Putting the backlog back in the queue by swapping the
        // vectors.
        std::mem::swap(&mut self.queue, &mut self.tmp_backlog);
        finished
    }
}
