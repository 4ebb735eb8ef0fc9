use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;

/// A value tagged with the start that installed it.
///
/// Every `replace` or `clear` bumps the generation, so a deferred clear
/// issued for one run cannot remove the value installed by a later one.
#[derive(Debug)]
struct Slot<T> {
    current: Option<T>,
    generation: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<T> Slot<T> {
    fn replace(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.current = Some(value);
        self.generation
    }

    fn clear(&mut self) -> Option<T> {
        self.generation += 1;
        self.current.take()
    }

    fn clear_if(&mut self, generation: u64) -> Option<T> {
        if self.generation == generation {
            self.current.take()
        } else {
            None
        }
    }
}

/// Owns the repeating timer behind a progress source.
///
/// At most one interval is alive per `Ticker`; starting again replaces the
/// previous one. Dropping the interval cancels it, so the component owning the
/// ticker cancels it on unmount through `on_cleanup`.
#[derive(Clone, Default)]
pub struct Ticker {
    slot: Rc<RefCell<Slot<Interval>>>,
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<F>(&self, period_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        let interval = Interval::new(period_ms, on_tick);
        let previous = {
            let mut slot = self.slot.borrow_mut();
            let previous = slot.current.take();
            slot.replace(interval);
            previous
        };
        drop(previous);
    }

    pub fn stop(&self) {
        let interval = self.slot.borrow_mut().clear();
        drop(interval);
    }

    /// Stop from inside the tick callback.
    ///
    /// The interval cannot be dropped while its own closure is running, so
    /// the drop happens on the next turn of the event loop. A restart in
    /// between keeps its new interval.
    pub fn stop_deferred(&self) {
        let slot = Rc::clone(&self.slot);
        let generation = self.slot.borrow().generation;
        let _ = Timeout::new(0, move || {
            let interval = slot.borrow_mut().clear_if(generation);
            drop(interval);
        })
        .forget();
    }
}
