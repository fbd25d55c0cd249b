//! Event renderers injected into games.
use std::cell::RefCell;
use std::rc::Rc;

/// Receives every event a game emits, in order.
pub trait GameRenderer<Event> {
    fn render(&mut self, event: &Event);
}

/// Renderer that records events; clones share the same log.
#[derive(Debug)]
pub struct EventLog<Event> {
    events: Rc<RefCell<Vec<Event>>>,
}

impl<Event: Clone> EventLog<Event> {
    pub fn new() -> Self {
        Self { events: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<Event> Clone for EventLog<Event> {
    fn clone(&self) -> Self {
        Self { events: Rc::clone(&self.events) }
    }
}

impl<Event: Clone> Default for EventLog<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone> GameRenderer<Event> for EventLog<Event> {
    fn render(&mut self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Fans one event out to several renderers.
pub struct Fanout<Event> {
    renderers: Vec<Box<dyn GameRenderer<Event>>>,
}

impl<Event> Fanout<Event> {
    pub fn new(renderers: Vec<Box<dyn GameRenderer<Event>>>) -> Self {
        Self { renderers }
    }
}

impl<Event> GameRenderer<Event> for Fanout<Event> {
    fn render(&mut self, event: &Event) {
        for renderer in &mut self.renderers {
            renderer.render(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_shares_between_clones() {
        let log = EventLog::<u32>::new();
        let mut handle = log.clone();
        handle.render(&1);
        handle.render(&2);
        assert_eq!(log.events(), vec![1, 2]);

        log.clear();
        assert!(handle.events().is_empty());
    }

    #[test]
    fn test_fanout_reaches_every_renderer() {
        let first = EventLog::<&'static str>::new();
        let second = EventLog::<&'static str>::new();
        let renderers: Vec<Box<dyn GameRenderer<&'static str>>> =
            vec![Box::new(first.clone()), Box::new(second.clone())];
        let mut fanout = Fanout::new(renderers);

        fanout.render(&"boo");
        assert_eq!(first.events(), vec!["boo"]);
        assert_eq!(second.events(), vec!["boo"]);
    }
}
