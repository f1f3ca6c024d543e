// Subject broadcasting state changes to attached observers.

use std::sync::{Arc, Mutex};

pub trait Observer {
    fn update(&mut self, state: &str);
}

/// Holds a piece of state and a list of observers; every state change is
/// pushed to all of them in attach order.
pub struct Subject {
    state: String,
    observers: Vec<Arc<Mutex<dyn Observer + Send>>>,
}

impl Subject {
    pub fn new() -> Self {
        Self {
            state: String::new(),
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: Arc<Mutex<dyn Observer + Send>>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.lock().unwrap().update(&self.state);
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

/// Recording observer: keeps every state it was notified of, in order.
#[derive(Debug, Default)]
pub struct EventLog {
    states: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }
}

impl Observer for EventLog {
    fn update(&mut self, state: &str) {
        self.states.push(state.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_observer_sees_every_change() {
        let mut subject = Subject::new();
        let first = Arc::new(Mutex::new(EventLog::new()));
        let second = Arc::new(Mutex::new(EventLog::new()));
        subject.attach(first.clone());
        subject.attach(second.clone());

        subject.set_state("started");
        subject.set_state("finished");

        assert_eq!(first.lock().unwrap().states(), ["started", "finished"]);
        assert_eq!(second.lock().unwrap().states(), ["started", "finished"]);
    }

    #[test]
    fn test_late_attach_misses_earlier_changes() {
        let mut subject = Subject::new();
        subject.set_state("early");

        let log = Arc::new(Mutex::new(EventLog::new()));
        subject.attach(log.clone());
        subject.set_state("late");

        assert_eq!(log.lock().unwrap().states(), ["late"]);
    }

    #[test]
    fn test_subject_keeps_latest_state() {
        let mut subject = Subject::new();
        assert_eq!(subject.state(), "");
        subject.set_state("state changed");
        assert_eq!(subject.state(), "state changed");
    }
}
