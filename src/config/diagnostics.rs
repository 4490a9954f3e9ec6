use std::fmt;

/// Implementations must not fail.
pub trait Diagnostics {
    fn debug(&self, message: fmt::Arguments);
    fn error(&self, message: fmt::Arguments);
}

pub struct Logger;

impl Diagnostics for Logger {
    fn debug(&self, message: fmt::Arguments) {
        debug!("{}", message);
    }

    fn error(&self, message: fmt::Arguments) {
        error!("{}", message);
    }
}

#[cfg(test)]
pub mod recorder {
    use std::cell::RefCell;
    use std::fmt;

    use log::Level;

    use super::Diagnostics;

    pub struct Recorder {
        entries: RefCell<Vec<(Level, String)>>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self {
                entries: RefCell::new(vec![]),
            }
        }

        pub fn messages(&self, level: Level) -> Vec<String> {
            self.entries
                .borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message.clone())
                .collect()
        }

        fn push(&self, level: Level, message: fmt::Arguments) {
            self.entries
                .borrow_mut()
                .push((level, format!("{}", message)));
        }
    }

    impl Diagnostics for Recorder {
        fn debug(&self, message: fmt::Arguments) {
            self.push(Level::Debug, message);
        }

        fn error(&self, message: fmt::Arguments) {
            self.push(Level::Error, message);
        }
    }
}
