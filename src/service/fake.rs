// in-memory stand-ins for the host, shared through Rc so a test can keep a
// handle after moving a clone into the controller
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::system::{HostEnvironment, PreferenceStore, ProcessControl};
use crate::error::Result;

pub struct FakeHost(pub &'static str);

impl HostEnvironment for FakeHost {
    fn kernel_name(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

#[derive(Clone, Default)]
pub struct FakeStore {
    values: Rc<RefCell<HashMap<(String, String), String>>>,
    pub reads: Rc<RefCell<usize>>,
    pub writes: Rc<RefCell<Vec<String>>>,
}

impl FakeStore {
    pub fn with(domain: &str, key: &str, value: &str) -> Self {
        let store = FakeStore::default();
        store
            .values
            .borrow_mut()
            .insert((domain.to_string(), key.to_string()), value.to_string());
        store
    }

    pub fn value(&self, domain: &str, key: &str) -> Option<String> {
        self.values
            .borrow()
            .get(&(domain.to_string(), key.to_string()))
            .cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn touched(&self) -> bool {
        *self.reads.borrow() > 0 || self.write_count() > 0
    }
}

impl PreferenceStore for FakeStore {
    fn read(&self, domain: &str, key: &str) -> Result<String> {
        *self.reads.borrow_mut() += 1;
        // `defaults read` ends its output with a newline
        Ok(self
            .value(domain, key)
            .map(|v| format!("{}\n", v))
            .unwrap_or_default())
    }

    fn write(&self, domain: &str, key: &str, value: &str) -> Result<()> {
        self.writes.borrow_mut().push(value.to_string());
        self.values
            .borrow_mut()
            .insert((domain.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeShell {
    pub killed: Rc<RefCell<Vec<String>>>,
    pub fail: bool,
}

impl FakeShell {
    pub fn failing() -> Self {
        FakeShell {
            fail: true,
            ..FakeShell::default()
        }
    }

    pub fn kill_count(&self) -> usize {
        self.killed.borrow().len()
    }
}

impl ProcessControl for FakeShell {
    fn kill(&self, name: &str) -> Result<()> {
        self.killed.borrow_mut().push(name.to_string());
        if self.fail {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "pkill").into());
        }
        Ok(())
    }
}
