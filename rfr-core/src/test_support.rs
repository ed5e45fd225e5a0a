use std::cell::RefCell;

use crate::check::DependencyMetadataProvider;

/// Provider with canned answers that records every lookup it receives.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    installed: Option<String>,
    latest: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(installed: Option<&str>, latest: Option<&str>) -> Self {
        Self {
            installed: installed.map(str::to_string),
            latest: latest.map(str::to_string),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl DependencyMetadataProvider for RecordingProvider {
    fn resolve_installed(&self, name: &str) -> Option<String> {
        self.calls.borrow_mut().push(format!("installed:{name}"));
        self.installed.clone()
    }

    fn resolve_latest(&self, name: &str) -> Option<String> {
        self.calls.borrow_mut().push(format!("latest:{name}"));
        self.latest.clone()
    }
}
