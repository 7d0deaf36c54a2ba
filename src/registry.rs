// In-memory stand-in for the page: controls keyed by id, elements indexed by
// marker. Used to drive the toggle off the browser.

use crate::error::ToggleError;
use crate::toggle::{CodeView, Display};
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Inline display; `None` until something sets it.
    pub display: Option<Display>,
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    controls: FnvHashMap<String, String>,
    by_marker: FnvHashMap<String, Vec<Element>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(id: &str, label: &str) -> Self {
        let mut reg = Self::new();
        reg.add_control(id, label);
        reg
    }

    pub fn add_control(&mut self, id: &str, label: &str) {
        self.controls.insert(id.to_string(), label.to_string());
    }

    pub fn insert(&mut self, marker: &str, name: &str) {
        self.by_marker
            .entry(marker.to_string())
            .or_default()
            .push(Element {
                name: name.to_string(),
                display: None,
            });
    }

    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.controls.get(id).map(String::as_str)
    }

    pub fn display_of(&self, marker: &str, name: &str) -> Option<Display> {
        self.by_marker
            .get(marker)?
            .iter()
            .find(|el| el.name == name)
            .and_then(|el| el.display)
    }

    pub fn displays(&self, marker: &str) -> Vec<Option<Display>> {
        self.by_marker
            .get(marker)
            .map(|els| els.iter().map(|el| el.display).collect())
            .unwrap_or_default()
    }

    pub fn len(&self, marker: &str) -> usize {
        self.by_marker.get(marker).map_or(0, Vec::len)
    }
}

impl CodeView for Registry {
    fn label(&self, control_id: &str) -> Result<String, ToggleError> {
        self.controls
            .get(control_id)
            .cloned()
            .ok_or_else(|| ToggleError::ControlNotFound(control_id.to_string()))
    }

    fn set_label(&mut self, control_id: &str, label: &str) -> Result<(), ToggleError> {
        match self.controls.get_mut(control_id) {
            Some(slot) => {
                *slot = label.to_string();
                Ok(())
            }
            None => Err(ToggleError::ControlNotFound(control_id.to_string())),
        }
    }

    fn set_display_all(&mut self, marker: &str, display: Display) -> Result<usize, ToggleError> {
        let Some(els) = self.by_marker.get_mut(marker) else {
            return Ok(0);
        };
        for el in els.iter_mut() {
            el.display = Some(display);
        }
        Ok(els.len())
    }
}
