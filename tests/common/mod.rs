// In-memory control surface for host tests. Expects the including test crate
// to mount the core modules at `crate::core`.

#![allow(dead_code)]

use crate::core::controls::{ControlId, ControlSurface, LabelSlot};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct FakeControls {
    pub values: HashMap<ControlId, String>,
    pub labels: HashMap<(ControlId, LabelSlot), String>,
}

impl FakeControls {
    /// The page as first loaded.
    pub fn page_defaults() -> Self {
        Self::with(&[
            (ControlId::Qx, "0"),
            (ControlId::Qy, "0"),
            (ControlId::Qz, "0"),
            (ControlId::Qw, "1"),
            (ControlId::Cx, "3"),
            (ControlId::Cy, "2.5"),
            (ControlId::Cz, "4"),
            (ControlId::Fov, "50"),
            (ControlId::Near, "0.1"),
            (ControlId::Far, "100"),
        ])
    }

    pub fn with(entries: &[(ControlId, &str)]) -> Self {
        let mut controls = Self::default();
        for (id, text) in entries {
            controls.values.insert(*id, text.to_string());
        }
        controls
    }

    pub fn set(&mut self, id: ControlId, text: &str) -> &mut Self {
        self.values.insert(id, text.to_string());
        self
    }

    pub fn raw(&self, id: ControlId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn label(&self, id: ControlId, slot: LabelSlot) -> Option<&str> {
        self.labels.get(&(id, slot)).map(String::as_str)
    }
}

impl ControlSurface for FakeControls {
    fn raw_value(&self, id: ControlId) -> String {
        self.raw(id).to_string()
    }

    fn set_raw_value(&mut self, id: ControlId, text: &str) {
        self.values.insert(id, text.to_string());
    }

    fn set_label(&mut self, id: ControlId, slot: LabelSlot, text: &str) {
        self.labels.insert((id, slot), text.to_string());
    }
}

pub fn assert_vec3_near(actual: glam::Vec3, expected: glam::Vec3, tolerance: f32) {
    assert!(
        actual.distance(expected) <= tolerance,
        "expected {:?} within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}
