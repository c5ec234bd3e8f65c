use crate::core::{ControlId, ControlSurface, LabelSlot};
use crate::dom;
use std::collections::HashMap;
use web_sys as web;

/// [`ControlSurface`] over the page's range inputs and label elements.
///
/// Element handles are resolved once at startup; clones share the same DOM
/// nodes.
#[derive(Clone)]
pub struct DomControls {
    inputs: HashMap<ControlId, web::HtmlInputElement>,
    labels: HashMap<(ControlId, LabelSlot), web::Element>,
}

impl DomControls {
    /// Resolve every control and label; fails on the first missing id.
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let mut inputs = HashMap::with_capacity(ControlId::ALL.len());
        let mut labels = HashMap::with_capacity(ControlId::ALL.len() * LabelSlot::ALL.len());
        for id in ControlId::ALL {
            inputs.insert(id, dom::element_by_id(document, id.input_id())?);
            for slot in LabelSlot::ALL {
                labels.insert((id, slot), dom::element_by_id(document, id.label_id(slot))?);
            }
        }
        Ok(Self { inputs, labels })
    }

    /// Every bound input with the control it feeds.
    pub fn inputs(&self) -> impl Iterator<Item = (ControlId, &web::HtmlInputElement)> + '_ {
        self.inputs.iter().map(|(id, el)| (*id, el))
    }
}

impl ControlSurface for DomControls {
    fn raw_value(&self, id: ControlId) -> String {
        self.inputs.get(&id).map(|el| el.value()).unwrap_or_default()
    }

    fn set_raw_value(&mut self, id: ControlId, text: &str) {
        if let Some(el) = self.inputs.get(&id) {
            el.set_value(text);
        }
    }

    fn set_label(&mut self, id: ControlId, slot: LabelSlot, text: &str) {
        if let Some(el) = self.labels.get(&(id, slot)) {
            el.set_text_content(Some(text));
        }
    }
}
