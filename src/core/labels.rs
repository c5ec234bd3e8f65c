use crate::core::controls::{format_fixed, ControlId, ControlSurface, LabelFormat, LabelSlot};

/// Text shown in a control's labels for its current value.
pub fn label_text<C: ControlSurface + ?Sized>(controls: &C, id: ControlId) -> String {
    match id.label_format() {
        LabelFormat::Fixed(digits) => format_fixed(controls.value(id), digits),
        LabelFormat::Raw => controls.raw_value(id),
    }
}

/// Mirror every control into its primary and HUD labels.
pub fn sync_labels<C: ControlSurface + ?Sized>(controls: &mut C) {
    for id in ControlId::ALL {
        let text = label_text(controls, id);
        for slot in LabelSlot::ALL {
            controls.set_label(id, slot, &text);
        }
    }
}
