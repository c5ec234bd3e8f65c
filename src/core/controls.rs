// Registry of the numeric page controls and the interface used to read and
// write them. Nothing here touches the DOM; `ui::DomControls` implements the
// trait over real elements and the tests implement it over a map.

/// One editable numeric input on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlId {
    Qx,
    Qy,
    Qz,
    Qw,
    Cx,
    Cy,
    Cz,
    Fov,
    Near,
    Far,
}

/// Which of a control's two text labels is being written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelSlot {
    /// The value readout next to the slider.
    Primary,
    /// The overlay readout on top of the canvas.
    Hud,
}

impl LabelSlot {
    pub const ALL: [LabelSlot; 2] = [LabelSlot::Primary, LabelSlot::Hud];
}

/// How a control's value is rendered into its labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelFormat {
    /// Parsed and printed with a fixed number of fraction digits.
    Fixed(usize),
    /// The control's text, unchanged.
    Raw,
}

impl ControlId {
    pub const ALL: [ControlId; 10] = [
        ControlId::Qx,
        ControlId::Qy,
        ControlId::Qz,
        ControlId::Qw,
        ControlId::Cx,
        ControlId::Cy,
        ControlId::Cz,
        ControlId::Fov,
        ControlId::Near,
        ControlId::Far,
    ];

    /// Quaternion components in x, y, z, w order.
    pub const QUATERNION: [ControlId; 4] =
        [ControlId::Qx, ControlId::Qy, ControlId::Qz, ControlId::Qw];

    /// Camera position components in x, y, z order.
    pub const POSITION: [ControlId; 3] = [ControlId::Cx, ControlId::Cy, ControlId::Cz];

    /// DOM id of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            ControlId::Qx => "qx",
            ControlId::Qy => "qy",
            ControlId::Qz => "qz",
            ControlId::Qw => "qw",
            ControlId::Cx => "cx",
            ControlId::Cy => "cy",
            ControlId::Cz => "cz",
            ControlId::Fov => "fov-range",
            ControlId::Near => "near-range",
            ControlId::Far => "far-range",
        }
    }

    /// DOM id of the label element in the given slot.
    pub fn label_id(self, slot: LabelSlot) -> &'static str {
        match (self, slot) {
            (ControlId::Qx, LabelSlot::Primary) => "qx-val",
            (ControlId::Qy, LabelSlot::Primary) => "qy-val",
            (ControlId::Qz, LabelSlot::Primary) => "qz-val",
            (ControlId::Qw, LabelSlot::Primary) => "qw-val",
            (ControlId::Cx, LabelSlot::Primary) => "cx-val",
            (ControlId::Cy, LabelSlot::Primary) => "cy-val",
            (ControlId::Cz, LabelSlot::Primary) => "cz-val",
            (ControlId::Fov, LabelSlot::Primary) => "fov-val",
            (ControlId::Near, LabelSlot::Primary) => "near-val",
            (ControlId::Far, LabelSlot::Primary) => "far-val",
            (ControlId::Qx, LabelSlot::Hud) => "q-x",
            (ControlId::Qy, LabelSlot::Hud) => "q-y",
            (ControlId::Qz, LabelSlot::Hud) => "q-z",
            (ControlId::Qw, LabelSlot::Hud) => "q-w",
            (ControlId::Cx, LabelSlot::Hud) => "c-x",
            (ControlId::Cy, LabelSlot::Hud) => "c-y",
            (ControlId::Cz, LabelSlot::Hud) => "c-z",
            (ControlId::Fov, LabelSlot::Hud) => "fov",
            (ControlId::Near, LabelSlot::Hud) => "near",
            (ControlId::Far, LabelSlot::Hud) => "far",
        }
    }

    pub fn label_format(self) -> LabelFormat {
        use crate::core::constants::{POSITION_DIGITS, QUATERNION_DIGITS};
        match self {
            ControlId::Qx | ControlId::Qy | ControlId::Qz | ControlId::Qw => {
                LabelFormat::Fixed(QUATERNION_DIGITS)
            }
            ControlId::Cx | ControlId::Cy | ControlId::Cz => LabelFormat::Fixed(POSITION_DIGITS),
            ControlId::Fov | ControlId::Near | ControlId::Far => LabelFormat::Raw,
        }
    }
}

/// Read/write access to the page controls.
///
/// Implementations hold the control text as the source of truth: `value`
/// re-parses it on every call, so a write through `set_value` is visible to
/// the next read.
pub trait ControlSurface {
    /// Current text of the control.
    fn raw_value(&self, id: ControlId) -> String;
    /// Replace the text of the control.
    fn set_raw_value(&mut self, id: ControlId, text: &str);
    /// Replace the text of one of the control's labels.
    fn set_label(&mut self, id: ControlId, slot: LabelSlot, text: &str);

    /// Current value as a number; malformed text reads as NaN.
    fn value(&self, id: ControlId) -> f64 {
        parse_number(&self.raw_value(id))
    }

    /// Write `value` with `digits` fraction digits.
    fn set_value(&mut self, id: ControlId, value: f64, digits: usize) {
        let text = format_fixed(value, digits);
        self.set_raw_value(id, &text);
    }
}

/// Parse control text the way the browser's `Number()` does for decimal
/// input: surrounding whitespace is ignored, empty text is zero and anything
/// malformed is NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf"/"nan" spellings that the browser rejects.
        s if s
            .bytes()
            .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') =>
        {
            f64::NAN
        }
        s => s.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Fixed-point formatting with `toFixed` rounding: ties go away from zero and
/// negative zero prints without a sign.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = (value.abs() * scale).round();
    let magnitude = if scaled.is_finite() {
        scaled / scale
    } else {
        value.abs()
    };
    let text = format!("{:.*}", digits, magnitude);
    if value < 0.0 {
        format!("-{}", text)
    } else {
        text
    }
}
