use crate::core::constants::{NORMALIZE_MAX_ROUNDS, QUATERNION_DIGITS};
use crate::core::controls::{format_fixed, parse_number, ControlId, ControlSurface};
use crate::core::labels::sync_labels;
use glam::{DVec4, Mat4, Quat};

/// The rendered cube. Its rotation is the only state it carries.
#[derive(Clone, Debug)]
pub struct Subject {
    rotation: Quat,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }
}

impl Subject {
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Replace the rotation; `q` must already be unit length.
    pub fn set_rotation_from_quaternion(&mut self, q: Quat) {
        self.rotation = q;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation)
    }
}

/// Read the four quaternion controls as `[x, y, z, w]`.
pub fn read_quaternion<C: ControlSurface + ?Sized>(controls: &C) -> [f64; 4] {
    ControlId::QUATERNION.map(|id| controls.value(id))
}

/// Scale `[x, y, z, w]` to unit length.
///
/// A zero quaternion has no direction and resolves to the identity. Returns
/// `None` when any component is not finite.
pub fn normalize_components(components: [f64; 4]) -> Option<[f64; 4]> {
    let v = DVec4::from_array(components);
    if !v.is_finite() {
        return None;
    }
    // Scale into [-1, 1] first so huge components do not overflow the length.
    let scaled = v / v.abs().max_element();
    Some(scaled.try_normalize().unwrap_or(DVec4::W).to_array())
}

/// Quaternion control text: `components` normalized and printed with
/// [`QUATERNION_DIGITS`] fraction digits.
pub type QuaternionText = [String; 4];

fn unit_text(components: [f64; 4]) -> Option<QuaternionText> {
    normalize_components(components).map(|unit| unit.map(|c| format_fixed(c, QUATERNION_DIGITS)))
}

fn parse_text(text: &QuaternionText) -> [f64; 4] {
    std::array::from_fn(|i| parse_number(&text[i]))
}

fn unit_deviation(text: &QuaternionText) -> f64 {
    let squared: f64 = parse_text(text).iter().map(|c| c * c).sum();
    (squared - 1.0).abs()
}

/// Normalize and round `components`, then keep re-normalizing the rounded
/// text until it reproduces itself.
///
/// Rounding leaves the norm slightly off one, so a single pass can land on
/// text that rounds differently when normalized again. When the rounds settle
/// into a cycle instead, the member closest to unit length wins (ties go to
/// the smallest text), which every member of that cycle also settles on.
pub fn settle_unit_text(components: [f64; 4]) -> Option<QuaternionText> {
    let mut seen: Vec<QuaternionText> = Vec::new();
    let mut text = unit_text(components)?;
    for _ in 0..NORMALIZE_MAX_ROUNDS {
        if let Some(start) = seen.iter().position(|t| *t == text) {
            return seen[start..]
                .iter()
                .min_by(|a, b| {
                    unit_deviation(a)
                        .total_cmp(&unit_deviation(b))
                        .then_with(|| a.cmp(b))
                })
                .cloned();
        }
        let next = unit_text(parse_text(&text))?;
        seen.push(text);
        text = next;
    }
    log::warn!("[normalize] no fixed point after {} rounds", NORMALIZE_MAX_ROUNDS);
    Some(text)
}

/// Apply the quaternion controls to the subject.
///
/// Returns `false` (and leaves the previous rotation in place) when the
/// controls hold a non-finite component.
pub fn update_orientation<C: ControlSurface + ?Sized>(controls: &C, subject: &mut Subject) -> bool {
    let raw = read_quaternion(controls);
    match normalize_components(raw) {
        Some([x, y, z, w]) => {
            let q = Quat::from_xyzw(x as f32, y as f32, z as f32, w as f32);
            subject.set_rotation_from_quaternion(q);
            log::debug!("[orientation] q=({:.3},{:.3},{:.3},{:.3})", x, y, z, w);
            true
        }
        None => {
            log::warn!("[orientation] ignoring non-finite quaternion {:?}", raw);
            false
        }
    }
}

/// The "normalize" button: rewrite the quaternion controls in unit form,
/// then refresh labels and the subject from the rewritten text. Pressing it
/// again leaves the controls unchanged.
pub fn normalize_quaternion_controls<C: ControlSurface + ?Sized>(
    controls: &mut C,
    subject: &mut Subject,
) {
    let raw = read_quaternion(controls);
    let Some(text) = settle_unit_text(raw) else {
        log::warn!("[normalize] cannot normalize {:?}", raw);
        return;
    };
    for (id, component) in ControlId::QUATERNION.into_iter().zip(&text) {
        controls.set_raw_value(id, component);
    }
    sync_labels(controls);
    update_orientation(controls, subject);
}
