//! Physical barrel buttons to synthesized click buttons.

use crate::report::ButtonMask;

/// Output slot for the first barrel button (right click).
pub const RIGHT_CLICK: usize = 0;
/// Output slot for the second barrel button (middle click).
pub const MIDDLE_CLICK: usize = 1;

/// Build the click binding for `source` as a `len`-button mask.
///
/// The first barrel button wins over the second; at most one bit is ever set.
/// Buttons missing from either mask read as released.
pub fn click_binding(source: &ButtonMask, len: usize) -> ButtonMask {
    let mut mapped = ButtonMask::empty(len);
    if source.get(0) {
        mapped.set(RIGHT_CLICK, true);
    } else if source.get(1) {
        mapped.set(MIDDLE_CLICK, true);
    }
    mapped
}
