//! Inline CSS declaration building.

use pf_core::model::{Shape, ShapeKind, Typography};

/// Convert a `#RRGGBB` hex color into an `rgba(r, g, b, opacity)`
/// string.
///
/// Anything that is not exactly six hex digits (after an optional `#`)
/// yields `NaN` components in the output — e.g.
/// `rgba(NaN, NaN, NaN, 0.5)`. This mirrors the long-standing export
/// behavior and is accepted as-is rather than silently corrected;
/// short (`#RGB`) and alpha (`#RRGGBBAA`) forms are not supported.
pub fn hex_to_rgba(hex: &str, opacity: f32) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let (r, g, b) = if digits.len() == 6 {
        (
            channel(digits, 0),
            channel(digits, 2),
            channel(digits, 4),
        )
    } else {
        (f32::NAN, f32::NAN, f32::NAN)
    };
    format!("rgba({r}, {g}, {b}, {opacity})")
}

fn channel(digits: &str, start: usize) -> f32 {
    digits
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .map(f32::from)
        .unwrap_or(f32::NAN)
}

/// Build the single inline `style` declaration for a shape.
///
/// Always present: background-color (through [`hex_to_rgba`] with the
/// shape's opacity), border, border-radius (forced `50%` for circles),
/// z-index. Conditional: box-shadow only when enabled, and each
/// typography property only when it differs from the default
/// (text-decoration and text-transform only when not `none`).
pub fn inline_style(shape: &Shape) -> String {
    let st = &shape.style;
    let mut parts: Vec<String> = Vec::with_capacity(8);

    parts.push(format!(
        "background-color: {}",
        hex_to_rgba(&st.background_color, st.opacity)
    ));
    parts.push(format!(
        "border: {}px {} {}",
        st.border_width, st.border_style, st.border_color
    ));
    match shape.kind {
        ShapeKind::Circle => parts.push("border-radius: 50%".into()),
        ShapeKind::Rectangle => parts.push(format!("border-radius: {}px", st.corner_radius)),
    }
    parts.push(format!("z-index: {}", shape.z_index));

    if st.box_shadow.enabled {
        let sh = &st.box_shadow;
        parts.push(format!(
            "box-shadow: {}px {}px {}px {}px {}",
            sh.offset_x, sh.offset_y, sh.blur, sh.spread, sh.color
        ));
    }

    let ty = &st.typography;
    let defaults = Typography::default();
    if ty.font_family != defaults.font_family {
        parts.push(format!("font-family: {}", ty.font_family));
    }
    if ty.font_size != defaults.font_size {
        parts.push(format!("font-size: {}px", ty.font_size));
    }
    if ty.font_weight != defaults.font_weight {
        parts.push(format!("font-weight: {}", ty.font_weight));
    }
    if ty.color != defaults.color {
        parts.push(format!("color: {}", ty.color));
    }
    if ty.text_align != defaults.text_align {
        parts.push(format!("text-align: {}", ty.text_align));
    }
    if ty.line_height != defaults.line_height {
        parts.push(format!("line-height: {}", ty.line_height));
    }
    if ty.letter_spacing != defaults.letter_spacing {
        parts.push(format!("letter-spacing: {}px", ty.letter_spacing));
    }
    if ty.text_decoration != "none" {
        parts.push(format!("text-decoration: {}", ty.text_decoration));
    }
    if ty.text_transform != "none" {
        parts.push(format!("text-transform: {}", ty.text_transform));
    }

    parts.join("; ")
}
