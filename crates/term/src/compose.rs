//! Frame composition: color buffer to text grid.

/// Append the grid for `glyphs` to `out`.
///
/// Every `width`-th cell, starting with the first, begins a new line, and a
/// final `line_break` follows the last row.
pub fn compose_into(glyphs: &[u8], width: usize, line_break: &str, out: &mut String) {
    if width == 0 {
        return;
    }
    out.reserve(glyphs.len() + (glyphs.len() / width + 1) * line_break.len());
    for row in glyphs.chunks(width) {
        out.push_str(line_break);
        out.extend(row.iter().map(|&c| c as char));
    }
    out.push_str(line_break);
}

/// Compose a grid with `\n` line breaks.
pub fn compose(glyphs: &[u8], width: usize) -> String {
    let mut out = String::new();
    compose_into(glyphs, width, "\n", &mut out);
    out
}
