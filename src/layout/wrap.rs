use crate::metrics::GlyphMetrics;
use crate::units::Mm;

/// Splits text into the lines it occupies in a cell `max_width` wide, greedily breaking at
/// the last space, tab or newline that keeps a line inside the cell. A word too long for a
/// line on its own is broken between characters. Carriage returns are ignored and trailing
/// newlines don't produce empty lines, so empty text occupies no lines at all.
///
/// The cell keeps `cell_margin` clear on either side, and `font_size` is the font size as a
/// length on the page.
///
/// This is the only place wrapping is decided: measuring a row and drawing it both go
/// through here, so a row is always exactly as tall as the text drawn into it.
pub fn split_lines(
    text: &str,
    max_width: Mm,
    font_size: Mm,
    metrics: &dyn GlyphMetrics,
    cell_margin: Mm,
) -> Vec<String> {
    let chars: Vec<char> = text.chars().filter(|&ch| ch != '\r').collect();
    let mut len = chars.len();
    while len > 0 && chars[len - 1] == '\n' {
        len -= 1;
    }
    let chars = &chars[..len];

    // available width in thousandths of an em
    let limit = if font_size.0 > 0.0 {
        ((max_width - cell_margin * 2.0).0 * 1000.0 / font_size.0).ceil() as i64
    } else {
        i64::MAX
    };

    let mut lines: Vec<String> = Vec::new();
    let mut separator: Option<usize> = None;
    let mut start = 0;
    let mut i = 0;
    let mut width: i64 = 0;

    while i < chars.len() {
        let ch = chars[i];
        width += metrics.advance(ch) as i64;
        if ch == ' ' || ch == '\t' || ch == '\n' {
            separator = Some(i);
        }

        if ch == '\n' || width > limit {
            let end = match separator {
                Some(sep) => {
                    i = sep + 1;
                    sep
                }
                None => {
                    // always make progress, even if one character overflows the line
                    if i == start {
                        i += 1;
                    }
                    i
                }
            };
            lines.push(chars[start..end].iter().collect());
            separator = None;
            start = i;
            width = 0;
        } else {
            i += 1;
        }
    }
    if i != start {
        lines.push(chars[start..i].iter().collect());
    }

    lines
}

/// How many lines text wraps to, and how tall the box holding it has to be
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WrappedMeasurement {
    pub lines: usize,
    pub height: Mm,
}

/// The vertical recipe for a box of wrapped text: lines are `line_height` apart, padded above
/// and below, and never shorter than `min_height`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellBox {
    pub line_height: Mm,
    pub padding_top: Mm,
    pub padding_bottom: Mm,
    pub min_height: Mm,
}

impl CellBox {
    pub fn height_for(&self, lines: usize) -> Mm {
        let natural = self.line_height * lines as f32 + self.padding_top + self.padding_bottom;
        natural.max(self.min_height)
    }
}

/// Wrap `text` into a `max_width` cell and size the box it needs
pub fn measure(
    text: &str,
    max_width: Mm,
    font_size: Mm,
    metrics: &dyn GlyphMetrics,
    cell_margin: Mm,
    cell: &CellBox,
) -> WrappedMeasurement {
    let lines = split_lines(text, max_width, font_size, metrics, cell_margin).len();
    WrappedMeasurement {
        lines,
        height: cell.height_for(lines),
    }
}
