//! Content stream rendering: turns a page's laid out contents into PDF operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, PathLayout, PathShape, SpanFont, SpanLayout};
use crate::units::Pt;
use id_arena::Arena;
use std::io::Write;

/// Control point distance for approximating a quarter circle with a cubic bezier
const KAPPA: f32 = 0.552_284_8;

#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Path(path) => render_path(&mut content, path)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size.0
    )?;
    write_colour(content, current_colour, false)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size.0
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour, false)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0 .0, span.coords.1 .0)?;
        write!(content, "{} Tj\n", fonts[current_font.id].encode(&span.text))?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_path(content: &mut Vec<u8>, path: &PathLayout) -> Result<(), std::io::Error> {
    let op = match (path.fill, path.stroke) {
        (Some(_), Some(_)) => "B",
        (Some(_), None) => "f",
        (None, Some(_)) => "S",
        (None, None) => return Ok(()),
    };

    write!(content, "q\n")?;
    write!(content, "{} w\n", path.line_width.0)?;
    if let Some(fill) = path.fill {
        write_colour(content, fill, false)?;
    }
    if let Some(stroke) = path.stroke {
        write_colour(content, stroke, true)?;
    }

    match &path.shape {
        PathShape::Rect(r) => {
            write!(
                content,
                "{} {} {} {} re\n",
                r.x1.0,
                r.y1.0,
                r.width().0,
                r.height().0
            )?;
        }
        PathShape::RoundedRect { rect, radius } => {
            let r = radius
                .0
                .min(rect.width().0 / 2.0)
                .min(rect.height().0 / 2.0);
            let k = r * KAPPA;
            let (x1, y1, x2, y2) = (rect.x1.0, rect.y1.0, rect.x2.0, rect.y2.0);
            write!(content, "{} {} m\n", x1 + r, y1)?;
            write!(content, "{} {} l\n", x2 - r, y1)?;
            write!(content, "{} {} {} {} {} {} c\n", x2 - r + k, y1, x2, y1 + r - k, x2, y1 + r)?;
            write!(content, "{} {} l\n", x2, y2 - r)?;
            write!(content, "{} {} {} {} {} {} c\n", x2, y2 - r + k, x2 - r + k, y2, x2 - r, y2)?;
            write!(content, "{} {} l\n", x1 + r, y2)?;
            write!(content, "{} {} {} {} {} {} c\n", x1 + r - k, y2, x1, y2 - r + k, x1, y2 - r)?;
            write!(content, "{} {} l\n", x1, y1 + r)?;
            write!(content, "{} {} {} {} {} {} c\n", x1, y1 + r - k, x1 + r - k, y1, x1 + r, y1)?;
            write!(content, "h\n")?;
        }
        PathShape::Circle { centre, radius } => {
            let (cx, cy, r) = (centre.0 .0, centre.1 .0, radius.0);
            let k = r * KAPPA;
            write!(content, "{} {} m\n", cx + r, cy)?;
            write!(content, "{} {} {} {} {} {} c\n", cx + r, cy + k, cx + k, cy + r, cx, cy + r)?;
            write!(content, "{} {} {} {} {} {} c\n", cx - k, cy + r, cx - r, cy + k, cx - r, cy)?;
            write!(content, "{} {} {} {} {} {} c\n", cx - r, cy - k, cx - k, cy - r, cx, cy - r)?;
            write!(content, "{} {} {} {} {} {} c\n", cx + k, cy - r, cx + r, cy - k, cx + r, cy)?;
            write!(content, "h\n")?;
        }
        PathShape::Line { from, to } => {
            write!(content, "{} {} m\n", from.0 .0, from.1 .0)?;
            write!(content, "{} {} l\n", to.0 .0, to.1 .0)?;
        }
    }

    // a line has no interior to fill
    let op = match (&path.shape, op) {
        (PathShape::Line { .. }, _) => "S",
        (_, op) => op,
    };
    write!(content, "{op}\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour, stroke: bool) -> Result<(), std::io::Error> {
    match (colour, stroke) {
        (Colour::RGB { r, g, b }, false) => write!(content, "{r} {g} {b} rg\n"),
        (Colour::RGB { r, g, b }, true) => write!(content, "{r} {g} {b} RG\n"),
        (Colour::Grey { g }, false) => write!(content, "{g} g\n"),
        (Colour::Grey { g }, true) => write!(content, "{g} G\n"),
    }
}

/// Width of a stroke used when none is given
pub(crate) const DEFAULT_LINE_WIDTH: Pt = Pt(0.567);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StandardFont;
    use crate::rect::Rect;

    fn fonts() -> (Arena<Font>, id_arena::Id<Font>) {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::standard(StandardFont::Helvetica));
        (fonts, id)
    }

    #[test]
    fn text_spans_share_one_text_state() {
        let (fonts, id) = fonts();
        let font = SpanFont { id, size: Pt(9.0) };
        let span = |text: &str, y: f32| SpanLayout {
            text: text.to_string(),
            font,
            colour: Colour::new_grey(0.0),
            coords: (Pt(10.0), Pt(y)),
        };
        let rendered =
            render_contents(&[PageContents::Text(vec![span("A", 700.0), span("B", 690.0)])], &fonts)
                .unwrap();
        let ops = String::from_utf8(rendered).unwrap();
        assert_eq!(ops.matches("Tf").count(), 1);
        assert!(ops.contains("10 700 Td\n<41> Tj"));
        assert!(ops.contains("10 690 Td\n<42> Tj"));
    }

    #[test]
    fn filled_and_stroked_rects_use_b() {
        let (fonts, _) = fonts();
        let path = PathLayout {
            shape: PathShape::Rect(Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: Pt(10.0),
                y2: Pt(5.0),
            }),
            fill: Some(Colour::new_grey(1.0)),
            stroke: Some(Colour::new_grey(0.0)),
            line_width: DEFAULT_LINE_WIDTH,
        };
        let ops = String::from_utf8(render_contents(&[PageContents::Path(path)], &fonts).unwrap())
            .unwrap();
        assert!(ops.contains("0 0 10 5 re\nB\n"));
        assert!(ops.contains("1 g\n"));
        assert!(ops.contains("0 G\n"));
    }

    #[test]
    fn lines_are_only_ever_stroked() {
        let (fonts, _) = fonts();
        let path = PathLayout {
            shape: PathShape::Line {
                from: (Pt(0.0), Pt(0.0)),
                to: (Pt(5.0), Pt(5.0)),
            },
            fill: Some(Colour::new_grey(0.5)),
            stroke: Some(Colour::new_grey(0.5)),
            line_width: DEFAULT_LINE_WIDTH,
        };
        let ops = String::from_utf8(render_contents(&[PageContents::Path(path)], &fonts).unwrap())
            .unwrap();
        assert!(ops.ends_with("5 5 l\nS\nQ\n"));
    }
}
