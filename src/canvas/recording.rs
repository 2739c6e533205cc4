use super::{Drawing, FontSpec, Paint, Shape, Surface, Weight};
use crate::colour::Colour;
use crate::layout::PageGeometry;
use crate::metrics::{GlyphMetrics, StandardFont};
use crate::units::Mm;
use crate::Result;

/// A [Canvas](super::Canvas) that records what it is asked to draw instead of producing a
/// document, measuring text with the standard Helvetica metrics
pub type RecordingCanvas = Drawing<RecordingSurface>;

impl RecordingCanvas {
    pub fn recording(geometry: PageGeometry) -> RecordingCanvas {
        Drawing::new(RecordingSurface::default(), geometry)
    }
}

/// One drawing operation, tagged with the 0-based page it landed on
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Page {
        page: usize,
    },
    Text {
        page: usize,
        x: Mm,
        baseline: Mm,
        text: String,
        font: FontSpec,
        colour: Colour,
    },
    Shape {
        page: usize,
        shape: Shape,
        paint: Paint,
    },
    Bookmark {
        page: usize,
        title: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<Op>,
    pages: usize,
}

impl RecordingSurface {
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    fn page(&self) -> usize {
        self.pages.saturating_sub(1)
    }

    /// Every string shown, with the page it is on, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = (usize, &str)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { page, text, .. } => Some((*page, text.as_str())),
            _ => None,
        })
    }

    /// Every string shown on one page
    pub fn texts_on(&self, page: usize) -> Vec<&str> {
        self.texts()
            .filter(|(p, _)| *p == page)
            .map(|(_, text)| text)
            .collect()
    }

    /// Pages (0-based) on which `text` is shown, once per occurrence
    pub fn pages_showing(&self, text: &str) -> Vec<usize> {
        self.texts()
            .filter(|(_, t)| *t == text)
            .map(|(page, _)| page)
            .collect()
    }

    pub fn shapes(&self) -> impl Iterator<Item = (usize, &Shape, &Paint)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Shape { page, shape, paint } => Some((*page, shape, paint)),
            _ => None,
        })
    }

    pub fn bookmarks(&self) -> Vec<(usize, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Bookmark { page, title } => Some((*page, title.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn begin_page(&mut self, _width: Mm, _height: Mm) {
        self.ops.push(Op::Page { page: self.pages });
        self.pages += 1;
    }

    fn text(&mut self, x: Mm, baseline: Mm, text: &str, font: FontSpec, colour: Colour) {
        self.ops.push(Op::Text {
            page: self.page(),
            x,
            baseline,
            text: text.to_string(),
            font,
            colour,
        });
    }

    fn shape(&mut self, shape: Shape, paint: Paint) {
        self.ops.push(Op::Shape {
            page: self.page(),
            shape,
            paint,
        });
    }

    fn bookmark(&mut self, title: &str) {
        self.ops.push(Op::Bookmark {
            page: self.page(),
            title: title.to_string(),
        });
    }

    fn metrics(&self, weight: Weight) -> &dyn GlyphMetrics {
        match weight {
            Weight::Regular => &StandardFont::Helvetica,
            Weight::Bold => &StandardFont::HelveticaBold,
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Align, Canvas, CellFormat};
    use crate::colour::palette;
    use pretty_assertions::assert_eq;

    fn canvas() -> RecordingCanvas {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        canvas.add_page();
        canvas
    }

    #[test]
    fn zero_width_cells_reach_the_right_margin() {
        let mut canvas = canvas();
        canvas.set_font(FontSpec::regular(10.0));
        canvas.set_xy(Mm(45.0), Mm(50.0));
        canvas.cell(Mm(0.0), Mm(8.0), "", CellFormat::default());
        assert_eq!(canvas.x(), Mm(195.0));
    }

    #[test]
    fn cells_move_right_or_down() {
        let mut canvas = canvas();
        canvas.set_xy(Mm(20.0), Mm(50.0));
        canvas.cell(Mm(40.0), Mm(6.0), "Departure", CellFormat::default());
        assert_eq!((canvas.x(), canvas.y()), (Mm(60.0), Mm(50.0)));
        canvas.cell(Mm(40.0), Mm(6.0), "Arrival", CellFormat::default().with_ln());
        assert_eq!((canvas.x(), canvas.y()), (Mm(15.0), Mm(56.0)));
    }

    #[test]
    fn text_is_aligned_inside_its_cell() {
        let mut canvas = canvas();
        canvas.set_font(FontSpec::regular(10.0));
        let width = canvas.text_width("Hi");
        for (align, expected) in [
            (Align::Left, Mm(21.0)),
            (Align::Center, Mm(20.0) + (Mm(40.0) - width) / 2.0),
            (Align::Right, Mm(60.0) - Mm(1.0) - width),
        ] {
            canvas.set_xy(Mm(20.0), Mm(50.0));
            canvas.cell(Mm(40.0), Mm(10.0), "Hi", CellFormat::aligned(align));
            let Some(Op::Text { x, baseline, .. }) = canvas.surface().ops().last().cloned() else {
                panic!("no text drawn");
            };
            assert!((x.0 - expected.0).abs() < 1e-4, "{align:?}: {x} != {expected}");
            assert!((baseline.0 - (55.0 + 0.3 * Mm::from_pt(10.0).0)).abs() < 1e-4);
        }
    }

    #[test]
    fn multi_cells_stack_lines_and_return_to_the_margin() {
        let mut canvas = canvas();
        canvas.set_font(FontSpec::regular(8.0));
        canvas.set_xy(Mm(128.0), Mm(60.0));
        let text = "- Explore the gardens by the bay and the cloud forest dome before sunset";
        let lines = canvas.line_count(text, Mm(65.0));
        assert!(lines > 1);
        canvas.multi_cell(Mm(65.0), Mm(4.0), text, Align::Left);
        assert_eq!(canvas.x(), Mm(15.0));
        assert_eq!(canvas.y(), Mm(60.0) + Mm(4.0) * lines as f32);
        assert_eq!(canvas.surface().texts().count(), lines);
    }

    #[test]
    fn footers_run_once_per_page_with_state_restored() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        canvas.set_footer(Box::new(|c: &mut dyn Canvas| {
            c.set_text_colour(palette::MUTED);
            c.set_font(FontSpec::regular(8.0));
            c.set_xy(Mm(15.0), Mm(277.0));
            c.cell(Mm(60.0), Mm(5.0), "footer", CellFormat::default());
        }));
        canvas.add_page();
        canvas.set_font(FontSpec::bold(18.0));
        canvas.add_page();
        assert_eq!(canvas.font(), FontSpec::bold(18.0));
        canvas.finish().unwrap();
        assert_eq!(canvas.surface().pages_showing("footer"), vec![0, 1]);
    }

    #[test]
    fn underlined_text_gets_a_rule() {
        let mut canvas = canvas();
        canvas.set_font(FontSpec::regular(10.0).underlined());
        canvas.cell(Mm(0.0), Mm(8.0), "View all terms and conditions", CellFormat::default());
        assert_eq!(canvas.surface().shapes().count(), 1);
    }
}
