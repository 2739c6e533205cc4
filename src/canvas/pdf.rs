use super::{Drawing, FontSpec, Paint, Shape, Surface, Weight};
use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::PageGeometry;
use crate::metrics::{GlyphMetrics, StandardFont};
use crate::page::{Page, PathLayout, PathShape, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::{Mm, Pt};
use crate::{Error, Result};
use id_arena::Id;

/// A [Canvas](super::Canvas) that produces a real PDF
pub type PdfCanvas = Drawing<PdfSurface>;

impl PdfCanvas {
    /// A canvas drawing with the built-in Helvetica pair
    pub fn standard(geometry: PageGeometry) -> PdfCanvas {
        Drawing::new(PdfSurface::standard(), geometry)
    }

    /// A canvas drawing with the given TrueType faces, embedded into the document
    pub fn with_fonts(geometry: PageGeometry, regular: Font, bold: Font) -> PdfCanvas {
        Drawing::new(PdfSurface::with_fonts(regular, bold), geometry)
    }
}

/// Paints onto the pages of a [Document], converting from top-left millimetres into PDF
/// points as it goes
pub struct PdfSurface {
    document: Document,
    regular: Id<Font>,
    bold: Id<Font>,
    page_height: Mm,
    current: Option<usize>,
}

impl PdfSurface {
    pub fn standard() -> PdfSurface {
        PdfSurface::with_fonts(
            Font::standard(StandardFont::Helvetica),
            Font::standard(StandardFont::HelveticaBold),
        )
    }

    pub fn with_fonts(regular: Font, bold: Font) -> PdfSurface {
        let mut document = Document::default();
        let regular = document.add_font(regular);
        let bold = document.add_font(bold);
        PdfSurface {
            document,
            regular,
            bold,
            page_height: Mm::ZERO,
            current: None,
        }
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn font_id(&self, weight: Weight) -> Id<Font> {
        match weight {
            Weight::Regular => self.regular,
            Weight::Bold => self.bold,
        }
    }

    fn point(&self, x: Mm, y: Mm) -> (Pt, Pt) {
        (x.into(), (self.page_height - y).into())
    }

    fn page(&mut self) -> Option<&mut Page> {
        let index = self.current?;
        self.document.page_mut(index)
    }
}

impl Surface for PdfSurface {
    fn begin_page(&mut self, width: Mm, height: Mm) {
        self.page_height = height;
        self.current = Some(self.document.add_page(Page::new(width, height)));
    }

    fn text(&mut self, x: Mm, baseline: Mm, text: &str, font: FontSpec, colour: Colour) {
        let span = SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: self.font_id(font.weight),
                size: Pt(font.size),
            },
            colour,
            coords: self.point(x, baseline),
        };
        if let Some(page) = self.page() {
            page.add_span(span);
        }
    }

    fn shape(&mut self, shape: Shape, paint: Paint) {
        let page_height = self.page_height;
        let shape = match shape {
            Shape::Rect { x, y, w, h } => {
                PathShape::Rect(Rect::from_top_left(x, y, w, h, page_height))
            }
            Shape::RoundedRect { x, y, w, h, radius } => PathShape::RoundedRect {
                rect: Rect::from_top_left(x, y, w, h, page_height),
                radius: radius.into(),
            },
            Shape::Circle { cx, cy, radius } => PathShape::Circle {
                centre: self.point(cx, cy),
                radius: radius.into(),
            },
            Shape::Line { x1, y1, x2, y2 } => PathShape::Line {
                from: self.point(x1, y1),
                to: self.point(x2, y2),
            },
        };
        let path = PathLayout {
            shape,
            fill: paint.fill,
            stroke: paint.stroke,
            line_width: paint.line_width.into(),
        };
        if let Some(page) = self.page() {
            page.add_path(path);
        }
    }

    fn bookmark(&mut self, title: &str) {
        if let Some(index) = self.current {
            self.document.add_bookmark(title, index);
        }
    }

    fn metrics(&self, weight: Weight) -> &dyn GlyphMetrics {
        &self.document.fonts[self.font_id(weight)]
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        if self.document.pages.is_empty() {
            return Err(Error::EmptyDocument);
        }
        let document = std::mem::take(&mut self.document);
        self.current = None;
        let mut bytes: Vec<u8> = Vec::new();
        document.write(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, CellFormat, ShapeStyle};

    #[test]
    fn draws_a_pdf() {
        let mut canvas = PdfCanvas::standard(PageGeometry::a4());
        canvas.add_page();
        canvas.set_font(FontSpec::bold(12.0));
        canvas.cell(Mm(0.0), Mm(10.0), "Daily Itinerary", CellFormat::default());
        canvas.circle(Mm(25.0), Mm(55.0), Mm(12.0), ShapeStyle::Fill);
        canvas.bookmark("Daily Itinerary");
        assert_eq!(canvas.surface().document().pages.len(), 1);
        assert_eq!(
            canvas.surface().document().pages[0].text().collect::<Vec<_>>(),
            vec!["Daily Itinerary"]
        );

        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn text_is_placed_from_the_top_of_the_page() {
        let mut surface = PdfSurface::standard();
        surface.begin_page(Mm(210.0), Mm(297.0));
        surface.text(
            Mm(0.0),
            Mm(0.0),
            "top",
            FontSpec::regular(10.0),
            Colour::new_grey(0.0),
        );
        let page = &surface.document().pages[0];
        let crate::page::PageContents::Text(spans) = &page.contents[0] else {
            panic!("expected text");
        };
        let top: Pt = Mm(297.0).into();
        assert_eq!(spans[0].coords, (Pt(0.0), top));
    }

    #[test]
    fn embedded_fonts_drive_measuring_and_wrapping() {
        let load = |bytes: &[u8]| Font::load(bytes.to_vec()).expect("can load font");
        let regular: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
        let bold: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");
        let reference = load(regular);

        let geometry = PageGeometry::a4();
        let mut embedded = PdfCanvas::with_fonts(geometry, load(regular), load(bold));
        let mut standard = PdfCanvas::standard(geometry);
        for canvas in [&mut embedded, &mut standard] {
            canvas.add_page();
            canvas.set_font(FontSpec::regular(10.0));
        }

        let text = "Gardens by the Bay";
        let size = FontSpec::regular(10.0).size_mm();
        assert_eq!(
            embedded.text_width(text),
            size * (reference.advance_of(text) as f32 / 1000.0)
        );
        assert!(embedded.text_width(text) > standard.text_width(text));

        let paragraph = lipsum::lipsum(60);
        let width = Mm(60.0);
        let lines = embedded.split_lines(&paragraph, width);
        assert!(lines.len() >= standard.split_lines(&paragraph, width).len());
        let room = width - geometry.cell_margin * 2.0;
        for line in lines.iter() {
            assert!(embedded.text_width(line) <= room + Mm(0.01), "{line}");
        }

        embedded.cell(Mm(0.0), Mm(10.0), text, CellFormat::default());
        let bytes = embedded.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.windows(13).any(|w| w == b"/CIDFontType2"));
    }

    #[test]
    fn empty_documents_are_refused() {
        let mut canvas = PdfCanvas::standard(PageGeometry::a4());
        assert!(canvas.finish().is_err());
    }
}
