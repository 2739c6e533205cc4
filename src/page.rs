use crate::colour::Colour;
use crate::font::Font;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// Which font (by document id) and size a span of text is shown in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text placed on a page at a baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// Vector outlines the itinerary is drawn with
#[derive(Clone, PartialEq, Debug)]
pub enum PathShape {
    Rect(Rect),
    RoundedRect { rect: Rect, radius: Pt },
    Circle { centre: (Pt, Pt), radius: Pt },
    Line { from: (Pt, Pt), to: (Pt, Pt) },
}

/// A path and how to paint it. A path with neither fill nor stroke is skipped.
#[derive(Clone, PartialEq, Debug)]
pub struct PathLayout {
    pub shape: PathShape,
    pub fill: Option<Colour>,
    pub stroke: Option<Colour>,
    pub line_width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Path(PathLayout),
}

/// A single page: its size and everything drawn on it, in drawing order
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(width: Mm, height: Mm) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width.into(),
                y2: height.into(),
            },
            contents: Vec::default(),
        }
    }

    /// Add a span of text. Consecutive spans are grouped so they share one text state.
    pub fn add_span(&mut self, span: SpanLayout) {
        match self.contents.last_mut() {
            Some(PageContents::Text(spans)) => spans.push(span),
            _ => self.contents.push(PageContents::Text(vec![span])),
        }
    }

    pub fn add_path(&mut self, path: PathLayout) {
        if path.fill.is_some() || path.stroke.is_some() {
            self.contents.push(PageContents::Path(path));
        }
    }

    /// All text shown on the page, one entry per span, in drawing order
    pub fn text(&self) -> impl Iterator<Item = &str> {
        self.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => Some(spans),
                PageContents::Path(_) => None,
            })
            .flatten()
            .map(|span| span.text.as_str())
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), std::io::Error> {
        let id = refs.get_or_gen(RefType::Page(page_index));
        let page_tree = refs.get_or_gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                let name = format!("F{}", font_id.index());
                resource_fonts.pair(Name(name.as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let rendered = crate::content::render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(rendered.as_slice(), 6);
        let mut stream = writer.stream(content_id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.finish();

        Ok(())
    }
}
