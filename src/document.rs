use crate::{
    font::Font,
    info::Info,
    outline::Outline,
    page::{Page, PageContents},
    refs::{ObjectReferences, RefType},
    Error,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub fonts: Arena<Font>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its 0-based index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    pub fn page_mut(&mut self, page_index: usize) -> Option<&mut Page> {
        self.pages.get_mut(page_index)
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document and pages refer to them by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add a bookmark in the document outline pointing to the page with a given index. The
    /// whole page is fit into view when navigating to the bookmark.
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title.to_string());
    }

    /// Write the entire document to the writer. The whole document is rendered in memory
    /// first, then handed to `w` in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), Error> {
        let Document {
            info,
            pages,
            mut fonts,
            outline,
        } = self;

        for page in pages.iter() {
            for content in page.contents.iter() {
                if let PageContents::Text(spans) = content {
                    for span in spans.iter() {
                        if let Some(font) = fonts.get_mut(span.font.id) {
                            font.mark_used(&span.text);
                        }
                    }
                }
            }
        }

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter() {
            font.write(&mut refs, i, &mut writer);
        }

        for (page_index, page) in pages.iter().enumerate() {
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        if !outline.is_empty() {
            outline.write(&mut refs, &mut writer);
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = refs.get(RefType::Outlines) {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
