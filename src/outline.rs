use pdf_writer::{Finish, Name, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// The document's flat bookmark list, one entry per section
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, title: String) {
        self.entries.push(OutlineEntry { page_index, title });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the outline tree. Entries pointing at pages that were never written are skipped.
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let entries: Vec<(usize, &OutlineEntry)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| refs.get(RefType::Page(entry.page_index)).is_some())
            .collect();

        let outlines_id = refs.gen(RefType::Outlines);
        let ids: Vec<_> = entries
            .iter()
            .map(|(i, _)| refs.gen(RefType::OutlineEntry(*i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (ids.first(), ids.last()) {
            outline.first(*first);
            outline.last(*last);
            outline.count(ids.len() as i32);
        }
        outline.finish();

        for (n, (_, entry)) in entries.iter().enumerate() {
            let Some(page_ref) = refs.get(RefType::Page(entry.page_index)) else {
                continue;
            };
            let mut item = writer.outline_item(ids[n]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if n > 0 {
                item.prev(ids[n - 1]);
            }
            if n + 1 < ids.len() {
                item.next(ids[n + 1]);
            }
            item.insert(Name(b"Dest"))
                .array()
                .item(page_ref)
                .item(Name(b"Fit"));
            item.finish();
        }
    }
}
