use crate::{
    metrics::{win_ansi_byte, GlyphMetrics, StandardFont},
    refs::{ObjectReferences, RefType},
    Error,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::fmt::Write;

enum FontSource {
    Standard(StandardFont),
    TrueType(OwnedFace),
}

/// A font that can be referenced from page content. Standard fonts are referenced by name
/// only; TrueType fonts are embedded in their entirety, with widths and a unicode map
/// written for the glyphs the document actually shows.
///
/// Fonts live "globally" in the [Document](crate::Document) and pages refer to them by id.
pub struct Font {
    source: FontSource,
    /// glyph id -> character, for every glyph shown with this font
    used: BTreeMap<u16, char>,
}

impl Font {
    /// One of the standard PDF fonts, which every viewer provides
    pub fn standard(font: StandardFont) -> Font {
        Font {
            source: FontSource::Standard(font),
            used: BTreeMap::new(),
        }
    }

    /// Load a TrueType / OpenType font from raw bytes, returning an error if the font could
    /// not be parsed or has no way of mapping characters onto glyphs
    pub fn load(bytes: Vec<u8>) -> Result<Font, Error> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        if face.as_face_ref().tables().cmap.is_none() {
            return Err(Error::Font("font has no cmap table".to_string()));
        }
        Ok(Font {
            source: FontSource::TrueType(face),
            used: BTreeMap::new(),
        })
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.source, FontSource::TrueType(_))
    }

    fn glyph_id(face: &OwnedFace, ch: char) -> u16 {
        let face = face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    /// Remember which glyphs `text` needs so they get widths and unicode mappings when the
    /// font is written
    pub(crate) fn mark_used(&mut self, text: &str) {
        if let FontSource::TrueType(face) = &self.source {
            for ch in text.chars() {
                let gid = Font::glyph_id(face, ch);
                self.used.entry(gid).or_insert(ch);
            }
        }
    }

    /// Encode `text` as a hex string operand for the `Tj` operator
    pub(crate) fn encode(&self, text: &str) -> String {
        let mut hex = String::with_capacity(text.len() * 4 + 2);
        hex.push('<');
        match &self.source {
            FontSource::Standard(_) => {
                for ch in text.chars() {
                    let _ = write!(hex, "{:02x}", win_ansi_byte(ch));
                }
            }
            FontSource::TrueType(face) => {
                for ch in text.chars() {
                    let _ = write!(hex, "{:04x}", Font::glyph_id(face, ch));
                }
            }
        }
        hex.push('>');
        hex
    }

    fn scaling(face: &OwnedFace) -> f32 {
        1000.0 / face.as_face_ref().units_per_em() as f32
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        match &self.source {
            FontSource::Standard(standard) => {
                writer
                    .type1_font(font_id)
                    .base_font(Name(standard.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            FontSource::TrueType(face) => {
                let cid_font_id = self.write_cid(face, refs, font_index, writer);
                let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

                let mut font = writer.type0_font(font_id);
                font.base_font(Name(format!("F{font_index}").as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_id);
                font.to_unicode(to_unicode_id);
            }
        }
    }

    fn write_cid(
        &self,
        face: &OwnedFace,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(face, refs, font_index, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = Font::scaling(face);

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(1000.0);

        // consecutive runs of used glyph ids share one widths entry
        let mut widths = cid_font.widths();
        let mut run: Option<(u16, Vec<f32>)> = None;
        for &gid in self.used.keys() {
            let width = face
                .as_face_ref()
                .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                .unwrap_or_default() as f32
                * scaling;
            match run.as_mut() {
                Some((start, ws)) if *start as usize + ws.len() == gid as usize => ws.push(width),
                _ => {
                    if let Some((start, ws)) = run.take() {
                        widths.consecutive(start, ws);
                    }
                    run = Some((gid, vec![width]));
                }
            }
        }
        if let Some((start, ws)) = run {
            widths.consecutive(start, ws);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        face: &OwnedFace,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(face.as_slice(), 6);
        let mut data = writer.stream(data_id, compressed.as_slice());
        data.filter(Filter::FlateDecode);
        data.pair(Name(b"Length1"), face.as_slice().len() as i32);
        data.finish();

        let face_ref = face.as_face_ref();
        let scaling = Font::scaling(face);
        let bbox = face_ref.global_bounding_box();

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(format!("F{font_index}").as_bytes()));

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face_ref.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face_ref.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect::new(
            bbox.x_min as f32 * scaling,
            bbox.y_min as f32 * scaling,
            bbox.x_max as f32 * scaling,
            bbox.y_max as f32 * scaling,
        ));
        descriptor.italic_angle(0.0);
        descriptor.ascent(face_ref.ascender() as f32 * scaling);
        descriptor.descent(face_ref.descender() as f32 * scaling);
        descriptor.cap_height(
            face_ref
                .capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(face_ref.ascender() as f32 * scaling),
        );
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let used: Vec<(u16, char)> = self.used.iter().map(|(&gid, &ch)| (gid, ch)).collect();
        for block in used.chunks(100) {
            let _ = writeln!(map, "{} beginbfchar", block.len());
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|u| format!("{u:04x}"))
                    .collect();
                let _ = writeln!(map, "<{gid:04x}> <{units}>");
            }
            map.push_str("endbfchar\n");
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(map.as_bytes(), 6);
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.finish();

        id
    }
}

impl GlyphMetrics for Font {
    fn advance(&self, ch: char) -> u16 {
        match &self.source {
            FontSource::Standard(standard) => standard.advance(ch),
            FontSource::TrueType(face) => {
                let ch = if ch == '\t' { ' ' } else { ch };
                let gid = Font::glyph_id(face, ch);
                let advance = face
                    .as_face_ref()
                    .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                    .unwrap_or_default();
                (advance as f32 * Font::scaling(face)).round() as u16
            }
        }
    }
}
