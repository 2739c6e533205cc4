//! The drawing capability the layout engine talks to.
//!
//! Layout code never touches pages, fonts or content streams directly. It sets colours and
//! fonts, moves a cursor, places cells of text and paints a handful of shapes through the
//! object safe [Canvas] trait, and asks the same canvas how text will wrap. Everything is in
//! millimetres measured from the top-left corner of the page.
//!
//! [Drawing] implements the trait once, on top of a [Surface] that does the actual
//! painting: [PdfSurface] builds a real [Document](crate::Document), [RecordingSurface]
//! just remembers what was drawn so layouts can be tested.

mod drawing;
mod pdf;
mod recording;

pub use drawing::*;
pub use pdf::*;
pub use recording::*;

use crate::colour::Colour;
use crate::units::Mm;
use crate::Result;

/// Horizontal placement of text inside its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

/// The font text is set in: one of the two faces, a size in points, and whether it is
/// underlined
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontSpec {
    pub weight: Weight,
    pub size: f32,
    pub underline: bool,
}

impl FontSpec {
    pub const fn regular(size: f32) -> FontSpec {
        FontSpec {
            weight: Weight::Regular,
            size,
            underline: false,
        }
    }

    pub const fn bold(size: f32) -> FontSpec {
        FontSpec {
            weight: Weight::Bold,
            size,
            underline: false,
        }
    }

    pub const fn underlined(self) -> FontSpec {
        FontSpec {
            underline: true,
            ..self
        }
    }

    /// The font size as a length on the page
    pub fn size_mm(&self) -> Mm {
        Mm::from_pt(self.size)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec::regular(12.0)
    }
}

/// How a cell is drawn and where the cursor goes afterwards
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CellFormat {
    pub align: Align,
    /// Outline the cell with the draw colour
    pub border: bool,
    /// Paint the cell background with the fill colour
    pub fill: bool,
    /// Move to the start of the next line instead of to the right of the cell
    pub ln: bool,
}

impl CellFormat {
    pub fn aligned(align: Align) -> CellFormat {
        CellFormat {
            align,
            ..CellFormat::default()
        }
    }

    pub fn with_ln(self) -> CellFormat {
        CellFormat { ln: true, ..self }
    }

    pub fn boxed(self) -> CellFormat {
        CellFormat {
            border: true,
            fill: true,
            ..self
        }
    }
}

/// Which parts of a shape get painted. Fills use the fill colour, outlines the draw colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeStyle {
    Fill,
    Stroke,
    FillStroke,
}

impl ShapeStyle {
    pub fn fills(self) -> bool {
        matches!(self, ShapeStyle::Fill | ShapeStyle::FillStroke)
    }

    pub fn strokes(self) -> bool {
        matches!(self, ShapeStyle::Stroke | ShapeStyle::FillStroke)
    }
}

/// Drawn at the bottom of every page, just before the next page starts and when the
/// document is finished
pub type FooterFn = Box<dyn Fn(&mut dyn Canvas)>;

pub trait Canvas {
    fn set_fill_colour(&mut self, colour: Colour);
    fn set_text_colour(&mut self, colour: Colour);
    fn set_draw_colour(&mut self, colour: Colour);

    fn set_font(&mut self, font: FontSpec);
    fn font(&self) -> FontSpec;

    fn x(&self) -> Mm;
    fn y(&self) -> Mm;
    fn set_x(&mut self, x: Mm);
    /// Move to `y`, returning to the left margin
    fn set_y(&mut self, y: Mm);
    fn set_xy(&mut self, x: Mm, y: Mm);
    /// Return to the left margin and move down by `h`
    fn ln(&mut self, h: Mm);

    /// A single line of text in a `w` by `h` box at the cursor. A width of zero extends
    /// the cell to the right margin.
    fn cell(&mut self, w: Mm, h: Mm, text: &str, format: CellFormat);

    /// Text wrapped to `w`, one `line_height` tall cell per line, starting at the cursor.
    /// Leaves the cursor at the left margin below the last line.
    fn multi_cell(&mut self, w: Mm, line_height: Mm, text: &str, align: Align);

    fn rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm, style: ShapeStyle);
    fn rounded_rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm, radius: Mm, style: ShapeStyle);
    fn circle(&mut self, cx: Mm, cy: Mm, radius: Mm, style: ShapeStyle);
    fn line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm);

    /// Finish the current page (drawing its footer) and start a new one with the cursor at
    /// the top-left margin
    fn add_page(&mut self);
    fn page_count(&self) -> usize;
    fn set_footer(&mut self, footer: FooterFn);

    /// How `text` wraps into a `w` wide cell in the current font, exactly as
    /// [multi_cell](Canvas::multi_cell) will draw it
    fn split_lines(&self, text: &str, w: Mm) -> Vec<String>;

    fn line_count(&self, text: &str, w: Mm) -> usize {
        self.split_lines(text, w).len()
    }

    /// Width of `text` in the current font
    fn text_width(&self, text: &str) -> Mm;

    /// Add a document outline entry pointing at the current page
    fn bookmark(&mut self, title: &str);

    /// Draw the last footer and serialise the document
    fn finish(&mut self) -> Result<Vec<u8>>;
}
