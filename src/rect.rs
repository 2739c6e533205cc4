use crate::units::*;

/// A rectangle in page space, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the lower-left corner.
    pub x1: Pt,
    /// The y-coordinate of the lower-left corner.
    pub y1: Pt,
    /// The x-coordinate of the upper-right corner.
    pub x2: Pt,
    /// The y-coordinate of the upper-right corner.
    pub y2: Pt,
}

impl Rect {
    /// Convert a box given by its top-left corner in millimetres (measured from the top of a
    /// page of height `page_height`) into PDF page space
    pub fn from_top_left(x: Mm, y: Mm, w: Mm, h: Mm, page_height: Mm) -> Rect {
        Rect {
            x1: x.into(),
            y1: (page_height - y - h).into(),
            x2: (x + w).into(),
            y2: (page_height - y).into(),
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
