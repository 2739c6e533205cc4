use super::Margins;
use crate::units::Mm;

/// The fixed page every itinerary is laid out on
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: Mm,
    pub height: Mm,
    pub margins: Margins,
    /// Where content starts on a page that carries the page header
    pub content_top: Mm,
    /// Vertical position of the rule under the page header
    pub header_rule: Mm,
    /// Inner padding a cell keeps between its edges and its text
    pub cell_margin: Mm,
}

impl PageGeometry {
    /// A4 portrait, 15mm margins with a 20mm footer band
    pub fn a4() -> PageGeometry {
        PageGeometry {
            width: Mm(210.0),
            height: Mm(297.0),
            margins: Margins::all(Mm(15.0)).with_footer(Mm(20.0)),
            content_top: Mm(40.0),
            header_rule: Mm(25.0),
            cell_margin: Mm(1.0),
        }
    }

    /// The lowest point content may reach: page height minus the top and bottom margins.
    /// The cursor is measured from the top edge of the page, so this doubles as the limit
    /// it must never pass.
    pub fn usable_height(&self) -> Mm {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Width between the left and right margins
    pub fn content_width(&self) -> Mm {
        self.width - self.margins.left - self.margins.right
    }

    pub fn right_edge(&self) -> Mm {
        self.width - self.margins.right
    }

    /// Top of the footer band
    pub fn footer_top(&self) -> Mm {
        self.height - self.margins.bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_proportions() {
        let g = PageGeometry::a4();
        assert_eq!(g.usable_height(), Mm(262.0));
        assert_eq!(g.content_width(), Mm(180.0));
        assert_eq!(g.right_edge(), Mm(195.0));
        assert_eq!(g.footer_top(), Mm(277.0));
        assert!(g.content_top < g.usable_height());
    }
}
