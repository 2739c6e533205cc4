use crate::units::Mm;

/// Margins are used when laying out objects on a page. There is no control
/// preventing objects on pages to overflow the margins; they are guidelines
/// for the layout functions, which keep their content inside them.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Utility method to make the bottom margin deeper, usually to leave room for a footer
    pub fn with_footer(&self, depth: Mm) -> Margins {
        Margins {
            bottom: depth,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_only_moves_the_bottom() {
        let margins = Margins::all(Mm(15.0)).with_footer(Mm(20.0));
        assert_eq!(margins, Margins::trbl(Mm(15.0), Mm(15.0), Mm(20.0), Mm(15.0)));
    }
}
