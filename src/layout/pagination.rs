use super::PageGeometry;
use crate::canvas::Canvas;
use crate::units::Mm;

/// Where the next block goes: a vertical offset from the top edge of the current page, and
/// which page that is
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PageCursor {
    pub y: Mm,
    pub page_index: usize,
}

/// Furniture re-drawn at the top of every page the paginator starts
pub trait PageHeader {
    fn draw(&self, canvas: &mut dyn Canvas, geometry: &PageGeometry);
}

/// A header that draws nothing
pub struct NoHeader;

impl PageHeader for NoHeader {
    fn draw(&self, _canvas: &mut dyn Canvas, _geometry: &PageGeometry) {}
}

/// Owns the vertical cursor for one document build and decides when pages break.
///
/// Blocks are committed with [reserve](Paginator::reserve): if a block doesn't fit below the
/// cursor a new page is started (header included) first. Pagination never fails; a block
/// taller than a whole page is placed at the top of a fresh page and allowed to run past the
/// bottom margin, while the cursor itself is clamped so it never passes the usable height.
pub struct Paginator<'a> {
    canvas: &'a mut dyn Canvas,
    header: &'a dyn PageHeader,
    geometry: PageGeometry,
    cursor: PageCursor,
    /// nothing has been committed since the last page started
    fresh: bool,
}

impl<'a> Paginator<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        geometry: PageGeometry,
        header: &'a dyn PageHeader,
    ) -> Paginator<'a> {
        let page_index = canvas.page_count().saturating_sub(1);
        Paginator {
            canvas,
            header,
            geometry,
            cursor: PageCursor {
                y: geometry.margins.top,
                page_index,
            },
            fresh: false,
        }
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn y(&self) -> Mm {
        self.cursor.y
    }

    /// Space left between the cursor and the bottom of the usable area
    pub fn remaining(&self) -> Mm {
        self.geometry.usable_height() - self.cursor.y
    }

    /// Whether nothing has been placed since the last page break
    pub fn at_page_top(&self) -> bool {
        self.fresh
    }

    /// Start a page without the page header, content starting at the top margin
    pub fn start_bare_page(&mut self) {
        self.canvas.add_page();
        self.cursor = PageCursor {
            y: self.geometry.margins.top,
            page_index: self.canvas.page_count() - 1,
        };
        self.fresh = true;
    }

    /// Start a page, draw the page header and move to where content begins
    pub fn start_new_page(&mut self) {
        self.canvas.add_page();
        self.header.draw(&mut *self.canvas, &self.geometry);
        self.cursor = PageCursor {
            y: self.geometry.content_top,
            page_index: self.canvas.page_count() - 1,
        };
        self.canvas.set_y(self.cursor.y);
        self.fresh = true;
        log::debug!("started page {}", self.cursor.page_index + 1);
    }

    pub fn will_fit(&self, height: Mm) -> bool {
        self.cursor.y + height <= self.geometry.usable_height()
    }

    /// Break the page unless `height` fits below the cursor, without committing anything.
    /// Used to keep a heading on the same page as the block that follows it.
    pub fn keep_together(&mut self, height: Mm) {
        if self.canvas.page_count() > 0 && height > self.remaining() && !self.fresh {
            self.start_new_page();
        }
    }

    /// Secure `height` of vertical space, breaking the page first if it doesn't fit here.
    /// Returns the offset the block starts at.
    pub fn reserve(&mut self, height: Mm) -> Mm {
        if self.canvas.page_count() == 0 || (!self.will_fit(height) && !self.fresh) {
            self.start_new_page();
        }
        self.place(height)
    }

    /// Commit `height` at the cursor without considering a page break
    pub fn place(&mut self, height: Mm) -> Mm {
        let y = self.cursor.y;
        if !self.will_fit(height) {
            log::warn!(
                "a {height} block at {y} on page {} runs past the bottom margin",
                self.cursor.page_index + 1
            );
        }
        self.canvas.set_y(y);
        self.advance(height);
        y
    }

    /// Move the cursor down, never past the usable height
    pub fn advance(&mut self, height: Mm) {
        self.cursor.y = (self.cursor.y + height).min(self.geometry.usable_height());
        self.fresh = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CellFormat, RecordingCanvas};

    struct Title;

    impl PageHeader for Title {
        fn draw(&self, canvas: &mut dyn Canvas, _geometry: &PageGeometry) {
            canvas.set_y(Mm(15.0));
            canvas.cell(Mm(0.0), Mm(8.0), "header", CellFormat::default());
        }
    }

    #[test]
    fn reserve_starts_the_first_page() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &Title);
        assert_eq!(pager.reserve(Mm(10.0)), Mm(40.0));
        assert_eq!(pager.y(), Mm(50.0));
        drop(pager);
        assert_eq!(canvas.surface().pages_showing("header"), vec![0]);
    }

    #[test]
    fn breaks_when_a_block_does_not_fit() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &Title);
        pager.start_new_page();
        pager.advance(Mm(200.0));
        assert_eq!(pager.y(), Mm(240.0));
        assert!(pager.will_fit(Mm(22.0)));
        assert!(!pager.will_fit(Mm(22.5)));

        let y = pager.reserve(Mm(30.0));
        assert_eq!(y, Mm(40.0));
        assert_eq!(pager.cursor(), PageCursor { y: Mm(70.0), page_index: 1 });
        drop(pager);
        assert_eq!(canvas.surface().pages_showing("header"), vec![0, 1]);
    }

    #[test]
    fn oversized_blocks_go_on_a_fresh_page_and_clamp_the_cursor() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &Title);
        pager.start_new_page();
        pager.advance(Mm(10.0));

        let y = pager.reserve(Mm(400.0));
        assert_eq!(y, Mm(40.0));
        assert_eq!(pager.cursor().page_index, 1);
        assert_eq!(pager.y(), Mm(262.0));

        // already at the top of a fresh page: no endless breaking
        pager.start_new_page();
        assert_eq!(pager.reserve(Mm(400.0)), Mm(40.0));
        assert_eq!(pager.cursor().page_index, 2);
    }

    #[test]
    fn cursor_never_passes_the_usable_height() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &NoHeader);
        for h in [5.0, 50.0, 120.0, 7.5, 300.0, 12.0, 0.0, 90.0] {
            pager.reserve(Mm(h));
            assert!(pager.y() >= Mm::ZERO);
            assert!(pager.y() <= PageGeometry::a4().usable_height());
        }
    }

    #[test]
    fn keeping_blocks_together_breaks_only_when_needed() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &Title);
        pager.start_new_page();
        pager.advance(Mm(200.0));
        assert_eq!(pager.remaining(), Mm(22.0));

        pager.keep_together(Mm(22.0));
        assert_eq!(pager.cursor(), PageCursor { y: Mm(240.0), page_index: 0 });

        pager.keep_together(Mm(30.0));
        assert_eq!(pager.cursor(), PageCursor { y: Mm(40.0), page_index: 1 });
        assert!(pager.at_page_top());

        // nothing placed yet, so a tall block doesn't break again
        pager.keep_together(Mm(400.0));
        assert_eq!(pager.cursor().page_index, 1);
    }

    #[test]
    fn bare_pages_skip_the_header() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &Title);
        pager.start_bare_page();
        assert_eq!(pager.y(), Mm(15.0));
        assert!(pager.at_page_top());
        drop(pager);
        assert!(canvas.surface().pages_showing("header").is_empty());
    }
}
