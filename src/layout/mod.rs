//! Layout and pagination of itinerary content.
//!
//! Everything here works against the [Canvas](crate::canvas::Canvas) capability and in
//! millimetres from the top of the page:
//!
//! - [`split_lines`] / [`measure`] decide how text wraps, the same way for measuring and
//!   for drawing
//! - [`Paginator`] owns the vertical cursor and breaks pages, re-drawing the page header
//! - [`Table`] renders header + rows with per-row heights, repeating the header on every
//!   page it continues onto
//! - [`render_day`] draws one day of the timeline as an unsplittable block
//!
//! # Example
//!
//! ```
//! use itinerary_pdf::canvas::{Align, RecordingCanvas};
//! use itinerary_pdf::layout::{Column, NoHeader, PageGeometry, Paginator, Table, TableStyle};
//! use itinerary_pdf::Mm;
//!
//! let geometry = PageGeometry::a4();
//! let mut canvas = RecordingCanvas::recording(geometry);
//! let mut pager = Paginator::new(&mut canvas, geometry, &NoHeader);
//! pager.start_new_page();
//!
//! let columns = [
//!     Column::centred("Service", Mm(60.0)),
//!     Column::wrapped("Details", Mm(120.0), Align::Left),
//! ];
//! let style = TableStyle::default();
//! let rows = vec![vec!["Support".to_string(), "Chat Support".to_string()]];
//! let report = Table::new(Mm(15.0), &columns, &style).render(&mut pager, &rows);
//! assert_eq!(report.rows_rendered, 1);
//! ```

mod geometry;
mod margins;
mod pagination;
mod table;
pub mod timeline;
mod wrap;

pub use geometry::*;
pub use margins::*;
pub use pagination::*;
pub use table::*;
pub use timeline::render_day;
pub use wrap::*;
