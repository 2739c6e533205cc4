//! Lays out travel booking records as branded, paginated PDF itineraries.
//!
//! A [Booking] goes in, an A4 document comes out: a cover page, the day-by-day timeline,
//! flights and hotels, fixed notes, an activity table and the payment plan. Layout runs
//! against the [Canvas](canvas::Canvas) trait, so the same code drives the real PDF
//! writer and a recording double in tests.
//!
//! ```no_run
//! use itinerary_pdf::{Booking, Config, ItineraryGenerator};
//!
//! let booking = Booking::from_json(&std::fs::read_to_string("booking.json")?)?;
//! let generated = ItineraryGenerator::new(Config::default()).generate(&booking)?;
//! println!("{}", generated.url("http://localhost:3002/pdfs"));
//! # Ok::<(), itinerary_pdf::Error>(())
//! ```

mod booking;
pub use booking::*;

/// The drawing capability layout code talks to, and its PDF and recording implementations
pub mod canvas;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

pub mod format;

mod generate;
pub use generate::*;

mod info;
pub use info::*;

/// Sections of the itinerary document and the page furniture around them
pub mod itinerary;

/// Utility functions and structures to lay out text, tables and timelines on pages
pub mod layout;

mod metrics;
pub use metrics::*;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

/// Re-export of the PDF writer documents are serialised with
pub use pdf_writer;
