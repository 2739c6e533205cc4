//! The itinerary document itself: which sections appear, in what order, on which pages.

mod furniture;
mod sections;

pub use furniture::{footer, BrandHeader};
pub use sections::hotel_table;

use crate::booking::Booking;
use crate::canvas::Canvas;
use crate::config::Branding;
use crate::layout::{PageGeometry, Paginator, TableReport};

/// What building the document produced, for logging and tests
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssemblyReport {
    pub pages: usize,
    pub days: usize,
    pub hotels: TableReport,
    pub activities: TableReport,
}

/// A booking laid out with a given branding
pub struct Itinerary<'a> {
    booking: &'a Booking,
    branding: &'a Branding,
    geometry: PageGeometry,
}

impl<'a> Itinerary<'a> {
    pub fn new(booking: &'a Booking, branding: &'a Branding) -> Itinerary<'a> {
        Itinerary {
            booking,
            branding,
            geometry: PageGeometry::a4(),
        }
    }

    /// Draw every section onto `canvas`. The cover goes on a bare page; every other section
    /// starts a fresh page under the brand header. All pages get the footer.
    pub fn render(&self, canvas: &mut dyn Canvas) -> AssemblyReport {
        canvas.set_footer(footer(self.branding, self.geometry));

        let header = BrandHeader {
            branding: self.branding,
        };
        let mut pager = Paginator::new(canvas, self.geometry, &header);

        sections::cover(&mut pager, self.booking, self.branding);
        let days = sections::daily_itinerary(&mut pager, self.booking);
        let hotels = sections::flights_and_hotels(&mut pager, self.booking, self.branding);
        sections::notes_and_scope(&mut pager);
        let activities = sections::activity_table(&mut pager, self.booking, self.branding);
        sections::payment_and_visa(&mut pager, self.booking, self.branding);

        let pages = pager.canvas().page_count();
        log::debug!("laid out {pages} pages for {} days", days);
        AssemblyReport {
            pages,
            days,
            hotels,
            activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::tests::SAMPLE;
    use crate::canvas::RecordingCanvas;
    use pretty_assertions::assert_eq;

    fn render(booking: &Booking) -> (AssemblyReport, RecordingCanvas) {
        let branding = Branding::default();
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let report = Itinerary::new(booking, &branding).render(&mut canvas);
        canvas.finish().unwrap();
        (report, canvas)
    }

    #[test]
    fn sample_booking_has_six_pages_in_order() {
        let booking = Booking::from_json(SAMPLE).unwrap();
        let (report, canvas) = render(&booking);
        assert_eq!(report.pages, 6);
        assert_eq!(report.days, 1);
        assert_eq!(report.hotels.rows_rendered, 1);
        assert_eq!(report.activities.rows_rendered, 1);

        let surface = canvas.surface();
        assert_eq!(surface.pages_showing("Hi, Rahul!"), vec![0]);
        assert_eq!(surface.pages_showing("Daily Itinerary"), vec![1]);
        assert_eq!(surface.pages_showing("Flight Summary"), vec![2]);
        assert_eq!(surface.pages_showing("Hotel Bookings"), vec![2]);
        assert_eq!(surface.pages_showing("Important Notes"), vec![3]);
        assert_eq!(surface.pages_showing("Scope Of Service"), vec![3]);
        assert_eq!(surface.pages_showing("Activity Table"), vec![4]);
        assert_eq!(surface.pages_showing("Payment Plan"), vec![5]);
        assert_eq!(surface.pages_showing("Book Now"), vec![5]);
    }

    #[test]
    fn cover_shows_the_trip_summary() {
        let booking = Booking::from_json(SAMPLE).unwrap();
        let (_, canvas) = render(&booking);
        let cover = canvas.surface().texts_on(0);
        for text in [
            "Singapore Itinerary",
            "5 Days 4 Nights",
            "Departure From:",
            "Kolkata",
            "01 Jun, 2025",
            "05 Jun, 2025",
            "2",
        ] {
            assert!(cover.contains(&text), "{text} missing from the cover");
        }
    }

    #[test]
    fn brand_and_footer_appear_on_every_page() {
        let booking = Booking::from_json(SAMPLE).unwrap();
        let (report, canvas) = render(&booking);
        let surface = canvas.surface();
        // under the brand name and in the footer on every page
        assert_eq!(surface.pages_showing("PLAN.PACK.GO").len(), report.pages * 2);
        assert_eq!(
            surface.pages_showing("Vigovia Tech Pvt. Ltd"),
            (0..report.pages).collect::<Vec<_>>()
        );
    }

    #[test]
    fn sections_are_bookmarked() {
        let booking = Booking::from_json(SAMPLE).unwrap();
        let (_, canvas) = render(&booking);
        let titles: Vec<&str> = canvas
            .surface()
            .bookmarks()
            .into_iter()
            .map(|(_, title)| title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Cover",
                "Daily Itinerary",
                "Flight Summary",
                "Hotel Bookings",
                "Important Notes",
                "Scope Of Service",
                "Activity Table",
                "Payment Plan",
                "Visa Details",
            ]
        );
    }

    #[test]
    fn sample_booking_renders_with_embedded_fonts() {
        use crate::canvas::PdfCanvas;
        use crate::font::Font;

        fn load(bytes: &[u8]) -> Font {
            Font::load(bytes.to_vec()).expect("can load font")
        }
        let mut canvas = PdfCanvas::with_fonts(
            PageGeometry::a4(),
            load(include_bytes!("../../assets/DejaVuSans.ttf")),
            load(include_bytes!("../../assets/DejaVuSans-Bold.ttf")),
        );
        let booking = Booking::from_json(SAMPLE).unwrap();
        let branding = Branding::default();
        let report = Itinerary::new(&booking, &branding).render(&mut canvas);
        assert!(report.pages >= 6);
        assert_eq!(canvas.surface().document().pages.len(), report.pages);

        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.windows(13).any(|w| w == b"/CIDFontType2"));
        assert!(bytes.windows(10).any(|w| w == b"/ToUnicode"));
    }

    #[test]
    fn payment_page_fits_on_one_page() {
        let booking = Booking::from_json(SAMPLE).unwrap();
        let (report, canvas) = render(&booking);
        let surface = canvas.surface();
        let last = report.pages - 1;
        for text in [
            "Rs. 150000 For 2 Pax (Inclusive Of GST)",
            "Not Collected",
            "Installment 3",
            "Tourist",
            "PLAN.PACK.GO!",
        ] {
            assert_eq!(surface.pages_showing(text), vec![last], "{text}");
        }
    }
}
