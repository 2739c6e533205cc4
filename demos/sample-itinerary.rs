use itinerary_pdf::canvas::{Canvas, PdfCanvas};
use itinerary_pdf::itinerary::Itinerary;
use itinerary_pdf::layout::PageGeometry;
use itinerary_pdf::{Booking, Config, Font, FontPaths, Info, ItineraryGenerator, OutputConfig};

const BOOKING: &str = r#"{
    "customerName": "Rahul",
    "destination": "Singapore",
    "departureFrom": "Kolkata",
    "departureDate": "2025-06-01",
    "returnDate": "2025-06-05",
    "travelers": 2,
    "days": [
        {
            "date": "2025-06-01",
            "activities": [
                {
                    "time": "Morning",
                    "title": "Gardens by the Bay",
                    "description": "Walk the Supertree Grove and the Cloud Forest dome",
                    "duration": 180,
                    "type": "Sightseeing"
                },
                {
                    "time": "Evening",
                    "title": "Marina Bay light show",
                    "description": "Spectra on the waterfront promenade",
                    "duration": 45,
                    "type": "Leisure"
                }
            ]
        },
        {
            "date": "2025-06-02",
            "activities": [
                {
                    "time": "Afternoon",
                    "title": "Sentosa Island",
                    "description": "Cable car across, then the beaches",
                    "duration": 0,
                    "type": "Adventure"
                }
            ]
        }
    ],
    "flights": [
        { "date": "2025-06-01", "airline": "Air India", "from": "Kolkata", "to": "Singapore" },
        { "date": "2025-06-05", "airline": "Air India", "from": "Singapore", "to": "Kolkata" }
    ],
    "hotels": [
        {
            "city": "Singapore",
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-05",
            "nights": 4,
            "name": "Marina Bay Sands"
        }
    ],
    "totalAmount": 150000,
    "installment1": 50000,
    "installment2": 50000
}"#;

fn main() {
    // parse and check the booking, the same record the service receives
    let booking = Booking::from_json(BOOKING).expect("booking parses");
    booking.validate().expect("booking is complete");

    // embed a TrueType pair instead of the built-in Helvetica
    let regular = Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec())
        .expect("can load regular font");
    let bold = Font::load(include_bytes!("../assets/DejaVuSans-Bold.ttf").to_vec())
        .expect("can load bold font");
    let mut canvas = PdfCanvas::with_fonts(PageGeometry::a4(), regular, bold);

    // describe the document in the PDF info dictionary
    let config = Config::default();
    let branding = &config.branding;
    canvas.surface_mut().set_info(Info::for_itinerary(
        &branding.company_name,
        &booking.customer_name,
        &booking.destination,
    ));

    // lay out every section, breaking pages as needed
    let report = Itinerary::new(&booking, branding).render(&mut canvas);
    println!(
        "{} pages, {} days, {} hotel rows, {} activity rows",
        report.pages, report.days, report.hotels.rows_rendered, report.activities.rows_rendered
    );

    // serialise and save
    let bytes = canvas.finish().expect("can render the document");
    std::fs::write("sample-itinerary.pdf", bytes).expect("can write sample-itinerary.pdf");

    // the generator does all of the above, names the file and writes it atomically
    let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let generator = ItineraryGenerator::new(Config {
        output: OutputConfig {
            dir: "pdfs".into(),
            purge_existing: false,
        },
        fonts: Some(FontPaths {
            regular: assets.join("DejaVuSans.ttf"),
            bold: assets.join("DejaVuSans-Bold.ttf"),
        }),
        ..Config::default()
    });
    let generated = generator.generate(&booking).expect("can generate");
    println!("{}", generated.success_response("http://localhost:3002/pdfs"));
}
