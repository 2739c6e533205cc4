use crate::booking::Booking;
use crate::canvas::{Align, CellFormat, FontSpec, ShapeStyle};
use crate::colour::palette;
use crate::config::Branding;
use crate::format::{calculate_nights, format_date, format_duration, money, trip_length};
use crate::layout::timeline::day_height;
use crate::layout::{render_day, CellBox, Column, Paginator, Table, TableReport, TableStyle};
use crate::units::Mm;

const LEFT: Mm = Mm(15.0);
const FULL_WIDTH: Mm = Mm(180.0);
const TEXT_INSET: Mm = Mm(25.0);

const FLIGHT_HEIGHT: Mm = Mm(18.0);
const VISA_PANEL_HEIGHT: Mm = Mm(44.0);

const NOTE_DETAIL: &str = "In Case Of Visa Rejection, Visa Fees Or Any Other Non Cancellable \
                           Component Cannot Be Reimbursed At Any Cost.";

const NOTES: [&str; 5] = [
    "Airlines Standard Policy",
    "Flight/Hotel Cancellation",
    "Trip Insurance",
    "Hotel Check-in & Check Out",
    "Visa Rejection",
];

const SERVICES: [(&str, &str); 5] = [
    (
        "Flight Tickets And Hotel Vouchers",
        "Delivered 3 Days Post Full Payment",
    ),
    ("Web Check-In", "Boarding Pass Delivery Via Email/WhatsApp"),
    ("Support", "Chat Support - Response Time: 4 Hours"),
    ("Cancellation Support", "Provided"),
    ("Trip Support", "Response Time: 5 Minutes"),
];

/// A section heading, keeping `space` below its top free before the next block. The heading
/// moves to a new page unless the first `keep_with_next` of what follows fits under it.
fn heading(pager: &mut Paginator, title: &str, space: Mm, keep_with_next: Mm) {
    pager.keep_together(space + keep_with_next);
    let y = pager.reserve(space);
    let canvas = pager.canvas();
    canvas.set_xy(LEFT, y);
    canvas.set_text_colour(palette::INK);
    canvas.set_font(FontSpec::bold(18.0));
    canvas.cell(Mm(0.0), Mm(10.0), title, CellFormat::default());
}

/// A heading directly followed by a table, kept on the page of the table header
fn titled_table(
    pager: &mut Paginator,
    title: &str,
    table: &Table,
    rows: &[Vec<String>],
) -> TableReport {
    let lead = table.lead_height(pager.canvas(), rows);
    heading(pager, title, Mm(15.0), lead);
    table.render(pager, rows)
}

/// A rounded panel with a bold label and a value
fn summary_panel(pager: &mut Paginator, label: &str, value: &str, space: Mm) {
    let y = pager.reserve(space);
    let canvas = pager.canvas();
    canvas.set_fill_colour(palette::MIST);
    canvas.rounded_rect(LEFT, y, FULL_WIDTH, Mm(15.0), Mm(3.0), ShapeStyle::Fill);
    canvas.set_xy(TEXT_INSET, y + Mm(4.0));
    canvas.set_text_colour(palette::INK);
    canvas.set_font(FontSpec::bold(12.0));
    canvas.cell(Mm(60.0), Mm(8.0), label, CellFormat::default());
    canvas.set_font(FontSpec::regular(12.0));
    canvas.cell(Mm(0.0), Mm(8.0), value, CellFormat::default());
}

pub fn cover(pager: &mut Paginator, booking: &Booking, branding: &Branding) {
    pager.start_bare_page();
    let canvas = pager.canvas();
    canvas.bookmark("Cover");

    canvas.set_text_colour(palette::BRAND);
    canvas.set_font(FontSpec::bold(28.0));
    canvas.set_y(Mm(25.0));
    canvas.cell(
        Mm(0.0),
        Mm(15.0),
        &branding.brand_name,
        CellFormat::aligned(Align::Center).with_ln(),
    );
    canvas.set_font(FontSpec::regular(10.0));
    canvas.set_text_colour(palette::MUTED);
    canvas.cell(
        Mm(0.0),
        Mm(8.0),
        &branding.tagline,
        CellFormat::aligned(Align::Center).with_ln(),
    );

    canvas.set_fill_colour(palette::BRAND);
    canvas.rounded_rect(LEFT, Mm(55.0), FULL_WIDTH, Mm(50.0), Mm(5.0), ShapeStyle::Fill);
    canvas.set_text_colour(palette::WHITE);
    canvas.set_y(Mm(65.0));
    let nights = calculate_nights(&booking.departure_date, &booking.return_date);
    for (font, height, text) in [
        (
            FontSpec::bold(18.0),
            Mm(10.0),
            format!("Hi, {}!", booking.customer_name),
        ),
        (
            FontSpec::bold(22.0),
            Mm(12.0),
            format!("{} Itinerary", booking.destination),
        ),
        (FontSpec::regular(14.0), Mm(10.0), trip_length(nights)),
    ] {
        canvas.set_font(font);
        canvas.cell(
            Mm(0.0),
            height,
            &text,
            CellFormat::aligned(Align::Center).with_ln(),
        );
    }

    canvas.set_fill_colour(palette::MIST);
    canvas.set_draw_colour(palette::RULE);
    canvas.rounded_rect(
        LEFT,
        Mm(115.0),
        FULL_WIDTH,
        Mm(60.0),
        Mm(5.0),
        ShapeStyle::FillStroke,
    );
    canvas.set_text_colour(palette::INK);
    let details = [
        ("Departure From", booking.departure_from.clone()),
        ("Departure", format_date(&booking.departure_date)),
        ("Arrival", format_date(&booking.return_date)),
        ("Destination", booking.destination.clone()),
        ("No. Of Travellers", booking.travelers.to_string()),
    ];
    let mut y = Mm(125.0);
    for (label, value) in details {
        canvas.set_xy(TEXT_INSET, y);
        canvas.set_font(FontSpec::bold(9.0));
        canvas.cell(Mm(40.0), Mm(6.0), &format!("{label}:"), CellFormat::default());
        canvas.set_font(FontSpec::regular(9.0));
        canvas.cell(Mm(80.0), Mm(6.0), &value, CellFormat::default());
        y += Mm(8.0);
    }
}

/// Returns how many days were drawn
pub fn daily_itinerary(pager: &mut Paginator, booking: &Booking) -> usize {
    pager.start_new_page();
    pager.canvas().bookmark("Daily Itinerary");
    let first_day = match booking.days.first() {
        Some(day) => day_height(pager.canvas(), day),
        None => Mm::ZERO,
    };
    heading(pager, "Daily Itinerary", Mm(20.0), first_day);

    for (index, day) in booking.days.iter().enumerate() {
        render_day(pager, index, day, &booking.destination);
    }
    booking.days.len()
}

pub fn flights_and_hotels(
    pager: &mut Paginator,
    booking: &Booking,
    branding: &Branding,
) -> TableReport {
    pager.start_new_page();
    pager.canvas().bookmark("Flight Summary");
    let first_flight = if booking.flights.is_empty() {
        Mm::ZERO
    } else {
        FLIGHT_HEIGHT
    };
    heading(pager, "Flight Summary", Mm(15.0), first_flight);

    for flight in booking.flights.iter() {
        let y = pager.reserve(FLIGHT_HEIGHT);
        let canvas = pager.canvas();
        canvas.set_fill_colour(palette::MIST);
        canvas.rounded_rect(LEFT, y, FULL_WIDTH, Mm(15.0), Mm(3.0), ShapeStyle::Fill);
        canvas.set_xy(TEXT_INSET, y + Mm(3.0));
        canvas.set_font(FontSpec::regular(10.0));
        canvas.set_text_colour(palette::MUTED);
        canvas.cell(Mm(40.0), Mm(8.0), &format_date(&flight.date), CellFormat::default());
        canvas.set_text_colour(palette::INK);
        canvas.set_font(FontSpec::bold(10.0));
        canvas.cell(
            Mm(0.0),
            Mm(8.0),
            &format!("Fly {} From {} To {}.", flight.airline, flight.from, flight.to),
            CellFormat::default(),
        );
    }

    pager.advance(Mm(5.0));
    let y = pager.reserve(Mm(20.0));
    let canvas = pager.canvas();
    canvas.set_xy(LEFT, y);
    canvas.set_font(FontSpec::regular(8.0));
    canvas.set_text_colour(palette::MUTED);
    canvas.cell(Mm(0.0), Mm(5.0), &branding.flight_note, CellFormat::default());

    let columns = hotel_columns();
    let rows = hotel_rows(booking);
    let style = hotel_style();
    let table = Table::new(LEFT, &columns, &style);
    let lead = table.lead_height(pager.canvas(), &rows);
    heading(pager, "Hotel Bookings", Mm(15.0), lead);
    pager.canvas().bookmark("Hotel Bookings");
    table.render(pager, &rows)
}

fn hotel_style() -> TableStyle {
    TableStyle {
        header_height: Mm(8.0),
        header_font: FontSpec::bold(9.0),
        body_font: FontSpec::regular(8.0),
        rows: CellBox {
            line_height: Mm(6.0),
            padding_top: Mm::ZERO,
            padding_bottom: Mm::ZERO,
            min_height: Mm(6.0),
        },
        horizontal_padding: Mm(2.0),
        cell_borders: true,
        ..TableStyle::default()
    }
}

fn hotel_columns() -> [Column<'static>; 5] {
    [
        Column::centred("City", Mm(25.0)),
        Column::centred("Check In", Mm(25.0)),
        Column::centred("Check Out", Mm(25.0)),
        Column::centred("Nights", Mm(15.0)),
        Column::centred("Hotel Name", Mm(90.0)),
    ]
}

fn hotel_rows(booking: &Booking) -> Vec<Vec<String>> {
    booking
        .hotels
        .iter()
        .map(|hotel| {
            vec![
                hotel.city.clone(),
                format_date(&hotel.check_in),
                format_date(&hotel.check_out),
                hotel.nights.to_string(),
                hotel.name.clone(),
            ]
        })
        .collect()
}

/// One row per hotel stay
pub fn hotel_table(pager: &mut Paginator, booking: &Booking) -> TableReport {
    let columns = hotel_columns();
    let style = hotel_style();
    Table::new(LEFT, &columns, &style).render(pager, &hotel_rows(booking))
}

/// Important notes followed by the scope of service, on a page of their own
pub fn notes_and_scope(pager: &mut Paginator) {
    pager.start_new_page();
    pager.canvas().bookmark("Important Notes");

    let style = TableStyle::default();
    let columns = [
        Column::wrapped("Point", Mm(50.0), Align::Center),
        Column::wrapped("Details", Mm(130.0), Align::Left),
    ];
    let rows: Vec<Vec<String>> = NOTES
        .iter()
        .map(|point| vec![point.to_string(), NOTE_DETAIL.to_string()])
        .collect();
    titled_table(
        pager,
        "Important Notes",
        &Table::new(LEFT, &columns, &style),
        &rows,
    );

    pager.advance(Mm(10.0));
    let columns = [
        Column::wrapped("Service", Mm(60.0), Align::Center),
        Column::wrapped("Details", Mm(120.0), Align::Left),
    ];
    let rows: Vec<Vec<String>> = SERVICES
        .iter()
        .map(|(service, details)| vec![service.to_string(), details.to_string()])
        .collect();
    let table = Table::new(LEFT, &columns, &style);
    let lead = table.lead_height(pager.canvas(), &rows);
    heading(pager, "Scope Of Service", Mm(15.0), lead);
    pager.canvas().bookmark("Scope Of Service");
    table.render(pager, &rows);
}

fn activity_style() -> TableStyle {
    TableStyle {
        header_height: Mm(8.0),
        rows: CellBox {
            line_height: Mm(5.0),
            padding_top: Mm(3.0),
            padding_bottom: Mm(3.0),
            min_height: Mm(12.0),
        },
        cell_borders: true,
        ..TableStyle::default()
    }
}

/// Every activity of the trip in one table, then the terms and conditions link
pub fn activity_table(
    pager: &mut Paginator,
    booking: &Booking,
    branding: &Branding,
) -> TableReport {
    pager.start_new_page();
    pager.canvas().bookmark("Activity Table");

    let columns = [
        Column::centred("City", Mm(35.0)),
        Column::wrapped("Activity", Mm(80.0), Align::Left),
        Column::centred("Type", Mm(35.0)),
        Column::centred("Time Required", Mm(30.0)),
    ];
    let rows: Vec<Vec<String>> = booking
        .activities()
        .map(|activity| {
            vec![
                booking.destination.clone(),
                activity.title.clone(),
                activity.kind.clone(),
                format_duration(activity.duration, &activity.time),
            ]
        })
        .collect();
    let style = activity_style();
    let report = titled_table(
        pager,
        "Activity Table",
        &Table::new(LEFT, &columns, &style),
        &rows,
    );

    pager.advance(Mm(15.0));
    heading(pager, "Terms and Conditions", Mm(10.0), Mm(8.0));
    let y = pager.reserve(Mm(8.0));
    let canvas = pager.canvas();
    canvas.set_xy(LEFT, y);
    canvas.set_text_colour(palette::BRAND);
    canvas.set_font(FontSpec::regular(10.0).underlined());
    canvas.cell(Mm(0.0), Mm(8.0), &branding.terms_label, CellFormat::default());

    report
}

fn installment_style() -> TableStyle {
    TableStyle {
        body_font: FontSpec::regular(10.0),
        rows: CellBox {
            line_height: Mm(5.0),
            padding_top: Mm(2.5),
            padding_bottom: Mm(2.5),
            min_height: Mm(10.0),
        },
        cell_borders: true,
        ..TableStyle::default()
    }
}

/// Price, installments, visa details and the closing call to action
pub fn payment_and_visa(pager: &mut Paginator, booking: &Booking, branding: &Branding) {
    pager.start_new_page();
    pager.canvas().bookmark("Payment Plan");
    heading(pager, "Payment Plan", Mm(20.0), Mm(24.0));

    summary_panel(
        pager,
        "Total Amount",
        &format!(
            "{} For {} Pax (Inclusive Of GST)",
            money(booking.total_amount),
            booking.travelers
        ),
        Mm(24.0),
    );
    summary_panel(pager, "TCS", "Not Collected", Mm(29.0));

    let columns = [
        Column::centred("Installment", Mm(60.0)),
        Column::centred("Amount", Mm(60.0)),
        Column::centred("Due Date", Mm(60.0)),
    ];
    let rows = vec![
        vec![
            "Installment 1".to_string(),
            money(booking.installment1),
            "Initial Payment".to_string(),
        ],
        vec![
            "Installment 2".to_string(),
            money(booking.installment2),
            "Post Visa Approval".to_string(),
        ],
        vec![
            "Installment 3".to_string(),
            "Remaining".to_string(),
            "20 Days Before Departure".to_string(),
        ],
    ];
    let style = installment_style();
    Table::new(LEFT, &columns, &style).render(pager, &rows);

    pager.advance(Mm(15.0));
    heading(pager, "Visa Details", Mm(15.0), VISA_PANEL_HEIGHT);
    pager.canvas().bookmark("Visa Details");
    let y = pager.reserve(VISA_PANEL_HEIGHT);
    let canvas = pager.canvas();
    canvas.set_fill_colour(palette::MIST);
    canvas.rounded_rect(LEFT, y, FULL_WIDTH, Mm(35.0), Mm(5.0), ShapeStyle::Fill);
    canvas.set_text_colour(palette::INK);
    let visa = &branding.visa;
    let mut row_y = y + Mm(8.0);
    for (label, value) in [
        ("Visa Type:", &visa.visa_type),
        ("Validity:", &visa.validity),
        ("Processing Date:", &visa.processing_date),
    ] {
        canvas.set_xy(TEXT_INSET, row_y);
        canvas.set_font(FontSpec::bold(11.0));
        canvas.cell(Mm(40.0), Mm(6.0), label, CellFormat::default());
        canvas.set_font(FontSpec::regular(11.0));
        canvas.cell(Mm(0.0), Mm(6.0), value, CellFormat::default());
        row_y += Mm(8.0);
    }

    let y = pager.reserve(Mm(15.0));
    let canvas = pager.canvas();
    canvas.set_y(y);
    canvas.set_text_colour(palette::BRAND_DARK);
    canvas.set_font(FontSpec::bold(24.0));
    canvas.cell(
        Mm(0.0),
        Mm(15.0),
        &branding.slogan,
        CellFormat::aligned(Align::Center),
    );

    let y = pager.reserve(Mm(20.0));
    let canvas = pager.canvas();
    let button_y = y + Mm(5.0);
    let button_height = Mm(15.0);
    canvas.set_fill_colour(palette::BRAND_DARK);
    canvas.rounded_rect(
        Mm(75.0),
        button_y,
        Mm(60.0),
        button_height,
        button_height / 2.0,
        ShapeStyle::Fill,
    );
    canvas.set_text_colour(palette::WHITE);
    canvas.set_font(FontSpec::bold(12.0));
    canvas.set_y(button_y + button_height / 2.0 - Mm(4.0));
    canvas.cell(
        Mm(0.0),
        Mm(8.0),
        &branding.call_to_action,
        CellFormat::aligned(Align::Center),
    );
}
