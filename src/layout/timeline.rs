use super::Paginator;
use crate::booking::Day;
use crate::canvas::{Align, Canvas, CellFormat, FontSpec, ShapeStyle};
use crate::colour::palette;
use crate::format::format_date;
use crate::units::Mm;

/// Space a day takes before its first activity: marker, date and summary line
pub const BASE_HEIGHT: Mm = Mm(30.0);
/// Least space an activity takes on the timeline
pub const ACTIVITY_HEIGHT: Mm = Mm(25.0);

const MARKER_X: Mm = Mm(25.0);
const MARKER_RADIUS: Mm = Mm(12.0);
const HEADING_X: Mm = Mm(45.0);
const TIMELINE_X: Mm = Mm(120.0);
const DOT_RADIUS: Mm = Mm(3.0);
const TEXT_X: Mm = Mm(128.0);
const DESCRIPTION_WIDTH: Mm = Mm(65.0);
const DESCRIPTION_LINE: Mm = Mm(4.0);
const TIME_LINE: Mm = Mm(5.0);
/// Gap kept between the end of one activity's description and the next dot
const ACTIVITY_GAP: Mm = Mm(8.0);

const TIME_FONT: FontSpec = FontSpec::bold(9.0);
const DESCRIPTION_FONT: FontSpec = FontSpec::regular(8.0);

fn description(text: &str) -> String {
    format!("- {text}")
}

/// Vertical space each of a day's activities takes, from the wrapped length of its
/// description
pub fn activity_heights(canvas: &mut dyn Canvas, day: &Day) -> Vec<Mm> {
    canvas.set_font(DESCRIPTION_FONT);
    day.activities
        .iter()
        .map(|activity| {
            let lines = canvas.line_count(&description(&activity.description), DESCRIPTION_WIDTH);
            let natural = TIME_LINE + DESCRIPTION_LINE * lines as f32 + ACTIVITY_GAP;
            natural.max(ACTIVITY_HEIGHT)
        })
        .collect()
}

/// Total height of a day block
pub fn day_height(canvas: &mut dyn Canvas, day: &Day) -> Mm {
    BASE_HEIGHT + activity_heights(canvas, day).into_iter().sum::<Mm>()
}

/// Draws one day of the itinerary as a block that is never split: if it doesn't fit below
/// the cursor, the page breaks before the day starts. `index` is the day's 0-based position.
///
/// Returns the height the day took.
pub fn render_day(pager: &mut Paginator, index: usize, day: &Day, destination: &str) -> Mm {
    let heights = activity_heights(pager.canvas(), day);
    let height = BASE_HEIGHT + heights.iter().copied().sum::<Mm>();
    let top = pager.reserve(height);
    let canvas = pager.canvas();

    // numbered marker
    canvas.set_fill_colour(palette::BRAND_DARK);
    canvas.circle(MARKER_X, top + Mm(15.0), MARKER_RADIUS, ShapeStyle::Fill);
    canvas.set_text_colour(palette::WHITE);
    canvas.set_font(FontSpec::bold(10.0));
    canvas.set_xy(MARKER_X - MARKER_RADIUS, top + Mm(9.0));
    canvas.cell(MARKER_RADIUS * 2.0, Mm(6.0), "Day", CellFormat::aligned(Align::Center));
    canvas.set_font(FontSpec::bold(12.0));
    canvas.set_xy(MARKER_X - MARKER_RADIUS, top + Mm(15.0));
    canvas.cell(
        MARKER_RADIUS * 2.0,
        Mm(6.0),
        &(index + 1).to_string(),
        CellFormat::aligned(Align::Center),
    );

    // date and summary
    canvas.set_xy(HEADING_X, top + Mm(10.0));
    canvas.set_text_colour(palette::INK);
    canvas.set_font(FontSpec::bold(12.0));
    canvas.cell(Mm(0.0), Mm(8.0), &format_date(&day.date), CellFormat::default());
    canvas.ln(Mm(6.0));
    canvas.set_x(HEADING_X);
    canvas.set_font(FontSpec::regular(10.0));
    canvas.cell(
        Mm(0.0),
        Mm(6.0),
        &format!("Arrival in {destination} & City Exploration"),
        CellFormat::default(),
    );

    // activities
    let mut dot_y = top + Mm(10.0);
    let count = day.activities.len();
    for (i, (activity, step)) in day.activities.iter().zip(heights).enumerate() {
        canvas.set_fill_colour(palette::BRAND);
        canvas.circle(TIMELINE_X, dot_y, DOT_RADIUS, ShapeStyle::Fill);
        if i + 1 < count {
            canvas.set_draw_colour(palette::CONNECTOR);
            canvas.line(
                TIMELINE_X,
                dot_y + DOT_RADIUS,
                TIMELINE_X,
                dot_y + step - DOT_RADIUS - Mm(2.0),
            );
        }

        canvas.set_xy(TEXT_X, dot_y - Mm(3.0));
        canvas.set_text_colour(palette::INK);
        canvas.set_font(TIME_FONT);
        canvas.cell(Mm(0.0), TIME_LINE, &activity.time, CellFormat::default());
        canvas.ln(TIME_LINE);
        canvas.set_x(TEXT_X);
        canvas.set_font(DESCRIPTION_FONT);
        canvas.multi_cell(
            DESCRIPTION_WIDTH,
            DESCRIPTION_LINE,
            &description(&activity.description),
            Align::Left,
        );

        dot_y += step;
    }

    canvas.set_y(top + height);
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Activity;
    use crate::canvas::{RecordingCanvas, Shape};
    use crate::layout::{NoHeader, PageGeometry};

    fn activity(description: &str) -> Activity {
        Activity {
            time: "Morning".to_string(),
            title: "Gardens by the Bay".to_string(),
            description: description.to_string(),
            duration: 0,
            kind: "Sightseeing".to_string(),
        }
    }

    fn day(activities: Vec<Activity>) -> Day {
        Day {
            date: "2025-06-01".to_string(),
            activities,
        }
    }

    #[test]
    fn days_without_activities_take_the_base_height() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &NoHeader);
        pager.start_new_page();
        let height = render_day(&mut pager, 0, &day(vec![]), "Singapore");
        assert_eq!(height, BASE_HEIGHT);
        assert_eq!(pager.y(), Mm(40.0) + BASE_HEIGHT);
        assert_eq!(pager.cursor().page_index, 0);
        drop(pager);

        let texts = canvas.surface().texts_on(0);
        assert_eq!(
            texts,
            vec!["Day", "1", "01 Jun, 2025", "Arrival in Singapore & City Exploration"]
        );
        assert!(!canvas
            .surface()
            .shapes()
            .any(|(_, shape, _)| matches!(shape, Shape::Line { .. })));
    }

    #[test]
    fn short_activities_take_the_standard_slot() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        canvas.add_page();
        let d = day(vec![activity("Visit the zoo"), activity("Night safari")]);
        assert_eq!(day_height(&mut canvas, &d), BASE_HEIGHT + ACTIVITY_HEIGHT * 2.0);
    }

    #[test]
    fn long_descriptions_stretch_their_slot() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        canvas.add_page();
        let d = day(vec![activity(&lipsum::lipsum(120))]);
        let heights = activity_heights(&mut canvas, &d);
        assert!(heights[0] > ACTIVITY_HEIGHT);
    }

    #[test]
    fn the_last_activity_has_no_connector() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &NoHeader);
        pager.start_new_page();
        let d = day(vec![activity("a"), activity("b"), activity("c")]);
        render_day(&mut pager, 2, &d, "Singapore");
        drop(pager);

        let lines = canvas
            .surface()
            .shapes()
            .filter(|(_, shape, _)| matches!(shape, Shape::Line { .. }))
            .count();
        assert_eq!(lines, 2);
        assert_eq!(canvas.surface().pages_showing("3"), vec![0]);
    }

    #[test]
    fn days_that_do_not_fit_move_to_the_next_page() {
        let mut canvas = RecordingCanvas::recording(PageGeometry::a4());
        let mut pager = Paginator::new(&mut canvas, PageGeometry::a4(), &NoHeader);
        pager.start_new_page();
        pager.advance(Mm(180.0));
        let d = day(vec![activity("a"), activity("b"), activity("c")]);
        render_day(&mut pager, 0, &d, "Singapore");
        assert_eq!(pager.cursor().page_index, 1);
        drop(pager);
        assert_eq!(canvas.surface().pages_showing("01 Jun, 2025"), vec![1]);
    }
}
