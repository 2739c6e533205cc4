//! Small text formatting helpers: dates, nights, durations, money and file names.

use chrono::NaiveDate;

const INPUT_DATE: &str = "%Y-%m-%d";
const DISPLAY_DATE: &str = "%d %b, %Y";

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, INPUT_DATE).ok()
}

/// `2025-06-01` becomes `01 Jun, 2025`. Anything that isn't a `YYYY-MM-DD` date becomes an
/// empty string, so one bad date never stops a document from being built.
pub fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => parsed.format(DISPLAY_DATE).to_string(),
        None => {
            log::warn!("couldn't parse date {date:?}, leaving it blank");
            String::new()
        }
    }
}

/// Whole nights between departure and return; 0 if either date is malformed or the return
/// comes first
pub fn calculate_nights(departure: &str, return_date: &str) -> u32 {
    match (parse_date(departure), parse_date(return_date)) {
        (Some(from), Some(to)) => {
            let nights = (to - from).num_days();
            if nights < 0 {
                log::warn!("return date {return_date} is before departure {departure}");
            }
            nights.clamp(0, u32::MAX as i64) as u32
        }
        _ => {
            log::warn!("couldn't parse trip dates {departure:?} / {return_date:?}");
            0
        }
    }
}

/// "5 Days 4 Nights"
pub fn trip_length(nights: u32) -> String {
    format!("{} Days {} Nights", nights + 1, nights)
}

/// How long an activity takes, for the activity table. Without a duration the time of day
/// label is used to guess.
pub fn format_duration(minutes: u32, time: &str) -> String {
    if minutes > 0 {
        if minutes < 60 {
            return format!("{minutes} Minutes");
        }
        let (hours, rest) = (minutes / 60, minutes % 60);
        return match (hours, rest) {
            (1, 0) => "1 Hour".to_string(),
            (h, 0) => format!("{h} Hours"),
            (h, m) => format!("{h}:{m:02} Hours"),
        };
    }

    let time = time.to_lowercase();
    if ["morning", "afternoon", "evening"]
        .iter()
        .any(|slot| time.contains(slot))
    {
        "2-3 Hours".to_string()
    } else if time.contains("full day") || time.contains("all day") {
        "Full Day".to_string()
    } else if time.contains("half day") {
        "Half Day".to_string()
    } else {
        "2-3 Hours".to_string()
    }
}

/// `Rs. 150000`, rounded to whole rupees
pub fn money(amount: f64) -> String {
    format!("Rs. {amount:.0}")
}

/// Keep ASCII letters and digits, turn spaces, underscores and hyphens into underscores and
/// drop everything else
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter_map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' => Some(ch),
            ' ' | '_' | '-' => Some('_'),
            _ => None,
        })
        .collect()
}

/// `{customer}_{destination}_itinerary_{unix}.pdf`
pub fn itinerary_file_name(customer: &str, destination: &str, unix_time: i64) -> String {
    format!(
        "{}_{}_itinerary_{}.pdf",
        sanitize_file_name(customer),
        sanitize_file_name(destination),
        unix_time
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dates() {
        assert_eq!(format_date("2025-06-01"), "01 Jun, 2025");
        assert_eq!(format_date("2024-12-31"), "31 Dec, 2024");
        assert_eq!(format_date("not-a-date"), "");
        assert_eq!(format_date("2025-02-30"), "");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn nights() {
        assert_eq!(calculate_nights("2025-06-01", "2025-06-05"), 4);
        assert_eq!(trip_length(4), "5 Days 4 Nights");
        assert_eq!(calculate_nights("2025-06-01", "2025-06-01"), 0);
        assert_eq!(calculate_nights("2025-06-05", "2025-06-01"), 0);
        assert_eq!(calculate_nights("soon", "2025-06-01"), 0);
        assert_eq!(calculate_nights("2024-02-28", "2024-03-01"), 2);
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(90, ""), "1:30 Hours");
        assert_eq!(format_duration(60, ""), "1 Hour");
        assert_eq!(format_duration(45, ""), "45 Minutes");
        assert_eq!(format_duration(180, "Morning"), "3 Hours");
        assert_eq!(format_duration(125, ""), "2:05 Hours");
        assert_eq!(format_duration(0, "Morning"), "2-3 Hours");
        assert_eq!(format_duration(0, "Late Evening"), "2-3 Hours");
        assert_eq!(format_duration(0, "Full Day"), "Full Day");
        assert_eq!(format_duration(0, "all day"), "Full Day");
        assert_eq!(format_duration(0, "Half Day"), "Half Day");
        assert_eq!(format_duration(0, "Night"), "2-3 Hours");
    }

    #[test]
    fn money_is_rounded() {
        assert_eq!(money(150000.0), "Rs. 150000");
        assert_eq!(money(49999.6), "Rs. 50000");
    }

    #[test]
    fn sanitizing() {
        assert_eq!(sanitize_file_name("Rahul Sharma"), "Rahul_Sharma");
        assert_eq!(sanitize_file_name("St. John's-Wood_1"), "St_Johns_Wood_1");
        assert_eq!(sanitize_file_name("Zürich"), "Zrich");
        assert_eq!(sanitize_file_name("../../etc"), "etc");
    }

    #[test]
    fn sanitizing_is_idempotent() {
        for name in ["Rahul Sharma", "a--b  c", "Ünïcødé ☃", "", "x/y\\z", "__"] {
            let once = sanitize_file_name(name);
            assert_eq!(sanitize_file_name(&once), once);
        }
    }

    #[test]
    fn file_names() {
        assert_eq!(
            itinerary_file_name("Rahul Sharma", "Singapore", 1748736000),
            "Rahul_Sharma_Singapore_itinerary_1748736000.pdf"
        );
    }
}
