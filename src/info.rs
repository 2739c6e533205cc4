use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata such as title, author, etc
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document, as a comma separated list
    pub keywords: Option<String>,
    /// When the document was made. Defaults to the moment it is written.
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Metadata for one customer's itinerary
    pub fn for_itinerary(company: &str, customer: &str, destination: &str) -> Info {
        let mut info = Info::new();
        info.title(format!("{destination} Itinerary"))
            .author(company)
            .subject(format!("Travel itinerary for {customer}"))
            .keywords(format!("itinerary, {destination}"));
        info
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn created(&mut self, created: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(created));
    }
}

fn pdf_date(when: DateTime<FixedOffset>) -> PDate {
    let offset = when.offset().local_minus_utc();
    let offset_hours = offset / (60 * 60);
    let offset_minutes = ((offset - (offset_hours * (60 * 60))) / 60).abs();
    PDate::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itinerary_metadata_names_the_trip() {
        let info = Info::for_itinerary("Vigovia Tech Pvt. Ltd", "Rahul", "Singapore");
        assert_eq!(info.title.as_deref(), Some("Singapore Itinerary"));
        assert_eq!(info.author.as_deref(), Some("Vigovia Tech Pvt. Ltd"));
        assert_eq!(info.subject.as_deref(), Some("Travel itinerary for Rahul"));
    }

    #[test]
    fn writes_an_info_dictionary() {
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        let mut info = Info::for_itinerary("Acme", "Ann", "Oslo");
        info.created(
            DateTime::parse_from_rfc3339("2025-06-01T09:30:00+05:30").unwrap(),
        );
        info.write(&mut refs, &mut writer);
        assert!(refs.get(RefType::Info).is_some());
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(Oslo Itinerary)"));
        assert!(text.contains("D:20250601093000"));
    }
}
