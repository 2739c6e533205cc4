use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything about a generated itinerary that isn't part of the booking. The defaults
/// reproduce the standard Vigovia document; a config file only needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub branding: Branding,
    pub output: OutputConfig,
    /// TrueType faces to embed instead of the built-in Helvetica
    pub fonts: Option<FontPaths>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    pub brand_name: String,
    pub tagline: String,
    /// Large closing line above the call to action
    pub slogan: String,
    pub company_name: String,
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    pub terms_label: String,
    pub flight_note: String,
    pub call_to_action: String,
    pub visa: VisaDetails,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            brand_name: "vigovia".to_string(),
            tagline: "PLAN.PACK.GO".to_string(),
            slogan: "PLAN.PACK.GO!".to_string(),
            company_name: "Vigovia Tech Pvt. Ltd".to_string(),
            address: vec![
                "Registered Office: Hd-109 Cinnabar Hills,".to_string(),
                "Links Business Park, Karnataka, India.".to_string(),
            ],
            phone: "+91-99X9999999".to_string(),
            email: "contact@Vigovia.Com".to_string(),
            terms_label: "View all terms and conditions".to_string(),
            flight_note: "Note: All Flights Include Meals, Seat Choice (Excluding XL), And \
                          20kg/25Kg Checked Baggage."
                .to_string(),
            call_to_action: "Book Now".to_string(),
            visa: VisaDetails::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisaDetails {
    pub visa_type: String,
    pub validity: String,
    pub processing_date: String,
}

impl Default for VisaDetails {
    fn default() -> Self {
        VisaDetails {
            visa_type: "Tourist".to_string(),
            validity: "30 Days".to_string(),
            processing_date: "14/06/2025".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Where documents are written
    pub dir: PathBuf,
    /// Remove earlier `*.pdf` documents from `dir` before writing a new one
    pub purge_existing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("pdfs"),
            purge_existing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPaths {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let json = std::fs::read_to_string(path)?;
        Config::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_is_the_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_configs_only_override_what_they_name() {
        let config = Config::from_json(
            r#"{
                "branding": { "brandName": "wanderly", "visa": { "validity": "60 Days" } },
                "output": { "purgeExisting": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.branding.brand_name, "wanderly");
        assert_eq!(config.branding.tagline, "PLAN.PACK.GO");
        assert_eq!(config.branding.visa.validity, "60 Days");
        assert_eq!(config.branding.visa.visa_type, "Tourist");
        assert!(config.output.purge_existing);
        assert_eq!(config.output.dir, PathBuf::from("pdfs"));
        assert_eq!(config.fonts, None);
    }

    #[test]
    fn font_paths_need_both_faces() {
        assert!(Config::from_json(r#"{ "fonts": { "regular": "a.ttf" } }"#).is_err());
        let config =
            Config::from_json(r#"{ "fonts": { "regular": "a.ttf", "bold": "b.ttf" } }"#).unwrap();
        assert_eq!(config.fonts.unwrap().bold, PathBuf::from("b.ttf"));
    }
}
