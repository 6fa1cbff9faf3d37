use askama::Template;

/// Questionnaire page the call-to-action links to. The race slug is appended
/// as the `race` query parameter.
pub const QUESTIONNAIRE_URL: &str =
    "https://wattgod.github.io/athlete-profiles/athlete-questionnaire.html";

pub const DEVICES: &[&str] = &[
    "Garmin",
    "Wahoo",
    "Hammerhead",
    "Zwift",
    "TrainerRoad",
    "TrainingPeaks",
];

pub const INCLUDES: &[&str] = &[
    "Custom structured workouts",
    "ZWO files for all platforms",
    "Personalized race guide",
    "Race-specific strategy",
];

#[derive(Template)]
#[template(path = "training_plans_style.html", escape = "none")]
pub struct TrainingPlansStyle;

// Values are interpolated verbatim, callers own any escaping.
#[derive(Template)]
#[template(path = "training_plans_section.html", escape = "none")]
pub struct TrainingPlansSection<'a> {
    /// Display name of the race, e.g. "SBT GRVL"
    pub race_name: &'a str,

    /// URL-safe race identifier, passed through without percent-encoding
    pub race_slug: &'a str,

    /// Completes the subtitle sentence after "<race_name>'s"
    pub race_challenge: &'a str,

    pub devices: &'static [&'static str],

    pub includes: &'static [&'static str],
}

impl<'a> TrainingPlansSection<'a> {
    pub fn new(race_name: &'a str, race_slug: &'a str, race_challenge: &'a str) -> Self {
        TrainingPlansSection {
            race_name,
            race_slug,
            race_challenge,
            devices: DEVICES,
            includes: INCLUDES,
        }
    }

    pub fn questionnaire_url(&self) -> String {
        format!("{}?race={}", QUESTIONNAIRE_URL, self.race_slug)
    }
}
