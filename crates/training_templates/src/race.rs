use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SectionError;

pub const FALLBACK_RACE_NAME: &str = "This Race";
pub const FALLBACK_RACE_SLUG: &str = "race";
pub const FALLBACK_RACE_CHALLENGE: &str = "unique demands and challenging terrain";

/// Race data as supplied by the landing page generator.
///
/// Only `race` is required; everything under it is optional and any other
/// keys in the source document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceData {
    #[serde(default)]
    pub race: Option<Race>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Race {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    /// Hand-written challenge phrase, used as is when set
    #[serde(default)]
    pub race_challenge_tagline: Option<String>,

    #[serde(default)]
    pub course_description: Option<CourseDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDescription {
    #[serde(default)]
    pub signature_challenge: Option<String>,

    #[serde(default)]
    pub character: Option<String>,
}

impl RaceData {
    pub fn from_json(json: &str) -> Result<Self, SectionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SectionError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The SBT GRVL record, used by the demo binary and tests
    pub fn sample() -> Self {
        RaceData {
            race: Some(Race {
                display_name: Some("SBT GRVL".to_string()),
                name: Some("SBT GRVL".to_string()),
                slug: Some("sbt-grvl".to_string()),
                race_challenge_tagline: Some(
                    "altitude demands and 8,000+ feet of climbing at elevation".to_string(),
                ),
                course_description: Some(CourseDescription {
                    signature_challenge: Some(
                        "The altitude. Everything else is manageable.".to_string(),
                    ),
                    character: Some("Fast champagne gravel at altitude".to_string()),
                }),
            }),
        }
    }

    pub fn race(&self) -> Result<&Race, SectionError> {
        self.race.as_ref().ok_or(SectionError::MissingField("race"))
    }
}

impl Race {
    pub fn race_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(FALLBACK_RACE_NAME)
    }

    pub fn race_slug(&self) -> &str {
        self.slug.as_deref().unwrap_or(FALLBACK_RACE_SLUG)
    }

    /// First non-empty of: the tagline verbatim, the course's signature
    /// challenge lower-cased, the course character lower-cased, then a
    /// generic phrase.
    pub fn race_challenge(&self) -> String {
        if let Some(tagline) = non_empty(&self.race_challenge_tagline) {
            return tagline.to_string();
        }

        let course = self.course_description.as_ref();
        if let Some(challenge) = course.and_then(|c| non_empty(&c.signature_challenge)) {
            debug!("No challenge tagline, using signature challenge");
            return challenge.to_lowercase();
        }
        if let Some(character) = course.and_then(|c| non_empty(&c.character)) {
            debug!("No challenge tagline, using course character");
            return character.to_lowercase();
        }

        debug!("No challenge data, using fallback phrase");
        FALLBACK_RACE_CHALLENGE.to_string()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(signature_challenge: Option<&str>, character: Option<&str>) -> CourseDescription {
        CourseDescription {
            signature_challenge: signature_challenge.map(str::to_string),
            character: character.map(str::to_string),
        }
    }

    #[test]
    fn name_prefers_display_name_then_name() {
        let mut race = Race {
            display_name: Some("Unbound Gravel".to_string()),
            name: Some("Unbound".to_string()),
            ..Default::default()
        };
        assert_eq!(race.race_name(), "Unbound Gravel");

        race.display_name = None;
        assert_eq!(race.race_name(), "Unbound");

        race.name = None;
        assert_eq!(race.race_name(), FALLBACK_RACE_NAME);
    }

    #[test]
    fn present_but_empty_name_is_kept() {
        let race = Race {
            display_name: Some(String::new()),
            name: Some("Unbound".to_string()),
            ..Default::default()
        };
        assert_eq!(race.race_name(), "");
    }

    #[test]
    fn slug_falls_back_to_race() {
        assert_eq!(Race::default().race_slug(), "race");
        let race = Race {
            slug: Some("mid-south".to_string()),
            ..Default::default()
        };
        assert_eq!(race.race_slug(), "mid-south");
    }

    #[test]
    fn tagline_wins_and_is_not_lowercased() {
        let race = Race {
            race_challenge_tagline: Some("Altitude And Wind".to_string()),
            course_description: Some(course(Some("The Heat"), Some("Rolling"))),
            ..Default::default()
        };
        assert_eq!(race.race_challenge(), "Altitude And Wind");
    }

    #[test]
    fn empty_tagline_falls_through_to_signature_challenge() {
        let race = Race {
            race_challenge_tagline: Some(String::new()),
            course_description: Some(course(Some("The Heat Is Brutal."), Some("Rolling"))),
            ..Default::default()
        };
        assert_eq!(race.race_challenge(), "the heat is brutal.");
    }

    #[test]
    fn character_used_when_signature_challenge_empty() {
        let race = Race {
            course_description: Some(course(Some(""), Some("Fast Champagne Gravel"))),
            ..Default::default()
        };
        assert_eq!(race.race_challenge(), "fast champagne gravel");
    }

    #[test]
    fn challenge_falls_back_to_generic_phrase() {
        assert_eq!(Race::default().race_challenge(), FALLBACK_RACE_CHALLENGE);

        let race = Race {
            course_description: Some(course(Some(""), Some(""))),
            ..Default::default()
        };
        assert_eq!(race.race_challenge(), FALLBACK_RACE_CHALLENGE);
    }

    #[test]
    fn missing_race_key_is_an_error() {
        let data = RaceData::from_json(r#"{"slug": "orphan"}"#).unwrap();
        assert!(matches!(data.race(), Err(SectionError::MissingField("race"))));
    }

    #[test]
    fn parses_partial_record_and_ignores_unknown_keys() {
        let data = RaceData::from_json(
            r#"{
                "race": {
                    "name": "Belgian Waffle Ride",
                    "distance_miles": 137,
                    "course_description": {"character": "Dirt, cobbles and singletrack"}
                },
                "meta": {"version": 3}
            }"#,
        )
        .unwrap();
        let race = data.race().unwrap();
        assert_eq!(race.race_name(), "Belgian Waffle Ride");
        assert_eq!(race.race_slug(), "race");
        assert_eq!(race.race_challenge(), "dirt, cobbles and singletrack");
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            RaceData::from_json("{not json"),
            Err(SectionError::Json(_))
        ));
    }
}
