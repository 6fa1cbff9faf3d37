use tracing::{debug, error};

mod error;
pub mod race;
pub mod templates;

pub use error::SectionError;
pub use race::{CourseDescription, Race, RaceData};
pub use templates::{QUESTIONNAIRE_URL, TrainingPlansSection, TrainingPlansStyle};

pub fn render_template<T: askama::Template>(template: T) -> String {
    match template.render() {
        Ok(html) => html.trim().to_string(),
        Err(err) => {
            error!("Template rendering error: {}", err);
            "<section class=\"gg-training-section\" id=\"training\"></section>".to_string()
        }
    }
}

/// Renders the Training Plans section: the inline stylesheet followed by the
/// section markup, with a call-to-action linking to the questionnaire for
/// `race_slug`.
pub fn render_training_plans_section(
    race_name: &str,
    race_slug: &str,
    race_challenge: &str,
) -> String {
    render_template(TrainingPlansSection::new(
        race_name,
        race_slug,
        race_challenge,
    ))
}

/// The section's `<style>` block on its own
pub fn training_plans_css() -> String {
    render_template(TrainingPlansStyle)
}

/// Entry point for the landing page generator: derives name, slug and
/// challenge from the race record and renders the section.
pub fn generate_training_plans_html(data: &RaceData) -> Result<String, SectionError> {
    let race = data.race()?;
    let race_challenge = race.race_challenge();
    debug!(
        "Rendering training plans section for {} ({})",
        race.race_name(),
        race.race_slug()
    );

    Ok(render_training_plans_section(
        race.race_name(),
        race.race_slug(),
        &race_challenge,
    ))
}
