//! Band composition for geographic subjects

use crate::knowledge::{Band, GeographicProfile};
use crate::random::RandomSource;

use super::SubjectBrief;

/// Lettering style when a profile has none
pub const DEFAULT_TYPOGRAPHY: &str = "a bold, modern font";

/// Key-elements text used by the minimal template when the user gave none
pub const DEFAULT_ELEMENTS: &str = "Include local landmarks and cultural elements";

const CLOSING_STYLE: &str = "Style: Vibrant colors with high contrast, reminiscent of classic skateboard art with bold lines and dynamic composition.";

/// Resolved band text for one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionPlan {
    pub top: String,
    pub upper_middle: String,
    pub lower_middle: String,
    pub foreground: String,
    pub details: String,
    pub typography: String,
}

impl CompositionPlan {
    /// Resolve a profile against a brief
    ///
    /// Bands are resolved top to bottom. User key elements replace the
    /// lower-middle band and easter eggs replace the details band; a replaced
    /// band draws no randomness.
    pub fn resolve(
        profile: &GeographicProfile,
        brief: &SubjectBrief,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let mut pick = |band: Band| select(profile.candidates(band), brief.variation, rng);

        let top = pick(Band::Top);
        let upper_middle = pick(Band::UpperMiddle);
        let lower_middle = match brief.key_elements() {
            Some(text) => text.to_string(),
            None => pick(Band::LowerMiddle),
        };
        let foreground = pick(Band::Foreground);
        let details = match brief.easter_eggs() {
            Some(text) => text.to_string(),
            None => pick(Band::Details),
        };

        Self {
            top,
            upper_middle,
            lower_middle,
            foreground,
            details,
            typography: profile
                .typography()
                .unwrap_or(DEFAULT_TYPOGRAPHY)
                .to_string(),
        }
    }

    /// Text for a band
    pub fn band(&self, band: Band) -> &str {
        match band {
            Band::Top => &self.top,
            Band::UpperMiddle => &self.upper_middle,
            Band::LowerMiddle => &self.lower_middle,
            Band::Foreground => &self.foreground,
            Band::Details => &self.details,
        }
    }

    /// Render the full scaffolded prompt
    pub fn to_prompt(&self, subject: &str) -> String {
        let mut prompt = format!(
            "A single continuous, uncropped vertical skateboard deck illustration of {}, flowing naturally from top to bottom with seamless visual transitions.\n\n",
            subject
        );

        for band in Band::ALL {
            prompt.push_str(band.label());
            prompt.push_str(": ");
            prompt.push_str(self.band(band));
            prompt.push('\n');
        }

        prompt.push_str(&format!(
            "\nThe only text should be \"{}\" at the very bottom, styled in {}.\n",
            subject, self.typography
        ));
        prompt.push_str(CLOSING_STYLE);
        prompt
    }
}

/// Selection policy: random in variation mode, otherwise the first candidate
pub fn select(candidates: &[String], variation: bool, rng: &mut dyn RandomSource) -> String {
    let index = if variation && !candidates.is_empty() {
        rng.next_index(candidates.len())
    } else {
        0
    };
    candidates.get(index).cloned().unwrap_or_default()
}

/// Prompt for subjects the knowledge base knows nothing about
pub fn minimal_prompt(brief: &SubjectBrief) -> String {
    format!(
        "A vibrant, imaginative skateboard deck design about {}. {}",
        brief.subject,
        brief.key_elements().unwrap_or(DEFAULT_ELEMENTS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::random::ScriptedSource;

    #[test]
    fn test_select_first_without_variation() {
        let candidates = vec!["a".to_string(), "b".to_string()];
        let mut rng = ScriptedSource::new(vec![0.9]);
        assert_eq!(select(&candidates, false, &mut rng), "a");
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_select_random_with_variation() {
        let candidates = vec!["a".to_string(), "b".to_string()];
        let mut rng = ScriptedSource::new(vec![0.9]);
        assert_eq!(select(&candidates, true, &mut rng), "b");
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_user_text_replaces_bands() {
        let profile = KnowledgeBase::builtin().get("golden").unwrap();
        let brief = SubjectBrief::new("Golden")
            .with_key_elements("The arch at night")
            .with_easter_eggs("A hidden skunk");
        let mut rng = ScriptedSource::new(vec![0.5]);

        let plan = CompositionPlan::resolve(profile, &brief, &mut rng);
        assert_eq!(plan.lower_middle, "The arch at night");
        assert_eq!(plan.details, "A hidden skunk");
        assert_eq!(plan.typography, "a weathered old-western font");
    }

    #[test]
    fn test_variation_draws_only_for_unreplaced_bands() {
        let profile = KnowledgeBase::builtin().get("vail").unwrap();
        let brief = SubjectBrief::new("Vail")
            .with_key_elements("Gondolas")
            .variation(true);
        let mut rng = ScriptedSource::new(vec![0.0, 0.4, 0.9, 0.7]);

        let plan = CompositionPlan::resolve(profile, &brief, &mut rng);
        assert_eq!(rng.draws(), 4);
        assert_eq!(plan.top, profile.candidates(Band::Top)[0]);
        assert_eq!(plan.upper_middle, profile.candidates(Band::UpperMiddle)[1]);
        assert_eq!(plan.foreground, profile.candidates(Band::Foreground)[2]);
        assert_eq!(plan.details, profile.candidates(Band::Details)[2]);
    }

    #[test]
    fn test_prompt_band_order() {
        let profile = KnowledgeBase::builtin().get("boulder").unwrap();
        let brief = SubjectBrief::new("Boulder");
        let mut rng = ScriptedSource::new(Vec::new());
        let prompt = CompositionPlan::resolve(profile, &brief, &mut rng).to_prompt("Boulder");

        let positions: Vec<usize> = Band::ALL
            .iter()
            .map(|b| prompt.find(&format!("{}: ", b.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.starts_with("A single continuous, uncropped vertical"));
        assert!(prompt.contains("The only text should be \"Boulder\""));
        assert!(prompt.ends_with("dynamic composition."));
    }

    #[test]
    fn test_minimal_prompt() {
        let brief = SubjectBrief::new("Xyzzyville");
        assert_eq!(
            minimal_prompt(&brief),
            "A vibrant, imaginative skateboard deck design about Xyzzyville. Include local landmarks and cultural elements"
        );

        let brief = brief.with_key_elements("Giant teapot");
        assert!(minimal_prompt(&brief).ends_with("Xyzzyville. Giant teapot"));
    }
}
