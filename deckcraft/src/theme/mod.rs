//! Theme categories
//!
//! A theme selects how a brief is turned into a prompt:
//! - Geographic subjects resolve through the place knowledge base
//! - Group, occasion and freeform subjects use a fixed scene template

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The closed set of deck themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeCategory {
    /// A city, town or region
    #[default]
    Geographic,
    /// A band or other group
    Group,
    /// A holiday or occasion
    Occasion,
    /// Anything else
    Freeform,
}

/// Unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected city, band, holiday or custom)")]
pub struct ThemeParseError(pub String);

impl ThemeCategory {
    /// All themes, in menu order
    pub const ALL: [ThemeCategory; 4] = [
        ThemeCategory::Geographic,
        ThemeCategory::Group,
        ThemeCategory::Occasion,
        ThemeCategory::Freeform,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            ThemeCategory::Geographic => "city",
            ThemeCategory::Group => "band",
            ThemeCategory::Occasion => "holiday",
            ThemeCategory::Freeform => "custom",
        }
    }

    /// Example subject, shown as a hint to users
    pub fn example_subject(&self) -> &'static str {
        match self {
            ThemeCategory::Geographic => "Golden, Colorado",
            ThemeCategory::Group => "The Grateful Dead",
            ThemeCategory::Occasion => "Halloween",
            ThemeCategory::Freeform => "Cosmic Ocean Monsters",
        }
    }

    /// Scene template for template-driven themes, `None` for geographic
    pub fn scene_template(&self) -> Option<&'static SceneTemplate> {
        match self {
            ThemeCategory::Geographic => None,
            ThemeCategory::Group => Some(&GROUP_TEMPLATE),
            ThemeCategory::Occasion => Some(&OCCASION_TEMPLATE),
            ThemeCategory::Freeform => Some(&FREEFORM_TEMPLATE),
        }
    }
}

impl FromStr for ThemeCategory {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" | "geographic" | "place" => Ok(ThemeCategory::Geographic),
            "band" | "group" => Ok(ThemeCategory::Group),
            "holiday" | "occasion" => Ok(ThemeCategory::Occasion),
            "custom" | "freeform" => Ok(ThemeCategory::Freeform),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Literal prompt pieces for one template-driven theme
///
/// The prompt reads:
/// `{intro_prefix}{subject}{intro_suffix} {scene}. {hidden}. {closing}`
#[derive(Debug)]
pub struct SceneTemplate {
    pub intro_prefix: &'static str,
    pub intro_suffix: &'static str,
    /// Scene used when the user gave no key elements
    pub default_scene: &'static str,
    /// Scenes drawn from in variation mode
    pub variation_scenes: &'static [&'static str],
    /// Label introducing user-supplied easter eggs
    pub hidden_label: &'static str,
    /// Clause used when there are no easter eggs
    pub generic_hidden: &'static str,
    pub closing: &'static str,
}

static GROUP_TEMPLATE: SceneTemplate = SceneTemplate {
    intro_prefix: "A vibrant skateboard deck design celebrating ",
    intro_suffix: " in the iconic style of Jimbo Phillips.",
    default_scene: "Dancing bears, musical notes, psychedelic patterns",
    variation_scenes: &[
        "Concert stage with dramatic lighting",
        "Vintage vinyl records floating",
        "Musical instruments in dynamic poses",
        "Sound waves visualized as colorful streams",
    ],
    hidden_label: "Hidden details:",
    generic_hidden: "Subtle band imagery woven throughout",
    closing: "Bold neon colors, monster elements, sharp teeth, bulging eyes, and explosive energy typical of classic Jimbo Phillips skateboard art.",
};

static OCCASION_TEMPLATE: SceneTemplate = SceneTemplate {
    intro_prefix: "A festive skateboard deck design for ",
    intro_suffix: " in the legendary Jimbo Phillips style.",
    default_scene: "Jack-o'-lanterns, autumn leaves, spooky atmosphere",
    variation_scenes: &[
        "Spooky haunted mansion with glowing windows",
        "Pumpkin patch under a full moon",
        "Trick-or-treaters on a foggy street",
        "Gothic cemetery with ancient tombstones",
    ],
    hidden_label: "Subtle details:",
    generic_hidden: "Hidden seasonal elements throughout",
    closing: "Vibrant neon colors, monster faces, dramatic outlines, and wild psychedelic energy.",
};

static FREEFORM_TEMPLATE: SceneTemplate = SceneTemplate {
    intro_prefix: "An imaginative skateboard deck design in the iconic Jimbo Phillips style: ",
    intro_suffix: ".",
    default_scene: "Imaginative, surreal artistic elements",
    variation_scenes: &[
        "Cosmic ocean with alien surfers riding nebula waves",
        "Giant squid playing chess with space octopi",
        "Underwater cities with bioluminescent architecture",
        "Interdimensional portals opening in deep space",
    ],
    hidden_label: "Easter eggs:",
    generic_hidden: "Whimsical hidden details throughout",
    closing: "Bold neon colors, cartoonish monster elements, dramatic black outlines, and explosive psychedelic energy.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!("city".parse(), Ok(ThemeCategory::Geographic));
        assert_eq!("BAND".parse(), Ok(ThemeCategory::Group));
        assert_eq!(" Holiday ".parse(), Ok(ThemeCategory::Occasion));
        assert_eq!("freeform".parse(), Ok(ThemeCategory::Freeform));
        assert!("opera".parse::<ThemeCategory>().is_err());
    }

    #[test]
    fn test_id_round_trips() {
        for theme in ThemeCategory::ALL {
            assert_eq!(theme.id().parse(), Ok(theme));
        }
    }

    #[test]
    fn test_only_geographic_lacks_template() {
        assert!(ThemeCategory::Geographic.scene_template().is_none());
        assert!(ThemeCategory::Group.scene_template().is_some());
        assert!(ThemeCategory::Occasion.scene_template().is_some());
        assert!(ThemeCategory::Freeform.scene_template().is_some());
    }

    #[test]
    fn test_templates_are_distinct() {
        let templates: Vec<&SceneTemplate> = ThemeCategory::ALL
            .iter()
            .filter_map(|t| t.scene_template())
            .collect();

        for (i, a) in templates.iter().enumerate() {
            assert!(!a.variation_scenes.is_empty());
            assert!(!a.variation_scenes.contains(&a.default_scene));
            for b in &templates[i + 1..] {
                assert_ne!(a.closing, b.closing);
                assert_ne!(a.hidden_label, b.hidden_label);
                assert_ne!(a.default_scene, b.default_scene);
            }
        }
    }

    #[test]
    fn test_generic_clause_never_contains_label() {
        for theme in ThemeCategory::ALL {
            if let Some(t) = theme.scene_template() {
                assert!(!t.generic_hidden.contains(t.hidden_label));
            }
        }
    }
}
