//! Prompt synthesis
//!
//! Turns a sparse [`SubjectBrief`] into a structured generation prompt.
//! Geographic subjects go through the place knowledge base and a five-band
//! composition; the other themes fill a fixed scene template.
//!
//! Building never fails and always returns a non-empty string. Randomness
//! is only drawn in variation mode, and only through the supplied source.

mod composition;

use tracing::debug;

use crate::knowledge::{KnowledgeBase, Resolution};
use crate::random::{choose, RandomSource};
use crate::theme::{SceneTemplate, ThemeCategory};

pub use composition::{
    minimal_prompt, select, CompositionPlan, DEFAULT_ELEMENTS, DEFAULT_TYPOGRAPHY,
};

/// What the user asked for
///
/// Blank optional fields count as absent. Text is passed through unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectBrief {
    pub subject: String,
    pub key_elements: String,
    pub easter_eggs: String,
    /// Recombine knowledge-base candidates at random
    pub variation: bool,
}

impl SubjectBrief {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn with_key_elements(mut self, text: impl Into<String>) -> Self {
        self.key_elements = text.into();
        self
    }

    pub fn with_easter_eggs(mut self, text: impl Into<String>) -> Self {
        self.easter_eggs = text.into();
        self
    }

    pub fn variation(mut self, variation: bool) -> Self {
        self.variation = variation;
        self
    }

    /// Key elements, `None` when blank
    pub fn key_elements(&self) -> Option<&str> {
        non_blank(&self.key_elements)
    }

    /// Easter eggs, `None` when blank
    pub fn easter_eggs(&self) -> Option<&str> {
        non_blank(&self.easter_eggs)
    }
}

fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Prompt builder over a knowledge base
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> PromptBuilder<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Build the prompt for a brief
    ///
    /// The subject must be non-empty; callers validate it.
    pub fn build(
        &self,
        theme: ThemeCategory,
        brief: &SubjectBrief,
        rng: &mut dyn RandomSource,
    ) -> String {
        match theme.scene_template() {
            Some(template) => scene_prompt(template, brief, rng),
            None => self.geographic_prompt(brief, rng),
        }
    }

    fn geographic_prompt(&self, brief: &SubjectBrief, rng: &mut dyn RandomSource) -> String {
        let resolution = self.knowledge.resolve(&brief.subject);
        let Some(profile) = resolution.profile() else {
            debug!("Using minimal prompt for '{}'", brief.subject);
            return minimal_prompt(brief);
        };

        if let Resolution::Named { key, .. } = resolution {
            debug!("Composing '{}' from place '{}'", brief.subject, key);
        }

        CompositionPlan::resolve(profile, brief, rng).to_prompt(&brief.subject)
    }
}

/// Build a prompt against the built-in knowledge base
pub fn build_prompt(
    theme: ThemeCategory,
    brief: &SubjectBrief,
    rng: &mut dyn RandomSource,
) -> String {
    PromptBuilder::new(KnowledgeBase::builtin()).build(theme, brief, rng)
}

fn scene_prompt(
    template: &SceneTemplate,
    brief: &SubjectBrief,
    rng: &mut dyn RandomSource,
) -> String {
    // Variation ignores the user's key elements
    let scene = if brief.variation {
        choose(template.variation_scenes, rng)
            .copied()
            .unwrap_or(template.default_scene)
    } else {
        brief.key_elements().unwrap_or(template.default_scene)
    };

    let hidden = match brief.easter_eggs() {
        Some(eggs) => format!("{} {}", template.hidden_label, eggs),
        None => template.generic_hidden.to_string(),
    };

    format!(
        "{}{}{} {}. {}. {}",
        template.intro_prefix,
        brief.subject,
        template.intro_suffix,
        scene,
        hidden,
        template.closing
    )
}
