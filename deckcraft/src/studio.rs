//! Deck generation pipeline
//!
//! 1. Build the prompt for the request's theme and brief
//! 2. Ask the remote generator, when one is configured
//! 3. Otherwise, or on any remote failure, render the procedural fallback
//!
//! The prompt builder and the renderer each get their own random source, so
//! the fallback art for a render seed does not depend on the prompt's draws.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::knowledge::KnowledgeBase;
use crate::prompt::{PromptBuilder, SubjectBrief};
use crate::random::RandomSource;
use crate::remote::{ImageClient, RemoteError};
use crate::render::{DeckImage, RenderError, Renderer};
use crate::theme::ThemeCategory;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("a subject is required")]
    EmptySubject,

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRequest {
    pub theme: ThemeCategory,
    pub brief: SubjectBrief,
}

impl DeckRequest {
    pub fn new(theme: ThemeCategory, brief: SubjectBrief) -> Self {
        Self { theme, brief }
    }

    /// The same request in variation mode
    pub fn variation(&self) -> Self {
        Self {
            theme: self.theme,
            brief: self.brief.clone().variation(true),
        }
    }
}

/// Where the image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSource {
    Remote,
    Procedural,
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::Remote => write!(f, "remote"),
            DeckSource::Procedural => write!(f, "procedural"),
        }
    }
}

/// A generated deck
#[derive(Debug, Clone)]
pub struct DeckOutcome {
    pub prompt: String,
    pub image: DeckImage,
    pub source: DeckSource,
    /// Why the remote generator was not used, if it was tried
    pub fallback_reason: Option<String>,
}

/// Generation pipeline over a knowledge base, renderer and optional client
#[derive(Debug, Clone, Copy)]
pub struct DeckStudio<'a> {
    knowledge: &'a KnowledgeBase,
    renderer: Renderer,
    client: Option<&'a ImageClient>,
}

impl<'a> DeckStudio<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, renderer: Renderer) -> Self {
        Self {
            knowledge,
            renderer,
            client: None,
        }
    }

    pub fn with_client(mut self, client: &'a ImageClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Run the pipeline for one request
    ///
    /// `prompt_rng` is only used for variation draws, `render_rng` only by
    /// the fallback renderer.
    pub async fn generate(
        &self,
        request: &DeckRequest,
        prompt_rng: &mut (dyn RandomSource + Send),
        render_rng: &mut (dyn RandomSource + Send),
    ) -> Result<DeckOutcome, StudioError> {
        let subject = request.brief.subject.trim();
        if subject.is_empty() {
            return Err(StudioError::EmptySubject);
        }

        let prompt =
            PromptBuilder::new(self.knowledge).build(request.theme, &request.brief, prompt_rng);
        info!(
            "Generating {} deck for '{}'{}",
            request.theme,
            subject,
            if request.brief.variation { " (variation)" } else { "" }
        );

        let fallback_reason = match self.client {
            Some(client) => match remote_image(client, &prompt).await {
                Ok(image) => {
                    info!("Remote deck generated for '{}'", subject);
                    return Ok(DeckOutcome {
                        prompt,
                        image,
                        source: DeckSource::Remote,
                        fallback_reason: None,
                    });
                }
                Err(reason) => {
                    warn!("Remote generation failed, using procedural art: {}", reason);
                    Some(reason)
                }
            },
            None => None,
        };

        let image = self.renderer.render(&prompt, subject, render_rng)?;
        info!(
            "Procedural deck rendered for '{}' ({}x{})",
            subject,
            image.width(),
            image.height()
        );
        Ok(DeckOutcome {
            prompt,
            image,
            source: DeckSource::Procedural,
            fallback_reason,
        })
    }
}

async fn remote_image(client: &ImageClient, prompt: &str) -> Result<DeckImage, String> {
    let data = client
        .generate(prompt)
        .await
        .map_err(|e: RemoteError| e.to_string())?;
    DeckImage::from_png(&data).map_err(|e| e.to_string())
}

/// Generate with the built-in places on the default canvas
pub async fn generate_deck(
    request: &DeckRequest,
    client: Option<&ImageClient>,
    prompt_rng: &mut (dyn RandomSource + Send),
    render_rng: &mut (dyn RandomSource + Send),
) -> Result<DeckOutcome, StudioError> {
    let studio = DeckStudio::new(KnowledgeBase::builtin(), Renderer::default());
    match client {
        Some(client) => {
            studio
                .with_client(client)
                .generate(request, prompt_rng, render_rng)
                .await
        }
        None => studio.generate(request, prompt_rng, render_rng).await,
    }
}
