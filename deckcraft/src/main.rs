//! deckcraft - skateboard deck generator CLI

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use deckcraft::export::{apply_deck_mask, export_file_name, to_data_url, write_png};
use deckcraft::{
    DeckRequest, DeckStudio, DeckcraftConfig, EntropySource, ImageClient, PromptBuilder,
    RandomSource, Renderer, SeededSource, SubjectBrief, ThemeCategory,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Skateboard deck prompt and artwork generator
#[derive(Parser, Debug)]
#[command(name = "deckcraft", version, about = "Generate skateboard deck designs")]
struct Cli {
    /// Configuration file (defaults to ./deckcraft.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prompt for a subject
    Prompt(BriefArgs),

    /// Generate a deck image and write it as PNG
    Render {
        #[command(flatten)]
        brief: BriefArgs,

        /// Skip the remote generator and render procedurally
        #[arg(long)]
        no_remote: bool,

        /// Output file (defaults to <output_dir>/<subject>_deck.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the PNG as a data URL
        #[arg(long)]
        data_url: bool,
    },

    /// List known places in lookup order
    Places,
}

#[derive(Args, Debug)]
struct BriefArgs {
    /// Theme: geographic, group, occasion or freeform
    #[arg(short, long, default_value = "geographic")]
    theme: ThemeCategory,

    /// What the deck is about
    #[arg(short, long)]
    subject: String,

    /// Key elements to feature
    #[arg(long, default_value = "")]
    elements: String,

    /// Hidden details
    #[arg(long, default_value = "")]
    easter_eggs: String,

    /// Recombine scene elements at random
    #[arg(long)]
    variation: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl BriefArgs {
    fn request(&self) -> Result<DeckRequest> {
        if self.subject.trim().is_empty() {
            bail!("a subject is required");
        }
        let brief = SubjectBrief::new(self.subject.trim())
            .with_key_elements(&self.elements)
            .with_easter_eggs(&self.easter_eggs)
            .variation(self.variation);
        Ok(DeckRequest::new(self.theme, brief))
    }

    /// A fresh source; with a seed, every call replays the same stream
    fn rng(&self) -> Box<dyn RandomSource + Send> {
        match self.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(EntropySource::new()),
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "deckcraft=info".into());
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = DeckcraftConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let knowledge = config
        .knowledge_base()
        .context("Invalid places in config")?;

    match cli.command {
        Command::Prompt(args) => {
            let request = args.request()?;
            let mut rng = args.rng();
            let prompt =
                PromptBuilder::new(&knowledge).build(request.theme, &request.brief, rng.as_mut());
            println!("{}", prompt);
        }
        Command::Render {
            brief,
            no_remote,
            output,
            data_url,
        } => {
            let request = brief.request()?;
            let mut prompt_rng = brief.rng();
            let mut render_rng = brief.rng();

            let renderer = Renderer::new(config.render.canvas()?);
            let client = ImageClient::new(&config.remote).context("Failed to build HTTP client")?;
            let mut studio = DeckStudio::new(&knowledge, renderer);
            if !no_remote && client.is_configured() {
                studio = studio.with_client(&client);
            } else {
                info!("Remote generation disabled, rendering procedurally");
            }

            let mut outcome = studio
                .generate(&request, prompt_rng.as_mut(), render_rng.as_mut())
                .await?;
            apply_deck_mask(&mut outcome.image)?;

            let path = output
                .unwrap_or_else(|| config.output_dir.join(export_file_name(&request.brief.subject)));
            let exported = write_png(&outcome.image, &path)
                .with_context(|| format!("Failed to export {}", path.display()))?;

            println!("path: {}", exported.path.display());
            println!("source: {}", outcome.source);
            println!("sha256: {}", exported.hash);
            if let Some(reason) = &outcome.fallback_reason {
                println!("fallback: {}", reason);
            }
            if data_url {
                println!("{}", to_data_url(&outcome.image.encode_png()?));
            }
        }
        Command::Places => {
            for key in knowledge.keys() {
                println!("{}", key);
            }
        }
    }

    Ok(())
}
