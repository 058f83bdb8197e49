//! End-to-end tests: prompt, render, mask and export

mod harness;

use deckcraft::export::{apply_deck_mask, content_hash, export_file_name, write_png};
use deckcraft::render::CanvasSize;
use deckcraft::{
    generate_deck, DeckRequest, DeckSource, SeededSource, SubjectBrief, ThemeCategory,
};
use harness::DeckTest;

const LEADVILLE: &str = r#"
[[places]]
name = "Leadville"
top = ["Mount Elbert at dawn"]
upper_middle = ["The old mining headframes"]
lower_middle = ["Harrison Avenue storefronts"]
foreground = ["A skater on the Mineral Belt Trail"]
details = ["A tiny burro"]
"#;

#[tokio::test]
async fn test_library_pipeline_exports_masked_png() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let request = DeckRequest::new(
        ThemeCategory::Geographic,
        SubjectBrief::new("Colorado Springs").with_easter_eggs("a tiny cog railway"),
    );

    let mut hashes = Vec::new();
    for run in 0..2 {
        let mut outcome = generate_deck(
            &request,
            None,
            &mut SeededSource::new(11),
            &mut SeededSource::new(11),
        )
        .await
        .expect("Failed to generate deck");
        assert_eq!(outcome.source, DeckSource::Procedural);
        assert!(outcome.prompt.contains("Pikes Peak"));
        assert!(outcome.prompt.contains("a tiny cog railway"));

        apply_deck_mask(&mut outcome.image).expect("Failed to mask");
        let path = dir.path().join(format!("{}_{}", run, export_file_name("Colorado Springs")));
        let exported = write_png(&outcome.image, &path).expect("Failed to export");
        assert_eq!(exported.hash, content_hash(&std::fs::read(&path).unwrap()));
        hashes.push(exported.hash);
    }
    assert_eq!(hashes[0], hashes[1]);
}

#[tokio::test]
async fn test_every_theme_renders() {
    for theme in ThemeCategory::ALL {
        let request = DeckRequest::new(theme, SubjectBrief::new(theme.example_subject()));
        let outcome = generate_deck(
            &request,
            None,
            &mut SeededSource::new(5),
            &mut SeededSource::new(5),
        )
        .await
        .expect("Failed to generate deck");
        assert!(outcome.prompt.contains(theme.example_subject()));
        assert_eq!(outcome.image.width(), CanvasSize::DEFAULT.width());
        assert_eq!(outcome.image.height(), CanvasSize::DEFAULT.height());
    }
}

#[test]
fn test_cli_prompt_is_stable() {
    let deck = DeckTest::new().expect("Failed to create harness");
    let first = deck
        .run(&["prompt", "--subject", "Golden"])
        .expect("Failed to run");
    let second = deck
        .run(&["prompt", "--subject", "Golden"])
        .expect("Failed to run");

    assert!(first.success, "{}", first.stderr);
    assert!(first.stdout.contains("Golden"));
    assert!(first.stdout.contains("weathered old-western font"));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_render_writes_deck() {
    let deck = DeckTest::new().expect("Failed to create harness");
    deck.write_config("output_dir = \".\"\n[render]\nscale = 2\n")
        .expect("Failed to write config");

    let args = ["render", "--subject", "Vail", "--seed", "7", "--no-remote"];
    let first = deck.run(&args).expect("Failed to run");
    assert!(first.success, "{}", first.stderr);
    assert_eq!(first.field("source"), Some("procedural"));
    assert!(deck.path("Vail_deck.png").exists());

    let second = deck.run(&args).expect("Failed to run");
    assert_eq!(first.field("sha256"), second.field("sha256"));
    assert_eq!(first.field("sha256").map(str::len), Some(64));
}

#[test]
fn test_cli_variation_keeps_art_for_seed() {
    let deck = DeckTest::new().expect("Failed to create harness");
    deck.write_config("[render]\nscale = 2\n")
        .expect("Failed to write config");

    let plain = deck
        .run(&["render", "--subject", "Boulder", "--seed", "42", "--no-remote", "-o", "a.png"])
        .expect("Failed to run");
    let varied = deck
        .run(&[
            "render",
            "--subject",
            "Boulder",
            "--seed",
            "42",
            "--variation",
            "--no-remote",
            "-o",
            "b.png",
        ])
        .expect("Failed to run");

    assert!(plain.success, "{}", plain.stderr);
    assert!(varied.success, "{}", varied.stderr);
    assert_eq!(plain.field("sha256"), varied.field("sha256"));
}

#[test]
fn test_cli_render_data_url() {
    let deck = DeckTest::new().expect("Failed to create harness");
    let output = deck.path("deck.png");
    let run = deck
        .run(&[
            "render",
            "--theme",
            "occasion",
            "--subject",
            "Halloween",
            "--seed",
            "3",
            "--no-remote",
            "--data-url",
            "--output",
            output.to_str().unwrap(),
        ])
        .expect("Failed to run");

    assert!(run.success, "{}", run.stderr);
    assert!(output.exists());
    assert!(run
        .stdout
        .lines()
        .any(|line| line.starts_with("data:image/png;base64,")));
}

#[test]
fn test_cli_places_include_configured() {
    let deck = DeckTest::new().expect("Failed to create harness");
    deck.write_config(LEADVILLE).expect("Failed to write config");

    let run = deck.run(&["places"]).expect("Failed to run");
    assert!(run.success, "{}", run.stderr);
    let keys: Vec<&str> = run.stdout.lines().collect();
    assert_eq!(
        keys,
        ["golden", "denver", "boulder", "aspen", "vail", "colorado springs", "leadville"]
    );

    let prompt = deck
        .run(&["prompt", "--subject", "Leadville"])
        .expect("Failed to run");
    assert!(prompt.stdout.contains("Mount Elbert at dawn"));
}

#[test]
fn test_cli_rejects_bad_input() {
    let deck = DeckTest::new().expect("Failed to create harness");

    let unknown_theme = deck
        .run(&["prompt", "--theme", "opera", "--subject", "Vail"])
        .expect("Failed to run");
    assert!(!unknown_theme.success);

    let empty_subject = deck
        .run(&["prompt", "--subject", "  "])
        .expect("Failed to run");
    assert!(!empty_subject.success);

    let missing_config = deck
        .run(&["--config", "nope.toml", "places"])
        .expect("Failed to run");
    assert!(!missing_config.success);
}
