//! Integration tests for the presentation gate over a file-backed store
//!
//! Each "launch" builds a fresh gate on the same store file, the way separate
//! runs of a host application would.

mod common;

use common::{Fixture, SAMPLE_CONFIG_JSON};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};
use welcomer::gate::{DEFAULT_PRESENTATION_DELAY, DismissReason, GateState, WelcomeGate};
use welcomer::{DEFAULT_WELCOME_KEY, FileStore, SeenStore, WelcomeConfig, WelcomeStyle};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn launch(
    fixture: &Fixture,
    config: WelcomeConfig,
    style: WelcomeStyle,
) -> (WelcomeGate<FileStore>, GateState, Instant) {
    let mut gate = WelcomeGate::new(fixture.store());
    let start = Instant::now();
    let state = gate.activate(config, style, DEFAULT_WELCOME_KEY, start);
    (gate, state, start)
}

#[test]
fn test_first_launch_shows_then_second_launch_hides() -> TestResult {
    let fixture = Fixture::new()?;
    let path = fixture.write_config("welcome.json", SAMPLE_CONFIG_JSON)?;
    let config = WelcomeConfig::load_from(&path)?;

    let (mut gate, state, start) = launch(&fixture, config.clone(), WelcomeStyle::Standard);
    assert!(matches!(state, GateState::Scheduled { .. }));

    let shown = gate.tick(start + DEFAULT_PRESENTATION_DELAY);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].document.title, vec!["Welcome to \"Lens\"".to_string()]);

    assert!(gate.dismiss(DEFAULT_WELCOME_KEY, DismissReason::ContinuePressed));
    assert!(fixture.state_path().exists());

    let (mut gate, state, start) = launch(&fixture, config, WelcomeStyle::Standard);
    assert_eq!(state, GateState::Hidden);
    assert!(gate.tick(start + Duration::from_secs(60)).is_empty());
    Ok(())
}

#[test]
fn test_quitting_before_dismissal_shows_again() -> TestResult {
    let fixture = Fixture::new()?;
    let config = WelcomeConfig::new("Quitter");

    let (mut gate, _, start) = launch(&fixture, config.clone(), WelcomeStyle::Immersive);
    assert_eq!(gate.tick(start + DEFAULT_PRESENTATION_DELAY).len(), 1);
    gate.teardown_all();
    assert!(!fixture.state_path().exists());

    let (_, state, _) = launch(&fixture, config, WelcomeStyle::Immersive);
    assert!(matches!(
        state,
        GateState::Scheduled {
            style: WelcomeStyle::Immersive,
            ..
        }
    ));
    Ok(())
}

#[test]
fn test_teardown_before_delay_never_presents() -> TestResult {
    let fixture = Fixture::new()?;
    let (mut gate, _, start) =
        launch(&fixture, WelcomeConfig::new("Fast"), WelcomeStyle::Standard);

    gate.teardown(DEFAULT_WELCOME_KEY);
    assert!(gate.tick(start + Duration::from_secs(1)).is_empty());
    assert!(!gate.store().get(DEFAULT_WELCOME_KEY)?);
    Ok(())
}

#[test]
fn test_corrupt_store_fails_open_and_is_repaired() -> TestResult {
    let fixture = Fixture::new()?;
    let path = fixture.state_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, "{ definitely not json")?;

    let (mut gate, state, start) =
        launch(&fixture, WelcomeConfig::new("Broken"), WelcomeStyle::Standard);
    assert!(matches!(state, GateState::Scheduled { .. }));
    assert_eq!(gate.tick(start + DEFAULT_PRESENTATION_DELAY).len(), 1);
    assert!(gate.dismiss(DEFAULT_WELCOME_KEY, DismissReason::Gesture));
    assert_eq!(gate.state(DEFAULT_WELCOME_KEY), GateState::Dismissed);

    let (mut gate, state, _) =
        launch(&fixture, WelcomeConfig::new("Broken"), WelcomeStyle::Standard);
    assert_eq!(state, GateState::Hidden);

    gate.reset(DEFAULT_WELCOME_KEY)?;
    assert!(!fixture.store().get(DEFAULT_WELCOME_KEY)?);
    Ok(())
}

#[test]
fn test_reset_brings_the_screen_back() -> TestResult {
    let fixture = Fixture::new()?;
    let mut store = fixture.store();
    store.set(DEFAULT_WELCOME_KEY, true)?;

    let (mut gate, state, start) =
        launch(&fixture, WelcomeConfig::new("Again"), WelcomeStyle::Standard);
    assert_eq!(state, GateState::Hidden);

    gate.reset(DEFAULT_WELCOME_KEY)?;
    let state = gate.activate(
        WelcomeConfig::new("Again"),
        WelcomeStyle::Standard,
        DEFAULT_WELCOME_KEY,
        start,
    );
    assert!(matches!(state, GateState::Scheduled { .. }));
    assert!(fixture.store().entry(DEFAULT_WELCOME_KEY)?.is_none());
    Ok(())
}

#[test]
fn test_separate_keys_are_tracked_separately() -> TestResult {
    let fixture = Fixture::new()?;
    let mut gate = WelcomeGate::new(fixture.store());
    let start = Instant::now();

    gate.activate(WelcomeConfig::new("A"), WelcomeStyle::Standard, "onboarding", start);
    gate.activate(WelcomeConfig::new("B"), WelcomeStyle::Immersive, "whatsNew", start);
    assert_eq!(gate.tick(start + DEFAULT_PRESENTATION_DELAY).len(), 2);

    gate.dismiss("whatsNew", DismissReason::ContinuePressed);

    let entries: Vec<String> = fixture
        .store()
        .entries()?
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(entries, vec!["whatsNew".to_string()]);
    assert!(!fixture.store().get("onboarding")?);
    Ok(())
}
