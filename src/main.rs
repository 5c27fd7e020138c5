//! Neon Run entry point
//!
//! Native builds run a headless demo: the autopilot plays one session in
//! real time while a log presenter prints the HUD. A windowed frontend plugs
//! in through the same `Session` and `PresentationGateway` seams.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use neon_run::driver::{RunLimit, Session, WallClock, run};
    use neon_run::persistence::FileStore;
    use neon_run::snapshot::LogPresenter;
    use neon_run::Settings;

    // Three minutes of play at ~60 fps
    const DEMO_FRAMES: u64 = 3 * 60 * 60;

    env_logger::init();
    log::info!("Neon Run (headless demo) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let mut settings = Settings::load(&settings_path);
    settings.apply_env();
    let store = FileStore::new(settings.save_path.clone());
    log::info!(
        "Quality {}, high score file {}",
        settings.quality.as_str(),
        store.path().display()
    );

    let mut session = Session::new(settings, store);
    session.input.idle_mode = true;

    let mut presenter = LogPresenter::new(60);
    let frames = run(
        &mut session,
        &mut WallClock::default(),
        &mut presenter,
        RunLimit {
            max_frames: Some(DEMO_FRAMES),
            stop_on_game_over: true,
        },
    );

    log::info!(
        "Demo finished after {} frames: score {}, best {}",
        frames,
        session.state.score(),
        session.high_score().best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend ships with this crate; embed the library instead
}
