//! Ground Siege headless host
//!
//! Runs the simulation against a synthetic clock and a recording surface,
//! optionally driven by the autopilot, then prints a JSON run summary.
//!
//! Usage: `ground-siege [settings.json] [ready|pending|failed]`
//! (log level via `RUST_LOG`)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use ground_siege::renderer::{ImageId, RecordingSurface, SpriteSlot};
    use ground_siege::sim::state::RunSummary;
    use ground_siege::sim::{FrameStatus, autopilot};
    use ground_siege::ui::LogHud;
    use ground_siege::{Game, Settings, SpriteMode};

    env_logger::init();
    log::info!("Ground Siege (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    if let Some(mode) = std::env::args().nth(2) {
        match SpriteMode::from_str(&mode) {
            Some(sprite) => settings.sprite = sprite,
            None => {
                log::error!("Unknown sprite mode `{mode}`, expected ready, pending or failed");
                std::process::exit(1);
            }
        }
    }
    log::info!("Sprite mode: {}", settings.sprite.as_str());

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(seed);
    game.set_sprite(match settings.sprite {
        SpriteMode::Ready => SpriteSlot::Ready(ImageId(0)),
        SpriteMode::Pending => SpriteSlot::Pending,
        SpriteMode::Failed => SpriteSlot::Failed,
    });

    let mut surface = RecordingSurface::new();
    let mut hud = LogHud;
    let mut now = 0.0;

    for _ in 0..settings.max_frames {
        if settings.autopilot {
            game.apply(autopilot(&game.state));
        }

        now += settings.frame_interval_ms;
        surface.clear();
        if game.frame(now, &mut surface, &mut hud) == FrameStatus::Stopped {
            break;
        }
    }

    let summary = RunSummary::from(&game.state);
    if game.is_running() {
        log::info!("Frame limit reached with {} lives left", summary.lives);
    }

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to encode run summary: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host is bundled; embedders drive `Game` directly
}
