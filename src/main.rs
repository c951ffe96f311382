//! Rally Pong entry point
//!
//! Native builds run a headless demo match between two autoplay paddles and
//! print the final frame as JSON. The browser build is driven from JS through
//! `rally_pong::web`.
//!
//! Usage: `rally-pong [config.json] [seed] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rally_pong::MatchConfig;
    use rally_pong::autoplay::Autoplay;
    use rally_pong::sim::{MatchEvent, MatchState, Side, update};

    env_logger::init();
    log::info!("Rally Pong (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first().map(String::as_str) {
        Some(path) if path != "-" => match MatchConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        _ => MatchConfig::default(),
    };
    let seed = args
        .get(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let seconds = args
        .get(2)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(60);

    const FRAME_MS: f64 = 1000.0 / 60.0;
    let players = [Autoplay::new(Side::Left, 0.9), Autoplay::new(Side::Right, 0.7)];

    let mut state = MatchState::new(config, 0.0, seed);
    let mut now = 0.0;
    let mut paddle_hits = 0u32;

    for _ in 0..seconds * 60 {
        now += FRAME_MS;

        // The demo serves as soon as a goal pauses the match
        if state.paused {
            state = state.toggle_pause();
        }
        for player in &players {
            state = state.apply(player.command(&state));
        }

        state = update(&state, now);
        for event in &state.events {
            if let MatchEvent::PaddleHit { .. } = event {
                paddle_hits += 1;
            }
        }
    }

    log::info!(
        "Finished {}s: score {}-{}, {} paddle hits",
        seconds,
        state.score.left,
        state.score.right,
        paddle_hits
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is rally_pong::web, this is just to satisfy the compiler
}
