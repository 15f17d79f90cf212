use clap::Parser;
use trivia_core::{GameConfig, SanitizerKind};
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

/// Options are read from the location hash, e.g. `#-vv&--num-categories=4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Root of the quiz API
    #[arg(long, default_value = GameConfig::DEFAULT_API_BASE)]
    api_base: String,

    /// Board width
    #[arg(long, default_value_t = GameConfig::DEFAULT_NUM_CATEGORIES)]
    num_categories: usize,

    /// Board height
    #[arg(long, default_value_t = GameConfig::DEFAULT_NUM_CLUES)]
    num_clues: usize,

    /// How clue text is cleaned: `allow-list` keeps inline formatting, `escape` shows plain text
    #[arg(long, default_value = "allow-list")]
    sanitizer: SanitizerKind,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig::new(
            self.api_base.clone(),
            self.num_categories,
            self.num_clues,
            self.sanitizer,
        )
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    let config = args.game_config();
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("config: {:?}, seed: {}", config, seed);

    let root = document()
        .get_element_by_id("trivia")
        .expect("Could not find id=\"trivia\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { config, seed })
        .render();
}
