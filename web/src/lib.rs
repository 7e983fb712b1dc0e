use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod game;
mod host;
mod settings;
mod theme;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--seed=42&--difficulty=hard`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
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

    let args = Args::from_location_hash(&location_hash).unwrap_or_else(|err| {
        gloo::console::warn!(format!("ignoring location arguments: {err}"));
        Args::default()
    });
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {err}"));
        }
    }

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_arguments_are_parsed() {
        let args = Args::from_location_hash("#-vv&--seed=42&--difficulty=hard").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(
            args.game,
            game::GameProps::new_for_test(Some(42), Some("hard"))
        );
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();
        assert_eq!(args.game, game::GameProps::default());
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(Args::from_location_hash("#--cards=10").is_err());
    }
}
