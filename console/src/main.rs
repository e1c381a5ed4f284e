mod game_loop;
mod input;
mod render;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use puzzle2048_common::config::{ConfigManager, GameConfig, Validate};
use puzzle2048_common::games::SessionRng;
use puzzle2048_common::games::puzzle2048::GameSession;
use puzzle2048_common::{log, logger};

const DEFAULT_CONFIG_FILE: &str = "puzzle2048.yaml";

#[derive(Parser)]
#[command(name = "puzzle2048", about = "Sliding-tile merge puzzle in the terminal")]
struct Args {
    /// YAML file with board settings; defaults apply when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for tile placement, to replay a game
    #[arg(long)]
    seed: Option<u64>,

    /// Board side length, overrides the config file
    #[arg(long)]
    size: Option<u32>,

    /// Stop with a win once a tile reaches this value
    #[arg(long)]
    target: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_logger(args.use_log_prefix.then(|| "Console".to_string()));

    let config_manager: ConfigManager<_, GameConfig, _> =
        ConfigManager::from_yaml_file(args.config.clone());
    let mut config = config_manager.get_config()?;
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if args.target.is_some() {
        config.target_value = args.target;
    }
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting {}x{} game, seed {}, config {}",
        config.grid_size,
        config.grid_size,
        rng.seed(),
        args.config.display()
    );

    let mut session = GameSession::new(config.grid_size as usize, config.target_value, &mut rng)?;

    let end = game_loop::run(
        &mut session,
        &mut rng,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    log!(
        "Game ended ({:?}) after {} moves, score {}, highest tile {}",
        end,
        session.moves_made(),
        session.score(),
        session.highest_tile()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["puzzle2048"]).unwrap();
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(args.seed, None);
        assert_eq!(args.size, None);
        assert_eq!(args.target, None);
        assert!(!args.use_log_prefix);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "puzzle2048",
            "--seed",
            "7",
            "--size",
            "5",
            "--target",
            "4096",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.size, Some(5));
        assert_eq!(args.target, Some(4096));
    }
}
