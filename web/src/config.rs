use anyhow::Context as _;
use memshuffle_core::GameConfig;

const GAME_TOML: &str = include_str!("../game.toml");

/// Loads the embedded round settings, falling back to the built-in defaults.
pub(crate) fn load_config() -> GameConfig {
    parse_config(GAME_TOML).unwrap_or_else(|err| {
        log::error!("using default config: {:#}", err);
        GameConfig::default()
    })
}

fn parse_config(source: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = toml::from_str(source).context("failed to parse game.toml")?;
    config.validate().context("invalid game.toml")?;
    Ok(config)
}
