//! `prompt-booster config` - print the effective configuration.

use booster_api::state::AppState;

/// Print the merged config (file + overrides) as TOML, or JSON with `json`.
pub fn show_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(&*state.config)?
    } else {
        toml::to_string_pretty(&*state.config)?
    };
    println!("{rendered}");
    Ok(())
}
