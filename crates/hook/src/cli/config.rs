use std::path::Path;

use intel_domain::config::{Config, ConfigSeverity};

/// Parse and validate the config, printing any issues.
///
/// Returns `false` when errors are found.
pub fn validate(config: &Config, config_path: &Path) -> bool {
    let issues = config.validate();
    let config_path = config_path.display();

    if issues.is_empty() {
        println!("Config OK ({config_path})");
        return true;
    }

    let error_count = issues
        .iter()
        .filter(|e| e.severity == ConfigSeverity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    for issue in &issues {
        println!("{issue}");
    }

    println!(
        "\n{} error(s), {} warning(s) in {config_path}",
        error_count, warning_count,
    );

    error_count == 0
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    let output = toml::to_string_pretty(config)?;
    print!("{output}");
    Ok(())
}
