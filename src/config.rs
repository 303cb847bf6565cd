use anyhow::{Context, Result, bail};
use serde::Deserialize;

use baktun_maya::{Correlation, GMT_CORRELATION, HaabDayBase};

use crate::cli::Cli;

/// Optional TOML configuration file. Every field has a default, and CLI
/// flags override file values.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Correlation constant: the JDN of Long Count 0.0.0.0.0.
    #[serde(default)]
    pub correlation: Option<i64>,

    /// Haabʼ day numbering base (0 or 1).
    #[serde(default)]
    pub haab_day_base: Option<u8>,
}

/// Resolves the effective [`Correlation`] from CLI flags and the optional
/// config file. Precedence: flag, then file, then default (GMT, base 0).
pub fn resolve(cli: &Cli) -> Result<Correlation> {
    let file = match &cli.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => FileConfig::default(),
    };

    let epoch = cli.corr.or(file.correlation).unwrap_or(GMT_CORRELATION);
    let base = match cli.haab_day_base.or(file.haab_day_base) {
        None | Some(0) => HaabDayBase::Zero,
        Some(1) => HaabDayBase::One,
        Some(other) => bail!("haab_day_base must be 0 or 1, got {other}"),
    };

    Ok(Correlation::new(epoch).with_haab_day_base(base))
}
