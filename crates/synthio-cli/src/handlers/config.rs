//! Config command handler

use std::io::Write;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Print the effective configuration as YAML
pub fn execute_config<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    out.write_all(config.to_yaml()?.as_bytes())?;
    Ok(())
}
