//! Shell completion scripts for the `salesdash` flags.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::config::AppConfig;

const BIN_NAME: &str = "salesdash";

/// Render the completion script for `shell`.
#[must_use]
pub fn completion_script(shell: Shell) -> Vec<u8> {
    let mut cmd = AppConfig::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buf);
    buf
}

/// Write the completion script for `shell` to `out`.
pub fn write_completion(shell: Shell, out: &mut dyn io::Write) -> io::Result<()> {
    out.write_all(&completion_script(shell))?;
    out.flush()
}
