use crate::config::global_config;
use crate::logger;

/// Wrapper around an `xshell` command that respects the global verbosity
/// setting: verbose runs inherit stdio, quiet runs capture it and only
/// surface stderr on failure.
pub struct Cmd<'a> {
    inner: xshell::Cmd<'a>,
}

impl<'a> Cmd<'a> {
    pub fn new(cmd: xshell::Cmd<'a>) -> Self {
        Self { inner: cmd }
    }

    pub fn run(self) -> anyhow::Result<()> {
        if global_config().verbose {
            logger::info(format!("$ {}", self.inner));
            self.inner.run()?;
        } else {
            let output = self.inner.ignore_status().output()?;
            if !output.status.success() {
                anyhow::bail!(
                    "command failed (exit {:?}):\n{}",
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
            }
        }
        Ok(())
    }
}
