use anyhow::Result;
use clap::Args;
use sevmon_core::batch::run_batch;
use sevmon_core::conf::{ErrorPolicy, MonitorConfig};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct RunCmd {
    /// Path to a sevmon TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command file to read (overrides the config)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Result file to write (overrides the config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Replace the output file instead of appending to it
    #[arg(long)]
    truncate: bool,

    /// Write an error line for failing commands and keep going
    #[arg(long)]
    skip_errors: bool,
}

impl RunCmd {
    fn resolve(self) -> Result<MonitorConfig> {
        let mut cfg = match &self.config {
            Some(path) => MonitorConfig::from_file(path)?,
            None => MonitorConfig::default(),
        };

        if let Some(input) = self.input {
            cfg.input = input;
        }
        if let Some(output) = self.output {
            cfg.output = output;
        }
        if self.truncate {
            cfg.append = false;
        }
        if self.skip_errors {
            cfg.on_error = ErrorPolicy::Skip;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn run(cmd: RunCmd) -> Result<()> {
    let cfg = cmd.resolve()?;
    run_batch(&cfg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cmd = RunCmd {
            input: Some("in.txt".into()),
            truncate: true,
            skip_errors: true,
            ..RunCmd::default()
        };

        let cfg = cmd.resolve().unwrap();

        assert_eq!(cfg.input, PathBuf::from("in.txt"));
        assert_eq!(cfg.output, PathBuf::from("output.txt"));
        assert!(!cfg.append);
        assert_eq!(cfg.on_error, ErrorPolicy::Skip);
    }

    #[test]
    fn no_flags_means_default_files_and_append() {
        let cfg = RunCmd::default().resolve().unwrap();

        assert_eq!(cfg, MonitorConfig::default());
    }

    #[test]
    fn overrides_are_validated() {
        let cmd = RunCmd {
            input: Some("same.txt".into()),
            output: Some("same.txt".into()),
            ..RunCmd::default()
        };

        assert!(cmd.resolve().is_err());
    }
}
