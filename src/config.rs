use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Immutable run configuration, built once at startup from the CLI and
/// passed by reference into the polling loop.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub router: String,
    pub external_server: String,
    pub success_file: PathBuf,
    pub failure_file: PathBuf,
    pub timeout: Duration,
    pub interval: Duration,
}

impl MonitorConfig {
    /// Creates the parent directories of both sink files. Failure here is a
    /// startup error; the loop never runs against sinks whose directories
    /// are missing from the outset.
    pub fn prepare_sink_dirs(&self) -> Result<(), Box<dyn std::error::Error>> {
        for sink in [&self.success_file, &self.failure_file] {
            if let Some(parent) = sink.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_sinks(success_file: PathBuf, failure_file: PathBuf) -> MonitorConfig {
        MonitorConfig {
            router: "192.168.1.1".to_string(),
            external_server: "8.8.8.8".to_string(),
            success_file,
            failure_file,
            timeout: Duration::from_millis(120),
            interval: Duration::from_millis(3000),
        }
    }

    #[test]
    fn prepare_creates_missing_sink_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_sinks(
            dir.path().join("logs").join("success.log"),
            dir.path().join("logs").join("nested").join("failure.log"),
        );

        config.prepare_sink_dirs().unwrap();

        assert!(dir.path().join("logs").is_dir());
        assert!(dir.path().join("logs").join("nested").is_dir());
    }

    #[test]
    fn prepare_accepts_bare_filenames() {
        let config = config_with_sinks(PathBuf::from("success.log"), PathBuf::from("failure.log"));
        config.prepare_sink_dirs().unwrap();
    }
}
