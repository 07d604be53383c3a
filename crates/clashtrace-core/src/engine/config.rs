use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// The immutable configuration of a follow run.
///
/// Built once at startup and passed by reference into the catalog loader and the
/// workflow; there is no global mutable option state.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowConfig {
    /// Directory containing one `<frameID>.pdb` snapshot per selected frame.
    pub frames_dir: PathBuf,
    /// The collision distance threshold in Angstroms. A clash exists in a frame
    /// when the minimal inter-residue distance is below this value.
    pub collision_threshold: f64,
}

#[derive(Default)]
pub struct FollowConfigBuilder {
    frames_dir: Option<PathBuf>,
    collision_threshold: Option<f64>,
}

impl FollowConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_dir(mut self, dir: PathBuf) -> Self {
        self.frames_dir = Some(dir);
        self
    }

    pub fn collision_threshold(mut self, threshold: f64) -> Self {
        self.collision_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<FollowConfig, ConfigError> {
        Ok(FollowConfig {
            frames_dir: self
                .frames_dir
                .ok_or(ConfigError::MissingParameter("frames_dir"))?,
            collision_threshold: self
                .collision_threshold
                .ok_or(ConfigError::MissingParameter("collision_threshold"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_complete_config() {
        let config = FollowConfigBuilder::new()
            .frames_dir(PathBuf::from("trajectory"))
            .collision_threshold(4.0)
            .build()
            .unwrap();
        assert_eq!(config.frames_dir, PathBuf::from("trajectory"));
        assert_eq!(config.collision_threshold, 4.0);
    }

    #[test]
    fn builder_reports_missing_parameters() {
        let err = FollowConfigBuilder::new()
            .collision_threshold(4.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("frames_dir"));

        let err = FollowConfigBuilder::new()
            .frames_dir(PathBuf::from("trajectory"))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("collision_threshold"));
    }
}
