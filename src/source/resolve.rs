use std::path::PathBuf;

use crate::config::Config;
use crate::consts::{DEFAULT_DIR_SEGMENTS, DIR_ENV};

/// Where the resolved directory came from, for `--debug` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirOrigin {
    Env,
    Config,
    Default,
}

/// Pick the transcription directory: `STARDATE_DIR`, then the config file,
/// then the Stardate iCloud folder under the home directory.
pub(crate) fn resolve_directory(config: &Config) -> (PathBuf, DirOrigin) {
    let env_dir = std::env::var_os(DIR_ENV).filter(|v| !v.is_empty());
    resolve_from(env_dir.map(PathBuf::from), config, dirs::home_dir())
}

fn resolve_from(
    env_dir: Option<PathBuf>,
    config: &Config,
    home: Option<PathBuf>,
) -> (PathBuf, DirOrigin) {
    if let Some(dir) = env_dir {
        return (dir, DirOrigin::Env);
    }
    if let Some(dir) = &config.directory {
        return (dir.clone(), DirOrigin::Config);
    }
    let mut path = home.unwrap_or_default();
    path.extend(DEFAULT_DIR_SEGMENTS);
    (path, DirOrigin::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_config() {
        let config = Config {
            directory: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let (path, origin) = resolve_from(
            Some(PathBuf::from("/from/env")),
            &config,
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(path, PathBuf::from("/from/env"));
        assert_eq!(origin, DirOrigin::Env);
    }

    #[test]
    fn config_wins_over_default() {
        let config = Config {
            directory: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let (path, origin) = resolve_from(None, &config, Some(PathBuf::from("/home/u")));
        assert_eq!(path, PathBuf::from("/from/config"));
        assert_eq!(origin, DirOrigin::Config);
    }

    #[test]
    fn default_is_icloud_transcriptions_folder() {
        let (path, origin) =
            resolve_from(None, &Config::default(), Some(PathBuf::from("/home/u")));
        assert_eq!(origin, DirOrigin::Default);
        assert_eq!(
            path,
            PathBuf::from("/home/u")
                .join("Library")
                .join("Mobile Documents")
                .join("iCloud~com~deanputney~Stardate")
                .join("Documents")
                .join("Transcriptions")
        );
    }
}
