// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these wins:
//!
//! 1. a directory passed to [`config_dir_with_override`]
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`]
//! 3. `LENS_GALLERY_CONFIG_DIR`, when non-empty
//! 4. `LensGallery/` under the platform config directory

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "LensGallery";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "LENS_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

/// Config directory for this run, or `None` when the platform has none.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(
        override_path,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var_os(ENV_CONFIG_DIR),
        dirs::config_dir(),
    )
}

fn resolve_config_dir(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<OsString>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    let from_env = env.filter(|value| !value.is_empty()).map(PathBuf::from);
    explicit
        .or(cli)
        .or(from_env)
        .or_else(|| platform.map(|base| base.join(APP_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/user/.config"))
    }

    #[test]
    fn platform_dir_gets_app_subdirectory() {
        let dir = resolve_config_dir(None, None, None, platform());
        assert_eq!(dir, Some(PathBuf::from("/home/user/.config/LensGallery")));
    }

    #[test]
    fn no_platform_dir_and_no_overrides_is_none() {
        assert_eq!(resolve_config_dir(None, None, None, None), None);
    }

    #[test]
    fn env_value_beats_platform_but_empty_is_ignored() {
        let env = resolve_config_dir(None, None, Some("/srv/gallery".into()), platform());
        assert_eq!(env, Some(PathBuf::from("/srv/gallery")));

        let empty = resolve_config_dir(None, None, Some(OsString::new()), platform());
        assert_eq!(empty, Some(PathBuf::from("/home/user/.config/LensGallery")));
    }

    #[test]
    fn cli_flag_beats_env() {
        let dir = resolve_config_dir(
            None,
            Some(PathBuf::from("/from/flag")),
            Some("/from/env".into()),
            platform(),
        );
        assert_eq!(dir, Some(PathBuf::from("/from/flag")));
    }

    #[test]
    fn explicit_directory_beats_everything() {
        let dir = resolve_config_dir(
            Some(PathBuf::from("/explicit")),
            Some(PathBuf::from("/from/flag")),
            Some("/from/env".into()),
            platform(),
        );
        assert_eq!(dir, Some(PathBuf::from("/explicit")));
        assert_eq!(
            config_dir_with_override(Some(PathBuf::from("/explicit"))),
            Some(PathBuf::from("/explicit"))
        );
    }
}
