//! Render profile persistence.
//!
//! The profile lives in `$XDG_CONFIG_HOME/parscale/render_profile.json`
//! (`~/.config` when the variable is unset), with a hidden
//! `.render_profile.json` in the working directory as the fallback location.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::profile::{RenderProfile, PROFILE_VERSION};

const PROFILE_FILENAME: &str = "render_profile.json";
const CONFIG_DIR_NAME: &str = "parscale";

/// Why a saved profile was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Rejection {
    Version(u32),
    Size { width: u32, height: u32 },
    Format(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Version(v) => write!(f, "profile version {v}, expected {PROFILE_VERSION}"),
            Self::Size { width, height } => write!(f, "figure size {width}x{height} out of range"),
            Self::Format(format) => write!(f, "format {format} not built in"),
        }
    }
}

/// Load the first readable profile, in lookup order.
#[must_use]
pub fn load_profile() -> Option<RenderProfile> {
    locations()
        .into_iter()
        .filter(|path| path.exists())
        .find_map(|path| load_from_path(&path))
}

/// Load the saved profile if this build can use it.
pub fn load_validated_profile() -> Option<RenderProfile> {
    let profile = load_profile()?;
    match check(&profile) {
        Ok(()) => Some(profile),
        Err(reason) => {
            tracing::info!(%reason, "ignoring saved render profile");
            None
        }
    }
}

fn check(p: &RenderProfile) -> Result<(), Rejection> {
    if !p.is_compatible() {
        return Err(Rejection::Version(p.version));
    }
    if !p.is_valid() {
        return Err(Rejection::Size {
            width: p.width,
            height: p.height,
        });
    }
    if !p.format.is_available() {
        return Err(Rejection::Format(p.format.to_string()));
    }
    Ok(())
}

/// Save the profile to the config directory, falling back to the working
/// directory when that cannot be written.
pub fn save_profile(p: &RenderProfile) -> std::io::Result<PathBuf> {
    save_first_writable(p, &locations())
}

/// Write to the first candidate that accepts the file.
fn save_first_writable(p: &RenderProfile, candidates: &[PathBuf]) -> std::io::Result<PathBuf> {
    let mut last_err = None;
    for path in candidates {
        let attempt = path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| save_to_path(p, path));
        match attempt {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "saved render profile");
                return Ok(path.clone());
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot write render profile");
                last_err = Some(err);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no profile location")
    }))
}

pub fn save_to_path(p: &RenderProfile, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Remove every saved copy of the profile. Returns whether one existed.
pub fn delete_profile() -> std::io::Result<bool> {
    let mut removed = false;
    for path in locations() {
        if path.exists() {
            std::fs::remove_file(&path)?;
            removed = true;
        }
    }
    Ok(removed)
}

/// Read a profile file; unreadable or malformed files yield `None`.
#[must_use]
pub fn load_from_path(path: &Path) -> Option<RenderProfile> {
    let json = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(profile) => Some(profile),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "malformed render profile");
            None
        }
    }
}

/// Lookup order: config directory, then working directory.
fn locations() -> Vec<PathBuf> {
    xdg_profile_path()
        .into_iter()
        .chain(std::iter::once(cwd_profile_path()))
        .collect()
}

fn xdg_profile_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;
    Some(config_home.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME))
}

fn cwd_profile_path() -> PathBuf {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    dir.join(format!(".{PROFILE_FILENAME}"))
}
