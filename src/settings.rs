use crate::domain::TimerPhase;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 30;
pub const DEFAULT_TARGET_CYCLES: u32 = 4;

pub const WORK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
pub const SHORT_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=15;
pub const LONG_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 5..=30;
pub const TARGET_CYCLES_RANGE: RangeInclusive<u32> = 1..=10;

/// Errors raised while reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Durations and cycle target for a focus session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub target_cycles: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            target_cycles: DEFAULT_TARGET_CYCLES,
        }
    }
}

impl TimerSettings {
    /// Build settings, clamping each field into its valid range
    pub fn new(work_minutes: u32, short_break_minutes: u32, long_break_minutes: u32, target_cycles: u32) -> Self {
        Self {
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            target_cycles,
        }
        .clamped()
    }

    /// Parse textual input as typed into the setup form.
    /// A field that is not a number falls back to its default.
    pub fn parse(work: &str, short_break: &str, long_break: &str, cycles: &str) -> Self {
        Self::new(
            parse_or(work, DEFAULT_WORK_MINUTES),
            parse_or(short_break, DEFAULT_SHORT_BREAK_MINUTES),
            parse_or(long_break, DEFAULT_LONG_BREAK_MINUTES),
            parse_or(cycles, DEFAULT_TARGET_CYCLES),
        )
    }

    /// Return a copy with every field forced into range
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: clamp_to(self.work_minutes, &WORK_MINUTES_RANGE),
            short_break_minutes: clamp_to(self.short_break_minutes, &SHORT_BREAK_MINUTES_RANGE),
            long_break_minutes: clamp_to(self.long_break_minutes, &LONG_BREAK_MINUTES_RANGE),
            target_cycles: clamp_to(self.target_cycles, &TARGET_CYCLES_RANGE),
        }
    }

    /// Configured length of a phase in seconds (0 for Completed)
    pub fn duration_secs(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Work => self.work_minutes * 60,
            TimerPhase::ShortBreak => self.short_break_minutes * 60,
            TimerPhase::LongBreak => self.long_break_minutes * 60,
            TimerPhase::Completed => 0,
        }
    }

    /// Apply textual overrides (e.g. from the command line) on top of these settings
    pub fn with_overrides(
        self,
        work: Option<&str>,
        short_break: Option<&str>,
        long_break: Option<&str>,
        cycles: Option<&str>,
    ) -> Self {
        Self::new(
            work.map_or(self.work_minutes, |s| parse_or(s, DEFAULT_WORK_MINUTES)),
            short_break.map_or(self.short_break_minutes, |s| parse_or(s, DEFAULT_SHORT_BREAK_MINUTES)),
            long_break.map_or(self.long_break_minutes, |s| parse_or(s, DEFAULT_LONG_BREAK_MINUTES)),
            cycles.map_or(self.target_cycles, |s| parse_or(s, DEFAULT_TARGET_CYCLES)),
        )
    }
}

/// Parse a whole number of minutes or cycles. Out-of-range numbers saturate
/// so callers can clamp them; only non-numeric text yields `default`.
pub(crate) fn parse_or(input: &str, default: u32) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(value) => value.clamp(0, i64::from(u32::MAX)) as u32,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => u32::MAX,
            IntErrorKind::NegOverflow => 0,
            _ => default,
        },
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Default location of the settings file (`<config dir>/pomotodo/settings.json`)
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pomotodo").join("settings.json"))
}

/// Load settings from a JSON file. A missing file yields defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<TimerSettings, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(TimerSettings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: TimerSettings = serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(settings.clamped())
}

/// Write a settings file atomically, refusing to replace an existing one
pub fn init_settings<P: AsRef<Path>>(path: P, settings: &TimerSettings) -> Result<(), SettingsError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(SettingsError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(io_err)?;

    let json = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp_file.write_all(json.as_bytes()).map_err(io_err)?;
    temp_file.flush().map_err(io_err)?;
    temp_file.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}
