use std::path::{Path, PathBuf};

use super::entry::{Entry, SPECIAL_FOLDERS, SYSTEM_FOLDERS, USER_FOLDERS};

/// Folders every platform keeps directly under the home directory
const USER_FOLDER_NAMES: [&str; 6] = ["Desktop", "Documents", "Downloads", "Pictures", "Music", "Videos"];

/// Get the user's home directory
pub fn home_dir() -> PathBuf {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";

    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(fallback_home()))
}

#[cfg(windows)]
fn fallback_home() -> &'static str {
    r"C:\Users\Default"
}

#[cfg(not(windows))]
fn fallback_home() -> &'static str {
    "/"
}

fn under(home: &Path, rel: &str) -> String {
    home.join(rel).to_string_lossy().to_string()
}

/// Build the built-in entries for this platform.
///
/// The result depends only on `home` and the target platform, so it is
/// regenerated on every load and never persisted.
pub fn builtin_entries(home: &Path) -> Vec<Entry> {
    let mut entries: Vec<Entry> = USER_FOLDER_NAMES
        .iter()
        .map(|name| Entry::new(*name, under(home, name), USER_FOLDERS))
        .collect();
    entries.extend(platform_entries(home));
    entries
}

#[cfg(windows)]
fn platform_entries(home: &Path) -> Vec<Entry> {
    let programs = r"AppData\Roaming\Microsoft\Windows\Start Menu\Programs";
    vec![
        Entry::new("System32", r"C:\Windows\System32", SYSTEM_FOLDERS),
        Entry::new("Program Files", r"C:\Program Files", SYSTEM_FOLDERS),
        Entry::new("Program Files (x86)", r"C:\Program Files (x86)", SYSTEM_FOLDERS),
        Entry::new("Windows", r"C:\Windows", SYSTEM_FOLDERS),
        Entry::new("Temp", r"C:\Windows\Temp", SYSTEM_FOLDERS),
        Entry::new("Startup", under(home, &format!(r"{}\Startup", programs)), SPECIAL_FOLDERS),
        Entry::new("Start Menu Programs", under(home, programs), SPECIAL_FOLDERS),
    ]
}

#[cfg(target_os = "macos")]
fn platform_entries(home: &Path) -> Vec<Entry> {
    vec![
        Entry::new("Applications", "/Applications", SYSTEM_FOLDERS),
        Entry::new("Library", "/Library", SYSTEM_FOLDERS),
        Entry::new("System", "/System", SYSTEM_FOLDERS),
        Entry::new("usr/local", "/usr/local", SYSTEM_FOLDERS),
        Entry::new("Temp", "/tmp", SYSTEM_FOLDERS),
        Entry::new("User Library", under(home, "Library"), SPECIAL_FOLDERS),
        Entry::new("Launch Agents", under(home, "Library/LaunchAgents"), SPECIAL_FOLDERS),
    ]
}

#[cfg(not(any(windows, target_os = "macos")))]
fn platform_entries(home: &Path) -> Vec<Entry> {
    vec![
        Entry::new("Root", "/", SYSTEM_FOLDERS),
        Entry::new("etc", "/etc", SYSTEM_FOLDERS),
        Entry::new("usr/bin", "/usr/bin", SYSTEM_FOLDERS),
        Entry::new("Logs", "/var/log", SYSTEM_FOLDERS),
        Entry::new("Temp", "/tmp", SYSTEM_FOLDERS),
        Entry::new("Config", under(home, ".config"), SPECIAL_FOLDERS),
        Entry::new("Autostart", under(home, ".config/autostart"), SPECIAL_FOLDERS),
        Entry::new("Applications", under(home, ".local/share/applications"), SPECIAL_FOLDERS),
    ]
}
