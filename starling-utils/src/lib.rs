//! Path helpers shared by the reporter crates.

use dirs_next::home_dir;
use std::path::{Component, Path, PathBuf};

/// Replace a leading `~` component in a path with the given home directory.
/// Paths without a leading `~` are returned unchanged.
pub fn expand_tilde_with<P: AsRef<Path>>(path: P, home: Option<PathBuf>) -> Option<PathBuf> {
    let p = path.as_ref();
    let mut components = p.components();

    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let rest = components.as_path();
            home.map(|h| match rest.as_os_str().is_empty() {
                true => h,
                false => h.join(rest),
            })
        }
        _ => Some(p.to_path_buf()),
    }
}

/// Replace a leading `~` in a path with the current user's home directory.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    expand_tilde_with(path, home_dir())
}
