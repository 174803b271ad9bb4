#[cfg(target_os = "windows")]
pub mod windows;

/// Characters that may not appear in a file name on the host platform.
#[cfg(target_os = "windows")]
pub fn prohibited_chars() -> &'static [char] {
    windows::PROHIBITED_CHARS
}

#[cfg(not(target_os = "windows"))]
pub fn prohibited_chars() -> &'static [char] {
    &[]
}

/// First prohibited character found in `name`, if any.
pub fn find_prohibited_char(name: &str) -> Option<char> {
    prohibited_chars()
        .iter()
        .copied()
        .find(|ch| name.contains(*ch))
}
