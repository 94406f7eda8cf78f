/// Format a byte count with fractional KB/MB (e.g., "1.5 KB", "2.3 MB").
pub fn format_bytes_approx(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Shorten `s` to at most `max` characters, ending in an ellipsis when cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_approx() {
        assert_eq!(format_bytes_approx(512), "512 B");
        assert_eq!(format_bytes_approx(1536), "1.5 KB");
        assert_eq!(format_bytes_approx(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_chars("Zelda", 10), "Zelda");
        assert_eq!(truncate_chars("Pokémon X", 9), "Pokémon X");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_chars("Super Mario 3D Land", 8), "Super M\u{2026}");
    }
}
