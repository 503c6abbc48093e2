use ratatui::style::Color;

pub fn points_color(points: u32) -> Color {
    match points {
        0..=49 => Color::Gray,
        50..=199 => Color::Yellow,
        200..=499 => Color::LightYellow,
        _ => Color::LightRed,
    }
}

pub fn comments_color(comments: u32) -> Color {
    match comments {
        0..=9 => Color::Gray,
        10..=99 => Color::Cyan,
        _ => Color::LightCyan,
    }
}

/// Classify a story for the kind column.
pub fn kind_label(title: &str, url: Option<&str>) -> &'static str {
    if title.starts_with("Ask HN") {
        "Ask"
    } else if title.starts_with("Show HN") {
        "Show"
    } else if title.starts_with("Launch HN") {
        "Launch"
    } else if url.is_none() {
        "Text"
    } else {
        "Link"
    }
}

/// Host portion of a story URL, for the compact source column.
pub fn display_host(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.split('/').next().unwrap_or(rest)
}
