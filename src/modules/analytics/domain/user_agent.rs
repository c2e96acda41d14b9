use std::sync::LazyLock;

use regex::Regex;

use super::entities::DeviceKind;

static TABLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tablet|ipad|playbook|silk").unwrap());

static MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)mobile|iphone|ipod|android|blackberry|opera|mini|windows\sce|palm|smartphone|iemobile")
        .unwrap()
});

/// Checked in order; the first match wins. Edge and Opera carry a
/// `Chrome` token and Chrome carries a `Safari` token, so they come first.
static BROWSERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"Edg(e|A|iOS)?/").unwrap(), "Edge"),
        (Regex::new(r"OPR/|Opera").unwrap(), "Opera"),
        (Regex::new(r"Chrome/|CriOS/").unwrap(), "Chrome"),
        (Regex::new(r"Firefox/|FxiOS/").unwrap(), "Firefox"),
        (Regex::new(r"Safari/").unwrap(), "Safari"),
    ]
});

/// Android before Linux and iOS before macOS: both pairs overlap.
static SYSTEMS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"Windows").unwrap(), "Windows"),
        (Regex::new(r"Android").unwrap(), "Android"),
        (Regex::new(r"iPhone|iPad|iPod").unwrap(), "iOS"),
        (Regex::new(r"Mac OS X|Macintosh").unwrap(), "macOS"),
        (Regex::new(r"Linux|X11").unwrap(), "Linux"),
    ]
});

pub const OTHER: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub device: DeviceKind,
    pub browser: &'static str,
    pub os: &'static str,
}

/// Heuristic classification. Anything unrecognised is a desktop running
/// `Other`.
pub fn classify_user_agent(user_agent: &str) -> UserAgentInfo {
    let device = if TABLET.is_match(user_agent) {
        DeviceKind::Tablet
    } else if MOBILE.is_match(user_agent) {
        DeviceKind::Mobile
    } else {
        DeviceKind::Desktop
    };

    let first_match = |table: &[(Regex, &'static str)]| {
        table
            .iter()
            .find(|(re, _)| re.is_match(user_agent))
            .map_or(OTHER, |(_, name)| *name)
    };

    UserAgentInfo {
        device,
        browser: first_match(&BROWSERS),
        os: first_match(&SYSTEMS),
    }
}
