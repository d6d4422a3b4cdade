use dioxus::prelude::*;

/// Accent palettes used to tell the role dashboards apart.
///
/// The key is written to a `data-role-theme` attribute; the stylesheets
/// switch the accent variables on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleTheme {
    #[default]
    Green,
    Indigo,
    Blue,
    Amber,
    Teal,
}

/// All role themes in display order.
pub const ALL_THEMES: &[RoleTheme] = &[
    RoleTheme::Green,
    RoleTheme::Indigo,
    RoleTheme::Blue,
    RoleTheme::Amber,
    RoleTheme::Teal,
];

impl RoleTheme {
    /// Value of the `data-role-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTheme::Green => "green",
            RoleTheme::Indigo => "indigo",
            RoleTheme::Blue => "blue",
            RoleTheme::Amber => "amber",
            RoleTheme::Teal => "teal",
        }
    }

    /// Parse a theme key, falling back to Green.
    pub fn from_key(s: &str) -> Self {
        match s {
            "indigo" => RoleTheme::Indigo,
            "blue" => RoleTheme::Blue,
            "amber" => RoleTheme::Amber,
            "teal" => RoleTheme::Teal,
            _ => RoleTheme::Green,
        }
    }

    /// Primary accent color.
    pub fn accent(&self) -> &'static str {
        match self {
            RoleTheme::Green => "#16a34a",
            RoleTheme::Indigo => "#4f46e5",
            RoleTheme::Blue => "#2563eb",
            RoleTheme::Amber => "#d97706",
            RoleTheme::Teal => "#0d9488",
        }
    }
}

/// Mirror the role theme onto the document root so overlays rendered
/// outside the shell (toasts, dialogs) pick up the same accent.
pub fn set_role_theme(theme: RoleTheme) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-role-theme', '{}');",
        theme.as_str()
    ));
}
