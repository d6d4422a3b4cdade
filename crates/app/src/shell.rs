use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{
    set_role_theme, ConfirmDialog, RoleTheme, Sidebar, SidebarContent, SidebarFooter,
    SidebarHeader, SidebarInset, SidebarNavItem, SidebarProvider, SidebarTrigger,
};

use crate::controller::NavItem;
use crate::session::clear_persisted;

/// Accent palette for each role's dashboard.
pub fn theme_for(role: UserRole) -> RoleTheme {
    match role {
        UserRole::Admin => RoleTheme::Indigo,
        UserRole::Farmer => RoleTheme::Green,
        UserRole::Government => RoleTheme::Blue,
        UserRole::Insurer => RoleTheme::Amber,
        UserRole::Assessor => RoleTheme::Teal,
    }
}

/// State of the logout confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutPrompt {
    #[default]
    Closed,
    Confirming,
}

impl LogoutPrompt {
    pub fn is_open(&self) -> bool {
        *self == LogoutPrompt::Confirming
    }

    /// The logout button only opens the prompt.
    pub fn request(&mut self) {
        *self = LogoutPrompt::Confirming;
    }

    pub fn cancel(&mut self) {
        *self = LogoutPrompt::Closed;
    }

    /// Close the prompt and run `end_session` if it was open.
    pub fn confirm(&mut self, end_session: impl FnOnce()) {
        if self.is_open() {
            *self = LogoutPrompt::Closed;
            end_session();
        }
    }
}

/// Layout shared by every role dashboard: sidebar navigation, a top bar
/// with the signed-in user, and the active page.
///
/// Logout asks for confirmation first. Only a confirmed logout clears the
/// stored session and fires `on_logout`.
#[component]
pub fn DashboardShell(
    nav_items: Vec<NavItem>,
    active_page: String,
    on_page_change: EventHandler<String>,
    on_logout: EventHandler<()>,
    role: UserRole,
    display_name: String,
    children: Element,
) -> Element {
    let mut logout_prompt = use_signal(LogoutPrompt::default);
    let theme = theme_for(role);

    use_effect(move || set_role_theme(theme));

    let initials: String = display_name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }

        SidebarProvider { theme,
            Sidebar {
                SidebarHeader { title: "Crop Cover", subtitle: "{role.label()} dashboard" }
                SidebarContent {
                    for item in nav_items {
                        SidebarNavItem {
                            key: "{item.id}",
                            label: item.label.to_string(),
                            active: item.id == active_page,
                            icon: item.icon.render(),
                            onselect: move |_| on_page_change.call(item.id.to_string()),
                        }
                    }
                }
                SidebarFooter {
                    button {
                        r#type: "button",
                        class: "shell-logout",
                        onclick: move |_| logout_prompt.write().request(),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        span { "Log out" }
                    }
                }
            }
            SidebarInset {
                header { class: "shell-topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    div { class: "shell-user",
                        span { class: "shell-avatar", "{initials}" }
                        div { class: "shell-user-meta",
                            span { class: "shell-user-name", "{display_name}" }
                            span { class: "shell-user-role", "{role.label()}" }
                        }
                    }
                }
                div { class: "shell-page", {children} }
            }
        }

        ConfirmDialog {
            open: logout_prompt().is_open(),
            title: "Log out?",
            description: "You will need to sign in again to return to your dashboard.",
            confirm_label: "Log out",
            on_confirm: move |_| {
                let mut prompt = logout_prompt();
                prompt.confirm(|| {
                    clear_persisted();
                    on_logout.call(());
                });
                logout_prompt.set(prompt);
            },
            on_cancel: move |_| logout_prompt.write().cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_ROLES;
    use std::collections::HashSet;

    #[test]
    fn role_themes() {
        assert_eq!(theme_for(UserRole::Admin), RoleTheme::Indigo);
        assert_eq!(theme_for(UserRole::Farmer), RoleTheme::Green);
        assert_eq!(theme_for(UserRole::Government), RoleTheme::Blue);
        assert_eq!(theme_for(UserRole::Insurer), RoleTheme::Amber);
        assert_eq!(theme_for(UserRole::Assessor), RoleTheme::Teal);
    }

    #[test]
    fn logout_button_only_opens_the_prompt() {
        let mut prompt = LogoutPrompt::default();
        assert!(!prompt.is_open());
        prompt.request();
        assert!(prompt.is_open());
    }

    #[test]
    fn cancelled_logout_keeps_the_session() {
        let mut ended = 0;
        let mut prompt = LogoutPrompt::default();
        prompt.request();
        prompt.cancel();
        prompt.confirm(|| ended += 1);
        assert_eq!(ended, 0);
        assert!(!prompt.is_open());
    }

    #[test]
    fn confirmed_logout_ends_the_session_once() {
        let mut ended = 0;
        let mut prompt = LogoutPrompt::default();
        prompt.request();
        prompt.confirm(|| ended += 1);
        prompt.confirm(|| ended += 1);
        assert_eq!(ended, 1);
        assert_eq!(prompt, LogoutPrompt::Closed);
    }

    #[test]
    fn every_role_has_its_own_theme() {
        let themes: HashSet<RoleTheme> = ALL_ROLES.iter().map(|r| theme_for(*r)).collect();
        assert_eq!(themes.len(), ALL_ROLES.len());
    }
}
