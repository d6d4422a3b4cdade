use dioxus::prelude::*;

use crate::theme::RoleTheme;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is expanded. Collapsed on narrow viewports after a
/// navigation click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state to children and applies the role accent.
#[component]
pub fn SidebarProvider(
    #[props(default)] theme: RoleTheme,
    #[props(default = true)] default_open: bool,
    children: Element,
) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-role-theme": theme.as_str(),
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The navigation column. On mobile a backdrop closes it when tapped.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", if is_open { "open" } else { "closed" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand area at the top of the sidebar.
#[component]
pub fn SidebarHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "sidebar-header",
            span { class: "sidebar-brand", "{title}" }
            if !subtitle.is_empty() {
                span { class: "sidebar-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content",
            ul { class: "sidebar-menu", {children} }
        }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// One navigation entry. Clicking it reports the selection and, on narrow
/// viewports, collapses the sidebar.
#[component]
pub fn SidebarNavItem(
    label: String,
    #[props(default = false)] active: bool,
    icon: Element,
    onselect: EventHandler<()>,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                r#type: "button",
                class: "sidebar-menu-button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |_| {
                    onselect.call(());
                    state.set(SidebarState { open: false });
                },
                span { class: "sidebar-menu-icon", {icon} }
                span { class: "sidebar-menu-label", "{label}" }
            }
        }
    }
}

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            r#type: "button",
            class: "sidebar-trigger",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let current = state().open;
                state.set(SidebarState { open: !current });
            },
            {children}
        }
    }
}

/// The page area next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
