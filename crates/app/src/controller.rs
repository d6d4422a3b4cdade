//! Per-role page controllers.
//!
//! Each role has a closed page enum and a static table mapping every variant
//! to its nav id, label, icon and page component. The controller only holds
//! the active variant; navigation ids that are not in the table (or whose
//! page is switched off by a feature flag) leave it unchanged.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdFileText, LdLayoutDashboard, LdMap, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;

use crate::routes::pages::{
    AnalyticsPage, AssessmentsPage, ClaimsPage, FarmsPage, OverviewPage, PoliciesPage,
    SettingsPage, UsersPage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Overview,
    Users,
    Policies,
    Claims,
    Assessments,
    Farms,
    Analytics,
    Settings,
}

impl NavIcon {
    pub fn render(self) -> Element {
        match self {
            NavIcon::Overview => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            NavIcon::Policies => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
            NavIcon::Claims => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
            NavIcon::Assessments => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
            NavIcon::Farms => rsx! { Icon::<LdMap> { icon: LdMap, width: 18, height: 18 } },
            NavIcon::Analytics => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
            NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        }
    }
}

/// Navigation descriptor handed to the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

/// One row of a role's page table.
pub struct PageEntry<P: 'static> {
    pub page: P,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub render: fn() -> Element,
}

impl<P> PageEntry<P> {
    fn enabled(&self, flags: &FeatureFlags) -> bool {
        match self.icon {
            NavIcon::Analytics => flags.analytics,
            _ => true,
        }
    }

    pub fn nav_item(&self) -> NavItem {
        NavItem {
            id: self.id,
            label: self.label,
            icon: self.icon,
        }
    }
}

/// A role's closed set of pages.
pub trait DashboardPage: Copy + PartialEq + 'static {
    /// Landing page after login.
    const HOME: Self;

    /// Every page in nav order. Must contain each variant exactly once.
    fn entries() -> &'static [PageEntry<Self>];
}

macro_rules! page {
    ($page:expr, $id:literal, $label:literal, $icon:ident, $render:ident) => {
        PageEntry {
            page: $page,
            id: $id,
            label: $label,
            icon: NavIcon::$icon,
            render: $render,
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Overview,
    Users,
    Policies,
    Claims,
    Assessments,
    Farms,
    Analytics,
    Settings,
}

static ADMIN_PAGES: [PageEntry<AdminPage>; 8] = [
    page!(AdminPage::Overview, "overview", "Overview", Overview, OverviewPage),
    page!(AdminPage::Users, "users", "Users", Users, UsersPage),
    page!(AdminPage::Policies, "policies", "Policies", Policies, PoliciesPage),
    page!(AdminPage::Claims, "claims", "Claims", Claims, ClaimsPage),
    page!(AdminPage::Assessments, "assessments", "Assessments", Assessments, AssessmentsPage),
    page!(AdminPage::Farms, "farms", "Farms", Farms, FarmsPage),
    page!(AdminPage::Analytics, "analytics", "Analytics", Analytics, AnalyticsPage),
    page!(AdminPage::Settings, "settings", "Settings", Settings, SettingsPage),
];

impl DashboardPage for AdminPage {
    const HOME: Self = AdminPage::Overview;

    fn entries() -> &'static [PageEntry<Self>] {
        &ADMIN_PAGES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmerPage {
    Overview,
    Farms,
    Policies,
    Claims,
    Settings,
}

static FARMER_PAGES: [PageEntry<FarmerPage>; 5] = [
    page!(FarmerPage::Overview, "overview", "Overview", Overview, OverviewPage),
    page!(FarmerPage::Farms, "farms", "My Farms", Farms, FarmsPage),
    page!(FarmerPage::Policies, "policies", "My Policies", Policies, PoliciesPage),
    page!(FarmerPage::Claims, "claims", "My Claims", Claims, ClaimsPage),
    page!(FarmerPage::Settings, "settings", "Settings", Settings, SettingsPage),
];

impl DashboardPage for FarmerPage {
    const HOME: Self = FarmerPage::Overview;

    fn entries() -> &'static [PageEntry<Self>] {
        &FARMER_PAGES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernmentPage {
    Overview,
    Policies,
    Claims,
    Farms,
    Analytics,
    Settings,
}

static GOVERNMENT_PAGES: [PageEntry<GovernmentPage>; 6] = [
    page!(GovernmentPage::Overview, "overview", "Overview", Overview, OverviewPage),
    page!(GovernmentPage::Policies, "policies", "Policies", Policies, PoliciesPage),
    page!(GovernmentPage::Claims, "claims", "Claims", Claims, ClaimsPage),
    page!(GovernmentPage::Farms, "farms", "Farms", Farms, FarmsPage),
    page!(GovernmentPage::Analytics, "analytics", "Analytics", Analytics, AnalyticsPage),
    page!(GovernmentPage::Settings, "settings", "Settings", Settings, SettingsPage),
];

impl DashboardPage for GovernmentPage {
    const HOME: Self = GovernmentPage::Overview;

    fn entries() -> &'static [PageEntry<Self>] {
        &GOVERNMENT_PAGES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsurerPage {
    Overview,
    Policies,
    Claims,
    Assessments,
    Settings,
}

static INSURER_PAGES: [PageEntry<InsurerPage>; 5] = [
    page!(InsurerPage::Overview, "overview", "Overview", Overview, OverviewPage),
    page!(InsurerPage::Policies, "policies", "Policies", Policies, PoliciesPage),
    page!(InsurerPage::Claims, "claims", "Claims", Claims, ClaimsPage),
    page!(InsurerPage::Assessments, "assessments", "Assessments", Assessments, AssessmentsPage),
    page!(InsurerPage::Settings, "settings", "Settings", Settings, SettingsPage),
];

impl DashboardPage for InsurerPage {
    const HOME: Self = InsurerPage::Overview;

    fn entries() -> &'static [PageEntry<Self>] {
        &INSURER_PAGES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessorPage {
    Overview,
    Assessments,
    Farms,
    Settings,
}

static ASSESSOR_PAGES: [PageEntry<AssessorPage>; 4] = [
    page!(AssessorPage::Overview, "overview", "Overview", Overview, OverviewPage),
    page!(AssessorPage::Assessments, "assessments", "My Assessments", Assessments, AssessmentsPage),
    page!(AssessorPage::Farms, "farms", "Farms", Farms, FarmsPage),
    page!(AssessorPage::Settings, "settings", "Settings", Settings, SettingsPage),
];

impl DashboardPage for AssessorPage {
    const HOME: Self = AssessorPage::Overview;

    fn entries() -> &'static [PageEntry<Self>] {
        &ASSESSOR_PAGES
    }
}

/// Active-page state for one role dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PageController<P: DashboardPage> {
    active: P,
    flags: FeatureFlags,
}

impl<P: DashboardPage> PageController<P> {
    pub fn new(flags: FeatureFlags) -> Self {
        Self {
            active: P::HOME,
            flags,
        }
    }

    pub fn active(&self) -> P {
        self.active
    }

    /// Table row of the active page.
    pub fn entry(&self) -> &'static PageEntry<P> {
        let entries = P::entries();
        entries
            .iter()
            .find(|e| e.page == self.active)
            .unwrap_or(&entries[0])
    }

    pub fn select(&mut self, page: P) {
        self.active = page;
    }

    /// Switch to the page with nav id `id`. Returns false, leaving the
    /// active page as it was, when no enabled page has that id.
    pub fn select_id(&mut self, id: &str) -> bool {
        let found = P::entries()
            .iter()
            .find(|e| e.id == id && e.enabled(&self.flags));
        match found {
            Some(entry) => {
                self.active = entry.page;
                true
            }
            None => false,
        }
    }

    /// Nav items in display order, minus pages switched off by flags.
    pub fn nav_items(&self) -> Vec<NavItem> {
        P::entries()
            .iter()
            .filter(|e| e.enabled(&self.flags))
            .map(PageEntry::nav_item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn ids<P: DashboardPage>(flags: FeatureFlags) -> Vec<&'static str> {
        PageController::<P>::new(flags)
            .nav_items()
            .iter()
            .map(|n| n.id)
            .collect()
    }

    fn assert_table_is_well_formed<P: DashboardPage + std::fmt::Debug>() {
        let entries = P::entries();
        let unique: HashSet<&str> = entries.iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), entries.len(), "duplicate nav id");
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert!(a.page != b.page, "{:?} listed twice", a.page);
            }
        }
        assert_eq!(entries[0].page, P::HOME);
    }

    #[test]
    fn tables_are_well_formed() {
        assert_table_is_well_formed::<AdminPage>();
        assert_table_is_well_formed::<FarmerPage>();
        assert_table_is_well_formed::<GovernmentPage>();
        assert_table_is_well_formed::<InsurerPage>();
        assert_table_is_well_formed::<AssessorPage>();
    }

    #[test]
    fn role_page_sets() {
        let flags = FeatureFlags::default();
        assert_eq!(
            ids::<AdminPage>(flags.clone()),
            vec!["overview", "users", "policies", "claims", "assessments", "farms", "analytics", "settings"]
        );
        assert_eq!(
            ids::<FarmerPage>(flags.clone()),
            vec!["overview", "farms", "policies", "claims", "settings"]
        );
        assert_eq!(
            ids::<GovernmentPage>(flags.clone()),
            vec!["overview", "policies", "claims", "farms", "analytics", "settings"]
        );
        assert_eq!(
            ids::<InsurerPage>(flags.clone()),
            vec!["overview", "policies", "claims", "assessments", "settings"]
        );
        assert_eq!(
            ids::<AssessorPage>(flags),
            vec!["overview", "assessments", "farms", "settings"]
        );
    }

    #[test]
    fn starts_on_overview() {
        let controller = PageController::<FarmerPage>::new(FeatureFlags::default());
        assert_eq!(controller.active(), FarmerPage::Overview);
        assert_eq!(controller.entry().id, "overview");
    }

    #[test]
    fn select_id_switches_page() {
        let mut controller = PageController::<AdminPage>::new(FeatureFlags::default());
        assert!(controller.select_id("claims"));
        assert_eq!(controller.active(), AdminPage::Claims);
        assert_eq!(controller.entry().label, "Claims");
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut controller = PageController::<AssessorPage>::new(FeatureFlags::default());
        controller.select(AssessorPage::Farms);
        assert!(!controller.select_id("users"));
        assert!(!controller.select_id(""));
        assert_eq!(controller.active(), AssessorPage::Farms);
    }

    #[test]
    fn analytics_flag_hides_page() {
        let flags = FeatureFlags {
            analytics: false,
            ..FeatureFlags::default()
        };
        assert!(!ids::<GovernmentPage>(flags.clone()).contains(&"analytics"));

        let mut controller = PageController::<GovernmentPage>::new(flags);
        assert!(!controller.select_id("analytics"));
        assert_eq!(controller.active(), GovernmentPage::Overview);
    }
}
