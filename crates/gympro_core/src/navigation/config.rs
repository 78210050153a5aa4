use crate::role::Role;
use crate::screen::ScreenRef;

const ADMIN_TABS: [ScreenRef; 3] = [ScreenRef::Dashboard, ScreenRef::Members, ScreenRef::Reports];

const TRAINER_TABS: [ScreenRef; 3] = [
    ScreenRef::Dashboard,
    ScreenRef::Schedule,
    ScreenRef::Clients,
];

const MEMBER_TABS: [ScreenRef; 4] = [
    ScreenRef::Dashboard,
    ScreenRef::Workouts,
    ScreenRef::Membership,
    ScreenRef::Profile,
];

/// What activating a drawer entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    /// Show the role's tab set
    OpenTabs(Role),
    /// Show a common screen outside the tab set
    Open(ScreenRef),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerItem {
    pub label: &'static str,
    pub action: DrawerAction,
}

/// Routing table derived from a role. Never persisted; rebuild it from the
/// role whenever the authenticated subtree mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub role: Role,
    /// Tabs in display order
    pub tab_set: Vec<ScreenRef>,
    /// Drawer entries in display order; Settings and Logout are always last
    pub drawer_items: Vec<DrawerItem>,
}

impl NavigationConfig {
    /// Resolve straight from a raw role string (case-insensitive, unknown or
    /// absent values get the member configuration).
    pub fn for_role_str(role: Option<&str>) -> Self {
        resolve(Role::parse_or_default(role))
    }

    pub fn tab_names(&self) -> Vec<&'static str> {
        self.tab_set.iter().map(ScreenRef::name).collect()
    }

    pub fn drawer_labels(&self) -> Vec<&'static str> {
        self.drawer_items.iter().map(|item| item.label).collect()
    }
}

/// Map a role to its navigation configuration.
pub fn resolve(role: Role) -> NavigationConfig {
    let tab_set = match role {
        Role::Admin => ADMIN_TABS.to_vec(),
        Role::Trainer => TRAINER_TABS.to_vec(),
        Role::Member => MEMBER_TABS.to_vec(),
    };

    let drawer_items = vec![
        DrawerItem {
            label: role.label(),
            action: DrawerAction::OpenTabs(role),
        },
        DrawerItem {
            label: "Settings",
            action: DrawerAction::Open(ScreenRef::Settings),
        },
        DrawerItem {
            label: "Logout",
            action: DrawerAction::Logout,
        },
    ];

    NavigationConfig {
        role,
        tab_set,
        drawer_items,
    }
}
