/// Identifiers for the screens the navigator can mount.
///
/// The core never renders anything; the front-end maps each reference to a
/// concrete screen component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenRef {
    Dashboard,
    Members,
    Reports,
    Schedule,
    Clients,
    Workouts,
    Membership,
    Profile,
    Settings,
}

impl ScreenRef {
    /// Route name used in the navigation table
    pub fn name(&self) -> &'static str {
        match self {
            ScreenRef::Dashboard => "Dashboard",
            ScreenRef::Members => "Members",
            ScreenRef::Reports => "Reports",
            ScreenRef::Schedule => "Schedule",
            ScreenRef::Clients => "Clients",
            ScreenRef::Workouts => "Workouts",
            ScreenRef::Membership => "Membership",
            ScreenRef::Profile => "Profile",
            ScreenRef::Settings => "Settings",
        }
    }
}
