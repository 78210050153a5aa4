pub mod clients;
pub mod dashboard;
pub mod loading;
pub mod login;
pub mod members;
pub mod membership;
pub mod profile;
pub mod reports;
pub mod schedule;
pub mod settings;
pub mod signup;
pub mod workouts;

use gympro_core::ScreenRef;

use crate::components::Component;

/// One instance of every feature screen, looked up by [`ScreenRef`].
#[derive(Default)]
pub struct FeatureScreens {
    dashboard: dashboard::DashboardScreen,
    members: members::MembersScreen,
    reports: reports::ReportsScreen,
    schedule: schedule::ScheduleScreen,
    clients: clients::ClientsScreen,
    workouts: workouts::WorkoutsScreen,
    membership: membership::MembershipScreen,
    profile: profile::ProfileScreen,
    settings: settings::SettingsScreen,
}

impl FeatureScreens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_mut(&mut self, screen: ScreenRef) -> &mut dyn Component {
        match screen {
            ScreenRef::Dashboard => &mut self.dashboard,
            ScreenRef::Members => &mut self.members,
            ScreenRef::Reports => &mut self.reports,
            ScreenRef::Schedule => &mut self.schedule,
            ScreenRef::Clients => &mut self.clients,
            ScreenRef::Workouts => &mut self.workouts,
            ScreenRef::Membership => &mut self.membership,
            ScreenRef::Profile => &mut self.profile,
            ScreenRef::Settings => &mut self.settings,
        }
    }
}
