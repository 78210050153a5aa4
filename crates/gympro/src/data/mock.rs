//! Static sample data rendered by the feature screens.
//!
//! The auth API is the only backend the terminal talks to; member lists,
//! schedules and plans are fixtures until their endpoints exist.

use jiff::civil::{Date, date};

/// Labelled figure shown in a dashboard stat box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

impl Stat {
    fn new(value: impl Into<String>, label: &'static str) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

/// Business overview shown on the admin dashboard
pub fn admin_stats() -> Vec<Stat> {
    vec![
        Stat::new("150", "Active Members"),
        Stat::new(crate::util::format::format_currency_short(20_000_000), "Monthly Revenue"),
        Stat::new("25", "Total Staff"),
        Stat::new("12", "New Joiners"),
    ]
}

pub const ADMIN_QUICK_ACTIONS: [&str; 4] = [
    "Add Member",
    "Manage Staff",
    "View Reports",
    "Financial Summary",
];

pub fn trainer_stats() -> Vec<Stat> {
    vec![
        Stat::new("15", "Active Clients"),
        Stat::new("8", "Sessions Today"),
        Stat::new("4", "New Assessments"),
    ]
}

pub fn member_stats() -> Vec<Stat> {
    vec![
        Stat::new("25", "Sessions Completed"),
        Stat::new("15 kg", "Weight Lost"),
        Stat::new("30 days", "Membership Left"),
    ]
}

pub const MEMBER_QUICK_ACTIONS: [&str; 4] =
    ["Book Session", "View Progress", "Diet Plan", "Contact Trainer"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Expiring,
    Lapsed,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Expiring => "Expiring",
            MemberStatus::Lapsed => "Lapsed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub name: &'static str,
    pub email: &'static str,
    pub plan: &'static str,
    pub joined: Date,
    pub status: MemberStatus,
}

pub fn members() -> Vec<MemberRow> {
    vec![
        MemberRow {
            name: "John Doe",
            email: "john.doe@example.com",
            plan: "Premium",
            joined: date(2022, 1, 1),
            status: MemberStatus::Active,
        },
        MemberRow {
            name: "Jane Smith",
            email: "jane.smith@example.com",
            plan: "Basic",
            joined: date(2023, 6, 12),
            status: MemberStatus::Active,
        },
        MemberRow {
            name: "Mike Johnson",
            email: "mike.j@example.com",
            plan: "Elite",
            joined: date(2024, 3, 3),
            status: MemberStatus::Expiring,
        },
        MemberRow {
            name: "Priya Patel",
            email: "priya.p@example.com",
            plan: "Premium",
            joined: date(2024, 9, 21),
            status: MemberStatus::Active,
        },
        MemberRow {
            name: "Tom Becker",
            email: "tom.b@example.com",
            plan: "Basic",
            joined: date(2021, 11, 5),
            status: MemberStatus::Lapsed,
        },
    ]
}

/// Month-level numbers for the reports screen
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: &'static str,
    pub revenue_cents: i64,
    pub new_members: u32,
    pub attendance_rate: f64,
}

pub fn monthly_reports() -> Vec<MonthlyReport> {
    vec![
        MonthlyReport {
            month: "Nov",
            revenue_cents: 17_450_000,
            new_members: 9,
            attendance_rate: 0.71,
        },
        MonthlyReport {
            month: "Dec",
            revenue_cents: 16_200_000,
            new_members: 6,
            attendance_rate: 0.64,
        },
        MonthlyReport {
            month: "Jan",
            revenue_cents: 21_300_000,
            new_members: 18,
            attendance_rate: 0.82,
        },
        MonthlyReport {
            month: "Feb",
            revenue_cents: 20_000_000,
            new_members: 12,
            attendance_rate: 0.78,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSlot {
    pub date: Date,
    pub time: &'static str,
    pub client: &'static str,
    pub kind: &'static str,
}

/// Trainer's upcoming sessions, first day is "today"
pub fn schedule() -> Vec<SessionSlot> {
    let today = date(2025, 2, 14);
    let tomorrow = date(2025, 2, 15);
    vec![
        SessionSlot {
            date: today,
            time: "07:00 AM",
            client: "John Doe",
            kind: "Personal Training",
        },
        SessionSlot {
            date: today,
            time: "09:00 AM",
            client: "Jane Smith",
            kind: "Group Class",
        },
        SessionSlot {
            date: today,
            time: "11:00 AM",
            client: "Mike Johnson",
            kind: "Assessment",
        },
        SessionSlot {
            date: tomorrow,
            time: "08:00 AM",
            client: "Priya Patel",
            kind: "Personal Training",
        },
        SessionSlot {
            date: tomorrow,
            time: "05:30 PM",
            client: "HIIT Group",
            kind: "Group Class",
        },
    ]
}

/// Sessions on the first day of the schedule
pub fn todays_schedule() -> Vec<SessionSlot> {
    let all = schedule();
    let Some(first) = all.first().map(|s| s.date) else {
        return Vec::new();
    };
    all.into_iter().filter(|s| s.date == first).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub name: &'static str,
    pub goal: &'static str,
    pub sessions_completed: u32,
    pub next_session: Option<Date>,
}

pub fn clients() -> Vec<ClientRow> {
    vec![
        ClientRow {
            name: "John Doe",
            goal: "Weight loss",
            sessions_completed: 25,
            next_session: Some(date(2025, 2, 14)),
        },
        ClientRow {
            name: "Jane Smith",
            goal: "Endurance",
            sessions_completed: 12,
            next_session: Some(date(2025, 2, 14)),
        },
        ClientRow {
            name: "Mike Johnson",
            goal: "Strength",
            sessions_completed: 3,
            next_session: Some(date(2025, 2, 14)),
        },
        ClientRow {
            name: "Priya Patel",
            goal: "Mobility",
            sessions_completed: 8,
            next_session: Some(date(2025, 2, 15)),
        },
        ClientRow {
            name: "Sam Lee",
            goal: "Muscle gain",
            sessions_completed: 40,
            next_session: None,
        },
    ]
}

/// Workout template: a muscle group and its exercises
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub name: &'static str,
    pub exercises: &'static [&'static str],
}

pub const WORKOUT_TEMPLATES: [WorkoutTemplate; 4] = [
    WorkoutTemplate {
        name: "Upper Body",
        exercises: &["Bench Press", "Shoulder Press", "Pull-ups"],
    },
    WorkoutTemplate {
        name: "Lower Body",
        exercises: &["Squats", "Deadlifts", "Lunges"],
    },
    WorkoutTemplate {
        name: "Core",
        exercises: &["Planks", "Crunches", "Russian Twists"],
    },
    WorkoutTemplate {
        name: "Cardio",
        exercises: &["Treadmill", "Cycling", "Jump Rope"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymClass {
    pub name: &'static str,
    pub trainer: &'static str,
    pub date: Date,
    pub time: &'static str,
    pub duration_min: u32,
    pub spots_left: u32,
    pub total_spots: u32,
}

impl GymClass {
    pub fn is_full(&self) -> bool {
        self.spots_left == 0
    }
}

pub fn classes() -> Vec<GymClass> {
    vec![
        GymClass {
            name: "Yoga Flow",
            trainer: "Sarah Johnson",
            date: date(2025, 2, 14),
            time: "07:00 AM",
            duration_min: 60,
            spots_left: 8,
            total_spots: 15,
        },
        GymClass {
            name: "HIIT Workout",
            trainer: "Mike Roberts",
            date: date(2025, 2, 14),
            time: "08:30 AM",
            duration_min: 45,
            spots_left: 5,
            total_spots: 12,
        },
        GymClass {
            name: "Strength Training",
            trainer: "David Chen",
            date: date(2025, 2, 14),
            time: "10:00 AM",
            duration_min: 50,
            spots_left: 0,
            total_spots: 10,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipPlan {
    pub name: &'static str,
    pub monthly_price_cents: i64,
    pub benefits: &'static [&'static str],
}

pub const MEMBERSHIP_PLANS: [MembershipPlan; 3] = [
    MembershipPlan {
        name: "Basic",
        monthly_price_cents: 2999,
        benefits: &[
            "Basic gym access",
            "Limited hours (6AM-8PM)",
            "Access to basic equipment",
        ],
    },
    MembershipPlan {
        name: "Premium",
        monthly_price_cents: 4999,
        benefits: &[
            "Unlimited gym access",
            "24/7 access",
            "Free fitness classes",
            "Personal trainer consultation (1/month)",
            "Access to premium equipment",
        ],
    },
    MembershipPlan {
        name: "Elite",
        monthly_price_cents: 8999,
        benefits: &[
            "Unlimited gym access",
            "24/7 access",
            "Unlimited fitness classes",
            "Weekly personal trainer sessions",
            "Access to all equipment",
            "Spa access",
            "Nutritional counseling",
        ],
    },
];

/// Plan the signed-in member is on
pub const CURRENT_PLAN: &str = "Premium";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub birthday: Date,
    pub plan: &'static str,
    pub joined: Date,
    pub expires: Date,
}

pub fn profile() -> Profile {
    Profile {
        name: "John Doe",
        email: "john.doe@example.com",
        phone: "+1 234 567 890",
        birthday: date(1990, 1, 1),
        plan: "Premium Plan",
        joined: date(2022, 1, 1),
        expires: date(2023, 1, 1),
    }
}

/// Gym contact block on the profile screen
pub const GYM_CONTACT: [(&str, &str); 3] = [
    ("Address", "123 Gym Street, Fitness City, USA"),
    ("Phone", "+1 234 567 890"),
    ("Email", "contact@gympro.com"),
];
