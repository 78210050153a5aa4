/// Modal overlays: alerts and confirmations.

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    Message(MessageModal),
    Confirm(ConfirmModal),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

/// What a confirmation modal does when accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmModal {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmModal {
    pub fn new(title: &str, message: &str, action: ConfirmAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
        }
    }

    pub fn logout() -> Self {
        Self::new(
            "Logout",
            "Are you sure you want to log out?",
            ConfirmAction::Logout,
        )
    }
}
