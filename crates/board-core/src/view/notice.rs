use std::str::FromStr;

/// Alerts raised by a failed user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FieldsRequired,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    LoadFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::FieldsRequired => "Please fill in all fields.",
            Notice::CreateFailed => "Failed to create the post.",
            Notice::UpdateFailed => "Failed to update the post.",
            Notice::DeleteFailed => "Failed to delete the post.",
            Notice::LoadFailed => "Could not load the post.",
        }
    }

    /// Query-string form used when the notice survives a redirect.
    pub fn code(self) -> &'static str {
        match self {
            Notice::FieldsRequired => "fields-required",
            Notice::CreateFailed => "create-failed",
            Notice::UpdateFailed => "update-failed",
            Notice::DeleteFailed => "delete-failed",
            Notice::LoadFailed => "load-failed",
        }
    }
}

impl FromStr for Notice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Notice::FieldsRequired,
            Notice::CreateFailed,
            Notice::UpdateFailed,
            Notice::DeleteFailed,
            Notice::LoadFailed,
        ]
        .into_iter()
        .find(|notice| notice.code() == s)
        .ok_or(())
    }
}
