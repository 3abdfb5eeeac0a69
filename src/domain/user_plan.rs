use std::fmt;

use serde::{Deserialize, Serialize};

/// Subscription tier of the submitting user. Unknown labels fall back to `Basic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserPlan {
    #[default]
    Basic,
    Premium,
}

impl UserPlan {
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("premium") {
            UserPlan::Premium
        } else {
            UserPlan::Basic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserPlan::Basic => "basic",
            UserPlan::Premium => "premium",
        }
    }
}

impl From<String> for UserPlan {
    fn from(label: String) -> Self {
        UserPlan::from_label(&label)
    }
}

impl From<UserPlan> for String {
    fn from(plan: UserPlan) -> Self {
        plan.as_str().to_string()
    }
}

impl fmt::Display for UserPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
