use std::fmt;
use std::str::FromStr;

/// A work item as handed over by the ticket source.
///
/// Fields other than `id` and `title` are optional on the wire; a record
/// missing one of them still loads and flows through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub status: Option<String>,
    pub user: Option<String>,
    pub priority: Option<i64>,
}

/// Ticket attribute used to partition the board into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupMode {
    /// The next mode in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Status => Self::User,
            Self::User => Self::Priority,
            Self::Priority => Self::Status,
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "By Status"),
            Self::User => write!(f, "By User"),
            Self::Priority => write!(f, "By Priority"),
        }
    }
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        let label = label.strip_prefix("by ").unwrap_or(&label);
        match label {
            "status" => Ok(Self::Status),
            "user" => Ok(Self::User),
            "priority" => Ok(Self::Priority),
            _ => Err(format!(
                "invalid group mode '{s}'; expected By Status, By User or By Priority"
            )),
        }
    }
}

/// Key used to order tickets within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending by numeric priority.
    #[default]
    Priority,
    /// Ascending by title.
    Title,
}

impl SortMode {
    /// The next mode in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Priority => Self::Title,
            Self::Title => Self::Priority,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "Priority"),
            Self::Title => write!(f, "Title"),
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            _ => Err(format!(
                "invalid sort mode '{s}'; expected Priority or Title"
            )),
        }
    }
}

/// Display labels for the ordinal priority scale 0..=4.
pub const PRIORITY_LABELS: [&str; 5] = ["No priority", "Low", "Medium", "High", "Urgent"];

/// Human-readable label for a ticket priority.
///
/// Values outside the 0..=4 scale keep a numeric fallback label instead of
/// indexing out of the table; an absent priority reads as "Unknown".
pub fn priority_label(priority: Option<i64>) -> String {
    match priority {
        Some(value) if (0..=4).contains(&value) => PRIORITY_LABELS[value as usize].to_string(),
        Some(value) => format!("Priority {value}"),
        None => "Unknown".to_string(),
    }
}
