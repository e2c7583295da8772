use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
pub enum EventCategory {
    #[default]
    Ceremony,
    Reception,
    Photos,
    Setup,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Ceremony,
        EventCategory::Reception,
        EventCategory::Photos,
        EventCategory::Setup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Ceremony => "Ceremony",
            EventCategory::Reception => "Reception",
            EventCategory::Photos => "Photos",
            EventCategory::Setup => "Setup",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}
