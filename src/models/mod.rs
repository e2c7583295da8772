pub mod event_category;
pub mod guest;
pub mod guest_category;
pub mod profile;
pub mod project;
pub mod table;
pub mod timeline_event;

pub use event_category::EventCategory;
pub use guest::Guest;
pub use guest_category::GuestCategory;
pub use profile::Profile;
pub use project::Project;
pub use table::SeatingTable;
pub use timeline_event::TimelineEvent;
