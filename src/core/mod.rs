pub mod backup;
pub mod calculator;
pub mod context;
pub mod guests;
pub mod log;
pub mod profile;
pub mod projects;
pub mod seating;
pub mod timeline;
