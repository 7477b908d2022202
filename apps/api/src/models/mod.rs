pub mod badge;
pub mod career;
pub mod chat;
pub mod dashboard;
pub mod resume;
