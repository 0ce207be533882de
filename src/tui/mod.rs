pub mod app;
pub mod events;
pub mod layout;
pub mod router;
pub mod scheduler;
pub mod services;
pub mod theme;
pub mod views;
pub mod widgets;
