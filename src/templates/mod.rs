pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::approval_toggle;
pub use layouts::desktop::{desktop_layout, NavItem};
