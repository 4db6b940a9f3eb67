pub mod button;
pub mod container;
pub mod icon_button;
pub mod menu;

// Re-exports for convenience
pub use button::*;
pub use container::*;
pub use icon_button::*;
pub use menu::*;
