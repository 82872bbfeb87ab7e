pub mod hints;
pub mod money;
pub mod tabs;
