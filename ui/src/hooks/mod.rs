// Custom hooks shared by the components.

pub mod use_banner_rotation;

pub use use_banner_rotation::use_banner_rotation;
