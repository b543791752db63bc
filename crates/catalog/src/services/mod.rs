//! Session-level services that sit above the immutable catalog.

pub mod filter_lightbox;

pub use filter_lightbox::{
    FilterAndLightboxController, FilterAndLightboxState, FilterChip, LightboxState, LightboxView,
    NavigationError,
};
