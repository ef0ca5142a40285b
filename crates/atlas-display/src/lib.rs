//! Brand color handling for dark-background map display
//!
//! Provider brand colors come from the dataset and are not guaranteed to
//! read well against the map's near-black background. [`display_color`]
//! lifts the dark ones; everything else passes through untouched.

pub mod color;
pub mod provider;

pub use color::{
    display_color, is_dark, is_valid_hex_color, lighten, relative_luminance,
    DARK_LUMINANCE_THRESHOLD,
};
pub use provider::{ProviderStyle, ProviderStyles};
