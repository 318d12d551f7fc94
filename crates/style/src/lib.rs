pub mod advanced;
pub mod breakpoints;
pub mod css;
pub mod custom;
pub mod layout;
pub mod spacing;

pub use advanced::{
    AnimationTrigger, animation_data_attributes, generate_advanced_css, generate_animation_css,
    generate_visibility_css,
};
pub use breakpoints::{Breakpoints, CssContext};
pub use css::{Rule, media_block, sanitize_value, to_css_property};
pub use custom::{CustomCssTarget, generate_custom_css};
pub use layout::parse_column_layout;
pub use spacing::{generate_responsive_spacing_css, get_spacing_value};
