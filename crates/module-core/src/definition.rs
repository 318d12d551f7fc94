//! The module contract.

use crate::fields::{standard_advanced_fields, standard_design_fields};
use serde_json::Value;
use trellis_style::{
    CssContext, CustomCssTarget, animation_data_attributes, generate_advanced_css,
    generate_animation_css, generate_custom_css, generate_visibility_css,
};
use trellis_types::{FieldSchema, FieldType, ScopeId, SettingsMap, fill_defaults};

/// The parent binding of a child module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildModuleInfo {
    /// Slug of the only module this one may be nested in.
    pub parent_slug: &'static str,
    /// Content field used to label an instance in an outline view.
    pub child_title_var: &'static str,
}

/// A child instance rendered by the renderer and handed to its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChild {
    pub scope_id: ScopeId,
    pub module_type: String,
    /// The value of the child's title field, if it set one.
    pub title: Option<String>,
    /// The child's wrapped markup.
    pub html: String,
}

/// A named, stateless rendering capability bound to a module `type`.
///
/// Implementations are pure: no I/O, no interior state, and no failure
/// modes. Domain problems with the input (an unparsable media URL, ...)
/// are reported as diagnostic markup from `render`.
pub trait ModuleDefinition: Send + Sync {
    /// The `type` string instances of this module carry.
    fn slug(&self) -> &str;

    /// Display name for authoring tools.
    fn name(&self) -> &str;

    /// Fields describing what the module shows.
    fn get_content_fields(&self) -> FieldSchema;

    /// Fields describing how the module looks.
    fn get_design_fields(&self) -> FieldSchema {
        standard_design_fields()
    }

    /// Raw overrides: id/class, motion, visibility, custom CSS.
    fn get_advanced_fields(&self) -> FieldSchema {
        standard_advanced_fields()
    }

    /// Every declared field across the three tiers, in tier order.
    /// The first declaration of a key wins.
    fn all_fields(&self) -> FieldSchema {
        let mut fields = self.get_content_fields();
        fields.extend(self.get_design_fields());
        fields.extend(self.get_advanced_fields());
        fields
    }

    /// The declared default of every field across the three tiers.
    fn get_defaults(&self) -> SettingsMap {
        self.all_fields().defaults()
    }

    /// Fills every declared key `settings` lacks with its default.
    /// Supplied values are never replaced.
    fn merge_with_defaults(&self, settings: SettingsMap) -> SettingsMap {
        fill_defaults(settings, &self.get_defaults())
    }

    /// The module's markup for fully merged settings.
    fn render(&self, settings: &SettingsMap) -> String;

    /// Markup for a parent module whose nested children are already rendered.
    fn render_with_children(&self, settings: &SettingsMap, children: &[RenderedChild]) -> String {
        let _ = children;
        self.render(settings)
    }

    /// CSS scoped to `scope`. Empty when the settings need none.
    fn generate_module_css(&self, scope: &ScopeId, settings: &SettingsMap, ctx: &CssContext) -> String {
        generate_standard_css(self, scope, settings, ctx)
    }

    /// Inner elements that accept per-element custom CSS.
    fn custom_css_targets(&self) -> &[CustomCssTarget] {
        &[]
    }

    /// For parent modules, the slug of the children they accept.
    fn child_slug(&self) -> Option<&str> {
        None
    }

    /// For child modules, their parent binding.
    fn child_info(&self) -> Option<ChildModuleInfo> {
        None
    }

    fn is_parent(&self) -> bool {
        self.child_slug().is_some()
    }

    fn is_child(&self) -> bool {
        self.child_info().is_some()
    }

    /// Extra attributes for the wrapper element the renderer puts around
    /// the module's markup. Values are unescaped.
    fn wrapper_attributes(&self, settings: &SettingsMap) -> Vec<(&'static str, String)> {
        settings
            .get("animation")
            .map(animation_data_attributes)
            .unwrap_or_default()
    }
}

/// The CSS every module gets from its declared structured fields.
///
/// Field types select the generator: spacing, background, border, shadow,
/// transform, transition and position feed the base/hover/device rules;
/// visibility, animation and custom CSS have dedicated generators.
pub fn generate_standard_css<M>(
    module: &M,
    scope: &ScopeId,
    settings: &SettingsMap,
    ctx: &CssContext,
) -> String
where
    M: ModuleDefinition + ?Sized,
{
    let selector = scope.selector();
    let fields = module.all_fields();
    let mut css = generate_advanced_css(&selector, &fields, settings, ctx);

    for (key, spec) in fields.iter() {
        let value = settings.get(key).unwrap_or(&Value::Null);
        match spec.field_type {
            FieldType::Visibility => {
                css.push_str(&generate_visibility_css(&selector, value, &ctx.breakpoints));
            }
            FieldType::Animation => {
                css.push_str(&generate_animation_css(&selector, value, ctx));
            }
            FieldType::CustomCss => css.push_str(&generate_custom_css(
                &selector,
                value,
                module.custom_css_targets(),
                &ctx.breakpoints,
            )),
            _ => {}
        }
    }
    css
}
