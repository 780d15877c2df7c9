//! JS module emitter
//!
//! Renders three fragments into the module template: a constants block, the
//! shared `zzfx` parameter list, and one exported wrapper function per sound.

use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

use crate::model::{Catalog, Classification, ColumnStat, ParamValue, Sound};
use crate::order::OrderPlan;
use crate::schema;

const MODULE_TEMPLATE: &str = include_str!("../../templates/zzfx_module.js.hbs");

/// Template slots for the generated module
#[derive(Serialize)]
struct ModuleData {
    constants: String,
    parameters: String,
    exports: String,
}

/// Render the complete module text
pub fn render_module(
    catalog: &Catalog,
    stats: &[ColumnStat],
    classes: &Classification,
    plan: &OrderPlan,
) -> Result<String> {
    let data = ModuleData {
        constants: constants_block(classes, stats),
        parameters: parameter_list(classes, stats, plan),
        exports: exports_block(catalog, stats, classes, plan),
    };

    let mut handlebars = Handlebars::new();
    handlebars.register_template_string("module", MODULE_TEMPLATE)?;
    Ok(handlebars.render("module", &data)?)
}

/// Emission order of the shared parameter list: solid columns (schema order)
/// then mixed columns in optimizer order. Constants never appear here.
pub fn parameter_order(classes: &Classification, plan: &OrderPlan) -> Vec<usize> {
    let mut order = classes.solid.clone();
    order.extend_from_slice(&plan.order);
    order
}

/// Format an f64 as a JS numeric literal (shortest round-trip form)
fn format_number(value: f64) -> String {
    value.to_string()
}

/// One `const <name> = <value>;` binding per constant column, schema order
fn constants_block(classes: &Classification, stats: &[ColumnStat]) -> String {
    classes
        .constant
        .iter()
        .map(|&col| {
            let value = stats[col].value.unwrap_or(schema::COLUMNS[col].default);
            format!("const {} = {};", schema::COLUMNS[col].name, format_number(value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The shared signature: solid columns declare no default (every sound
/// supplies its own value), mixed columns declare their inferred default
fn parameter_list(classes: &Classification, stats: &[ColumnStat], plan: &OrderPlan) -> String {
    let mut parts = Vec::with_capacity(classes.parameter_count());
    for &col in &classes.solid {
        parts.push(schema::COLUMNS[col].name.to_string());
    }
    for &col in &plan.order {
        let default = stats[col].value.unwrap_or(schema::COLUMNS[col].default);
        parts.push(format!("{} = {}", schema::COLUMNS[col].name, format_number(default)));
    }
    parts.join(", ")
}

/// Build one sound's argument list over the assembled parameter order.
///
/// A value matching its mixed column's default becomes an empty placeholder
/// (a JS array elision, so the declared default applies); trailing
/// placeholders are stripped entirely. Override markers pass their text
/// through verbatim.
pub fn call_arguments(
    sound: &Sound,
    param_order: &[usize],
    stats: &[ColumnStat],
    classes: &Classification,
) -> Vec<String> {
    let mut args: Vec<String> = param_order
        .iter()
        .map(|&col| match &sound.values[col] {
            ParamValue::Override(text) => text.clone(),
            ParamValue::Number(value) => {
                if classes.mixed.contains(&col) && stats[col].value == Some(*value) {
                    String::new()
                } else {
                    format_number(*value)
                }
            }
        })
        .collect();

    while args.last().is_some_and(|arg| arg.is_empty()) {
        args.pop();
    }
    args
}

fn exports_block(
    catalog: &Catalog,
    stats: &[ColumnStat],
    classes: &Classification,
    plan: &OrderPlan,
) -> String {
    let param_order = parameter_order(classes, plan);
    catalog
        .sounds
        .iter()
        .map(|sound| export_function(sound, &param_order, stats, classes))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One exported wrapper: its parameters are the sound's override markers, in
/// schema order; its body forwards to the shared call
fn export_function(
    sound: &Sound,
    param_order: &[usize],
    stats: &[ColumnStat],
    classes: &Classification,
) -> String {
    let fn_params: Vec<&str> = sound
        .values
        .iter()
        .filter_map(|value| match value {
            ParamValue::Override(text) => Some(text.as_str()),
            ParamValue::Number(_) => None,
        })
        .collect();
    let args = call_arguments(sound, param_order, stats, classes);

    format!(
        "export function {}({}) {{\n  zzfx(\n    ...[\n        {}\n    ]\n  );\n}}",
        sound.name,
        fn_params.join(", "),
        args.join(", ")
    )
}
