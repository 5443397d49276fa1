//! Shader Tests - WGSL Validation
//!
//! Parses and validates the inline shaders with naga so a typo fails in
//! `cargo test` rather than at pipeline creation.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use volley_engine::render::{MESH_SHADER, UI_SHADER};

fn validate(name: &str, source: &str) -> naga::Module {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{} failed to parse: {}", name, e.emit_to_string(source)));
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|e| panic!("{} failed validation: {:?}", name, e));
    module
}

fn entry_points(module: &naga::Module) -> Vec<&str> {
    module.entry_points.iter().map(|ep| ep.name.as_str()).collect()
}

#[test]
fn test_mesh_shader_is_valid() {
    let module = validate("mesh", MESH_SHADER);
    let names = entry_points(&module);
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn test_ui_shader_is_valid() {
    let module = validate("ui", UI_SHADER);
    let names = entry_points(&module);
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn test_ui_shader_has_no_bindings() {
    let module = validate("ui", UI_SHADER);
    assert!(module.global_variables.iter().all(|(_, var)| var.binding.is_none()));
}
