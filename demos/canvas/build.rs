fn main() {
    // The window component ships with the library crate
    let mut library_paths = std::collections::HashMap::new();
    library_paths.insert("slint-nearest-link".into(), "../../ui/".into());

    let config = slint_build::CompilerConfiguration::default().with_library_paths(library_paths);
    slint_build::compile_with_config("ui/canvas.slint", config).unwrap();
}
