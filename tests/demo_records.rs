//! Every sample record under `demos/` must render in strict mode
//!
//! The demo records double as documentation of the record format, so they are
//! kept complete: a missing field or a typo in a type tag fails this test.

use std::fs;
use std::path::Path;

use civil_registry_preview::{
    render_view, CertificateRecord, PreviewConfig, Stylesheet, ValidationMode,
};

#[test]
fn test_all_demo_records_render_strictly() {
    let demos_dir = Path::new("demos");

    if !demos_dir.exists() {
        panic!("Demos directory not found at {:?}", demos_dir);
    }

    let config = PreviewConfig::new().with_validation(ValidationMode::Strict);
    let mut tested = 0;
    let mut failures = Vec::new();

    for entry in fs::read_dir(demos_dir).expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read entry").path();

        if path.extension().map_or(false, |ext| ext == "json") {
            let source = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));

            let result = CertificateRecord::from_json(&source)
                .and_then(|record| render_view(&record, &config));
            match result {
                Ok(view) => {
                    if !view.has_body() {
                        failures.push(format!("{}: rendered without body", path.display()));
                    }
                    if !view.as_str().ends_with("</html>") {
                        failures.push(format!("{}: incomplete document", path.display()));
                    }
                    tested += 1;
                }
                Err(e) => {
                    failures.push(format!("{}: {}", path.display(), e));
                }
            }
        }
    }

    if !failures.is_empty() {
        panic!("Demo record failures:\n{}", failures.join("\n"));
    }

    assert_eq!(tested, 3, "expected one demo record per certificate type");
}

#[test]
fn test_demo_stylesheet_loads() {
    let stylesheet = Stylesheet::from_file(Path::new("demos/office-theme.toml"))
        .expect("demo stylesheet should parse");
    assert_eq!(stylesheet.name.as_deref(), Some("Provincial Green"));

    let source = fs::read_to_string("demos/death.json").unwrap();
    let record = CertificateRecord::from_json(&source).unwrap();
    let view = render_view(&record, &PreviewConfig::new().with_stylesheet(stylesheet)).unwrap();
    assert!(view.as_str().contains("--accent-1: #166534;"));
    assert!(view.as_str().contains(r##"<meta name="theme-color" content="#166534">"##));
    assert!(view.as_str().contains("Cardiac arrest"));
}
