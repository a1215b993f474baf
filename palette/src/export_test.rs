use super::*;

fn sample_palette() -> ColorPalette {
    ColorPalette {
        brand: "#0F172A".to_owned(),
        accent: "#F97316".to_owned(),
        highlight: "hsl(48, 96%, 53%)".to_owned(),
        button_primary: "#0F172A".to_owned(),
        button_secondary: "#E2E8F0".to_owned(),
        section_bg_1: "#FFFFFF".to_owned(),
        section_bg_2: "#F8FAFC".to_owned(),
        section_bg_3: None,
        border: "#CBD5E1".to_owned(),
        input_bg: "#FFFFFF".to_owned(),
    }
}

#[test]
fn format_parsing_is_case_insensitive() {
    assert_eq!("CSS".parse::<ExportFormat>().expect("css"), ExportFormat::Css);
    assert_eq!(" tailwind ".parse::<ExportFormat>().expect("tw"), ExportFormat::Tailwind);
    let err = "xml".parse::<ExportFormat>().expect_err("xml");
    assert!(matches!(err, PaletteError::UnknownExportFormat(ref f) if f == "xml"));
}

#[test]
fn format_metadata_is_consistent() {
    for format in ExportFormat::ALL {
        assert_eq!(format.to_string().parse::<ExportFormat>().expect("parse"), format);
        assert!(!format.content_type().is_empty());
    }
    assert_eq!(ExportFormat::Tailwind.file_extension(), "js");
}

#[test]
fn kebab_flattens_camel_case_and_digits() {
    assert_eq!(kebab("onBg1"), "on-bg-1");
    assert_eq!(kebab("onBrand"), "on-brand");
    assert_eq!(kebab("section-bg-1"), "section-bg-1");
    assert_eq!(kebab("button-text"), "button-text");
}

#[test]
fn css_export_declares_base_and_role_variables() {
    let css = export_palette(&sample_palette(), ExportFormat::Css);
    assert!(css.starts_with(":root {\n"));
    assert!(css.trim_end().ends_with('}'));
    assert!(css.contains("  --brand: #0F172A;\n"));
    assert!(css.contains("  --on-brand: #FFFFFF;\n"));
    assert!(css.contains("  --on-bg-1: #000000;\n"));
    assert!(css.contains("  --on-bg-3: #000000;\n"));
    assert!(css.contains("  --button-text: #FFFFFF;\n"));
    assert!(css.contains("  --text-muted: rgba(0, 0, 0, 0.7);\n"));
    assert!(!css.contains("--section-bg-3"));
}

#[test]
fn scss_export_uses_dollar_variables() {
    let scss = export_palette(&sample_palette(), ExportFormat::Scss);
    assert!(scss.contains("$accent: #F97316;\n"));
    assert!(scss.contains("$on-accent: #000000;\n"));
}

#[test]
fn tailwind_export_wraps_colors_in_config() {
    let tw = export_palette(&sample_palette(), ExportFormat::Tailwind);
    assert!(tw.starts_with("module.exports = {"));
    assert!(tw.contains("        'highlight': 'hsl(48, 96%, 53%)',\n"));
    assert!(tw.contains("'on-primary': '#FFFFFF'"));
}

#[test]
fn json_export_is_versioned_document() {
    let json = export_palette(&sample_palette(), ExportFormat::Json);
    let doc: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["palette"]["brand"], "#0F172A");
    assert_eq!(doc["roles"]["onBg1"], "#000000");
    assert_eq!(doc["roles"]["button-text"], "#FFFFFF");
    assert_eq!(doc["textMuted"], "rgba(0, 0, 0, 0.7)");
}

#[test]
fn json_export_reimports_to_same_palette() {
    let palette = sample_palette();
    let json = export_palette(&palette, ExportFormat::Json);
    assert_eq!(import_palette_json(&json).expect("import"), palette);
}

#[test]
fn import_accepts_bare_palette_object() {
    let bare = serde_json::to_string(&sample_palette()).expect("serialize");
    assert_eq!(import_palette_json(&bare).expect("import"), sample_palette());
}

#[test]
fn import_rejects_other_versions() {
    let doc = serde_json::json!({ "version": 2, "palette": sample_palette() }).to_string();
    assert!(matches!(import_palette_json(&doc), Err(PaletteError::UnsupportedVersion(2))));
}

#[test]
fn import_rejects_malformed_documents() {
    assert!(matches!(import_palette_json("{"), Err(PaletteError::InvalidDocument(_))));
    assert!(matches!(
        import_palette_json(r#"{"version": 1}"#),
        Err(PaletteError::InvalidDocument(_))
    ));
}

#[test]
fn import_rejects_unparseable_colors() {
    let mut palette = sample_palette();
    palette.accent = "orange-ish".to_owned();
    let bare = serde_json::to_string(&palette).expect("serialize");
    assert!(matches!(
        import_palette_json(&bare),
        Err(PaletteError::InvalidColor { field: "accent", .. })
    ));
}
