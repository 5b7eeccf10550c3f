// End-to-end flows through the public library API

use white_label_studio::controllers::{ConfigurationPanel, ThemeManagerPanel};
use white_label_studio::error::ImportError;
use white_label_studio::model::{ColorRole, FontSizeStep, RadiusStep, Theme};
use white_label_studio::serialize::{css_variable_names, export_css, export_json, ExportFormat};
use white_label_studio::store::{ThemeStore, TokenStore};

#[test]
fn edited_primary_color_reaches_css_export() {
    let mut store = ThemeStore::default();
    let mut manager = ThemeManagerPanel::default();

    manager.open_edit(&store, "1").unwrap();
    manager.set_draft_color(ColorRole::Primary, "#ff0000".to_string());
    manager.save(&mut store).unwrap();

    let before = export_css(&Theme::default_template());
    let file = manager.export(&store, ExportFormat::Css).unwrap();

    assert_eq!(file.file_name, "default-theme.css");
    assert!(file.contents.contains("  --color-primary: #ff0000;\n"));
    for line in before.lines().filter(|l| l.contains("--color-") && !l.contains("primary")) {
        assert!(file.contents.contains(line), "missing {line}");
    }
}

#[test]
fn css_export_declares_variables_in_fixed_order() {
    let css = export_css(&Theme::dark_template());
    let declared: Vec<String> = css
        .lines()
        .filter_map(|l| l.trim().strip_prefix("--"))
        .filter_map(|l| l.split(':').next())
        .map(str::to_string)
        .collect();
    assert_eq!(declared, css_variable_names());
    assert_eq!(declared.len(), 18);
}

fn edited_draft(store: &mut ThemeStore) -> Theme {
    let mut manager = ThemeManagerPanel::default();
    manager.open_create(store);
    manager.set_draft_name("Coastal Night".to_string());
    manager.set_draft_description("Edited in the dialog".to_string());
    manager.set_draft_color(ColorRole::Muted, "#334455".to_string());
    manager.set_draft_font_family("Georgia, serif".to_string());
    manager.set_draft_font_size(FontSizeStep::Xxl, "1.75rem".to_string());
    manager.set_draft_radius(RadiusStep::Lg, "0.9rem".to_string());
    manager.save(store).unwrap();

    let mut theme = store.selected().clone();
    theme.spacing.scale = vec![0.0, 0.5, 1.5, 2.5, 5.0];
    theme
}

#[test]
fn exported_json_imports_as_new_theme() {
    let mut store = ThemeStore::default();
    let manager = ThemeManagerPanel::default();

    let mut originals = Theme::builtin();
    originals.push(edited_draft(&mut store));
    assert_ne!(
        originals[3].spacing.scale,
        Theme::default_template().spacing.scale
    );

    for original in originals {
        let count = store.len();
        let json = export_json(&original).unwrap();
        let imported = manager.import(&mut store, &json).unwrap().clone();

        assert_ne!(imported.id, original.id);
        assert_eq!(
            Theme {
                id: original.id.clone(),
                ..imported.clone()
            },
            original
        );
        assert_eq!(store.selected().id, imported.id);
        assert_eq!(store.len(), count + 1);
    }
}

#[test]
fn malformed_import_leaves_store_untouched() {
    let mut store = ThemeStore::default();
    let manager = ThemeManagerPanel::default();
    let before = store.clone();

    let err = manager.import(&mut store, "{not json").unwrap_err();
    assert!(matches!(err, ImportError::Malformed(_)));

    let err = manager.import(&mut store, r#"{"id":"x","name":"No colors"}"#).unwrap_err();
    assert!(matches!(err, ImportError::MissingField("colors")));

    assert_eq!(store, before);
}

#[test]
fn removing_every_theme_falls_back_to_default_template() {
    let mut store = ThemeStore::new(vec![Theme::brand_template()]);
    store.remove("2").unwrap();

    assert_eq!(store.len(), 1);
    let remaining = store.selected();
    assert_eq!(remaining.name, "Default Theme");
    assert_eq!(remaining.colors, Theme::default_template().colors);
}

#[test]
fn token_edit_touches_only_the_target_token() {
    let mut tokens = TokenStore::default();
    let before = tokens.clone();

    tokens
        .update_color_value("Brand Primary", "color-brand-primary-medium", "#123456")
        .unwrap();

    assert_eq!(
        tokens.color_value("Brand Primary", "color-brand-primary-medium"),
        Some("#123456")
    );
    for (old, new) in before.categories().iter().zip(tokens.categories()) {
        for (a, b) in old.colors.iter().zip(&new.colors) {
            if b.name != "color-brand-primary-medium" {
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn configuration_export_carries_palette_edits() {
    let mut tokens = TokenStore::default();
    let mut panel = ConfigurationPanel::default();

    panel.set_color(&mut tokens, 0, "#abcdef".to_string()).unwrap();
    let json = panel.export(&tokens).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["colors"][0]["value"], "#abcdef");
    assert_eq!(value["spacing"]["unit"], "rem");
    assert!(value.get("darkMode").is_some());
}
