//! Forms and page templates rendered through an application.

mod common;

use chrono::{NaiveDate, NaiveTime};
use oxide_bs3::{Bs3Config, Bs3FormStyle, Bs3Overrides, FONT_AWESOME_URL};
use oxide_forms::{render_form, FormAttrs, FormField, FormValues, ValidationErrors};

use common::{app_with_bs3, asset_source};

fn fields() -> Vec<FormField> {
    vec![
        FormField::string("title"),
        FormField::boolean("published"),
        FormField::date("day"),
        FormField::time("at"),
    ]
}

#[test]
fn test_app_uses_bs3_style() {
    let source = asset_source();
    let root = tempfile::tempdir().unwrap();
    let (app, _) = app_with_bs3(root.path(), source.path(), Bs3Config::default());

    let values = FormValues::new()
        .with("title", "Hello")
        .boolean("published", true)
        .date("day", NaiveDate::from_ymd_opt(2015, 1, 1).unwrap())
        .time("at", NaiveTime::from_hms_opt(12, 30, 45).unwrap());
    let html = app
        .render_form(&fields(), &values, &ValidationErrors::new(), FormAttrs::new("/posts"))
        .unwrap();

    assert!(html.starts_with("<form"));
    assert!(html.contains(r#"class="form-horizontal""#));
    assert!(html.contains(r#"class="string form-control""#));
    assert!(html.contains(r#"class="bool checkbox""#));
    assert!(html.contains(r#"<div id="day_cat" class="input-group date">"#));
    assert!(html.contains(r#"value="2015-01-01""#));
    assert!(html.contains(r#"value="12:30:45""#));
    assert!(html.contains("$('#at_cat').datetimepicker({"));
    assert!(!html.contains("has-error"));
}

#[test]
fn test_time_without_seconds() {
    let source = asset_source();
    let root = tempfile::tempdir().unwrap();
    let config = Bs3Config {
        time_pickseconds: false,
        time_format: "HH:mm".to_string(),
        ..Bs3Config::default()
    };
    let (app, _) = app_with_bs3(root.path(), source.path(), config);

    let html = app
        .render_form(
            &[FormField::time("at")],
            &FormValues::new().with("at", "07:15:00"),
            &ValidationErrors::new(),
            FormAttrs::new("/"),
        )
        .unwrap();

    assert!(html.contains(r#"value="07:15""#));
    assert!(html.contains("useSeconds: false,"));
    assert!(html.contains("format: 'HH:mm',"));
}

#[test]
fn test_errors_mark_only_their_row() {
    let source = asset_source();
    let root = tempfile::tempdir().unwrap();
    let (app, _) = app_with_bs3(root.path(), source.path(), Bs3Config::default());

    let errors = ValidationErrors::new().with("day", "Invalid date");
    let html = app
        .render_form(&fields(), &FormValues::new(), &errors, FormAttrs::new("/"))
        .unwrap();

    assert_eq!(html.matches("has-error").count(), 1);
    assert!(html.contains(r#"<p class="text-danger">Invalid date</p>"#));
}

#[test]
fn test_explicit_style_with_bounds() {
    let style = Bs3FormStyle::new(std::sync::Arc::new(Bs3Config::default()))
        .unwrap()
        .with_field_overrides(
            "day",
            Bs3Overrides::new().min_date("2015-01-01").max_date("2015-12-31"),
        );

    let html = render_form(
        &style,
        &[FormField::date("day"), FormField::datetime("when")],
        &FormValues::new(),
        &ValidationErrors::new(),
        FormAttrs::new("/"),
    )
    .unwrap();

    assert!(html.contains(r#"minDate: "2015-01-01","#));
    assert!(html.contains(r#"maxDate: "2015-12-31","#));
    assert!(html.contains("minDate: $.fn.datetimepicker.defaults.minDate,"));
}

#[test]
fn test_include_directive() {
    let source = asset_source();
    let root = tempfile::tempdir().unwrap();
    let (app, _) = app_with_bs3(root.path(), source.path(), Bs3Config::default());

    let page = app
        .templates()
        .expand("<head>{{ include_bs3 }}</head><body>{{ unknown }}</body>");

    let bootstrap_js = page.find("/static/bs3/bootstrap.min.js").unwrap();
    let picker_js = page
        .find("/static/bs3/bootstrap-datetimepicker.min.js")
        .unwrap();
    assert!(bootstrap_js < picker_js);
    assert!(page.contains(r#"href="/static/bs3/bootstrap.min.css""#));
    assert!(page.contains(FONT_AWESOME_URL));
    assert!(page.contains("{{ unknown }}"));
}
