//! End-to-end: documents loaded from disk and memory, laid out and queried.

use std::io::Write;
use std::path::PathBuf;

use serde::Deserialize;

use gui_screen::{
    Button, Capabilities, CheckBox, Control, ControlBase, CustomControlType, DefaultContext,
    DeserializationError, DocumentLoader, HorizontalAlignment, Label, LoadError, Panel, Rect,
    Screen, Size, TextBox, VerticalAlignment, impl_control,
};

const FULL: Rect = Rect::new(0.0, 0.0, 80.0, 24.0);

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct Meter {
    #[serde(flatten)]
    base: ControlBase,
    level: u8,
}

impl_control!(Meter, "Meter", Capabilities::LEAF, {
    fn desired_size(&self) -> Size {
        Size::new(12.0, 1.0)
    }
});

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct Toolbar {
    #[serde(flatten)]
    base: ControlBase,
}

impl_control!(Toolbar, "Toolbar", Capabilities::CONTAINER);

fn temp_document(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gui-screen-{}-{name}", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_empty_document() {
    let screen = Screen::from_reader(r#"{"Controls": []}"#.as_bytes(), &[]).unwrap();
    assert!(screen.controls().is_empty());
    assert!(screen.windows().is_empty());
    assert!(screen.is_layout_required());

    let screen = Screen::from_reader("{}".as_bytes(), &[]).unwrap();
    assert!(screen.controls().is_empty());
}

#[test]
fn test_custom_types_load_and_nest() {
    let custom = [CustomControlType::of::<Meter>(), CustomControlType::of::<Toolbar>()];
    let mut screen = Screen::from_reader(
        r#"{"Controls": [
            {"Type": "Toolbar", "Name": "bar", "Height": 3, "VerticalAlignment": "Top", "Controls": [
                {"Type": "Meter", "Name": "cpu", "Level": 40, "HorizontalAlignment": "Left"},
                {"Type": "Button", "Name": "quit", "Text": "Quit", "HorizontalAlignment": "Right"}
            ]}
        ]}"#
        .as_bytes(),
        &custom,
    )
    .unwrap();

    screen.layout(&DefaultContext, FULL);

    let bar = screen.find_control::<Toolbar>("bar").unwrap();
    assert_eq!(bar.bounding_rectangle(), Rect::new(0.0, 0.0, 80.0, 3.0));

    let meter = screen.find_control::<Meter>("cpu").unwrap();
    assert_eq!(meter.level, 40);
    assert_eq!(meter.bounding_rectangle().x, 0.0);
    assert_eq!(meter.bounding_rectangle().width, 12.0);

    let quit = screen.find_control::<Button>("quit").unwrap();
    assert_eq!(quit.bounding_rectangle().right(), 80.0);
}

#[test]
fn test_custom_types_are_per_load() {
    let custom = [CustomControlType::of::<Meter>()];
    let document = r#"{"Controls": [{"Type": "Meter"}]}"#;

    assert!(Screen::from_reader(document.as_bytes(), &custom).is_ok());
    assert!(matches!(
        Screen::from_reader(document.as_bytes(), &[]),
        Err(LoadError::Deserialization(DeserializationError::UnknownType(name))) if name == "Meter"
    ));
}

#[test]
fn test_load_from_path() {
    let path = temp_document(
        "form.json",
        r#"{"Controls": [
            {"Type": "Panel", "Name": "form", "Padding": 1, "Controls": [
                {"Type": "TextBox", "Name": "user", "Text": "guest", "Height": 3, "VerticalAlignment": "Top"},
                {"Type": "CheckBox", "Name": "remember", "Text": "Remember me", "IsChecked": true,
                 "VerticalAlignment": "Bottom", "HorizontalAlignment": "Left"}
            ]}
        ]}"#,
    );

    let mut screen = Screen::from_path(&path, &[]).unwrap();
    std::fs::remove_file(&path).unwrap();

    screen.layout(&DefaultContext, FULL);

    let user = screen.find_control::<TextBox>("user").unwrap();
    assert_eq!(user.text, "guest");
    assert_eq!(user.bounding_rectangle(), Rect::new(1.0, 1.0, 78.0, 3.0));

    let remember = screen.find_control::<CheckBox>("remember").unwrap();
    assert!(remember.is_checked);
    assert_eq!(remember.bounding_rectangle().bottom(), 23.0);
    assert_eq!(remember.bounding_rectangle().x, 1.0);
}

#[test]
fn test_content_root() {
    let path = temp_document("rooted.json", r#"{"Controls": [{"Type": "Label", "Name": "l"}]}"#);
    let loader = DocumentLoader::new().with_content_root(std::env::temp_dir());

    let screen = loader.load_path(path.file_name().unwrap(), &[]).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(screen.find_control::<Label>("l").is_some());
}

#[test]
fn test_alignment_properties_parsed() {
    let screen = Screen::from_reader(
        r#"{"Controls": [{"Type": "Label", "Name": "l", "HorizontalAlignment": "Center", "VerticalAlignment": "Bottom"}]}"#
            .as_bytes(),
        &[],
    )
    .unwrap();

    let label = screen.find_control::<Label>("l").unwrap();
    assert_eq!(label.base.horizontal_alignment, HorizontalAlignment::Centre);
    assert_eq!(label.base.vertical_alignment, VerticalAlignment::Bottom);
}

#[test]
fn test_lookup_after_mutation() {
    let mut screen = Screen::from_reader(
        r#"{"Controls": [{"Type": "Panel", "Name": "root"}]}"#.as_bytes(),
        &[],
    )
    .unwrap();
    screen.layout(&DefaultContext, FULL);
    assert!(!screen.is_layout_required());

    screen
        .find_control_mut::<Panel>("root")
        .unwrap()
        .add_control(Box::new(Label::new("added")))
        .unwrap();
    assert!(screen.is_layout_required());

    screen.layout(&DefaultContext, FULL);
    assert!(!screen.is_layout_required());
    assert_eq!(
        screen.find_control::<Panel>("root").unwrap().children()[0].bounding_rectangle().width,
        80.0
    );
}
