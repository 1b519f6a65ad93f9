use super::*;
use pretty_assertions::assert_eq;

fn shapes() -> (TypeDesc, TypeDesc, TypeDesc) {
    let shape = TypeDesc::new("Shape");
    let circle = TypeDesc::new("Circle").extends(shape.clone());
    let square = TypeDesc::new("Square").extends(shape.clone());
    (shape, circle, square)
}

#[test]
fn null_input_is_sentinel() {
    let switch = TypeSwitch::build(vec![Some(PatternLabel::Int(1))]).unwrap();
    assert_eq!(switch.resolve(Scrutinee::Null, 0), CaseIndex::NULL_INPUT);
}

#[test]
fn null_label_is_rejected() {
    let err = TypeSwitch::build(vec![Some(PatternLabel::Int(1)), None]).unwrap_err();
    assert_eq!(err, SwitchError::NullLabel { position: 1 });
}

#[test]
fn first_matching_type_label_wins() {
    let (shape, circle, square) = shapes();
    let switch = TypeSwitch::build(vec![
        Some(PatternLabel::Type(circle.clone())),
        Some(PatternLabel::Type(shape)),
        Some(PatternLabel::Type(square.clone())),
    ])
    .unwrap();

    assert_eq!(switch.resolve(Scrutinee::Object(&circle), 0).raw(), 0);
    // Shape precedes Square, so squares land on the Shape case.
    assert_eq!(switch.resolve(Scrutinee::Object(&square), 0).raw(), 1);
    let other = TypeDesc::new("Label");
    assert_eq!(switch.resolve(Scrutinee::Object(&other), 0).raw(), 3);
}

#[test]
fn restart_skips_earlier_labels() {
    let (shape, circle, _) = shapes();
    let switch = TypeSwitch::build(vec![
        Some(PatternLabel::Type(circle.clone())),
        Some(PatternLabel::Type(shape)),
    ])
    .unwrap();

    assert_eq!(switch.resolve(Scrutinee::Object(&circle), 0).raw(), 0);
    assert_eq!(switch.resolve(Scrutinee::Object(&circle), 1).raw(), 1);
    assert_eq!(switch.resolve(Scrutinee::Object(&circle), 2).raw(), 2);
    assert_eq!(switch.resolve(Scrutinee::Object(&circle), 40).raw(), 2);
}

#[test]
fn constant_labels_match_by_value() {
    let switch = TypeSwitch::build(vec![
        Some(PatternLabel::text("a")),
        Some(PatternLabel::Int(65)),
        Some(PatternLabel::Int(7)),
    ])
    .unwrap();

    assert_eq!(switch.resolve(Scrutinee::Text("a"), 0).raw(), 0);
    assert_eq!(switch.resolve(Scrutinee::Text("b"), 0).raw(), 3);
    // Integer labels match characters by code point.
    assert_eq!(switch.resolve(Scrutinee::Char('A'), 0).raw(), 1);
    assert_eq!(switch.resolve(Scrutinee::Int(7), 0).raw(), 2);
    // ...but never text.
    assert_eq!(switch.resolve(Scrutinee::Text("7"), 0).raw(), 3);
}

#[test]
fn builtin_values_match_builtin_type_labels() {
    let switch = TypeSwitch::build(vec![
        Some(PatternLabel::Type(TypeDesc::new("str"))),
        Some(PatternLabel::Type(TypeDesc::new("int"))),
    ])
    .unwrap();
    assert_eq!(switch.resolve("hello".into(), 0).raw(), 0);
    assert_eq!(switch.resolve(42.into(), 0).raw(), 1);
    assert_eq!(switch.resolve('x'.into(), 0).raw(), 2);
}

#[test]
fn enum_values_match_their_type() {
    let color = EnumDescriptor::new("Color", ["Red", "Green"]);
    let switch = TypeSwitch::build(vec![
        Some(PatternLabel::Type(TypeDesc::new("Shape"))),
        Some(PatternLabel::Type(TypeDesc::new("Color"))),
    ])
    .unwrap();
    let green = color.constant_named("Green").unwrap();
    assert_eq!(switch.resolve(green.into(), 0).raw(), 1);
}

#[test]
fn option_converts_to_null() {
    let none: Option<&str> = None;
    assert_eq!(Scrutinee::from(none), Scrutinee::Null);
    assert_eq!(Scrutinee::from(Some("x")), Scrutinee::Text("x"));
}

fn colors() -> EnumDescriptor {
    EnumDescriptor::new("Color", ["Red", "Green", "Blue"])
}

#[test]
fn enum_pattern_constants_and_type() {
    let colors = colors();
    let switch = EnumPatternSwitch::build(
        &colors,
        &[
            Some(EnumPatternLabel::constant("Blue")),
            Some(EnumPatternLabel::of_type("Color")),
        ],
        UnresolvedLabelPolicy::Skip,
    )
    .unwrap();

    let blue = colors.constant_named("Blue");
    let red = colors.constant_named("Red");
    assert_eq!(switch.resolve(blue, 0).raw(), 0);
    assert_eq!(switch.resolve(red, 0).raw(), 1);
    assert_eq!(switch.resolve(blue, 1).raw(), 1);
    assert_eq!(switch.resolve(blue, 2).raw(), 2);
    assert_eq!(switch.resolve(None, 0), CaseIndex::NULL_INPUT);
}

#[test]
fn enum_pattern_without_type_label_falls_through() {
    let colors = colors();
    let switch = EnumPatternSwitch::build(
        &colors,
        &[Some(EnumPatternLabel::constant("Green"))],
        UnresolvedLabelPolicy::Skip,
    )
    .unwrap();
    assert_eq!(switch.resolve(colors.constant_named("Red"), 0).raw(), 1);
}

#[test]
fn enum_pattern_rejects_foreign_type_label() {
    let colors = colors();
    let err = EnumPatternSwitch::build(
        &colors,
        &[Some(EnumPatternLabel::of_type("Shape"))],
        UnresolvedLabelPolicy::Skip,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SwitchError::EnumTypeMismatch {
            expected: "Color".to_owned(),
            found: "Shape".to_owned(),
            position: 0,
        }
    );
}

#[test]
fn enum_pattern_rejects_null_label() {
    let colors = colors();
    let err = EnumPatternSwitch::build(&colors, &[None], UnresolvedLabelPolicy::Skip).unwrap_err();
    assert_eq!(err, SwitchError::NullLabel { position: 0 });
}

#[test]
fn enum_pattern_unresolved_label_policy() {
    let colors = colors();
    let labels = [
        Some(EnumPatternLabel::constant("Purple")),
        Some(EnumPatternLabel::constant("Red")),
    ];

    let skipping = EnumPatternSwitch::build(&colors, &labels, UnresolvedLabelPolicy::Skip).unwrap();
    assert_eq!(skipping.resolve(colors.constant_named("Red"), 0).raw(), 1);

    let err = EnumPatternSwitch::build(&colors, &labels, UnresolvedLabelPolicy::Reject).unwrap_err();
    assert!(matches!(err, SwitchError::UnresolvedLabel { position: 0, .. }));
}

#[test]
fn enum_pattern_ignores_other_enumerations() {
    let colors = colors();
    let lights = EnumDescriptor::new("Light", ["Red"]);
    let switch = EnumPatternSwitch::build(
        &colors,
        &[Some(EnumPatternLabel::of_type("Color"))],
        UnresolvedLabelPolicy::Skip,
    )
    .unwrap();
    assert_eq!(switch.resolve(lights.constant(0), 0).raw(), 1);
}
