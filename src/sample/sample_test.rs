use std::any::TypeId;

use crate::sample::{self, submodule};

fn output_of<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_top_level_functions_print_one_line() {
    assert_eq!(
        output_of(|out| sample::sample_function_to(out)),
        "This is a sample function\n"
    );
    assert_eq!(
        output_of(|out| sample::another_function_to(out)),
        "This is another function\n"
    );
}

#[test]
fn test_nested_functions_print_one_line() {
    assert_eq!(
        output_of(|out| submodule::sample_function_to(out)),
        "This is a sample function\n"
    );
    assert_eq!(
        output_of(|out| submodule::another_function_to(out)),
        "This is another function\n"
    );
}

#[test]
fn test_class_constructor_prints_one_line() {
    let out = output_of(|out| sample::SampleClass::new_to(out).map(|_| ()));
    assert_eq!(out, "This is a sample class\n");
}

#[test]
fn test_sample_variable() {
    assert_eq!(sample::SAMPLE_VARIABLE, "This is a sample variable");
    assert_eq!(submodule::SAMPLE_VARIABLE, "This is a sample variable");
}

#[test]
fn test_export_lists() {
    assert_eq!(sample::EXPORTS, &["SampleClass"]);
    assert_eq!(
        submodule::EXPORTS,
        &[
            "sample_function",
            "another_function",
            "SampleClass",
            "sample_variable",
            "MyTest"
        ]
    );
}

#[test]
fn test_top_level_class_is_nested_class() {
    assert_eq!(
        TypeId::of::<sample::SampleClass>(),
        TypeId::of::<submodule::SampleClass>()
    );
}

#[test]
fn test_my_test_is_constructible() {
    assert_eq!(submodule::MyTest::new(), submodule::MyTest::default());
}

#[test]
fn test_sample_class_default() {
    let class = sample::SampleClass::default();
    assert!(format!("{:?}", class).starts_with("SampleClass"));
}
