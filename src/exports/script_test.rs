use std::{fs, path::Path};

use crate::{
    exports::{Export, Language, extract},
    util::testing::fixtures_dir,
};

fn js(src: &str) -> Vec<Export> {
    extract(src, Language::JavaScript).unwrap()
}

fn ts(src: &str) -> Vec<Export> {
    extract(src, Language::TypeScript).unwrap()
}

#[test]
fn test_sample_ts_project() {
    let path = fixtures_dir().join("project/sample-ts-project/index.ts");
    let src = fs::read_to_string(path).unwrap();

    assert_eq!(
        ts(&src),
        vec![
            Export::new("sampleFunction"),
            Export::new("anotherFunction"),
            Export::class("SampleClass", vec!["constructor".into()]),
            Export::new("sampleVariable"),
        ]
    );
}

#[test]
fn test_functions() {
    let src = r#"
function a() {
    function nested() {}
}
export function b() {}
export default async function c() {}
function* gen() {}
const d = function named() {};
"#;
    assert_eq!(
        js(src),
        vec![
            Export::new("a"),
            Export::new("b"),
            Export::new("c"),
            Export::new("gen"),
            Export::new("d"),
        ]
    );
}

#[test]
fn test_class_methods() {
    let src = r#"
class Widget extends Base {
    count = 0;
    handler = () => { this.render(); };

    constructor(props: Props) {
        super(props);
        if (props) { this.init(); }
    }

    static create() { return new Widget(); }
    async load(url: string) {}
    get size() { return 1; }
    *items() {}
    render<T>(value: T): string {
        return `${value}`;
    }
}
"#;
    assert_eq!(
        ts(src),
        vec![Export::class(
            "Widget",
            vec![
                "constructor".into(),
                "create".into(),
                "load".into(),
                "size".into(),
                "items".into(),
                "render".into(),
            ]
        )]
    );
}

#[test]
fn test_generic_method_with_arrow_constraint() {
    let src = "export class Store {\n  subscribe<T extends (v: number) => void>(fn: T) {}\n  reset() {}\n}\n";
    assert_eq!(
        ts(src),
        vec![Export::class(
            "Store",
            vec!["subscribe".into(), "reset".into()]
        )]
    );
}

#[test]
fn test_anonymous_class() {
    let src = "export default class extends Base {\n  run() {}\n}\n";
    assert_eq!(
        js(src),
        vec![Export::class("UnnamedClass", vec!["run".into()])]
    );
}

#[test]
fn test_variables() {
    let src = r#"
const a = 1
let b = { c: 2 }
var e = [1, 2], f = 3
const { g, h } = b
export const i: string = "x";
if (a) {
    const inner = 3;
}
"#;
    assert_eq!(
        ts(src),
        vec![
            Export::new("a"),
            Export::new("b"),
            Export::new("e"),
            Export::new("f"),
            Export::new("i"),
        ]
    );
}

#[test]
fn test_literals_and_comments_are_skipped() {
    let src = r#"
// function commented() {}
/* class Hidden {} */
const s = "function fake() {";
const t = `template ${ "{" } function alsoFake() {}`;
const r = /\{class/g;
function real() {}
"#;
    assert_eq!(
        js(src),
        vec![
            Export::new("s"),
            Export::new("t"),
            Export::new("r"),
            Export::new("real"),
        ]
    );
}

#[test]
fn test_regex_after_statement_paren() {
    let src = "if (ready) /{/.test(s);\nexport function after() {}\n";
    assert_eq!(js(src), vec![Export::new("after")]);
}

#[test]
fn test_typescript_only_declarations_are_skipped() {
    let src = r#"
interface Shape { area(): number }
type Id = string;
enum Color { Red }
declare const VERSION: string;
export abstract class Base {
    abstract describe(): string;
    greet() {}
}
"#;
    assert_eq!(
        ts(src),
        vec![
            Export::new("VERSION"),
            Export::class("Base", vec!["greet".into()]),
        ]
    );
}

#[test]
fn test_language_from_path() {
    assert_eq!(Language::from_path(Path::new("a/b.js")), Some(Language::JavaScript));
    assert_eq!(Language::from_path(Path::new("index.ts")), Some(Language::TypeScript));
    assert_eq!(Language::from_path(Path::new("mod.py")), Some(Language::Python));
    assert_eq!(Language::from_path(Path::new("README.md")), None);
    assert_eq!(Language::from_path(Path::new("Makefile")), None);
}

#[test]
fn test_extract_dispatches_on_language() {
    let src = "function f() {}\n";
    assert_eq!(ts(src), vec![Export::new("f")]);
    assert!(extract(src, Language::Python).unwrap().is_empty());
}
