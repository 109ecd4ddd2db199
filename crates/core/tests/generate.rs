//! End-to-end generation tests: JSON in, formatted libdef out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use flowgen_core::{
    ApiDescription, FlowFormatter, GenerateError, Process, TypeEmitter, generate,
};

fn libdef(json: &str, process: Process) -> String {
    generate("1.8.4", json, process).unwrap()
}

const FOO: &str = r#"[
  { "type": "Structure", "name": "Foo", "properties": [
      { "name": "bar", "type": "String", "required": true }
  ] }
]"#;

#[test]
fn test_structure_output_is_deterministic() {
    let first = libdef(FOO, Process::Main);
    let second = libdef(FOO, Process::Main);
    assert_eq!(first, second);
    assert!(first.contains("declare type Foo = {\n    bar: string,\n  }"));
}

#[test]
fn test_full_file_layout() {
    let out = libdef(FOO, Process::Main);
    assert_eq!(
        out,
        "/**\n \
         * Copyright (c) electron-flowgen contributors. Licensed under the MIT license.\n \
         *\n \
         * This is an autogenerated libdef for: electron-1.8.4 main process\n \
         *\n \
         * @flow\n \
         * @format\n \
         */\n\
         declare module 'electron' {\n  \
         declare type Foo = {\n    \
         bar: string,\n  \
         }\n\
         }\n"
    );
}

#[test]
fn test_module_method_without_params() {
    let out = libdef(
        r#"[{ "type": "Module", "name": "app",
              "methods": [{ "name": "quit", "parameters": [] }] }]"#,
        Process::Main,
    );
    assert!(out.contains("declare export var app: {\n    quit: (() => void),\n  }"));
}

#[test]
fn test_ready_event_under_on_and_once() {
    let out = libdef(
        r#"[{ "type": "Module", "name": "app",
              "events": [{ "name": "ready", "returns": [] }] }]"#,
        Process::Main,
    );
    for method in ["on", "once"] {
        let expected =
            format!("    {method}: ((eventName: 'ready', callback: () => void) => void),\n");
        assert!(out.contains(&expected), "missing {method} in:\n{out}");
    }
}

#[test]
fn test_excluded_module_is_absent_for_that_process() {
    let json = r#"[
      { "type": "Module", "name": "app", "process": { "main": true, "renderer": false } },
      { "type": "Module", "name": "ipcRenderer", "process": { "main": false, "renderer": true } },
      { "type": "Module", "name": "shell" }
    ]"#;
    let main = libdef(json, Process::Main);
    let renderer = libdef(json, Process::Renderer);

    assert!(main.contains("declare export var app: {}"));
    assert!(!main.contains("ipcRenderer"));
    assert!(renderer.contains("declare export var ipcRenderer: {}"));
    assert!(!renderer.contains("var app"));
    assert!(main.contains("var shell") && renderer.contains("var shell"));
}

#[test]
fn test_unknown_names_get_exactly_one_fallback() {
    let out = libdef(
        r#"[
          { "type": "Structure", "name": "Bounds", "properties": [
              { "name": "origin", "type": "Point", "required": true },
              { "name": "rect", "type": "Rectangle", "required": true },
              { "name": "rects", "type": "Rectangle", "collection": true }
          ] },
          { "type": "Structure", "name": "Point", "properties": [] }
        ]"#,
        Process::Main,
    );
    assert_eq!(out.matches("declare type Rectangle = any;").count(), 1);
    assert!(!out.contains("declare type Point = any;"));
    assert!(out.contains("rects?: ?Array<Rectangle>,"));
}

#[test]
fn test_names_inside_free_form_types_fall_back() {
    let out = libdef(
        r#"[{ "type": "Structure", "name": "S", "properties": [
              { "name": "a", "type": "Array<Rectangle>", "required": true },
              { "name": "b", "type": "Rectangle[]", "required": true },
              { "name": "c", "type": "Array<Integer>", "required": true }
        ] }]"#,
        Process::Main,
    );
    assert!(out.contains("a: Array<Rectangle>,"));
    assert!(out.contains("b: Rectangle[],"));
    assert!(out.contains("c: Array<number>,"));
    assert_eq!(out.matches("declare type Rectangle = any;").count(), 1);
    assert!(!out.contains("declare type Integer"));
}

#[test]
fn test_module_name_used_as_type_falls_back() {
    let out = libdef(
        r#"[
          { "type": "Module", "name": "screen" },
          { "type": "Structure", "name": "S", "properties": [
              { "name": "s", "type": "screen", "required": true }
          ] }
        ]"#,
        Process::Main,
    );
    assert!(out.contains("s: screen,"));
    assert!(out.contains("declare export var screen: {}"));
    assert_eq!(out.matches("declare type screen = any;").count(), 1);
}

#[test]
fn test_hyphenated_param_names_are_identifiers() {
    let out = libdef(
        r#"[{ "type": "Module", "name": "m", "methods": [
              { "name": "f", "parameters": [{ "name": "a-b", "type": "String", "required": true }] }
        ] }]"#,
        Process::Main,
    );
    assert!(out.contains("f: ((aB: string) => void),"));
    assert!(!out.contains("a-b"));
}

#[test]
fn test_builtins_never_fall_back() {
    let out = libdef(
        r#"[{ "type": "Structure", "name": "S", "properties": [
              { "name": "a", "type": "Integer", "required": true },
              { "name": "b", "type": "Promise", "required": true },
              { "name": "c", "type": "Buffer", "required": true },
              { "name": "d", "type": "'dark'", "required": true },
              { "name": "e", "type": "(event: Event) => void", "required": true }
        ] }]"#,
        Process::Main,
    );
    assert!(out.contains("a: number,"));
    assert!(out.contains("b: Promise<any>,"));
    assert!(out.contains("c: Buffer,"));
    assert!(!out.contains("= any;"));
}

#[test]
fn test_leading_optional_param_overload() {
    let out = libdef(
        r#"[{ "type": "Module", "name": "dialog", "methods": [
              { "name": "showOpenDialog", "parameters": [
                  { "name": "browserWindow", "type": "BrowserWindow" },
                  { "name": "options", "type": "String", "required": true }
              ] }
        ] }]"#,
        Process::Main,
    );
    assert!(out.contains(
        "showOpenDialog: ((browserWindow?: ?BrowserWindow, options: string) => void) | ((options: string) => void),"
    ));
}

#[test]
fn test_hoisted_class_declared_once() {
    let out = libdef(
        r#"[
          { "type": "Structure", "name": "A", "properties": [
              { "name": "TouchBarButton", "type": "Class", "required": true,
                "instanceProperties": [{ "name": "label", "type": "String" }] }
          ] },
          { "type": "Structure", "name": "B", "properties": [
              { "name": "TouchBarButton", "type": "Class", "required": true }
          ] }
        ]"#,
        Process::Main,
    );
    assert_eq!(out.matches("declare class TouchBarButton {").count(), 1);
    assert!(out.contains("TouchBarButton: Class<TouchBarButton>,"));
    assert!(out.contains("declare class TouchBarButton {\n    label: string,\n  }"));
}

#[test]
fn test_class_and_element_declarations() {
    let out = libdef(
        r#"[
          { "type": "Class", "name": "BrowserWindow",
            "constructorMethod": { "parameters": [{ "name": "options", "type": "BrowserWindowOptions" }] },
            "staticMethods": [{ "name": "getAllWindows", "returns": { "type": "BrowserWindow", "collection": true } }],
            "instanceProperties": [{ "name": "id", "type": "Integer" }] },
          { "type": "Element", "name": "WebviewTag", "methods": [{ "name": "reload" }] }
        ]"#,
        Process::Main,
    );
    assert!(out.contains("declare export class BrowserWindow {"));
    assert!(out.contains("constructor: ((options?: ?BrowserWindowOptions) => BrowserWindow),"));
    assert!(out.contains("static getAllWindows: (() => Array<BrowserWindow>),"));
    assert!(out.contains("    id: number,\n"));
    assert!(out.contains("declare export class WebviewTag extends HTMLElement {"));
    assert_eq!(out.matches("declare type BrowserWindowOptions = any;").count(), 1);
    assert!(!out.contains("declare type BrowserWindow = any;"));
    // Elements are declared before classes.
    assert!(out.find("WebviewTag").unwrap() < out.find("class BrowserWindow").unwrap());
}

#[test]
fn test_emitter_is_reusable_across_processes() {
    let json = r#"[
      { "type": "Module", "name": "app", "process": { "main": true, "renderer": false },
        "properties": [{ "name": "dock", "type": "Dock" }] },
      { "type": "Module", "name": "webFrame", "process": { "main": false, "renderer": true },
        "properties": [{ "name": "frame", "type": "WebFrame" }] }
    ]"#;
    let api = ApiDescription::from_json(json).unwrap();
    let formatter = FlowFormatter::default();

    let shared = TypeEmitter::new("3.0.0", &api);
    let main = shared.generate(Process::Main, &formatter).unwrap();
    let renderer = shared.generate(Process::Renderer, &formatter).unwrap();

    let fresh_renderer = TypeEmitter::new("3.0.0", &api)
        .generate(Process::Renderer, &formatter)
        .unwrap();
    assert_eq!(renderer, fresh_renderer);
    assert!(main.contains("declare type Dock = any;"));
    assert!(!renderer.contains("Dock"));
}

#[test]
fn test_malformed_document_is_a_parse_error() {
    let err = generate("1.0.0", "{ \"type\": ", Process::Main).unwrap_err();
    assert!(matches!(err, GenerateError::Parse(_)));
}

#[test]
fn test_unknown_entry_kinds_are_ignored() {
    let out = libdef(
        r#"[{ "type": "Chapter", "name": "Glossary" }, { "type": "Structure", "name": "S" }]"#,
        Process::Renderer,
    );
    assert!(out.contains("declare type S = {}"));
    assert!(!out.contains("Glossary"));
}
