//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's `src/` tree for antipatterns. Each has a
//! budget (ideally zero). To add one, remove an existing one first — budgets
//! only go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics — these abort the page's WASM instance.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss — discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
// `dom::query_all*` skips nodes of the wrong element type.
const MAX_DOT_OK: usize = 2;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;
const MAX_FORGET_CLOSURE: usize = 0;
// `&dom::window()?` is `&Window`, which does not coerce to `&EventTarget`
// inside a generic call; bind the window first.
const MAX_INLINE_WINDOW_TARGET: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn check_budget(pattern: &str, label: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found under src/");
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", ".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check_budget(".expect(", ".expect()", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check_budget("panic!(", "panic!()", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    check_budget("unreachable!(", "unreachable!()", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    check_budget("todo!(", "todo!()", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    check_budget("unimplemented!(", "unimplemented!()", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", "let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check_budget(".ok()", ".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check_budget("#[allow(dead_code)]", "#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

/// Listeners are owned by `dom::Listener`; leaking closures hides them from teardown.
#[test]
fn closure_forget_budget() {
    check_budget("closure.forget()", "closure.forget()", MAX_FORGET_CLOSURE);
}

/// Only the `hydrate` build sees listener wiring, so catch this shape natively.
#[test]
fn inline_window_target_budget() {
    check_budget("Listener::new(&dom::window()?", "Listener::new(&dom::window()?", MAX_INLINE_WINDOW_TARGET);
}
