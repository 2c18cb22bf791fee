//! Build script for skye-commands.
//!
//! Indexes every `#[poise::command]` function in `src/` so the `source`
//! command can link to the lines that implement it, and records the poise
//! version resolved in the workspace lockfile for the `botinfo` embed.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// One indexed command function.
struct Span {
    function: String,
    path: String,
    first_line: usize,
    last_line: usize,
}

fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            collect_rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Extracts the identifier following `fn ` on a signature line.
fn function_name(line: &str) -> Option<String> {
    let start = line.find("fn ")? + 3;
    let rest = &line[start..];
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then(|| name.to_string())
}

/// Finds command spans: from the attribute line to the closing brace at column 0.
fn scan(content: &str, path: &str) -> Vec<Span> {
    let lines: Vec<&str> = content.lines().collect();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if !lines[i].trim_start().starts_with("#[poise::command") {
            i += 1;
            continue;
        }
        let attribute_line = i;
        let Some(fn_line) = (i..lines.len()).find(|&j| lines[j].contains("fn ")) else {
            break;
        };
        let Some(function) = function_name(lines[fn_line]) else {
            i = fn_line + 1;
            continue;
        };
        let Some(end_line) = (fn_line..lines.len()).find(|&j| lines[j] == "}") else {
            break;
        };
        spans.push(Span {
            function,
            path: path.to_string(),
            first_line: attribute_line + 1,
            last_line: end_line + 1,
        });
        i = end_line + 1;
    }
    spans
}

/// Reads the poise version out of the workspace `Cargo.lock`, if there is one.
fn poise_version(lockfile: &Path) -> Option<String> {
    let content = fs::read_to_string(lockfile).ok()?;
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        if line.trim() == "name = \"poise\"" {
            let version = lines.next()?.trim();
            return version
                .strip_prefix("version = \"")
                .and_then(|v| v.strip_suffix('"'))
                .map(ToString::to_string);
        }
    }
    None
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let src_dir = manifest_dir.join("src");

    // Paths in links are relative to the repository root: crates/<crate>/src/...
    let crate_prefix = match (
        manifest_dir.parent().and_then(Path::file_name),
        manifest_dir.file_name(),
    ) {
        (Some(parent), Some(name)) => format!("{}/{}", parent.to_string_lossy(), name.to_string_lossy()),
        _ => String::from("."),
    };

    let mut files = Vec::new();
    collect_rust_files(&src_dir, &mut files);

    let mut spans = Vec::new();
    for file in &files {
        let Ok(content) = fs::read_to_string(file) else {
            continue;
        };
        let relative = file
            .strip_prefix(&manifest_dir)
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/");
        spans.extend(scan(&content, &format!("{crate_prefix}/{relative}")));
    }

    let mut generated = String::from("/// Every command function found in `src/`.\npub static SOURCE_INDEX: &[SourceEntry] = &[\n");
    for span in &spans {
        let _ = writeln!(
            generated,
            "    SourceEntry {{ function: {:?}, path: {:?}, first_line: {}, last_line: {} }},",
            span.function, span.path, span.first_line, span.last_line
        );
    }
    generated.push_str("];\n");
    fs::write(out_dir.join("source_index.rs"), generated).expect("write source index");

    let lockfile = manifest_dir.join("../../Cargo.lock");
    let version = poise_version(&lockfile).unwrap_or_else(|| "0.6".to_string());
    println!("cargo:rustc-env=SKYE_POISE_VERSION={version}");

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed={}", lockfile.display());
}
