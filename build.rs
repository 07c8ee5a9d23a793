//! Compiles the finder's stylesheets into the single file `asset!` serves.

use std::fs;
use std::path::{Path, PathBuf};

use lightningcss::bundler::{Bundler, FileProvider};
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions};

const STYLES_DIR: &str = "assets/css";
const ENTRY_SHEET: &str = "assets/css/main.css";
const BUNDLE_PATH: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed={STYLES_DIR}");
    for sheet in stylesheets(Path::new(STYLES_DIR)) {
        println!("cargo:rerun-if-changed={}", sheet.display());
    }

    let css = match bundle(Path::new(ENTRY_SHEET)) {
        Ok(css) => css,
        Err(err) => panic!("could not build {BUNDLE_PATH} from {ENTRY_SHEET}: {err}"),
    };

    let out = Path::new(BUNDLE_PATH);
    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir).unwrap_or_else(|e| panic!("could not create {}: {e}", dir.display()));
    }
    fs::write(out, css).unwrap_or_else(|e| panic!("could not write {BUNDLE_PATH}: {e}"));
}

/// Resolves the `@import`s of `entry` and returns one minified sheet.
fn bundle(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut sheet = bundler.bundle(entry).map_err(|e| e.to_string())?;

    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| e.to_string())?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| e.to_string())?;
    Ok(printed.code)
}

/// Every `.css` file under `dir`, so edits to an imported component sheet
/// trigger a rebuild too.
fn stylesheets(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut sheets = Vec::new();
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            sheets.extend(stylesheets(&path));
        } else if path.extension().is_some_and(|ext| ext == "css") {
            sheets.push(path);
        }
    }
    sheets
}
