#![allow(dead_code)]

use order_labels::config::{FontConfig, FontSpec};
use order_labels::fonts::FontSet;
use order_labels::model::{Customer, Item, Order};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/freefont",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/gnu-free",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
];

const HEADER: &[&str] = &["FreeMono.ttf", "DejaVuSansMono.ttf", "LiberationMono-Regular.ttf"];
const CUSTOMER: &[&str] = &["DejaVuSerif.ttf", "FreeSerif.ttf", "LiberationSerif-Regular.ttf"];
const ITEM: &[&str] = &["FreeSans.ttf", "DejaVuSans.ttf", "LiberationSans-Regular.ttf"];

fn locate(candidates: &[&str], size: f32) -> Option<FontSpec> {
    let env_dir = std::env::var_os("LABEL_FONT_DIR").map(PathBuf::from);
    let dirs: Vec<PathBuf> = env_dir
        .into_iter()
        .chain(FONT_DIRS.iter().map(PathBuf::from))
        .collect();
    let path = candidates
        .iter()
        .flat_map(|file| dirs.iter().map(move |dir| dir.join(file)))
        .find(|path| path.is_file())?;
    Some(FontSpec::new(path.to_string_lossy(), size))
}

/// Absolute paths to the stock faces, or installed faces of the same style
/// when a stock file is missing. `None` when nothing usable is installed.
pub fn installed_font_config() -> Option<FontConfig> {
    let stock = FontConfig::default();
    Some(FontConfig {
        header: locate(HEADER, stock.header.size)?,
        customer: locate(CUSTOMER, stock.customer.size)?,
        item: locate(ITEM, stock.item.size)?,
    })
}

pub fn installed_fonts() -> Option<Arc<FontSet>> {
    let set = FontSet::load(Path::new("/"), &installed_font_config()?).ok()?;
    Some(Arc::new(set))
}

pub fn order_with_children(children: &[usize]) -> Order {
    let items = children
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let kids: Vec<String> = (0..n).map(|c| format!("MOD-{i}-{c}")).collect();
            Item::new(format!("SKU-{i}"), kids)
        })
        .collect();
    Order::new(Customer::new("Dana", "K"), items)
}

pub fn write_order(dir: &Path, order: &Order) -> PathBuf {
    let path = dir.join("order.json");
    std::fs::write(&path, serde_json::to_string_pretty(order).unwrap()).unwrap();
    path
}

pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}
