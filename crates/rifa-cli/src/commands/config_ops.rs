use std::fs;

use super::die;

pub fn settings_export() {
    print!("{}", rifa_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        rifa_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: suggest.max_results={}, suggest.numeric_window={}, export.file_prefix={}",
        s.suggest.max_results, s.suggest.numeric_window, s.export.file_prefix
    );
}
