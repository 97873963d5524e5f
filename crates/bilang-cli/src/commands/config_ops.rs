use std::fs;

use bilang_engine::settings;

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: parser.max_tokens={}, parser.fold_case={}",
        s.parser.max_tokens, s.parser.fold_case
    );
}

/// Install a settings file as the process-wide settings.
///
/// Must run before any command touches `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_defaults_validate() {
        let s = settings::parse_settings_toml(settings::default_toml()).unwrap();
        assert!(s.parser.max_tokens > 0);
    }

    #[test]
    fn settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[parser]\nmax_tokens = 4\nfold_case = false\n").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let s = settings::parse_settings_toml(&content).unwrap();
        assert_eq!(s.parser.max_tokens, 4);
        assert!(!s.parser.fold_case);
    }
}
