// crates/cli/src/version.rs

pub fn render_version_lines() -> Vec<String> {
    vec![checksums::VERSION_TEXT.to_string()]
}

pub fn version_banner() -> String {
    render_version_lines().join("\n")
}
