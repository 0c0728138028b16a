// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    scanner: ScannerLimits,
    symbols: SymbolLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ScannerLimits {
    max_line_length: usize,
    max_tokens_per_line: usize,
}

#[derive(serde::Deserialize)]
struct SymbolLimits {
    max_symbols: usize,
    max_symbol_name_length: usize,
    max_block_depth: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PROTOSCAN_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=PROTOSCAN_CONFIG_DIR");

    let profile = env::var("PROTOSCAN_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("PROTOSCAN_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of proto_scanner directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig) {
    // Bounds that keep a single keystroke re-scan cheap no matter what the
    // profile asks for.
    const ABSOLUTE_MAX_LINE_LENGTH: usize = 10_000_000;
    const MIN_BLOCK_DEPTH: usize = 8;

    if config.scanner.max_line_length > ABSOLUTE_MAX_LINE_LENGTH {
        panic!("max_line_length exceeds absolute maximum");
    }
    if config.symbols.max_block_depth < MIN_BLOCK_DEPTH {
        panic!("max_block_depth too small (min: {})", MIN_BLOCK_DEPTH);
    }
    if config.scanner.max_tokens_per_line == 0 || config.symbols.max_symbols == 0 {
        panic!("limits must be non-zero");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {profile}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod scanner {{
        /// Longest line the scanner processes without a warning
        pub const MAX_LINE_LENGTH: usize = {max_line_length};

        /// Hard cap on tokens produced for a single line
        pub const MAX_TOKENS_PER_LINE: usize = {max_tokens_per_line};
    }}

    pub mod symbols {{
        /// Maximum entries in a document's symbol table
        pub const MAX_SYMBOLS: usize = {max_symbols};

        /// Maximum declared-name length accepted into the table
        pub const MAX_SYMBOL_NAME_LENGTH: usize = {max_symbol_name_length};

        /// Maximum tracked nesting depth of {{ }} blocks
        pub const MAX_BLOCK_DEPTH: usize = {max_block_depth};
    }}

    pub mod logging {{
        /// Log messages longer than this are truncated
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {max_log_message_length};
    }}
}}
"#,
        profile = profile,
        max_line_length = config.scanner.max_line_length,
        max_tokens_per_line = config.scanner.max_tokens_per_line,
        max_symbols = config.symbols.max_symbols,
        max_symbol_name_length = config.symbols.max_symbol_name_length,
        max_block_depth = config.symbols.max_block_depth,
        max_log_message_length = config.logging.max_log_message_length,
    );

    fs::write(&output_path, constants_code)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", output_path.display(), e));
}
