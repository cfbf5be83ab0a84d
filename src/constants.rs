// feature
pub const DEFAULT_FEATURE_NAME: &str = "pathfinding";
pub const DEFAULT_FEATURE_PATH_PATTERNS: &[&str] = &[
    r"pathfinding",
    r"navigation",
    r"obstacle",
    r"collision.*trait",
    r"environment.*integration",
];
pub const DEFAULT_FEATURE_DIFF_KEYWORDS: &[&str] =
    &["pathfind", "obstacle", "navigation", "collision_trait"];

// paths
pub const DEFAULT_GENERATED_FILES: &[&str] = &["uv.lock", "Cargo.lock", ".pre-commit-config.yaml"];
pub const DEFAULT_GITIGNORE_CANDIDATES: &[&str] = &["uv.lock"];
pub const DEFAULT_DOC_EXTENSIONS: &[&str] = &["md"];
pub const DEFAULT_NOTES_MARKERS: &[&str] = &["notes/"];
pub const DEFAULT_CONFIG_FILES: &[&str] = &["config.toml", ".pre-commit-config.yaml"];
pub const DEFAULT_SOURCE_MARKERS: &[&str] = &["src/"];

// formatting heuristic
pub const DEFAULT_IMPORT_MARKERS: &[&str] = &["use ", "mod "];
pub const DEFAULT_COMMENT_PREFIXES: &[&str] = &["//"];
pub const DEFAULT_BRACE_TOKENS: &[&str] = &["{", "}", "};", "},"];
pub const DEFAULT_DOMINANCE_RATIO: usize = 3;

// config discovery
pub const CONFIG_DIR_NAME: &str = "git-sort-changes";
pub const CONFIG_FILE_NAME: &str = "config.json";

// report
pub const RULE_WIDTH: usize = 50;
