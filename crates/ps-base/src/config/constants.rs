// =============================================================================
// TREE GLYPHS
// =============================================================================

/// Connector for every sibling except the last
pub const TREE_BRANCH: &str = "├── ";

/// Connector for the last sibling at a level
pub const TREE_CORNER: &str = "└── ";

/// Child indent below a sibling that has more siblings after it
pub const TREE_PIPE_INDENT: &str = "│   ";

/// Child indent below the last sibling
pub const TREE_SPACE_INDENT: &str = "    ";

/// Indent passed for the first level under the root line
pub const TREE_ROOT_INDENT: &str = " ";

// =============================================================================
// OUTPUT DOCUMENT
// =============================================================================

/// Title of the folder structure section
pub const STRUCTURE_TITLE: &str = "Project Folder Structure";

/// Underline written below both section titles
pub const TITLE_RULE: &str = "========================";

/// Width of the separator framing each concatenated file
pub const SEPARATOR_WIDTH: usize = 80;

/// Character the file separator is made of
pub const SEPARATOR_CHAR: char = '=';

pub const FILE_HEADER_PREFIX: &str = "// FILE: ";
pub const ERROR_HEADER_PREFIX: &str = "// ERROR READING FILE: ";
pub const ERROR_REASON_PREFIX: &str = "// REASON: ";

// =============================================================================
// CONFIG
// =============================================================================

/// Config file picked up from the project root when no `--config` is given
pub const USER_CONFIG_FILE: &str = ".project-summary.yaml";

/// Build the 80-column separator line (without newline).
pub fn separator() -> String {
    std::iter::repeat_n(SEPARATOR_CHAR, SEPARATOR_WIDTH).collect()
}
