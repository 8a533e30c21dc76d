pub mod environment;
pub mod paths;

pub use environment::{claude_dir, projects_root};
pub use paths::{format_path_with_tilde, project_name_from_dir, to_log_dir_name};
