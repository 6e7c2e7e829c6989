use std::path::Path;
use std::process::Command;
use treemapper_action_core::annotation;

pub struct GitHelper;

impl GitHelper {
    /// Mark `repo_path` as a safe directory in the global git config.
    ///
    /// The checkout is usually owned by another user inside the action
    /// container. Failure only produces a warning annotation.
    pub fn add_safe_directory(repo_path: &Path) -> bool {
        let output = Command::new("git")
            .args(["config", "--global", "--add", "safe.directory"])
            .arg(repo_path)
            .output();

        match output {
            Ok(output) if output.status.success() => {
                tracing::debug!("Registered safe.directory {}", repo_path.display());
                true
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                annotation::warning(&format!("Failed to set safe.directory: {}", stderr));
                false
            }
            Err(e) => {
                annotation::warning(&format!("Failed to set safe.directory: {}", e));
                false
            }
        }
    }
}
