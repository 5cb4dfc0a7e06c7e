//! Required tool report

use super::{GlobalArgs, config_root};
use crate::cli::Output;
use crate::tools::{MissingTool, ToolCheck, ToolValidator};
use anyhow::Result;

/// List every required tool and where it was found
///
/// Unlike the hooks this keeps going after the first missing tool, so one
/// run shows everything that still needs installing.
pub fn execute(global: &GlobalArgs, output: &Output) -> Result<i32> {
    let config = global.load_config(&config_root())?;
    output.header("🔧 Required Tools");

    let mut missing = Vec::new();
    for tool in &config.tools.required {
        let validator = ToolValidator::new(vec![tool.clone()]);
        match validator.validate(false) {
            Ok(ToolCheck::Verified(found)) => {
                for (name, path) in found {
                    output.table_row(&name, &path.display().to_string());
                }
            }
            Ok(ToolCheck::Skipped) => {}
            Err(e) if e.downcast_ref::<MissingTool>().is_some() => {
                output.table_row(tool, "not found");
                missing.push(tool.as_str());
            }
            Err(e) => return Err(e),
        }
    }

    output.blank_line();
    if missing.is_empty() {
        output.success(&format!(
            "All {} required tools are installed",
            config.tools.required.len()
        ));
        Ok(0)
    } else {
        output.error(&format!("Missing tools: {}", missing.join(", ")));
        Ok(MissingTool::EXIT_CODE)
    }
}
