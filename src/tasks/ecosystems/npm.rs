use super::*;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct PackageScripts {
    #[serde(default)]
    scripts: BTreeMap<String, String>,
}

/// Scripts declared in `package.json`, sorted by name
pub struct NpmTasks;

impl NpmTasks {
    pub(crate) fn parse(content: &str) -> Vec<Task> {
        let Ok(manifest) = serde_json::from_str::<PackageScripts>(content) else {
            return Vec::new();
        };

        manifest
            .scripts
            .into_iter()
            .map(|(script, body)| {
                Task::from_command(
                    TaskKind::classify(&script),
                    format!("npm run {}", script),
                    body,
                )
            })
            .collect()
    }
}

impl TaskProbe for NpmTasks {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has("package.json")
    }

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task> {
        ctx.read("package.json")
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }
}
