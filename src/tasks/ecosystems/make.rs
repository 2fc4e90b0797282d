use super::*;

/// Targets declared in a `Makefile`
pub struct MakeTasks;

impl MakeTasks {
    /// A trimmed line of the form `target:` with no whitespace in the target
    pub(crate) fn targets(content: &str) -> Vec<&str> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .filter_map(|line| line.strip_suffix(':'))
            .map(str::trim)
            .filter(|target| !target.is_empty() && !target.contains(char::is_whitespace))
            .collect()
    }
}

impl TaskProbe for MakeTasks {
    fn name(&self) -> &'static str {
        "make"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has("Makefile")
    }

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task> {
        let Some(content) = ctx.read("Makefile") else {
            return Vec::new();
        };

        Self::targets(&content)
            .into_iter()
            .map(|target| {
                Task::from_command(
                    TaskKind::Run,
                    format!("make {}", target),
                    format!("Run make target: {}", target),
                )
            })
            .collect()
    }
}
