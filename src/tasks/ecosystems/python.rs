use super::*;

const ENTRY_POINTS: &[&str] = &["main.py", "app.py", "src/main.py", "src/app.py"];

/// Standard Python tooling plus entry-point runners
pub struct PythonTasks;

impl TaskProbe for PythonTasks {
    fn name(&self) -> &'static str {
        "python"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has_any(&["requirements.txt", "setup.py", "pyproject.toml"]) || ctx.has_extension(".py")
    }

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task> {
        let mut tasks = vec![
            Task::new("Run Tests (pytest)", TaskKind::Test, "pytest", "Run Python tests with pytest"),
            Task::new("Format Code (black)", TaskKind::Format, "black .", "Format Python code with Black"),
            Task::new("Lint Code (flake8)", TaskKind::Lint, "flake8 .", "Lint Python code with flake8"),
            Task::new("Type Check (mypy)", TaskKind::Lint, "mypy .", "Run static type checker"),
        ];

        if ctx.has("requirements.txt") {
            tasks.push(Task::new(
                "Install Dependencies",
                TaskKind::Run,
                "pip install -r requirements.txt",
                "Install project requirements",
            ));
        }

        for entry in ENTRY_POINTS.iter().filter(|e| ctx.has(e)) {
            tasks.push(Task::new(
                format!("Run {}", entry),
                TaskKind::Run,
                format!("python {}", entry),
                format!("Execute {}", entry),
            ));
        }

        tasks
    }
}
