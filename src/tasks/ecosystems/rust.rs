use super::*;

pub struct RustTasks;

impl TaskProbe for RustTasks {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has("Cargo.toml")
    }

    fn tasks(&self, _ctx: &ScanContext<'_>) -> Vec<Task> {
        vec![
            Task::new("Build Rust Project", TaskKind::Build, "cargo build", "Build Rust project"),
            Task::new("Build Release", TaskKind::Build, "cargo build --release", "Build optimized release"),
            Task::new("Run Tests", TaskKind::Test, "cargo test", "Run Rust tests"),
            Task::new("Format Code", TaskKind::Format, "cargo fmt", "Format Rust code"),
            Task::new("Lint Code (clippy)", TaskKind::Lint, "cargo clippy", "Lint Rust code"),
            Task::new("Run Project", TaskKind::Run, "cargo run", "Run Rust project"),
        ]
    }
}
