use super::*;

pub struct GoTasks;

impl TaskProbe for GoTasks {
    fn name(&self) -> &'static str {
        "go"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has("go.mod")
    }

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task> {
        let mut tasks = vec![
            Task::new("Build Go Project", TaskKind::Build, "go build ./...", "Build Go project"),
            Task::new("Run Tests", TaskKind::Test, "go test ./...", "Run all Go tests"),
            Task::new("Format Code (gofmt)", TaskKind::Format, "gofmt -w .", "Format Go code"),
            Task::new("Run Go Vet", TaskKind::Lint, "go vet ./...", "Check Go code for issues"),
        ];

        if ctx.has("main.go") {
            tasks.push(Task::new("Run main.go", TaskKind::Run, "go run main.go", "Execute main.go"));
        }

        tasks
    }
}
