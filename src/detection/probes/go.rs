use super::*;

/// Generic Go module fallback
pub struct GoProbe;

impl Probe for GoProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Go
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("go.mod")
            .then(|| self.server(ctx, "Go Server", "go", &["run", "."]))
    }
}
