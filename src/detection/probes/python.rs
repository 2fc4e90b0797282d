//! Python ecosystem probes (Django, FastAPI, Flask, plain Python)

use super::*;

/// `manage.py` marks a Django project
pub struct DjangoProbe;

impl Probe for DjangoProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Django
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("manage.py").then(|| {
            self.server(ctx, "Django Server", "python", &["manage.py", "runserver"])
        })
    }
}

/// ASGI entry point importing `fastapi`
pub struct FastApiProbe;

impl Probe for FastApiProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::FastApi
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        let is_fastapi = ["main.py", "app.py"]
            .iter()
            .any(|file| ctx.imports(file, "fastapi"));
        if !is_fastapi {
            return None;
        }

        let module = if !ctx.has("main.py") && ctx.has("app.py") {
            "app"
        } else {
            "main"
        };
        let app = format!("{}:app", module);

        Some(self.server(ctx, "FastAPI Server", "uvicorn", &[app.as_str(), "--reload"]))
    }
}

/// Entry point importing `flask`
pub struct FlaskProbe;

impl Probe for FlaskProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Flask
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ["app.py", "main.py"]
            .iter()
            .any(|file| ctx.imports(file, "flask"))
            .then(|| self.server(ctx, "Flask Server", "flask", &["run", "--debug"]))
    }
}

/// Generic Python fallback
pub struct PythonProbe;

impl Probe for PythonProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Python
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        if !ctx.has_any(&["requirements.txt", "main.py", "app.py"]) {
            return None;
        }

        let args: &[&str] = if ctx.has("main.py") {
            &["main.py"]
        } else if ctx.has("app.py") {
            &["app.py"]
        } else {
            &[]
        };

        Some(self.server(ctx, "Python Server", "python", args))
    }
}
