//! Ordered probe registry
//!
//! Priority between probes is expressed purely by registration order: a
//! fallback probe only fires when nothing registered before it has matched.

use super::probes::*;
use super::types::{ProjectType, ServerConfig};
use tracing::trace;

/// Result of running every probe over a single directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Type of the last probe that fired, or `Unknown`
    pub project_type: ProjectType,
    pub servers: Vec<ServerConfig>,
}

pub struct ProbeRegistry {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(DjangoProbe));
        registry.register(Box::new(FastApiProbe));
        registry.register(Box::new(SpringBootProbe));
        registry.register(Box::new(NextJsProbe));
        registry.register(Box::new(NestJsProbe));
        registry.register(Box::new(AngularProbe));
        registry.register(Box::new(VueProbe));
        registry.register(Box::new(ViteProbe));
        registry.register(Box::new(WebpackProbe));
        registry.register(Box::new(ReactProbe));
        registry.register(Box::new(ExpressProbe));
        registry.register(Box::new(NodeProbe));
        registry.register(Box::new(FlaskProbe));
        registry.register(Box::new(PythonProbe));
        registry.register(Box::new(GoProbe));

        registry
    }

    /// Append a probe; it runs after every probe registered so far
    pub fn register(&mut self, probe: Box<dyn Probe>) {
        self.probes.push(probe);
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Types of the registered probes in evaluation order
    pub fn project_types(&self) -> Vec<ProjectType> {
        self.probes.iter().map(|p| p.project_type()).collect()
    }

    pub fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let mut outcome = ProbeOutcome::default();

        for probe in &self.probes {
            if probe.guard() == ProbeGuard::OnlyIfEmpty && !outcome.servers.is_empty() {
                continue;
            }

            if let Some(server) = probe.probe(ctx) {
                trace!(
                    probe = %probe.project_type(),
                    dir = %ctx.dir().display(),
                    "Probe matched"
                );
                outcome.project_type = probe.project_type();
                outcome.servers.push(server);
            }
        }

        outcome
    }
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_registry_creation() {
        let registry = ProbeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(ProbeRegistry::with_defaults().len(), 15);
    }

    #[test]
    fn test_default_order() {
        let types = ProbeRegistry::with_defaults().project_types();
        assert_eq!(types.first(), Some(&ProjectType::Django));
        assert_eq!(types.last(), Some(&ProjectType::Go));

        let react = types.iter().position(|t| *t == ProjectType::React).unwrap();
        let node = types.iter().position(|t| *t == ProjectType::Node).unwrap();
        assert!(react < node);
    }

    #[test]
    fn test_specific_probe_preempts_fallback() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"dependencies": {"react": "18", "express": "4"}}"#);
        let ctx = ProbeContext::new(&fs, fs.root());

        let outcome = ProbeRegistry::with_defaults().run(&ctx);
        assert_eq!(outcome.project_type, ProjectType::React);
        assert_eq!(outcome.servers.len(), 1);
    }

    #[test]
    fn test_unconditional_probes_coexist() {
        let fs = MockFileSystem::new();
        fs.add_file("manage.py", "");
        fs.add_file("pom.xml", "<project/>");
        let ctx = ProbeContext::new(&fs, fs.root());

        let outcome = ProbeRegistry::with_defaults().run(&ctx);
        let names: Vec<&str> = outcome.servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Django Server", "Spring Boot"]);
        assert_eq!(outcome.project_type, ProjectType::SpringBoot);
    }

    #[test]
    fn test_fallback_suppressed_by_earlier_match() {
        let fs = MockFileSystem::new();
        fs.add_file("nest-cli.json", "{}");
        fs.add_file("package.json", "{}");
        fs.add_file("go.mod", "module x\n");
        let ctx = ProbeContext::new(&fs, fs.root());

        let outcome = ProbeRegistry::with_defaults().run(&ctx);
        assert_eq!(outcome.servers.len(), 1);
        assert_eq!(outcome.project_type, ProjectType::NestJs);
    }

    #[test]
    fn test_empty_directory() {
        let fs = MockFileSystem::new();
        let ctx = ProbeContext::new(&fs, fs.root());

        let outcome = ProbeRegistry::with_defaults().run(&ctx);
        assert_eq!(outcome, ProbeOutcome::default());
        assert_eq!(outcome.project_type, ProjectType::Unknown);
    }
}
