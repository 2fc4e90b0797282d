//! JVM probes

use super::*;

/// Maven build manifest, launched through the Spring Boot plugin
pub struct SpringBootProbe;

impl Probe for SpringBootProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::SpringBoot
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("pom.xml")
            .then(|| self.server(ctx, "Spring Boot", "mvn", &["spring-boot:run"]))
    }
}
