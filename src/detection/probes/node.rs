//! JavaScript/TypeScript ecosystem probes
//!
//! Framework probes with a dedicated config file (Next.js, Nest.js, Angular)
//! always fire. Everything that only inspects `package.json` or a bundler
//! config is a fallback and yields to any server already found.

use super::*;

/// `next.config.{js,mjs,ts}`, or a `pages`/`app` route directory.
///
/// A route directory only counts next to `package.json`: a bare `app/` is
/// common in non-Node projects and is not enough on its own.
pub struct NextJsProbe;

impl Probe for NextJsProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::NextJs
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        let has_config = ctx.has_any(&["next.config.js", "next.config.mjs", "next.config.ts"]);
        let has_routes = ctx.has("package.json") && ctx.has_any(&["pages", "app"]);

        (has_config || has_routes)
            .then(|| self.server(ctx, "Next.js Dev Server", "npm", &["run", "dev"]))
    }
}

pub struct NestJsProbe;

impl Probe for NestJsProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::NestJs
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("nest-cli.json")
            .then(|| self.server(ctx, "Nest.js Dev Server", "npm", &["run", "start:dev"]))
    }
}

pub struct AngularProbe;

impl Probe for AngularProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Angular
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("angular.json")
            .then(|| self.server(ctx, "Angular Dev Server", "npm", &["start"]))
    }
}

pub struct VueProbe;

impl Probe for VueProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Vue
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        // A readable package.json is authoritative; vue.config.js only counts without one.
        let is_vue = ctx
            .package_json_mentions("vue")
            .unwrap_or_else(|| ctx.has("vue.config.js"));

        is_vue.then(|| self.server(ctx, "Vue Dev Server", "npm", &["run", "dev"]))
    }
}

pub struct ViteProbe;

impl Probe for ViteProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Vite
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has_any(&["vite.config.js", "vite.config.ts"])
            .then(|| self.server(ctx, "Vite Dev Server", "npm", &["run", "dev"]))
    }
}

pub struct WebpackProbe;

impl Probe for WebpackProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Webpack
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("webpack.config.js")
            .then(|| self.server(ctx, "Webpack Dev Server", "npm", &["run", "dev"]))
    }
}

pub struct ReactProbe;

impl Probe for ReactProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::React
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.package_json_mentions("react")
            .unwrap_or(false)
            .then(|| self.server(ctx, "React Dev Server", "npm", &["start"]))
    }
}

pub struct ExpressProbe;

impl Probe for ExpressProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Express
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.package_json_mentions("express")
            .unwrap_or(false)
            .then(|| self.server(ctx, "Express Server", "npm", &["start"]))
    }
}

/// Generic Node.js fallback
pub struct NodeProbe;

impl Probe for NodeProbe {
    fn project_type(&self) -> ProjectType {
        ProjectType::Node
    }

    fn guard(&self) -> ProbeGuard {
        ProbeGuard::OnlyIfEmpty
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> Option<ServerConfig> {
        ctx.has("package.json")
            .then(|| self.server(ctx, "Node.js Server", "npm", &["start"]))
    }
}
