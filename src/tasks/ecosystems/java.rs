use super::*;

/// Maven, Gradle and plain `Main.java` entry points
pub struct JavaTasks;

impl JavaTasks {
    fn gradle_command(ctx: &ScanContext<'_>) -> &'static str {
        if ctx.has("gradlew") {
            "./gradlew"
        } else if ctx.has("gradlew.bat") {
            "gradlew.bat"
        } else {
            "gradle"
        }
    }
}

impl TaskProbe for JavaTasks {
    fn name(&self) -> &'static str {
        "java"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has_any(&["pom.xml", "build.gradle", "build.gradle.kts"]) || ctx.has_extension(".java")
    }

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task> {
        let mut tasks = Vec::new();

        if ctx.has("pom.xml") {
            tasks.extend([
                Task::new("Maven: Build (install)", TaskKind::Build, "mvn install", "Build and install Maven project"),
                Task::new("Maven: Test", TaskKind::Test, "mvn test", "Run Maven tests"),
                Task::new("Maven: Clean", TaskKind::Clean, "mvn clean", "Clean Maven project"),
            ]);
        }

        if ctx.has_any(&["build.gradle", "build.gradle.kts"]) {
            let gradle = Self::gradle_command(ctx);
            tasks.extend([
                Task::new("Gradle: Build (assemble)", TaskKind::Build, format!("{} assemble", gradle), "Build Gradle project"),
                Task::new("Gradle: Test", TaskKind::Test, format!("{} test", gradle), "Run Gradle tests"),
                Task::new("Gradle: Clean", TaskKind::Clean, format!("{} clean", gradle), "Clean Gradle project"),
            ]);
        }

        for main in ctx.java_mains() {
            let rel = main.display();
            tasks.push(Task::new(
                format!("Run {}", rel),
                TaskKind::Run,
                format!("java {}", rel),
                format!("Compile and run {}", rel),
            ));
        }

        tasks
    }
}
