use super::*;
use std::path::Path;

/// Directories searched for single-file C/C++ programs
const SOURCE_DIRS: &[&str] = &["", "src"];

/// CMake projects and standalone C/C++ sources
pub struct NativeTasks;

impl NativeTasks {
    /// Compiler for a source file name, plus the output binary stem
    fn compiler_for(file: &str) -> Option<(&'static str, &str)> {
        let path = Path::new(file);
        let stem = path.file_stem()?.to_str()?;
        match path.extension()?.to_str()? {
            "c" => Some(("gcc", stem)),
            "cpp" | "cc" => Some(("g++", stem)),
            _ => None,
        }
    }
}

impl TaskProbe for NativeTasks {
    fn name(&self) -> &'static str {
        "native"
    }

    fn applies(&self, ctx: &ScanContext<'_>) -> bool {
        ctx.has("CMakeLists.txt") || [".c", ".cpp", ".cc"].iter().any(|ext| ctx.has_extension(ext))
    }

    fn tasks(&self, ctx: &ScanContext<'_>) -> Vec<Task> {
        let mut tasks = Vec::new();

        if ctx.has("CMakeLists.txt") {
            tasks.extend([
                Task::new("CMake: Configure", TaskKind::Build, "cmake -B build", "Configure C/C++ project with CMake"),
                Task::new("CMake: Build", TaskKind::Build, "cmake --build build", "Build C/C++ project with CMake"),
            ]);
        }

        for dir in SOURCE_DIRS {
            for file in ctx.files_in(dir) {
                let Some((compiler, stem)) = Self::compiler_for(&file) else {
                    continue;
                };
                let rel = if dir.is_empty() {
                    file.clone()
                } else {
                    format!("{}/{}", dir, file)
                };

                tasks.push(Task::new(
                    format!("Compile {}", rel),
                    TaskKind::Build,
                    format!("{} {} -o {}", compiler, rel, stem),
                    format!("Compile {} into ./{}", rel, stem),
                ));
            }
        }

        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_single_file_programs() {
        let fs = MockFileSystem::new();
        fs.add_file("hello.c", "");
        fs.add_file("src/tool.cc", "");
        fs.add_file("src/util.h", "");
        let ctx = ScanContext::new(&fs, fs.root(), 2);

        assert!(NativeTasks.applies(&ctx));
        let commands: Vec<String> = NativeTasks.tasks(&ctx).into_iter().map(|t| t.command).collect();
        assert_eq!(commands, vec!["gcc hello.c -o hello", "g++ src/tool.cc -o tool"]);
    }

    #[test]
    fn test_cmake() {
        let fs = MockFileSystem::new();
        fs.add_file("CMakeLists.txt", "project(x)\n");
        let ctx = ScanContext::new(&fs, fs.root(), 2);

        let tasks = NativeTasks.tasks(&ctx);
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.kind == TaskKind::Build));
    }
}
