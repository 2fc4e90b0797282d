//! Per-ecosystem task probes

mod go;
mod java;
mod make;
mod native;
mod npm;
mod python;
mod rust;

pub use go::GoTasks;
pub use java::JavaTasks;
pub use make::MakeTasks;
pub use native::NativeTasks;
pub use npm::NpmTasks;
pub use python::PythonTasks;
pub use rust::RustTasks;

use super::catalog::{ScanContext, TaskProbe};
use super::{Task, TaskKind};
