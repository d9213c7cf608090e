//! 编译模块：将原始特征编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledPattern, CompiledSignature, Matcher, PatternOutcome};
pub use self::compiler::{CompileStats, SignatureCompiler};
