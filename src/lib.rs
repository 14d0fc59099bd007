pub mod cli;
pub mod highlight;
pub mod process;
pub mod stream;

pub use cli::Cli;
pub use highlight::{HighlightPipeline, Highlighter};
pub use process::{ChildProcess, OutputLine, ProcessError, StreamKind};
pub use stream::LineStream;
