pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod env;
pub mod error;
pub mod fold;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod scanner;
pub mod settings;
pub mod source;
pub mod tables;
pub mod timing;

pub use cli::{Cli, Command, KeywordArgs, OutputFormat, SearchArgs};
pub use engine::{Engine, EngineConfig};
pub use error::{Error, ExitCode, Result};
pub use fold::CaseMode;
pub use pattern::{Pattern, PatternId, PatternSet};
pub use reader::{FileReader, ReadStrategy, TextBuffer};
pub use scanner::{
    CancelToken, Callback, Match, MatchCollection, MatchSink, ScanOptions, Scanner,
    ShortTextPolicy, search,
};
pub use source::{KeywordSource, TextSource};
pub use tables::{BlockWidth, TableStats, Tables};

#[cfg(test)]
pub mod test_utils;
