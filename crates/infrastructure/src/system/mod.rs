pub mod script_runner;

pub use script_runner::ExternalScriptRunner;
