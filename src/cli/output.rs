//! CLI output formatting.

/// Structured command result renderable for humans or machines.
pub trait CommandOutput {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the requested mode.
pub fn output<T: CommandOutput>(data: &T, json_mode: bool) {
    if json_mode {
        println!("{}", data.to_json());
    } else {
        println!("{}", data.to_human());
    }
}
