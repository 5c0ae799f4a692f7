/// Outcome of one CLI mode: either it handled the invocation, or the
/// flags it cares about were absent and the next mode should run.
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
