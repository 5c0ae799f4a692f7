use clap::ValueEnum;

/// Whether output should carry ANSI colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
