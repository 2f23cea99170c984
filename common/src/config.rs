/// Display flags that shape how a subnet is presented.
///
/// Built once from the command line and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// List every sibling subnet of the input instead of only the input itself.
    pub all: bool,
    /// Render tables without borders.
    pub borderless: bool,
    /// Use per-segment short notation for address ranges.
    pub compact: bool,
    /// Shorthand for showing both the total and the usable host count.
    pub count: bool,
}
