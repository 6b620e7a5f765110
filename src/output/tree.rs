//! Tree formatter for the console report
//!
//! Renders the built tree as a box-drawing diagram preceded by the aggregate
//! size line. `format` produces a plain string; `print` writes the colored
//! variant to stdout.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::OutputConfig;

/// Formatter for the indented tree report.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the full report (total line plus tree) as a plain string.
    pub fn format(&self, root: &Node) -> String {
        let mut output = String::new();
        output.push_str(&format!("total: {}KB\n", format_kb(root.total_size())));
        self.format_node(root, &mut output, "", true, true);
        output
    }

    /// Print the full report to stdout with colors.
    pub fn print(&self, root: &Node) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "total:")?;
        stdout.reset()?;
        writeln!(stdout, " {}KB", format_kb(root.total_size()))?;

        self.print_node(root, &mut stdout, "", true, true)
    }

    fn format_node(
        &self,
        node: &Node,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            Node::File { name, size_kb, .. } => {
                output.push_str(prefix);
                output.push_str(connector);
                output.push_str(name);
                output.push_str(&format!(" ({}KB)\n", format_kb(*size_kb)));
            }
            Node::Dir { name, children } => {
                if is_root {
                    // The root renders as "." whatever its name.
                    output.push_str(".\n");
                } else {
                    output.push_str(prefix);
                    output.push_str(connector);
                    output.push_str(name);
                    output.push('\n');
                }

                let child_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.format_node(child, output, &child_prefix, child_is_last, false);
                }
            }
        }
    }

    fn print_node(
        &self,
        node: &Node,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            Node::File { name, size_kb, .. } => {
                write!(stdout, "{}{}", prefix, connector)?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(stdout, "{}", name)?;
                stdout.reset()?;
                writeln!(stdout, " ({}KB)", format_kb(*size_kb))?;
            }
            Node::Dir { name, children } => {
                if is_root {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    writeln!(stdout, ".")?;
                    stdout.reset()?;
                } else {
                    write!(stdout, "{}{}", prefix, connector)?;
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    writeln!(stdout, "{}", name)?;
                    stdout.reset()?;
                }

                let child_prefix = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.print_node(child, stdout, &child_prefix, child_is_last, false)?;
                }
            }
        }
        Ok(())
    }
}

/// Format a size in kilobytes with at most one decimal digit and no trailing
/// zero: `5.0` becomes `"5"`, `5.3` stays `"5.3"`.
///
/// Rounding is half-up on the tenths digit, so `5.25` becomes `"5.3"`.
pub fn format_kb(size_kb: f64) -> String {
    let tenths = (size_kb * 10.0).round();
    if tenths % 10.0 == 0.0 {
        format!("{}", tenths / 10.0)
    } else {
        format!("{:.1}", tenths / 10.0)
    }
}
