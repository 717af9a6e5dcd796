use clap::{Parser, Subcommand};
use nestcss_tree::{StyleTree, TreeError};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nestcss")]
#[command(about = "Compile nested JSON style trees to flat CSS")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON style tree to a .css file
    Build {
        /// Input .json file
        path: String,

        /// Output file (defaults to <stem>.css next to the input)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<String>,

        /// Print the CSS instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Check a JSON style tree for shape errors without writing output
    Check {
        /// Input .json file
        path: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            path,
            output,
            stdout,
        } => cmd_build(&path, output.as_deref(), stdout),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_tree(path: &str) -> StyleTree {
    let source = read_source(path);
    match nestcss_tree::from_json(&source) {
        Ok(tree) => tree,
        Err(e) => {
            report_tree_error(path, &e);
            std::process::exit(1);
        }
    }
}

fn report_tree_error(path: &str, e: &TreeError) {
    if e.line > 0 {
        eprintln!("{path}:{}:{}: {}", e.line, e.column, e.message);
    } else {
        eprintln!("{path}: {}", e.message);
    }
}

/// Where `build` writes: an explicit path, or `<stem>.css` beside the input.
fn output_path(input: &str, output: Option<&str>) -> PathBuf {
    if let Some(output) = output {
        return PathBuf::from(output);
    }
    Path::new(input).with_extension("css")
}

/// Write the CSS exactly as compiled, with no trailing newline.
fn write_css(css: &str, out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(css.as_bytes())?;
    out.flush()
}

fn cmd_build(path: &str, output: Option<&str>, stdout: bool) {
    let tree = load_tree(path);
    let css = nestcss_codegen::to_css_text(&tree);

    if stdout {
        if let Err(e) = write_css(&css, &mut std::io::stdout().lock()) {
            eprintln!("Error writing to stdout: {e}");
            std::process::exit(1);
        }
        return;
    }

    let css_path = output_path(path, output);
    if let Err(e) = std::fs::write(&css_path, &css) {
        eprintln!("Error writing {}: {e}", css_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", css_path.display());
}

fn cmd_check(path: &str) {
    let tree = load_tree(path);

    let css = nestcss_codegen::to_css_text(&tree);
    log::debug!("{path}: {} byte(s) of CSS", css.len());

    eprintln!("OK: {path}");
}
