//! mluadoc — generate API documentation from annotated mLua scripts.
//!
//! Two modes:
//!
//! - **stdin mode**: `mluadoc < Lobby.mlua` renders one page to stdout
//! - **file mode**: `mluadoc -o document/api RootDesk/MyDesk` parses every
//!   script, cross-links `@Struct`/`@Event` types and writes one page per
//!   script under `<output>/<doctype>/`.

mod links;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use links::TypeLinks;
use model::Documentation;
use render::{PageHeader, RenderedPage};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "mluadoc",
    about = "Generate cross-linked API documentation from annotated mLua scripts"
)]
struct Cli {
    /// Input files, directories (searched recursively for *.mlua) or glob
    /// patterns. If omitted, reads one script from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default, stylesheet + classes) or inline
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Base URL for source links in page titles
    #[arg(long)]
    source_url: Option<String>,

    /// Page title in stdin mode
    #[arg(long, default_value = "stdin")]
    title: String,

    /// Print each written page
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: parse one script from stdin, write the page to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = parser::parse(&input);
    let header = PageHeader {
        title: cli.title.clone(),
        source_link: None,
    };
    let page = renderer.render(&doc, &header, &TypeLinks::new());
    report_skipped(&page);
    print!("{}", page.text);
    Ok(())
}

/// file mode: parse every input, build the type-link table, then write pages.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let input_files = expand_inputs(&cli.files)?;

    // Parse everything first; a bad file is skipped, not fatal
    let mut parsed: Vec<(PathBuf, Documentation)> = Vec::new();
    for path in input_files {
        match parser::parse_file(&path) {
            Ok(doc) => parsed.push((path, doc)),
            Err(e) => eprintln!("warning: skipping {}: {:#}", path.display(), e),
        }
    }

    let links = build_type_links(&parsed, ext);
    if cli.verbose {
        eprintln!("{} linkable types", links.len());
    }

    for (path, doc) in &parsed {
        let name = derive_output_name(path);
        let out_path = output_path(output_dir, doc, &name, ext);
        let header = PageHeader {
            title: name,
            source_link: cli.source_url.as_deref().map(|base| source_link(base, path)),
        };

        let page = renderer.render(doc, &header, &links);
        report_skipped(&page);
        if let Err(e) = write_page(&out_path, &page.text) {
            eprintln!("warning: {:#}", e);
            continue;
        }
        if cli.verbose {
            eprintln!("wrote {}", out_path.display());
        }
    }

    Ok(())
}

/// Register every `@Struct`/`@Event` script as a link target.
fn build_type_links(parsed: &[(PathBuf, Documentation)], ext: &str) -> TypeLinks {
    let mut table = TypeLinks::new();
    for (path, doc) in parsed {
        if !doc.doc_type.is_linkable() {
            continue;
        }
        let name = derive_output_name(path);
        let link = links::relative_link(doc.doc_type, &name, ext);
        table.insert(name, link);
    }
    table
}

/// Warn about method and handler blocks left out of a page.
fn report_skipped(page: &RenderedPage) {
    for e in &page.skipped {
        eprintln!("warning: skipping {:#}", e);
    }
}

fn write_page(out_path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(out_path, page).with_context(|| format!("failed to write {}", out_path.display()))
}

/// File extension of annotated scripts.
const SCRIPT_EXTENSION: &str = "mlua";

/// Expand inputs into a sorted list of script paths.
///
/// Files are taken as given, directories are searched recursively for
/// scripts, anything else is treated as a glob pattern.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        let glob_pattern = if path.is_dir() {
            format!(
                "{}/**/*.{}",
                glob::Pattern::escape(pattern.trim_end_matches('/')),
                SCRIPT_EXTENSION
            )
        } else {
            pattern.clone()
        };

        let matches: Vec<_> = glob::glob(&glob_pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the page name from a script path: "RootDesk/MyDesk/Lobby.mlua" → "Lobby".
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// `<output>/<doctype>/<name>.<ext>`
fn output_path(output_dir: &Path, doc: &Documentation, name: &str, ext: &str) -> PathBuf {
    output_dir
        .join(doc.doc_type.dir_name())
        .join(format!("{}.{}", name, ext))
}

/// Join the source base URL with a script path, using `/` separators.
fn source_link(base: &str, path: &Path) -> String {
    let rel = path.to_string_lossy().replace('\\', "/");
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        rel.trim_start_matches("./")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::DocType;

    #[test]
    fn output_name_from_mlua() {
        assert_eq!(derive_output_name(Path::new("RootDesk/MyDesk/Lobby.mlua")), "Lobby");
        assert_eq!(derive_output_name(Path::new("Lobby.mlua")), "Lobby");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name(Path::new("Makefile")), "Makefile");
    }

    #[test]
    fn output_path_by_doc_type() {
        let doc = Documentation {
            doc_type: DocType::Struct,
            ..Default::default()
        };
        assert_eq!(
            output_path(Path::new("document/api"), &doc, "Channel", "md"),
            PathBuf::from("document/api/struct/Channel.md")
        );
        assert_eq!(
            output_path(Path::new("out"), &Documentation::default(), "Util", "md"),
            PathBuf::from("out/etc/Util.md")
        );
    }

    #[test]
    fn type_links_only_for_struct_and_event() {
        let parsed = vec![
            (
                PathBuf::from("a/Channel.mlua"),
                Documentation {
                    doc_type: DocType::Struct,
                    ..Default::default()
                },
            ),
            (
                PathBuf::from("a/UserLeaveEvent.mlua"),
                Documentation {
                    doc_type: DocType::Event,
                    ..Default::default()
                },
            ),
            (
                PathBuf::from("a/Lobby.mlua"),
                Documentation {
                    doc_type: DocType::Logic,
                    ..Default::default()
                },
            ),
        ];
        let links = build_type_links(&parsed, "md");
        assert_eq!(links.len(), 2);
        assert_eq!(links.lookup("Channel"), Some("../struct/Channel.md"));
        assert_eq!(links.lookup("UserLeaveEvent"), Some("../event/UserLeaveEvent.md"));
        assert_eq!(links.lookup("Lobby"), None);
    }

    #[test]
    fn source_link_joins_with_slash() {
        assert_eq!(
            source_link("https://example.com/repo/", Path::new("./RootDesk/Lobby.mlua")),
            "https://example.com/repo/RootDesk/Lobby.mlua"
        );
    }
}
