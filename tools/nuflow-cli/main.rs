use clap::{Parser, ValueEnum};
use nuflow::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::time::Instant;
use tracing::Level;

/// What the CLI prints after a successful compilation.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emit {
    /// The rendered Nushell source
    Source,
    /// The tree extracted from the graph
    InputTree,
    /// The normalized, render-ready tree
    SyntaxTree,
}

/// Compiles a visual dataflow graph into Nushell source
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON file exported by the editor (reads stdin when omitted or `-`)
    graph_path: Option<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value = "source")]
    emit: Emit,

    /// Map a custom node type onto a canonical one, e.g. `shellCommand=command`
    #[arg(short = 't', long = "type-map", value_parser = parse_type_mapping)]
    type_mappings: Vec<(String, String)>,

    /// Reject commands with more than one pipe input instead of using the first
    #[arg(long)]
    strict_pipes: bool,

    /// Path to a `help commands` JSON dump; unknown command names are reported
    #[arg(short, long)]
    catalog: Option<String>,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let graph_json = read_graph(cli.graph_path.as_deref()).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read graph: {}", e));
    });
    let graph = UiGraph::from_json(&graph_json).unwrap_or_else(|e| {
        exit_with_compile_error(&CompileError::JsonParseError(e.to_string()));
    });

    if let Some(catalog_path) = &cli.catalog {
        check_catalog(&graph, catalog_path, &cli.type_mappings);
    }

    let mut builder = Compiler::builder();
    for (user_type, canonical_type) in &cli.type_mappings {
        builder = builder.with_type_mapping(user_type, canonical_type);
    }
    if cli.strict_pipes {
        builder = builder.with_pipe_policy(PipeInputPolicy::Strict);
    }
    let compiler = builder.build();

    let compile_start = Instant::now();
    let artifacts = compiler
        .compile_with_artifacts(&graph)
        .unwrap_or_else(|e| exit_with_compile_error(&e));
    tracing::info!(elapsed = ?compile_start.elapsed(), "graph compiled");

    match cli.emit {
        Emit::Source => println!("{}", artifacts.source),
        Emit::InputTree => print!("{}", artifacts.input_tree),
        Emit::SyntaxTree => print!("{}", artifacts.syntax_tree),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_graph(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path),
    }
}

/// Warns about command nodes whose name is not a known command.
fn check_catalog(graph: &UiGraph, catalog_path: &str, type_mappings: &[(String, String)]) {
    let catalog_json = fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read catalog file '{}': {}",
            catalog_path, e
        ))
    });
    let catalog = CommandCatalog::from_json(&catalog_json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let types = type_mappings
        .iter()
        .fold(GraphBuilder::new(), |builder, (user_type, canonical_type)| {
            builder.with_type_mapping(user_type, canonical_type)
        });

    for node in &graph.nodes {
        if types.canonical_type(node.node_type.as_deref().unwrap_or_default()) != "command" {
            continue;
        }
        match node.data.label.as_deref() {
            Some(name) if catalog.get(name).is_none() => {
                tracing::warn!(node = %node.id, command = name, "command is not in the catalog")
            }
            _ => {}
        }
    }
}

fn parse_type_mapping(arg: &str) -> std::result::Result<(String, String), String> {
    let (user_type, canonical_type) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected USER_TYPE=CANONICAL_TYPE, got '{}'", arg))?;
    Ok((user_type.to_string(), canonical_type.to_string()))
}

fn exit_with_compile_error(error: &CompileError) -> ! {
    let structured = error.to_structured();
    match serde_json::to_string(&structured) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("\nError: {}", error),
    }
    std::process::exit(1);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
