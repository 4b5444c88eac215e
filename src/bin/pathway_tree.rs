use anyhow::{Context, Result};
use clap::Parser;
use pathway_select::core::tree::{CheckTree, TreeSession};
use pathway_select::domain::model::PathwayModel;
use pathway_select::utils::logger;
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "pathway-tree")]
#[command(about = "Select pathways to display from a hierarchy file")]
struct Args {
    /// JSON file with the pathway hierarchy
    #[arg(short = 'f', long, default_value = "pathways.json")]
    hierarchy: String,

    /// Names already selected, comma separated
    #[arg(long, value_delimiter = ',')]
    selected: Vec<String>,

    /// Write the selected names to this JSON file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the mirrored tree and exit without an interactive session
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🌿 Loading pathway hierarchy from: {}", args.hierarchy);
    let raw = std::fs::read(&args.hierarchy)
        .with_context(|| format!("reading hierarchy file '{}'", args.hierarchy))?;
    let model: PathwayModel =
        serde_json::from_slice(&raw).context("hierarchy file is not valid pathway JSON")?;

    let tree = CheckTree::mirror(&model);
    if tree.is_empty() {
        eprintln!("❌ The hierarchy contains no displayable pathways");
        std::process::exit(1);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - printing the tree without a session");
        print_tree(&tree);
        return Ok(());
    }

    let mut session = TreeSession::new(tree, &args.selected);
    run_interactive(&mut session)?;

    if session.is_cancelled() {
        println!("Selection cancelled.");
        return Ok(());
    }

    let selected = session.selected().to_vec();
    tracing::info!("✅ {} pathways selected", selected.len());

    match &args.output {
        Some(path) => {
            let json = serde_json::to_vec_pretty(&selected)?;
            std::fs::write(path, json)
                .with_context(|| format!("writing selection to '{}'", path))?;
            println!("📁 Selection saved to: {}", path);
        }
        None => {
            for name in &selected {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn print_tree(tree: &CheckTree) {
    tree.walk(&mut |node, depth| {
        println!(
            "{}[{}] {}",
            "  ".repeat(depth),
            if node.checked { 'x' } else { ' ' },
            node.name
        );
    });
}

const HELP: &str =
    "Commands: 'check <name>', 'uncheck <name>', 'list', 'ok', 'cancel'";

fn run_interactive(session: &mut TreeSession) -> Result<()> {
    println!("Select pathways to display");
    print_tree(session.tree());
    println!("{}", HELP);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match (command, rest) {
            ("check", name) if !name.is_empty() => {
                if !session.tree_mut().set_checked(name, true) {
                    println!("No pathway named '{}'", name);
                }
                print_tree(session.tree());
            }
            ("uncheck", name) if !name.is_empty() => {
                if !session.tree_mut().set_checked(name, false) {
                    println!("No pathway named '{}'", name);
                }
                print_tree(session.tree());
            }
            ("list", "") => print_tree(session.tree()),
            ("ok", "") => {
                session.ok();
                return Ok(());
            }
            ("cancel", "") | ("quit", "") => {
                session.cancel();
                return Ok(());
            }
            _ => println!("{}", HELP),
        }
    }

    // EOF without a decision keeps the dialog's cancelled-unless-OK rule.
    session.cancel();
    Ok(())
}
