use anyhow::{Context, Result};
use marktone_config::Config;
use marktone_engine::Document;
use marktone_engine::parsing::snapshot::render_tokens;
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <file.md>", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(PathBuf::from(&args[1])) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(path: PathBuf) -> Result<()> {
    let config = match Config::load()? {
        Some(config) => {
            log::info!("Using config from {}", Config::config_path().display());
            config
        }
        None => Config::default(),
    };
    let processor = config.processor()?;

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc = processor.process(&text);

    print!("{}", render(&doc));
    Ok(())
}

fn render(doc: &Document) -> String {
    let mut out = String::new();
    for (key, value) in &doc.front_matter {
        out.push_str(&format!("{key}: {value}\n"));
    }
    if !doc.front_matter.is_empty() {
        out.push('\n');
    }
    for styled in &doc.lines {
        out.push_str(&format!(
            "{:?} {}: {}\n",
            styled.line.style,
            styled.line.indent_depth,
            render_tokens(&styled.tokens)
        ));
    }
    out
}
