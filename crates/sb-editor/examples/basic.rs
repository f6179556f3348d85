//! Example: Basic usage of the Sitebuild editor

use sb_editor::{Config, EditOutcome, Editor};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut editor = Editor::with_standard_registry(Config::default());
    println!("Sitebuild editor v{} ready", sb_editor::VERSION);

    for group in editor.palette() {
        let names: Vec<_> = group.items.iter().map(|item| item.kind.name()).collect();
        println!("  {:<10} {}", group.category, names.join(", "));
    }

    // Refused: the page is still empty
    if let EditOutcome::Denied(decision) = editor.drop_component("Heading", None)? {
        println!("refused: {}", decision.message().unwrap_or_default());
    }

    let EditOutcome::Inserted(section) = editor.drop_component("Section", None)? else {
        anyhow::bail!("section drop refused");
    };
    let EditOutcome::Inserted(heading) = editor.drop_component("Heading", Some(&section))? else {
        anyhow::bail!("heading drop refused");
    };
    editor.drop_component("Paragraph", Some(&section))?;

    // Refused: headings are leaves
    if let EditOutcome::Denied(decision) = editor.drop_component("Image", Some(&heading))? {
        println!("refused: {}", decision.message().unwrap_or_default());
    }

    println!("{}", editor.tree().to_json_pretty()?);
    Ok(())
}
