use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog::tag_vocabulary;
use clap::{Parser, Subcommand};
use content::domain::Content;
use content::loader::load_content;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a content file and print a summary of what it holds.
    Check {
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { content } => {
            let loaded = match content {
                Some(path) => load_content(&path)
                    .with_context(|| format!("content file {} failed its checks", path.display()))?,
                None => Content::sample(),
            };

            let vocabulary = tag_vocabulary(&loaded.projects);
            let education = loaded.education().count();
            let experience = loaded.experience().count();

            println!("profile: {} <{}>", loaded.profile.name, loaded.profile.email);
            println!("projects: {}", loaded.projects.len());
            println!("tags: {}", vocabulary.join(", "));
            println!("skill groups: {}", loaded.skills.len());
            println!("timeline: {education} education, {experience} experience");
            println!("content OK");
        }
    }

    Ok(())
}
