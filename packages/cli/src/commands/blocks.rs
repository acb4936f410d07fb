use anyhow::Result;
use clap::Args;
use colored::Colorize;
use zenith_schema::BlockType;

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Print tags only, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn blocks(args: BlocksArgs) -> Result<()> {
    if args.quiet {
        for block_type in BlockType::ALL {
            println!("{}", block_type);
        }
        return Ok(());
    }

    println!("{}", "🧱 Available blocks".bright_blue().bold());
    for block_type in BlockType::ALL {
        println!(
            "  {} {}",
            format!("{:<14}", block_type.as_str()).bright_white(),
            block_type.label().dimmed()
        );
    }
    Ok(())
}
