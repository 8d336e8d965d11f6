//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "draftforge", about = "AI blog-content generation", version)]
pub struct Cli {
    /// Gemini API key (falls back to the config file)
    #[arg(long, global = true, env = "GOOGLE_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a blog post for a topic
    Generate {
        topic: String,
        #[command(flatten)]
        options: BlogArgs,
        /// Print the offline sample post if the provider rejects the key or
        /// quota is exhausted
        #[arg(long)]
        sample_on_error: bool,
    },
    /// Build the offline sample post without calling the provider
    Sample {
        topic: String,
        #[command(flatten)]
        options: BlogArgs,
    },
    /// Repurpose post content into a social format
    Repurpose {
        /// Target format: twitter, linkedin, email or podcast
        format: String,
        /// File with the post content; stdin when omitted
        #[arg(long)]
        file: Option<String>,
        /// Format options as a JSON object
        #[arg(long, default_value = "{}")]
        options: String,
    },
    /// Translate post content into another language
    Translate {
        /// Target language name, e.g. "Spanish"
        #[arg(long)]
        language: String,
        /// Target language code, e.g. "es"
        #[arg(long)]
        code: String,
        /// File with the post content; stdin when omitted
        #[arg(long)]
        file: Option<String>,
    },
    /// Produce five enhanced versions of a topic
    Enhance {
        topic: String,
        #[arg(long, default_value = "engaging")]
        style: String,
        #[arg(long, default_value = "general")]
        audience: String,
        #[arg(long, default_value = "inform")]
        intent: String,
        #[arg(long, default_value = "medium")]
        length: String,
    },
    /// Inspect the generated-post history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Args)]
pub struct BlogArgs {
    #[arg(long)]
    pub tone: Option<String>,
    #[arg(long)]
    pub style: Option<String>,
    #[arg(long)]
    pub length: Option<String>,
    #[arg(long)]
    pub word_count: Option<u32>,
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub language_code: Option<String>,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List stored posts, newest first
    List,
    /// Print a stored post
    Show { id: String },
    /// List saved versions of a stored post
    Versions { id: String },
    /// Delete a stored post
    Delete { id: String },
    /// Delete every stored post
    Clear,
}
