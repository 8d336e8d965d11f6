//! Command implementations.

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use draftforge_ai::{
    BlogOptions, EnhanceOptions, ErrorKind, GeminiClient, GenerationResult, Generator,
    TaskPayload, TranslateOptions, sample_blog,
};
use draftforge_storage::{HistoryStore, VersionStore};

use crate::cli::{BlogArgs, HistoryCommands};
use crate::config::CliConfig;

/// Parse a flag value through serde so unknown option values degrade the
/// same way they do on the wire (catch-all variant, empty instruction).
fn flag<T: DeserializeOwned>(value: &Option<String>) -> Option<T> {
    value
        .as_ref()
        .and_then(|v| serde_json::from_value(Value::String(v.clone())).ok())
}

fn blog_options(args: &BlogArgs) -> BlogOptions {
    BlogOptions {
        tone: flag(&args.tone),
        style: flag(&args.style),
        length: flag(&args.length),
        word_count: args.word_count,
        language: args.language.clone(),
        language_code: args.language_code.clone(),
    }
}

pub struct App {
    generator: Generator,
    config: CliConfig,
}

impl App {
    pub fn new(config: CliConfig, api_key: Option<String>) -> Self {
        let mut client = GeminiClient::new();
        if let Some(model) = &config.model {
            client = client.with_model(model.clone());
        }

        let mut generator = Generator::new(Arc::new(client));
        if let Some(key) = api_key.or_else(|| config.api_key.clone()) {
            generator = generator.with_default_api_key(key);
        }

        Self { generator, config }
    }

    fn history(&self) -> Result<(HistoryStore, VersionStore)> {
        let path = self.config.db_path();
        tracing::debug!(path = %path.display(), "opening history database");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Arc::new(redb::Database::create(&path)?);
        Ok((HistoryStore::new(db.clone())?, VersionStore::new(db)?))
    }

    pub async fn generate(
        &self,
        topic: &str,
        args: &BlogArgs,
        sample_on_error: bool,
    ) -> Result<()> {
        let options = blog_options(args);
        let result = self
            .generator
            .generate_blog(topic, options.clone(), None)
            .await;

        match result {
            GenerationResult {
                success: true,
                payload: Some(TaskPayload::Markdown(content)),
                ..
            } => {
                let (history, versions) = self.history()?;
                let post = history.add(topic, &content)?;
                versions.save(&post.id, &content, "Initial generation")?;
                eprintln!("{} saved as {}", "✓".green(), post.id.dimmed());
                println!("{content}");
                Ok(())
            }
            result => {
                if sample_on_error
                    && matches!(result.error_kind, Some(ErrorKind::Auth | ErrorKind::Quota))
                {
                    eprintln!(
                        "{} {}, printing sample post instead",
                        "✗".red(),
                        result.error.unwrap_or_default()
                    );
                    println!("{}", sample_blog(topic, &options));
                    return Ok(());
                }
                Err(result_error(result))
            }
        }
    }

    pub fn sample(&self, topic: &str, args: &BlogArgs) -> Result<()> {
        println!("{}", sample_blog(topic, &blog_options(args)));
        Ok(())
    }

    pub async fn repurpose(&self, format: &str, file: Option<&str>, options: &str) -> Result<()> {
        let content = read_content(file)?;
        let options: Value =
            serde_json::from_str(options).context("--options must be a JSON object")?;

        let result = self
            .generator
            .repurpose(&content, format, options, None)
            .await;
        print_result(result)
    }

    pub async fn translate(&self, language: &str, code: &str, file: Option<&str>) -> Result<()> {
        let content = read_content(file)?;
        let options = TranslateOptions {
            target_language: language.to_string(),
            target_language_code: code.to_string(),
        };

        let result = self.generator.translate(&content, options, None).await;
        match result {
            GenerationResult {
                success: true,
                payload: Some(TaskPayload::Markdown(translated)),
                ..
            } => {
                println!("{translated}");
                Ok(())
            }
            result => Err(result_error(result)),
        }
    }

    pub async fn enhance(
        &self,
        topic: &str,
        style: &str,
        audience: &str,
        intent: &str,
        length: &str,
    ) -> Result<()> {
        let options: EnhanceOptions = serde_json::from_value(json!({
            "style": style,
            "audience": audience,
            "intent": intent,
            "length": length,
        }))
        .unwrap_or_default();

        let result = self.generator.enhance_topic(topic, options, None).await;
        print_result(result)
    }

    pub fn run_history(&self, command: &HistoryCommands) -> Result<()> {
        let (history, versions) = self.history()?;
        match command {
            HistoryCommands::List => {
                let posts = history.list()?;
                if posts.is_empty() {
                    println!("No posts saved yet");
                    return Ok(());
                }
                for post in posts {
                    println!(
                        "{}  {}  {}",
                        post.id.dimmed(),
                        post.created_at.format("%Y-%m-%d %H:%M"),
                        post.topic.bold(),
                    );
                }
            }
            HistoryCommands::Show { id } => {
                let post = history
                    .get(id)?
                    .ok_or_else(|| anyhow!("no post with id {id}"))?;
                println!("{}", post.content);
            }
            HistoryCommands::Versions { id } => {
                for version in versions.list(id)? {
                    println!(
                        "{}  {}  {}",
                        version.id.dimmed(),
                        version.created_at.format("%Y-%m-%d %H:%M"),
                        version.description,
                    );
                }
            }
            HistoryCommands::Delete { id } => {
                if !history.delete(id)? {
                    bail!("no post with id {id}");
                }
                versions.clear(id)?;
                eprintln!("{} deleted", "✓".green());
            }
            HistoryCommands::Clear => {
                history.clear()?;
                eprintln!("{} history cleared", "✓".green());
            }
        }
        Ok(())
    }
}

fn read_content(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn print_result(result: GenerationResult) -> Result<()> {
    if !result.success {
        return Err(result_error(result));
    }
    if result.fallback {
        eprintln!(
            "{} response could not be parsed, showing fallback content",
            "!".yellow()
        );
    }
    let payload = result
        .payload
        .ok_or_else(|| anyhow!("missing payload in successful result"))?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn result_error(result: GenerationResult) -> anyhow::Error {
    let message = result
        .error
        .unwrap_or_else(|| "generation failed".to_string());
    match result.error_kind {
        Some(kind) => anyhow!("{message} ({})", kind.as_str()),
        None => anyhow!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftforge_ai::Tone;

    #[test]
    fn test_flag_parses_known_and_unknown_values() {
        assert_eq!(
            flag::<Tone>(&Some("professional".to_string())),
            Some(Tone::Professional)
        );
        // Unknown values degrade to the catch-all rather than erroring.
        assert_eq!(flag::<Tone>(&Some("sarcastic".to_string())), Some(Tone::Other));
        assert_eq!(flag::<Tone>(&None), None);
    }

    #[test]
    fn test_history_db_opens_at_configured_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        // Nested path: missing parent directories are created on open.
        let db_path = temp_dir.path().join("data").join("cli.db");
        let config = CliConfig {
            db_path: Some(db_path.display().to_string()),
            ..Default::default()
        };

        let app = App::new(config, None);
        let (history, versions) = app.history().unwrap();
        let post = history.add("Rust", "# Rust").unwrap();
        versions.save(&post.id, "# Rust", "Initial generation").unwrap();

        assert!(db_path.exists());
        assert_eq!(history.list().unwrap().len(), 1);
        assert_eq!(versions.list(&post.id).unwrap().len(), 1);
    }
}
