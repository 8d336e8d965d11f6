//! Generation tasks and their option records.
//!
//! Every option value is a closed enumeration. Unrecognized wire values land
//! on the `Other` catch-all variant, whose instruction fragment is empty, so
//! a bad option silently drops out of the prompt instead of failing the
//! request or leaking junk into it.

use serde::{Deserialize, Serialize};

/// Tone of voice for a generated blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Professional,
    Conversational,
    Witty,
    Inspirational,
    Technical,
    SeoOptimized,
    #[serde(other)]
    Other,
}

impl Tone {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Professional => {
                "Write in a professional, formal, and authoritative tone. Use business language and maintain credibility."
            }
            Self::Conversational => {
                "Write in a friendly, conversational tone as if talking to a friend. Use casual language and personal pronouns."
            }
            Self::Witty => {
                "Write with humor, clever wordplay, and entertaining elements. Include jokes or amusing observations where appropriate."
            }
            Self::Inspirational => {
                "Write in an uplifting, motivating tone that encourages and inspires readers to take action."
            }
            Self::Technical => {
                "Write with technical precision, using industry terminology and detailed explanations for expert readers."
            }
            Self::SeoOptimized => {
                "Write with SEO best practices, including strategic keyword placement and search-friendly structure."
            }
            Self::Other => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Conversational => "conversational",
            Self::Witty => "witty",
            Self::Inspirational => "inspirational",
            Self::Technical => "technical",
            Self::SeoOptimized => "seo-optimized",
            Self::Other => "conversational",
        }
    }
}

/// Structural style for a generated blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritingStyle {
    BlogPost,
    Academic,
    Promotional,
    Tutorial,
    Listicle,
    NewsArticle,
    #[serde(other)]
    Other,
}

impl WritingStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::BlogPost => {
                "Format as a casual blog post with personal insights, anecdotes, and engaging storytelling."
            }
            Self::Academic => {
                "Structure as an academic article with citations, formal language, and scholarly approach."
            }
            Self::Promotional => {
                "Write as promotional content with compelling calls-to-action and persuasive language."
            }
            Self::Tutorial => {
                "Format as a step-by-step tutorial with clear instructions, numbered steps, and actionable advice."
            }
            Self::Listicle => {
                "Structure as a listicle with numbered or bulleted points, each with detailed explanations."
            }
            Self::NewsArticle => {
                "Write in journalistic style with factual reporting, quotes, and news article structure."
            }
            Self::Other => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BlogPost => "blog-post",
            Self::Academic => "academic",
            Self::Promotional => "promotional",
            Self::Tutorial => "tutorial",
            Self::Listicle => "listicle",
            Self::NewsArticle => "news-article",
            Self::Other => "blog post",
        }
    }
}

/// Target length band for blog posts and enhancement suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
    #[serde(other)]
    Other,
}

impl Length {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Short => {
                "Keep the content concise and focused. Aim for 250-350 words with 2-3 main points."
            }
            Self::Medium => {
                "Provide comprehensive coverage with good detail. Aim for 600-800 words with 3-4 main sections."
            }
            Self::Long => {
                "Create in-depth, thorough content with extensive detail. Aim for 1000-1500 words with 4-6 main sections and subsections."
            }
            Self::Other => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Medium | Self::Other => "medium",
        }
    }
}

/// Options for blog post generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogOptions {
    pub tone: Option<Tone>,
    pub style: Option<WritingStyle>,
    pub word_count: Option<u32>,
    pub length: Option<Length>,
    pub language: Option<String>,
    pub language_code: Option<String>,
}

impl BlogOptions {
    pub fn word_count_target(&self) -> u32 {
        self.word_count.unwrap_or(700)
    }

    pub fn length_label(&self) -> &'static str {
        self.length.as_ref().map(Length::label).unwrap_or("medium")
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("English")
    }

    pub fn language_code(&self) -> &str {
        self.language_code.as_deref().unwrap_or("en")
    }
}

/// Narrative style for a Twitter thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStyle {
    Educational,
    Storytelling,
    Tips,
    Controversial,
    #[serde(other)]
    Other,
}

impl ThreadStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Educational => {
                "Focus on teaching and sharing knowledge with clear, informative content"
            }
            Self::Storytelling => {
                "Use narrative structure with engaging story elements and personal anecdotes"
            }
            Self::Tips => {
                "Provide actionable advice and practical tips that readers can implement"
            }
            Self::Controversial => {
                "Present thought-provoking perspectives that encourage discussion and debate"
            }
            Self::Other => "",
        }
    }
}

/// Tweet count band for a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadLength {
    Short,
    Medium,
    Long,
    #[serde(other)]
    Other,
}

impl ThreadLength {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Short => "3-5 tweets",
            Self::Medium => "6-10 tweets",
            Self::Long => "11-15 tweets",
            Self::Other => "",
        }
    }
}

/// Options for Twitter thread repurposing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterOptions {
    pub style: Option<ThreadStyle>,
    pub thread_length: Option<ThreadLength>,
    pub include_hashtags: bool,
    pub include_emojis: bool,
    pub tone: String,
}

impl Default for TwitterOptions {
    fn default() -> Self {
        Self {
            style: Some(ThreadStyle::Educational),
            thread_length: Some(ThreadLength::Medium),
            include_hashtags: true,
            include_emojis: true,
            tone: "engaging".to_string(),
        }
    }
}

/// Voice for a LinkedIn post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkedInStyle {
    Professional,
    Personal,
    Industry,
    Leadership,
    #[serde(other)]
    Other,
}

impl LinkedInStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Professional => {
                "Use formal business language with industry insights and professional perspectives"
            }
            Self::Personal => {
                "Share personal experiences and insights with authentic, relatable content"
            }
            Self::Industry => {
                "Focus on sector-specific analysis and trends with expert commentary"
            }
            Self::Leadership => {
                "Emphasize management insights, team building, and leadership principles"
            }
            Self::Other => "",
        }
    }
}

/// Character-count band for a LinkedIn post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostLength {
    Short,
    Medium,
    Long,
    #[serde(other)]
    Other,
}

impl PostLength {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Short => "under 1000 characters",
            Self::Medium => "1000-2000 characters",
            Self::Long => "2000+ characters",
            Self::Other => "",
        }
    }
}

/// Options for LinkedIn post repurposing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedInOptions {
    pub style: Option<LinkedInStyle>,
    pub length: Option<PostLength>,
    pub include_hashtags: bool,
    pub include_cta: bool,
    pub tone: String,
}

impl Default for LinkedInOptions {
    fn default() -> Self {
        Self {
            style: Some(LinkedInStyle::Professional),
            length: Some(PostLength::Medium),
            include_hashtags: true,
            include_cta: true,
            tone: "professional".to_string(),
        }
    }
}

/// Editorial format for an email newsletter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStyle {
    Newsletter,
    Digest,
    Personal,
    Promotional,
    #[serde(other)]
    Other,
}

impl EmailStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Newsletter => {
                "Traditional newsletter format with sections, headlines, and structured content"
            }
            Self::Digest => "Summary-style format highlighting key points and takeaways",
            Self::Personal => {
                "Conversational tone as if writing to a friend, with personal insights"
            }
            Self::Promotional => {
                "Marketing-focused with compelling offers and clear value propositions"
            }
            Self::Other => "",
        }
    }
}

/// Visual template for an email newsletter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTemplate {
    Modern,
    Classic,
    Minimal,
    Corporate,
    #[serde(other)]
    Other,
}

impl EmailTemplate {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Modern => "Clean, minimalist design with plenty of white space",
            Self::Classic => "Traditional newsletter layout with clear sections",
            Self::Minimal => "Simple, text-focused design with minimal graphics",
            Self::Corporate => "Professional business format with formal structure",
            Self::Other => "",
        }
    }
}

/// Options for email newsletter repurposing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    pub style: Option<EmailStyle>,
    pub template: Option<EmailTemplate>,
    pub include_images: bool,
    pub include_cta: bool,
    pub personalization: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            style: Some(EmailStyle::Newsletter),
            template: Some(EmailTemplate::Modern),
            include_images: true,
            include_cta: true,
            personalization: false,
        }
    }
}

/// Delivery format for a podcast episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodcastStyle {
    Interview,
    Solo,
    Educational,
    Conversational,
    #[serde(other)]
    Other,
}

impl PodcastStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Interview => {
                "Q&A format with host asking questions and providing answers based on the content"
            }
            Self::Solo => {
                "Single host presentation with natural speaking flow and personal commentary"
            }
            Self::Educational => {
                "Teaching-focused format with clear explanations and examples"
            }
            Self::Conversational => "Casual discussion style as if talking to a friend",
            Self::Other => "",
        }
    }
}

/// Options for podcast script repurposing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastOptions {
    pub style: Option<PodcastStyle>,
    pub duration: String,
    pub include_music: bool,
    pub include_ads: bool,
    pub host_name: String,
}

impl Default for PodcastOptions {
    fn default() -> Self {
        Self {
            style: Some(PodcastStyle::Solo),
            duration: "10-15".to_string(),
            include_music: true,
            include_ads: false,
            host_name: "Alex".to_string(),
        }
    }
}

/// Enhancement angle for topic suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhanceStyle {
    Specific,
    Engaging,
    Seo,
    Trending,
    Academic,
    Creative,
    #[serde(other)]
    Other,
}

impl EnhanceStyle {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Specific => {
                "Make the topic more focused, detailed, and specific. Add concrete elements and narrow the scope."
            }
            Self::Engaging => {
                "Add compelling hooks, emotional elements, and engaging language that captures attention."
            }
            Self::Seo => {
                "Include trending keywords, search-friendly terms, and phrases that rank well in search engines."
            }
            Self::Trending => {
                "Connect to current trends, hot topics, and what people are talking about right now."
            }
            Self::Academic => {
                "Use scholarly language, research-focused angles, and academic terminology."
            }
            Self::Creative => {
                "Think outside the box with unique perspectives, creative angles, and innovative approaches."
            }
            Self::Other => "",
        }
    }

    pub fn title_modifier(&self) -> &'static str {
        match self {
            Self::Specific => "Step-by-Step Guide to",
            Self::Engaging => "The Ultimate Guide to",
            Self::Seo => "Complete 2024 Guide:",
            Self::Trending => "🔥 What Everyone Should Know About",
            Self::Academic => "Research-Based Analysis of",
            Self::Creative => "Innovative Approaches to",
            Self::Other => "The Ultimate Guide to",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Specific => "specific",
            Self::Engaging => "engaging",
            Self::Seo => "seo",
            Self::Trending => "trending",
            Self::Academic => "academic",
            Self::Creative => "creative",
            Self::Other => "engaging",
        }
    }
}

/// Target audience for enhanced topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    General,
    Beginners,
    Professionals,
    Experts,
    Students,
    #[serde(other)]
    Other,
}

impl Audience {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::General => {
                "Appeal to a broad, general audience with universal interests and accessible language."
            }
            Self::Beginners => {
                "Focus on introductory concepts, basic explanations, and beginner-friendly approaches."
            }
            Self::Professionals => {
                "Target working professionals with industry-specific insights and practical applications."
            }
            Self::Experts => {
                "Address advanced practitioners with sophisticated concepts and expert-level discussions."
            }
            Self::Students => {
                "Focus on educational value, learning objectives, and academic perspectives."
            }
            Self::Other => "",
        }
    }

    pub fn title_modifier(&self) -> &'static str {
        match self {
            Self::General => "for Everyone",
            Self::Beginners => "for Beginners",
            Self::Professionals => "for Professionals",
            Self::Experts => "for Advanced Practitioners",
            Self::Students => "for Students",
            Self::Other => "for Everyone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Beginners => "beginners",
            Self::Professionals => "professionals",
            Self::Experts => "experts",
            Self::Students => "students",
            Self::Other => "general",
        }
    }
}

/// Reader intent for enhanced topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Inform,
    Persuade,
    Entertain,
    Educate,
    Inspire,
    #[serde(other)]
    Other,
}

impl Intent {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Inform => {
                "Focus on sharing knowledge, facts, and informative content that educates readers."
            }
            Self::Persuade => {
                "Create compelling arguments and persuasive elements that influence reader opinions."
            }
            Self::Entertain => {
                "Add entertaining elements, humor, and engaging content that amuses readers."
            }
            Self::Educate => {
                "Structure as educational content with clear learning outcomes and teaching elements."
            }
            Self::Inspire => {
                "Include motivational elements and inspiring messages that uplift and encourage readers."
            }
            Self::Other => "",
        }
    }
}

/// Options for topic enhancement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceOptions {
    pub style: EnhanceStyle,
    pub audience: Audience,
    pub intent: Intent,
    pub length: Length,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            style: EnhanceStyle::Engaging,
            audience: Audience::General,
            intent: Intent::Inform,
            length: Length::Medium,
        }
    }
}

/// Options for content translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateOptions {
    pub target_language: String,
    pub target_language_code: String,
}

/// A single generation task with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationTask {
    BlogPost(BlogOptions),
    TwitterThread(TwitterOptions),
    LinkedInPost(LinkedInOptions),
    EmailNewsletter(EmailOptions),
    PodcastScript(PodcastOptions),
    TopicEnhancement(EnhanceOptions),
    Translation(TranslateOptions),
}

impl GenerationTask {
    /// Stable discriminator, used for logging and dispatch.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlogPost(_) => "blog_post",
            Self::TwitterThread(_) => "twitter_thread",
            Self::LinkedInPost(_) => "linkedin_post",
            Self::EmailNewsletter(_) => "email_newsletter",
            Self::PodcastScript(_) => "podcast_script",
            Self::TopicEnhancement(_) => "topic_enhancement",
            Self::Translation(_) => "translation",
        }
    }

    /// Whether the provider is expected to answer with JSON rather than
    /// plain markdown.
    pub fn expects_json(&self) -> bool {
        !matches!(self, Self::BlogPost(_) | Self::Translation(_))
    }
}

/// A fully-specified generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub task: GenerationTask,
    pub source_content: String,
    /// Per-call key; falls back to the process-wide configured key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl GenerationRequest {
    pub fn new(task: GenerationTask, source_content: impl Into<String>) -> Self {
        Self {
            task,
            source_content: source_content.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_value_degrades_to_empty_fragment() {
        let tone: Tone = serde_json::from_str("\"sarcastic\"").unwrap();
        assert_eq!(tone, Tone::Other);
        assert_eq!(tone.instruction(), "");
    }

    #[test]
    fn test_kebab_case_wire_values() {
        let tone: Tone = serde_json::from_str("\"seo-optimized\"").unwrap();
        assert_eq!(tone, Tone::SeoOptimized);
        let style: WritingStyle = serde_json::from_str("\"news-article\"").unwrap();
        assert_eq!(style, WritingStyle::NewsArticle);
    }

    #[test]
    fn test_twitter_options_fill_missing_fields() {
        let options: TwitterOptions =
            serde_json::from_value(serde_json::json!({ "style": "tips" })).unwrap();
        assert_eq!(options.style, Some(ThreadStyle::Tips));
        assert_eq!(options.thread_length, Some(ThreadLength::Medium));
        assert!(options.include_hashtags);
    }

    #[test]
    fn test_blog_option_defaults() {
        let options = BlogOptions::default();
        assert_eq!(options.word_count_target(), 700);
        assert_eq!(options.length_label(), "medium");
        assert_eq!(options.language(), "English");
        assert_eq!(options.language_code(), "en");
    }
}
