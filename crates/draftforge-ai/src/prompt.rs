//! Prompt construction.
//!
//! Pure mapping from (source content, task) to the instruction string handed
//! to the completion provider. Deterministic for identical input: no
//! timestamps, no randomness, no I/O. Empty source content is accepted and
//! produces a degenerate but well-formed prompt.

use crate::task::{
    BlogOptions, EmailOptions, EnhanceOptions, GenerationTask, LinkedInOptions, PodcastOptions,
    TranslateOptions, TwitterOptions,
};

/// Build the provider prompt for a task.
pub fn build_prompt(task: &GenerationTask, source_content: &str) -> String {
    match task {
        GenerationTask::BlogPost(options) => blog_prompt(source_content, options),
        GenerationTask::TwitterThread(options) => twitter_prompt(source_content, options),
        GenerationTask::LinkedInPost(options) => linkedin_prompt(source_content, options),
        GenerationTask::EmailNewsletter(options) => email_prompt(source_content, options),
        GenerationTask::PodcastScript(options) => podcast_prompt(source_content, options),
        GenerationTask::TopicEnhancement(options) => enhance_prompt(source_content, options),
        GenerationTask::Translation(options) => translate_prompt(source_content, options),
    }
}

/// Prefix an instruction fragment with its section label, or drop the line
/// entirely when the fragment is empty (unknown option values degrade to
/// nothing rather than erroring).
fn labeled(label: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        String::new()
    } else {
        format!("{label}: {fragment}")
    }
}

fn blog_prompt(topic: &str, options: &BlogOptions) -> String {
    let tone_instruction = options.tone.map(|t| t.instruction()).unwrap_or("");
    let style_instruction = options.style.map(|s| s.instruction()).unwrap_or("");
    let length_instruction = options.length.map(|l| l.instruction()).unwrap_or("");

    let word_count = options.word_count_target();
    let length_label = options.length_label();
    let language = options.language();
    let language_code = options.language_code();

    let language_instruction = if language_code != "en" {
        format!(
            "IMPORTANT: Write the ENTIRE blog post in {language}. Use native {language} \
             expressions, idioms, and cultural references where appropriate. Ensure all \
             headings, content, and formatting are in {language}."
        )
    } else {
        String::new()
    };

    let section_count = match length_label {
        "short" => "- 2-3 main sections with ## (H2) subheadings",
        "medium" => "- 3-4 main sections with ## (H2) subheadings",
        _ => "- 4-6 main sections with ## (H2) subheadings",
    };
    let subsections = if length_label != "short" {
        "- Use ### (H3) for subsections if needed"
    } else {
        ""
    };
    let numbered_lists = if length_label != "short" {
        "- Add numbered lists where relevant"
    } else {
        ""
    };
    let case_studies = if length_label == "long" {
        "- Include detailed examples and case studies where appropriate"
    } else {
        ""
    };
    let trailing_language = if language_code != "en" {
        format!("LANGUAGE: Write everything in {language} ({language_code})")
    } else {
        String::new()
    };

    let tone_label = options.tone.map(|t| t.label()).unwrap_or("conversational");
    let style_label = options.style.map(|s| s.label()).unwrap_or("blog post");

    format!(
        "Write a comprehensive blog post about \"{topic}\" in proper Markdown format.\n\n\
         {language_instruction}\n\n\
         {tone_line}\n\n\
         {style_line}\n\n\
         {length_line}\n\n\
         WORD COUNT TARGET: Approximately {word_count} words ({length_label} length)\n\n\
         Structure the blog post with:\n\
         - A compelling title using # (H1)\n\
         - An engaging introduction paragraph\n\
         {section_count}\n\
         {subsections}\n\
         - Include bullet points using - or *\n\
         - Use **bold** for emphasis and *italics* where appropriate\n\
         {numbered_lists}\n\
         - Include a conclusion section\n\
         - Write in a {tone_label} tone\n\
         - Format as a {style_label}\n\
         - Use proper markdown formatting throughout\n\
         {case_studies}\n\n\
         {trailing_language}\n\n\
         IMPORTANT: Aim for approximately {word_count} words to match the {length_label} \
         length requirement.\n\n\
         Topic: {topic}\n\n\
         Format the response as clean markdown that will render beautifully.",
        tone_line = labeled("TONE", tone_instruction),
        style_line = labeled("STYLE", style_instruction),
        length_line = labeled("LENGTH", length_instruction),
    )
}

fn twitter_prompt(blog_content: &str, options: &TwitterOptions) -> String {
    let thread_length = options
        .thread_length
        .map(|l| l.instruction())
        .unwrap_or("");
    let style = options.style.map(|s| s.instruction()).unwrap_or("");
    let emoji_line = if options.include_emojis {
        "Use relevant emojis to increase engagement"
    } else {
        "Keep text clean without emojis"
    };
    let hashtag_line = if options.include_hashtags {
        "Include 3-5 relevant hashtags at the end"
    } else {
        "Don't include hashtags"
    };

    format!(
        "Transform the following blog post into an engaging Twitter thread.\n\n\
         BLOG CONTENT:\n{blog_content}\n\n\
         REQUIREMENTS:\n\
         - Thread Length: {thread_length}\n\
         - Style: {style}\n\
         - Include Hashtags: {hashtags}\n\
         - Include Emojis: {emojis}\n\
         - Tone: {tone}\n\n\
         INSTRUCTIONS:\n\
         1. Create a compelling hook in the first tweet\n\
         2. Break down the main points into digestible tweets (max 280 characters each)\n\
         3. Use thread numbering (1/n, 2/n, etc.)\n\
         4. End with a strong call-to-action or conclusion\n\
         5. {emoji_line}\n\
         6. {hashtag_line}\n\n\
         Format your response as JSON:\n\
         {{\n\
           \"thread\": [\"Tweet 1 text\", \"Tweet 2 text\", ...],\n\
           \"hashtags\": [\"hashtag1\", \"hashtag2\", ...],\n\
           \"engagement\": \"Brief tip for maximizing engagement\"\n\
         }}\n\n\
         IMPORTANT: Return ONLY the JSON, no additional text.",
        hashtags = options.include_hashtags,
        emojis = options.include_emojis,
        tone = options.tone,
    )
}

fn linkedin_prompt(blog_content: &str, options: &LinkedInOptions) -> String {
    let length = options.length.map(|l| l.instruction()).unwrap_or("");
    let style = options.style.map(|s| s.instruction()).unwrap_or("");
    let cta_line = if options.include_cta {
        "End with a strong call-to-action encouraging engagement"
    } else {
        "End with a thoughtful conclusion"
    };
    let hashtag_line = if options.include_hashtags {
        "Include 3-5 professional hashtags"
    } else {
        "Don't include hashtags"
    };

    format!(
        "Transform the following blog post into a compelling LinkedIn post.\n\n\
         BLOG CONTENT:\n{blog_content}\n\n\
         REQUIREMENTS:\n\
         - Length: {length}\n\
         - Style: {style}\n\
         - Include Hashtags: {hashtags}\n\
         - Include CTA: {cta}\n\
         - Tone: {tone}\n\n\
         INSTRUCTIONS:\n\
         1. Start with a compelling hook that grabs professional attention\n\
         2. Share key insights from the blog post\n\
         3. Add personal perspective or professional experience\n\
         4. Use line breaks for readability\n\
         5. {cta_line}\n\
         6. {hashtag_line}\n\n\
         Format your response as JSON:\n\
         {{\n\
           \"post\": \"Full LinkedIn post content\",\n\
           \"hashtags\": [\"hashtag1\", \"hashtag2\", ...],\n\
           \"cta\": \"Call-to-action text\"\n\
         }}\n\n\
         IMPORTANT: Return ONLY the JSON, no additional text.",
        hashtags = options.include_hashtags,
        cta = options.include_cta,
        tone = options.tone,
    )
}

fn email_prompt(blog_content: &str, options: &EmailOptions) -> String {
    let style = options.style.map(|s| s.instruction()).unwrap_or("");
    let template = options.template.map(|t| t.instruction()).unwrap_or("");
    let personalization_line = if options.personalization {
        "Use personalization tokens like [First Name]"
    } else {
        "Use general greetings"
    };
    let image_line = if options.include_images {
        "Include image placeholders with descriptions"
    } else {
        "Focus on text content"
    };
    let cta_line = if options.include_cta {
        "Include clear call-to-action buttons"
    } else {
        "End with a soft conclusion"
    };

    format!(
        "Transform the following blog post into an email newsletter.\n\n\
         BLOG CONTENT:\n{blog_content}\n\n\
         REQUIREMENTS:\n\
         - Style: {style}\n\
         - Template: {template}\n\
         - Include Images: {images}\n\
         - Include CTA: {cta}\n\
         - Personalization: {personalization}\n\n\
         INSTRUCTIONS:\n\
         1. Create a compelling subject line\n\
         2. Write preview text that appears in email clients\n\
         3. Structure the content with clear sections and headers\n\
         4. {personalization_line}\n\
         5. {image_line}\n\
         6. {cta_line}\n\
         7. Make it mobile-friendly and scannable\n\n\
         Format your response as JSON:\n\
         {{\n\
           \"subject\": \"Email subject line\",\n\
           \"preview\": \"Preview text for email clients\",\n\
           \"content\": \"Full HTML email content\",\n\
           \"cta\": \"Primary call-to-action text\"\n\
         }}\n\n\
         IMPORTANT: Return ONLY the JSON, no additional text.",
        images = options.include_images,
        cta = options.include_cta,
        personalization = options.personalization,
    )
}

fn podcast_prompt(blog_content: &str, options: &PodcastOptions) -> String {
    let style = options.style.map(|s| s.instruction()).unwrap_or("");
    let music_line = if options.include_music {
        "Include music cues and transitions"
    } else {
        "Focus on spoken content"
    };
    let ads_line = if options.include_ads {
        "Include ad break placements"
    } else {
        "Keep content flowing without interruptions"
    };

    format!(
        "Transform the following blog post into a podcast episode script.\n\n\
         BLOG CONTENT:\n{blog_content}\n\n\
         REQUIREMENTS:\n\
         - Style: {style}\n\
         - Duration: {duration} minutes\n\
         - Host Name: {host}\n\
         - Include Music: {music}\n\
         - Include Ads: {ads}\n\n\
         INSTRUCTIONS:\n\
         1. Create an engaging introduction that hooks listeners\n\
         2. Develop a clear episode outline with main talking points\n\
         3. Write natural, conversational script that sounds good when spoken\n\
         4. {music_line}\n\
         5. {ads_line}\n\
         6. End with a strong conclusion and call-to-action\n\
         7. Use the host name \"{host}\" throughout\n\
         8. Include timing estimates for each section\n\n\
         Format your response as JSON:\n\
         {{\n\
           \"intro\": \"Episode introduction script\",\n\
           \"outline\": [\"Main point 1\", \"Main point 2\", ...],\n\
           \"script\": \"Full episode script with timing cues\",\n\
           \"outro\": \"Episode conclusion script\",\n\
           \"duration\": \"Estimated total duration\"\n\
         }}\n\n\
         IMPORTANT: Return ONLY the JSON, no additional text.",
        duration = options.duration,
        host = options.host_name,
        music = options.include_music,
        ads = options.include_ads,
    )
}

fn enhance_prompt(original_topic: &str, options: &EnhanceOptions) -> String {
    format!(
        "You are an expert content strategist and copywriter. Your task is to enhance the \
         given blog topic and create 5 compelling, improved versions.\n\n\
         ORIGINAL TOPIC: \"{original_topic}\"\n\n\
         ENHANCEMENT REQUIREMENTS:\n\
         - Style: {style}\n\
         - Target Audience: {audience}\n\
         - Content Intent: {intent}\n\
         - Content Length: {length}\n\n\
         Please generate exactly 5 enhanced topic suggestions. For each suggestion, provide:\n\
         1. An improved, compelling title\n\
         2. A brief description (1-2 sentences)\n\
         3. A category/type classification\n\
         4. A quality score (1-100)\n\
         5. 3-5 relevant keywords\n\
         6. A brief reasoning for why this enhancement works\n\n\
         Format your response as a JSON array with this exact structure:\n\
         [\n\
           {{\n\
             \"title\": \"Enhanced topic title here\",\n\
             \"description\": \"Brief description of what this blog post would cover\",\n\
             \"category\": \"Content category (e.g., How-to Guide, Trend Analysis, etc.)\",\n\
             \"score\": 85,\n\
             \"keywords\": [\"keyword1\", \"keyword2\", \"keyword3\"],\n\
             \"reasoning\": \"Brief explanation of why this enhancement is effective\"\n\
           }}\n\
         ]\n\n\
         Make sure each suggestion is:\n\
         - More compelling than the original\n\
         - Tailored to the specified audience and intent\n\
         - Optimized for the chosen enhancement style\n\
         - Unique and distinct from the other suggestions\n\
         - Actionable and specific\n\n\
         IMPORTANT: Return ONLY the JSON array, no additional text or formatting.",
        style = options.style.instruction(),
        audience = options.audience.instruction(),
        intent = options.intent.instruction(),
        length = options.length.label(),
    )
}

fn translate_prompt(content: &str, options: &TranslateOptions) -> String {
    let language = &options.target_language;
    format!(
        "Translate the following blog post content to {language} ({code}).\n\n\
         IMPORTANT INSTRUCTIONS:\n\
         - Maintain the original Markdown formatting (headings, lists, bold, italic, etc.)\n\
         - Preserve the structure and organization of the content\n\
         - Use native {language} expressions and idioms where appropriate\n\
         - Ensure cultural relevance for {language} speakers\n\
         - Keep technical terms accurate and appropriate for the target language\n\
         - Maintain the same tone and style as the original\n\
         - Do not add or remove content, only translate\n\n\
         Original content to translate:\n\n\
         {content}\n\n\
         Provide the complete translated content in proper Markdown format.",
        code = options.target_language_code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Length, ThreadStyle, Tone, WritingStyle};

    #[test]
    fn test_prompt_is_deterministic() {
        let task = GenerationTask::BlogPost(BlogOptions {
            tone: Some(Tone::Witty),
            style: Some(WritingStyle::Listicle),
            length: Some(Length::Long),
            ..Default::default()
        });
        assert_eq!(
            build_prompt(&task, "Rust for web developers"),
            build_prompt(&task, "Rust for web developers"),
        );
    }

    #[test]
    fn test_blog_prompt_interpolates_options() {
        let task = GenerationTask::BlogPost(BlogOptions {
            tone: Some(Tone::Professional),
            word_count: Some(1200),
            length: Some(Length::Long),
            ..Default::default()
        });
        let prompt = build_prompt(&task, "Kubernetes");
        assert!(prompt.contains("TONE: Write in a professional"));
        assert!(prompt.contains("Approximately 1200 words (long length)"));
        assert!(prompt.contains("4-6 main sections"));
        assert!(prompt.contains("case studies"));
    }

    #[test]
    fn test_unknown_option_drops_its_line() {
        let with_unknown = GenerationTask::BlogPost(BlogOptions {
            tone: Some(Tone::Other),
            ..Default::default()
        });
        let without = GenerationTask::BlogPost(BlogOptions::default());
        // An unrecognized tone contributes no TONE line at all.
        assert_eq!(
            build_prompt(&with_unknown, "topic"),
            build_prompt(&without, "topic"),
        );
        assert!(!build_prompt(&with_unknown, "topic").contains("TONE:"));
    }

    #[test]
    fn test_non_english_blog_gets_language_directive() {
        let task = GenerationTask::BlogPost(BlogOptions {
            language: Some("Spanish".to_string()),
            language_code: Some("es".to_string()),
            ..Default::default()
        });
        let prompt = build_prompt(&task, "historia");
        assert!(prompt.contains("Write the ENTIRE blog post in Spanish"));
        assert!(prompt.contains("LANGUAGE: Write everything in Spanish (es)"));
    }

    #[test]
    fn test_twitter_prompt_flags() {
        let task = GenerationTask::TwitterThread(TwitterOptions {
            style: Some(ThreadStyle::Tips),
            include_emojis: false,
            ..Default::default()
        });
        let prompt = build_prompt(&task, "# My Post");
        assert!(prompt.contains("Keep text clean without emojis"));
        assert!(prompt.contains("Include 3-5 relevant hashtags"));
        assert!(prompt.contains("BLOG CONTENT:\n# My Post"));
        assert!(prompt.contains("Return ONLY the JSON"));
    }

    #[test]
    fn test_empty_source_is_accepted() {
        let task = GenerationTask::Translation(TranslateOptions {
            target_language: "French".to_string(),
            target_language_code: "fr".to_string(),
        });
        let prompt = build_prompt(&task, "");
        assert!(prompt.contains("Translate the following blog post content to French (fr)"));
    }
}
