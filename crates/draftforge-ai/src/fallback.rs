//! Deterministic fallback payloads.
//!
//! Substituted whenever a provider reply cannot be parsed or fails shape
//! validation. Each fallback is shape-identical to a genuinely parsed payload
//! and is parameterized by the original input where the template calls for it.

use crate::payload::{
    EmailPayload, LinkedInPayload, PodcastPayload, TaskPayload, TopicSuggestion, TwitterPayload,
};
use crate::task::{EmailOptions, EnhanceOptions, GenerationTask, PodcastOptions};

/// Build the fallback payload for a task, using the original source content
/// where the template needs it.
pub fn fallback_payload(task: &GenerationTask, source_content: &str) -> TaskPayload {
    match task {
        // Markdown-shaped tasks never reach the fallback path (the stripped
        // text itself is the payload), but the stripped raw text is still the
        // right substitute if they ever do.
        GenerationTask::BlogPost(_) | GenerationTask::Translation(_) => {
            TaskPayload::Markdown(source_content.to_string())
        }
        GenerationTask::TwitterThread(_) => TaskPayload::Twitter(twitter_fallback()),
        GenerationTask::LinkedInPost(_) => TaskPayload::LinkedIn(linkedin_fallback()),
        GenerationTask::EmailNewsletter(options) => TaskPayload::Email(email_fallback(options)),
        GenerationTask::PodcastScript(options) => {
            TaskPayload::Podcast(podcast_fallback(options))
        }
        GenerationTask::TopicEnhancement(options) => {
            TaskPayload::Suggestions(suggestion_fallback(source_content, options))
        }
    }
}

pub fn twitter_fallback() -> TwitterPayload {
    TwitterPayload {
        thread: vec![
            "🧵 Thread about the key insights from this blog post:".to_string(),
            "The main topic covers important aspects that everyone should know about.".to_string(),
            "Here are the key takeaways that can help you understand better.".to_string(),
            "These insights can be applied in your daily work and life.".to_string(),
            "What's your experience with this topic? Share your thoughts below! 👇".to_string(),
        ],
        hashtags: vec![
            "insights".to_string(),
            "learning".to_string(),
            "growth".to_string(),
            "tips".to_string(),
        ],
        engagement: "Ask questions to encourage replies and engagement".to_string(),
    }
}

pub fn linkedin_fallback() -> LinkedInPayload {
    LinkedInPayload {
        post: "I recently came across some valuable insights that I wanted to share with my \
               network.\n\nThe key takeaways from this topic are:\n\n\
               ✅ Understanding the fundamentals is crucial\n\
               ✅ Practical application makes all the difference\n\
               ✅ Continuous learning drives success\n\n\
               These insights have shaped my perspective on professional growth.\n\n\
               What's your experience with this? I'd love to hear your thoughts in the comments."
            .to_string(),
        hashtags: vec![
            "professional".to_string(),
            "growth".to_string(),
            "insights".to_string(),
            "learning".to_string(),
        ],
        cta: "Share your thoughts in the comments below!".to_string(),
    }
}

pub fn email_fallback(options: &EmailOptions) -> EmailPayload {
    let greeting = if options.personalization {
        "Hi [First Name],"
    } else {
        "Hello,"
    };
    let cta_block = if options.include_cta {
        "<p><a href=\"#\">Read Full Article</a></p>"
    } else {
        ""
    };

    EmailPayload {
        subject: "Important insights you shouldn't miss".to_string(),
        preview: "Key takeaways and actionable advice inside...".to_string(),
        content: format!(
            "<h1>Weekly Insights Newsletter</h1>\
             <p>{greeting}<br><br>I hope this email finds you well. This week, I wanted to \
             share some valuable insights that could help you in your journey.</p>\
             <h2>Key Takeaways</h2>\
             <ul>\
             <li>Understanding the fundamentals is crucial for success</li>\
             <li>Practical application makes all the difference</li>\
             <li>Continuous learning drives long-term growth</li>\
             </ul>\
             {cta_block}\
             <p>Thank you for reading! Feel free to reply with your thoughts.</p>"
        ),
        cta: "Read Full Article".to_string(),
    }
}

pub fn podcast_fallback(options: &PodcastOptions) -> PodcastPayload {
    let host = &options.host_name;
    let intro_music = if options.include_music {
        "[INTRO MUSIC FADES IN]\n\n"
    } else {
        ""
    };
    let intro_music_out = if options.include_music {
        "\n\n[MUSIC FADES OUT]"
    } else {
        ""
    };
    let ad_break = if options.include_ads {
        "[AD BREAK - 30 seconds]\n\n"
    } else {
        ""
    };
    let closing_minute = options.duration.split('-').next().unwrap_or("10");

    PodcastPayload {
        intro: format!(
            "{intro_music}Welcome to today's episode! I'm {host}, and I'm excited to dive \
             into some fascinating insights with you today.{intro_music_out}"
        ),
        outline: vec![
            "Introduction to the main topic".to_string(),
            "Key insight #1 and practical applications".to_string(),
            "Key insight #2 with real-world examples".to_string(),
            "Key insight #3 and actionable takeaways".to_string(),
            "Conclusion and next steps".to_string(),
        ],
        script: format!(
            "[00:00] {intro_music}Welcome everyone! I'm {host}, and today we're exploring \
             some really valuable insights that I think will help you in your journey.\n\n\
             [01:00] Let me start by sharing the main concept we'll be discussing today...\n\n\
             [02:30] The first key point I want to highlight is absolutely crucial for \
             understanding this topic...\n\n\
             [05:00] {ad_break}Now, moving on to our second major point...\n\n\
             [08:00] This brings us to something really interesting that I think you'll \
             find valuable...\n\n\
             [12:00] Finally, let's talk about how you can actually apply these insights \
             in your own situation...\n\n\
             [{closing_minute}:00] That wraps up our discussion for today. I hope these \
             insights have been helpful for you."
        ),
        outro: format!(
            "Thanks for tuning in today! If you found this episode valuable, please \
             subscribe and share it with someone who might benefit.{music_in}\n\n\
             Until next time, keep learning and growing. This is {host} signing \
             off!{music_out}",
            music_in = if options.include_music {
                "\n\n[OUTRO MUSIC FADES IN]"
            } else {
                ""
            },
            music_out = if options.include_music {
                "\n\n[MUSIC FADES OUT]"
            } else {
                ""
            },
        ),
        duration: format!("{} minutes", options.duration),
    }
}

pub fn suggestion_fallback(topic: &str, options: &EnhanceOptions) -> Vec<TopicSuggestion> {
    let topic_lower = topic.to_lowercase();
    let base_title = format!(
        "{} {} {}",
        options.style.title_modifier(),
        topic,
        options.audience.title_modifier(),
    );

    vec![
        TopicSuggestion {
            id: "1".to_string(),
            title: base_title,
            description: format!(
                "Comprehensive coverage of {topic_lower} tailored for {}.",
                options.audience.label()
            ),
            category: "Enhanced Guide".to_string(),
            score: 88,
            keywords: vec![
                topic_lower.clone(),
                options.style.label().to_string(),
                options.audience.label().to_string(),
                "guide".to_string(),
            ],
            reasoning: format!(
                "Optimized for {} style targeting {} audience.",
                options.style.label(),
                options.audience.label(),
            ),
        },
        TopicSuggestion {
            id: "2".to_string(),
            title: format!("{topic}: Common Mistakes and How to Avoid Them"),
            description: format!(
                "Learn from common pitfalls and discover best practices in {topic_lower}."
            ),
            category: "Problem-Solution".to_string(),
            score: 85,
            keywords: vec![
                "mistakes".to_string(),
                "avoid".to_string(),
                "best practices".to_string(),
                topic_lower.clone(),
            ],
            reasoning: "Addresses pain points and provides valuable solutions.".to_string(),
        },
        TopicSuggestion {
            id: "3".to_string(),
            title: format!("The Future of {topic}: Trends and Predictions"),
            description: format!(
                "Explore emerging trends and future developments in {topic_lower}."
            ),
            category: "Trend Analysis".to_string(),
            score: 82,
            keywords: vec![
                "future".to_string(),
                "trends".to_string(),
                "predictions".to_string(),
                topic_lower,
            ],
            reasoning: "Leverages interest in future predictions and trending topics."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Audience, EnhanceStyle, Intent, Length};

    #[test]
    fn test_suggestion_fallback_embeds_topic() {
        let options = EnhanceOptions {
            style: EnhanceStyle::Seo,
            audience: Audience::Beginners,
            intent: Intent::Educate,
            length: Length::Short,
        };
        let suggestions = suggestion_fallback("Rust Macros", &options);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(
            suggestions[0].title,
            "Complete 2024 Guide: Rust Macros for Beginners"
        );
        assert_eq!(suggestions[1].id, "2");
        assert!(suggestions[2].title.contains("The Future of Rust Macros"));
    }

    #[test]
    fn test_podcast_fallback_respects_flags() {
        let options = PodcastOptions {
            include_music: false,
            include_ads: true,
            host_name: "Sam".to_string(),
            duration: "20-30".to_string(),
            ..Default::default()
        };
        let payload = podcast_fallback(&options);
        assert!(!payload.intro.contains("[INTRO MUSIC"));
        assert!(payload.script.contains("[AD BREAK - 30 seconds]"));
        assert!(payload.script.contains("[20:00]"));
        assert!(payload.outro.contains("This is Sam signing off!"));
        assert_eq!(payload.duration, "20-30 minutes");
    }

    #[test]
    fn test_email_fallback_personalization() {
        let personalized = email_fallback(&EmailOptions {
            personalization: true,
            ..Default::default()
        });
        assert!(personalized.content.contains("Hi [First Name],"));

        let generic = email_fallback(&EmailOptions::default());
        assert!(generic.content.contains("Hello,"));
    }
}
