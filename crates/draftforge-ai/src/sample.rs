//! Offline sample blog post.
//!
//! Deterministic, provider-free substitute used as the remediation path when
//! the provider is unavailable (auth or quota failures). Sample copy exists
//! for English, Spanish and French; unknown language codes fall back to
//! English.

use crate::task::{BlogOptions, Tone};

fn tone_adjustment(tone: Option<Tone>) -> &'static str {
    match tone {
        Some(Tone::Professional) => "formal and business-focused",
        Some(Tone::Witty) => "humorous and entertaining",
        Some(Tone::Inspirational) => "motivating and uplifting",
        Some(Tone::Technical) => "detailed and precise",
        Some(Tone::SeoOptimized) => "search-engine optimized",
        _ => "conversational and friendly",
    }
}

/// Build a sample blog post for a topic without calling the provider.
pub fn sample_blog(topic: &str, options: &BlogOptions) -> String {
    let tone = tone_adjustment(options.tone);
    let word_count = options.word_count_target();
    let length = options.length_label();

    match options.language_code() {
        "es" => format!(
            "# {topic}: Una Guía Completa\n\n\
             ## Introducción\n\n\
             Bienvenido a esta **guía completa** sobre *{topic}*. En el mundo actual que \
             evoluciona rápidamente, entender {topic} se ha vuelto cada vez más importante \
             tanto para individuos como para empresas.\n\n\
             Esta guía te llevará a través de todo lo que necesitas saber, desde lo básico \
             hasta conceptos avanzados, asegurando que tengas una base sólida sobre la cual \
             construir. Exploraremos este tema con un enfoque {tone}.\n\n\
             ## Por Qué {topic} Importa\n\n\
             {topic} juega un papel crucial en nuestras vidas diarias. Aquí hay algunas \
             razones clave por las que deberías preocuparte por {topic}:\n\n\
             - **Relevancia**: {topic} impacta directamente cómo abordamos los desafíos modernos\n\
             - **Innovación**: Entender {topic} abre puertas a nuevas oportunidades\n\
             - **Preparación para el futuro**: El conocimiento de {topic} nos prepara para lo que viene\n\
             - **Ventaja competitiva**: Mantenerse informado te da una ventaja en tu campo\n\n\
             ## Conclusión\n\n\
             {topic} es un **tema fascinante e importante** que merece nuestra atención. Ya \
             sea que estés comenzando o buscando profundizar tu conocimiento, recuerda que \
             aprender sobre {topic} es un *viaje continuo*.\n\n\
             ---\n\n\
             *Nota: Esta es una publicación de blog de muestra {length} (~{word_count} \
             palabras) generada con tono {tone} debido a limitaciones de la API.*"
        ),
        "fr" => format!(
            "# {topic}: Un Guide Complet\n\n\
             ## Introduction\n\n\
             Bienvenue dans ce **guide complet** sur *{topic}*. Dans le monde d'aujourd'hui \
             qui évolue rapidement, comprendre {topic} est devenu de plus en plus important \
             pour les individus et les entreprises.\n\n\
             Ce guide vous guidera à travers tout ce que vous devez savoir, des bases aux \
             concepts avancés, en vous assurant d'avoir une base solide sur laquelle \
             construire. Nous explorerons ce sujet avec une approche {tone}.\n\n\
             ## Pourquoi {topic} Compte\n\n\
             {topic} joue un rôle crucial dans nos vies quotidiennes. Voici quelques raisons \
             clés pour lesquelles vous devriez vous soucier de {topic}:\n\n\
             - **Pertinence**: {topic} impacte directement la façon dont nous abordons les défis modernes\n\
             - **Innovation**: Comprendre {topic} ouvre des portes à de nouvelles opportunités\n\
             - **Préparation à l'avenir**: La connaissance de {topic} nous prépare à ce qui nous attend\n\
             - **Avantage concurrentiel**: Rester informé vous donne un avantage dans votre domaine\n\n\
             ## Conclusion\n\n\
             {topic} est un **sujet fascinant et important** qui mérite notre attention. Que \
             vous commenciez ou cherchiez à approfondir vos connaissances, rappelez-vous \
             qu'apprendre sur {topic} est un *voyage continu*.\n\n\
             ---\n\n\
             *Note: Ceci est un exemple d'article de blog {length} (~{word_count} mots) \
             généré avec un ton {tone} en raison des limitations de l'API.*"
        ),
        _ => format!(
            "# {topic}: A Comprehensive Guide\n\n\
             ## Introduction\n\n\
             Welcome to this **comprehensive guide** about *{topic}*. In today's rapidly \
             evolving world, understanding {topic} has become increasingly important for \
             both individuals and businesses alike.\n\n\
             This guide will walk you through everything you need to know, from the basics \
             to advanced concepts, ensuring you have a solid foundation to build upon. \
             We'll explore this topic with a {tone} approach.\n\n\
             ## Why {topic} Matters\n\n\
             {topic} plays a crucial role in our daily lives. Here are some key reasons why \
             you should care about {topic}:\n\n\
             - **Relevance**: {topic} directly impacts how we approach modern challenges\n\
             - **Innovation**: Understanding {topic} opens doors to new opportunities\n\
             - **Future-proofing**: Knowledge of {topic} prepares us for what's ahead\n\
             - **Competitive advantage**: Staying informed gives you an edge in your field\n\n\
             ## Conclusion\n\n\
             {topic} is a **fascinating and important subject** that deserves our attention. \
             Whether you're just starting out or looking to deepen your knowledge, remember \
             that learning about {topic} is an *ongoing journey*.\n\n\
             ---\n\n\
             *Note: This is a sample {length} blog post (~{word_count} words) generated \
             with {tone} tone due to API limitations.*"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Length;

    #[test]
    fn test_sample_is_deterministic_and_embeds_topic() {
        let options = BlogOptions::default();
        let first = sample_blog("Solar Energy", &options);
        assert_eq!(first, sample_blog("Solar Energy", &options));
        assert!(first.starts_with("# Solar Energy: A Comprehensive Guide"));
        assert!(first.contains("~700 words"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let options = BlogOptions {
            language_code: Some("de".to_string()),
            ..Default::default()
        };
        assert!(sample_blog("Topic", &options).contains("A Comprehensive Guide"));
    }

    #[test]
    fn test_spanish_sample_and_tone() {
        let options = BlogOptions {
            tone: Some(Tone::Professional),
            length: Some(Length::Short),
            language_code: Some("es".to_string()),
            ..Default::default()
        };
        let content = sample_blog("Historia", &options);
        assert!(content.starts_with("# Historia: Una Guía Completa"));
        assert!(content.contains("formal and business-focused"));
        assert!(content.contains("muestra short"));
    }
}
