//! Prompt construction for Instagram post generation

/// JSON fields the model is asked to produce, in prompt order
pub const POST_FIELDS: [&str; 3] = ["legenda", "hashtags", "sugestao_imagem"];

/// Number of hashtags the model is asked for
pub const HASHTAG_COUNT: usize = 10;

/// Build the generation instruction for a topic.
///
/// The topic is interpolated verbatim; nothing is escaped.
pub fn build_post_prompt(topic: &str) -> String {
    format!(
        r#"Aja como um especialista em social media para uma agência de marketing digital.
Crie um post completo para o Instagram sobre o seguinte tema: '{topic}'.
O post deve ser otimizado para engajamento.

Por favor, gere uma resposta no formato JSON contendo os seguintes campos:
- "{caption}": Um texto cativante e informativo para a legenda, com quebras de linha usando '\n'.
- "{hashtags}": Uma string com as {hashtag_count} melhores hashtags para este post, separadas por espaço.
- "{image}": Uma descrição detalhada para uma imagem que combine com o post, para ser usada em uma ferramenta de IA de geração de imagem como Midjourney ou DALL-E."#,
        caption = POST_FIELDS[0],
        hashtags = POST_FIELDS[1],
        image = POST_FIELDS[2],
        hashtag_count = HASHTAG_COUNT,
    )
}
