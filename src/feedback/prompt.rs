//! Prompt texts sent to the text generator, and the sentences used when it
//! fails.

use crate::core::Locale;

/// Prompt asking for a mentor's comment on a graded attempt.
#[must_use]
pub fn submission_prompt(score: u8, mismatches: &[String], locale: Locale) -> String {
    match locale {
        Locale::Zh => {
            let errors = if mismatches.is_empty() {
                "没有错误".to_string()
            } else {
                mismatches.join("、")
            };
            format!(
                "我正在学习周易八卦。在刚才的拼图互动中，我得到了 {score} 分（总分 100）。\n\
                 我犯了以下错误：{errors}。\n\
                 请以一位睿智而和蔼的国学导师的身份，对我进行点评：\n\
                 1. 鼓励我的学习。\n\
                 2. 针对我的错误，用简单易懂的话语解释相关的卦象、自然规律或节气联系。\n\
                 3. 给出一个关于周易的小知识点作为今日的学习彩蛋。\n\
                 字数控制在200字以内，语气要儒雅。"
            )
        }
        Locale::En => {
            let errors = if mismatches.is_empty() {
                "None".to_string()
            } else {
                mismatches.join(", ")
            };
            format!(
                "I am learning the I Ching. In a recent interactive puzzle, I scored {score} out of 100.\n\
                 Errors I made: {errors}.\n\
                 Please act as a wise and kind I Ching mentor and provide feedback:\n\
                 1. Encourage my learning progress.\n\
                 2. Explain the related trigrams, natural laws, or solar term connections for my mistakes in simple terms.\n\
                 3. Provide a small interesting fact about I Ching as a \"learning egg.\"\n\
                 Keep it under 150 words, using a graceful and scholarly tone."
            )
        }
    }
}

/// Prompt asking for the meaning of one trigram.
#[must_use]
pub fn trigram_prompt(trigram_name: &str, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!("简短解释《易经》中“{trigram_name}”卦的含义、象数特点以及它在现代生活中的启示。"),
        Locale::En => format!(
            "Briefly explain the meaning, symbol characteristics, and modern life insights of the trigram \"{trigram_name}\" in the I Ching."
        ),
    }
}

/// Prompt asking where an idiom comes from and what it teaches.
#[must_use]
pub fn idiom_prompt(idiom: &str, locale: Locale) -> String {
    match locale {
        Locale::Zh => format!(
            "成语“{idiom}”出自《易经》哪里？它的原始卦意是什么？在现代为人处世中有什么智慧启示？字数控制在150字。"
        ),
        Locale::En => format!(
            "Where does the idiom \"{idiom}\" originate in the I Ching? What is its original hexagram meaning? What wisdom does it offer for modern conduct? Limit to 100 words."
        ),
    }
}

// === Fallbacks ===

/// Used when the generator answers with nothing.
#[must_use]
pub const fn empty_response_fallback(locale: Locale) -> &'static str {
    locale.pick(
        "卦象微妙，勤学必有大成。继续加油。",
        "The signs are subtle; diligence leads to greatness. Keep going.",
    )
}

/// Used when the generator fails.
#[must_use]
pub const fn error_fallback(locale: Locale) -> &'static str {
    locale.pick(
        "天行健，君子以自强不息。学习周易是一个循序渐进的过程。",
        "The Heaven moves with vigor; the superior man strengthens himself ceaselessly. Learning I Ching is a step-by-step journey.",
    )
}

#[must_use]
pub const fn trigram_fallback(locale: Locale) -> &'static str {
    locale.pick("易道广大，不可须臾离也。", "The Way of Change is vast and ever-present.")
}

#[must_use]
pub const fn idiom_fallback(locale: Locale) -> &'static str {
    locale.pick("成语中蕴含着深邃的周易智慧。", "Deep wisdom is contained within these idioms.")
}
