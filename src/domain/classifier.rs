//! Keyword-based mood classification
//!
//! Each of the five emotional moods owns a small keyword list. A keyword
//! counts once if it appears anywhere in the text as a case-insensitive
//! substring, so "unhappy" also registers the `happy` keyword. The mood with
//! the most matching keywords wins; ties go to the mood declared first.
//!
//! # Examples
//!
//! ```
//! use moodj::domain::classifier::classify;
//! use moodj::domain::Mood;
//!
//! assert_eq!(classify("I am happy and proud today"), Mood::Happy);
//! assert_eq!(classify("nothing special happened"), Mood::Neutral);
//! ```

use crate::domain::Mood;

const HAPPY_WORDS: &[&str] = &[
    "happy", "joy", "excited", "wonderful", "great", "amazing", "love", "proud",
];
const SAD_WORDS: &[&str] = &[
    "sad",
    "unhappy",
    "depressed",
    "miserable",
    "cry",
    "tears",
    "heartbroken",
];
const ANGRY_WORDS: &[&str] = &[
    "angry",
    "mad",
    "furious",
    "rage",
    "upset",
    "frustrated",
    "annoyed",
];
const ANXIOUS_WORDS: &[&str] = &[
    "anxious", "worried", "nervous", "stress", "fear", "dread", "panic",
];
const EXHAUSTED_WORDS: &[&str] = &[
    "tired",
    "exhausted",
    "drained",
    "fatigue",
    "weary",
    "sleepy",
];

/// Keyword sets in declaration (tie-break) order
const KEYWORD_SETS: [(Mood, &[&str]); 5] = [
    (Mood::Happy, HAPPY_WORDS),
    (Mood::Sad, SAD_WORDS),
    (Mood::Angry, ANGRY_WORDS),
    (Mood::Anxious, ANXIOUS_WORDS),
    (Mood::Exhausted, EXHAUSTED_WORDS),
];

const HAPPY_REFLECTION: &str = "Your journal radiates positivity and joy! I can feel your happiness through your words. This is a wonderful moment to cherish and remember during challenging times. Keep embracing these positive feelings!";
const SAD_REFLECTION: &str = "I sense some sadness in your writing. Remember that it's okay to feel this way sometimes. These emotions are valid and important. Consider what might bring you comfort right now, and be gentle with yourself.";
const ANGRY_REFLECTION: &str = "I notice feelings of frustration and anger in your journal. These are normal emotions that deserve acknowledgment. Try to identify what triggered these feelings and consider constructive ways to address the situation.";
const ANXIOUS_REFLECTION: &str = "Your journal suggests you might be feeling anxious or worried. Remember to take deep breaths and focus on what's within your control. Consider writing down specific concerns and potential solutions.";
const EXHAUSTED_REFLECTION: &str = "I can tell you're feeling tired and drained. Your body and mind might be signaling that you need rest. Consider taking some time for self-care and recovery. Small breaks can make a big difference.";
const NEUTRAL_REFLECTION: &str = "Your journal has a balanced tone today. This could be a good time for reflection and planning. Consider what areas of your life feel satisfying and which ones might need more attention.";

/// Keywords registered for a mood (empty for `Neutral`)
pub fn keywords(mood: Mood) -> &'static [&'static str] {
    KEYWORD_SETS
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Count distinct matching keywords per mood, in declaration order
pub fn keyword_scores(content: &str) -> [(Mood, usize); 5] {
    let lowered = content.to_lowercase();
    KEYWORD_SETS.map(|(mood, words)| {
        let count = words.iter().filter(|word| lowered.contains(*word)).count();
        (mood, count)
    })
}

/// Classify free text into a mood label
pub fn classify(content: &str) -> Mood {
    let mut scores = keyword_scores(content);

    // Stable: equal counts keep declaration order.
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    match scores[0] {
        (mood, count) if count > 0 => mood,
        _ => Mood::Neutral,
    }
}

/// Canned reflection paragraph for a mood
pub fn reflection_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => HAPPY_REFLECTION,
        Mood::Sad => SAD_REFLECTION,
        Mood::Angry => ANGRY_REFLECTION,
        Mood::Anxious => ANXIOUS_REFLECTION,
        Mood::Exhausted => EXHAUSTED_REFLECTION,
        Mood::Neutral => NEUTRAL_REFLECTION,
    }
}

/// A mood together with its reflection, produced by one classification call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub mood: Mood,
    pub reflection: &'static str,
}

impl Classification {
    /// Classify content and attach the matching reflection
    pub fn of(content: &str) -> Self {
        Self::from_mood(classify(content))
    }

    pub fn from_mood(mood: Mood) -> Self {
        Classification {
            mood,
            reflection: reflection_for(mood),
        }
    }
}
