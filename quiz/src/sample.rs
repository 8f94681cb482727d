//! Built-in sample quiz covering every question type.

use crate::{Question, Quiz};

pub const SAMPLE_QUIZ_TITLE: &str = "Sample: Mount Everest";

/// One question of each supported type.
#[must_use]
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::Mcq {
            question: "What is the primary goal of creating content on LinkedIn?".to_owned(),
            explanation: "The primary goal is to engage the audience and build professional connections.".to_owned(),
            choices: vec![
                "To drive website traffic".to_owned(),
                "To engage the audience and build professional connections".to_owned(),
                "To increase personal followers".to_owned(),
                "To share personal achievements".to_owned(),
            ],
            answer: Some("To engage the audience and build professional connections".to_owned()),
        },
        Question::Essay {
            question: "Describe the geographical and environmental characteristics of Mount Everest.".to_owned(),
            explanation: "Mount Everest, located in the Himalayas, is the highest mountain on Earth. Its geographical \
                          characteristics include extreme altitude, snow-capped peaks, and challenging climbing \
                          routes. Environmentally, it faces issues like climate change, melting glaciers, and human \
                          impact from tourism."
                .to_owned(),
            keywords: Some(
                ["Himalayas", "altitude", "snow-capped", "climate change", "glaciers", "tourism impact"]
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            ),
        },
        Question::Fitb {
            question: "Mount Everest is located in the _______________________ mountain range.".to_owned(),
            explanation: "Mount Everest is situated in the Himalayan mountain range in Asia.".to_owned(),
            answer: Some("Himalayan".to_owned()),
            keywords: None,
        },
        Question::Tf {
            question: "Mount Everest is the highest mountain in the world.".to_owned(),
            explanation: "Mount Everest, located in the Himalayas on the border between Nepal and Tibet, China, is \
                          widely recognized as the highest mountain in the world, with a peak at 8,848.86 meters \
                          (29,031.7 feet) above sea level."
                .to_owned(),
            answer: Some(true),
        },
        Question::Sata {
            question: "Which of the following are true about Mount Everest?".to_owned(),
            explanation: "Mount Everest is known for being the highest mountain above sea level, located in the \
                          Himalayas on the border between Nepal and Tibet, China. Climbing routes exist on both the \
                          Nepalese side and the Tibetan side."
                .to_owned(),
            choices: vec![
                "It is located entirely in Nepal.".to_owned(),
                "It is the highest mountain above sea level.".to_owned(),
                "The mountain has a climbing route from the Tibetan side.".to_owned(),
                "It is considered the most difficult mountain to climb.".to_owned(),
            ],
            answer: Some(vec![
                "It is the highest mountain above sea level.".to_owned(),
                "The mountain has a climbing route from the Tibetan side.".to_owned(),
            ]),
        },
    ]
}

/// The sample questions wrapped in a quiz record.
#[must_use]
pub fn sample_quiz(id: impl Into<String>, created_at: i64) -> Quiz {
    Quiz::new(id, SAMPLE_QUIZ_TITLE, created_at, sample_questions())
}
